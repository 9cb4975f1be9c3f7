/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::constants::{HEADER_LANGUAGE, HEADER_PLATFORM, QUERY_INCLUDE};
use crate::presentation::common::{IncludeOption, Language, Platform};

/// A GET request against the API, relative to the configured base URL
///
/// Options left as `None` are not sent at all: no header or query key is
/// added for them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiRequest {
    /// Path below the base URL, e.g. `/items/ash_prime_set`
    pub path: String,
    /// Request headers
    pub headers: Vec<(String, String)>,
    /// Query parameters
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Creates a request for `path`
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Adds a header
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a query parameter
    #[must_use]
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Sets the `Platform` header when `platform` is set
    #[must_use]
    pub fn platform(self, platform: Option<Platform>) -> Self {
        match platform {
            Some(p) => self.header(HEADER_PLATFORM, p.as_str()),
            None => self,
        }
    }

    /// Sets the `Language` header when `language` is set
    #[must_use]
    pub fn language(self, language: Option<Language>) -> Self {
        match language {
            Some(l) => self.header(HEADER_LANGUAGE, l.as_str()),
            None => self,
        }
    }

    /// Sets the `include` query parameter when `include` is set
    #[must_use]
    pub fn include(self, include: Option<IncludeOption>) -> Self {
        match include {
            Some(i) => self.query(QUERY_INCLUDE, i.as_str()),
            None => self,
        }
    }

    /// Value of header `name`, compared case-insensitively
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Value of query parameter `name`
    #[must_use]
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}
