/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{HEADER_AUTHORIZATION, HEADER_LANGUAGE, HEADER_PLATFORM};
use crate::error::AppError;
use crate::model::decode::{FieldPath, Fields, Shape};
use crate::model::requests::ApiRequest;
use crate::presentation::common::{Language, Platform};
use crate::record;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;
use serde_json::Value;

record! {
    /// The signed-in user, as returned in `payload.user` by the sign-in endpoint
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct SessionUser {
        /// User identifier
        pub id: String,
        /// In-game name; may be unset for fresh accounts
        pub ingame_name: Option<String>,
        /// Platform the account trades on
        pub platform: Platform,
        /// Preferred locale
        pub locale: Option<Language>,
        /// Trading region
        pub region: Option<String>,
        /// Reputation score
        pub reputation: Option<i64>,
    }
}

/// Credentials of a signed-in user
///
/// Obtaining the token is outside this crate; a session only carries it and
/// turns it into request headers.
#[derive(Debug, Clone, PartialEq)]
pub struct WmSession {
    /// JWT issued by the server
    pub jwt: String,
    /// The signed-in user
    pub user: SessionUser,
}

impl WmSession {
    /// Creates a session from a token and its user
    #[must_use]
    pub fn new(jwt: impl Into<String>, user: SessionUser) -> Self {
        Self {
            jwt: jwt.into(),
            user,
        }
    }

    /// Creates a session from a token and the sign-in response envelope
    ///
    /// # Arguments
    /// * `jwt` - Token taken from the sign-in response
    /// * `envelope` - Body of the sign-in response, holding `payload.user`
    pub fn from_envelope(jwt: impl Into<String>, envelope: &Value) -> Result<Self, AppError> {
        let payload = Fields::new(envelope, &FieldPath::root(), Shape::Object)?.object("payload")?;
        let user: SessionUser = payload.get("user")?;
        Ok(Self::new(jwt, user))
    }

    /// In-game name of the signed-in user, exactly as the server returned it
    ///
    /// Surrounding whitespace only matters for the blank check.
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If the name is missing or blank
    pub fn ingame_name(&self) -> Result<&str, AppError> {
        match self.user.ingame_name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(AppError::InvalidInput(
                "`ingame_name` of session is missing or blank".to_string(),
            )),
        }
    }

    /// Adds the session headers to `request`
    #[must_use]
    pub fn authorize(&self, request: ApiRequest) -> ApiRequest {
        let request = request
            .header(HEADER_AUTHORIZATION, format!("JWT {}", self.jwt))
            .header(HEADER_PLATFORM, self.user.platform.as_str());
        match self.user.locale {
            Some(locale) => request.header(HEADER_LANGUAGE, locale.as_str()),
            None => request,
        }
    }
}
