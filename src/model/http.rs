/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::requests::ApiRequest;
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Performs API requests and hands back the parsed JSON envelope
///
/// Implementations own headers, query parameters and status handling. A
/// returned `Ok` always holds the body of a successful response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `request` and returns the parsed JSON body
    async fn send(&self, request: &ApiRequest) -> Result<Value, AppError>;
}

/// reqwest-backed [`Transport`]
#[derive(Clone)]
pub struct HttpClient {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl HttpClient {
    /// Creates a new HTTP transport
    ///
    /// # Arguments
    /// * `config` - Configuration holding the base URL and timeout
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to send requests
    /// * `Err(AppError)` - If the underlying reqwest client cannot be built
    pub fn new(config: Arc<Config>) -> Result<Self, AppError> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.config.rest_api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &ApiRequest) -> Result<Value, AppError> {
        let url = self.url(&request.path);
        debug!("{} {}", Method::GET, url);

        let mut builder = self
            .http_client
            .request(Method::GET, &url)
            .header("Accept", "application/json");
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        let response = builder.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        match status {
            s if s.is_success() => Ok(response.json::<Value>().await?),
            StatusCode::UNAUTHORIZED => {
                error!("Unauthorized: {}", url);
                Err(AppError::Unauthorized)
            }
            StatusCode::NOT_FOUND => Err(AppError::NotFound(request.path.clone())),
            StatusCode::TOO_MANY_REQUESTS => {
                error!("Rate limit exceeded: {}", url);
                Err(AppError::RateLimitExceeded)
            }
            _ => {
                let body = response.text().await.unwrap_or_default();
                error!("Request failed with status {}: {}", status, body);
                Err(AppError::Unexpected(status))
            }
        }
    }
}
