/// Default base URL of the REST API
pub const DEFAULT_API_BASE_URL: &str = "https://api.warframe.market/v1";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "wm-client/0.3.0";
/// Header carrying the platform option
pub const HEADER_PLATFORM: &str = "Platform";
/// Header carrying the language option
pub const HEADER_LANGUAGE: &str = "Language";
/// Header carrying the session token
pub const HEADER_AUTHORIZATION: &str = "Authorization";
/// Query parameter carrying the include directive
pub const QUERY_INCLUDE: &str = "include";
