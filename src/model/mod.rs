/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/
/// Type-directed JSON decoder
pub mod decode;
/// HTTP transport
pub mod http;
/// Locale key normalization for item sets
pub mod normalize;
/// Request description with optional headers and query
pub mod requests;
/// Response composition for each endpoint
pub mod responses;
