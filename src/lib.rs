/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/10/26
******************************************************************************/

//! # wm-client
//!
//! A typed client for the warframe.market REST API.
//!
//! The crate fetches items, their tradable variants, buy/sell orders and
//! trading statistics, and converts the returned JSON into strongly typed
//! values. It is built around two pieces:
//!
//! - a **structural decoder** ([`model::decode`]) that turns untyped JSON into
//!   records declared with the [`record!`] macro, reporting the exact field path
//!   of any mismatch;
//! - a **response composer** ([`model::responses`]) that extracts the relevant
//!   sub-trees from an API envelope, normalizes locale keys, resolves the
//!   requested item inside its item set and assembles the final value.
//!
//! ## Example
//!
//! ```ignore
//! use wm_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! match client
//!     .get_item_orders("ash_prime_set", Some(Platform::Pc), Some(IncludeOption::Item))
//!     .await?
//! {
//!     ItemOrders::WithItem { orders, item } => {
//!         println!("{} orders for {}", orders.len(), item.item.en.item_name);
//!     }
//!     ItemOrders::Orders(orders) => println!("{} orders", orders.len()),
//! }
//! ```

/// Client, configuration and service interfaces
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Decoder, key normalizer, response composer and HTTP transport
pub mod model;
/// Convenient re-exports
pub mod prelude;
/// Typed domain models returned by the API
pub mod presentation;
/// Session credentials for authenticated requests
pub mod session;
/// Logging and environment helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
