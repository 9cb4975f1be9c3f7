/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # wm-client Prelude
//!
//! Re-exports the types and traits needed for most interactions with the
//! warframe.market API.
//!
//! ## Usage
//!
//! ```rust
//! use wm_client::prelude::*;
//!
//! let config = Config::with_base_url("https://api.warframe.market/v1");
//! let client = Client::new(config).unwrap();
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the API client
pub use crate::config::{Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{AppError, DecodeError, DecodeErrorKind, WmResult};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementing every service
pub use crate::application::client::Client;

/// Service traits
pub use crate::application::interfaces::item::ItemService;
pub use crate::application::interfaces::order::OrderService;
pub use crate::application::interfaces::statistic::StatisticService;

/// Session credentials
pub use crate::session::interface::{SessionUser, WmSession};

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport trait and its HTTP implementation
pub use crate::model::http::{HttpClient, Transport};

/// Request description
pub use crate::model::requests::ApiRequest;

// ============================================================================
// DECODING AND COMPOSITION
// ============================================================================

/// Structural decoder
pub use crate::model::decode::{Decode, FieldPath, FieldSpec, Record, Shape, decode};

/// Key normalizer
pub use crate::model::normalize::{normalize_keys, normalize_variant};

/// Composed results
pub use crate::model::responses::{ItemDetail, ItemOrders, UserOrders};

// ============================================================================
// MODELS
// ============================================================================

/// Request options
pub use crate::presentation::common::{IncludeOption, Language, Platform};

/// Items
pub use crate::presentation::item::{
    DropSource, IconFormat, ItemFull, ItemShort, LangInItem, Rarity,
};

/// Orders
pub use crate::presentation::order::{
    ItemInOrder, ItemNameInLocale, OrderItem, OrderRow, OrderType, UserShort, UserStatus,
};

/// Statistics
pub use crate::presentation::statistic::{Statistic, StatisticClosed, StatisticLive};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, Utc};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
