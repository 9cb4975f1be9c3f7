/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::presentation::common::Platform;
use crate::{impl_decode_for_enum, record};
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Order side
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// The owner wants to buy
    Buy,
    /// The owner wants to sell
    Sell,
}

/// Presence of a trader
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Online and in game
    Ingame,
    /// Online on the site
    Online,
    /// Offline
    Offline,
}

impl OrderType {
    /// Value used on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Buy => "buy",
            OrderType::Sell => "sell",
        }
    }
}

impl UserStatus {
    /// Value used on the wire
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Ingame => "ingame",
            UserStatus::Online => "online",
            UserStatus::Offline => "offline",
        }
    }
}

impl_decode_for_enum!(OrderType, UserStatus);

record! {
    /// Public profile summary of the owner of an order
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct UserShort {
        /// User identifier
        pub id: String,
        /// In-game name
        pub ingame_name: String,
        /// Current presence
        pub status: UserStatus,
        /// Trading region
        pub region: String,
        /// Reputation score
        pub reputation: i64,
        /// Avatar path
        pub avatar: Option<String>,
        /// Last time the user was seen
        pub last_seen: Option<DateTime<Utc>>,
    }
}

record! {
    /// An order listed for one item (`/items/{url_name}/orders`)
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct OrderRow {
        /// Order identifier
        pub id: String,
        /// Unit price in platinum
        pub platinum: i64,
        /// Quantity offered or wanted
        pub quantity: i64,
        /// Buy or sell
        pub order_type: OrderType,
        /// Platform of the order
        pub platform: Platform,
        /// Trading region
        pub region: String,
        /// Creation time
        pub creation_date: DateTime<Utc>,
        /// Last modification time
        pub last_update: DateTime<Utc>,
        /// Whether the order is publicly visible
        pub visible: bool,
        /// Owner of the order
        pub user: UserShort,
        /// Mod rank, for mods
        pub mod_rank: Option<i64>,
        /// Subtype, e.g. relic refinement
        pub subtype: Option<String>,
    }
}

record! {
    /// Item name in one locale, as embedded in a user's orders
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct ItemNameInLocale {
        /// Localized name
        pub item_name: String,
    }
}

record! {
    /// Item summary embedded in a user's orders
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct ItemInOrder {
        /// Item identifier
        pub id: String,
        /// URL-safe unique name
        pub url_name: String,
        /// Icon path
        pub icon: String,
        /// Thumbnail path
        pub thumb: String,
        /// Secondary icon, e.g. for set parts
        pub sub_icon: Option<String>,
        /// Maximum rank for mods
        pub mod_max_rank: Option<i64>,
        /// Tags
        pub tags: Vec<String>,
        /// Ducat value
        pub ducats: Option<i64>,
        /// Copies needed to complete the set
        pub quantity_for_set: Option<i64>,
        /// English name
        pub en: ItemNameInLocale,
    }
}

record! {
    /// An order listed for one user (`/profile/{username}/orders`)
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct OrderItem {
        /// Order identifier
        pub id: String,
        /// Unit price in platinum
        pub platinum: i64,
        /// Quantity offered or wanted
        pub quantity: i64,
        /// Buy or sell
        pub order_type: OrderType,
        /// Platform of the order
        pub platform: Platform,
        /// Trading region
        pub region: String,
        /// Creation time
        pub creation_date: DateTime<Utc>,
        /// Last modification time
        pub last_update: DateTime<Utc>,
        /// Whether the order is publicly visible
        pub visible: bool,
        /// Item the order is for
        pub item: ItemInOrder,
        /// Mod rank, for mods
        pub mod_rank: Option<i64>,
        /// Subtype, e.g. relic refinement
        pub subtype: Option<String>,
    }
}
