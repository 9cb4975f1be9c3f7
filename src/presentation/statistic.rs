/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/
use crate::presentation::order::OrderType;
use crate::record;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::Serialize;

record! {
    /// Aggregate of the trades closed during one bucket
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct StatisticClosed {
        /// Start of the bucket
        pub datetime: DateTime<Utc>,
        /// Number of trades
        pub volume: i64,
        /// Lowest price
        pub min_price: f64,
        /// Highest price
        pub max_price: f64,
        /// Price of the first trade
        pub open_price: f64,
        /// Price of the last trade
        pub closed_price: f64,
        /// Average price
        pub avg_price: f64,
        /// Volume-weighted average price
        pub wa_price: f64,
        /// Median price
        pub median: f64,
        /// Moving average, absent at the start of a series
        pub moving_avg: Option<f64>,
        /// Upper Donchian channel bound
        pub donch_top: i64,
        /// Lower Donchian channel bound
        pub donch_bot: i64,
        /// Bucket identifier
        pub id: String,
        /// Mod rank the bucket is restricted to, for mods
        pub mod_rank: Option<i64>,
    }
}

record! {
    /// Aggregate of the orders live during one bucket
    #[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
    pub struct StatisticLive {
        /// Start of the bucket
        pub datetime: DateTime<Utc>,
        /// Number of orders
        pub volume: i64,
        /// Lowest price
        pub min_price: f64,
        /// Highest price
        pub max_price: f64,
        /// Average price
        pub avg_price: f64,
        /// Volume-weighted average price
        pub wa_price: f64,
        /// Median price
        pub median: f64,
        /// Moving average, absent at the start of a series
        pub moving_avg: Option<f64>,
        /// Side of the aggregated orders
        pub order_type: OrderType,
        /// Bucket identifier
        pub id: String,
        /// Mod rank the bucket is restricted to, for mods
        pub mod_rank: Option<i64>,
    }
}

/// Trading statistics of an item over the short (48 hours) and long
/// (90 days) windows
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq, Default)]
pub struct Statistic {
    /// Closed trades, hourly buckets over 48 hours
    pub closed_48h: Vec<StatisticClosed>,
    /// Closed trades, daily buckets over 90 days
    pub closed_90d: Vec<StatisticClosed>,
    /// Live orders, hourly buckets over 48 hours
    pub live_48h: Vec<StatisticLive>,
    /// Live orders, daily buckets over 90 days
    pub live_90d: Vec<StatisticLive>,
}

impl Statistic {
    /// Most recent closed bucket of the 48 hours window
    #[must_use]
    pub fn latest_closed(&self) -> Option<&StatisticClosed> {
        self.closed_48h.iter().max_by_key(|entry| entry.datetime)
    }
}
