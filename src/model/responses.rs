/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 13/10/26
******************************************************************************/

//! Response composition
//!
//! Each function takes the JSON envelope of one endpoint,
//! `{"payload": {...}, "include": {...}?}`, and assembles the typed result.
//! The functions are pure. They only decode, normalize item-set keys and
//! resolve the requested item inside its item set.

use crate::error::AppError;
use crate::model::decode::{Decode, FieldPath, Fields, Shape};
use crate::model::normalize::normalize_variant;
use crate::presentation::common::IncludeOption;
use crate::presentation::item::{ItemFull, ItemShort};
use crate::presentation::order::{OrderItem, OrderRow, OrderType};
use crate::presentation::statistic::{Statistic, StatisticClosed, StatisticLive};
use prettytable::{Cell, Row, Table, format};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// An item together with the item set it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemDetail {
    /// The requested item; always an element of `items_in_set`
    pub item: ItemFull,
    /// Every item of the set, in payload order
    pub items_in_set: Vec<ItemFull>,
}

impl ItemDetail {
    /// Splits into `(requested item, item set)`
    #[must_use]
    pub fn into_parts(self) -> (ItemFull, Vec<ItemFull>) {
        (self.item, self.items_in_set)
    }
}

/// Orders of an item, with the item itself when it was requested
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ItemOrders {
    /// Requested without an include directive
    Orders(Vec<OrderRow>),
    /// Requested with [`IncludeOption::Item`]
    WithItem {
        /// Orders of the item
        orders: Vec<OrderRow>,
        /// The item and its item set, from `include.item`
        item: ItemDetail,
    },
}

impl ItemOrders {
    /// The orders, whichever variant this is
    #[must_use]
    pub fn orders(&self) -> &[OrderRow] {
        match self {
            ItemOrders::Orders(orders) => orders,
            ItemOrders::WithItem { orders, .. } => orders,
        }
    }

    /// The included item, if it was requested
    #[must_use]
    pub fn item(&self) -> Option<&ItemDetail> {
        match self {
            ItemOrders::Orders(_) => None,
            ItemOrders::WithItem { item, .. } => Some(item),
        }
    }

    /// Consumes self and returns the orders
    #[must_use]
    pub fn into_orders(self) -> Vec<OrderRow> {
        match self {
            ItemOrders::Orders(orders) => orders,
            ItemOrders::WithItem { orders, .. } => orders,
        }
    }
}

impl fmt::Display for ItemOrders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("TYPE"),
            Cell::new("PLATINUM"),
            Cell::new("QTY"),
            Cell::new("USER"),
            Cell::new("STATUS"),
            Cell::new("REGION"),
        ]));

        let mut sorted = self.orders().to_vec();
        sorted.sort_by_key(|order| (order.order_type != OrderType::Sell, order.platinum));
        for order in &sorted {
            table.add_row(Row::new(vec![
                Cell::new(order.order_type.as_str()),
                Cell::new(&order.platinum.to_string()),
                Cell::new(&order.quantity.to_string()),
                Cell::new(&order.user.ingame_name),
                Cell::new(order.user.status.as_str()),
                Cell::new(&order.region),
            ]));
        }

        if let Some(detail) = self.item() {
            writeln!(f, "{} ({})", detail.item.en.item_name, detail.item.url_name)?;
        }
        write!(f, "{}", table)
    }
}

/// Open orders of one user, split by side
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct UserOrders {
    /// Buy side
    pub buy_orders: Vec<OrderItem>,
    /// Sell side
    pub sell_orders: Vec<OrderItem>,
}

impl UserOrders {
    /// Total number of orders on both sides
    #[must_use]
    pub fn len(&self) -> usize {
        self.buy_orders.len() + self.sell_orders.len()
    }

    /// True when the user has no open orders
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buy_orders.is_empty() && self.sell_orders.is_empty()
    }
}

impl fmt::Display for UserOrders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.add_row(Row::new(vec![
            Cell::new("TYPE"),
            Cell::new("ITEM"),
            Cell::new("PLATINUM"),
            Cell::new("QTY"),
            Cell::new("VISIBLE"),
        ]));
        for order in self.sell_orders.iter().chain(self.buy_orders.iter()) {
            table.add_row(Row::new(vec![
                Cell::new(order.order_type.as_str()),
                Cell::new(&order.item.en.item_name),
                Cell::new(&order.platinum.to_string()),
                Cell::new(&order.quantity.to_string()),
                Cell::new(if order.visible { "yes" } else { "no" }),
            ]));
        }
        write!(f, "{}", table)
    }
}

fn envelope(value: &Value) -> Result<Fields<'_>, AppError> {
    Ok(Fields::new(value, &FieldPath::root(), Shape::Object)?)
}

/// Picks the item identified by `requested_id` out of its item set
///
/// # Returns
/// * `Ok(ItemDetail)` - The first item whose id matches, and the whole set
/// * `Err(AppError::ItemNotInSet)` - No item of the set has that id
pub fn resolve_item_set(
    items_in_set: Vec<ItemFull>,
    requested_id: &str,
) -> Result<ItemDetail, AppError> {
    let item = items_in_set
        .iter()
        .find(|item| item.id == requested_id)
        .cloned();
    match item {
        Some(item) => Ok(ItemDetail { item, items_in_set }),
        None => {
            warn!(
                "Item {} not found among {} items of its set",
                requested_id,
                items_in_set.len()
            );
            Err(AppError::ItemNotInSet {
                requested_id: requested_id.to_string(),
            })
        }
    }
}

/// Composes an [`ItemDetail`] from an item object holding `id` and
/// `items_in_set`
///
/// Every entry of `items_in_set` is key-normalized before being decoded.
///
/// # Arguments
/// * `item_json` - The item object, e.g. `payload.item` or `include.item`
/// * `path` - Where `item_json` sits in the envelope, for error reporting
pub fn compose_item_set(item_json: &Value, path: &FieldPath) -> Result<ItemDetail, AppError> {
    let fields = Fields::new(item_json, path, Shape::Object)?;
    let requested_id: String = fields.get("id")?;
    let entries = fields.array("items_in_set")?;
    let set_path = path.key("items_in_set");

    let items_in_set = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| ItemFull::decode(&normalize_variant(entry), &set_path.index(i)))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "Decoded {} items in set of {}",
        items_in_set.len(),
        requested_id
    );

    resolve_item_set(items_in_set, &requested_id)
}

/// `GET /items/{url_name}`: the item from `payload.item`
pub fn compose_item(value: &Value) -> Result<ItemDetail, AppError> {
    let payload = envelope(value)?.object("payload")?;
    let item = payload.value("item", Shape::Object)?;
    compose_item_set(item, &payload.path().key("item"))
}

/// `GET /items`: the listing in `payload.items`
pub fn compose_item_list(value: &Value) -> Result<Vec<ItemShort>, AppError> {
    Ok(envelope(value)?.object("payload")?.get("items")?)
}

/// `GET /items/{url_name}/orders`
///
/// The shape of the result follows `include`: with [`IncludeOption::Item`]
/// the item is composed from `include.item`, which must then be present.
pub fn compose_item_orders(
    value: &Value,
    include: Option<IncludeOption>,
) -> Result<ItemOrders, AppError> {
    let root = envelope(value)?;
    let orders: Vec<OrderRow> = root.object("payload")?.get("orders")?;

    match include {
        None => Ok(ItemOrders::Orders(orders)),
        Some(IncludeOption::Item) => {
            let included = root.object("include")?;
            let item_json = included.value("item", Shape::Object)?;
            let item = compose_item_set(item_json, &included.path().key("item"))?;
            Ok(ItemOrders::WithItem { orders, item })
        }
    }
}

/// `GET /profile/{username}/orders`: `payload.buy_orders` and
/// `payload.sell_orders`
pub fn compose_user_orders(value: &Value) -> Result<UserOrders, AppError> {
    let payload = envelope(value)?.object("payload")?;
    Ok(UserOrders {
        buy_orders: payload.get("buy_orders")?,
        sell_orders: payload.get("sell_orders")?,
    })
}

/// `GET /items/{url_name}/statistics`
pub fn compose_statistic(value: &Value) -> Result<Statistic, AppError> {
    let payload = envelope(value)?.object("payload")?;
    let closed = payload.object("statistics_closed")?;
    let live = payload.object("statistics_live")?;
    Ok(Statistic {
        closed_48h: closed.get::<Vec<StatisticClosed>>("48hours")?,
        closed_90d: closed.get::<Vec<StatisticClosed>>("90days")?,
        live_48h: live.get::<Vec<StatisticLive>>("48hours")?,
        live_90d: live.get::<Vec<StatisticLive>>("90days")?,
    })
}
