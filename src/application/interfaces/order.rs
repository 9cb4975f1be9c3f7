use crate::error::AppError;
use crate::model::responses::{ItemOrders, UserOrders};
use crate::presentation::common::{IncludeOption, Platform};
use crate::session::interface::WmSession;

use async_trait::async_trait;

#[async_trait]
/// Service for reading buy and sell orders
///
/// Orders can be listed per item, optionally with the item attached, or per
/// user, split into buy and sell sides.
pub trait OrderService: Send + Sync {
    /// Gets the orders of an item
    ///
    /// With `include` set to [`IncludeOption::Item`] the result is
    /// [`ItemOrders::WithItem`]; without it, [`ItemOrders::Orders`].
    async fn get_item_orders(
        &self,
        url_name: &str,
        platform: Option<Platform>,
        include: Option<IncludeOption>,
    ) -> Result<ItemOrders, AppError>;

    /// Gets the open orders of a user
    ///
    /// Without a session the request is made as a guest.
    async fn get_orders_by_username(
        &self,
        username: &str,
        session: Option<&WmSession>,
    ) -> Result<UserOrders, AppError>;

    /// Gets the open orders of the signed-in user
    ///
    /// Fails with `AppError::InvalidInput` when the session has no in-game
    /// name, without sending a request.
    async fn get_current_orders(&self, session: &WmSession) -> Result<UserOrders, AppError>;
}
