/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::item::ItemService;
use crate::application::interfaces::order::OrderService;
use crate::application::interfaces::statistic::StatisticService;
use crate::error::AppError;
use crate::model::http::{HttpClient, Transport};
use crate::model::requests::ApiRequest;
use crate::model::responses::{
    ItemDetail, ItemOrders, UserOrders, compose_item, compose_item_list, compose_item_orders,
    compose_statistic, compose_user_orders,
};
use crate::presentation::common::{IncludeOption, Language, Platform};
use crate::presentation::item::ItemShort;
use crate::presentation::statistic::Statistic;
use crate::session::interface::WmSession;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};
use urlencoding::encode;

/// Client for the warframe.market REST API
///
/// Implements [`ItemService`], [`OrderService`] and [`StatisticService`] on
/// top of a [`Transport`]. The default transport is the reqwest-backed
/// [`HttpClient`].
pub struct Client<T: Transport = HttpClient> {
    transport: Arc<T>,
}

impl Client<HttpClient> {
    /// Creates a client sending requests over HTTP
    ///
    /// # Arguments
    /// * `config` - Base URL and timeout of the API
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = HttpClient::new(Arc::new(config))?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client on top of an arbitrary transport
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn fetch_user_orders(
        &self,
        username: &str,
        session: Option<&WmSession>,
    ) -> Result<UserOrders, AppError> {
        let request = ApiRequest::get(format!("/profile/{}/orders", encode(username)));
        let request = match session {
            Some(session) => session.authorize(request),
            None => request,
        };
        let value = self.transport.send(&request).await?;
        let orders = compose_user_orders(&value)?;
        debug!(
            "{} buy and {} sell orders obtained for {}",
            orders.buy_orders.len(),
            orders.sell_orders.len(),
            username
        );
        Ok(orders)
    }
}

impl<T: Transport> Clone for Client<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

#[async_trait]
impl<T: Transport> ItemService for Client<T> {
    async fn list_items(&self, language: Option<Language>) -> Result<Vec<ItemShort>, AppError> {
        info!("Listing items");
        let request = ApiRequest::get("/items").language(language);
        let value = self.transport.send(&request).await?;
        let items = compose_item_list(&value)?;
        debug!("{} items listed", items.len());
        Ok(items)
    }

    async fn get_item(
        &self,
        url_name: &str,
        platform: Option<Platform>,
    ) -> Result<ItemDetail, AppError> {
        info!("Getting item: {}", url_name);
        let request = ApiRequest::get(format!("/items/{}", encode(url_name))).platform(platform);
        let value = self.transport.send(&request).await?;
        let detail = compose_item(&value)?;
        debug!(
            "Item {} obtained with {} items in set",
            url_name,
            detail.items_in_set.len()
        );
        Ok(detail)
    }
}

#[async_trait]
impl<T: Transport> OrderService for Client<T> {
    async fn get_item_orders(
        &self,
        url_name: &str,
        platform: Option<Platform>,
        include: Option<IncludeOption>,
    ) -> Result<ItemOrders, AppError> {
        info!("Getting orders of item: {}", url_name);
        let request = ApiRequest::get(format!("/items/{}/orders", encode(url_name)))
            .platform(platform)
            .include(include);
        let value = self.transport.send(&request).await?;
        let orders = compose_item_orders(&value, include)?;
        debug!("{} orders obtained for {}", orders.orders().len(), url_name);
        Ok(orders)
    }

    async fn get_orders_by_username(
        &self,
        username: &str,
        session: Option<&WmSession>,
    ) -> Result<UserOrders, AppError> {
        info!("Getting orders of user: {}", username);
        self.fetch_user_orders(username, session).await
    }

    async fn get_current_orders(&self, session: &WmSession) -> Result<UserOrders, AppError> {
        let username = session.ingame_name()?;
        info!("Getting orders of signed-in user: {}", username);
        self.fetch_user_orders(username, Some(session)).await
    }
}

#[async_trait]
impl<T: Transport> StatisticService for Client<T> {
    async fn get_statistic(
        &self,
        url_name: &str,
        platform: Option<Platform>,
    ) -> Result<Statistic, AppError> {
        info!("Getting statistics of item: {}", url_name);
        let request = ApiRequest::get(format!("/items/{}/statistics", encode(url_name)))
            .platform(platform);
        let value = self.transport.send(&request).await?;
        let statistic = compose_statistic(&value)?;
        debug!(
            "Statistics of {} obtained: {} closed and {} live entries over 90 days",
            url_name,
            statistic.closed_90d.len(),
            statistic.live_90d.len()
        );
        Ok(statistic)
    }
}
