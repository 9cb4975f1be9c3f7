use crate::error::AppError;
use crate::model::responses::ItemDetail;
use crate::presentation::common::{Language, Platform};
use crate::presentation::item::ItemShort;
use async_trait::async_trait;

/// Interface for the item endpoints
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Lists every tradable item
    ///
    /// # Arguments
    /// * `language` - Language of the item names; `None` lets the server pick
    async fn list_items(&self, language: Option<Language>) -> Result<Vec<ItemShort>, AppError>;

    /// Gets an item and the item set it belongs to
    ///
    /// # Arguments
    /// * `url_name` - URL-safe unique name of the item
    /// * `platform` - Platform header; `None` omits it
    ///
    /// # Returns
    /// * `Err(AppError::ItemNotInSet)` - The payload's item is absent from its own set
    async fn get_item(
        &self,
        url_name: &str,
        platform: Option<Platform>,
    ) -> Result<ItemDetail, AppError>;
}
