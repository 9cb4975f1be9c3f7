/// Platform, language and include options
pub mod common;
/// Item summary and full item models
pub mod item;
/// Order and trader models
pub mod order;
/// Trading statistics models
pub mod statistic;
