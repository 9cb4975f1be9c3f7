/// Item service interface
pub mod item;
/// Order service interface
pub mod order;
/// Statistic service interface
pub mod statistic;
