/// Session credentials and the signed-in user
pub mod interface;
