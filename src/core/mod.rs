pub mod client;
pub mod dispatch;
