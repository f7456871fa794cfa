pub mod alert_store;
pub mod loader;
pub mod parse;
pub mod synthetic;
pub mod weekday;
