pub mod client;
pub mod config;
pub mod gcal;
pub mod oauth;

pub use client::{GoogleClient, GoogleError};
pub use config::GoogleConfig;
pub use gcal::BusyPeriod;
