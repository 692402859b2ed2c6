//! Public types for the calendar API
use serde::{Deserialize, Serialize};

pub use crate::google::BusyPeriod;

#[derive(Debug, Deserialize, Serialize)]
pub struct FreeBusyRequest {
    #[serde(rename = "timeMin")]
    pub time_min: String,
    #[serde(rename = "timeMax")]
    pub time_max: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub available: bool,
    pub busy_periods: Vec<BusyPeriod>,
}
