use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::link::{HasId, Linked};
use crate::models::trip::Trip;
use crate::schedule::TimeLabel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub trip: Linked<Trip>,
    pub date: NaiveDate,
    pub time: TimeLabel,
    pub party_size: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl HasId for Booking {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub trip_id: Uuid,
    pub date: NaiveDate,
    pub time: TimeLabel,
    pub party_size: u32,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}
