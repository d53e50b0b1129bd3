use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::guide::Guide;
use crate::models::link::{HasId, Linked};
use crate::schedule::ScheduleSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub guide: Linked<Guide>,
    pub city: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub schedule: ScheduleSet,
    pub created_at: DateTime<Utc>,
}

impl HasId for Trip {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTripRequest {
    pub city: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub schedule: ScheduleSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTripResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTripResponse {
    pub id: Uuid,
    pub guide: Linked<Guide>,
    pub city: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub schedule: ScheduleSet,
    pub created_at: DateTime<Utc>,
}

/// Explicit update of an already-persisted trip. Unset fields are left
/// unchanged; `schedule`, when present, replaces the stored schedule
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTripRequest {
    pub city: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u32>,
    pub schedule: Option<ScheduleSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTripResponse {
    pub id: Uuid,
    pub updated_at: DateTime<Utc>,
}
