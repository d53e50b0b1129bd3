use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::link::HasId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub bio: String,
    pub rating: Option<f32>,
    pub created_at: DateTime<Utc>,
}

impl HasId for Guide {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// A traveler's application to become a guide, reviewed by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideApplication {
    pub id: Uuid,
    pub applicant_name: String,
    pub city: String,
    pub motivation: String,
    pub status: ApplicationStatus,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    pub city: String,
    pub motivation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewApplicationRequest {
    pub status: ApplicationStatus,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub author_name: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub trip_id: Uuid,
    pub rating: u8,
    pub comment: String,
}

/// A guide's public post (announcements, travel notes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub guide_id: Uuid,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub body: String,
}
