use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::link::HasId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub country: String,
}

impl HasId for City {
    fn id(&self) -> Uuid {
        self.id
    }
}
