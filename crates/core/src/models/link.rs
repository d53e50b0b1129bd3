use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A backend reference field that arrives either as a raw ID or as the
/// populated record, depending on the endpoint.
///
/// Deserialization is untagged: a bare UUID string becomes [`Linked::Id`],
/// an object becomes [`Linked::Populated`]. Callers normalize once at the
/// boundary instead of inspecting shapes at every use site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linked<T> {
    Id(Uuid),
    Populated(T),
}

impl<T> Linked<T> {
    /// The referenced record, if the backend populated it.
    pub fn populated(&self) -> Option<&T> {
        match self {
            Linked::Id(_) => None,
            Linked::Populated(record) => Some(record),
        }
    }

    /// The record's ID, however the field arrived.
    pub fn id(&self) -> Uuid
    where
        T: HasId,
    {
        match self {
            Linked::Id(id) => *id,
            Linked::Populated(record) => record.id(),
        }
    }
}

/// Implemented by records that carry their own ID, so [`Linked::id`] works
/// on both arms.
pub trait HasId {
    fn id(&self) -> Uuid;
}
