use crate::domain::model::{BikeId, BikeRecord};

/// Read-only, identity-keyed access to bike records.
pub trait BikeLookup: Send + Sync {
    fn find(&self, id: &BikeId) -> Option<&BikeRecord>;
}
