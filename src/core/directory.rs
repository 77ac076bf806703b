use crate::core::{BikeId, BikeLookup, BikeRecord, BikeStatus, Result};
use crate::utils::error::AppError;
use crate::utils::validation::find_duplicate;

/// The six bikes stocked at partner hotels when no fixtures are configured.
pub fn seed_bikes() -> Vec<BikeRecord> {
    use BikeStatus::{Available, Rented};

    vec![
        BikeRecord::new("1", Available, Some("surfjack"), "RadExpand 5", "Surfjack Lobby Rack"),
        BikeRecord::new("2", Rented, Some("surfjack"), "RadExpand 5", "Surfjack Lobby Rack"),
        BikeRecord::new("3", Available, Some("whitesands"), "RadExpand 5", "White Sands Front Desk"),
        BikeRecord::new("4", Rented, Some("whitesands"), "RadExpand 5", "White Sands Front Desk"),
        BikeRecord::new("5", Available, Some("monarch"), "RadExpand 5", "Monarch Valet Area"),
        BikeRecord::new("6", Rented, Some("monarch"), "RadExpand 5", "Monarch Valet Area"),
    ]
}

/// Immutable bike list fixed at construction. Order is the insertion order
/// of the records passed to [`BikeDirectory::new`].
#[derive(Debug, Clone)]
pub struct BikeDirectory {
    records: Vec<BikeRecord>,
}

impl BikeDirectory {
    pub fn new(records: Vec<BikeRecord>) -> Result<Self> {
        if let Some(id) = find_duplicate(records.iter().map(|r| r.id.as_str())) {
            return Err(AppError::DuplicateBikeId { id: id.to_string() });
        }

        tracing::debug!("Bike directory loaded with {} records", records.len());
        Ok(Self { records })
    }

    pub fn seeded() -> Self {
        Self {
            records: seed_bikes(),
        }
    }

    pub fn get_by_id(&self, id: impl Into<BikeId>) -> Option<&BikeRecord> {
        let id = id.into();
        self.find(&id)
    }

    /// `true` only when the bike exists and is available. Unknown and rented
    /// bikes both give `false`; use [`get_by_id`](Self::get_by_id) to tell them apart.
    pub fn is_available(&self, id: impl Into<BikeId>) -> bool {
        self.get_by_id(id)
            .is_some_and(|record| record.status.is_available())
    }

    pub fn list_all(&self) -> Vec<BikeRecord> {
        self.records.clone()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for BikeDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl BikeLookup for BikeDirectory {
    fn find(&self, id: &BikeId) -> Option<&BikeRecord> {
        self.records.iter().find(|record| &record.id == id)
    }
}
