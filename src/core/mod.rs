pub mod directory;
pub mod resolver;
pub mod routing;

pub use crate::domain::model::{BikeId, BikeRecord, BikeStatus, RateCode};
pub use crate::domain::ports::BikeLookup;
pub use crate::utils::error::Result;
