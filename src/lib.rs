pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use app::service::{BikeService, ScanPreview};
pub use config::AppConfig;
pub use core::directory::BikeDirectory;
pub use core::resolver::{AvailabilityResolver, BookingLinkBuilder, Resolution};
pub use core::routing::{BookingLink, BookingOptions, RouteDecision};
pub use domain::model::{BikeId, BikeRecord, BikeStatus, RateCode};
pub use utils::error::{AppError, Result};
