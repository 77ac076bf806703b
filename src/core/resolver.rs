use crate::core::{BikeId, BikeLookup, BikeRecord, RateCode};
use url::Url;

/// Query parameters owned by the booking link. Any of these already present
/// on the base URL are replaced.
const BOOKING_PARAMS: [&str; 3] = ["bikeId", "rate", "hotel"];

/// Builds outbound booking URLs for one available bike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingLinkBuilder {
    base: Url,
    bike_id: BikeId,
    hotel_slug: Option<String>,
}

impl BookingLinkBuilder {
    pub fn new(base: Url, bike_id: BikeId, hotel_slug: Option<String>) -> Self {
        Self {
            base,
            bike_id,
            hotel_slug,
        }
    }

    /// Copies the base URL and appends `bikeId`, `rate` and (if known) `hotel`
    /// in that order. Unrelated query pairs on the base are kept in place.
    pub fn build(&self, rate: RateCode) -> Url {
        let mut url = self.base.clone();

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| !BOOKING_PARAMS.contains(&key.as_ref()))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept);
            pairs.append_pair("bikeId", self.bike_id.as_str());
            pairs.append_pair("rate", rate.code());
            if let Some(hotel) = &self.hotel_slug {
                pairs.append_pair("hotel", hotel);
            }
        }

        url
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

/// What a caller should do for a scanned bike id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// No bike with this id. Send the visitor to the site root.
    NotFound,
    /// Bike exists but is out. Send the visitor to the hotel page when the
    /// bike has one, otherwise to the site root.
    Unavailable { hotel_slug: Option<String> },
    /// Bike can be booked right now.
    Available {
        record: BikeRecord,
        booking: BookingLinkBuilder,
    },
}

impl Resolution {
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::NotFound => "not_found",
            Resolution::Unavailable { .. } => "unavailable",
            Resolution::Available { .. } => "available",
        }
    }
}

pub struct AvailabilityResolver<D: BikeLookup> {
    directory: D,
    booking_base: Url,
}

impl<D: BikeLookup> AvailabilityResolver<D> {
    pub fn new(directory: D, booking_base: Url) -> Self {
        Self {
            directory,
            booking_base,
        }
    }

    pub fn resolve(&self, id: impl Into<BikeId>) -> Resolution {
        let id = id.into();

        let resolution = match self.directory.find(&id) {
            None => Resolution::NotFound,
            Some(record) if !record.status.is_available() => Resolution::Unavailable {
                hotel_slug: record.hotel().map(str::to_string),
            },
            Some(record) => Resolution::Available {
                record: record.clone(),
                booking: BookingLinkBuilder::new(
                    self.booking_base.clone(),
                    record.id.clone(),
                    record.hotel().map(str::to_string),
                ),
            },
        };

        tracing::debug!(bike_id = %id, outcome = resolution.kind(), "Resolved bike");
        resolution
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }
}
