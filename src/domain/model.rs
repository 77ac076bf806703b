use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque bike identifier. Numeric ids are coerced to their decimal string
/// form, so `BikeId::from(2)` and `BikeId::from("2")` are the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BikeId(String);

impl BikeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BikeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BikeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BikeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&String> for BikeId {
    fn from(value: &String) -> Self {
        Self(value.clone())
    }
}

impl From<&BikeId> for BikeId {
    fn from(value: &BikeId) -> Self {
        value.clone()
    }
}

macro_rules! bike_id_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BikeId {
                fn from(value: $t) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

bike_id_from_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeStatus {
    Available,
    Rented,
}

impl BikeStatus {
    pub fn is_available(self) -> bool {
        matches!(self, BikeStatus::Available)
    }
}

impl fmt::Display for BikeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BikeStatus::Available => f.write_str("available"),
            BikeStatus::Rented => f.write_str("rented"),
        }
    }
}

/// One rental unit. The JSON projection uses camelCase keys
/// (`id, status, hotelSlug, model, locationName`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeRecord {
    pub id: BikeId,
    pub status: BikeStatus,
    pub hotel_slug: Option<String>,
    pub model: String,
    pub location_name: String,
}

impl BikeRecord {
    pub fn new(
        id: impl Into<BikeId>,
        status: BikeStatus,
        hotel_slug: Option<&str>,
        model: &str,
        location_name: &str,
    ) -> Self {
        Self {
            id: id.into(),
            status,
            hotel_slug: hotel_slug.filter(|slug| !slug.is_empty()).map(str::to_string),
            model: model.to_string(),
            location_name: location_name.to_string(),
        }
    }

    /// Partner hotel for this bike. An empty slug counts as no hotel.
    pub fn hotel(&self) -> Option<&str> {
        self.hotel_slug.as_deref().filter(|slug| !slug.is_empty())
    }
}

/// Rental duration categories offered on the booking page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateCode {
    HalfDay,
    FullDay,
    MultiDay,
}

impl RateCode {
    pub const ALL: [RateCode; 3] = [RateCode::HalfDay, RateCode::FullDay, RateCode::MultiDay];

    /// Value sent to the booking system in the `rate` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            RateCode::HalfDay => "half-day",
            RateCode::FullDay => "full-day",
            RateCode::MultiDay => "multi-day",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RateCode::HalfDay => "Half-Day",
            RateCode::FullDay => "Full-Day",
            RateCode::MultiDay => "Multi-Day",
        }
    }

    /// Price in whole US dollars. Multi-day is charged per day.
    pub fn price_usd(self) -> u32 {
        match self {
            RateCode::HalfDay => 35,
            RateCode::FullDay => 60,
            RateCode::MultiDay => 50,
        }
    }

    pub fn duration(self) -> &'static str {
        match self {
            RateCode::HalfDay => "4 hours",
            RateCode::FullDay => "24 hours",
            RateCode::MultiDay => "2+ days",
        }
    }
}

impl fmt::Display for RateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRateCode(pub String);

impl fmt::Display for UnknownRateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rate code: {}", self.0)
    }
}

impl std::error::Error for UnknownRateCode {}

impl FromStr for RateCode {
    type Err = UnknownRateCode;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RateCode::ALL
            .into_iter()
            .find(|rate| rate.code() == s)
            .ok_or_else(|| UnknownRateCode(s.to_string()))
    }
}
