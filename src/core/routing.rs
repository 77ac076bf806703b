use crate::core::resolver::{BookingLinkBuilder, Resolution};
use crate::core::{BikeRecord, RateCode};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingLink {
    pub rate: RateCode,
    pub label: &'static str,
    pub price_usd: u32,
    pub duration: &'static str,
    pub url: String,
}

/// Everything the booking page needs for one available bike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingOptions {
    pub bike: BikeRecord,
    pub links: Vec<BookingLink>,
}

impl BookingOptions {
    pub fn new(bike: BikeRecord, booking: &BookingLinkBuilder) -> Self {
        let links = RateCode::ALL
            .into_iter()
            .map(|rate| BookingLink {
                rate,
                label: rate.label(),
                price_usd: rate.price_usd(),
                duration: rate.duration(),
                url: booking.build(rate).to_string(),
            })
            .collect();

        Self { bike, links }
    }

    pub fn link(&self, rate: RateCode) -> Option<&BookingLink> {
        self.links.iter().find(|link| link.rate == rate)
    }
}

pub fn hotel_path(hotel_slug: &str) -> String {
    format!("/hotels/{}", hotel_slug)
}

/// Outcome of a QR scan, as seen by the page layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    RedirectRoot,
    RedirectHotel { hotel_slug: String },
    Render(BookingOptions),
}

impl RouteDecision {
    pub fn redirect_path(&self) -> Option<String> {
        match self {
            RouteDecision::RedirectRoot => Some("/".to_string()),
            RouteDecision::RedirectHotel { hotel_slug } => Some(hotel_path(hotel_slug)),
            RouteDecision::Render(_) => None,
        }
    }
}

impl From<Resolution> for RouteDecision {
    fn from(resolution: Resolution) -> Self {
        match resolution {
            Resolution::NotFound => RouteDecision::RedirectRoot,
            Resolution::Unavailable {
                hotel_slug: Some(hotel_slug),
            } => RouteDecision::RedirectHotel { hotel_slug },
            Resolution::Unavailable { hotel_slug: None } => RouteDecision::RedirectRoot,
            Resolution::Available { record, booking } => {
                RouteDecision::Render(BookingOptions::new(record, &booking))
            }
        }
    }
}
