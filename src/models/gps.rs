//! Location-field interpretation for the sheet header.
//!
//! Trip locations arrive either as free-text addresses or as raw
//! "lat,lng" GPS strings captured by the tracker. GPS strings are meant
//! to be reverse-geocoded by an external collaborator; when no resolver
//! is available the coordinates are pretty-printed instead. Garbled
//! fields degrade to placeholder text, never to a failed draw.

use regex::Regex;
use std::sync::OnceLock;

pub const NO_GPS_DATA: &str = "No GPS data";
pub const INVALID_GPS_FORMAT: &str = "Invalid GPS format";

fn coord_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([-+]?\d*\.\d+)\s*,\s*([-+]?\d*\.\d+)").unwrap())
}

/// Interpretation of a raw location field.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedLocation {
    /// Free-text address, usable as-is.
    Address(String),
    /// Decimal GPS coordinates awaiting (or in lieu of) reverse geocoding.
    Coordinates { lat: f64, lon: f64 },
    /// Field was missing or empty.
    NoData,
    /// Field looked like coordinates but did not parse.
    InvalidFormat,
}

impl ResolvedLocation {
    /// Display string for the sheet header when no resolver supplied
    /// a better address.
    pub fn display(&self) -> String {
        match self {
            ResolvedLocation::Address(a) => a.clone(),
            ResolvedLocation::Coordinates { lat, lon } => format!("{lat:.4}, {lon:.4}"),
            ResolvedLocation::NoData => NO_GPS_DATA.to_string(),
            ResolvedLocation::InvalidFormat => INVALID_GPS_FORMAT.to_string(),
        }
    }
}

/// Classify a raw location field.
///
/// - empty/missing → `NoData`
/// - "lat,lng" with decimal fractions → `Coordinates`
/// - anything containing letters → free-text `Address`
/// - remaining numeric-ish garbage → `InvalidFormat`
pub fn interpret_location(raw: Option<&str>) -> ResolvedLocation {
    let raw = match raw {
        Some(r) if !r.trim().is_empty() => r.trim(),
        _ => return ResolvedLocation::NoData,
    };

    if let Some(caps) = coord_regex().captures(raw) {
        let lat = caps[1].parse::<f64>();
        let lon = caps[2].parse::<f64>();
        if let (Ok(lat), Ok(lon)) = (lat, lon) {
            return ResolvedLocation::Coordinates { lat, lon };
        }
    }

    if raw.chars().any(|c| c.is_alphabetic()) {
        return ResolvedLocation::Address(raw.to_string());
    }

    ResolvedLocation::InvalidFormat
}

/// External address-resolution collaborator (reverse geocoding lives
/// outside this crate). Resolution must finish before the draw pass;
/// a `None` answer falls back to the location's own display string.
pub trait AddressResolver {
    fn resolve(&self, location: &ResolvedLocation) -> Option<String>;
}

/// Default resolver: never touches the network, answers nothing, and
/// thereby lets coordinates print as coordinates.
#[derive(Debug, Default)]
pub struct OfflineResolver;

impl AddressResolver for OfflineResolver {
    fn resolve(&self, _location: &ResolvedLocation) -> Option<String> {
        None
    }
}

/// Resolve a raw location field to the string drawn in the sheet header.
pub fn resolve_display(raw: Option<&str>, resolver: &dyn AddressResolver) -> String {
    let location = interpret_location(raw);
    resolver
        .resolve(&location)
        .unwrap_or_else(|| location.display())
}
