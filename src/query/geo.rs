use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A geographic point, latitude first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }
}

/// Renders as `lat,lng`, the form [`parse_around_lat_lng`] accepts.
impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parse an `aroundLatLng` string such as `"12.34,45.67"`.
///
/// Splits on the first comma. Each half must be exactly a finite float, with no
/// padding or trailing characters; anything else yields `None`.
pub fn parse_around_lat_lng(s: &str) -> Option<LatLng> {
    let (lat, lng) = s.split_once(',')?;
    let lat = parse_coordinate(lat)?;
    let lng = parse_coordinate(lng)?;
    Some(LatLng { lat, lng })
}

fn parse_coordinate(s: &str) -> Option<f64> {
    let v: f64 = s.parse().ok()?;
    v.is_finite().then_some(v)
}

/// Radius around the `aroundLatLng` point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AroundRadius {
    Meters(u64),
    All,
}

impl AroundRadius {
    pub fn parse(s: &str) -> Option<Self> {
        if s == "all" {
            return Some(AroundRadius::All);
        }
        s.parse().ok().map(AroundRadius::Meters)
    }
}

impl fmt::Display for AroundRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AroundRadius::Meters(m) => write!(f, "{}", m),
            AroundRadius::All => f.write_str("all"),
        }
    }
}

impl Serialize for AroundRadius {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AroundRadius::Meters(m) => serializer.serialize_u64(*m),
            AroundRadius::All => serializer.serialize_str("all"),
        }
    }
}
