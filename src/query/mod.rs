pub mod geo;
pub mod params;
