mod geocode_match;

pub use geocode_match::GeocodeMatch;
