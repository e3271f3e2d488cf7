/// Key under which the location list is persisted
pub const DEFAULT_STORAGE_KEY: &str = "toDoList";

/// Zoom level the map view is centered at
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Public OpenStreetMap tile server (Leaflet URL template)
pub const DEFAULT_MAP_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const DEFAULT_MAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

// =============================================================================
// USER-VISIBLE MESSAGES
// =============================================================================

pub const MSG_EMPTY_QUERY: &str = "Please enter a valid address!";

pub const MSG_NO_RESULTS: &str = "No location data found!";

pub const MSG_FETCH_FAILED: &str = "Error fetching location data. Please try again.";

