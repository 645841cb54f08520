//! Well-known section keys and remote API paths.
//!
//! Section and item keys stay open strings on the wire; these constants only name the
//! sections the default dashboard ships with.

pub const TICKETS: &str = "tickets";
pub const AMC: &str = "amc";
pub const ASSETS: &str = "assets";
pub const INVENTORY: &str = "inventory";
pub const SCHEDULE: &str = "schedule";
pub const SURVEYS: &str = "surveys";
pub const VISITORS: &str = "visitors";
pub const PARKING: &str = "parking";
pub const MEETING_ROOMS: &str = "meetingRooms";

/// Path segments of the configuration resource, relative to the API base URL.
pub const CONFIGURATION_PATH: [&str; 2] = ["dashboard", "configuration"];
/// Segment preceding the section name in a partial update.
pub const SECTION_SEGMENT: &str = "section";
/// Segment of the reset action.
pub const RESET_SEGMENT: &str = "reset";
