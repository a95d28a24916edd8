//! Application constants for the forecast calendar
//!
//! This module contains the DWML tag names, default threshold values,
//! calendar labels and request parameters used throughout the pipeline.

// =============================================================================
// DWML Document Structure
// =============================================================================

/// Root tag of a document that reports a failure instead of forecast data
pub const ERROR_ROOT_TAG: &str = "error";

/// Child of the error root that carries the human-readable diagnostic
pub const ERROR_DIAGNOSTIC_TAG: &str = "pre";

/// Path from the document root to each time layout block
pub const TIME_LAYOUT_PATH: &str = "data/time-layout";

/// Path from the document root to each parameters block
pub const PARAMETERS_PATH: &str = "data/parameters";

/// Identifier element inside a time layout block
pub const LAYOUT_KEY_TAG: &str = "layout-key";

/// Timestamp element inside a time layout block
pub const START_VALID_TIME_TAG: &str = "start-valid-time";

/// Attribute on a parameter block naming its governing time layout
pub const TIME_LAYOUT_ATTRIBUTE: &str = "time-layout";

/// Sample element inside a parameter block
pub const VALUE_TAG: &str = "value";

/// Attribute marking an explicitly missing sample
pub const NIL_ATTRIBUTE: &str = "xsi:nil";

/// Parameter block tags as they appear in DWML
pub mod parameter_tags {
    /// 12-hour probability of precipitation, percent
    pub const PRECIPITATION: &str = "probability-of-precipitation";

    /// Hourly or apparent temperature, degrees Fahrenheit
    pub const TEMPERATURE: &str = "temperature";

    /// Sustained wind speed, miles per hour
    pub const WIND_SPEED: &str = "wind-speed";

    /// Total cloud cover, percent
    pub const CLOUD_AMOUNT: &str = "cloud-amount";
}

// =============================================================================
// Threshold Table
// =============================================================================

/// Threshold table keys as they appear in a rangeDict configuration
pub mod threshold_keys {
    pub const PRECIP: &str = "precip";
    pub const TEMP: &str = "temp";
    pub const WIND: &str = "wind";
    pub const CLOUDS: &str = "clouds";

    /// Every key a threshold table must carry, and no others
    pub const ALL: &[&str] = &[PRECIP, TEMP, WIND, CLOUDS];
}

/// Default precipitation cut points: High below 10%, Low from 30%
pub const DEFAULT_PRECIP_THRESHOLDS: [i32; 2] = [10, 30];

/// Default temperature cut points: best band is [59, 89) °F
pub const DEFAULT_TEMP_THRESHOLDS: [i32; 4] = [35, 59, 89, 100];

/// Default wind cut points: High below 8 MPH, Low from 12 MPH
pub const DEFAULT_WIND_THRESHOLDS: [i32; 2] = [8, 12];

/// Default cloud cover cut points: High below 33%, Low from 66%
pub const DEFAULT_CLOUDS_THRESHOLDS: [i32; 2] = [33, 66];

/// Number of parameters that vote in the overall hour rating
pub const MANDATORY_PARAMETER_COUNT: i32 = 3;

// =============================================================================
// Timestamps and Calendar
// =============================================================================

/// Number of rows in a calendar grid
pub const HOURS_PER_DAY: usize = 24;

/// Single-letter weekday labels, Monday first
pub const WEEKDAY_LABELS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

/// Format used when rendering an hour for display
pub const HOUR_DISPLAY_FORMAT: &str = "%a %m/%d %H:%M";

// =============================================================================
// NDFD Request
// =============================================================================

/// NDFD XML REST endpoint for point time-series forecasts
pub const NDFD_BASE_URL: &str =
    "http://graphical.weather.gov/xml/sample_products/browser_interface/ndfdXMLclient.php";

/// NDFD element codes requested for each forecast
pub const NDFD_ELEMENTS: &[&str] = &["pop12", "appt", "wspd", "sky"];

/// Render the NDFD request URL for a latitude/longitude pair
///
/// The fetch itself belongs to the caller; this only documents which
/// elements the pipeline expects to find in the returned document.
pub fn ndfd_request_url(latitude: &str, longitude: &str) -> String {
    let elements: String = NDFD_ELEMENTS
        .iter()
        .map(|element| format!("&{element}={element}"))
        .collect();

    format!(
        "{NDFD_BASE_URL}?whichClient=NDFDgen&lat={latitude}&lon={longitude}\
         &product=time-series&Unit=e{elements}&Submit=Submit"
    )
}
