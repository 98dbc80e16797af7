//! Coordinate text formatting for the target file grammars
//!
//! The waypoint file wants `DD:MM.MMM` with fractional minutes, the airspace
//! file wants `DD:MM:SS` with whole seconds. Longitudes carry three degree
//! digits, latitudes two, and the hemisphere letter is appended directly.
//! The target application parses these fields verbatim, so the formats here
//! must not drift.

/// Latitude as `DD:MM.MMM{N|S}`, e.g. `52:33.456N`
pub fn lat_dd_mm_ff(lat: f64) -> String {
    dd_mm_ff(lat, 2, if lat < 0.0 { 'S' } else { 'N' })
}

/// Longitude as `DDD:MM.MMM{E|W}`, e.g. `016:12.345E`
pub fn lon_dd_mm_ff(lon: f64) -> String {
    dd_mm_ff(lon, 3, if lon < 0.0 { 'W' } else { 'E' })
}

/// Latitude as `DD:MM:SS{N|S}`, e.g. `52:20:30N`
pub fn lat_dd_mm_ss(lat: f64) -> String {
    dd_mm_ss(lat, 2, if lat < 0.0 { 'S' } else { 'N' })
}

/// Longitude as `DDD:MM:SS{E|W}`, e.g. `016:12:45E`
pub fn lon_dd_mm_ss(lon: f64) -> String {
    dd_mm_ss(lon, 3, if lon < 0.0 { 'W' } else { 'E' })
}

fn dd_mm_ff(value: f64, degree_digits: usize, hemisphere: char) -> String {
    let value = value.abs();
    let mut degrees = value.trunc() as u32;

    // Round to thousandths of a minute first so the carry into the degree
    // field happens before formatting (59.9996' must become the next degree).
    let mut milli_minutes = ((value - degrees as f64) * 60_000.0).round() as u32;
    if milli_minutes >= 60_000 {
        degrees += 1;
        milli_minutes = 0;
    }

    format!(
        "{degrees:0degree_digits$}:{:02}.{:03}{hemisphere}",
        milli_minutes / 1000,
        milli_minutes % 1000,
    )
}

fn dd_mm_ss(value: f64, degree_digits: usize, hemisphere: char) -> String {
    let seconds = (value.abs() * 3600.0).round() as u64;
    format!(
        "{:0degree_digits$}:{:02}:{:02}{hemisphere}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60,
    )
}
