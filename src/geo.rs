//! Spherical bearing math and the planar coordinate converter seam

/// A geographic position in signed decimal degrees
///
/// Produced by a [`CoordConverter`] from the simulator's local planar
/// coordinates. Positive latitude is north, positive longitude is east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

/// Conversion from the simulator's local planar coordinates to
/// geographic coordinates
///
/// The simulator expresses all task geometry in a scenery-local (x, y)
/// plane. How that plane maps onto the globe depends on the loaded
/// scenery, so the conversion is injected rather than implemented here.
/// Both methods are expected to be deterministic and total.
pub trait CoordConverter {
    /// Latitude in signed degrees for a local (x, y) position
    fn latitude(&self, x: f64, y: f64) -> f64;

    /// Longitude in signed degrees for a local (x, y) position
    fn longitude(&self, x: f64, y: f64) -> f64;

    /// Both coordinates as a [`GeoPoint`]
    fn point(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(self.longitude(x, y), self.latitude(x, y))
    }
}

/// Great-circle initial bearing from `from` towards `to`
///
/// Returns whole degrees from true north in `[0, 360)`, rounded to the
/// nearest degree. Coincident points (after rounding) yield 0 rather
/// than an undefined angle.
pub fn bearing(from: GeoPoint, to: GeoPoint) -> u32 {
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let dlon = to.lon.to_radians() - from.lon.to_radians();

    let clat1 = lat1.cos();
    let clat2 = lat2.cos();

    let y = dlon.sin() * clat2;
    let x = clat1 * lat2.sin() - lat1.sin() * clat2 * dlon.cos();

    if x == 0.0 && y == 0.0 {
        return 0;
    }

    // atan2 is in (-180, 180]; shift positive before truncating
    (360.0 + y.atan2(x).to_degrees() + 0.5) as u32 % 360
}
