use crate::geo::GeoPoint;

/// A penalty zone as an airspace polygon record
///
/// Altitude bounds are pre-formatted text because the target airspace
/// grammar mixes literal `0` floors with `<value>m AMSL` bounds. Corners
/// stay in source order; the source guarantees a valid quadrilateral.
#[derive(Debug, Clone, PartialEq)]
pub struct AirspaceRecord {
    pub name: String,
    /// Upper bound, e.g. `2500m AMSL`
    pub ceiling: String,
    /// Lower bound, `0` for ground level
    pub floor: String,
    pub corners: [GeoPoint; 4],
}
