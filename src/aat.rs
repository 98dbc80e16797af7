//! AAT radial corridor derivation
//!
//! Assigned-area turnpoints are not rounded at a point; the pilot may turn
//! anywhere inside a circle or an angular corridor around the turnpoint.
//! The corridor is not stored in the source task. It has to be rebuilt from
//! the inbound and outbound leg directions: the corridor bisects them and
//! spans the source sector angle.

use crate::geo::{self, GeoPoint};
use crate::types::{SectorType, TaskPoint};

/// Fill one task point slot with AAT sector geometry
///
/// A 360° source sector becomes an AAT circle keeping the slot's
/// full-circle radial range; anything else becomes an AAT sector whose
/// radial bounds are derived from the neighbor bearings.
pub fn apply(
    point: &mut TaskPoint,
    angle: u32,
    radius: u32,
    previous: GeoPoint,
    current: GeoPoint,
    next: GeoPoint,
) {
    if angle == 360 {
        point.sector_type = SectorType::AatCircle;
        point.sector_radius = radius;
        return;
    }

    point.sector_type = SectorType::AatSector;
    point.sector_radius = radius;

    let (start, finish) = radial_range(previous, current, next, angle);
    point.aat_start_radial = start;
    point.aat_finish_radial = finish;
}

/// Radial corridor bounds for an AAT sector turnpoint
///
/// Bearings are taken from both neighbors towards the turnpoint and
/// bisected. The two candidate bisectors are 180° apart; when the angular
/// gap between the neighbor bearings exceeds 180° the naive midpoint lies
/// on the wrong side and is flipped. The flip rule is the one the target
/// application expects; it is validated by tests, not re-derived.
///
/// Returns `(start_radial, finish_radial)` in degrees, both in `[0, 360)`,
/// spanning `angle` degrees around the bisector.
pub fn radial_range(
    previous: GeoPoint,
    current: GeoPoint,
    next: GeoPoint,
    angle: u32,
) -> (u32, u32) {
    let angle1 = geo::bearing(previous, current);
    let angle2 = geo::bearing(next, current);

    let half_angle = if angle1 == angle2 {
        angle1
    } else {
        let mid = ((angle1 + angle2) as f64 / 2.0).round() as u32;
        if angle1.abs_diff(angle2) > 180 {
            (mid + 180) % 360
        } else {
            mid
        }
    };

    let start = (360.0 + half_angle as f64 - angle as f64 / 2.0) as u32 % 360;
    let finish = (360.0 + half_angle as f64 + angle as f64 / 2.0) as u32 % 360;
    (start, finish)
}
