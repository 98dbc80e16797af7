use crate::geo::GeoPoint;
use std::ops::BitOr;

/// Base added to the 1-based task index to form the waypoint number
///
/// Keeps task waypoint numbers clear of any waypoints already present in
/// the target application's own database.
pub const WAYPOINT_INDEX_OFFSET: u32 = 100_000;

/// Waypoint attribute bits of the target waypoint format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WaypointFlags(u32);

impl WaypointFlags {
    pub const AIRPORT: Self = Self(1 << 0);
    pub const TURNPOINT: Self = Self(1 << 1);
    pub const LANDABLE: Self = Self(1 << 2);
    pub const HOME: Self = Self(1 << 3);

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl BitOr for WaypointFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// A translated task turnpoint
///
/// Created once during the translation pass and never mutated afterwards.
/// `name` carries the role-prefixed display name (`S:`, `F:` or the leg
/// number), `comment` the waypoint's original name from the source task.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub number: u32,
    pub position: GeoPoint,
    /// Meters above mean sea level
    pub altitude: f64,
    pub flags: WaypointFlags,
    pub name: String,
    pub comment: String,
    pub in_task: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits() {
        let flags = WaypointFlags::TURNPOINT | WaypointFlags::LANDABLE;
        assert_eq!(flags.bits(), 0b0110);
        assert!(flags.contains(WaypointFlags::TURNPOINT));
        assert!(!flags.contains(WaypointFlags::HOME));
    }
}
