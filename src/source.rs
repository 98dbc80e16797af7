//! Typed model of the simulator's task file
//!
//! The simulator stores everything in a flat `[Task]` section with
//! per-index keys (`TPName3`, `TPPosX3`, ...). This module pulls those
//! apart into typed records before any translation happens, so that the
//! translators never touch raw strings.

use crate::error::{Error, Result};
use crate::ini::KeyValueStore;
use std::str::FromStr;

/// Section holding the task definition in the source file
pub const TASK_SECTION: &str = "Task";

/// Sector shape code for angle-based classic sectors
pub const SECTOR_CLASSIC: u32 = 0;
/// Sector shape code for rectangular window sectors
pub const SECTOR_WINDOW: u32 = 1;

/// One turnpoint as declared by the simulator
///
/// `angle`, `radius` and `height` are only meaningful for classic sectors
/// and default to zero for anything else; the translator adjudicates
/// unknown `sector_shape` codes so the resulting error can name the
/// waypoint by its display name.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceWaypoint {
    pub name: String,
    /// Local planar position
    pub x: f64,
    pub y: f64,
    /// Terrain altitude in meters (`TPPosZ`)
    pub altitude: f64,
    /// Declared minimum altitude in meters (`TPWidth`); nonzero overrides
    /// the terrain altitude
    pub min_altitude: f64,
    /// Start gate maximum height in meters (`TPHeight`)
    pub height: u32,
    /// Sector angle in degrees (90, 180, 270 or 360)
    pub angle: u32,
    /// Sector radius in meters
    pub radius: u32,
    /// Raw sector shape code (`TPSectorType`)
    pub sector_shape: u32,
}

/// One rectangular penalty zone as declared by the simulator
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePenaltyZone {
    /// Ceiling altitude text, verbatim from the source (`PZTop`)
    pub top: String,
    /// Base altitude in meters, 0 meaning ground (`PZBase`)
    pub base: u32,
    /// Four corners in local planar coordinates, in source order
    pub corners: [(f64, f64); 4],
}

/// A fully parsed source task
///
/// `waypoints[0]` is the launch point; it never becomes a turnpoint and
/// the translators skip it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceTask {
    pub waypoints: Vec<SourceWaypoint>,
    pub penalty_zones: Vec<SourcePenaltyZone>,
}

impl SourceTask {
    /// Parse the `[Task]` section of a source file
    pub fn from_store<S: KeyValueStore>(store: &S) -> Result<Self> {
        let count: usize = value(store, "Count")?;

        let mut waypoints = Vec::with_capacity(count);
        for i in 0..count {
            waypoints.push(Self::waypoint(store, i)?);
        }

        // PZCount is absent from tasks saved without penalty zones
        let zone_count: usize = match store.get(TASK_SECTION, "PZCount") {
            Some(_) => value(store, "PZCount")?,
            None => 0,
        };
        let mut penalty_zones = Vec::with_capacity(zone_count);
        for i in 0..zone_count {
            penalty_zones.push(Self::penalty_zone(store, i)?);
        }

        Ok(Self {
            waypoints,
            penalty_zones,
        })
    }

    fn waypoint<S: KeyValueStore>(store: &S, i: usize) -> Result<SourceWaypoint> {
        let sector_shape = value(store, &format!("TPSectorType{i}"))?;

        // Only classic sectors carry angle geometry
        let (angle, radius, height) = if sector_shape == SECTOR_CLASSIC {
            (
                value(store, &format!("TPAngle{i}"))?,
                value(store, &format!("TPRadius{i}"))?,
                value(store, &format!("TPHeight{i}"))?,
            )
        } else {
            (0, 0, 0)
        };

        let min_altitude: u32 = value(store, &format!("TPWidth{i}"))?;

        Ok(SourceWaypoint {
            name: required(store, &format!("TPName{i}"))?.to_string(),
            x: value(store, &format!("TPPosX{i}"))?,
            y: value(store, &format!("TPPosY{i}"))?,
            altitude: value(store, &format!("TPPosZ{i}"))?,
            min_altitude: min_altitude as f64,
            height,
            angle,
            radius,
            sector_shape,
        })
    }

    fn penalty_zone<S: KeyValueStore>(store: &S, i: usize) -> Result<SourcePenaltyZone> {
        let mut corners = [(0.0, 0.0); 4];
        for (j, corner) in corners.iter_mut().enumerate() {
            *corner = (
                value(store, &format!("PZPos{j}X{i}"))?,
                value(store, &format!("PZPos{j}Y{i}"))?,
            );
        }

        Ok(SourcePenaltyZone {
            top: required(store, &format!("PZTop{i}"))?.to_string(),
            base: value(store, &format!("PZBase{i}"))?,
            corners,
        })
    }
}

fn required<'a, S: KeyValueStore>(store: &'a S, key: &str) -> Result<&'a str> {
    store.get(TASK_SECTION, key).ok_or_else(|| Error::MissingKey {
        section: TASK_SECTION.to_string(),
        key: key.to_string(),
    })
}

fn value<S: KeyValueStore, T: FromStr>(store: &S, key: &str) -> Result<T> {
    let raw = required(store, key)?;
    raw.parse().map_err(|_| Error::InvalidValue {
        section: TASK_SECTION.to_string(),
        key: key.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini::IniFile;
    use claims::{assert_matches, assert_ok};

    fn minimal_task() -> IniFile {
        IniFile::parse(
            "[Task]\n\
             Count=2\n\
             TPName0=Launch\n\
             TPPosX0=1000.0\nTPPosY0=2000.0\nTPPosZ0=350.5\n\
             TPWidth0=0\nTPHeight0=0\nTPAngle0=360\nTPRadius0=500\nTPSectorType0=0\n\
             TPName1=Finish\n\
             TPPosX1=5000.0\nTPPosY1=6000.0\nTPPosZ1=410.0\n\
             TPWidth1=0\nTPHeight1=1000\nTPAngle1=180\nTPRadius1=1000\nTPSectorType1=0\n",
        )
    }

    #[test]
    fn parses_waypoints() {
        let task = assert_ok!(SourceTask::from_store(&minimal_task()));
        assert_eq!(task.waypoints.len(), 2);
        assert_eq!(task.penalty_zones.len(), 0);

        let launch = &task.waypoints[0];
        assert_eq!(launch.name, "Launch");
        assert_eq!(launch.altitude, 350.5);
        assert_eq!(launch.angle, 360);

        let finish = &task.waypoints[1];
        assert_eq!(finish.height, 1000);
        assert_eq!(finish.radius, 1000);
        assert_eq!(finish.sector_shape, SECTOR_CLASSIC);
    }

    #[test]
    fn missing_pz_count_means_no_zones() {
        let task = assert_ok!(SourceTask::from_store(&minimal_task()));
        assert!(task.penalty_zones.is_empty());
    }

    #[test]
    fn parses_penalty_zones() {
        let mut file = minimal_task();
        file.set("Task", "PZCount", "1".to_string());
        file.set("Task", "PZTop0", "2500".to_string());
        file.set("Task", "PZBase0", "0".to_string());
        for j in 0..4 {
            file.set("Task", &format!("PZPos{j}X0"), format!("{}", 100 * j));
            file.set("Task", &format!("PZPos{j}Y0"), format!("{}", 200 * j));
        }

        let task = assert_ok!(SourceTask::from_store(&file));
        assert_eq!(task.penalty_zones.len(), 1);
        let zone = &task.penalty_zones[0];
        assert_eq!(zone.top, "2500");
        assert_eq!(zone.base, 0);
        assert_eq!(zone.corners[2], (200.0, 400.0));
    }

    #[test]
    fn missing_key_is_reported() {
        let file = IniFile::parse("[Task]\nCount=1\n");
        let error = SourceTask::from_store(&file).unwrap_err();
        assert_matches!(error, Error::MissingKey { .. });
    }

    #[test]
    fn malformed_number_is_reported() {
        let mut file = minimal_task();
        file.set("Task", "TPRadius1", "wide".to_string());
        let error = SourceTask::from_store(&file).unwrap_err();
        assert_matches!(
            error,
            Error::InvalidValue { ref key, .. } if key == "TPRadius1"
        );
    }

    #[test]
    fn window_sectors_skip_angle_keys() {
        let mut file = minimal_task();
        file.set("Task", "TPSectorType1", "1".to_string());
        // window sectors have no angle geometry; make sure it is not read
        file.set("Task", "TPAngle1", "not a number".to_string());

        let task = assert_ok!(SourceTask::from_store(&file));
        assert_eq!(task.waypoints[1].sector_shape, SECTOR_WINDOW);
        assert_eq!(task.waypoints[1].angle, 0);
        assert_eq!(task.waypoints[1].radius, 0);
    }
}
