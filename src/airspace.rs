//! Penalty zone to airspace translation
//!
//! The simulator penalizes entry into rectangular zones defined per task.
//! The target application has no such concept, but it can display and warn
//! about arbitrary airspace polygons, so each penalty zone becomes a
//! prohibited-area polygon in the target's airspace file.

use crate::geo::CoordConverter;
use crate::ini::KeyValueStore;
use crate::source::SourcePenaltyZone;
use crate::types::AirspaceRecord;
use crate::utils::coord::{lat_dd_mm_ss, lon_dd_mm_ss};
use crate::utils::io::LineSink;
use std::io;

/// Profile key holding the target's airspace file reference
pub const AIRSPACE_FILE_KEY: &str = "AirspaceFile";

const FILE_HEADER: [&str; 3] = [
    "**********************************************",
    "* Task penalty zones generated with task2nav *",
    "**********************************************",
];

/// Translates penalty zones into airspace polygon records
pub struct PenaltyZoneTranslator<'a, C: CoordConverter> {
    coord: &'a C,
    airspace_ref: String,
}

impl<'a, C: CoordConverter> PenaltyZoneTranslator<'a, C> {
    /// `airspace_ref` is the path the target profile should point at when
    /// the task has penalty zones
    pub fn new(coord: &'a C, airspace_ref: impl Into<String>) -> Self {
        Self {
            coord,
            airspace_ref: airspace_ref.into(),
        }
    }

    /// Translate all penalty zones of a task
    ///
    /// An empty input clears the profile's airspace file reference to the
    /// quoted-empty sentinel rather than leaving the key out, so a stale
    /// reference from a previous task cannot survive. Corners stay in
    /// source order.
    pub fn translate<P: KeyValueStore>(
        &self,
        zones: &[SourcePenaltyZone],
        profile: &mut P,
    ) -> Vec<AirspaceRecord> {
        if zones.is_empty() {
            profile.set("", AIRSPACE_FILE_KEY, "\"\"".to_string());
            return Vec::new();
        }

        profile.set("", AIRSPACE_FILE_KEY, format!("\"{}\"", self.airspace_ref));

        zones
            .iter()
            .enumerate()
            .map(|(i, zone)| AirspaceRecord {
                name: format!("Penalty Zone {}", i + 1),
                ceiling: format!("{}m AMSL", zone.top),
                floor: if zone.base == 0 {
                    "0".to_string()
                } else {
                    format!("{}m AMSL", zone.base)
                },
                corners: zone.corners.map(|(x, y)| self.coord.point(x, y)),
            })
            .collect()
    }
}

/// Emit the airspace definition file
///
/// Header comment block first, then one `AC P` polygon block per record.
/// Only call this when records exist; an empty record set means the
/// profile no longer references an airspace file at all.
pub fn write_airspace_file<S: LineSink>(records: &[AirspaceRecord], sink: &mut S) -> io::Result<()> {
    for line in FILE_HEADER {
        sink.append_line(line)?;
    }

    for record in records {
        sink.append_line("")?;
        sink.append_line("AC P")?;
        sink.append_line(&format!("AN {}", record.name))?;
        sink.append_line(&format!("AH {}", record.ceiling))?;
        sink.append_line(&format!("AL {}", record.floor))?;
        for corner in &record.corners {
            sink.append_line(&format!(
                "DP {} {}",
                lat_dd_mm_ss(corner.lat),
                lon_dd_mm_ss(corner.lon),
            ))?;
        }
    }

    Ok(())
}
