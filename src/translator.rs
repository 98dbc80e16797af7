//! Task translation orchestration
//!
//! One [`TaskTranslator::translate`] call performs a single linear pass
//! over the source task's waypoints (the launch point at index 0 is
//! skipped), assembling the waypoint, task point and start point record
//! sets plus the task-wide settings, and serializing the settings into the
//! target profile. Warnings are collected in emission order; the caller
//! must surface all of them.

use crate::aat;
use crate::error::{Error, Result, Warning};
use crate::geo::CoordConverter;
use crate::ini::KeyValueStore;
use crate::sector::{Role, SectorNormalizer};
use crate::source::{self, SourceTask, SourceWaypoint};
use crate::types::{
    AutoAdvanceMode, StartPoint, TaskPoint, TaskSettings, WAYPOINT_INDEX_OFFSET, Waypoint,
    WaypointFlags,
};
use crate::utils::coord::{lat_dd_mm_ff, lon_dd_mm_ff};
use crate::utils::io::LineSink;
use std::io;

/// Capacity and timing parameters of one translation
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Minimum task time in minutes; nonzero turns the task into an AAT
    pub aat_minutes: u32,
    /// Task point slots available in the target task file
    pub max_task_points: usize,
    /// Alternate start point slots available in the target task file
    pub max_start_points: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            aat_minutes: 0,
            max_task_points: 10,
            max_start_points: 10,
        }
    }
}

/// The assembled output record set of one translation
///
/// `task_points` and `start_points` are fixed-size slot arrays sized per
/// the [`TranslatorConfig`]; unused slots keep their unset sentinel state.
#[derive(Debug, Clone)]
pub struct Translation {
    pub settings: TaskSettings,
    pub task_points: Vec<TaskPoint>,
    pub start_points: Vec<StartPoint>,
    pub waypoints: Vec<Waypoint>,
    /// False when disagreeing turnpoints forced a uniform sector
    /// type/radius across all intermediates
    pub tps_valid: bool,
}

impl Translation {
    /// Emit the waypoint file, one line per turnpoint
    ///
    /// Line grammar:
    /// `<index>,<lat_ddmm>,<lon_ddmm>,<alt>M,T,<name>,<original_name>`
    pub fn write_waypoint_file<S: LineSink>(&self, sink: &mut S) -> io::Result<()> {
        for waypoint in &self.waypoints {
            let index = waypoint.number - WAYPOINT_INDEX_OFFSET;
            sink.append_line(&format!(
                "{index},{},{},{}M,T,{},{}",
                lat_dd_mm_ff(waypoint.position.lat),
                lon_dd_mm_ff(waypoint.position.lon),
                format_altitude(waypoint.altitude),
                waypoint.name,
                waypoint.comment,
            ))?;
        }
        Ok(())
    }
}

/// Translates a source task into the target record set
pub struct TaskTranslator<'a, C: CoordConverter> {
    coord: &'a C,
    config: TranslatorConfig,
}

impl<'a, C: CoordConverter> TaskTranslator<'a, C> {
    pub fn new(coord: &'a C, config: TranslatorConfig) -> Self {
        Self { coord, config }
    }

    /// Translate one task
    ///
    /// Reads the `AutoAdvance` preference from `profile`, then writes the
    /// finalized task settings back into it under the target's literal key
    /// names. Fatal errors leave `profile` untouched and produce no
    /// records; non-fatal fidelity losses are appended to `warnings`.
    pub fn translate<P: KeyValueStore>(
        &self,
        task: &SourceTask,
        profile: &mut P,
        warnings: &mut Vec<Warning>,
    ) -> Result<Translation> {
        let count = task.waypoints.len();

        // launch does not occupy a task point slot
        if count > 0 && count - 1 > self.config.max_task_points {
            return Err(Error::CapacityExceeded {
                count: count - 1,
                max: self.config.max_task_points,
            });
        }

        let mut settings = TaskSettings {
            aat_enabled: self.config.aat_minutes > 0,
            aat_task_length: self.config.aat_minutes,
            auto_advance: auto_advance_from(profile),
            ..TaskSettings::default()
        };

        let mut task_points = vec![TaskPoint::default(); self.config.max_task_points];
        let start_points = vec![StartPoint::default(); self.config.max_start_points];
        let mut waypoints = Vec::with_capacity(count.saturating_sub(1));
        let mut normalizer = SectorNormalizer::new();

        for (i, tp) in task.waypoints.iter().enumerate().skip(1) {
            let name = display_name(i, count, &tp.name);
            let position = self.coord.point(tp.x, tp.y);

            // a declared minimum altitude overrides the terrain altitude
            let altitude = if tp.min_altitude != 0.0 {
                tp.min_altitude
            } else {
                tp.altitude
            };

            let number = WAYPOINT_INDEX_OFFSET + i as u32;
            task_points[i - 1].index = number as i32;
            waypoints.push(Waypoint {
                number,
                position,
                altitude,
                flags: WaypointFlags::TURNPOINT,
                name: name.clone(),
                comment: tp.name.clone(),
                in_task: true,
            });

            match tp.sector_shape {
                source::SECTOR_CLASSIC => {
                    let intermediate = i > 1 && i < count - 1;
                    if settings.aat_enabled && intermediate {
                        let previous = self.position(&task.waypoints[i - 1]);
                        let next = self.position(&task.waypoints[i + 1]);
                        aat::apply(
                            &mut task_points[i - 1],
                            tp.angle,
                            tp.radius,
                            previous,
                            position,
                            next,
                        );
                    } else {
                        let role = if i == 1 {
                            Role::Start
                        } else if i == count - 1 {
                            Role::Finish
                        } else {
                            Role::Intermediate { established: i > 2 }
                        };
                        normalizer.normalize(
                            &mut settings,
                            role,
                            tp.angle,
                            tp.radius,
                            &name,
                            warnings,
                        );
                    }

                    if i == 1 {
                        settings.start_radius = tp.radius;
                        settings.start_max_height = tp.height;
                    } else if i == count - 1 {
                        settings.finish_radius = tp.radius;
                        // the target only supports above-ground finish
                        // minimums, which this pipeline cannot compute
                        settings.finish_min_height = 0;
                    }
                }
                source::SECTOR_WINDOW => {
                    // circle approximation is left to the caller
                    warnings.push(Warning::WindowSectorApproximated { waypoint: name });
                }
                code => {
                    return Err(Error::UnsupportedSectorShape {
                        waypoint: name,
                        code,
                    });
                }
            }
        }

        normalizer.summarize(warnings);
        let tps_valid = normalizer.tps_valid();

        write_profile(&settings, profile);

        Ok(Translation {
            settings,
            task_points,
            start_points,
            waypoints,
            tps_valid,
        })
    }

    fn position(&self, waypoint: &SourceWaypoint) -> crate::geo::GeoPoint {
        self.coord.point(waypoint.x, waypoint.y)
    }
}

/// Role-prefixed display name: `S:` for the start, `F:` for the finish,
/// the leg number for everything in between
fn display_name(i: usize, count: usize, name: &str) -> String {
    if i == 1 {
        format!("S:{name}")
    } else if i == count - 1 {
        format!("F:{name}")
    } else {
        format!("{}:{name}", i - 1)
    }
}

fn auto_advance_from<P: KeyValueStore>(profile: &P) -> AutoAdvanceMode {
    profile
        .get("", "AutoAdvance")
        .and_then(|value| value.parse().ok())
        .and_then(AutoAdvanceMode::from_profile)
        .unwrap_or_default()
}

/// Serialize the finalized settings under the target's literal key names
fn write_profile<P: KeyValueStore>(settings: &TaskSettings, profile: &mut P) {
    let mut set = |key: &str, value: String| profile.set("", key, value);

    set("StartLine", settings.start_type.profile_value().to_string());
    set("StartMaxHeight", settings.start_max_height.to_string());
    set("StartMaxHeightMargin", "0".to_string());
    set("StartHeightRef", "1".to_string()); // AMSL
    set("StartRadius", settings.start_radius.to_string());
    set("StartMaxSpeed", "0".to_string());
    set("StartMaxSpeedMargin", "0".to_string());

    set("FAISector", settings.sector_type.profile_value().to_string());
    set("Radius", settings.sector_radius.to_string());

    set("FinishLine", settings.finish_type.profile_value().to_string());
    set("FinishMinHeight", settings.finish_min_height.to_string());
    set("FinishRadius", settings.finish_radius.to_string());
    set("FAIFinishHeight", settings.finish_min_height.to_string());

    set("AATEnabled", u32::from(settings.aat_enabled).to_string());
    set("AATTaskLength", settings.aat_task_length.to_string());
    set(
        "AutoAdvance",
        settings.auto_advance.profile_value().to_string(),
    );
}

/// Altitude text for the waypoint file; whole meters print without a
/// fractional part
fn format_altitude(altitude: f64) -> String {
    if altitude.fract() == 0.0 {
        format!("{}", altitude as i64)
    } else {
        format!("{altitude}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(display_name(1, 5, "Alpha"), "S:Alpha");
        assert_eq!(display_name(2, 5, "Bravo"), "1:Bravo");
        assert_eq!(display_name(3, 5, "Charlie"), "2:Charlie");
        assert_eq!(display_name(4, 5, "Delta"), "F:Delta");
    }

    #[test]
    fn altitude_formatting() {
        assert_eq!(format_altitude(351.0), "351");
        assert_eq!(format_altitude(351.5), "351.5");
        assert_eq!(format_altitude(0.0), "0");
    }
}
