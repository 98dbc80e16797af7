//! Per-waypoint sector type normalization
//!
//! The simulator describes every classic turnpoint as an angular sector of
//! 90, 180, 270 or 360 degrees. The target application only knows start and
//! finish lines/circles/sectors plus a single task-wide sector type for all
//! intermediate turnpoints. This module reconciles the two vocabularies,
//! substituting the closest supported geometry and keeping track of whether
//! the task survived without forcing a uniform sector onto disagreeing
//! turnpoints.

use crate::error::Warning;
use crate::types::{FinishType, SectorType, StartType, TaskSettings};

/// Role of a waypoint within the task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Start,
    Finish,
    /// `established` is true once an earlier intermediate waypoint has
    /// already pinned the task-wide sector type and radius
    Intermediate { established: bool },
}

/// Running cross-waypoint consistency state
///
/// One instance per translation pass. [`SectorNormalizer::normalize`] folds
/// each classic non-AAT waypoint into the shared [`TaskSettings`];
/// [`SectorNormalizer::summarize`] emits the aggregated warning if a
/// uniform sector type had to be forced.
#[derive(Debug)]
pub struct SectorNormalizer {
    tps_valid: bool,
}

impl SectorNormalizer {
    pub fn new() -> Self {
        Self { tps_valid: true }
    }

    /// True while no intermediate waypoint has disagreed on sector
    /// type or radius
    pub fn tps_valid(&self) -> bool {
        self.tps_valid
    }

    /// Fold one waypoint's sector geometry into the task settings
    ///
    /// `angle` and `radius` come from the source task; `waypoint` is the
    /// display name used in warnings. Unrecognized angles are ignored.
    pub fn normalize(
        &mut self,
        settings: &mut TaskSettings,
        role: Role,
        angle: u32,
        radius: u32,
        waypoint: &str,
        warnings: &mut Vec<Warning>,
    ) {
        // The target has no 270° primitive; warn once and dispatch the
        // waypoint as a full circle.
        let angle = if angle == 270 {
            warnings.push(Warning::ObtuseSectorApproximated {
                waypoint: waypoint.to_string(),
            });
            360
        } else {
            angle
        };

        match (role, angle) {
            (Role::Start, 90) => settings.start_type = StartType::Sector,
            (Role::Start, 180) => settings.start_type = StartType::Line,
            (Role::Start, 360) => settings.start_type = StartType::Circle,

            (Role::Finish, 90) => settings.finish_type = FinishType::Sector,
            (Role::Finish, 180) => settings.finish_type = FinishType::Line,
            (Role::Finish, 360) => settings.finish_type = FinishType::Circle,

            (Role::Intermediate { established }, 90) => {
                self.pin(settings, SectorType::Fai, radius, established, waypoint, warnings);
            }
            (Role::Intermediate { established }, 360) => {
                self.pin(settings, SectorType::Circle, radius, established, waypoint, warnings);
            }
            (Role::Intermediate { established }, 180) => {
                // No line primitive for intermediate turnpoints either;
                // an FAI sector is the closest match.
                warnings.push(Warning::LineSectorApproximated {
                    waypoint: waypoint.to_string(),
                });
                if established && settings.sector_type == SectorType::Fai {
                    self.tps_valid = false;
                } else {
                    settings.sector_type = SectorType::Fai;
                    settings.sector_radius = radius;
                }
            }

            _ => {}
        }
    }

    /// Pin the task-wide sector type, resolving conflicts deterministically:
    /// the first-established type wins and the smallest radius wins.
    fn pin(
        &mut self,
        settings: &mut TaskSettings,
        wanted: SectorType,
        radius: u32,
        established: bool,
        waypoint: &str,
        warnings: &mut Vec<Warning>,
    ) {
        // An earlier intermediate may have pinned nothing (window sector,
        // unrecognized angle); only a real baseline can conflict.
        if !established || settings.sector_type == SectorType::Unset {
            settings.sector_type = wanted;
            settings.sector_radius = radius;
        } else if settings.sector_type == wanted {
            if settings.sector_radius != radius {
                let radius = settings.sector_radius.min(radius);
                warnings.push(Warning::SectorRadiusConflict {
                    waypoint: waypoint.to_string(),
                    radius,
                });
                settings.sector_radius = radius;
                self.tps_valid = false;
            }
        } else {
            // Disagreeing type; conform silently, the aggregated warning
            // covers all of these at once.
            settings.sector_radius = settings.sector_radius.min(radius);
            self.tps_valid = false;
        }
    }

    /// Emit the aggregated warning after the full pass, if any waypoint
    /// forced a uniform sector type or radius
    pub fn summarize(&self, warnings: &mut Vec<Warning>) {
        if !self.tps_valid {
            warnings.push(Warning::MixedSectorTypes);
        }
    }
}

impl Default for SectorNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_matches;

    fn intermediate(i: usize) -> Role {
        Role::Intermediate { established: i > 2 }
    }

    #[test]
    fn start_and_finish_roles_map_directly() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, Role::Start, 90, 1000, "S:A", &mut warnings);
        assert_eq!(settings.start_type, StartType::Sector);

        normalizer.normalize(&mut settings, Role::Start, 180, 1000, "S:A", &mut warnings);
        assert_eq!(settings.start_type, StartType::Line);

        normalizer.normalize(&mut settings, Role::Finish, 360, 3000, "F:B", &mut warnings);
        assert_eq!(settings.finish_type, FinishType::Circle);

        assert!(warnings.is_empty());
        assert!(normalizer.tps_valid());
    }

    #[test]
    fn uniform_fai_sectors_stay_valid() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        for i in 2..6 {
            normalizer.normalize(&mut settings, intermediate(i), 90, 500, "wp", &mut warnings);
        }

        assert_eq!(settings.sector_type, SectorType::Fai);
        assert_eq!(settings.sector_radius, 500);
        assert!(normalizer.tps_valid());
        normalizer.summarize(&mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn radius_conflict_uses_the_minimum_and_warns() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, intermediate(2), 90, 2000, "1:A", &mut warnings);
        normalizer.normalize(&mut settings, intermediate(3), 90, 500, "2:B", &mut warnings);

        assert_eq!(settings.sector_radius, 500);
        assert!(!normalizer.tps_valid());
        assert_matches!(
            warnings.as_slice(),
            [Warning::SectorRadiusConflict { radius: 500, .. }]
        );
    }

    #[test]
    fn type_conflict_keeps_first_established_type() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, intermediate(2), 360, 1000, "1:A", &mut warnings);
        normalizer.normalize(&mut settings, intermediate(3), 90, 700, "2:B", &mut warnings);

        assert_eq!(settings.sector_type, SectorType::Circle);
        assert_eq!(settings.sector_radius, 700);
        assert!(!normalizer.tps_valid());

        // conflict itself is silent, the pass-end summary covers it
        assert!(warnings.is_empty());
        normalizer.summarize(&mut warnings);
        assert_eq!(warnings, vec![Warning::MixedSectorTypes]);
    }

    #[test]
    fn line_sector_falls_back_to_fai_with_warning() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, intermediate(2), 180, 800, "1:A", &mut warnings);

        assert_eq!(settings.sector_type, SectorType::Fai);
        assert_eq!(settings.sector_radius, 800);
        assert!(normalizer.tps_valid());
        assert_matches!(warnings.as_slice(), [Warning::LineSectorApproximated { .. }]);
    }

    #[test]
    fn line_after_established_fai_invalidates() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, intermediate(2), 90, 500, "1:A", &mut warnings);
        normalizer.normalize(&mut settings, intermediate(3), 180, 800, "2:B", &mut warnings);

        assert_eq!(settings.sector_type, SectorType::Fai);
        assert_eq!(settings.sector_radius, 500);
        assert!(!normalizer.tps_valid());
        assert_matches!(warnings.as_slice(), [Warning::LineSectorApproximated { .. }]);
    }

    #[test]
    fn obtuse_sector_rewrites_to_circle_with_warning() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, intermediate(2), 270, 1500, "1:A", &mut warnings);

        assert_eq!(settings.sector_type, SectorType::Circle);
        assert_eq!(settings.sector_radius, 1500);
        assert_matches!(
            warnings.as_slice(),
            [Warning::ObtuseSectorApproximated { .. }]
        );
    }

    #[test]
    fn first_pin_after_a_skipped_intermediate_establishes_the_baseline() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        // The first intermediate pins nothing, so the second one still
        // establishes the baseline instead of conflicting with Unset.
        normalizer.normalize(&mut settings, intermediate(2), 45, 500, "1:A", &mut warnings);
        normalizer.normalize(&mut settings, intermediate(3), 90, 1500, "2:B", &mut warnings);

        assert_eq!(settings.sector_type, SectorType::Fai);
        assert_eq!(settings.sector_radius, 1500);
        assert!(normalizer.tps_valid());
        normalizer.summarize(&mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn unrecognized_angles_are_ignored() {
        let mut normalizer = SectorNormalizer::new();
        let mut settings = TaskSettings::default();
        let mut warnings = Vec::new();

        normalizer.normalize(&mut settings, intermediate(2), 45, 500, "1:A", &mut warnings);

        assert_eq!(settings, TaskSettings::default());
        assert!(warnings.is_empty());
        assert!(normalizer.tps_valid());
    }
}
