//! Task-level records assembled during translation
//!
//! The numeric values written into the target profile are part of the
//! target application's file format and must not change.

/// Sentinel index for unused task point and start point slots
pub const UNSET_INDEX: i32 = -1;

/// Start sector geometry understood by the target application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartType {
    #[default]
    Circle,
    Line,
    Sector,
}

impl StartType {
    /// Numeric value for the `StartLine` profile key
    pub fn profile_value(self) -> u32 {
        match self {
            StartType::Circle => 0,
            StartType::Line => 1,
            StartType::Sector => 2,
        }
    }
}

/// Finish sector geometry understood by the target application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinishType {
    #[default]
    Circle,
    Line,
    Sector,
}

impl FinishType {
    /// Numeric value for the `FinishLine` profile key
    pub fn profile_value(self) -> u32 {
        match self {
            FinishType::Circle => 0,
            FinishType::Line => 1,
            FinishType::Sector => 2,
        }
    }
}

/// Turnpoint sector geometry
///
/// `Fai` and `Circle` describe the single task-wide sector type of a
/// classic task; `AatCircle` and `AatSector` are per-turnpoint geometries
/// of assigned-area tasks. Unused task point slots stay `Unset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectorType {
    #[default]
    Unset,
    Fai,
    Circle,
    AatCircle,
    AatSector,
}

impl SectorType {
    /// Numeric value for the `FAISector` profile key
    ///
    /// Only `Fai` and `Circle` ever reach the profile; everything else
    /// serializes as the target's default (circle).
    pub fn profile_value(self) -> u32 {
        match self {
            SectorType::Fai => 1,
            _ => 0,
        }
    }
}

/// Waypoint auto-advance behavior of the target application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoAdvanceMode {
    Manual,
    Auto,
    Arm,
    #[default]
    ArmStart,
}

impl AutoAdvanceMode {
    /// Parse the numeric `AutoAdvance` profile value
    pub fn from_profile(value: u32) -> Option<Self> {
        match value {
            0 => Some(AutoAdvanceMode::Manual),
            1 => Some(AutoAdvanceMode::Auto),
            2 => Some(AutoAdvanceMode::Arm),
            3 => Some(AutoAdvanceMode::ArmStart),
            _ => None,
        }
    }

    pub fn profile_value(self) -> u32 {
        match self {
            AutoAdvanceMode::Manual => 0,
            AutoAdvanceMode::Auto => 1,
            AutoAdvanceMode::Arm => 2,
            AutoAdvanceMode::ArmStart => 3,
        }
    }
}

/// Task-wide settings accumulated over the translation pass
///
/// One instance per translation; finalized state is serialized into the
/// target profile. Radii and heights are in meters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskSettings {
    pub aat_enabled: bool,
    /// Minimum task time in minutes (AAT tasks only)
    pub aat_task_length: u32,
    pub auto_advance: AutoAdvanceMode,
    pub start_type: StartType,
    pub finish_type: FinishType,
    pub sector_type: SectorType,
    pub start_radius: u32,
    pub finish_radius: u32,
    pub sector_radius: u32,
    pub start_max_height: u32,
    pub finish_min_height: u32,
}

/// One slot of the fixed-size task point array
///
/// Slots not linked to a waypoint keep the unset sentinel: index −1 and a
/// full-circle radial range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskPoint {
    /// Waypoint number this slot refers to, or [`UNSET_INDEX`]
    pub index: i32,
    pub sector_type: SectorType,
    pub sector_radius: u32,
    /// First bound of the AAT radial corridor, degrees in `[0, 360)`
    pub aat_start_radial: u32,
    /// Second bound of the AAT radial corridor
    pub aat_finish_radial: u32,
}

impl TaskPoint {
    pub fn is_set(&self) -> bool {
        self.index != UNSET_INDEX
    }
}

impl Default for TaskPoint {
    fn default() -> Self {
        Self {
            index: UNSET_INDEX,
            sector_type: SectorType::Unset,
            sector_radius: 0,
            aat_start_radial: 0,
            aat_finish_radial: 360,
        }
    }
}

/// One slot of the fixed-size alternate start point array
///
/// The source task format never produces active entries, but the slot
/// array must exist and be correctly sized for the target task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartPoint {
    pub index: i32,
}

impl Default for StartPoint {
    fn default() -> Self {
        Self { index: UNSET_INDEX }
    }
}
