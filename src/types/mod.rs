mod airspace;
mod task;
mod waypoint;

pub use airspace::AirspaceRecord;
pub use task::{
    AutoAdvanceMode, FinishType, SectorType, StartPoint, StartType, TaskPoint, TaskSettings,
    UNSET_INDEX,
};
pub use waypoint::{WAYPOINT_INDEX_OFFSET, Waypoint, WaypointFlags};
