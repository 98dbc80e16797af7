use std::fmt;
use std::io;

/// Unrecoverable translation errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Too many turnpoints ({count}) in the task (only {max} supported)")]
    CapacityExceeded { count: usize, max: usize },

    #[error("Unsupported sector shape code '{code}' specified for turnpoint '{waypoint}'")]
    UnsupportedSectorShape { waypoint: String, code: u32 },

    #[error("Missing key '{key}' in section '[{section}]' of the source task")]
    MissingKey { section: String, key: String },

    #[error("Invalid value '{value}' for key '{key}' in section '[{section}]'")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
}

/// Non-fatal fidelity losses encountered during translation
///
/// The target application cannot represent every sector geometry the
/// simulator allows. Each degraded approximation is recorded here, in
/// emission order, so the caller can surface all of them to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Target has no line primitive for intermediate turnpoints,
    /// an FAI sector was substituted
    LineSectorApproximated { waypoint: String },

    /// Target has no 270° sector primitive, a circle was substituted
    ObtuseSectorApproximated { waypoint: String },

    /// Rectangular window turnpoints are unsupported, a circle was substituted
    WindowSectorApproximated { waypoint: String },

    /// Intermediate turnpoints disagree on sector radius,
    /// the smallest one was applied to all of them
    SectorRadiusConflict { waypoint: String, radius: u32 },

    /// Intermediate turnpoints disagree on sector type, a single uniform
    /// type and radius was forced across the whole task
    MixedSectorTypes,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LineSectorApproximated { waypoint } => write!(
                f,
                "{waypoint}: the target application does not support line turnpoints. \
                 An FAI sector will be used instead; you may need to advance the \
                 waypoint manually after reaching it."
            ),
            Warning::ObtuseSectorApproximated { waypoint } => write!(
                f,
                "{waypoint}: the target application does not support turnpoints with a \
                 270 degree sector. A circle sector will be used instead; be careful to \
                 advance the waypoint in the simulator after the target application \
                 advances it."
            ),
            Warning::WindowSectorApproximated { waypoint } => write!(
                f,
                "{waypoint}: the target application does not support window turnpoints. \
                 A circle turnpoint will be used and you are responsible for crossing \
                 it at the correct height and heading."
            ),
            Warning::SectorRadiusConflict { waypoint, radius } => write!(
                f,
                "{waypoint}: the target application does not support different \
                 turnpoint radii. The smallest radius ({radius} m) will be used for \
                 all sectors."
            ),
            Warning::MixedSectorTypes => write!(
                f,
                "The target application does not support mixed turnpoint sector \
                 types. A single sector type and the smallest radius were applied to \
                 all intermediate turnpoints; you may need to advance some waypoints \
                 manually."
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
