#![doc = include_str!("../README.md")]

pub use crate::airspace::{PenaltyZoneTranslator, write_airspace_file};
pub use crate::error::{Error, Result, Warning};
pub use crate::geo::{CoordConverter, GeoPoint, bearing};
pub use crate::ini::{IniFile, KeyValueStore};
pub use crate::source::{SourcePenaltyZone, SourceTask, SourceWaypoint};
pub use crate::translator::{TaskTranslator, Translation, TranslatorConfig};
pub use crate::types::*;

pub mod aat;
mod airspace;
mod error;
pub mod geo;
pub mod ini;
pub mod sector;
pub mod source;
mod translator;
mod types;
pub mod utils;
