pub mod coord;
pub mod io;
