//! Parameters and their command-line resolution

pub mod args;
pub mod params;
