//! FFI boundary for Python
//!
//! Exposes the simulator as a Python class. Conversions to Python objects
//! are kept here so the engine stays free of PyO3 types.

pub mod simulator;
pub mod types;
