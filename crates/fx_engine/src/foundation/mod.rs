//! Foundation utilities: math types, frame timing, logging

pub mod logging;
pub mod math;
pub mod time;
