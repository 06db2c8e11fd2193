//! Numeric helpers shared by the engine and the geometry encoder.

pub mod rounding;

pub use rounding::{round_to, round2};
