//! Core stimulus types.
//!
//! This module provides:
//! - `asset`: The closed set of asset classes offered in every frame
//! - `frame`: Frame, column and sequence types produced by generation
//! - `error`: Structured error types for catalog, participant, geometry and config failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`AssetClass`] from `asset`
//! - [`Frame`], [`Column`], [`FrameSequence`], [`FrameRecord`], [`PresentationMode`], [`Scaling`] from `frame`
//! - [`CatalogError`], [`ParticipantError`], [`GeometryError`], [`ConfigError`] from `error`

pub mod asset;
pub mod error;
pub mod frame;

pub use asset::AssetClass;
pub use error::{CatalogError, ConfigError, GeometryError, ParticipantError};
pub use frame::{Column, Frame, FrameRecord, FrameSequence, PresentationMode, Scaling};
