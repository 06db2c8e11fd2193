//! # stimulus_engine: Per-Participant Stimulus Generation
//!
//! ## Layer 2 Role
//!
//! stimulus_engine turns a validated [`Experiment`](stimulus_core::catalog::Experiment)
//! and a participant identifier into the participant's complete, ordered
//! frame sequence:
//! - `rng`: seed resolution from participant ids and the owned [`rng::StimulusRng`]
//! - `labels`: the named-mode label rotation pool
//! - `assembly`: block construction, mode ordering and round numbering
//!
//! Generation is a pure function of (experiment, participant id, optional
//! seed). There is no shared mutable state, so participants may be generated
//! on any thread.
//!
//! ## Usage Examples
//!
//! ```rust
//! use stimulus_core::catalog::ExperimentConfig;
//! use stimulus_engine::{generate, ParticipantId, SeedSource};
//!
//! let experiment = ExperimentConfig::default().validate().unwrap();
//!
//! let a = generate(&experiment, &ParticipantId::from(7u64), None).unwrap();
//! let b = generate(&experiment, &ParticipantId::from("anyone"), Some(&SeedSource::from(7u64))).unwrap();
//!
//! // An explicit seed reproduces the frames of the participant it names.
//! assert_eq!(a.frames, b.frames);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod assembly;
pub mod labels;
pub mod rng;

pub use assembly::{generate, generate_from_seed, GenerationState};
pub use labels::LabelPool;
pub use rng::{ParticipantId, SeedSource, StimulusRng};
