//! Participant identifiers and seed derivation.
//!
//! Session platforms hand out either integer ids or opaque string labels.
//! Integer-valued inputs seed the generator directly; any other string is
//! reduced to 64 bits with SHA-256 so that the mapping is stable across
//! platforms and releases.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};
use stimulus_core::types::ParticipantError;

/// Participant identifier or explicit seed value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeedSource {
    /// Integer id or seed
    Numeric(u64),
    /// Free-form label
    Text(String),
}

/// Participant identifier.
pub type ParticipantId = SeedSource;

impl SeedSource {
    /// Reduces the value to a 64-bit seed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stimulus_engine::rng::SeedSource;
    ///
    /// assert_eq!(SeedSource::from(42u64).to_seed(), 42);
    /// assert_eq!(SeedSource::from("42").to_seed(), 42);
    /// assert_eq!(
    ///     SeedSource::from("anna").to_seed(),
    ///     SeedSource::from("anna").to_seed()
    /// );
    /// ```
    pub fn to_seed(&self) -> u64 {
        match self {
            SeedSource::Numeric(n) => *n,
            SeedSource::Text(s) => match s.trim().parse::<u64>() {
                Ok(n) => n,
                Err(_) => hash_label(s.trim()),
            },
        }
    }

    fn is_blank(&self) -> bool {
        matches!(self, SeedSource::Text(s) if s.trim().is_empty())
    }
}

fn hash_label(label: &str) -> u64 {
    let digest = Sha256::digest(label.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}

impl From<u64> for SeedSource {
    fn from(value: u64) -> Self {
        SeedSource::Numeric(value)
    }
}

impl From<&str> for SeedSource {
    fn from(value: &str) -> Self {
        SeedSource::Text(value.to_string())
    }
}

impl From<String> for SeedSource {
    fn from(value: String) -> Self {
        SeedSource::Text(value)
    }
}

impl FromStr for SeedSource {
    type Err = ParticipantError;

    /// Parses command-line input; integers become [`SeedSource::Numeric`].
    fn from_str(s: &str) -> Result<Self, ParticipantError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParticipantError::EmptyIdentifier);
        }
        Ok(match trimmed.parse::<u64>() {
            Ok(n) => SeedSource::Numeric(n),
            Err(_) => SeedSource::Text(trimmed.to_string()),
        })
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedSource::Numeric(n) => write!(f, "{}", n),
            SeedSource::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Resolves the generator seed for a participant.
///
/// An explicit `seed` takes precedence; otherwise the participant id itself
/// is the seed.
///
/// # Errors
///
/// Returns [`ParticipantError::EmptyIdentifier`] for a blank id and
/// [`ParticipantError::EmptySeed`] for a blank explicit seed. A blank id is
/// rejected even when a seed is supplied, because the id is still recorded
/// alongside the frames.
pub fn resolve_seed(
    participant: &ParticipantId,
    seed: Option<&SeedSource>,
) -> Result<u64, ParticipantError> {
    if participant.is_blank() {
        return Err(ParticipantError::EmptyIdentifier);
    }
    match seed {
        Some(s) if s.is_blank() => Err(ParticipantError::EmptySeed),
        Some(s) => Ok(s.to_seed()),
        None => Ok(participant.to_seed()),
    }
}
