//! Inbound device state topics.

use std::num::ParseFloatError;

use thiserror::Error;

use crate::models::RigState;

/// Failure to interpret an inbound `(topic, payload)` pair.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("unknown state topic: {0}")]
    UnknownTopic(String),
    #[error("invalid {topic} payload: {source}")]
    InvalidPayload {
        topic: &'static str,
        #[source]
        source: ParseFloatError,
    },
}

/// A state change published by the device.
///
/// Rigs publish `position` when the encoder moves more than a centimeter,
/// `distance` when the range sensor shifts by more than two, and `motion`
/// on every sensor edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateUpdate {
    Position(f64),
    Distance(f64),
    Motion(bool),
}

impl StateUpdate {
    /// Parses a raw device message into a state update.
    pub fn parse(topic: &str, payload: &str) -> Result<Self, UpdateError> {
        match topic {
            "position" => payload
                .trim()
                .parse()
                .map(Self::Position)
                .map_err(|source| UpdateError::InvalidPayload {
                    topic: "position",
                    source,
                }),
            "distance" => payload
                .trim()
                .parse()
                .map(Self::Distance)
                .map_err(|source| UpdateError::InvalidPayload {
                    topic: "distance",
                    source,
                }),
            "motion" => Ok(Self::Motion(matches!(payload.trim(), "true" | "1"))),
            other => Err(UpdateError::UnknownTopic(other.to_string())),
        }
    }

    /// Writes the update into the one matching state field.
    pub fn apply(self, state: &mut RigState) {
        match self {
            Self::Position(position) => state.position = position,
            Self::Distance(distance) => state.distance = distance,
            Self::Motion(motion) => state.motion = motion,
        }
    }
}
