//! State machine for artifact status transitions
//!
//! Draft → Complete (complete); Complete → Draft (reopen).

use launchpad_common::StateError;

use crate::domain::entities::ArtifactStatus;

/// Events that trigger artifact status transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArtifactEvent {
    /// Founder marks the tool as done
    Complete,
    /// Founder goes back to editing
    Reopen,
}

impl std::fmt::Display for ArtifactEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "complete"),
            Self::Reopen => write!(f, "reopen"),
        }
    }
}

/// Artifact state machine
pub struct ArtifactStateMachine;

impl ArtifactStateMachine {
    /// Attempt a state transition
    pub fn transition(
        current: ArtifactStatus,
        event: ArtifactEvent,
    ) -> Result<ArtifactStatus, StateError> {
        match (current, event) {
            (ArtifactStatus::Draft, ArtifactEvent::Complete) => Ok(ArtifactStatus::Complete),
            (ArtifactStatus::Complete, ArtifactEvent::Reopen) => Ok(ArtifactStatus::Draft),
            (ArtifactStatus::Complete, ArtifactEvent::Complete) => {
                Err(StateError::NoOp(current.to_string()))
            }
            _ => Err(StateError::InvalidTransition {
                from: current.to_string(),
                event: event.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_to_complete() {
        assert_eq!(
            ArtifactStateMachine::transition(ArtifactStatus::Draft, ArtifactEvent::Complete),
            Ok(ArtifactStatus::Complete)
        );
    }

    #[test]
    fn test_complete_to_draft() {
        assert_eq!(
            ArtifactStateMachine::transition(ArtifactStatus::Complete, ArtifactEvent::Reopen),
            Ok(ArtifactStatus::Draft)
        );
    }

    #[test]
    fn test_reopen_draft_is_invalid() {
        let result = ArtifactStateMachine::transition(ArtifactStatus::Draft, ArtifactEvent::Reopen);
        assert_eq!(
            result,
            Err(StateError::InvalidTransition {
                from: "draft".to_string(),
                event: "reopen".to_string(),
            })
        );
    }

    #[test]
    fn test_complete_twice_is_noop_error() {
        let result =
            ArtifactStateMachine::transition(ArtifactStatus::Complete, ArtifactEvent::Complete);
        assert_eq!(result, Err(StateError::NoOp("complete".to_string())));
    }
}
