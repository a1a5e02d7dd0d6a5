//! Network construction and validation errors.

use hn_core::{HnError, NodeId, PipeId};

/// Network construction and validation errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    #[error("Node '{name}' already exists")]
    DuplicateNode { name: String },

    #[error("Pipe '{name}' already exists")]
    DuplicatePipe { name: String },

    #[error("Node {node} does not exist")]
    UnknownNode { node: NodeId },

    #[error("No node named '{name}'")]
    UnknownNodeName { name: String },

    #[error("Pipe {pipe} does not exist")]
    UnknownPipe { pipe: PipeId },

    #[error("Pipe '{pipe}' starts and ends at the same node")]
    SelfLoop { pipe: String },

    /// A pipe or node parameter is out of range.
    #[error("Invalid {what} for '{owner}': {value}")]
    InvalidParameter {
        owner: String,
        what: &'static str,
        value: f64,
    },

    #[error("Loop '{name}' has no pipes")]
    EmptyLoop { name: String },

    #[error("Loop '{name}' uses pipe {pipe} more than once")]
    RepeatedPipe { name: String, pipe: PipeId },

    /// Consecutive loop members do not share a node.
    #[error(
        "Loop '{name}' is not closed: member {position} ends at node {expected} but the next member starts at node {found}"
    )]
    OpenLoop {
        name: String,
        position: usize,
        expected: NodeId,
        found: NodeId,
    },

    #[error("Expected {expected} pipe flows, got {got}")]
    FlowCountMismatch { expected: usize, got: usize },
}

pub type NetworkResult<T> = Result<T, NetworkError>;

impl From<NetworkError> for HnError {
    fn from(err: NetworkError) -> Self {
        HnError::Invariant {
            what: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_loop_message_names_nodes() {
        let err = NetworkError::OpenLoop {
            name: "L1".into(),
            position: 2,
            expected: NodeId::from_index(3),
            found: NodeId::from_index(5),
        };
        let msg = err.to_string();
        assert!(msg.contains("L1"));
        assert!(msg.contains("node 3"));
        assert!(msg.contains("node 5"));
    }

    #[test]
    fn messages_carry_fields() {
        let err = NetworkError::InvalidParameter {
            owner: "P7".into(),
            what: "absolute roughness",
            value: 0.74,
        };
        assert_eq!(err.to_string(), "Invalid absolute roughness for 'P7': 0.74");
        assert_eq!(
            NetworkError::FlowCountMismatch { expected: 8, got: 3 }.to_string(),
            "Expected 8 pipe flows, got 3"
        );
        let boxed: Box<dyn std::error::Error> =
            Box::new(NetworkError::DuplicateNode { name: "A".into() });
        assert_eq!(boxed.to_string(), "Node 'A' already exists");
    }

    #[test]
    fn converts_into_core_error() {
        let err: HnError = NetworkError::DuplicateNode { name: "A".into() }.into();
        assert!(matches!(err, HnError::Invariant { .. }));
    }
}
