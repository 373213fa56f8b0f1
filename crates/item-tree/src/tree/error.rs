//! Errors raised by tree mutations

use derive_more::Display;

use crate::tree::NodeId;

/// Failure of a mutating tree operation
///
/// Queries never fail; only construction and the `add`/`remove`/`move_item`
/// family report errors.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum TreeError {
    /// The handle was not issued by this tree
    #[display(fmt = "unknown node {}", _0)]
    UnknownNode(NodeId),

    /// A folder operation was aimed at a file
    #[display(fmt = "node {} is a file and cannot hold children", _0)]
    NotAFolder(NodeId),

    /// Adding `item` under `folder` would make a folder its own descendant
    #[display(
        fmt = "adding {} to {} would make a folder contain itself",
        item,
        folder
    )]
    CycleDetected { folder: NodeId, item: NodeId },

    /// A constructor argument was rejected
    #[display(fmt = "invalid argument: {}", _0)]
    InvalidArgument(String),
}

impl std::error::Error for TreeError {}

/// Result alias used throughout the crate
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
