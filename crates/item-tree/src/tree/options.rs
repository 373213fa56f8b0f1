//! Configuration options for an item tree.
//!
//! `TreeOptions` controls how paths are joined and which guards run when
//! items are created or attached.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration options for an [`ItemTree`](crate::tree::ItemTree).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TreeOptions {
    /// Separator placed between names by `get_path`.
    pub separator: char,

    /// Reject `add` calls that would make a folder its own descendant.
    ///
    /// With the guard off such an add is accepted and every recursive query
    /// over the affected subtree will not terminate.
    pub guard_cycles: bool,

    /// Reject empty names and names containing the separator.
    pub validate_names: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            separator: std::path::MAIN_SEPARATOR,
            guard_cycles: true,
            validate_names: true,
        }
    }
}

impl TreeOptions {
    /// Create new tree options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the path separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Enable or disable the cycle guard on `add`.
    pub fn guard_cycles(mut self, guard_cycles: bool) -> Self {
        self.guard_cycles = guard_cycles;
        self
    }

    /// Enable or disable name validation on construction.
    pub fn validate_names(mut self, validate_names: bool) -> Self {
        self.validate_names = validate_names;
        self
    }
}
