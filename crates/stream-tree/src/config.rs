//! Render configuration

use serde::{Deserialize, Serialize};

/// Icon class for nodes whose child slot is absent.
pub const DEFAULT_LEAF_ICON: &str = "jstree-file";

/// Icon class for nodes with a child sequence, even an empty one.
pub const DEFAULT_BRANCH_ICON: &str = "jstree-folder";

/// Knobs for one render.
///
/// This is passed through the labeler and flattener and controls recursion
/// limits and presentation details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum number of back-references followed while deriving one label;
    /// values below 1 are treated as 1
    pub max_reference_depth: usize,

    /// Open the payload entry when the stream has exactly magic, version and
    /// one payload at the top level
    pub expand_payload: bool,

    /// Icon class for leaves
    pub leaf_icon: String,

    /// Icon class for branches
    pub branch_icon: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_reference_depth: 1000,
            expand_payload: true,
            leaf_icon: DEFAULT_LEAF_ICON.to_string(),
            branch_icon: DEFAULT_BRANCH_ICON.to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with a custom reference depth limit.
    pub fn with_max_reference_depth(max_depth: usize) -> Self {
        Self {
            max_reference_depth: max_depth,
            ..Default::default()
        }
    }

    /// Icon class for a node, by whether its child slot is absent.
    pub fn icon_for(&self, is_leaf: bool) -> &str {
        if is_leaf {
            &self.leaf_icon
        } else {
            &self.branch_icon
        }
    }
}
