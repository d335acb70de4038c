//! Hidden-group shape parameters.

use crate::error::LayoutError;

/// The four integers that fully determine a hidden group's arena.
///
/// All counts are fixed at construction and immutable afterward. Every
/// offset and region length in [`GroupLayout`](crate::GroupLayout) is a
/// pure function of these values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupConfig {
    /// Number of external input nodes feeding the group.
    pub input_node_count: usize,
    /// Number of logical outputs the group emits per forward pass.
    pub output_node_count: usize,
    /// Total hidden layer count, including the terminal layer.
    /// `1` means zero non-terminal layers.
    pub layer_count: usize,
    /// Nodes in every hidden layer (non-terminal and terminal alike).
    pub nodes_per_layer: usize,
}

impl GroupConfig {
    /// Create a config from the four shape integers.
    pub fn new(
        input_node_count: usize,
        output_node_count: usize,
        layer_count: usize,
        nodes_per_layer: usize,
    ) -> Self {
        Self {
            input_node_count,
            output_node_count,
            layer_count,
            nodes_per_layer,
        }
    }

    /// Check that every count is at least one.
    ///
    /// A zero anywhere would make the index formulas degenerate (empty
    /// regions that still get addressed), so construction rejects it
    /// rather than letting accessors fail later.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.input_node_count == 0 {
            return Err(LayoutError::ZeroInputNodes);
        }
        if self.output_node_count == 0 {
            return Err(LayoutError::ZeroOutputNodes);
        }
        if self.layer_count == 0 {
            return Err(LayoutError::ZeroLayers);
        }
        if self.nodes_per_layer == 0 {
            return Err(LayoutError::ZeroNodesPerLayer);
        }
        Ok(())
    }
}
