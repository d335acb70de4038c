//! Pure index arithmetic for the group arena.
//!
//! [`GroupLayout`] maps `(region, layer, node, weight)` coordinates onto
//! offsets in the flat buffer. The formulas tile the arena exactly: the
//! three regions are adjacent, never overlap, and sum to
//! [`total_len`](GroupLayout::total_len) (the proptests below check this
//! for arbitrary shapes).
//!
//! Every index function asserts its arguments. An out-of-range index is
//! a programmer or configuration error, and a loud panic here is the only
//! thing standing between a formula bug and silent corruption of an
//! adjacent node's slots.

use crate::config::GroupConfig;
use crate::error::LayoutError;

/// Index formulas for one hidden group's arena.
///
/// Constructed from a validated [`GroupConfig`]; all methods are pure and
/// allocation-free. The layout itself holds no storage — pair it with a
/// buffer of [`total_len`](Self::total_len) floats (see
/// [`GroupArena`](crate::GroupArena)).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GroupLayout {
    config: GroupConfig,
}

impl GroupLayout {
    /// Validate the config and build the layout.
    pub fn new(config: GroupConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The shape this layout was built from.
    pub fn config(&self) -> GroupConfig {
        self.config
    }

    /// Number of external input nodes.
    pub fn input_node_count(&self) -> usize {
        self.config.input_node_count
    }

    /// Number of logical outputs.
    pub fn output_node_count(&self) -> usize {
        self.config.output_node_count
    }

    /// Total hidden layer count, terminal layer included.
    pub fn layer_count(&self) -> usize {
        self.config.layer_count
    }

    /// Nodes per hidden layer.
    pub fn nodes_per_layer(&self) -> usize {
        self.config.nodes_per_layer
    }

    // ── Input-weight region ────────────────────────────────────────

    /// Weights per input node: one per first-layer node.
    pub fn input_fan_out(&self) -> usize {
        self.nodes_per_layer()
    }

    /// Length of the input-weight region.
    pub fn input_region_len(&self) -> usize {
        self.input_node_count() * self.input_fan_out()
    }

    /// Offset of the weight from input node `input` to first-layer node
    /// `weight`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn input_weight_index(&self, input: usize, weight: usize) -> usize {
        assert!(
            input < self.input_node_count(),
            "input node index {input} out of range (count {})",
            self.input_node_count()
        );
        assert!(
            weight < self.input_fan_out(),
            "input weight index {weight} out of range (fan-out {})",
            self.input_fan_out()
        );
        input * self.input_fan_out() + weight
    }

    // ── Non-terminal region ────────────────────────────────────────

    /// Layers that feed another hidden layer rather than the outputs.
    pub fn non_terminal_layer_count(&self) -> usize {
        self.layer_count() - 1
    }

    /// Slots per non-terminal node: one value plus a weight per node in
    /// the next layer.
    pub fn non_terminal_node_len(&self) -> usize {
        1 + self.nodes_per_layer()
    }

    /// Slots per non-terminal layer.
    pub fn non_terminal_layer_len(&self) -> usize {
        self.non_terminal_node_len() * self.nodes_per_layer()
    }

    /// Length of the whole non-terminal region. Zero when
    /// `layer_count == 1`.
    pub fn non_terminal_region_len(&self) -> usize {
        self.non_terminal_layer_len() * self.non_terminal_layer_count()
    }

    /// Offset of the first non-terminal slot.
    pub fn first_non_terminal_index(&self) -> usize {
        self.input_region_len()
    }

    /// Offset of non-terminal node `node` in non-terminal layer `layer`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn non_terminal_node_index(&self, layer: usize, node: usize) -> usize {
        assert!(
            layer < self.non_terminal_layer_count(),
            "non-terminal layer index {layer} out of range (count {})",
            self.non_terminal_layer_count()
        );
        assert!(
            node < self.nodes_per_layer(),
            "node index {node} out of range (nodes per layer {})",
            self.nodes_per_layer()
        );
        self.first_non_terminal_index()
            + layer * self.non_terminal_layer_len()
            + node * self.non_terminal_node_len()
    }

    // ── Terminal region ────────────────────────────────────────────

    /// Slots per terminal node: one value plus a weight per logical output.
    pub fn terminal_node_len(&self) -> usize {
        1 + self.output_node_count()
    }

    /// Length of the terminal region.
    pub fn terminal_region_len(&self) -> usize {
        self.terminal_node_len() * self.nodes_per_layer()
    }

    /// Offset of the first terminal slot.
    pub fn first_terminal_index(&self) -> usize {
        self.first_non_terminal_index() + self.non_terminal_region_len()
    }

    /// Offset of terminal node `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn terminal_node_index(&self, node: usize) -> usize {
        assert!(
            node < self.nodes_per_layer(),
            "terminal node index {node} out of range (nodes per layer {})",
            self.nodes_per_layer()
        );
        self.first_terminal_index() + node * self.terminal_node_len()
    }

    // ── Whole arena ────────────────────────────────────────────────

    /// Total slots required: the three regions, nothing more.
    pub fn total_len(&self) -> usize {
        self.input_region_len() + self.non_terminal_region_len() + self.terminal_region_len()
    }
}
