//! Arena construction errors.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a [`GroupConfig`](crate::GroupConfig).
///
/// These are the only recoverable failures in this crate. Once a layout
/// is constructed, out-of-range indexing is a programmer error and panics
/// instead of corrupting adjacent slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// `input_node_count` was zero.
    ZeroInputNodes,
    /// `output_node_count` was zero.
    ZeroOutputNodes,
    /// `layer_count` was zero; the minimum shape is a single terminal layer.
    ZeroLayers,
    /// `nodes_per_layer` was zero.
    ZeroNodesPerLayer,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroInputNodes => write!(f, "input_node_count must be at least 1"),
            Self::ZeroOutputNodes => write!(f, "output_node_count must be at least 1"),
            Self::ZeroLayers => write!(f, "layer_count must be at least 1"),
            Self::ZeroNodesPerLayer => write!(f, "nodes_per_layer must be at least 1"),
        }
    }
}

impl Error for LayoutError {}
