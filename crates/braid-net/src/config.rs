//! Network configuration and validation.

use std::error::Error;
use std::fmt;

use braid_arena::{GroupConfig, LayoutError};

/// The five integers that fully determine a network.
///
/// All values are fixed at construction and immutable afterward. Every
/// hidden group shares the same shape; only weights differ between groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NetConfig {
    /// Number of independently weighted hidden groups.
    pub hidden_group_count: usize,
    /// Number of input nodes, shared read-only by every group.
    pub input_node_count: usize,
    /// Number of output nodes.
    pub output_node_count: usize,
    /// Hidden layers per group, terminal layer included.
    pub hidden_layer_count: usize,
    /// Nodes in each hidden layer.
    pub nodes_per_hidden_layer: usize,
}

impl NetConfig {
    /// Create a config from the five shape integers.
    pub fn new(
        hidden_group_count: usize,
        input_node_count: usize,
        output_node_count: usize,
        hidden_layer_count: usize,
        nodes_per_hidden_layer: usize,
    ) -> Self {
        Self {
            hidden_group_count,
            input_node_count,
            output_node_count,
            hidden_layer_count,
            nodes_per_hidden_layer,
        }
    }

    /// The per-group shape implied by this network config.
    pub fn group_config(&self) -> GroupConfig {
        GroupConfig::new(
            self.input_node_count,
            self.output_node_count,
            self.hidden_layer_count,
            self.nodes_per_hidden_layer,
        )
    }

    /// Check structural invariants: at least one group, and a valid
    /// group shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hidden_group_count == 0 {
            return Err(ConfigError::NoGroups);
        }
        self.group_config().validate()?;
        Ok(())
    }
}

/// Errors detected during [`NetConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `hidden_group_count` was zero; a network needs at least one group.
    NoGroups,
    /// The per-group shape was invalid.
    Layout(LayoutError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGroups => write!(f, "hidden_group_count must be at least 1"),
            Self::Layout(err) => write!(f, "invalid group shape: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::NoGroups => None,
        }
    }
}

impl From<LayoutError> for ConfigError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
