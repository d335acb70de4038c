//! Flat-buffer arena layout for braid hidden groups.
//!
//! A hidden group's entire state — every node's activation value and its
//! outgoing connection weights — is packed into one contiguous `Vec<f32>`,
//! addressed by formula rather than by per-node allocation. Nothing is
//! allocated after construction and no slot is wasted.
//!
//! # Arena layout
//!
//! ```text
//! GroupArena (one Vec<f32>, allocated once)
//! ├── input-weight region     input_node_count × nodes_per_layer weights
//! │                           (no value slots; input values live in the
//! │                           network's input node array)
//! ├── non-terminal layers     (layer_count − 1) × nodes_per_layer nodes,
//! │                           each node = 1 value + nodes_per_layer weights
//! └── terminal layer          nodes_per_layer nodes,
//!                             each node = 1 value + output_node_count weights
//! ```
//!
//! [`GroupLayout`] holds the pure index formulas; [`GroupArena`] owns the
//! storage and hands out [`NodeView`]/[`NodeViewMut`] windows. A view is a
//! computed slice over `1 + fan_out` adjacent slots, constructed fresh from
//! an index on each access — never a reinterpretation of raw storage.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod config;
pub mod error;
pub mod layout;
pub mod node;

pub use arena::GroupArena;
pub use config::GroupConfig;
pub use error::LayoutError;
pub use layout::GroupLayout;
pub use node::{NodeView, NodeViewMut};
