//! Concurrent multi-group feed-forward network.
//!
//! A [`Network`] owns an input node array, an output node array, and an
//! ordered collection of [`HiddenGroup`]s of identical shape but
//! independent weights. `execute` runs every group's forward pass on its
//! own thread, joins them all, then sums each group's per-output
//! contribution in group-index order and applies the activation function
//! once more.
//!
//! This is an inference kernel, not a resilient service: a group failure
//! is fatal and there is no partial-result or retry path.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod group;
pub mod network;

pub use config::{ConfigError, NetConfig};
pub use group::HiddenGroup;
pub use network::Network;
