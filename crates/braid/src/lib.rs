//! Braid: concurrent feed-forward neural network inference over flat arenas.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Braid sub-crates. For most users, adding `braid` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use braid::prelude::*;
//!
//! // 2 hidden groups, 4 inputs, 3 outputs, 2 layers of 5 nodes each.
//! let mut network = Network::new(NetConfig::new(2, 4, 3, 2, 5)).unwrap();
//!
//! // Seeded uniform weights; the seed fixes every weight in the network.
//! let mut rng = braid::init::seeded_rng(42);
//! braid::init::randomize_network(&mut network, &mut rng, -0.5, 0.5);
//!
//! network.set_input_nodes(&[0.1, 0.4, 0.7, 0.9]);
//! let outputs = network.execute(&soft_step).unwrap();
//!
//! assert_eq!(outputs.len(), 3);
//! // soft_step squashes every output into (0, 1).
//! assert!(outputs.iter().all(|&v| v > 0.0 && v < 1.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `braid-arena` | Flat group storage, layout formulas, node views |
//! | [`types`] | `braid-core` | Activation functions, errors, tracing hooks |
//! | [`net`] | `braid-net` | `HiddenGroup` and the concurrent `Network` |
//! | [`init`] | `braid-init` | Seeded uniform weight initialization |
//! | [`io`] | `braid-io` | Byte-stream input/output codec |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Flat group storage and index formulas (`braid-arena`).
///
/// Contains [`arena::GroupArena`], the [`arena::GroupLayout`] addressing
/// formulas, and the non-owning [`arena::NodeView`] /
/// [`arena::NodeViewMut`] windows.
pub use braid_arena as arena;

/// Activation functions, errors, and tracing hooks (`braid-core`).
///
/// Provides [`types::soft_step`] and [`types::identity`], the
/// [`types::Tracer`] observation trait, and [`types::ExecuteError`].
pub use braid_core as types;

/// Hidden groups and the concurrent network (`braid-net`).
///
/// [`net::HiddenGroup`] runs one group's forward pass; [`net::Network`]
/// fans groups out across threads and aggregates their outputs.
pub use braid_net as net;

/// Seeded uniform weight initialization (`braid-init`).
///
/// [`init::seeded_rng`] builds a deterministic ChaCha8 stream;
/// [`init::randomize_network`] fills every weight from it.
pub use braid_init as init;

/// Byte-stream input/output codec (`braid-io`).
///
/// [`io::read_inputs`] normalizes bytes onto the input nodes;
/// [`io::write_outputs`] emits one clamped byte per output node.
pub use braid_io as io;

/// Common imports for typical Braid usage.
///
/// ```rust
/// use braid::prelude::*;
/// ```
///
/// This imports the most frequently used types: the network and its
/// config, the group and arena types, activations, and the tracer trait.
pub mod prelude {
    // Arena storage
    pub use braid_arena::{GroupArena, GroupConfig, GroupLayout, NodeView, NodeViewMut};

    // Activations and tracing
    pub use braid_core::{identity, soft_step, NullTracer, TraceEvent, TraceSite, Tracer};

    // Errors
    pub use braid_arena::LayoutError;
    pub use braid_core::ExecuteError;
    pub use braid_net::ConfigError;

    // Network
    pub use braid_net::{HiddenGroup, NetConfig, Network};
}
