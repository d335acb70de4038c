//! Core types and traits for the braid inference engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the activation-function helpers, the [`Tracer`] observation seam,
//! and the network-level error type shared across the braid workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod activation;
pub mod error;
pub mod trace;

pub use activation::{identity, soft_step};
pub use error::ExecuteError;
pub use trace::{NullTracer, TraceEvent, TraceSite, Tracer};
