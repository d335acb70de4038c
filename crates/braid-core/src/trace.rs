//! The [`Tracer`] observation seam.
//!
//! A forward pass applies the activation function at every node; a tracer
//! sees each application as a [`TraceEvent`] carrying the site and the
//! pre-/post-activation values. The engine takes the tracer by reference
//! and shares one instance across all group worker threads, so
//! implementations must be `Sync` and should synchronise internally if
//! they accumulate state.
//!
//! Tracing is injected, never ambient: there is no global sink, and the
//! no-op [`NullTracer`] is the default everywhere.

/// Where in the forward pass an activation was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceSite {
    /// A node in a non-terminal hidden layer of one group.
    Hidden {
        /// Index of the group within the network.
        group: usize,
        /// Non-terminal layer index, starting at 0.
        layer: usize,
        /// Node index within the layer.
        node: usize,
    },
    /// A node in the terminal hidden layer of one group.
    Terminal {
        /// Index of the group within the network.
        group: usize,
        /// Node index within the terminal layer.
        node: usize,
    },
    /// A group's raw per-output accumulation, before network aggregation.
    GroupOutput {
        /// Index of the group within the network.
        group: usize,
        /// Logical output index.
        output: usize,
    },
    /// A final network output node, after cross-group summation.
    NetworkOutput {
        /// Logical output index.
        output: usize,
    },
}

/// One activation application observed during a forward pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TraceEvent {
    /// The site where the activation was applied.
    pub site: TraceSite,
    /// The accumulated value before activation.
    pub before: f32,
    /// The value after activation.
    pub after: f32,
}

/// Observer for forward-pass activations.
///
/// `record` is called once per activation site per execute, from the
/// worker thread that computed it ([`TraceSite::NetworkOutput`] events
/// come from the aggregation step on the calling thread). Events for a
/// single group arrive in deterministic forward-pass order; events from
/// different groups interleave arbitrarily.
pub trait Tracer: Sync {
    /// Record one activation event.
    fn record(&self, event: &TraceEvent);
}

/// A tracer that discards every event.
///
/// This is the default tracer; the compiler removes the call entirely
/// in optimised builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullTracer;

impl Tracer for NullTracer {
    fn record(&self, _event: &TraceEvent) {}
}
