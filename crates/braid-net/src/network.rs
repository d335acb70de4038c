//! The multi-group concurrent network.
//!
//! Scheduling is deliberately simple: one worker thread per hidden group,
//! launched unconditionally on every [`Network::execute`] call, with no
//! pool reuse and no bound on fan-out. The workload is embarrassingly
//! parallel — workers share the input array read-only and own their
//! arenas exclusively — so the only synchronisation point is the join
//! barrier before aggregation. Degree of parallelism equals group count;
//! size the group count to the hardware, not the other way around.

use std::thread;

use braid_core::{ExecuteError, NullTracer, TraceEvent, TraceSite, Tracer};

use crate::config::{ConfigError, NetConfig};
use crate::group::HiddenGroup;

/// A feed-forward network of independently weighted hidden groups.
///
/// Owns the input node array (shared read-only with every group during a
/// forward pass), the output node array (written only by the aggregation
/// step), and the ordered group collection. Everything is allocated once
/// at construction and lives for the network's lifetime.
pub struct Network {
    config: NetConfig,
    input_nodes: Vec<f32>,
    output_nodes: Vec<f32>,
    groups: Vec<HiddenGroup>,
    tracer: Box<dyn Tracer + Send>,
}

impl Network {
    /// Allocate a network: node arrays plus `hidden_group_count` groups
    /// of identical shape, all weights zero until an initializer runs.
    pub fn new(config: NetConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let group_config = config.group_config();
        let mut groups = Vec::with_capacity(config.hidden_group_count);
        for index in 0..config.hidden_group_count {
            groups.push(HiddenGroup::new(index, group_config)?);
        }
        Ok(Self {
            config,
            input_nodes: vec![0.0; config.input_node_count],
            output_nodes: vec![0.0; config.output_node_count],
            groups,
            tracer: Box::new(NullTracer),
        })
    }

    /// The shape this network was built from.
    pub fn config(&self) -> NetConfig {
        self.config
    }

    /// Number of input nodes.
    pub fn input_node_count(&self) -> usize {
        self.input_nodes.len()
    }

    /// Number of output nodes.
    pub fn output_node_count(&self) -> usize {
        self.output_nodes.len()
    }

    /// Number of hidden groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Install a tracer observing every activation of subsequent forward
    /// passes. The default is the no-op [`NullTracer`].
    pub fn set_tracer<T>(&mut self, tracer: T)
    where
        T: Tracer + Send + 'static,
    {
        self.tracer = Box::new(tracer);
    }

    /// Copy `min(values.len(), input_node_count)` entries into the input
    /// array starting at index 0.
    ///
    /// Entries beyond the shorter length are left untouched — neither an
    /// error nor a reset. This truncate-and-keep-remainder policy is
    /// intentional and load-bearing for callers that refresh a prefix of
    /// a large input between passes; do not call this while an `execute`
    /// is running elsewhere (the borrow checker enforces as much).
    pub fn set_input_nodes(&mut self, values: &[f32]) {
        let len = values.len().min(self.input_nodes.len());
        self.input_nodes[..len].copy_from_slice(&values[..len]);
    }

    /// Read one input node's current value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn input_value(&self, index: usize) -> f32 {
        self.input_nodes[index]
    }

    /// Set one input node's value.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set_input_value(&mut self, index: usize, value: f32) {
        self.input_nodes[index] = value;
    }

    /// Read one output node's value from the last completed forward pass.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn output_value(&self, index: usize) -> f32 {
        self.output_nodes[index]
    }

    /// The output node array from the last completed forward pass.
    pub fn outputs(&self) -> &[f32] {
        &self.output_nodes
    }

    /// Read access to one hidden group.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn group(&self, index: usize) -> &HiddenGroup {
        &self.groups[index]
    }

    /// Write access to one hidden group; the weight-initialization seam.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn group_mut(&mut self, index: usize) -> &mut HiddenGroup {
        &mut self.groups[index]
    }

    /// Write access to every group, in index order.
    pub fn groups_mut(&mut self) -> &mut [HiddenGroup] {
        &mut self.groups
    }

    /// Run one concurrent forward pass and return the final outputs.
    ///
    /// One thread per group; all are joined before aggregation begins.
    /// The aggregation sums group contributions in group-index order
    /// regardless of completion order, so results are reproducible for
    /// fixed weights, inputs, and activation (floating-point summation
    /// order is fixed; completion order is irrelevant).
    ///
    /// # Errors
    ///
    /// [`ExecuteError::GroupPanicked`] if any group's worker panicked —
    /// an index-formula or configuration bug. The output array is left
    /// unchanged in that case; there is no partial result.
    pub fn execute<A>(&mut self, activation: &A) -> Result<&[f32], ExecuteError>
    where
        A: Fn(f32) -> f32 + Sync,
    {
        let group_count = self.groups.len();
        let input_nodes: &[f32] = &self.input_nodes;
        let tracer: &dyn Tracer = &*self.tracer;
        let groups = &mut self.groups;

        let (sender, receiver) = crossbeam_channel::bounded(group_count);

        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(group_count);
            for group in groups.iter_mut() {
                let sender = sender.clone();
                handles.push(scope.spawn(move || {
                    let index = group.index();
                    let values = group.execute(input_nodes, activation, tracer);
                    // The receiver outlives the scope, so send cannot fail.
                    let _ = sender.send((index, values));
                }));
            }
            drop(sender);

            // Join every worker before reporting, so a second panic never
            // reaches the scope exit unjoined.
            let mut failed = None;
            for (index, handle) in handles.into_iter().enumerate() {
                if handle.join().is_err() && failed.is_none() {
                    failed = Some(index);
                }
            }
            match failed {
                Some(group) => Err(ExecuteError::GroupPanicked { group }),
                None => Ok(()),
            }
        })?;

        let mut results: Vec<Option<Vec<f32>>> = (0..group_count).map(|_| None).collect();
        for (index, values) in receiver.try_iter() {
            results[index] = Some(values);
        }

        for output in 0..self.output_nodes.len() {
            self.output_nodes[output] = 0.0;
            let mut sum = 0.0;
            for result in &results {
                let values = result
                    .as_ref()
                    .expect("joined group delivered no result vector");
                sum += values[output];
            }
            let after = activation(sum);
            tracer.record(&TraceEvent {
                site: TraceSite::NetworkOutput { output },
                before: sum,
                after,
            });
            self.output_nodes[output] = after;
        }

        Ok(&self.output_nodes)
    }
}
