//! One independently weighted forward-pass structure.

use braid_arena::{GroupArena, GroupConfig, LayoutError};
use braid_core::{TraceEvent, TraceSite, Tracer};

/// A hidden group: one arena plus the forward pass over it.
///
/// Groups share the network's input node array read-only and own their
/// arena exclusively, so a network can run all of its groups in parallel
/// with no synchronisation. The group knows its index within the owning
/// network, used for trace events and failure reporting.
#[derive(Clone, Debug)]
pub struct HiddenGroup {
    index: usize,
    arena: GroupArena,
}

impl HiddenGroup {
    /// Allocate a zero-weighted group with the given network index.
    pub fn new(index: usize, config: GroupConfig) -> Result<Self, LayoutError> {
        Ok(Self {
            index,
            arena: GroupArena::new(config)?,
        })
    }

    /// This group's index within the owning network.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Read access to the group's arena.
    pub fn arena(&self) -> &GroupArena {
        &self.arena
    }

    /// Write access to the group's arena; the seam weight initializers
    /// use between forward passes.
    pub fn arena_mut(&mut self) -> &mut GroupArena {
        &mut self.arena
    }

    /// Run one forward pass and return the group's raw per-output values.
    ///
    /// The pass is strictly sequential layer by layer: each layer consumes
    /// the just-activated values of the one before it. With a single
    /// hidden layer the input weights feed the terminal layer directly.
    ///
    /// The result is a pure function of the arena's current weights and
    /// the supplied inputs; the observable side effect is that every value
    /// slot in the arena is overwritten (weights are not).
    ///
    /// # Panics
    ///
    /// Panics if `inputs.len()` differs from the configured input node
    /// count.
    pub fn execute<A>(&mut self, inputs: &[f32], activation: &A, tracer: &dyn Tracer) -> Vec<f32>
    where
        A: Fn(f32) -> f32,
    {
        let layout = *self.arena.layout();
        assert_eq!(
            inputs.len(),
            layout.input_node_count(),
            "input node array length {} does not match configured count {}",
            inputs.len(),
            layout.input_node_count()
        );

        let nodes_per_layer = layout.nodes_per_layer();
        let non_terminal_layers = layout.non_terminal_layer_count();

        if non_terminal_layers == 0 {
            // Degenerate shape: input weights feed the terminal layer.
            for node in 0..nodes_per_layer {
                let sum = self.accumulate_inputs(inputs, node);
                self.set_terminal(node, sum, activation, tracer);
            }
        } else {
            for node in 0..nodes_per_layer {
                let sum = self.accumulate_inputs(inputs, node);
                self.set_hidden(0, node, sum, activation, tracer);
            }

            for layer in 1..non_terminal_layers {
                for node in 0..nodes_per_layer {
                    let sum = self.accumulate_layer(layer - 1, node);
                    self.set_hidden(layer, node, sum, activation, tracer);
                }
            }

            let last = non_terminal_layers - 1;
            for node in 0..nodes_per_layer {
                let sum = self.accumulate_layer(last, node);
                self.set_terminal(node, sum, activation, tracer);
            }
        }

        let mut outputs = vec![0.0; layout.output_node_count()];
        for (output, slot) in outputs.iter_mut().enumerate() {
            let mut sum = 0.0;
            for node in 0..nodes_per_layer {
                sum += self.arena.terminal(node).weighted_value(output);
            }
            let after = activation(sum);
            tracer.record(&TraceEvent {
                site: TraceSite::GroupOutput {
                    group: self.index,
                    output,
                },
                before: sum,
                after,
            });
            *slot = after;
        }
        outputs
    }

    /// Weighted sum of the shared input values into first-layer node `node`.
    fn accumulate_inputs(&self, inputs: &[f32], node: usize) -> f32 {
        let mut sum = 0.0;
        for (input, &value) in inputs.iter().enumerate() {
            sum += value * self.arena.input_weight(input, node);
        }
        sum
    }

    /// Weighted sum of non-terminal layer `layer` into downstream node `node`.
    fn accumulate_layer(&self, layer: usize, node: usize) -> f32 {
        let nodes_per_layer = self.arena.layout().nodes_per_layer();
        let mut sum = 0.0;
        for source in 0..nodes_per_layer {
            sum += self.arena.non_terminal(layer, source).weighted_value(node);
        }
        sum
    }

    fn set_hidden<A>(&mut self, layer: usize, node: usize, sum: f32, activation: &A, tracer: &dyn Tracer)
    where
        A: Fn(f32) -> f32,
    {
        let mut view = self.arena.non_terminal_mut(layer, node);
        view.clear_value();
        view.add_to_value(sum);
        view.apply_activation(activation);
        let after = view.value();
        tracer.record(&TraceEvent {
            site: TraceSite::Hidden {
                group: self.index,
                layer,
                node,
            },
            before: sum,
            after,
        });
    }

    fn set_terminal<A>(&mut self, node: usize, sum: f32, activation: &A, tracer: &dyn Tracer)
    where
        A: Fn(f32) -> f32,
    {
        let mut view = self.arena.terminal_mut(node);
        view.clear_value();
        view.add_to_value(sum);
        view.apply_activation(activation);
        let after = view.value();
        tracer.record(&TraceEvent {
            site: TraceSite::Terminal {
                group: self.index,
                node,
            },
            before: sum,
            after,
        });
    }
}
