//! Minimal braid-net quickstart: build a two-group network, weight it by
//! hand, and run one concurrent forward pass.
//!
//! Run with: `cargo run --example quickstart -p braid-net`

use braid_core::soft_step;
use braid_net::{ConfigError, NetConfig, Network};

fn main() -> Result<(), ConfigError> {
    // 2 groups, 4 inputs, 2 outputs, 3 hidden layers of 8 nodes each.
    let mut network = Network::new(NetConfig::new(2, 4, 2, 3, 8))?;

    // Weights are zero until something writes them. Here: a fixed small
    // value everywhere, just to have signal flow; real callers use
    // braid-init for seeded randomization.
    for g in 0..network.group_count() {
        let layout = *network.group(g).arena().layout();
        let arena = network.group_mut(g).arena_mut();
        for input in 0..layout.input_node_count() {
            for w in 0..layout.input_fan_out() {
                *arena.input_weight_mut(input, w) = 0.2;
            }
        }
        for layer in 0..layout.non_terminal_layer_count() {
            for node in 0..layout.nodes_per_layer() {
                let mut view = arena.non_terminal_mut(layer, node);
                for w in 0..layout.nodes_per_layer() {
                    *view.weight_mut(w) = 0.1;
                }
            }
        }
        for node in 0..layout.nodes_per_layer() {
            let mut view = arena.terminal_mut(node);
            for w in 0..layout.output_node_count() {
                *view.weight_mut(w) = 0.15;
            }
        }
    }

    network.set_input_nodes(&[0.1, 0.4, 0.7, 1.0]);
    let outputs = network
        .execute(&soft_step)
        .expect("forward pass failed");

    println!("outputs: {outputs:?}");
    Ok(())
}
