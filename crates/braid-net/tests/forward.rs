//! End-to-end forward-pass behaviour through the public API.

use braid_core::{identity, soft_step, NullTracer};
use braid_net::{NetConfig, Network};

/// The hand-worked reference case: one group, one input, one output, one
/// non-terminal node and one terminal node.
///
/// input weight 0.5, hidden-to-terminal weight 0.1, terminal-to-output
/// weight 1.0, input value 0.1:
///   layer 1:       sigma(0.1 * 0.5)    ~= 0.5125
///   terminal:      sigma(0.5125 * 0.1) ~= 0.5128
///   group output:  sigma(0.5128 * 1.0) ~= 0.6255
///   net output:    sigma(0.6255)       ~= 0.6515  (final aggregation
///                                                  activation)
#[test]
fn worked_example_matches_hand_calculation() {
    let mut network = Network::new(NetConfig::new(1, 1, 1, 2, 1)).unwrap();
    {
        let arena = network.group_mut(0).arena_mut();
        *arena.input_weight_mut(0, 0) = 0.5;
        *arena.non_terminal_mut(0, 0).weight_mut(0) = 0.1;
        *arena.terminal_mut(0).weight_mut(0) = 1.0;
    }
    network.set_input_nodes(&[0.1]);

    // The group's own output, before network aggregation.
    let mut lone = network.group(0).clone();
    let contribution = lone.execute(&[0.1], &soft_step, &NullTracer);
    assert!((contribution[0] - 0.6255).abs() < 1e-3);

    let outputs = network.execute(&soft_step).unwrap().to_vec();

    let arena = network.group(0).arena();
    assert!((arena.non_terminal(0, 0).value() - 0.5125).abs() < 1e-3);
    assert!((arena.terminal(0).value() - 0.5128).abs() < 1e-3);
    assert_eq!(outputs.len(), 1);
    assert!((outputs[0] - 0.6515).abs() < 1e-3);
}

/// With the identity activation the whole network is linear, so the
/// output is a closed-form product of weights and inputs.
#[test]
fn identity_network_is_closed_form() {
    let mut network = Network::new(NetConfig::new(1, 2, 1, 2, 1)).unwrap();
    {
        let arena = network.group_mut(0).arena_mut();
        *arena.input_weight_mut(0, 0) = 0.25;
        *arena.input_weight_mut(1, 0) = 0.75;
        *arena.non_terminal_mut(0, 0).weight_mut(0) = 2.0;
        *arena.terminal_mut(0).weight_mut(0) = 4.0;
    }
    network.set_input_nodes(&[1.0, 2.0]);
    let outputs = network.execute(&identity).unwrap();

    // (1*0.25 + 2*0.75) * 2 * 4 = 14.
    assert_eq!(outputs, &[14.0]);
}

/// `hidden_layer_count = 1` means zero non-terminal layers: the output
/// depends only on the input weights and the terminal weights.
#[test]
fn degenerate_layer_count_skips_non_terminal_layers() {
    let mut network = Network::new(NetConfig::new(1, 2, 2, 1, 3)).unwrap();
    {
        let arena = network.group_mut(0).arena_mut();
        for input in 0..2 {
            for node in 0..3 {
                *arena.input_weight_mut(input, node) = (input + node) as f32;
            }
        }
        for node in 0..3 {
            let mut view = arena.terminal_mut(node);
            *view.weight_mut(0) = 1.0;
            *view.weight_mut(1) = 2.0;
        }
    }
    network.set_input_nodes(&[1.0, 1.0]);
    let outputs = network.execute(&identity).unwrap();

    // Terminal values: node n = 1*(0+n) + 1*(1+n) = 2n + 1 -> 1, 3, 5.
    // Output 0 = (1+3+5)*1 = 9; output 1 = (1+3+5)*2 = 18.
    assert_eq!(outputs, &[9.0, 18.0]);
}

/// A network-level pass must agree with running each group by hand and
/// summing the contributions in group-index order.
#[test]
fn aggregation_matches_manual_group_sum() {
    let config = NetConfig::new(3, 2, 2, 2, 3);
    let mut network = Network::new(config).unwrap();
    for g in 0..3 {
        let arena = network.group_mut(g).arena_mut();
        let scale = (g + 1) as f32 * 0.1;
        for input in 0..2 {
            for node in 0..3 {
                *arena.input_weight_mut(input, node) = scale * (node + 1) as f32;
            }
        }
        for node in 0..3 {
            let mut view = arena.non_terminal_mut(0, node);
            for w in 0..3 {
                *view.weight_mut(w) = scale;
            }
        }
        for node in 0..3 {
            let mut view = arena.terminal_mut(node);
            *view.weight_mut(0) = scale;
            *view.weight_mut(1) = -scale;
        }
    }
    let inputs = [0.5, -0.25];
    network.set_input_nodes(&inputs);

    let mut expected = vec![0.0f32; 2];
    for g in 0..3 {
        let mut clone = network.group(g).clone();
        let values = clone.execute(&inputs, &identity, &NullTracer);
        for (slot, value) in expected.iter_mut().zip(&values) {
            *slot += value;
        }
    }

    let outputs = network.execute(&identity).unwrap();
    for (got, want) in outputs.iter().zip(&expected) {
        assert!(
            (got - want).abs() < 1e-5,
            "aggregate {got} differs from manual sum {want}"
        );
    }
}

/// Group count only adds contributions; shape stays identical.
#[test]
fn zero_weight_groups_contribute_nothing_under_identity() {
    let mut one = Network::new(NetConfig::new(1, 2, 1, 2, 2)).unwrap();
    let mut many = Network::new(NetConfig::new(5, 2, 1, 2, 2)).unwrap();
    {
        let arena = one.group_mut(0).arena_mut();
        *arena.input_weight_mut(0, 0) = 1.0;
        *arena.non_terminal_mut(0, 0).weight_mut(0) = 1.0;
        *arena.terminal_mut(0).weight_mut(0) = 1.0;
    }
    {
        // Only group 2 of the five is weighted; the rest stay zero.
        let arena = many.group_mut(2).arena_mut();
        *arena.input_weight_mut(0, 0) = 1.0;
        *arena.non_terminal_mut(0, 0).weight_mut(0) = 1.0;
        *arena.terminal_mut(0).weight_mut(0) = 1.0;
    }
    one.set_input_nodes(&[0.3, 0.7]);
    many.set_input_nodes(&[0.3, 0.7]);

    let lone = one.execute(&identity).unwrap().to_vec();
    let crowd = many.execute(&identity).unwrap().to_vec();
    assert_eq!(lone, crowd);
}
