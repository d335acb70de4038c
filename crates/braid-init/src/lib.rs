//! Seeded weight initialization for braid networks.
//!
//! The core never randomizes its own weights: a freshly constructed
//! arena is all zeros, and this crate writes uniform random weights
//! through the same public accessors everything else uses.
//!
//! Randomness is explicit, never ambient. Callers pass an RNG instance
//! (use [`seeded_rng`] for a deterministic ChaCha8 stream) and a seed
//! fully determines every weight in a network: groups are filled
//! sequentially in index order, and within a group the regions are
//! walked in arena order (input weights, then non-terminal layers, then
//! terminal weights).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use braid_net::{HiddenGroup, Network};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A deterministic ChaCha8 RNG from a 64-bit seed.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Fill every weight in one group with uniform samples from
/// `[min, max]`. Value slots are untouched.
///
/// # Panics
///
/// Panics if `min > max` or either bound is not finite.
pub fn randomize_group<R>(group: &mut HiddenGroup, rng: &mut R, min: f32, max: f32)
where
    R: Rng + ?Sized,
{
    assert!(
        min.is_finite() && max.is_finite() && min <= max,
        "weight range [{min}, {max}] must be finite and ordered"
    );

    let layout = *group.arena().layout();
    let arena = group.arena_mut();

    for input in 0..layout.input_node_count() {
        for weight in 0..layout.input_fan_out() {
            *arena.input_weight_mut(input, weight) = rng.random_range(min..=max);
        }
    }

    for layer in 0..layout.non_terminal_layer_count() {
        for node in 0..layout.nodes_per_layer() {
            let mut view = arena.non_terminal_mut(layer, node);
            for weight in 0..layout.nodes_per_layer() {
                *view.weight_mut(weight) = rng.random_range(min..=max);
            }
        }
    }

    for node in 0..layout.nodes_per_layer() {
        let mut view = arena.terminal_mut(node);
        for weight in 0..layout.output_node_count() {
            *view.weight_mut(weight) = rng.random_range(min..=max);
        }
    }
}

/// Fill every weight in every group of a network, sequentially in group
/// index order, from one RNG. A fixed seed therefore fixes the whole
/// network.
///
/// # Panics
///
/// Panics if `min > max` or either bound is not finite.
pub fn randomize_network<R>(network: &mut Network, rng: &mut R, min: f32, max: f32)
where
    R: Rng + ?Sized,
{
    for group in network.groups_mut() {
        randomize_group(group, rng, min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_arena::GroupConfig;
    use braid_core::{soft_step, NullTracer};
    use braid_net::NetConfig;

    fn group() -> HiddenGroup {
        HiddenGroup::new(0, GroupConfig::new(3, 2, 3, 4)).unwrap()
    }

    #[test]
    fn weights_land_in_range() {
        let mut g = group();
        let mut rng = seeded_rng(7);
        randomize_group(&mut g, &mut rng, 0.25, 0.75);

        let layout = *g.arena().layout();
        for input in 0..layout.input_node_count() {
            for w in 0..layout.input_fan_out() {
                let weight = g.arena().input_weight(input, w);
                assert!((0.25..=0.75).contains(&weight));
            }
        }
        for node in 0..layout.nodes_per_layer() {
            for w in 0..layout.output_node_count() {
                let weight = g.arena().terminal(node).weight(w);
                assert!((0.25..=0.75).contains(&weight));
            }
        }
    }

    #[test]
    fn value_slots_stay_zero() {
        let mut g = group();
        let mut rng = seeded_rng(7);
        randomize_group(&mut g, &mut rng, 0.0, 1.0);

        let layout = *g.arena().layout();
        for layer in 0..layout.non_terminal_layer_count() {
            for node in 0..layout.nodes_per_layer() {
                assert_eq!(g.arena().non_terminal(layer, node).value(), 0.0);
            }
        }
        for node in 0..layout.nodes_per_layer() {
            assert_eq!(g.arena().terminal(node).value(), 0.0);
        }
    }

    #[test]
    fn same_seed_same_weights() {
        let mut a = group();
        let mut b = group();
        randomize_group(&mut a, &mut seeded_rng(42), -1.0, 1.0);
        randomize_group(&mut b, &mut seeded_rng(42), -1.0, 1.0);
        assert_eq!(a.arena().as_slice(), b.arena().as_slice());
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = group();
        let mut b = group();
        randomize_group(&mut a, &mut seeded_rng(1), -1.0, 1.0);
        randomize_group(&mut b, &mut seeded_rng(2), -1.0, 1.0);
        assert_ne!(a.arena().as_slice(), b.arena().as_slice());
    }

    #[test]
    fn seed_fixes_whole_network_output() {
        let config = NetConfig::new(3, 4, 2, 2, 5);
        let mut first = Network::new(config).unwrap();
        let mut second = Network::new(config).unwrap();
        randomize_network(&mut first, &mut seeded_rng(99), 0.0, 0.5);
        randomize_network(&mut second, &mut seeded_rng(99), 0.0, 0.5);

        let inputs = [0.1, 0.2, 0.3, 0.4];
        first.set_input_nodes(&inputs);
        second.set_input_nodes(&inputs);
        assert_eq!(
            first.execute(&soft_step).unwrap(),
            second.execute(&soft_step).unwrap()
        );
    }

    #[test]
    fn degenerate_range_pins_every_weight() {
        let mut g = group();
        randomize_group(&mut g, &mut seeded_rng(0), 0.5, 0.5);
        let layout = *g.arena().layout();
        for input in 0..layout.input_node_count() {
            for w in 0..layout.input_fan_out() {
                assert_eq!(g.arena().input_weight(input, w), 0.5);
            }
        }
    }

    #[test]
    #[should_panic(expected = "weight range")]
    fn inverted_range_panics() {
        let mut g = group();
        randomize_group(&mut g, &mut seeded_rng(0), 1.0, 0.0);
    }

    #[test]
    fn single_group_execute_after_init_is_finite() {
        let mut g = group();
        randomize_group(&mut g, &mut seeded_rng(3), 0.0, 1.0);
        let outputs = g.execute(&[0.1, 0.5, 0.9], &soft_step, &NullTracer);
        assert_eq!(outputs.len(), 2);
        assert!(outputs.iter().all(|v| v.is_finite()));
    }
}
