//! The owned flat buffer behind one hidden group.

use crate::config::GroupConfig;
use crate::error::LayoutError;
use crate::layout::GroupLayout;
use crate::node::{NodeView, NodeViewMut};

/// One hidden group's storage: a single contiguous `Vec<f32>`.
///
/// Allocated exactly once at construction, to exactly
/// [`GroupLayout::total_len`] slots, and never resized. Every slot is
/// zero-initialised — value slots are cleared again on each forward pass,
/// and weights stay zero until an initializer collaborator (such as
/// `braid-init`) writes through the weight accessors.
///
/// The arena hands out [`NodeView`]/[`NodeViewMut`] windows computed from
/// the layout formulas; it never exposes raw offsets to callers.
#[derive(Clone, Debug)]
pub struct GroupArena {
    layout: GroupLayout,
    data: Vec<f32>,
}

impl GroupArena {
    /// Allocate a zeroed arena for the given shape.
    pub fn new(config: GroupConfig) -> Result<Self, LayoutError> {
        let layout = GroupLayout::new(config)?;
        let data = vec![0.0; layout.total_len()];
        Ok(Self { layout, data })
    }

    /// The index formulas this arena was allocated against.
    pub fn layout(&self) -> &GroupLayout {
        &self.layout
    }

    /// Total slots in the arena.
    pub fn slot_count(&self) -> usize {
        self.data.len()
    }

    /// Total memory usage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f32>()
    }

    /// The weight from input node `input` to first-layer node `weight`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn input_weight(&self, input: usize, weight: usize) -> f32 {
        self.data[self.layout.input_weight_index(input, weight)]
    }

    /// Mutable access to an input weight; the initializer's write seam.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn input_weight_mut(&mut self, input: usize, weight: usize) -> &mut f32 {
        let index = self.layout.input_weight_index(input, weight);
        &mut self.data[index]
    }

    /// View of non-terminal node `node` in non-terminal layer `layer`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn non_terminal(&self, layer: usize, node: usize) -> NodeView<'_> {
        let start = self.layout.non_terminal_node_index(layer, node);
        let end = start + self.layout.non_terminal_node_len();
        NodeView::new(&self.data[start..end])
    }

    /// Mutable view of non-terminal node `node` in layer `layer`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn non_terminal_mut(&mut self, layer: usize, node: usize) -> NodeViewMut<'_> {
        let start = self.layout.non_terminal_node_index(layer, node);
        let end = start + self.layout.non_terminal_node_len();
        NodeViewMut::new(&mut self.data[start..end])
    }

    /// View of terminal node `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn terminal(&self, node: usize) -> NodeView<'_> {
        let start = self.layout.terminal_node_index(node);
        let end = start + self.layout.terminal_node_len();
        NodeView::new(&self.data[start..end])
    }

    /// Mutable view of terminal node `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is out of range.
    pub fn terminal_mut(&mut self, node: usize) -> NodeViewMut<'_> {
        let start = self.layout.terminal_node_index(node);
        let end = start + self.layout.terminal_node_len();
        NodeViewMut::new(&mut self.data[start..end])
    }

    /// The raw buffer, for inspection in tests and tooling.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(i: usize, o: usize, l: usize, n: usize) -> GroupArena {
        GroupArena::new(GroupConfig::new(i, o, l, n)).unwrap()
    }

    #[test]
    fn new_allocates_exactly_total_len_zeroed() {
        let a = arena(3, 2, 3, 4);
        assert_eq!(a.slot_count(), a.layout().total_len());
        assert_eq!(a.memory_bytes(), a.slot_count() * 4);
        assert!(a.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn invalid_shape_is_rejected() {
        assert_eq!(
            GroupArena::new(GroupConfig::new(1, 1, 0, 1)).unwrap_err(),
            LayoutError::ZeroLayers
        );
    }

    #[test]
    fn input_weight_round_trip() {
        let mut a = arena(3, 2, 2, 4);
        *a.input_weight_mut(2, 3) = 0.75;
        assert_eq!(a.input_weight(2, 3), 0.75);
        // Neighbouring weights untouched.
        assert_eq!(a.input_weight(2, 2), 0.0);
        assert_eq!(a.input_weight(1, 3), 0.0);
    }

    #[test]
    fn views_have_configured_fan_out() {
        let a = arena(3, 2, 3, 4);
        assert_eq!(a.non_terminal(0, 0).fan_out(), 4);
        assert_eq!(a.terminal(0).fan_out(), 2);
    }

    #[test]
    fn distinct_nodes_write_distinct_slots() {
        let mut a = arena(2, 2, 3, 3);
        for layer in 0..2 {
            for node in 0..3 {
                let mut view = a.non_terminal_mut(layer, node);
                view.set_value((layer * 10 + node) as f32);
            }
        }
        for layer in 0..2 {
            for node in 0..3 {
                assert_eq!(
                    a.non_terminal(layer, node).value(),
                    (layer * 10 + node) as f32
                );
            }
        }
    }

    #[test]
    fn weight_writes_never_leak_into_neighbour_values() {
        let mut a = arena(2, 2, 3, 3);
        // Fill every weight of node (0, 0); node (0, 1)'s value slot is the
        // very next slot in the buffer and must stay zero.
        {
            let mut view = a.non_terminal_mut(0, 0);
            for w in 0..view.fan_out() {
                *view.weight_mut(w) = 9.0;
            }
        }
        assert_eq!(a.non_terminal(0, 1).value(), 0.0);
    }

    #[test]
    fn terminal_weight_writes_stay_inside_arena() {
        let mut a = arena(2, 2, 1, 3);
        let last = a.layout().nodes_per_layer() - 1;
        {
            let mut view = a.terminal_mut(last);
            let fan_out = view.fan_out();
            *view.weight_mut(fan_out - 1) = 1.25;
        }
        assert_eq!(*a.as_slice().last().unwrap(), 1.25);
    }

    #[test]
    #[should_panic(expected = "terminal node index")]
    fn terminal_out_of_range_panics() {
        arena(2, 2, 1, 3).terminal(3);
    }
}
