//! Node views: computed windows over arena slots.
//!
//! A node occupies `1 + fan_out` adjacent slots — the value followed
//! immediately by its outgoing weights. A view is just a slice over that
//! window, built fresh from an index on each access. It owns nothing,
//! carries no per-instance book-keeping, and is valid exactly as long as
//! the borrow of the owning arena.

/// Read-only window over one node's slots.
#[derive(Clone, Copy, Debug)]
pub struct NodeView<'a> {
    slots: &'a [f32],
}

impl<'a> NodeView<'a> {
    pub(crate) fn new(slots: &'a [f32]) -> Self {
        debug_assert!(!slots.is_empty());
        Self { slots }
    }

    /// The node's activation value.
    pub fn value(&self) -> f32 {
        self.slots[0]
    }

    /// Number of outgoing weights.
    pub fn fan_out(&self) -> usize {
        self.slots.len() - 1
    }

    /// The outgoing weight toward node `index` in the next layer
    /// (or toward logical output `index` for terminal nodes).
    ///
    /// # Panics
    ///
    /// Panics if `index >= fan_out()`.
    pub fn weight(&self, index: usize) -> f32 {
        assert!(
            index < self.fan_out(),
            "weight index {index} out of range (fan-out {})",
            self.fan_out()
        );
        self.slots[1 + index]
    }

    /// `value() × weight(index)`: this node's contribution to downstream
    /// node `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= fan_out()`.
    pub fn weighted_value(&self, index: usize) -> f32 {
        self.value() * self.weight(index)
    }

    /// All outgoing weights, in downstream-node order.
    pub fn weights(&self) -> &'a [f32] {
        &self.slots[1..]
    }
}

/// Mutable window over one node's slots.
#[derive(Debug)]
pub struct NodeViewMut<'a> {
    slots: &'a mut [f32],
}

impl<'a> NodeViewMut<'a> {
    pub(crate) fn new(slots: &'a mut [f32]) -> Self {
        debug_assert!(!slots.is_empty());
        Self { slots }
    }

    /// The node's activation value.
    pub fn value(&self) -> f32 {
        self.slots[0]
    }

    /// Overwrite the value.
    pub fn set_value(&mut self, value: f32) {
        self.slots[0] = value;
    }

    /// Add `amount` to the value.
    pub fn add_to_value(&mut self, amount: f32) {
        self.slots[0] += amount;
    }

    /// Reset the value to zero.
    pub fn clear_value(&mut self) {
        self.set_value(0.0);
    }

    /// Replace the value with `activation(value)`. The view never owns
    /// or selects an activation function itself.
    pub fn apply_activation<A>(&mut self, activation: A)
    where
        A: Fn(f32) -> f32,
    {
        self.slots[0] = activation(self.slots[0]);
    }

    /// Number of outgoing weights.
    pub fn fan_out(&self) -> usize {
        self.slots.len() - 1
    }

    /// The outgoing weight toward downstream node `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= fan_out()`.
    pub fn weight(&self, index: usize) -> f32 {
        assert!(
            index < self.fan_out(),
            "weight index {index} out of range (fan-out {})",
            self.fan_out()
        );
        self.slots[1 + index]
    }

    /// Mutable access to the outgoing weight toward downstream node
    /// `index`. This is the seam weight initializers write through.
    ///
    /// # Panics
    ///
    /// Panics if `index >= fan_out()`.
    pub fn weight_mut(&mut self, index: usize) -> &mut f32 {
        assert!(
            index < self.fan_out(),
            "weight index {index} out of range (fan-out {})",
            self.fan_out()
        );
        &mut self.slots[1 + index]
    }

    /// `value() × weight(index)`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= fan_out()`.
    pub fn weighted_value(&self, index: usize) -> f32 {
        self.value() * self.weight(index)
    }
}
