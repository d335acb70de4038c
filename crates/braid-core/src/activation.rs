//! Activation-function helpers.
//!
//! The engine never owns an activation function: every forward pass takes
//! an arbitrary `Fn(f32) -> f32` supplied by the caller. The functions here
//! are conveniences, not a fixed menu — anything with the right signature
//! works, including closures capturing parameters.

/// Logistic squashing function: `1 / (1 + e^-x)`.
///
/// Maps all of `f32` into `(0, 1)`, which is the range the byte codec in
/// `braid-io` assumes. This is the default choice for byte-in/byte-out
/// inference.
///
/// ```
/// use braid_core::soft_step;
///
/// assert!((soft_step(0.0) - 0.5).abs() < 1e-7);
/// assert!(soft_step(10.0) > 0.9999);
/// assert!(soft_step(-10.0) < 0.0001);
/// ```
pub fn soft_step(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}

/// Identity activation: returns its argument unchanged.
///
/// With `identity`, a hidden group's output is an exact dot-product chain
/// of inputs and weights, which makes closed-form verification possible.
/// Intended for tests and linear probes, not production inference.
pub fn identity(x: f32) -> f32 {
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soft_step_is_centered_at_half() {
        assert!((soft_step(0.0) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn soft_step_saturates() {
        assert!(soft_step(20.0) > 0.999_999);
        assert!(soft_step(-20.0) < 1e-6);
    }

    #[test]
    fn soft_step_is_monotonic() {
        let mut prev = soft_step(-5.0);
        let mut x = -4.9_f32;
        while x <= 5.0 {
            let y = soft_step(x);
            assert!(y > prev, "soft_step not monotonic at x={x}");
            prev = y;
            x += 0.1;
        }
    }

    #[test]
    fn soft_step_matches_reference_value() {
        // Hand-computed sigma(0.05) to seven figures.
        assert!((soft_step(0.05) - 0.512_497_4).abs() < 1e-6);
    }

    #[test]
    fn identity_is_identity() {
        assert_eq!(identity(0.0), 0.0);
        assert_eq!(identity(-3.25), -3.25);
        assert_eq!(identity(f32::MAX), f32::MAX);
    }
}
