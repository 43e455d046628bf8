//! .
//!
//! Escape-time evaluation of the quadratic map `z ← z² + c`.

use {
  num_complex::Complex,
  num_traits::Float
};

/// Escape-time evaluator. A point `c` is iterated from `z = 0` until `|z|`
/// leaves the escape radius, or the iteration cap is hit.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTime {
  /// Iteration cap. The loop re-checks *after* incrementing, so the body also
  /// runs at `iter == max_iter` and the largest reported count is
  /// `max_iter + 1`.
  pub max_iter: u32,
  /// Escape radius; divergence is declared once `|z| ≥ radius`.
  pub radius: f64
}

impl Default for EscapeTime {
  fn default() -> Self {
    Self { max_iter: 80, radius: 2.0 }
  }
}

impl EscapeTime {
  /// Number of iterations until `|z|` reaches the escape radius, saturating at
  /// `max_iter + 1` for points that never diverge.
  ///
  /// Pure and deterministic; always terminates within `max_iter + 1` steps.
  /// The comparison uses the plain complex modulus rather than the squared
  /// magnitude, keeping iteration counts bit-identical with the historical
  /// output near the set boundary.
  pub fn eval<T: Float>(&self, c: Complex<T>) -> u32 {
    let radius = T::from(self.radius).unwrap();
    let mut z = Complex::new(T::zero(), T::zero());
    let mut iter = 0u32;

    while z.norm() < radius && iter <= self.max_iter {
      z = z * z + c;
      iter += 1;
    }
    iter
  }
}
