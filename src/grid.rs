//! Rectangular sampling lattice over the complex plane.
//!
//! Rows walk the imaginary axis, columns the real axis, in row-major order.
//! The traversal is deliberately asymmetric: each row restarts from a freshly
//! computed `y0 + i·dy`, while columns advance a running accumulator by `dx`.
//! Collapsing both into `start + index·step` changes the floating-point drift
//! across a row, and with it the iteration counts of cells near the set
//! boundary.

use {
  crate::escape::EscapeTime,
  anyhow::{Result, bail},
  euclid::Size2D,
  num_complex::Complex,
  std::io::Write
};

/// Lattice index basis
#[derive(Debug, Copy, Clone)]
pub struct CellSpace;

/// One axis of the lattice: `count` evenly spaced samples over
/// `[start, end]`, both endpoints included.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Axis {
  pub start: f64,
  pub end: f64,
  pub count: u32
}

impl Axis {
  /// Distance between two adjacent samples.
  pub fn step(&self) -> Result<f64> {
    if self.count < 2 {
      bail!("axis [{}, {}] must hold at least 2 samples, got {}",
        self.start, self.end, self.count);
    }
    Ok((self.end - self.start) / (self.count - 1) as f64)
  }
}

/// The grid specification: real axis × imaginary axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lattice {
  pub x: Axis,
  pub y: Axis
}

impl Lattice {
  pub fn size(&self) -> Size2D<u32, CellSpace> {
    Size2D::new(self.x.count, self.y.count)
  }

  /// Walk the lattice in row-major order, writing one iteration count per
  /// cell to `sink`.
  ///
  /// The first output line holds the six lattice parameters
  /// (`x0 x1 Nx y0 y1 Ny`, floats in fixed notation with 6 fractional
  /// digits); after it come exactly `Nx·Ny` result lines. Degenerate axes
  /// (`count < 2`) are rejected before anything is written. The sink is
  /// flushed before returning; buffering is the caller's choice.
  pub fn render(&self, escape: &EscapeTime, mut sink: impl Write) -> Result<()> {
    let dx = self.x.step()?;
    let dy = self.y.step()?;

    writeln!(sink, "{:.6} {:.6} {} {:.6} {:.6} {}",
      self.x.start, self.x.end, self.x.count,
      self.y.start, self.y.end, self.y.count)?;

    for i in 0..self.y.count {
      // fresh row start; columns accumulate
      let mut c = Complex::new(self.x.start, self.y.start + i as f64 * dy);
      for _ in 0..self.x.count {
        writeln!(sink, "{}", escape.eval(c))?;
        c.re += dx;
      }
    }

    sink.flush()?;
    Ok(())
  }
}
