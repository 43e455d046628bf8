//! Escape-time sampling of the Mandelbrot set over a rectangular region of ℂ.
//!
//! It is split into two modules: [`escape`] for evaluating the quadratic map
//! `z ← z² + c` at a single point, and [`grid`] for walking a rectangular
//! lattice of such points in row-major order, streaming one integer iteration
//! count per cell to a text sink.
//!
//! # Basic usage
//! ```
//! use {
//!   escape_time::{
//!     escape::EscapeTime,
//!     grid::{Axis, Lattice}
//!   },
//!   anyhow::Result
//! };
//!
//! fn main() -> Result<()> {
//!   // The classic full view of the set, 64x64 samples.
//!   let lattice = Lattice {
//!     x: Axis { start: -3.0, end: 1.5, count: 64 },
//!     y: Axis { start: -1.5, end: 1.5, count: 64 }
//!   };
//!
//!   let mut out = vec![];
//!   lattice.render(&EscapeTime::default(), &mut out)?;
//!
//!   // one header line, then one line per cell
//!   assert_eq!(out.iter().filter(|&&b| b == b'\n').count(), 1 + 64 * 64);
//!   Ok(())
//! }
//! ```
//! The header line holds the six lattice parameters (`x0 x1 Nx y0 y1 Ny`);
//! every following line holds a single iteration count, rows outer, columns
//! inner. Counts saturate at [`EscapeTime::max_iter`]` + 1` for points that
//! never diverge.
//!
//! [`EscapeTime::max_iter`]: escape::EscapeTime::max_iter

pub mod escape;
pub mod grid;
