use {
  escape_time::{
    escape::EscapeTime,
    grid::{Axis, Lattice}
  },
  anyhow::{Context, Result},
  humansize::{FileSize, file_size_opts as options},
  itertools::Itertools,
  std::{env, fs, io::BufWriter, time::Instant}
};

/// Positional invocation, all arguments required:
/// `escape-time x0 x1 Nx y0 y1 Ny outputFile`
///
/// `x0` goes through an integer parse on purpose: the historical output
/// format truncates it, and keeping the truncation keeps headers byte
/// identical. Malformed arguments and unwritable paths are reported with a
/// non-zero exit instead of crashing through them.
fn main() -> Result<()> {
  let (x0, x1, nx, y0, y1, ny, path) = env::args().skip(1)
    .collect_tuple()
    .context("usage: escape-time x0 x1 Nx y0 y1 Ny outputFile")?;

  let lattice = Lattice {
    x: Axis {
      start: x0.parse::<i64>().context("x0: expected an integer")? as f64,
      end: x1.parse().context("x1: expected a float")?,
      count: nx.parse().context("Nx: expected an integer ≥ 2")?
    },
    y: Axis {
      start: y0.parse().context("y0: expected a float")?,
      end: y1.parse().context("y1: expected a float")?,
      count: ny.parse().context("Ny: expected an integer ≥ 2")?
    }
  };

  let file = fs::File::create(&path)
    .with_context(|| format!("cannot create output file {}", path))?;

  let t0 = Instant::now();
  lattice.render(&EscapeTime::default(), BufWriter::new(file))?;

  println!("{} cells in {}ms, {} -> {}",
    lattice.size().area(),
    t0.elapsed().as_millis(),
    fs::metadata(&path)?.len()
      .file_size(options::BINARY)
      .map_err(anyhow::Error::msg)?,
    path
  );
  Ok(())
}
