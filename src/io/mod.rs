//! Point-file readers for the two accepted input formats (§6). Kept outside
//! the core library's dependency graph: only the binaries under `src/bin/`
//! call into this module.

pub mod report;

use crate::error::{Error, Result};
use crate::geometry::Point;
use std::fs;
use std::path::Path;

/// `N` on its own token, then `N` whitespace-separated `x y` pairs. Lines,
/// tabs, and spaces are interchangeable.
pub fn read_points_counted(path: &Path) -> Result<Vec<Point>> {
  let contents = fs::read_to_string(path)?;
  let mut tokens = contents.split_ascii_whitespace();
  let n: usize = tokens
    .next()
    .ok_or_else(|| Error::MalformedInput("empty input".into()))?
    .parse()
    .map_err(|_| Error::MalformedInput("expected point count as first token".into()))?;
  let mut points = Vec::with_capacity(n);
  for i in 0..n {
    let x: f64 = tokens
      .next()
      .ok_or_else(|| Error::MalformedInput(format!("missing x for point {}", i)))?
      .parse()
      .map_err(|_| Error::MalformedInput(format!("non-numeric x for point {}", i)))?;
    let y: f64 = tokens
      .next()
      .ok_or_else(|| Error::MalformedInput(format!("missing y for point {}", i)))?
      .parse()
      .map_err(|_| Error::MalformedInput(format!("non-numeric y for point {}", i)))?;
    points.push(Point::new(x, y));
  }
  Ok(points)
}

/// One `x,y` pair per line, no count header.
pub fn read_points_csv(path: &Path) -> Result<Vec<Point>> {
  let contents = fs::read_to_string(path)?;
  let mut points = Vec::new();
  for (lineno, line) in contents.lines().enumerate() {
    let line = line.trim();
    if line.is_empty() {
      continue;
    }
    let mut parts = line.split(',');
    let x: f64 = parts
      .next()
      .ok_or_else(|| Error::MalformedInput(format!("line {}: missing x", lineno + 1)))?
      .trim()
      .parse()
      .map_err(|_| Error::MalformedInput(format!("line {}: non-numeric x", lineno + 1)))?;
    let y: f64 = parts
      .next()
      .ok_or_else(|| Error::MalformedInput(format!("line {}: missing y", lineno + 1)))?
      .trim()
      .parse()
      .map_err(|_| Error::MalformedInput(format!("line {}: non-numeric y", lineno + 1)))?;
    points.push(Point::new(x, y));
  }
  Ok(points)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs::File;
  use std::io::Write;

  fn write_fixture(name: &str, contents: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(name);
    File::create(&path).unwrap().write_all(contents.as_bytes()).unwrap();
    path
  }

  #[test]
  fn parses_counted_format() {
    let path = write_fixture("mwt-io-test-counted.txt", "3\n0 0\n1 0\n1 1\n");
    let points = read_points_counted(&path).unwrap();
    assert_eq!(points.len(), 3);
    let _ = std::fs::remove_file(&path);
  }

  #[test]
  fn parses_csv_format() {
    let path = write_fixture("mwt-io-test.csv", "0,0\n1,0\n1,1\n");
    let points = read_points_csv(&path).unwrap();
    assert_eq!(points.len(), 3);
    let _ = std::fs::remove_file(&path);
  }
}
