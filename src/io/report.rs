//! CSV result writer for the brute-force binary (§6). Format matches
//! `BruteForce/main.cpp`'s `writeResultCSV` exactly: a metadata header, a
//! blank line, a `Points:` block, a blank line, then an `Edges:` block.

use crate::error::Result;
use crate::geometry::Point;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_csv(
  path: &Path,
  weight: f64,
  runtime_secs: f64,
  points: &[Point],
  edges: &[(usize, usize)],
) -> Result<()> {
  let mut file = File::create(path)?;
  writeln!(file, "Minimum Weight,{}", weight)?;
  writeln!(file, "Runtime (seconds),{}", runtime_secs)?;
  writeln!(file)?;
  writeln!(file, "Points:")?;
  writeln!(file, "index,x,y")?;
  for (i, p) in points.iter().enumerate() {
    writeln!(file, "{},{},{}", i, p.x, p.y)?;
  }
  writeln!(file)?;
  writeln!(file, "Edges:")?;
  writeln!(file, "from,to")?;
  for &(u, v) in edges {
    writeln!(file, "{},{}", u, v)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn writes_expected_sections() {
    let path = std::env::temp_dir().join("mwt-report-test.csv");
    let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
    let edges = vec![(0, 1), (1, 2), (2, 0)];
    write_csv(&path, 3.0, 0.001, &points, &edges).unwrap();
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("Minimum Weight,3"));
    assert!(contents.contains("Points:"));
    assert!(contents.contains("Edges:"));
    let _ = std::fs::remove_file(&path);
  }
}
