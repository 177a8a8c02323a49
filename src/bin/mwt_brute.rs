//! `mwt-brute <dataset_file> [output.csv]` — reads a comma-separated,
//! no-header point file, runs the exact brute-force DP, prints
//! `RESULT,<weight>,<runtime_ms>`, and optionally writes a CSV report.

use mwt::algorithms::polygon_dp::{brute_force, triangulate};
use mwt::io::read_points_csv;
use mwt::io::report::write_csv;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

fn main() -> ExitCode {
  let mut args = std::env::args().skip(1);
  let Some(dataset) = args.next() else {
    eprintln!("usage: mwt-brute <dataset_file> [output.csv]");
    return ExitCode::FAILURE;
  };
  let output = args.next();

  let points = match read_points_csv(&PathBuf::from(&dataset)) {
    Ok(points) => points,
    Err(e) => {
      eprintln!("error reading {}: {}", dataset, e);
      return ExitCode::FAILURE;
    }
  };

  if points.len() < 3 {
    println!("RESULT,0,0");
    return ExitCode::SUCCESS;
  }

  let start = Instant::now();
  let dp = triangulate(&points);
  let weight = brute_force(&points);
  let runtime = start.elapsed();
  println!("RESULT,{},{}", weight, runtime.as_secs_f64() * 1000.0);

  if let Some(path) = output {
    if let Err(e) = write_csv(&PathBuf::from(&path), weight, runtime.as_secs_f64(), &points, &dp.edges) {
      eprintln!("error writing {}: {}", path, e);
      return ExitCode::FAILURE;
    }
  }

  ExitCode::SUCCESS
}
