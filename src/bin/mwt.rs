//! `mwt <dataset_file> [algorithm]` — reads a whitespace-delimited,
//! count-headed point file and prints `RESULT,<weight>,<runtime_ms>`.
//! `algorithm` is one of `brute|dogt|mstpoly|sa|auto` (default `auto`).

use mwt::io::read_points_counted;
use mwt::orchestrator::{auto_select, run, Algorithm};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
  let mut args = std::env::args().skip(1);
  let Some(dataset) = args.next() else {
    eprintln!("usage: mwt <dataset_file> [brute|dogt|mstpoly|sa|auto]");
    return ExitCode::FAILURE;
  };
  let algorithm_arg = args.next();

  let points = match read_points_counted(&PathBuf::from(&dataset)) {
    Ok(points) => points,
    Err(e) => {
      eprintln!("error reading {}: {}", dataset, e);
      return ExitCode::FAILURE;
    }
  };

  let algorithm = match algorithm_arg.as_deref() {
    None | Some("auto") => auto_select(points.len()),
    Some(name) => match Algorithm::parse(name) {
      Some(a) => a,
      None => {
        eprintln!("unknown algorithm: {}", name);
        return ExitCode::FAILURE;
      }
    },
  };

  match run(&points, algorithm) {
    Ok(result) => {
      println!("RESULT,{},{}", result.weight, result.runtime.as_secs_f64() * 1000.0);
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("error: {}", e);
      ExitCode::FAILURE
    }
  }
}
