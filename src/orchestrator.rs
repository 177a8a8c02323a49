//! MWT orchestrator (C12): selects one of the four algorithms, times it, and
//! reports `(weight, runtime)`. Every `main.cpp` in the original prototype
//! timed its own algorithm body and printed a single `RESULT,...` line; this
//! module centralises that timing so the binaries under `src/bin/` only
//! need to format the result.

use crate::algorithms::annealing::{configure_dynamic, greedy_improve, run as anneal_run};
use crate::algorithms::candidates::build_candidate_set;
use crate::algorithms::delaunay::delaunay_graph;
use crate::algorithms::dogt::dogt;
use crate::algorithms::mst::{euclidean_mst, fix_tuc, merge_with_hull, total_weight as mst_total_weight};
use crate::algorithms::polygon_dp::{brute_force, triangulate};
use crate::algorithms::{convex_hull::convex_hull, faces::find_faces};
use crate::data::graph::CandidatePolicy;
use crate::error::{Error, Result};
use crate::geometry::Point;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
  BruteForce,
  Dogt,
  MstPoly,
  DtCesSa,
}

impl Algorithm {
  pub fn parse(s: &str) -> Option<Algorithm> {
    match s {
      "brute" => Some(Algorithm::BruteForce),
      "dogt" => Some(Algorithm::Dogt),
      "mstpoly" => Some(Algorithm::MstPoly),
      "sa" => Some(Algorithm::DtCesSa),
      _ => None,
    }
  }
}

pub struct MwtResult {
  pub weight: f64,
  pub runtime: std::time::Duration,
}

/// Picks DT-CES-SA by default, the pipeline §1 calls out as the primary one,
/// except for `N <= 3` where the exact DP is both cheap and trivially
/// optimal.
pub fn auto_select(n: usize) -> Algorithm {
  if n <= 3 {
    Algorithm::BruteForce
  } else {
    Algorithm::DtCesSa
  }
}

pub fn run(points: &[Point], algorithm: Algorithm) -> Result<MwtResult> {
  if points.len() < 3 && algorithm != Algorithm::BruteForce {
    return Err(Error::InsufficientPoints);
  }
  let start = Instant::now();
  let weight = match algorithm {
    Algorithm::BruteForce => brute_force(points),
    Algorithm::Dogt => dogt(points),
    Algorithm::MstPoly => mst_poly_weight(points)?,
    Algorithm::DtCesSa => dt_ces_sa_weight(points)?,
  };
  Ok(MwtResult {
    weight,
    runtime: start.elapsed(),
  })
}

/// MST-Polygonisation (C7 + C4): union the convex hull with the Euclidean
/// MST (after leaf-to-hull repair), extract interior faces, and triangulate
/// each exactly; the face's internal-diagonal contribution is recovered via
/// `(polygonDP(face) - boundary_perimeter(face)) / 2`.
fn mst_poly_weight(points: &[Point]) -> Result<f64> {
  if points.len() < 3 {
    return Err(Error::InsufficientPoints);
  }
  let hull = convex_hull(points);
  if hull.len() < 3 {
    return Err(Error::GeometryDegeneracy);
  }
  let mut mst = euclidean_mst(points);
  fix_tuc(points, &mut mst, &hull);
  let merged = merge_with_hull(&mst, &hull);
  let mut weight = mst_total_weight(points, &merged);

  let faces = find_faces(points, &merged);
  for face in faces {
    let face_points: Vec<Point> = face.iter().map(|&i| points[i]).collect();
    let dp = triangulate(&face_points);
    let boundary = crate::algorithms::faces::boundary_weight(points, &face);
    weight += (dp.cost - boundary) / 2.0;
  }
  Ok(weight)
}

/// Delaunay + Candidate-Edge Simulated Annealing (C8-C11): `load → Delaunay
/// → GraphState → candidates → configureDynamic → run → greedyImprove →
/// computeWeight`.
fn dt_ces_sa_weight(points: &[Point]) -> Result<f64> {
  let mut gs = delaunay_graph(points)?;
  let mut rng = SmallRng::from_entropy();
  let policy = CandidatePolicy::default();
  let candidates = build_candidate_set(&gs, policy, &mut rng);
  let config = configure_dynamic(&gs, &candidates, &mut rng);
  anneal_run(&mut gs, policy, &config, &mut rng);
  greedy_improve(&mut gs, policy, &mut rng);
  Ok(gs.total_weight())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn auto_select_uses_brute_force_for_small_inputs() {
    assert_eq!(auto_select(3), Algorithm::BruteForce);
    assert_eq!(auto_select(4), Algorithm::DtCesSa);
  }

  #[test]
  fn collinear_input_does_not_panic() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
    let result = run(&pts, Algorithm::BruteForce).unwrap();
    assert_eq!(result.weight, 0.0);
  }
}
