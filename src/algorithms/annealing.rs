//! Delaunay + Candidate-Edge Simulated Annealing (C11). Grounded in
//! `DT_CES_SA/src/SimulatedAnnealing.cpp`: adaptive-cooling Metropolis flip
//! search, seeded from a mean-improvement estimate, followed by a
//! best-improvement-first greedy polish.

use crate::algorithms::candidates::{build_candidate_set, update_candidates_after_flip};
use crate::algorithms::flip::is_flip_legal;
use crate::data::graph::{CandidatePolicy, PlanarGraphState};
use crate::geometry::dist;
use rand::Rng;

pub struct AnnealingConfig {
  pub initial_temperature: f64,
  pub min_temperature: f64,
  pub cooling_rate: f64,
  pub max_iterations: usize,
  pub adaptive_cooling: bool,
}

impl Default for AnnealingConfig {
  fn default() -> AnnealingConfig {
    AnnealingConfig {
      initial_temperature: 1.0,
      min_temperature: 1e-6,
      cooling_rate: 0.9995,
      max_iterations: 200_000,
      adaptive_cooling: true,
    }
  }
}

pub struct AnnealingStats {
  pub accepted: usize,
  pub iterations: usize,
}

/// `Δ = log( dist(P[a], P[c]) / weight(b, d) )` — the log-ratio of the
/// candidate diagonal's length to the vanishing diagonal's weight. Scale
/// invariant, so Metropolis probabilities behave the same regardless of the
/// input's absolute coordinate range.
pub fn weight_change(gs: &PlanarGraphState, flip: crate::data::graph::FlipResult) -> f64 {
  let old_len = gs.get_edge(flip.b, flip.d).map(|e| e.weight).unwrap_or(0.0);
  let new_len = dist(gs.points()[flip.a], gs.points()[flip.c]);
  if old_len <= 0.0 {
    return 0.0;
  }
  (new_len / old_len).ln()
}

/// Samples up to 800 candidate edges, measures the mean absolute weight
/// change of their (legal) flips, and derives `T0 = 2.5 * Eavg`,
/// `Tmin = Eavg / 1000`, `maxIter = 300 * |E|`.
pub fn configure_dynamic<R: Rng + ?Sized>(
  gs: &PlanarGraphState,
  candidates: &[crate::data::graph::Edge],
  rng: &mut R,
) -> AnnealingConfig {
  let sample_size = candidates.len().min(800);
  let mut sum = 0.0;
  let mut valid = 0usize;
  if sample_size > 0 {
    let mut indices: Vec<usize> = (0..candidates.len()).collect();
    // partial shuffle: take `sample_size` random indices without replacement.
    for i in 0..sample_size {
      let j = rng.gen_range(i..indices.len());
      indices.swap(i, j);
    }
    for &idx in &indices[..sample_size] {
      let e = candidates[idx];
      let flip = is_flip_legal(gs, e.u, e.v);
      if !flip.legal {
        continue;
      }
      sum += weight_change(gs, flip).abs();
      valid += 1;
    }
  }
  let e_avg = if valid > 0 { sum / valid as f64 } else { 0.1 };
  AnnealingConfig {
    initial_temperature: 2.5 * e_avg,
    min_temperature: e_avg / 1000.0,
    cooling_rate: 0.9995,
    max_iterations: gs.edges().len() * 300,
    adaptive_cooling: true,
  }
}

/// Main Metropolis loop. Rebuilds the candidate pool whenever it drops
/// below half the current edge count.
pub fn run<R: Rng + ?Sized>(
  gs: &mut PlanarGraphState,
  policy: CandidatePolicy,
  config: &AnnealingConfig,
  rng: &mut R,
) -> AnnealingStats {
  let mut candidates = build_candidate_set(gs, policy, rng);
  let mut t = config.initial_temperature;
  let mut accepted = 0usize;
  let mut iter = 0usize;

  while iter < config.max_iterations && t > config.min_temperature {
    iter += 1;
    if candidates.len() < (gs.edges().len() as f64 * 0.5) as usize {
      candidates = build_candidate_set(gs, policy, rng);
    }
    if candidates.is_empty() {
      break;
    }
    let pick = rng.gen_range(0..candidates.len());
    let e = candidates[pick];
    let flip = is_flip_legal(gs, e.u, e.v);
    if !flip.legal {
      continue;
    }
    let delta = weight_change(gs, flip);
    let accept = delta < 0.0 || (-delta / t).exp() > rng.gen::<f64>();
    if accept {
      if gs.flip_edge(flip).is_ok() {
        accepted += 1;
        update_candidates_after_flip(&mut candidates, gs, flip, policy, false, rng);
      }
    }
    if config.adaptive_cooling {
      t *= if delta < 0.0 { 0.99995 } else { 0.9993 };
    } else {
      t *= config.cooling_rate;
    }
  }

  AnnealingStats {
    accepted,
    iterations: iter,
  }
}

/// Best-improvement-first polish: repeatedly scans the candidate pool for
/// the first legal, improving flip, applies it, and restarts the scan.
/// Stops once a full pass finds nothing improving.
pub fn greedy_improve<R: Rng + ?Sized>(gs: &mut PlanarGraphState, policy: CandidatePolicy, rng: &mut R) {
  let mut candidates = build_candidate_set(gs, policy, rng);
  loop {
    if candidates.len() < (gs.edges().len() as f64 * 0.3) as usize {
      candidates = build_candidate_set(gs, policy, rng);
    }
    let mut improved = false;
    for idx in 0..candidates.len() {
      let e = candidates[idx];
      let flip = is_flip_legal(gs, e.u, e.v);
      if !flip.legal {
        continue;
      }
      if weight_change(gs, flip) < 0.0 {
        if gs.flip_edge(flip).is_ok() {
          update_candidates_after_flip(&mut candidates, gs, flip, policy, false, rng);
          improved = true;
          break;
        }
      }
    }
    if !improved {
      break;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::delaunay::delaunay_graph;
  use crate::geometry::Point;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn sa_does_not_increase_weight_in_expectation() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut regressions = 0;
    for trial in 0..30u64 {
      let mut trial_rng = SmallRng::seed_from_u64(1000 + trial);
      let pts: Vec<Point> = (0..50)
        .map(|_| Point::new(trial_rng.gen::<f64>(), trial_rng.gen::<f64>()))
        .collect();
      let mut gs = delaunay_graph(&pts).unwrap();
      let initial = gs.total_weight();
      let policy = CandidatePolicy::default();
      let candidates = build_candidate_set(&gs, policy, &mut rng);
      let config = configure_dynamic(&gs, &candidates, &mut rng);
      run(&mut gs, policy, &config, &mut rng);
      greedy_improve(&mut gs, policy, &mut rng);
      if gs.total_weight() > initial + 1e-6 {
        regressions += 1;
      }
    }
    assert!(regressions <= 2, "{} of 30 trials regressed", regressions);
  }
}
