//! Candidate-edge filter (C10): the simulated-annealing proposal
//! distribution. Grounded in `DT_CES_SA/src/CandidateEdgeFilter.cpp`.
//! An edge is a candidate if it is among the `perVertex` longest edges at
//! either endpoint, or among the top `globalFraction` longest edges overall.

use crate::data::graph::{CandidatePolicy, Edge, EdgeKey, FlipResult, PlanarGraphState};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

fn global_cutoff(gs: &PlanarGraphState, fraction: f64) -> f64 {
  let mut weights: Vec<f64> = gs.edges().iter().map(|e| e.weight).collect();
  if weights.is_empty() || fraction <= 0.0 {
    return f64::INFINITY;
  }
  weights.sort_by(|a, b| b.partial_cmp(a).unwrap());
  let keep = ((fraction * weights.len() as f64).ceil() as usize)
    .max(1)
    .min(weights.len());
  weights[keep - 1]
}

fn per_vertex_cutoffs(gs: &PlanarGraphState, k: usize) -> HashMap<usize, f64> {
  let mut cutoffs = HashMap::new();
  if k == 0 {
    return cutoffs;
  }
  let mut incident: HashMap<usize, Vec<f64>> = HashMap::new();
  for e in gs.edges() {
    incident.entry(e.u).or_default().push(e.weight);
    incident.entry(e.v).or_default().push(e.weight);
  }
  for (v, mut weights) in incident {
    weights.sort_by(|a, b| b.partial_cmp(a).unwrap());
    let idx = k.min(weights.len()) - 1;
    cutoffs.insert(v, weights[idx]);
  }
  cutoffs
}

fn is_good_candidate(e: &Edge, global_cutoff: f64, per_vertex: &HashMap<usize, f64>) -> bool {
  e.weight >= global_cutoff
    || per_vertex.get(&e.u).is_some_and(|&c| e.weight >= c)
    || per_vertex.get(&e.v).is_some_and(|&c| e.weight >= c)
}

/// Builds the initial candidate pool, shuffled for uniform sampling.
pub fn build_candidate_set<R: Rng + ?Sized>(
  gs: &PlanarGraphState,
  policy: CandidatePolicy,
  rng: &mut R,
) -> Vec<Edge> {
  let policy = CandidatePolicy::clamped(policy.per_vertex, policy.global_fraction);
  let global = global_cutoff(gs, policy.global_fraction);
  let per_vertex = per_vertex_cutoffs(gs, policy.per_vertex);
  let mut candidates: Vec<Edge> = gs
    .edges()
    .iter()
    .copied()
    .filter(|e| is_good_candidate(e, global, &per_vertex))
    .collect();
  candidates.shuffle(rng);
  candidates
}

/// Incrementally repairs `candidates` after `flip` has been applied to
/// `gs`. Only the four quadrilateral vertices' neighbourhoods are
/// re-examined — ranks elsewhere are assumed unaffected, an accepted
/// approximation of the true (global-cutoff-shifting) policy.
pub fn update_candidates_after_flip<R: Rng + ?Sized>(
  candidates: &mut Vec<Edge>,
  gs: &PlanarGraphState,
  flip: FlipResult,
  policy: CandidatePolicy,
  aggressive: bool,
  rng: &mut R,
) {
  if !flip.legal {
    return;
  }
  if aggressive {
    *candidates = build_candidate_set(gs, policy, rng);
    return;
  }

  let policy = CandidatePolicy::clamped(policy.per_vertex, policy.global_fraction);
  let global = global_cutoff(gs, policy.global_fraction);
  let per_vertex = per_vertex_cutoffs(gs, policy.per_vertex);

  let vanished = EdgeKey::new(flip.b, flip.d);
  candidates.retain(|e| e.key() != vanished);

  if let Some(&ac) = gs.get_edge(flip.a, flip.c) {
    if is_good_candidate(&ac, global, &per_vertex) {
      candidates.push(ac);
    }
  }

  let mut visited: HashSet<EdgeKey> = HashSet::new();
  for &v in &[flip.a, flip.b, flip.c, flip.d] {
    let neighbours: Vec<usize> = gs.adjacency(v).collect();
    for nb in neighbours {
      let Some(&e) = gs.get_edge(v, nb) else { continue };
      let key = e.key();
      if !visited.insert(key) {
        continue;
      }
      let should = is_good_candidate(&e, global, &per_vertex);
      let present = candidates.iter().any(|c| c.key() == key);
      if should && !present {
        candidates.push(e);
      } else if !should && present {
        candidates.retain(|c| c.key() != key);
      }
    }
  }
  candidates.shuffle(rng);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Point;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn global_fraction_keeps_longest_edges() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(10.0, 0.0),
      Point::new(10.0, 10.0),
      Point::new(0.0, 10.0),
    ];
    let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
    let triangles = vec![(0, 1, 2), (0, 2, 3)];
    let gs = PlanarGraphState::construct(pts, edges, triangles);
    let mut rng = SmallRng::seed_from_u64(1);
    let policy = CandidatePolicy {
      per_vertex: 0,
      global_fraction: 0.2,
    };
    let candidates = build_candidate_set(&gs, policy, &mut rng);
    assert!(candidates.iter().any(|e| e.key() == EdgeKey::new(0, 2)));
  }
}
