//! Euclidean minimum spanning tree, leaf-to-hull fix-up, and hull merge
//! (C7, MST half). Grounded in `MST_Polygonisation/include/AdjListGraph.h`:
//! Kruskal over the complete graph keyed by squared distance, union-find
//! with path compression and union-by-rank, and a leaf-repair pass that
//! wires every degree-1 MST vertex to its nearest hull vertex.

use crate::geometry::{dist, dist_sq, Point};
use std::collections::HashMap;

struct Dsu {
  parent: Vec<usize>,
  rank: Vec<usize>,
}

impl Dsu {
  fn new(n: usize) -> Dsu {
    Dsu {
      parent: (0..n).collect(),
      rank: vec![0; n],
    }
  }

  fn find(&mut self, x: usize) -> usize {
    if self.parent[x] != x {
      self.parent[x] = self.find(self.parent[x]);
    }
    self.parent[x]
  }

  fn unite(&mut self, a: usize, b: usize) -> bool {
    let (ra, rb) = (self.find(a), self.find(b));
    if ra == rb {
      return false;
    }
    match self.rank[ra].cmp(&self.rank[rb]) {
      std::cmp::Ordering::Less => self.parent[ra] = rb,
      std::cmp::Ordering::Greater => self.parent[rb] = ra,
      std::cmp::Ordering::Equal => {
        self.parent[rb] = ra;
        self.rank[ra] += 1;
      }
    }
    true
  }
}

/// Kruskal's algorithm over the complete graph on `points`, weighted by
/// squared distance (ordering-equivalent to distance, cheaper to compute).
pub fn euclidean_mst(points: &[Point]) -> Vec<(usize, usize)> {
  let n = points.len();
  if n < 2 {
    return Vec::new();
  }
  let mut candidate_edges: Vec<(f64, usize, usize)> = Vec::with_capacity(n * (n - 1) / 2);
  for u in 0..n {
    for v in u + 1..n {
      candidate_edges.push((dist_sq(points[u], points[v]), u, v));
    }
  }
  candidate_edges.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());

  let mut dsu = Dsu::new(n);
  let mut mst = Vec::with_capacity(n - 1);
  for (_, u, v) in candidate_edges {
    if mst.len() == n - 1 {
      break;
    }
    if dsu.unite(u, v) {
      mst.push((u, v));
    }
  }
  mst
}

/// For every vertex of degree 1 in `mst_edges`, adds an edge to the nearest
/// hull vertex (by squared distance), preventing dead-end leaves from
/// producing zero-area faces later.
pub fn fix_tuc(points: &[Point], mst_edges: &mut Vec<(usize, usize)>, hull: &[usize]) {
  let n = points.len();
  let mut degree = vec![0usize; n];
  for &(u, v) in mst_edges.iter() {
    degree[u] += 1;
    degree[v] += 1;
  }
  let leaves: Vec<usize> = (0..n).filter(|&v| degree[v] == 1).collect();
  for leaf in leaves {
    let mut best: Option<(f64, usize)> = None;
    for &h in hull {
      if h == leaf {
        continue;
      }
      let d = dist_sq(points[leaf], points[h]);
      if best.map(|(bd, _)| d < bd).unwrap_or(true) {
        best = Some((d, h));
      }
    }
    if let Some((_, h)) = best {
      mst_edges.push((leaf, h));
    }
  }
}

/// Overlays the hull cycle onto the MST adjacency, skipping duplicates.
/// The result is a simple planar graph suitable for [`super::faces::find_faces`].
pub fn merge_with_hull(mst_edges: &[(usize, usize)], hull: &[usize]) -> Vec<(usize, usize)> {
  let mut seen: HashMap<(usize, usize), ()> = HashMap::new();
  let key = |a: usize, b: usize| if a < b { (a, b) } else { (b, a) };
  let mut merged = Vec::with_capacity(mst_edges.len() + hull.len());
  for &(u, v) in mst_edges {
    if seen.insert(key(u, v), ()).is_none() {
      merged.push((u, v));
    }
  }
  let h = hull.len();
  for i in 0..h {
    let (u, v) = (hull[i], hull[(i + 1) % h]);
    if seen.insert(key(u, v), ()).is_none() {
      merged.push((u, v));
    }
  }
  merged
}

/// Sums `dist(u, v)` once per undirected edge.
pub fn total_weight(points: &[Point], edges: &[(usize, usize)]) -> f64 {
  edges.iter().map(|&(u, v)| dist(points[u], points[v])).sum()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::algorithms::convex_hull::convex_hull;

  #[test]
  fn mst_spans_and_has_n_minus_1_edges() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(0.0, 1.0),
      Point::new(1.0, 1.0),
      Point::new(0.5, 0.5),
    ];
    let mst = euclidean_mst(&pts);
    assert_eq!(mst.len(), pts.len() - 1);
  }

  #[test]
  fn fix_tuc_removes_leaves() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(10.0, 0.0),
      Point::new(10.0, 10.0),
      Point::new(0.0, 10.0),
      Point::new(5.0, 5.0),
    ];
    let hull = convex_hull(&pts);
    let mut mst = euclidean_mst(&pts);
    fix_tuc(&pts, &mut mst, &hull);
    let mut degree = vec![0usize; pts.len()];
    for &(u, v) in &mst {
      degree[u] += 1;
      degree[v] += 1;
    }
    assert!(degree.iter().all(|&d| d >= 1));
  }
}
