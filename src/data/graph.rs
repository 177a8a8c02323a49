//! Planar graph state (C3): the mutable substrate shared by MST-Polygonisation
//! and DT-CES-SA. Grounded in the teacher's half-edge arena
//! (`data::planar_graph`) for its index-based, swap-and-pop dense storage
//! discipline, and in `DT_CES_SA/src/GraphState.cpp` for the concrete
//! edge/triangle/adjacency/incidence shape and flip semantics.

use crate::error::{Error, Result};
use crate::geometry::{dist, Point};
use std::collections::{HashMap, HashSet};

/// Index of a triangle in [`PlanarGraphState::triangles`].
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub struct TriIdx(pub usize);
impl std::fmt::Debug for TriIdx {
  fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(fmt, "t{}", self.0)
  }
}

/// Canonical `(min, max)` key for an unordered vertex pair.
#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, PartialOrd, Ord)]
pub struct EdgeKey(pub usize, pub usize);

impl EdgeKey {
  pub fn new(u: usize, v: usize) -> EdgeKey {
    if u < v {
      EdgeKey(u, v)
    } else {
      EdgeKey(v, u)
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
  pub u: usize,
  pub v: usize,
  pub weight: f64,
}

impl Edge {
  pub fn key(&self) -> EdgeKey {
    EdgeKey::new(self.u, self.v)
  }
}

/// Ordered triple of vertex indices. Orientation is not an invariant except
/// where C9 relies on it locally.
pub type Triangle = (usize, usize, usize);

/// Outcome of [`crate::algorithms::flip::is_flip_legal`]: the diagonal
/// `(b, d)` may be replaced by `(a, c)`.
#[derive(Debug, Clone, Copy)]
pub struct FlipResult {
  pub legal: bool,
  pub a: usize,
  pub b: usize,
  pub c: usize,
  pub d: usize,
}

impl FlipResult {
  pub fn illegal() -> FlipResult {
    FlipResult {
      legal: false,
      a: 0,
      b: 0,
      c: 0,
      d: 0,
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct CandidatePolicy {
  pub per_vertex: usize,
  pub global_fraction: f64,
}

impl CandidatePolicy {
  pub fn clamped(per_vertex: usize, global_fraction: f64) -> CandidatePolicy {
    CandidatePolicy {
      per_vertex: per_vertex.min(5),
      global_fraction: global_fraction.clamp(0.0, 1.0),
    }
  }
}

impl Default for CandidatePolicy {
  fn default() -> CandidatePolicy {
    CandidatePolicy {
      per_vertex: 3,
      global_fraction: 0.2,
    }
  }
}

/// Points + edges + triangles + adjacency + edge-to-triangle incidence, kept
/// mutually consistent across [`PlanarGraphState::flip_edge`] calls.
pub struct PlanarGraphState {
  points: Vec<Point>,
  edges: Vec<Edge>,
  edge_pos: HashMap<EdgeKey, usize>,
  triangles: Vec<Triangle>,
  adjacency: HashMap<usize, HashSet<usize>>,
  incidence: HashMap<EdgeKey, Vec<TriIdx>>,
}

impl PlanarGraphState {
  /// Builds all indices in one pass from an initial `{edges, triangles}`
  /// pair. `O(|edges| + |triangles|)`.
  pub fn construct(points: Vec<Point>, edges: Vec<(usize, usize)>, triangles: Vec<Triangle>) -> PlanarGraphState {
    let mut gs = PlanarGraphState {
      points,
      edges: Vec::with_capacity(edges.len()),
      edge_pos: HashMap::with_capacity(edges.len()),
      triangles: Vec::with_capacity(triangles.len()),
      adjacency: HashMap::new(),
      incidence: HashMap::new(),
    };
    for (u, v) in edges {
      gs.insert_edge_raw(u, v);
    }
    for t in triangles {
      gs.triangles.push(t);
      let ti = TriIdx(gs.triangles.len() - 1);
      for key in Self::tri_edge_keys(t) {
        gs.incidence.entry(key).or_default().push(ti);
      }
    }
    gs
  }

  fn tri_edge_keys(t: Triangle) -> [EdgeKey; 3] {
    [
      EdgeKey::new(t.0, t.1),
      EdgeKey::new(t.1, t.2),
      EdgeKey::new(t.2, t.0),
    ]
  }

  fn insert_edge_raw(&mut self, u: usize, v: usize) {
    let key = EdgeKey::new(u, v);
    if self.edge_pos.contains_key(&key) {
      return;
    }
    let weight = dist(self.points[u], self.points[v]);
    self.edges.push(Edge { u, v, weight });
    self.edge_pos.insert(key, self.edges.len() - 1);
    self.adjacency.entry(u).or_default().insert(v);
    self.adjacency.entry(v).or_default().insert(u);
  }

  /// Swap-and-pop removal, repairing the position map for the edge that
  /// moved into the vacated slot.
  fn remove_edge_raw(&mut self, key: EdgeKey) {
    if let Some(pos) = self.edge_pos.remove(&key) {
      let last = self.edges.len() - 1;
      self.edges.swap(pos, last);
      self.edges.pop();
      if pos != last {
        let moved_key = self.edges[pos].key();
        self.edge_pos.insert(moved_key, pos);
      }
      let e = Edge { u: key.0, v: key.1, weight: 0.0 };
      if let Some(s) = self.adjacency.get_mut(&e.u) {
        s.remove(&e.v);
      }
      if let Some(s) = self.adjacency.get_mut(&e.v) {
        s.remove(&e.u);
      }
    }
    self.incidence.remove(&key);
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn edges(&self) -> &[Edge] {
    &self.edges
  }

  pub fn triangles(&self) -> &[Triangle] {
    &self.triangles
  }

  pub fn triangle(&self, t: TriIdx) -> Triangle {
    self.triangles[t.0]
  }

  pub fn adjacency(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
    self.adjacency.get(&v).into_iter().flatten().copied()
  }

  pub fn has_edge(&self, u: usize, v: usize) -> bool {
    self.edge_pos.contains_key(&EdgeKey::new(u, v))
  }

  pub fn get_edge(&self, u: usize, v: usize) -> Option<&Edge> {
    self
      .edge_pos
      .get(&EdgeKey::new(u, v))
      .map(|&pos| &self.edges[pos])
  }

  pub fn incident_triangles(&self, u: usize, v: usize) -> &[TriIdx] {
    self
      .incidence
      .get(&EdgeKey::new(u, v))
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  pub fn total_weight(&self) -> f64 {
    self.edges.iter().map(|e| e.weight).sum()
  }

  /// Replaces diagonal `(b, d)` of quadrilateral `(a, b, c, d)` with `(a, c)`.
  ///
  /// Mirrors `GraphState::FlipEdge` exactly: the two incident triangles are
  /// relabelled in place, the vanishing diagonal is removed via swap-and-pop,
  /// the new diagonal is inserted, and only the six edge-triangle incidence
  /// entries touching the two rewritten triangles are rebuilt.
  pub fn flip_edge(&mut self, f: FlipResult) -> Result<()> {
    if !f.legal {
      return Err(Error::InvariantViolation("flip_edge called on illegal flip".into()));
    }
    let bd = EdgeKey::new(f.b, f.d);
    let incident = self.incidence.get(&bd).cloned().unwrap_or_default();
    if incident.len() != 2 {
      return Err(Error::InvariantViolation(format!(
        "diagonal ({}, {}) has {} incident triangles, expected 2",
        f.b,
        f.d,
        incident.len()
      )));
    }
    let (t0, t1) = (incident[0], incident[1]);
    self.triangles[t0.0] = (f.a, f.b, f.c);
    self.triangles[t1.0] = (f.a, f.c, f.d);

    self.remove_edge_raw(bd);
    self.insert_edge_raw(f.a, f.c);

    for &ti in &[t0, t1] {
      let tri = self.triangles[ti.0];
      for key in Self::tri_edge_keys(tri) {
        let list = self.incidence.entry(key).or_default();
        if !list.contains(&ti) {
          list.push(ti);
        }
      }
    }
    // the two stale (b,*) / (d,*) incidences that no longer touch t0/t1
    // are pruned by rebuilding from the two triangles' current edges only;
    // any entry still pointing at t0/t1 for an edge that triangle no longer
    // has must be removed explicitly. Snapshot both triangles' edge keys
    // first: `self.triangles` can't be read inside the closure while
    // `self.incidence` is borrowed mutably.
    let k0 = Self::tri_edge_keys(self.triangles[t0.0]);
    let k1 = Self::tri_edge_keys(self.triangles[t1.0]);
    for key in [
      EdgeKey::new(f.b, f.a),
      EdgeKey::new(f.b, f.c),
      EdgeKey::new(f.d, f.a),
      EdgeKey::new(f.d, f.c),
      EdgeKey::new(f.a, f.c),
    ] {
      if let Some(list) = self.incidence.get_mut(&key) {
        list.retain(|&ti| (ti != t0 || k0.contains(&key)) && (ti != t1 || k1.contains(&key)));
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn square() -> PlanarGraphState {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(2.0, 0.0),
      Point::new(2.0, 2.0),
      Point::new(0.0, 2.0),
    ];
    let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
    let triangles = vec![(0, 1, 2), (0, 2, 3)];
    PlanarGraphState::construct(pts, edges, triangles)
  }

  #[test]
  fn construct_invariants() {
    let gs = square();
    assert_eq!(gs.edges().len(), 5);
    assert_eq!(gs.triangles().len(), 2);
    assert!(gs.has_edge(0, 2));
    assert_eq!(gs.incident_triangles(0, 2).len(), 2);
    assert_eq!(gs.incident_triangles(0, 1).len(), 1);
  }

  #[test]
  fn flip_replaces_diagonal() {
    let mut gs = square();
    let f = FlipResult {
      legal: true,
      a: 1,
      b: 0,
      c: 3,
      d: 2,
    };
    gs.flip_edge(f).unwrap();
    assert!(!gs.has_edge(0, 2));
    assert!(gs.has_edge(1, 3));
    assert_eq!(gs.edges().len(), 5);
    assert_eq!(gs.triangles().len(), 2);
  }
}
