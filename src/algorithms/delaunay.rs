//! Delaunay adapter (C8). Wraps the `delaunator` crate — the Delaunay
//! dependency this pack's closest sibling example
//! (`randogoth-xenobalanus`) already reaches for — and reshapes its flat
//! triangle-index stream into the deduplicated, weighted `{edges,
//! triangles}` pair `PlanarGraphState::construct` expects, mirroring
//! `DT_CES_SA/src/DelaunayWrapper.cpp`.

use crate::data::graph::{EdgeKey, PlanarGraphState, Triangle};
use crate::error::{Error, Result};
use crate::geometry::{dist, Point};
use delaunator::{triangulate, Point as DPoint};
use std::collections::HashSet;

pub struct DelaunayResult {
  pub edges: Vec<(usize, usize)>,
  pub triangles: Vec<Triangle>,
}

pub fn delaunay(points: &[Point]) -> Result<DelaunayResult> {
  if points.len() < 3 {
    return Err(Error::InsufficientPoints);
  }
  let flat: Vec<DPoint> = points.iter().map(|p| DPoint { x: p.x, y: p.y }).collect();
  let triangulation = triangulate(&flat);

  let mut triangles = Vec::with_capacity(triangulation.triangles.len() / 3);
  let mut seen_edges: HashSet<EdgeKey> = HashSet::new();
  let mut edges = Vec::new();

  for tri in triangulation.triangles.chunks_exact(3) {
    let (a, b, c) = (tri[0], tri[1], tri[2]);
    triangles.push((a, b, c));
    for &(u, v) in &[(a, b), (b, c), (c, a)] {
      let key = EdgeKey::new(u, v);
      if seen_edges.insert(key) {
        edges.push((u, v));
      }
    }
  }

  Ok(DelaunayResult { edges, triangles })
}

/// Builds a [`PlanarGraphState`] directly from a Delaunay triangulation of
/// `points`.
pub fn delaunay_graph(points: &[Point]) -> Result<PlanarGraphState> {
  let dt = delaunay(points)?;
  Ok(PlanarGraphState::construct(points.to_vec(), dt.edges, dt.triangles))
}

/// Euclidean weight of a deduplicated edge, used by callers who only have
/// the raw index pair.
pub fn edge_weight(points: &[Point], u: usize, v: usize) -> f64 {
  dist(points[u], points[v])
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn square_triangulates_into_two_triangles() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let dt = delaunay(&pts).unwrap();
    assert_eq!(dt.triangles.len(), 2);
    assert_eq!(dt.edges.len(), 5);
  }

  #[test]
  fn too_few_points_is_an_error() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    assert!(delaunay(&pts).is_err());
  }
}
