//! Flip legality predicate (C9). Grounded in
//! `DT_CES_SA/src/FlipCriteria.cpp`'s `isFlipLegal`.

use crate::data::graph::{FlipResult, PlanarGraphState};
use crate::geometry::cross;

/// Is the diagonal `(u, v)` of its surrounding quadrilateral legal to flip?
///
/// Rejects when the edge is not interior (incidence size != 2), when the
/// quadrilateral is non-convex or the four vertices are borderline
/// co-circular/collinear (`c1 * c2 >= 0`, a deliberately conservative
/// inequality), or when the alternate diagonal already exists.
pub fn is_flip_legal(gs: &PlanarGraphState, u: usize, v: usize) -> FlipResult {
  let incident = gs.incident_triangles(u, v);
  if incident.len() != 2 {
    return FlipResult::illegal();
  }
  let opposite = |tri: (usize, usize, usize)| -> usize {
    let (x, y, z) = tri;
    if x != u && x != v {
      x
    } else if y != u && y != v {
      y
    } else {
      z
    }
  };
  let a = opposite(gs.triangle(incident[0]));
  let c = opposite(gs.triangle(incident[1]));

  let points = gs.points();
  let (pu, pv, pa, pc) = (points[u], points[v], points[a], points[c]);
  let c1 = cross(pa, pu, pc);
  let c2 = cross(pa, pv, pc);
  if c1 * c2 >= 0.0 {
    return FlipResult::illegal();
  }
  if gs.has_edge(a, c) {
    return FlipResult::illegal();
  }
  FlipResult {
    legal: true,
    a,
    b: u,
    c,
    d: v,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::Point;

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
  fn diagonal_of_convex_quad_is_legal() {
    let gs = square();
    let f = is_flip_legal(&gs, 0, 2);
    assert!(f.legal);
    assert_eq!((f.b, f.d), (0, 2));
  }

  #[test]
  fn hull_edge_is_illegal() {
    let gs = square();
    let f = is_flip_legal(&gs, 0, 1);
    assert!(!f.legal);
  }

  #[test]
  fn flip_then_reflip_restores_original_diagonal() {
    let mut gs = square();
    let f = is_flip_legal(&gs, 0, 2);
    assert!(f.legal);
    gs.flip_edge(f).unwrap();
    assert!(gs.has_edge(1, 3));
    let f2 = is_flip_legal(&gs, 1, 3);
    assert!(f2.legal);
    gs.flip_edge(f2).unwrap();
    assert!(gs.has_edge(0, 2));
    assert!(!gs.has_edge(1, 3));
  }
}
