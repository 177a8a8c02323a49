//! Planar face enumeration (C7, face-extraction half). Grounded in
//! `MST_Polygonisation/include/FaceFinder.h`: sort each vertex's neighbours
//! by polar angle (half-plane bucket first, then cross-product turn, then
//! ascending squared distance as a collinear tie-break), walk directed edges
//! always taking the next CCW neighbour on arrival, classify each closed
//! walk by its signed area, and finally drop the single largest face (the
//! outer boundary).

use crate::geometry::{cross, dist, dist_sq, Point};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// `true` for the "lower" half-plane: `y < 0`, or `y == 0 && x < 0`.
fn half(p: Point) -> bool {
  p.y < 0.0 || (p.y == 0.0 && p.x < 0.0)
}

fn build_adjacency(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
  let mut adj = vec![Vec::new(); n];
  for &(u, v) in edges {
    adj[u].push(v);
    adj[v].push(u);
  }
  adj
}

fn sort_neighbours(points: &[Point], i: usize, neighbours: &mut [usize]) {
  let origin = points[i];
  neighbours.sort_by(|&l, &r| {
    let pl = Point::new(points[l].x - origin.x, points[l].y - origin.y);
    let pr = Point::new(points[r].x - origin.x, points[r].y - origin.y);
    let (hl, hr) = (half(pl), half(pr));
    if hl != hr {
      return hl.cmp(&hr);
    }
    let c = cross(Point::new(0.0, 0.0), pl, pr);
    if c > 0.0 {
      Ordering::Less
    } else if c < 0.0 {
      Ordering::Greater
    } else {
      dist_sq(points[i], points[l])
        .partial_cmp(&dist_sq(points[i], points[r]))
        .unwrap()
    }
  });
}

/// Enumerates the bounded faces of the planar graph `(points, edges)`,
/// dropping the outer (unbounded) face. Each face is a cycle of vertex
/// indices in traversal order.
pub fn find_faces(points: &[Point], edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
  let n = points.len();
  let mut adj = build_adjacency(n, edges);
  for i in 0..n {
    sort_neighbours(points, i, &mut adj[i]);
  }

  let mut used: HashSet<(usize, usize)> = HashSet::new();
  let mut faces: Vec<Vec<usize>> = Vec::new();

  for u in 0..n {
    for vi in 0..adj[u].len() {
      let v = adj[u][vi];
      if used.contains(&(u, v)) {
        continue;
      }
      let start = (u, v);
      let mut face = Vec::new();
      let (mut cu, mut cv) = start;
      loop {
        used.insert((cu, cv));
        face.push(cu);
        let pos = adj[cv].iter().position(|&w| w == cu).unwrap();
        let next = adj[cv][(pos + 1) % adj[cv].len()];
        cu = cv;
        cv = next;
        if (cu, cv) == start {
          break;
        }
      }
      face.reverse();
      let signed: f64 = (0..face.len())
        .map(|k| {
          let a = points[face[k]];
          let b = points[face[(k + 1) % face.len()]];
          a.x * b.y - b.x * a.y
        })
        .sum();
      if signed <= 0.0 {
        faces.insert(0, face);
      } else {
        faces.push(face);
      }
    }
  }

  if !faces.is_empty() {
    faces.sort_by(|a, b| b.len().cmp(&a.len()));
    faces.remove(0);
  }
  faces
}

/// Sums consecutive edge lengths around a face, wrapping from the last
/// vertex back to the first.
pub fn boundary_weight(points: &[Point], face: &[usize]) -> f64 {
  let n = face.len();
  (0..n)
    .map(|i| dist(points[face[i]], points[face[(i + 1) % n]]))
    .sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn square_has_no_interior_face() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0)];
    let faces = find_faces(&pts, &edges);
    // A pure boundary cycle has two faces of equal size (the interior
    // quadrilateral and the unbounded exterior); dropping the largest
    // leaves exactly one, the interior quad still awaiting triangulation.
    assert_eq!(faces.len(), 1);
    assert_eq!(faces[0].len(), 4);
  }

  #[test]
  fn square_with_diagonal_has_two_triangular_faces() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let edges = vec![(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
    let faces = find_faces(&pts, &edges);
    assert_eq!(faces.len(), 2);
    assert!(faces.iter().all(|f| f.len() == 3));
  }
}
