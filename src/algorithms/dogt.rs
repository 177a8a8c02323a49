//! Distance-Ordered Greedy Triangulation (C6). Grounded in
//! `distanceOrderedGreedy/src/triangulate.cpp`: fan the hull, then insert
//! interior points in ascending order of distance to the hull centroid,
//! splitting whichever current triangle contains each point.

use crate::algorithms::convex_hull::convex_hull;
use crate::geometry::{dist, dist_sq, point_in_triangle, polygon_centroid, Point};
use std::collections::HashSet;

/// Returns the sum of Euclidean lengths of the (deduplicated) edge set this
/// heuristic produces.
pub fn dogt(points: &[Point]) -> f64 {
  let n = points.len();
  if n < 3 {
    return 0.0;
  }
  let hull = convex_hull(points);
  if hull.len() < 3 {
    // collinear input: no well-formed hull polygon to fan from.
    return 0.0;
  }
  let hull_set: HashSet<usize> = hull.iter().copied().collect();

  let mut edges: HashSet<(usize, usize)> = HashSet::new();
  let mut add_edge = |edges: &mut HashSet<(usize, usize)>, a: usize, b: usize| {
    edges.insert(if a < b { (a, b) } else { (b, a) });
  };

  if hull.len() == n {
    for i in 1..n - 1 {
      add_edge(&mut edges, hull[0], hull[i]);
      add_edge(&mut edges, hull[i], hull[i + 1]);
    }
    add_edge(&mut edges, hull[0], hull[n - 1]);
    return sum_lengths(points, &edges);
  }

  let interior: Vec<usize> = (0..n).filter(|i| !hull_set.contains(i)).collect();
  let hull_pts: Vec<Point> = hull.iter().map(|&i| points[i]).collect();
  let centroid = polygon_centroid(&hull_pts);

  let mut interior = interior;
  interior.sort_by(|&a, &b| {
    dist_sq(points[a], centroid)
      .partial_cmp(&dist_sq(points[b], centroid))
      .unwrap()
  });

  let seed = interior[0];
  let h = hull.len();
  let mut triangles: Vec<(usize, usize, usize)> = Vec::with_capacity(h);
  for i in 0..h {
    let a = hull[i];
    let b = hull[(i + 1) % h];
    triangles.push((seed, a, b));
    add_edge(&mut edges, seed, a);
    add_edge(&mut edges, a, b);
  }

  for &q in &interior[1..] {
    let pq = points[q];
    let found = triangles
      .iter()
      .position(|&(a, b, c)| point_in_triangle(pq, points[a], points[b], points[c]));
    let Some(pos) = found else { continue };
    let (a, b, c) = triangles.remove(pos);
    triangles.push((q, a, b));
    triangles.push((q, b, c));
    triangles.push((q, c, a));
    add_edge(&mut edges, q, a);
    add_edge(&mut edges, q, b);
    add_edge(&mut edges, q, c);
  }

  sum_lengths(points, &edges)
}

fn sum_lengths(points: &[Point], edges: &HashSet<(usize, usize)>) -> f64 {
  edges.iter().map(|&(u, v)| dist(points[u], points[v])).sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn square_fan() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let w = dogt(&pts);
    assert!((w - (4.0 + 2.0f64.sqrt())).abs() < 1e-9);
  }

  #[test]
  fn one_interior_point() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(2.0, 4.0),
      Point::new(2.0, 1.0),
    ];
    let w = dogt(&pts);
    let hull_perim = dist(pts[0], pts[1]) + dist(pts[1], pts[2]) + dist(pts[2], pts[0]);
    let spokes = dist(pts[3], pts[0]) + dist(pts[3], pts[1]) + dist(pts[3], pts[2]);
    assert!((w - (hull_perim + spokes)).abs() < 1e-6);
  }

  #[test]
  fn collinear_degenerate() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
    assert_eq!(dogt(&pts), 0.0);
  }
}
