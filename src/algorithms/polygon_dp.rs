//! Perimeter-cost polygon triangulation DP (C4) and the brute-force whole-set
//! driver (C5). Grounded in `MST_Polygonisation/include/PolygonalMWT.h`'s
//! `mTC`/`extractEdges`.

use crate::geometry::{dist, orientation, perimeter, Orientation, Point};

pub struct PolygonDpResult {
  pub cost: f64,
  /// Diagonal and boundary edges, as *local* indices into the polygon slice
  /// passed to [`triangulate`].
  pub edges: Vec<(usize, usize)>,
}

/// `O(n^3)` time, `O(n^2)` memory. Returns cost 0 with no diagonals for
/// `n < 3`.
pub fn triangulate(poly: &[Point]) -> PolygonDpResult {
  let n = poly.len();
  if n < 3 {
    return PolygonDpResult {
      cost: 0.0,
      edges: boundary_edges(n),
    };
  }
  let mut table = vec![vec![0.0f64; n]; n];
  let mut split = vec![vec![usize::MAX; n]; n];

  for gap in 2..n {
    for i in 0..n - gap {
      let j = i + gap;
      let mut best = f64::INFINITY;
      let mut best_k = usize::MAX;
      for k in i + 1..j {
        let tri_cost = if orientation(poly[i], poly[k], poly[j]) == Orientation::CoLinear {
          0.0
        } else {
          perimeter(poly[i], poly[k], poly[j])
        };
        let cand = table[i][k] + table[k][j] + tri_cost;
        if cand < best {
          best = cand;
          best_k = k;
        }
      }
      table[i][j] = best;
      split[i][j] = best_k;
    }
  }

  let mut diagonals = Vec::new();
  extract_edges(&split, 0, n - 1, &mut diagonals);
  let mut edges = boundary_edges(n);
  edges.extend(diagonals);

  PolygonDpResult {
    cost: table[0][n - 1],
    edges,
  }
}

fn boundary_edges(n: usize) -> Vec<(usize, usize)> {
  if n < 2 {
    return Vec::new();
  }
  let mut edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
  if n >= 3 {
    edges.push((n - 1, 0));
  }
  edges
}

fn extract_edges(split: &[Vec<usize>], i: usize, j: usize, out: &mut Vec<(usize, usize)>) {
  if j < i + 2 {
    return;
  }
  let k = split[i][j];
  if k == usize::MAX {
    return;
  }
  if k != i + 1 {
    out.push((i, k));
  }
  if k != j - 1 {
    out.push((k, j));
  }
  extract_edges(split, i, k, out);
  extract_edges(split, k, j, out);
}

/// Whole-point-set DP wrapper (C5). Only optimal when `points` is already in
/// convex position; otherwise it triangulates the polygon formed by the
/// points in their *given order*, not the minimum-weight triangulation of
/// the point set.
///
/// `table[0][n-1]` sums triangle *perimeters*, so every internal diagonal is
/// counted twice (once per adjacent triangle) while every boundary edge is
/// counted once. `(cost + boundary) / 2` recovers the actual triangulation
/// weight, each edge counted once — the same correction C7's per-face weight
/// law applies to recover a face's internal-diagonal weight alone.
pub fn brute_force(points: &[Point]) -> f64 {
  if points.len() < 3 {
    return 0.0;
  }
  let dp = triangulate(points);
  (dp.cost + boundary_perimeter(points)) / 2.0
}

fn boundary_perimeter(points: &[Point]) -> f64 {
  let n = points.len();
  (0..n).map(|i| dist(points[i], points[(i + 1) % n])).sum()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn degenerate_collinear() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
    assert_eq!(brute_force(&pts), 0.0);
  }

  #[test]
  fn square_weight() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let w = brute_force(&pts);
    assert!((w - (4.0 + 2.0f64.sqrt())).abs() < 1e-9);
  }

  #[test]
  fn pentagon_weight() {
    use std::f64::consts::PI;
    let pts: Vec<Point> = (0..5)
      .map(|k| {
        let theta = 2.0 * PI * (k as f64) / 5.0;
        Point::new(theta.cos(), theta.sin())
      })
      .collect();
    let s = 2.0 * (PI / 5.0).sin();
    let d = 2.0 * (2.0 * PI / 5.0).sin();
    let expected = 5.0 * s + 2.0 * d;
    let w = brute_force(&pts);
    assert!((w - expected).abs() < 1e-6);
  }
}
