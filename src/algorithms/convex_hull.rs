//! Monotone-chain convex hull (C2). Grounded in
//! `algorithms/convex_hull/graham_scan.rs`'s scan-with-orientation-checks
//! shape, adapted from a point-sorting scan to an index-sorting one since
//! every downstream consumer here wants hull vertex *indices* into a shared
//! point array, not a freestanding polygon.

use crate::geometry::{orientation, Orientation, Point};

/// Returns hull vertex indices into `points`, in CCW order, without the
/// closing repetition.
pub fn convex_hull(points: &[Point]) -> Vec<usize> {
  let n = points.len();
  if n < 3 {
    return (0..n).collect();
  }
  let mut idx: Vec<usize> = (0..n).collect();
  idx.sort_by(|&a, &b| {
    points[a]
      .x
      .partial_cmp(&points[b].x)
      .unwrap()
      .then(points[a].y.partial_cmp(&points[b].y).unwrap())
  });

  let build_half = |order: &[usize]| -> Vec<usize> {
    let mut hull: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order {
      while hull.len() >= 2 {
        let a = points[hull[hull.len() - 2]];
        let b = points[hull[hull.len() - 1]];
        if orientation(a, b, points[i]) != Orientation::CounterClockWise {
          hull.pop();
        } else {
          break;
        }
      }
      hull.push(i);
    }
    hull
  };

  let lower = build_half(&idx);
  let rev: Vec<usize> = idx.into_iter().rev().collect();
  let upper = build_half(&rev);

  let mut hull = lower;
  hull.pop();
  let mut upper = upper;
  upper.pop();
  hull.extend(upper);
  hull
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn square_hull() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
  }

  #[test]
  fn interior_point_excluded() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(4.0, 0.0),
      Point::new(2.0, 4.0),
      Point::new(2.0, 1.0),
    ];
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 3);
    assert!(!hull.contains(&3));
  }

  #[test]
  fn hull_idempotence() {
    let pts = vec![
      Point::new(0.0, 0.0),
      Point::new(1.0, 0.0),
      Point::new(1.0, 1.0),
      Point::new(0.0, 1.0),
    ];
    let hull = convex_hull(&pts);
    let hull_pts: Vec<Point> = hull.iter().map(|&i| pts[i]).collect();
    let hull2 = convex_hull(&hull_pts);
    assert_eq!(hull2.len(), hull_pts.len());
  }
}
