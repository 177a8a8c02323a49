pub mod annealing;
pub mod candidates;
pub mod convex_hull;
pub mod delaunay;
pub mod dogt;
pub mod faces;
pub mod flip;
pub mod mst;
pub mod polygon_dp;
