pub mod graph;

pub use graph::{CandidatePolicy, Edge, EdgeKey, FlipResult, PlanarGraphState, Triangle, TriIdx};
