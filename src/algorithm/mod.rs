/// Candidate legality scan and adjacency filtering
pub mod candidates;
/// Row-major greedy layout driver
pub mod engine;
