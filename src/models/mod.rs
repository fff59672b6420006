pub mod problem;
pub mod solution;

pub use problem::ProblemId;
pub use solution::Solution;
