pub mod solve_flow;

pub use solve_flow::{SolveFlow, SolveReport};
