pub mod chunker;
pub mod pal_chain;
pub mod problem_cache;
pub mod program_runner;
pub mod transcriber;

pub use chunker::{Chunks, TextChunker};
pub use pal_chain::PalChain;
pub use problem_cache::ProblemCache;
pub use program_runner::{ProgramOutput, ProgramRunner, PythonRunner};
pub use transcriber::{InlineNode, Transcriber};
