pub mod environment;
pub mod error;
pub mod evaluator;
pub mod output;
pub mod parser;

pub use environment::Environment;
pub use error::RuntimeError;
pub use evaluator::{run, run_with_sink, Interpreter};
pub use output::{MemorySink, OutputSink, StdoutSink};
pub use parser::{SyntaxError, TokenParser};
