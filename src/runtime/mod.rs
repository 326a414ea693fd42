//! Runtime execution for TinyLang programs

mod environment;
mod evaluator;
pub mod output;
mod value;

pub use environment::Environment;
pub use evaluator::{apply_binary_op, Evaluator};
pub use output::{OutputSink, StdoutSink, WriterSink};
pub use value::Value;
