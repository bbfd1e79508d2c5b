//! Stream reading and buffering.
mod buffer;
mod reader;


pub use buffer::WorkBuffer;
pub use reader::{ReadOutcome, StreamReader};
