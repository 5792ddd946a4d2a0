pub mod output;
pub mod walker;

pub use output::{create_writer, FileReport, OutputFormat, OutputWriter};
pub use walker::FileWalker;
