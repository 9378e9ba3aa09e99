pub mod output;
pub mod walker;

pub use output::{create_writer, JsonWriter, OutputFormat, OutputWriter, RunSummary, TerminalWriter};
pub use walker::{find_source_files, SourceSetResolver};
