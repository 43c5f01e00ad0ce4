pub mod error;
pub mod processor;
pub mod reader;
pub mod stats;

pub use error::{IngestError, Result};
pub use processor::{ResolvedSegments, apply_overrides, fold_rows, process_source, resolve_segments};
pub use reader::{SourceRow, read_rows_from, read_source_rows};
pub use stats::{OverrideStats, SourceStats, SourceStatus};
