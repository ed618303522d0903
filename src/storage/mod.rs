//! Storage layer for groupsplit
//!
//! groupsplit keeps no database of its own: it reads one group snapshot per
//! invocation and may write exported reports back to disk.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json_required, read_yaml_required, write_atomic, write_json_atomic};
pub use snapshot::{load_snapshot, SnapshotFormat};
