//! File-system helpers shared by the Rail Pehchaan crates

mod io;
mod paths;

pub use io::{atomic_write, read_json, write_json_pretty, FileError};
pub use paths::Paths;
