//! JSON file persistence.
//!
//! Two policies, one per direction: writes are strict (failures are reported
//! and returned to the caller), reads are lenient (a missing file or
//! malformed content becomes `Ok(None)` rather than an error).

mod file;

pub use file::{read_from_file, save_to_file};
