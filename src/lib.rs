// ============================================================================
// Demo Basics Library
// ============================================================================

pub mod core;
pub mod demo;
pub mod persist;
pub mod processor;
pub mod stats;

// Re-export main types for convenience
pub use core::{DemoError, Person, Result};
pub use persist::{read_from_file, save_to_file};
pub use processor::{Envelope, process_data};
pub use stats::{calculate_average, calculate_sum};
