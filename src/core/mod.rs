pub mod error;
pub mod person;

pub use error::{DemoError, Result};
pub use person::Person;
