pub mod adapters;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::directory::InMemoryDirectory;
pub use core::{greeter::greet, Record, RecordSource};
pub use utils::error::{GreetError, LookupError, Result};
