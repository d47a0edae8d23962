pub mod greeter;

pub use crate::domain::model::Record;
pub use crate::domain::ports::RecordSource;
pub use crate::utils::error::Result;
