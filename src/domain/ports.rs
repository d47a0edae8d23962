use crate::domain::model::Record;
use crate::utils::error::LookupError;

/// Looks up a [`Record`] by name.
///
/// Implementations are not required to return a record whose `name` matches
/// the requested one; callers check that themselves.
pub trait RecordSource: Send + Sync {
    fn fetch(&self, name: &str) -> Result<Record, LookupError>;
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn fetch(&self, name: &str) -> Result<Record, LookupError> {
        (**self).fetch(name)
    }
}

impl<T: RecordSource + ?Sized> RecordSource for Box<T> {
    fn fetch(&self, name: &str) -> Result<Record, LookupError> {
        (**self).fetch(name)
    }
}
