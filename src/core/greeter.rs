use crate::core::RecordSource;
use crate::utils::error::{GreetError, Result};

const ADULT_AGE: i64 = 18;
const YOUNG_GREETING: &str = "Greetings young one";

/// Fetches the record for `name` from `source` and derives a greeting.
///
/// Lookup failures are returned unchanged. A record that comes back under a
/// different name is rejected with [`GreetError::Mismatch`].
pub fn greet<S: RecordSource + ?Sized>(name: &str, source: &S) -> Result<String> {
    tracing::debug!("Fetching record for: {}", name);
    let record = source.fetch(name).map_err(|e| {
        tracing::warn!("Record lookup for {} failed: {}", name, e);
        GreetError::from(e)
    })?;

    if record.name != name {
        tracing::warn!(
            "Record mismatch: requested {}, received {}",
            name,
            record.name
        );
        return Err(GreetError::Mismatch {
            expected: name.to_string(),
            actual: record.name,
        });
    }

    let greeting = if record.age < ADULT_AGE {
        YOUNG_GREETING.to_string()
    } else {
        format!("Greetings {}", name)
    };

    tracing::debug!("Greeting for {}: {}", name, greeting);
    Ok(greeting)
}
