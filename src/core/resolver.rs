use crate::domain::ports::EnvSource;

/// Looks up `key` in `source`, falling back to `default` when the key is
/// missing or holds an empty string.
///
/// No validation is done on the supplied value; whatever non-empty string the
/// source holds is returned as-is.
pub fn env_or_default<S: EnvSource + ?Sized>(source: &S, key: &str, default: &str) -> String {
    match source.get(key) {
        Some(value) if !value.is_empty() => {
            tracing::debug!("{} supplied by environment: {}", key, value);
            value
        }
        Some(_) => {
            tracing::debug!("{} is empty, using default {}", key, default);
            default.to_string()
        }
        None => {
            tracing::debug!("{} not set, using default {}", key, default);
            default.to_string()
        }
    }
}
