use super::{ConfigSnafu, Result};

/// If the value begins with an '@', the remainder names a file and the
/// secret is read from it. Otherwise the value is the secret itself.
///
/// prefix is used to provide context in case of an error.
pub(crate) fn key_file_or_string(value: String, prefix: String) -> Result<String> {
    Ok(match value.strip_prefix('@') {
        Some(key_file) => std::fs::read_to_string(key_file)
            .map_err(|err| {
                ConfigSnafu {
                    message: format!("Failed to read key from {key_file}: {err}"),
                    prefix,
                }
                .build()
            })?
            .trim()
            .into(),
        None => value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    #[test]
    fn plain_value_passes_through() {
        let token = key_file_or_string("s3cret".into(), "service".into()).unwrap();
        assert_eq!(token, "s3cret");
    }

    #[test]
    fn missing_key_file_is_a_config_error() {
        let err = key_file_or_string("@/nonexistent/token".into(), "service".into()).unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }
}
