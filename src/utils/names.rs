use crate::error::ExportError;

/// Returns the short suffix of a fully-qualified identifier: the fragment
/// after the last `#`, or failing that the last path segment after the
/// final `/`.
pub fn local_name(uri: &str) -> Result<&str, ExportError> {
    if let Some((_, fragment)) = uri.rsplit_once('#') {
        return Ok(fragment);
    }
    if let Some((_, segment)) = uri.rsplit_once('/') {
        return Ok(segment);
    }
    Err(ExportError::MalformedIdentifier {
        uri: uri.to_string(),
    })
}

/// Human-facing form of an identifier: local name with underscores
/// replaced by spaces. Not used for age ratings, which keep the raw
/// local name.
pub fn pretty_name(uri: &str) -> Result<String, ExportError> {
    Ok(local_name(uri)?.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_fragment() {
        let uri = "http://example.org/cinema#Film_Horor_A";
        assert_eq!(local_name(uri).unwrap(), "Film_Horor_A");
    }

    #[test]
    fn test_local_name_path_segment() {
        let uri = "http://example.org/cinema/Film_Horor_A";
        assert_eq!(local_name(uri).unwrap(), "Film_Horor_A");
    }

    #[test]
    fn test_local_name_prefers_fragment_over_path() {
        let uri = "http://example.org/onto/2025#Drama";
        assert_eq!(local_name(uri).unwrap(), "Drama");
    }

    #[test]
    fn test_local_name_rejects_bare_identifier() {
        let err = local_name("Film_Horor_A").unwrap_err();
        assert!(matches!(err, ExportError::MalformedIdentifier { .. }));
    }

    #[test]
    fn test_pretty_name_replaces_underscores() {
        let uri = "http://example.org/cinema#Film_Horor_A";
        assert_eq!(pretty_name(uri).unwrap(), "Film Horor A");
    }

    #[test]
    fn test_pretty_name_without_underscores() {
        let uri = "http://example.org/cinema#Drama";
        assert_eq!(pretty_name(uri).unwrap(), "Drama");
    }
}
