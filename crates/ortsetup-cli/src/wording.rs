//! User-facing message table.
//!
//! A plain key→string lookup so every user-visible phrase lives in one
//! place; callers treat it as opaque.

/// Look up a message by key.
pub fn get(key: &str) -> Option<&'static str> {
    match key {
        "help.onnxruntime" => Some("choose the onnxruntime variant to install"),
        "help.skip_conda" => Some("skip the active conda environment check"),
        "help.requirements" => Some("path to the dependency manifest"),
        "conda_not_activated" => Some("conda is not activated"),
        _ => None,
    }
}

/// Look up a message by key, panicking on unknown keys.
///
/// Reserved for keys that are statically known to exist (help text).
pub fn get_or_panic(key: &str) -> &'static str {
    get(key).unwrap_or_else(|| panic!("missing wording key: {key}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        for key in [
            "help.onnxruntime",
            "help.skip_conda",
            "help.requirements",
            "conda_not_activated",
        ] {
            assert!(get(key).is_some(), "missing wording for {key}");
        }
    }

    #[test]
    fn test_unknown_key_is_none() {
        assert!(get("help.nonexistent").is_none());
    }
}
