//! Interpreter version handling for ABI-tagged wheel selection.

/// Major/minor version of the Python interpreter active in the isolated
/// environment. Drives ABI-tag wheel selection and the site-packages
/// library path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PyVersion {
    pub major: u32,
    pub minor: u32,
}

impl PyVersion {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a `major.minor[.patch]` version string.
    ///
    /// Extracts only the leading numeric portion of each component,
    /// so "3.11.0rc1" successfully parses as (3, 11).
    pub fn parse(version_str: &str) -> Option<Self> {
        let mut parts = version_str.trim().split('.');
        let parse_numeric = |part: &str| -> Option<u32> {
            let numeric_str: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            numeric_str.parse::<u32>().ok()
        };
        let major = parse_numeric(parts.next()?)?;
        let minor = parse_numeric(parts.next()?)?;
        Some(Self { major, minor })
    }

    /// CPython ABI tag, e.g. `cp311`.
    pub fn abi_tag(&self) -> String {
        format!("cp{}{}", self.major, self.minor)
    }

    /// Directory name under `<prefix>/lib` on Linux, e.g. `python3.11`.
    pub fn site_dir_name(&self) -> String {
        format!("python{}.{}", self.major, self.minor)
    }
}

impl std::fmt::Display for PyVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_major_minor() {
        assert_eq!(PyVersion::parse("3.11"), Some(PyVersion::new(3, 11)));
        assert_eq!(PyVersion::parse("3.10.14"), Some(PyVersion::new(3, 10)));
    }

    #[test]
    fn test_parse_tolerates_suffixes() {
        assert_eq!(PyVersion::parse("3.13.0rc2"), Some(PyVersion::new(3, 13)));
        assert_eq!(PyVersion::parse(" 3.12\n"), Some(PyVersion::new(3, 12)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(PyVersion::parse(""), None);
        assert_eq!(PyVersion::parse("three.eleven"), None);
        assert_eq!(PyVersion::parse("3"), None);
    }

    #[test]
    fn test_tags() {
        let py = PyVersion::new(3, 11);
        assert_eq!(py.abi_tag(), "cp311");
        assert_eq!(py.site_dir_name(), "python3.11");
        assert_eq!(py.to_string(), "3.11");
    }
}
