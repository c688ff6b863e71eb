//! Platform detection utilities.

/// Operating system detection result.
///
/// Anything that is neither Linux nor Windows is `Other`: no accelerated
/// backend is offered there and the catalog degrades to its default entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Platform {
    Linux,
    Windows,
    Other,
}

impl Platform {
    /// Lowercase name used in log and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }

    /// Separator used by the OS search-path variable.
    pub const fn path_separator(self) -> char {
        match self {
            Self::Windows => ';',
            Self::Linux | Self::Other => ':',
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Detect the current operating system.
pub fn detect_platform() -> Platform {
    if cfg!(target_os = "windows") {
        Platform::Windows
    } else if cfg!(target_os = "linux") {
        Platform::Linux
    } else {
        Platform::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_platform_returns_valid() {
        let platform = detect_platform();
        matches!(platform, Platform::Linux | Platform::Windows | Platform::Other);
    }

    #[test]
    fn test_path_separator_per_platform() {
        assert_eq!(Platform::Linux.path_separator(), ':');
        assert_eq!(Platform::Windows.path_separator(), ';');
        assert_eq!(Platform::Other.path_separator(), ':');
    }
}
