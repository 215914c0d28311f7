//! Package name sanitization.

use std::fmt;

/// A user-supplied package name reduced to the `[a-zA-Z0-9.-]` character
/// class; everything else becomes `_`. Used both as the download filename
/// and as the prefix of every archived file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName(String);

impl PackageName {
    /// Fallback when the raw name is empty.
    const DEFAULT: &'static str = "logo";

    pub fn sanitize(raw: &str) -> Self {
        if raw.is_empty() {
            return Self(Self::DEFAULT.to_string());
        }
        let safe: String = raw
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Self(safe)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Download filename for the assembled archive.
    pub fn zip_filename(&self) -> String {
        format!("{}-logo-package.zip", self.0)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_outside_class() {
        assert_eq!(PackageName::sanitize("My Co!").as_str(), "My_Co_");
        assert_eq!(PackageName::sanitize("acme-2.0").as_str(), "acme-2.0");
        assert_eq!(PackageName::sanitize("a/b\\c").as_str(), "a_b_c");
    }

    #[test]
    fn test_sanitize_empty_falls_back() {
        assert_eq!(PackageName::sanitize("").as_str(), "logo");
    }

    #[test]
    fn test_zip_filename() {
        assert_eq!(
            PackageName::sanitize("My Co!").zip_filename(),
            "My_Co_-logo-package.zip"
        );
    }
}
