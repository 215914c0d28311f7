//! Embedded static resources.
//!
//! - `serve/upload.html` - the upload page served at `/`
//! - `docs/*` - reference documents included in generated packages

/// Upload page served at the site root.
pub const UPLOAD_HTML: &str = include_str!("serve/upload.html");

/// Reference documents selectable through the `formats`, `structure`, and
/// `motion` tokens.
pub mod docs {
    pub const FORMATS_MD: &str = include_str!("docs/formats.md");
    pub const STRUCTURE_MD: &str = include_str!("docs/structure.md");
    pub const MOTION_MD: &str = include_str!("docs/motion.md");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_page_posts_to_endpoint() {
        assert!(UPLOAD_HTML.contains("/api/generate-logo-package"));
        assert!(UPLOAD_HTML.contains("multipart/form-data"));
    }

    #[test]
    fn test_docs_are_nonempty() {
        for doc in [docs::FORMATS_MD, docs::STRUCTURE_MD, docs::MOTION_MD] {
            assert!(!doc.trim().is_empty());
        }
    }
}
