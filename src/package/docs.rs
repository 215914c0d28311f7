//! Static reference documents.
//!
//! The `formats`, `structure`, and `motion` tokens each select one embedded
//! guide, emitted at most once per request under `Guidelines/`.

use crate::embed;

use super::{ArchiveEntry, Extra, OutputSelection, archive};

/// Emit the selected reference documents.
pub fn emit(selection: &OutputSelection) -> Vec<ArchiveEntry> {
    let mut entries = Vec::new();
    for (extra, filename, content) in [
        (Extra::Formats, "Formats.md", embed::docs::FORMATS_MD),
        (Extra::Structure, "Structure.md", embed::docs::STRUCTURE_MD),
        (Extra::Motion, "Motion.md", embed::docs::MOTION_MD),
    ] {
        if selection.extra(extra) {
            entries.push(ArchiveEntry::new(
                archive::doc_path(filename),
                content.as_bytes().to_vec(),
            ));
        }
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_selected_docs_once() {
        let entries = emit(&OutputSelection::parse("formats,structure"));
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, ["Guidelines/Formats.md", "Guidelines/Structure.md"]);
    }

    #[test]
    fn test_no_doc_tokens_no_entries() {
        assert!(emit(&OutputSelection::parse("svg,png")).is_empty());
    }
}
