//! Vector variant emission.
//!
//! Every selected vector format receives the same (possibly recolored)
//! markup bytes under its own subfolder and extension. Only the SVG entry is
//! "real"; `ai`/`eps`/`afdesign` are byte-identical copies, kept as
//! documented passthrough behavior.

use super::{ArchiveEntry, ColorMode, OutputSelection, PackageName, Slot, VectorFormat, archive};

/// Emit one entry per selected vector format.
pub fn emit(
    markup: &str,
    slot: Slot,
    mode: ColorMode,
    selection: &OutputSelection,
    name: &PackageName,
) -> Vec<ArchiveEntry> {
    VectorFormat::ALL
        .iter()
        .copied()
        .filter(|format| selection.vector(*format))
        .map(|format| {
            ArchiveEntry::new(
                archive::vector_path(name, slot, mode, format),
                markup.as_bytes().to_vec(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_only_selected_formats() {
        let selection = OutputSelection::parse("svg,eps");
        let entries = emit(
            "<svg/>",
            Slot::Logomark,
            ColorMode::Color,
            &selection,
            &PackageName::sanitize("acme"),
        );
        let paths: Vec<_> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "Logomark/Color/Vector/SVG/acme-logomark-color.svg",
                "Logomark/Color/Vector/EPS/acme-logomark-color.eps",
            ]
        );
    }

    #[test]
    fn test_passthrough_copies_are_byte_identical() {
        let selection = OutputSelection::parse("svg,ai,afdesign");
        let entries = emit(
            "<svg fill=\"red\"/>",
            Slot::Wordmark,
            ColorMode::Black,
            &selection,
            &PackageName::sanitize("acme"),
        );
        assert_eq!(entries.len(), 3);
        assert!(entries.windows(2).all(|w| w[0].bytes == w[1].bytes));
    }

    #[test]
    fn test_empty_selection_emits_nothing() {
        let entries = emit(
            "<svg/>",
            Slot::Vertical,
            ColorMode::White,
            &OutputSelection::parse("png"),
            &PackageName::sanitize("acme"),
        );
        assert!(entries.is_empty());
    }
}
