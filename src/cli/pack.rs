//! Local packaging command.
//!
//! Runs the same variant-generation pipeline as the HTTP endpoint against
//! files on disk and writes the zip next to the caller.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use crate::config::AppConfig;
use crate::image::color::HexColor;
use crate::log;
use crate::package::{
    OutputSelection, PackageName, PackageRequest, Slot, SourceAsset, build_package,
};

use super::args::PackArgs;

/// Build a package from local files.
pub fn run(args: &PackArgs, config: &AppConfig) -> Result<()> {
    let slots: [(Slot, &Option<PathBuf>); 4] = [
        (Slot::Vertical, &args.vertical),
        (Slot::Horizontal, &args.horizontal),
        (Slot::Logomark, &args.logomark),
        (Slot::Wordmark, &args.wordmark),
    ];

    let mut assets = Vec::new();
    for (slot, path) in slots {
        let Some(path) = path else { continue };
        let data =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        assets.push(SourceAsset::new(slot, data)?);
    }
    if assets.is_empty() {
        return Err(anyhow!(
            "no input files; pass at least one of --vertical/--horizontal/--logomark/--wordmark"
        ));
    }

    let background = match &args.background {
        None => config.package.background,
        Some(raw) => HexColor::parse(raw)
            .ok_or_else(|| anyhow!("invalid background color `{raw}`"))?,
    };

    let request = PackageRequest {
        assets,
        name: PackageName::sanitize(&args.name),
        selection: OutputSelection::parse(&args.extensions),
        background,
    };

    let package = build_package(&request, &config.package).map_err(anyhow::Error::from)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&package.filename));
    fs::write(&output, &package.data)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log!("pack"; "{} ({} entries, {} bytes)", output.display(), package.entries, package.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MARK: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64"><circle cx="32" cy="32" r="30" fill="#112233"/></svg>"##;

    #[test]
    fn test_pack_writes_zip() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("mark.svg");
        fs::write(&input, MARK).unwrap();
        let output = dir.path().join("out.zip");

        let args = PackArgs {
            vertical: None,
            horizontal: None,
            logomark: Some(input),
            wordmark: None,
            name: "acme".to_string(),
            extensions: "svg,color".to_string(),
            background: None,
            output: Some(output.clone()),
        };
        run(&args, &AppConfig::default()).unwrap();

        let data = fs::read(&output).unwrap();
        assert_eq!(&data[..2], b"PK");
    }

    #[test]
    fn test_pack_without_inputs_fails() {
        let args = PackArgs {
            vertical: None,
            horizontal: None,
            logomark: None,
            wordmark: None,
            name: "acme".to_string(),
            extensions: "svg".to_string(),
            background: None,
            output: None,
        };
        assert!(run(&args, &AppConfig::default()).is_err());
    }

    #[test]
    fn test_pack_rejects_bad_background() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("mark.svg");
        fs::write(&input, MARK).unwrap();

        let args = PackArgs {
            vertical: None,
            horizontal: None,
            logomark: Some(input),
            wordmark: None,
            name: "acme".to_string(),
            extensions: "svg".to_string(),
            background: Some("chartreuse".to_string()),
            output: None,
        };
        assert!(run(&args, &AppConfig::default()).is_err());
    }
}
