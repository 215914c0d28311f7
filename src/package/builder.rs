//! Package build orchestration.
//!
//! Fan-out: every (asset x mode) branch runs as an independent rayon task
//! producing only the archive entries it owns; fan-in joins all branches
//! before the archive is serialized. Any branch failure aborts the whole
//! request - a partial zip would silently omit expected assets. Favicon,
//! master, and document emission are separate passes, never nested in the
//! raster-size loop.

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::PackageConfig;
use crate::error::PackageError;
use crate::image::recolor;
use crate::image::svg;

use super::{
    ArchiveEntry, ColorMode, Extra, PackageRequest, Slot, SourceAsset, archive, docs, favicon,
    master, raster, vector,
};

/// A finished archive ready to hand to the transport layer.
#[derive(Debug)]
pub struct BuiltPackage {
    /// Download filename (sanitized name + `-logo-package.zip`).
    pub filename: String,
    /// Serialized zip bytes.
    pub data: Vec<u8>,
    /// Number of archive entries.
    pub entries: usize,
}

impl BuiltPackage {
    /// Number of bytes in the serialized archive.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Run the full variant-generation pipeline for one request.
pub fn build_package(
    request: &PackageRequest,
    config: &PackageConfig,
) -> Result<BuiltPackage, PackageError> {
    if request.assets.is_empty() {
        return Err(PackageError::input("no files uploaded"));
    }

    let modes = request.selection.modes_or(&config.modes);

    let mut entries: Vec<ArchiveEntry> = request
        .assets
        .par_iter()
        .map(|asset| {
            modes
                .par_iter()
                .map(|&mode| process_branch(asset, mode, request, config))
                .collect::<Result<Vec<_>>>()
                .map(|branches| branches.into_iter().flatten().collect::<Vec<_>>())
        })
        .collect::<Result<Vec<_>>>()
        .map_err(PackageError::Processing)?
        .into_iter()
        .flatten()
        .collect();

    if request.selection.extra(Extra::Master) {
        entries.extend(master::emit(request, &modes).map_err(PackageError::Processing)?);
    }
    entries.extend(docs::emit(&request.selection));

    let data = archive::write_zip(&entries).map_err(PackageError::Processing)?;
    Ok(BuiltPackage {
        filename: request.name.zip_filename(),
        data,
        entries: entries.len(),
    })
}

/// Produce every entry owned by one (asset, mode) branch.
fn process_branch(
    asset: &SourceAsset,
    mode: ColorMode,
    request: &PackageRequest,
    config: &PackageConfig,
) -> Result<Vec<ArchiveEntry>> {
    let markup = branch_markup(asset, mode, config)?;

    let mut entries = vector::emit(
        &markup,
        asset.slot,
        mode,
        &request.selection,
        &request.name,
    );

    let needs_raster = request.selection.any_raster();
    let needs_favicons =
        asset.slot == Slot::Logomark && request.selection.extra(Extra::Favicons);

    if needs_raster || needs_favicons {
        let tree = svg::parse(markup.as_bytes())
            .with_context(|| format!("{}/{} branch", asset.slot.token(), mode.token()))?;

        if needs_raster {
            entries.extend(raster::emit(&tree, asset.slot, mode, request, config)?);
        }
        if needs_favicons {
            entries.extend(favicon::emit(&tree, &markup, mode, request)?);
        }
    }

    Ok(entries)
}

/// Mode-transformed markup for one branch. `Color` passes the source bytes
/// through untouched; `Black`/`White` recolor, optionally canonicalizing
/// first.
fn branch_markup(asset: &SourceAsset, mode: ColorMode, config: &PackageConfig) -> Result<String> {
    match mode.flat() {
        None => Ok(asset.markup().to_string()),
        Some(flat) => {
            let base = if config.canonicalize {
                svg::canonicalize(asset.markup())?
            } else {
                asset.markup().to_string()
            };
            Ok(recolor::recolor(&base, flat))
        }
    }
}
