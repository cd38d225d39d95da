//! Builds a font-name index out of explicit font directories.
//!
//! Which directories to scan is the caller's business; this module only
//! provides the mechanism: list the files whose suffix has a registered
//! extractor, pull the names out and map them both ways.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::{debug, warn};

use crate::registry::{font_suffix, ExtractorRegistry};

/// Two-way index between font names and the files that contain them.
#[derive(Debug, Default)]
pub struct FontIndex {
    by_name: BTreeMap<String, PathBuf>,
    by_path: BTreeMap<PathBuf, String>,
}

impl FontIndex {
    pub fn is_font_available(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Full path to the file holding the named font.
    pub fn font_file_path(&self, name: &str) -> Option<&Path> {
        self.by_name.get(name).map(PathBuf::as_path)
    }

    pub fn font_name(&self, path: &Path) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    /// Names of all indexed fonts, in sorted order.
    pub fn available_fonts(&self) -> impl Iterator<Item = &str> {
        self.by_name.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    fn add(&mut self, name: String, path: PathBuf) {
        // drop any pairing the insert displaces, so the two maps always
        // mirror each other
        if let Some(old_path) = self.by_name.remove(&name) {
            self.by_path.remove(&old_path);
        }
        if let Some(old_name) = self.by_path.remove(&path) {
            self.by_name.remove(&old_name);
        }

        self.by_path.insert(path.clone(), name.clone());
        self.by_name.insert(name, path);
    }
}

/// Scans the given directories and indexes every font file whose suffix has
/// a registered extractor.
///
/// Directories that do not exist are skipped. A file the extractor rejects
/// is logged and skipped; a bad font never aborts the scan. It is important
/// that this stays quick: only the name tables are read, never glyph data.
pub fn scan_font_dirs<P>(dirs: &[P], registry: &ExtractorRegistry) -> anyhow::Result<FontIndex>
where
    P: AsRef<Path>,
{
    let mut index = FontIndex::default();

    for dir in dirs {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            debug!("skipping font path {}: not a directory", dir.display());
            continue;
        }

        let entries = fs::read_dir(dir)
            .with_context(|| format!("reading font directory {}", dir.display()))?;

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry in {}: {err}", dir.display());
                    continue;
                }
            };

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let extractor = match registry.get(&font_suffix(&path)) {
                Some(extractor) => extractor,
                None => continue,
            };

            match extractor(&path) {
                Ok(names) => {
                    // index under the full name, like the host platform
                    // does, falling back to the family name
                    let name = names.full_name.or(names.family_name);
                    match name {
                        Some(name) if !name.is_empty() => {
                            debug!("indexed font {:?} from {}", name, path.display());
                            index.add(name, path);
                        }
                        _ => debug!("no usable font name in {}", path.display()),
                    }
                }
                Err(err) => {
                    debug!("could not extract font names from {}: {err}", path.display());
                }
            }
        }
    }

    Ok(index)
}
