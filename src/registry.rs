use std::{collections::HashMap, path::Path};

use crate::{
    error::FontResult,
    extract::{extract_file_names, ExtractedNames},
};

/// A name extractor is a plain function value keyed by file suffix; no
/// factory hierarchy needed.
pub type NameExtractor = fn(&Path) -> FontResult<ExtractedNames>;

/// Maps lowercase file suffixes (with the leading dot, e.g. `".ttf"`) to
/// extractor functions.
///
/// Owned by whatever composes the system; there is no process-wide registry.
#[derive(Clone)]
pub struct ExtractorRegistry {
    suffix_to_extractor: HashMap<String, NameExtractor>,
}

impl ExtractorRegistry {
    /// An empty registry with no suffixes bound.
    pub fn new() -> Self {
        Self {
            suffix_to_extractor: HashMap::new(),
        }
    }

    /// Binds a file suffix to an extractor, replacing any previous binding.
    /// Suffixes are compared case-insensitively.
    pub fn register(&mut self, suffix: &str, extractor: NameExtractor) {
        self.suffix_to_extractor
            .insert(suffix.to_lowercase(), extractor);
    }

    /// Removes the binding for a suffix. Returns whether one existed.
    pub fn unregister(&mut self, suffix: &str) -> bool {
        self.suffix_to_extractor
            .remove(&suffix.to_lowercase())
            .is_some()
    }

    pub fn get(&self, suffix: &str) -> Option<NameExtractor> {
        self.suffix_to_extractor
            .get(&suffix.to_lowercase())
            .copied()
    }

    /// Looks up the extractor for a path by its file suffix.
    pub fn for_path(&self, path: &Path) -> Option<NameExtractor> {
        self.get(&font_suffix(path))
    }

    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.suffix_to_extractor.keys().map(String::as_str)
    }
}

/// The default registry wires the SFNT extractor to the usual TrueType and
/// OpenType suffixes.
impl Default for ExtractorRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(".ttf", extract_file_names);
        registry.register(".ttc", extract_file_names);
        registry.register(".otf", extract_file_names);

        registry
    }
}

/// Returns the lowercased file suffix of `path` including the leading dot,
/// or an empty string for files without an extension.
pub fn font_suffix(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{}", ext.to_lowercase()),
        None => String::new(),
    }
}
