use std::path::PathBuf;

/// Final configuration after merging presets, CLI args and built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub out_dir: PathBuf,
    pub count: usize,
    pub min_len: usize,
    pub max_len: usize,
    pub max_depth: usize,
}

/// File kinds the generator can emit, in selection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    Html,
    Js,
    Css,
    Txt,
}

impl Extension {
    pub const ALL: [Extension; 4] = [Extension::Html, Extension::Js, Extension::Css, Extension::Txt];

    /// Suffix including the leading dot.
    pub fn suffix(self) -> &'static str {
        match self {
            Extension::Html => ".html",
            Extension::Js => ".js",
            Extension::Css => ".css",
            Extension::Txt => ".txt",
        }
    }
}

/// A single file written during a run.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub extension: Extension,
    pub content_len: usize, // raw payload length, before template wrapping
}
