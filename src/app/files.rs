use crate::app::models::{Extension, GeneratedFile};
use crate::app::paths::{hex_token, DIR_TOKEN_LEN};
use crate::app::templates;
use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

pub const FILE_PREFIX: &str = "file_";
pub const FILE_TOKEN_LEN: usize = 8;

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub fn random_extension<R: Rng>(rng: &mut R) -> Extension {
    *Extension::ALL
        .choose(rng)
        .unwrap_or(&Extension::Txt)
}

/// `file_<8 hex chars><ext>`. Name clashes are not checked.
pub fn random_file_name<R: Rng>(rng: &mut R, extension: Extension) -> String {
    format!(
        "{}{}{}",
        FILE_PREFIX,
        hex_token(rng, FILE_TOKEN_LEN),
        extension.suffix()
    )
}

/// Uniform random upper/lower case ASCII letters.
pub fn random_letters<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}

/// Writes one random file into `dir` with a raw payload length in
/// `[min_len, max_len]`. An existing file with the same name is overwritten.
pub fn create_random_file<R: Rng>(
    rng: &mut R,
    dir: &Path,
    min_len: usize,
    max_len: usize,
) -> Result<GeneratedFile> {
    let extension = random_extension(rng);
    let path: PathBuf = dir.join(random_file_name(rng, extension));

    let content_len = rng.gen_range(min_len..=max_len.max(min_len));
    let payload = random_letters(rng, content_len);
    let title = hex_token(rng, DIR_TOKEN_LEN);
    let body = templates::wrap(extension, &payload, &title);

    fs::write(&path, body).with_context(|| format!("Failed to write file {:?}", path))?;
    log::debug!("Wrote {}", path.display());

    Ok(GeneratedFile {
        path,
        extension,
        content_len,
    })
}
