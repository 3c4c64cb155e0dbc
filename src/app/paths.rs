use anyhow::{Context, Result};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

pub const DIR_TOKEN_LEN: usize = 6;

/// Lowercase hex token of exactly `len` characters.
pub fn hex_token<R: Rng>(rng: &mut R, len: usize) -> String {
    let mut bytes = vec![0u8; len.div_ceil(2)];
    rng.fill(&mut bytes[..]);

    let mut token: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    token.truncate(len);
    token
}

/// Picks a depth in `[1, max(1, max_depth)]` and builds that many random
/// segments under `base`, without touching the filesystem.
pub fn random_dir_path<R: Rng>(rng: &mut R, base: &Path, max_depth: usize) -> PathBuf {
    let depth = rng.gen_range(1..=max_depth.max(1));

    let mut path = base.to_path_buf();
    for _ in 0..depth {
        path.push(hex_token(rng, DIR_TOKEN_LEN));
    }
    path
}

/// Chooses a random nested directory under `base` and makes sure it exists.
pub fn create_random_dir<R: Rng>(
    rng: &mut R,
    base: &Path,
    max_depth: usize,
) -> Result<PathBuf> {
    let dir = random_dir_path(rng, base, max_depth);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create directory {:?}", dir))?;
    log::debug!("Ensured directory {}", dir.display());

    Ok(dir)
}
