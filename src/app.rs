// Declare modules
pub mod cli;
pub mod config;
pub mod files;
pub mod models;
pub mod paths;
pub mod report;
pub mod templates;

use anyhow::{bail, Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use rand::Rng;
use std::env;
use std::fs;

use self::cli::{known_args, Cli};
use self::config::resolve_config;
use self::files::create_random_file;
use self::models::{GeneratedFile, RuntimeConfig};
use self::paths::create_random_dir;
use self::report::Summary;

/// Creates `config.count` random files, stopping at the first failure.
pub fn generate<R: Rng>(config: &RuntimeConfig, rng: &mut R) -> Result<Vec<GeneratedFile>> {
    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("Failed to create output directory {:?}", config.out_dir))?;

    let mut created = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let dir = create_random_dir(rng, &config.out_dir, config.max_depth)?;
        let file = create_random_file(rng, &dir, config.min_len, config.max_len)?;
        log::debug!("{:?} file with {} chars", file.extension, file.content_len);
        created.push(file);
    }

    log::info!("Generated {} files", created.len());
    Ok(created)
}

/// Initializes components and orchestrates data flow.
pub fn run() -> Result<()> {
    // 1. Parse Args
    let raw_args = env::args_os().map(|a| a.to_string_lossy().into_owned());
    let args = match Cli::try_parse_from(known_args(raw_args)) {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayHelp => {
            err.print().context("Failed to print help")?;
            return Ok(());
        }
        Err(err) => {
            err.print().context("Failed to print usage error")?;
            bail!("Invalid command-line arguments");
        }
    };

    // 2. Resolve Configuration
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(args, &current_dir)?;

    // 3. Generate
    let files = generate(&config, &mut rand::thread_rng())?;

    // 4. Print to Stdout
    println!("{}", Summary::render(&files, &config.out_dir, &current_dir));

    Ok(())
}
