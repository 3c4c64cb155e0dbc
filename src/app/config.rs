use crate::app::cli::Cli;
use crate::app::models::RuntimeConfig;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

pub const DEFAULT_COUNT: i64 = 20;
pub const DEFAULT_MIN: i64 = 50;
pub const DEFAULT_MAX: i64 = 500;
pub const DEFAULT_OUT: &str = "./dist";
pub const DEFAULT_DEPTH: i64 = 3;

#[derive(Deserialize, Debug)]
struct PresetsFile {
    #[serde(flatten)]
    presets: HashMap<String, PresetConfig>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PresetConfig {
    pub count: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub out: Option<String>,
    pub depth: Option<i64>,
}

fn presets_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home
        .join(".config")
        .join("fixture_gen")
        .join("presets.toml"))
}

fn parse_presets(content: &str) -> Result<HashMap<String, PresetConfig>> {
    let parsed: PresetsFile = toml::from_str(content).context("Failed to parse presets.toml")?;
    Ok(parsed.presets)
}

/// Looks up `name` in the presets file at `path`.
pub fn load_preset(path: &Path, name: &str) -> Result<PresetConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read presets at {:?}", path))?;

    parse_presets(&content)?
        .remove(name)
        .ok_or_else(|| anyhow!("Preset '{}' not found in {:?}", name, path))
}

/// Parses a numeric flag value, keeping `fallback` when the flag had no value
/// or the value is not an integer.
fn numeric_or(flag: &str, raw: Option<&str>, fallback: i64) -> i64 {
    match raw {
        None => fallback,
        Some(value) => match value.trim().parse::<i64>() {
            Ok(n) => n,
            Err(_) => {
                log::debug!(
                    "Ignoring non-numeric value {:?} for --{}, using {}",
                    value,
                    flag,
                    fallback
                );
                fallback
            }
        },
    }
}

/// Resolves `path` against `base` and removes `.` and `..` segments lexically.
/// The target does not need to exist yet.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

/// Merges CLI values over an optional preset over built-in defaults, then
/// applies the clamping rules.
pub fn merge_options(cli: &Cli, preset: &PresetConfig, cwd: &Path) -> RuntimeConfig {
    let count = numeric_or("count", cli.count.as_deref(), preset.count.unwrap_or(DEFAULT_COUNT));
    let min = numeric_or("min", cli.min.as_deref(), preset.min.unwrap_or(DEFAULT_MIN));
    let max = numeric_or("max", cli.max.as_deref(), preset.max.unwrap_or(DEFAULT_MAX));
    let depth = numeric_or("depth", cli.depth.as_deref(), preset.depth.unwrap_or(DEFAULT_DEPTH));

    let out = cli
        .out
        .clone()
        .or_else(|| preset.out.clone())
        .unwrap_or_else(|| DEFAULT_OUT.to_string());

    let min_len = min.max(0);
    let max_len = max.max(min_len);

    RuntimeConfig {
        out_dir: absolutize(cwd, Path::new(&out)),
        count: usize::try_from(count).unwrap_or(0),
        min_len: usize::try_from(min_len).unwrap_or(0),
        max_len: usize::try_from(max_len).unwrap_or(0),
        max_depth: usize::try_from(depth.max(1)).unwrap_or(1),
    }
}

pub fn resolve_config(cli: Cli, cwd: &Path) -> Result<RuntimeConfig> {
    // Presets are only consulted on request
    let preset = match cli.preset.as_deref() {
        Some(name) => load_preset(&presets_path()?, name)?,
        None => PresetConfig::default(),
    };

    let config = merge_options(&cli, &preset, cwd);
    log::info!("Resolved configuration: {:?}", config);

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cli::known_args;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["fixture_gen"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(known_args(argv.into_iter().map(String::from))).unwrap()
    }

    fn resolve(args: &[&str]) -> RuntimeConfig {
        merge_options(&cli(args), &PresetConfig::default(), Path::new("/work"))
    }

    #[test]
    fn defaults_apply_without_flags() {
        let config = resolve(&[]);
        assert_eq!(
            config,
            RuntimeConfig {
                out_dir: PathBuf::from("/work/dist"),
                count: 20,
                min_len: 50,
                max_len: 500,
                max_depth: 3,
            }
        );
    }

    #[test]
    fn flags_override_defaults() {
        let config = resolve(&["--count", "5", "--min", "10", "--max", "12", "--depth", "2", "--out", "build/assets"]);
        assert_eq!(config.count, 5);
        assert_eq!(config.min_len, 10);
        assert_eq!(config.max_len, 12);
        assert_eq!(config.max_depth, 2);
        assert_eq!(config.out_dir, PathBuf::from("/work/build/assets"));
    }

    #[test]
    fn non_numeric_value_falls_back_to_default() {
        let config = resolve(&["--count", "abc", "--depth", "deep"]);
        assert_eq!(config.count, 20);
        assert_eq!(config.max_depth, 3);
    }

    #[test]
    fn fractional_and_suffixed_values_are_not_truncated() {
        assert_eq!(numeric_or("min", Some("12.5"), 50), 50);
        assert_eq!(numeric_or("min", Some("10px"), 50), 50);
        assert_eq!(numeric_or("min", Some(" 12 "), 50), 12);
        assert_eq!(numeric_or("min", Some(""), 50), 50);
    }

    #[test]
    fn flag_without_value_is_ignored() {
        let config = resolve(&["--count", "--min", "7"]);
        assert_eq!(config.count, 20);
        assert_eq!(config.min_len, 7);

        let trailing = resolve(&["--max"]);
        assert_eq!(trailing.max_len, 500);
    }

    #[test]
    fn negative_min_clamps_to_zero() {
        let config = resolve(&["--min", "-5", "--max", "3"]);
        assert_eq!(config.min_len, 0);
        assert_eq!(config.max_len, 3);
    }

    #[test]
    fn max_below_min_is_raised() {
        let config = resolve(&["--min", "40", "--max", "10"]);
        assert_eq!(config.min_len, 40);
        assert_eq!(config.max_len, 40);
    }

    #[test]
    fn depth_and_count_lower_bounds() {
        let config = resolve(&["--depth", "0", "--count", "-3"]);
        assert_eq!(config.max_depth, 1);
        assert_eq!(config.count, 0);
    }

    #[test]
    fn absolute_out_is_kept_and_normalized() {
        let config = resolve(&["--out", "/tmp/x/../fixtures/./a"]);
        assert_eq!(config.out_dir, PathBuf::from("/tmp/fixtures/a"));
    }

    #[test]
    fn preset_values_sit_between_cli_and_defaults() {
        let preset = PresetConfig {
            count: Some(100),
            min: Some(5),
            max: None,
            out: Some("public".to_string()),
            depth: Some(6),
        };
        let config = merge_options(&cli(&["--count", "7", "--depth", "oops"]), &preset, Path::new("/work"));
        assert_eq!(config.count, 7);
        assert_eq!(config.min_len, 5);
        assert_eq!(config.max_len, 500);
        // malformed CLI value falls back to the preset, not the built-in default
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.out_dir, PathBuf::from("/work/public"));
    }

    #[test]
    fn load_preset_reads_named_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        fs::write(
            &path,
            "[assets]\ncount = 3\nout = \"gen\"\n\n[big]\nmax = 9000\n",
        )
        .unwrap();

        let assets = load_preset(&path, "assets").unwrap();
        assert_eq!(assets.count, Some(3));
        assert_eq!(assets.out.as_deref(), Some("gen"));
        assert_eq!(assets.max, None);

        let err = load_preset(&path, "missing").unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn load_preset_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("presets.toml");
        fs::write(&path, "[assets\ncount = ").unwrap();

        assert!(load_preset(&path, "assets").is_err());
        assert!(load_preset(&dir.path().join("absent.toml"), "assets").is_err());
    }
}
