use clap::Parser;

/// Flags that take a value.
const VALUE_FLAGS: [&str; 6] = ["--count", "--min", "--max", "--out", "--depth", "--preset"];
const HELP_FLAGS: [&str; 2] = ["--help", "-h"];

/// Raw flag values are kept as strings so malformed input can fall back to
/// defaults instead of aborting the run.
#[derive(Parser, Debug)]
#[command(
    author,
    about = "Generate randomly named and sized fixture files in random nested directories",
    args_override_self = true
)]
pub struct Cli {
    /// Number of files to create [default: 20]
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub count: Option<String>,

    /// Minimum content length [default: 50]
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub min: Option<String>,

    /// Maximum content length [default: 500]
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub max: Option<String>,

    /// Output base directory, relative to the working directory [default: ./dist]
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub out: Option<String>,

    /// Maximum random directory nesting depth [default: 3]
    #[arg(long, value_name = "N", num_args = 0..=1)]
    pub depth: Option<String>,

    /// Use a named set of options from presets.toml
    #[arg(long, num_args = 0..=1)]
    pub preset: Option<String>,
}

fn is_flag(token: &str) -> bool {
    token.starts_with("--") || HELP_FLAGS.contains(&token)
}

/// Rewrites raw process arguments into a form clap accepts without error.
///
/// Recognised flags are kept and their value, when one follows, is attached
/// as `--flag=value` so hyphenated values such as `-5` survive. Unknown flags
/// and stray tokens are dropped.
pub fn known_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut tokens = args.into_iter();
    let mut kept: Vec<String> = tokens.next().into_iter().collect();
    let mut tokens = tokens.peekable();

    while let Some(token) = tokens.next() {
        if HELP_FLAGS.contains(&token.as_str()) {
            kept.push(token);
        } else if VALUE_FLAGS.iter().any(|f| token.starts_with(&format!("{}=", f))) {
            kept.push(token);
        } else if VALUE_FLAGS.contains(&token.as_str()) {
            match tokens.next_if(|next| !is_flag(next)) {
                Some(value) if !value.is_empty() => kept.push(format!("{}={}", token, value)),
                _ => kept.push(token),
            }
        } else {
            log::debug!("Ignoring unrecognised argument {:?}", token);
        }
    }

    kept
}
