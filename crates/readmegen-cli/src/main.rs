use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use readmegen_config::Config;
use readmegen_engine::io::{self, IoError};
use readmegen_engine::warning;

#[derive(Parser)]
#[command(name = "readmegen")]
#[command(about = "Convert readme.toml course records to normalized README.md files")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert TOML records to README files
    Convert {
        /// Input TOML file or directory (e.g. final or final/MA1001/readme.toml)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Convert every record under the configured source root
        #[arg(long, conflicts_with = "input")]
        all: bool,

        /// Output README path (only for a single input file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing README files
        #[arg(long)]
        overwrite: bool,

        /// Print which files would be generated without writing them
        #[arg(long)]
        dry_run: bool,

        /// Reduce per-file output; print only the summary
        #[arg(long)]
        quiet: bool,
    },
    /// Record the default scan root in the config file
    SetRoot {
        /// Directory that holds the readme.toml records
        root: PathBuf,
    },
    /// Add or clear the auto-generation warning banner in a README
    Warn {
        #[arg(long, default_value = "README.md")]
        readme: PathBuf,

        /// Ensure the warning block exists at the top
        #[arg(long, conflicts_with = "clear")]
        set: bool,

        /// Remove the warning block if present
        #[arg(long)]
        clear: bool,

        /// Warning message (empty uses the standard notice)
        #[arg(long, default_value = "")]
        message: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Convert {
            input,
            all,
            output,
            overwrite,
            dry_run,
            quiet,
        } => run_convert(input, all, output, overwrite, dry_run, quiet),
        Command::SetRoot { root } => set_root_at(root, Config::config_path()),
        Command::Warn {
            readme,
            set,
            clear,
            message,
        } => run_warn(readme, set, clear, &message),
    }
}

/// Resolve the scan root: an explicit --input wins, then the configured
/// source root, then ./final (with --all only).
fn resolve_root(input: Option<PathBuf>, all: bool, config: Option<Config>) -> Result<PathBuf> {
    if let Some(input) = input {
        return Ok(input);
    }
    if let Some(config) = config {
        return Ok(config.source_root);
    }
    if all {
        return Ok(PathBuf::from("final"));
    }
    bail!(
        "pass --input <path> or --all, or set source_root in {}",
        Config::config_path().display()
    );
}

fn run_convert(
    input: Option<PathBuf>,
    all: bool,
    output: Option<PathBuf>,
    overwrite: bool,
    dry_run: bool,
    quiet: bool,
) -> Result<()> {
    let config = Config::load().context("failed to load config file")?;
    let root = resolve_root(input, all, config)?;
    let inputs = io::discover_inputs(&root)
        .with_context(|| format!("failed to scan {}", root.display()))?;
    if inputs.is_empty() {
        bail!("no TOML files found under {}", root.display());
    }
    if output.is_some() && inputs.len() != 1 {
        bail!("--output can only be used when --input points to a single TOML file");
    }

    let mut wrote = 0;
    let mut skipped = 0;

    for path in &inputs {
        let out = output
            .clone()
            .unwrap_or_else(|| io::default_out_path(path));
        if dry_run {
            if !quiet {
                println!("{} -> {}", path.display(), out.display());
            }
            continue;
        }
        match io::convert_one(path, &out, overwrite) {
            Ok(()) => {
                wrote += 1;
                if !quiet {
                    println!("Wrote {}", out.display());
                }
            }
            Err(IoError::OutputExists(_)) => {
                skipped += 1;
                if !quiet {
                    println!("Skip {} (exists)", out.display());
                }
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to convert {}", path.display()));
            }
        }
    }

    if quiet && !dry_run {
        println!("Wrote {wrote} file(s), skipped {skipped} (exists).");
    }

    Ok(())
}

fn set_root_at(root: PathBuf, config_file: PathBuf) -> Result<()> {
    let config = Config::new(root);
    config
        .save_to_path(&config_file)
        .with_context(|| format!("failed to write {}", config_file.display()))?;
    println!(
        "source_root = {} ({})",
        config.source_root.display(),
        config_file.display()
    );
    Ok(())
}

fn run_warn(readme: PathBuf, set: bool, clear: bool, message: &str) -> Result<()> {
    if set == clear {
        bail!("pass exactly one of --set or --clear");
    }

    let text = if readme.exists() {
        fs::read_to_string(&readme)
            .with_context(|| format!("failed to read {}", readme.display()))?
            .replace("\r\n", "\n")
            .replace('\r', "\n")
    } else {
        String::new()
    };

    let new_text = if set {
        warning::set_warning(&text, message)
    } else {
        warning::strip_warning(&text)
    };

    if new_text != text {
        fs::write(&readme, new_text)
            .with_context(|| format!("failed to write {}", readme.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_input_wins() {
        let config = Config {
            source_root: PathBuf::from("/configured/final"),
        };
        let root = resolve_root(Some(PathBuf::from("final/MA1001")), false, Some(config)).unwrap();
        assert_eq!(root, PathBuf::from("final/MA1001"));
    }

    #[test]
    fn config_source_root_is_the_fallback() {
        let config = Config {
            source_root: PathBuf::from("/configured/final"),
        };
        let root = resolve_root(None, false, Some(config)).unwrap();
        assert_eq!(root, PathBuf::from("/configured/final"));
    }

    #[test]
    fn all_without_config_scans_final() {
        assert_eq!(resolve_root(None, true, None).unwrap(), PathBuf::from("final"));
    }

    #[test]
    fn missing_input_all_and_config_is_an_error() {
        assert!(resolve_root(None, false, None).is_err());
    }

    #[test]
    fn set_root_writes_a_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_file = dir.path().join("readmegen/config.toml");

        set_root_at(PathBuf::from("/srv/courses/final"), config_file.clone()).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();
        assert_eq!(loaded.source_root, PathBuf::from("/srv/courses/final"));
    }

    #[test]
    fn warn_requires_exactly_one_mode() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        assert!(run_warn(readme.clone(), false, false, "").is_err());
        assert!(run_warn(readme, true, true, "").is_err());
    }

    #[test]
    fn warn_set_then_clear_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");
        fs::write(&readme, "# 标题\n\n正文。\n").unwrap();

        run_warn(readme.clone(), true, false, "转换失败").unwrap();
        let warned = fs::read_to_string(&readme).unwrap();
        assert!(warned.starts_with("<!-- RDME_TOML_AUTOGEN_WARNING_START -->"));
        assert!(warned.contains("> 转换失败"));

        run_warn(readme.clone(), false, true, "").unwrap();
        assert_eq!(fs::read_to_string(&readme).unwrap(), "# 标题\n\n正文。\n");
    }

    #[test]
    fn warn_on_missing_readme_creates_it() {
        let dir = tempfile::tempdir().unwrap();
        let readme = dir.path().join("README.md");

        run_warn(readme.clone(), true, false, "").unwrap();
        assert!(readme.exists());
        assert!(
            fs::read_to_string(&readme)
                .unwrap()
                .contains("> [!WARNING]")
        );
    }
}
