use clap::Parser;
use tempfile::NamedTempFile;
use tracing_subscriber::EnvFilter;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Cursor, IsTerminal, Read};
use std::path::Path;

use crate::errors::{Error, Result};
use crate::{trim_stream, PathBounds, TrimConfig, TrimOutcome};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// SVG file to trim ('-' for stdin)
    file: String,

    /// Target output file ('-' for stdout)
    ///
    /// Defaults to `<stem>_trimmed.svg` alongside the input file,
    /// or stdout if reading from stdin.
    #[arg(short, long)]
    output: Option<String>,

    /// Padding around content (user-units)
    #[arg(long, default_value = "10")]
    padding: f32,

    /// Derive path bounds by pairing every number in the path data,
    /// ignoring path commands.
    #[arg(long)]
    legacy_path_bounds: bool,

    /// Don't print the trim report
    #[arg(short, long)]
    quiet: bool,
}

/// Top-level configuration used by the `svgtrim` command-line process.
///
/// This is typically derived from command line arguments and passed to `run()`.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Suppress the report on stdout
    pub quiet: bool,
    /// trim config options
    pub trim: TrimConfig,
}

/// Default output path for a given input: `dir/name.svg` => `dir/name_trimmed.svg`
fn default_output(input: &str) -> String {
    if input == "-" {
        return input.to_string();
    }
    let path = Path::new(input);
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!("{stem}_trimmed.svg"))
        .to_string_lossy()
        .into_owned()
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if !args.padding.is_finite() || args.padding < 0. {
            return Err(Error::Cli(format!(
                "Padding must be a non-negative number, not '{}'",
                args.padding
            )));
        }
        let output_path = args.output.unwrap_or_else(|| default_output(&args.file));
        if args.file != "-" && output_path != "-" {
            // Refuse to clobber the input; only checkable if both paths exist.
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&output_path);
            if in_path.exists()
                && out_path.exists()
                && out_path.canonicalize()? == in_path.canonicalize()?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        Ok(Self {
            input_path: args.file,
            output_path,
            quiet: args.quiet,
            trim: TrimConfig {
                padding: args.padding,
                path_bounds: if args.legacy_path_bounds {
                    PathBounds::NaivePairs
                } else {
                    PathBounds::CommandAware
                },
            },
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Install a stderr log subscriber, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be installed, e.g. when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read and trim `input`, writing to `output`; either may be '-' for
/// stdin / stdout.
///
/// The output file is only created (or replaced) if trimming succeeds with
/// visual content.
pub fn trim_file(input: &str, output: &str, cfg: &TrimConfig) -> Result<TrimOutcome> {
    let mut in_reader = if input == "-" {
        let mut stdin = std::io::stdin().lock();
        if stdin.is_terminal() {
            // Read everything up-front so a single Ctrl-D ends input.
            let mut buf = Vec::new();
            stdin.read_to_end(&mut buf)?;
            Box::new(BufReader::new(Cursor::new(buf))) as Box<dyn BufRead>
        } else {
            Box::new(stdin) as Box<dyn BufRead>
        }
    } else {
        let path = Path::new(input);
        if !path.is_file() {
            return Err(Error::Cli(format!("File '{input}' not found")));
        }
        Box::new(BufReader::new(File::open(path)?)) as Box<dyn BufRead>
    };

    if output == "-" {
        trim_stream(&mut in_reader, &mut std::io::stdout(), cfg)
    } else {
        let mut out_temp = NamedTempFile::new()?;
        let outcome = trim_stream(&mut in_reader, &mut out_temp, cfg)?;
        if let TrimOutcome::Trimmed(_) = outcome {
            // Copy content rather than rename (by .persist()) since this
            // could cross filesystems.
            fs::copy(out_temp.path(), output)?;
        }
        Ok(outcome)
    }
}

/// Run the `svgtrim` program with a given `Config`.
pub fn run(config: Config) -> Result<TrimOutcome> {
    let outcome = trim_file(&config.input_path, &config.output_path, &config.trim)?;

    if config.quiet {
        return Ok(outcome);
    }
    let report_to_stdout = config.output_path != "-";
    let message = match &outcome {
        TrimOutcome::Trimmed(report) if report_to_stdout => {
            format!("{report}\nWritten to {}", config.output_path)
        }
        TrimOutcome::Trimmed(report) => report.to_string(),
        TrimOutcome::NoContent => "No visual content found".to_string(),
    };
    // stdout may be carrying the document itself
    if report_to_stdout {
        println!("{message}");
    } else {
        eprintln!("{message}");
    }
    Ok(outcome)
}
