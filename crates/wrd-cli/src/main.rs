/// wrd command-line tool: decode binary frames against a field layout.
///
/// # Command overview
///
/// ```text
/// wrd <COMMAND> [OPTIONS]
///
/// Commands:
///   inspect    Decode a frame field by field and print the values
///   validate   Check that a frame holds every field of a layout
///   help       Print help information
///
/// Global options:
///   -v, --verbose    Enable debug logging on stderr
///   -h, --help       Print help
///   -V, --version    Print version
/// ```
///
/// Logging goes to stderr through `tracing`. The `WRD_LOG` environment
/// variable takes an `EnvFilter` directive (e.g. `WRD_LOG=trace`) and
/// overrides `--verbose`.
///
/// # Exit codes
///
/// | Code | Meaning                                      |
/// |------|----------------------------------------------|
/// | 0    | Success                                      |
/// | 1    | Error (I/O failure, bad layout, short frame) |
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod cmd_inspect;
mod cmd_validate;
mod input;
mod layout;

use layout::Layout;

// ── CLI root ──────────────────────────────────────────────────────────────────

/// Decode binary wire frames with a bounds-checked or a trusted cursor.
#[derive(Parser)]
#[command(name = "wrd", version, about = "Wire frame decoder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

// ── Sub-commands ──────────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum Commands {
    /// Decode a frame field by field and print the values.
    Inspect(InspectArgs),
    /// Check that a frame holds every field of a layout.
    Validate(ValidateArgs),
}

// ── Argument structs ──────────────────────────────────────────────────────────

/// Where the frame bytes come from. Exactly one source must be given.
#[derive(clap::Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Read the frame from this file.
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Take the frame from a hex string (whitespace is ignored).
    #[arg(long)]
    pub hex: Option<String>,
}

/// How `inspect` walks the frame.
///
/// ```text
/// ┌───────────┬──────────────────────────────────────────────────────────┐
/// │ Mode      │ Behaviour                                                │
/// ├───────────┼──────────────────────────────────────────────────────────┤
/// │ bounded   │ One checked pass; values come from the bounded decoder   │
/// │ validated │ Checked pass to find the frame end, then an unchecked    │
/// │           │ pass over exactly that span produces the values          │
/// └───────────┴──────────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum DecodeMode {
    #[default]
    Bounded,
    Validated,
}

/// Arguments for `wrd inspect`.
#[derive(clap::Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Comma-separated field layout, e.g. `u16be,u32le,cstr`.
    #[arg(long, short)]
    pub layout: Layout,

    /// Decoding mode.
    #[arg(long, value_enum, default_value_t = DecodeMode::Bounded)]
    pub mode: DecodeMode,

    /// Print a JSON array instead of one line per field.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `wrd validate`.
///
/// Runs the layout through the bounded decoder only and reports how many
/// bytes it covered. Trailing bytes are reported, not rejected.
#[derive(clap::Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Comma-separated field layout, e.g. `u16be,u32le,cstr`.
    #[arg(long, short)]
    pub layout: Layout,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("WRD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Inspect(args) => cmd_inspect::run(&args),
        Commands::Validate(args) => cmd_validate::run(&args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
