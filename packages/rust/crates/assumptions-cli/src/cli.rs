use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "assumptions")]
#[command(
    about = "Generate an assumptions and caveats log (or todo / technical debt list) from code comments.",
    after_help = "Your assumptions and caveats documented."
)]
pub(crate) struct Cli {
    /// Log type: assumptions_caveats_log, todo_list or technical_debt_log.
    #[arg(long, short = 'l', value_name = "NAME")]
    pub(crate) log_type: Option<String>,

    /// Output Markdown file (default depends on the log type, e.g. `assumptions_caveats_log.md`).
    #[arg(long, short = 'o', value_name = "FILE")]
    pub(crate) outfile: Option<PathBuf>,

    /// Directory to search, relative to the current directory (default: `.`).
    #[arg(long, short = 'p', value_name = "DIR")]
    pub(crate) path: Option<PathBuf>,

    /// Only search files ending in this suffix (e.g. `.py`).
    #[arg(long, short = 'e', value_name = "SUFFIX")]
    pub(crate) extension: Option<String>,

    /// Template file with `{ assumptions }`-style markers.
    #[arg(long, short = 't', value_name = "FILE")]
    pub(crate) template: Option<PathBuf>,

    /// Config file (default: `.assumptions.yaml` if present).
    #[arg(long, short = 'c', value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Work out whether the log would change without writing it.
    #[arg(long, default_value_t = false)]
    pub(crate) dry_run: bool,

    /// Like --dry-run, but exit with status 1 when the log is out of date.
    #[arg(long, default_value_t = false)]
    pub(crate) check: bool,

    /// Debug logging on stderr.
    #[arg(long, short = 'v', default_value_t = false)]
    pub(crate) verbose: bool,
}
