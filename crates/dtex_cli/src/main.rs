//! dtex — compile a TeX document as many times as it takes.
//!
//! `dtex [tex options] file.tex` runs the TeX engine in a private workspace
//! under the temporary root until the generated auxiliary files stop
//! changing (at most five passes), then moves the PDF next to `file.tex`.
//! `dtex -clean` removes every workspace.

#![warn(missing_docs)]

mod clean;
mod compile;
mod error;
mod invocation;

use std::ffi::OsString;
use std::io::Write;
use std::process;

use clap::Parser;
use dtex_config::Settings;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::error::{ErrorKind, FatalError};
use crate::invocation::Invocation;

/// Command line: everything is passed through except a lone `-clean`.
#[derive(Parser, Debug)]
#[command(
    name = "dtex",
    about = "Compile a TeX document until its auxiliary files stop changing",
    override_usage = "dtex [tex options] file.tex\n       dtex -clean",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Engine options followed by the document, or `-clean`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(()) => 0,
        Err(e) => report(&e),
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<(), FatalError> {
    let invocation = Invocation::from_args(cli.args)?;
    let settings = dtex_config::load_settings()?;
    init_tracing(&settings);
    info!("using temporary root: {}", settings.temp_root.display());

    match invocation {
        Invocation::Clean => clean::run(&settings),
        Invocation::Compile { options, document } => {
            compile::run(&settings, &options, &document).map(|_| ())
        }
    }
}

/// Installs a stderr subscriber when verbose; otherwise tracing output is dropped.
fn init_tracing(settings: &Settings) {
    if !settings.verbose {
        return;
    }
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: could not install logger: {e}");
    }
}

/// Prints a fatal error and returns the process exit code.
///
/// Engine output from a failed pass goes to stdout first so it reads like a
/// direct engine run.
fn report(err: &FatalError) -> i32 {
    if let Some(output) = err.engine_output() {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(output);
        let _ = stdout.flush();
    }
    match err.kind() {
        ErrorKind::Usage => eprintln!("{err}"),
        ErrorKind::Io | ErrorKind::Compile | ErrorKind::Config => eprintln!("error: {err}"),
    }
    err.exit_code()
}
