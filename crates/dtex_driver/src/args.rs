//! Engine argument handling.

use std::ffi::{OsStr, OsString};
use std::path::Path;

/// The flag the driver injects to point the engine at the workspace.
///
/// Callers may not pass it themselves.
pub const OUTPUT_DIRECTORY_FLAG: &str = "-output-directory";

/// Returns the first caller option that would override the injected output
/// directory, in either dash style and with or without `=value`.
pub fn find_reserved(options: &[OsString]) -> Option<&OsString> {
    options.iter().find(|opt| is_reserved(opt))
}

fn is_reserved(opt: &OsStr) -> bool {
    let Some(opt) = opt.to_str() else {
        return false;
    };
    let name = opt.split_once('=').map_or(opt, |(name, _)| name);
    name == OUTPUT_DIRECTORY_FLAG || name.strip_prefix('-') == Some(OUTPUT_DIRECTORY_FLAG)
}

/// Builds the full engine command line: the injected output directory
/// followed by the caller's options, document last.
pub fn compile_args(workspace_dir: &Path, options: &[OsString]) -> Vec<OsString> {
    let mut args = Vec::with_capacity(options.len() + 2);
    args.push(OsString::from(OUTPUT_DIRECTORY_FLAG));
    args.push(workspace_dir.as_os_str().to_owned());
    args.extend(options.iter().cloned());
    args
}
