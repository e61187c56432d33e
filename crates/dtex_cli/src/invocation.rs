//! Classifying the raw argument list.

use std::ffi::OsString;
use std::path::PathBuf;

use dtex_driver::find_reserved;

use crate::error::FatalError;

/// The flag that selects clean-up mode when it is the only argument.
pub const CLEAN_FLAG: &str = "-clean";

/// What the caller asked for.
#[derive(Debug, PartialEq, Eq)]
pub enum Invocation {
    /// Remove the temporary root.
    Clean,
    /// Compile `document`; `options` is passed to the engine verbatim and
    /// still ends with the document.
    Compile {
        /// Engine arguments as given, document last.
        options: Vec<OsString>,
        /// The document argument.
        document: PathBuf,
    },
}

impl Invocation {
    /// Classifies `args`, rejecting malformed invocations before anything
    /// touches the filesystem.
    pub fn from_args(args: Vec<OsString>) -> Result<Self, FatalError> {
        if args.len() == 1 && args[0] == CLEAN_FLAG {
            return Ok(Self::Clean);
        }
        let Some(last) = args.last() else {
            return Err(FatalError::NoArguments);
        };
        if let Some(flag) = find_reserved(&args) {
            return Err(FatalError::ReservedOption(
                flag.to_string_lossy().into_owned(),
            ));
        }
        let document = PathBuf::from(last);
        Ok(Self::Compile {
            options: args,
            document,
        })
    }
}
