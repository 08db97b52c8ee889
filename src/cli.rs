use clap::{CommandFactory, FromArgMatches, Parser};
use log::debug;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::core::WalkOptions;
use crate::error::UsageError;

pub const FILES_FLAG: &str = "-f";

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Print a directory tree, optionally with file sizes", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Root directory to print
    #[arg(allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Pass `-f` to include files; any other value is ignored
    #[arg(allow_hyphen_values = true)]
    pub flag: Option<OsString>,
}

impl Cli {
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();

        // Help is only offered when it is the sole argument; anywhere else
        // `-h` and `--help` are plain positional values.
        let mut command = Self::command();
        if let [_, only] = args.as_slice()
            && (*only == "-h" || *only == "--help")
        {
            command = command.disable_help_flag(false);
        }

        let mut matches = command.try_get_matches_from(args)?;
        Ok(Self::from_arg_matches_mut(&mut matches)?)
    }

    pub fn include_files(&self) -> bool {
        match self.flag.as_deref() {
            Some(flag) if flag == FILES_FLAG => true,
            Some(other) => {
                debug!("ignoring unrecognised flag {other:?}");
                false
            }
            None => false,
        }
    }

    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            include_files: self.include_files(),
        }
    }
}
