use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the srcpack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Archive symlink targets instead of the links themselves
    pub follow_symlinks: bool,

    /// Destination tarball path (or output folder when a manifest is given)
    pub output: PathBuf,

    /// Directory to archive
    pub dir: PathBuf,

    /// Path to an optional bundle manifest file
    pub manifest: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("srcpack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages a source tree into a gzip-compressed tarball")
            .arg(
                Arg::new("output")
                    .value_name("TARBALL")
                    .required(true)
                    .help("Destination path for the .tar.gz file (output folder when --manifest is used)")
            )
            .arg(
                Arg::new("dir")
                    .value_name("DIR")
                    .required(true)
                    .help("Directory to archive")
            )
            .arg(
                Arg::new("manifest")
                    .short('m')
                    .long("manifest")
                    .value_name("FILE")
                    .help("Path to a bundle manifest (e.g., bundle.toml) used to derive the tarball name")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .arg(
                Arg::new("follow-symlinks")
                    .long("follow-symlinks")
                    .action(ArgAction::SetTrue)
                    .help("Archive the targets of symbolic links instead of the links themselves")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            follow_symlinks: matches.get_flag("follow-symlinks"),
            output: matches.get_one::<String>("output").map(PathBuf::from).unwrap(),
            dir: matches.get_one::<String>("dir").map(PathBuf::from).unwrap(),
            manifest: matches.get_one::<String>("manifest").map(PathBuf::from),
        }
    }
}
