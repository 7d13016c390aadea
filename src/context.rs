use crate::result::Result;
use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (print each entry as it is appended)
    pub verbose: bool,

    /// Archive symlink targets instead of the links themselves
    pub follow_symlinks: bool,

    /// Directory being archived
    pub input_dir: PathBuf,

    /// Absolute path of the tarball being written
    pub output_path: PathBuf,
}

impl Context {
    pub fn new(
        output_path: PathBuf,
        input_dir: PathBuf,
        verbose: bool,
        follow_symlinks: bool,
    ) -> Result<Self> {
        // Resolve the destination to an absolute path
        let output_path = std::path::absolute(&output_path)?;

        Ok(Self {
            verbose,
            follow_symlinks,
            input_dir,
            output_path,
        })
    }
}
