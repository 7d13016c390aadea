mod archive;
mod args;
mod context;
mod error;
mod manifest;
mod result;
mod tpl;
mod utils;

use args::Args;
use context::Context;
use error::Error;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        follow_symlinks,
        output,
        dir,
        manifest: bundle_manifest,
    } = Args::parse();

    // Use cliclack for nice UI
    cliclack::intro("srcpack")?;

    if !dir.exists() {
        return Err(Error::InputNotFound(dir.display().to_string()));
    }

    // With a manifest, the output argument is a folder and the tarball name
    // is derived from the bundle metadata.
    let output_path = if let Some(manifest_path) = bundle_manifest {
        let spinner = cliclack::spinner();
        spinner.start("Loading bundle manifest...");
        match Manifest::load(&manifest_path) {
            Ok(m) => {
                spinner.stop(format!("Loaded manifest for {}", m.name));
                utils::ensure_dir(&output)?;
                output.join(m.archive_filename())
            }
            Err(e) => {
                spinner.error("Failed to load bundle manifest");
                return Err(e);
            }
        }
    } else {
        output
    };

    let ctx = Context::new(output_path, dir, verbose, follow_symlinks)?;

    let spinner = cliclack::spinner();
    spinner.start("Creating tar.gz archive...");
    match archive::create_tar_gz(&ctx) {
        Ok(count) => {
            spinner.stop(format!(
                "Archived {} entries to {}",
                count,
                ctx.output_path.display()
            ));
        }
        Err(e) => {
            spinner.error("Failed to create archive");
            return Err(e);
        }
    }

    cliclack::outro("Source bundle created successfully!")?;
    Ok(())
}
