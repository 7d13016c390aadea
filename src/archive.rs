use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use crate::utils;
use std::fs::File;
use std::path::Path;
use tar::Builder;
use flate2::Compression;
use flate2::write::GzEncoder;
use walkdir::WalkDir;

/// Write a gzip-compressed tarball of `ctx.input_dir` to `ctx.output_path`.
///
/// Every entry is named `<baseName>/<relativePath>`, with the input directory
/// itself as the first entry. Returns the number of entries written.
pub fn create_tar_gz(ctx: &Context) -> Result<usize> {
    // Validate the input before the output file is created
    if !ctx.input_dir.exists() {
        return Err(Error::InputNotFound(ctx.input_dir.display().to_string()));
    }
    if !ctx.input_dir.is_dir() {
        return Err(Error::NotADirectory(ctx.input_dir.display().to_string()));
    }

    let base_name = utils::dir_base_name(&ctx.input_dir)?;

    let tar_gz = File::create(&ctx.output_path)?;
    let enc = GzEncoder::new(tar_gz, Compression::default());
    let mut tar = Builder::new(enc);
    tar.follow_symlinks(ctx.follow_symlinks);

    let mut count = 0;
    let walker = WalkDir::new(&ctx.input_dir).follow_links(ctx.follow_symlinks);
    for entry in walker {
        let entry = entry?;
        let rel = entry.path().strip_prefix(&ctx.input_dir).unwrap();
        let name = Path::new(&base_name).join(rel);

        if ctx.verbose {
            println!("Adding {}", name.display());
        }

        tar.append_path_with_name(entry.path(), &name)?;
        count += 1;
    }

    // Finish the tar stream, then the gzip stream wrapping it.
    let enc = tar.into_inner()?;
    enc.finish()?;

    Ok(count)
}
