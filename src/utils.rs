use crate::result::Result;
use std::path::{Component, Path};
use std::fs;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Base name of a directory path, ignoring trailing separators.
/// Paths without a normal component (".", "/") are canonicalized first.
pub fn dir_base_name(path: &Path) -> Result<String> {
    let name = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(os) => Some(os.to_string_lossy().into_owned()),
            _ => None,
        })
        .next_back();

    match name {
        Some(name) => Ok(name),
        None => {
            let canonical = path.canonicalize()?;
            canonical
                .file_name()
                .map(|os| os.to_string_lossy().into_owned())
                .ok_or_else(|| {
                    crate::error::Error::custom(format!(
                        "Cannot determine a base name for {}",
                        path.display()
                    ))
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_base_name_plain() {
        assert_eq!(dir_base_name(Path::new("sample")).unwrap(), "sample");
    }

    #[test]
    fn test_base_name_nested_with_trailing_separator() {
        let path: PathBuf = ["vendor", "libzip-0.11.1", ""].iter().collect();
        assert_eq!(dir_base_name(&path).unwrap(), "libzip-0.11.1");
    }

    #[test]
    fn test_base_name_of_current_dir() {
        // "." has no normal component and falls back to canonicalization.
        assert!(!dir_base_name(Path::new(".")).unwrap().is_empty());
    }
}
