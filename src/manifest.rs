use crate::error::Error;
use crate::result::Result;
use crate::tpl::Vars;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk shape of a bundle manifest file
#[derive(Debug, Deserialize)]
pub struct BundleToml {
    pub bundle: BundleConfig,
}

#[derive(Debug, Deserialize)]
pub struct BundleConfig {
    pub name: String,

    pub version: String,

    /// Filename template, e.g. "$NAME-$VERSION-mod"
    #[serde(default)]
    pub filename: Option<String>,
}

/// Parsed and processed bundle metadata
pub struct Manifest {
    pub name: String,
    #[allow(dead_code)]
    pub version: String,
    pub filename: String,
}

impl Manifest {
    /// Load and parse a bundle manifest from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ManifestNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;
        let bundle_toml: BundleToml = toml::from_str(&content)?;
        let config = bundle_toml.bundle;

        if config.name.is_empty() {
            return Err(Error::InvalidManifest(
                "bundle.name must not be empty".to_string(),
            ));
        }

        // Setup template variables
        let mut vars = Vars::new();
        vars.set("NAME", &config.name);
        vars.set("VERSION", &config.version);

        let filename = config
            .filename
            .map(|f| vars.expand(&f))
            .unwrap_or_else(|| format!("{}-{}", config.name, config.version));

        Ok(Manifest {
            name: config.name,
            version: config.version,
            filename,
        })
    }

    /// File name of the archive this bundle produces
    pub fn archive_filename(&self) -> String {
        format!("{}.tar.gz", self.filename)
    }
}
