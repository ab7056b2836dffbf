use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_CONFIG: &str = "quittance.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub template: PathBuf,
    pub builder: String,
    pub builder_args: Vec<String>,
    /// Owner signature images, resolved against the working directory.
    pub signatures: [PathBuf; 2],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("quittances_out"),
            template: PathBuf::from("template.tex"),
            builder: "pdflatex".to_string(),
            builder_args: vec!["-interaction=nonstopmode".to_string(), "-halt-on-error".to_string()],
            signatures: [
                PathBuf::from("image/Signature_proprietaire1.jpg"),
                PathBuf::from("image/Signature_proprietaire2.jpg"),
            ],
        }
    }
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Settings> {
        toml::from_str(s).context("parse settings")
    }

    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Settings> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG);
                if !default.exists() {
                    return Ok(Settings::default());
                }
                default
            },
        };

        let s = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
        Settings::from_toml(&s).with_context(|| format!("in {}", path.display()))
    }

    pub fn signature_paths(&self) -> Result<[PathBuf; 2]> {
        let cwd = env::current_dir().context("current directory")?;
        Ok(self.signatures.clone().map(|path| if path.is_absolute() { path } else { cwd.join(path) }))
    }
}
