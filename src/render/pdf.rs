use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use super::{RenderError, RenderFields, RenderReceipt, Template};

const BUILD_DIR: &str = ".build";
const BUILDER_OUTPUT_TAIL: usize = 20;

/// Fills the template and compiles it with an external LaTeX builder.
pub struct PdfRenderer {
    template: Template,
    builder: String,
    builder_args: Vec<String>,
}

impl PdfRenderer {
    pub fn new(template: Template, builder: impl Into<String>, builder_args: Vec<String>) -> PdfRenderer {
        PdfRenderer {
            template,
            builder: builder.into(),
            builder_args,
        }
    }
}

impl RenderReceipt for PdfRenderer {
    fn render(&self, fields: &RenderFields, target: &Path) -> Result<PathBuf, RenderError> {
        let latex = self.template.fill(fields)?;

        let parent = target.parent().unwrap_or_else(|| Path::new("."));
        let build_dir = parent.join(BUILD_DIR);
        fs::create_dir_all(&build_dir)?;

        let tex_path = build_dir.join(target.with_extension("tex").file_name().unwrap_or_default());
        fs::write(&tex_path, latex)?;

        debug!("running {} on {}", self.builder, tex_path.display());
        let output = Command::new(&self.builder)
            .args(&self.builder_args)
            .arg(format!("-output-directory={}", build_dir.display()))
            .arg(&tex_path)
            .output()?;

        if !output.status.success() {
            let stdout = String::from_utf8_lossy(&output.stdout);
            let lines: Vec<&str> = stdout.lines().collect();
            return Err(RenderError::Builder {
                builder: self.builder.clone(),
                status: output.status.to_string(),
                output: lines[lines.len().saturating_sub(BUILDER_OUTPUT_TAIL)..].join("\n"),
            });
        }

        fs::rename(tex_path.with_extension("pdf"), target)?;
        info!("saved {}", target.display());

        Ok(target.to_path_buf())
    }
}

/// Writes the filled template next to the target instead of compiling it.
pub struct TexRenderer {
    template: Template,
}

impl TexRenderer {
    pub fn new(template: Template) -> TexRenderer {
        TexRenderer { template }
    }
}

impl RenderReceipt for TexRenderer {
    fn render(&self, fields: &RenderFields, target: &Path) -> Result<PathBuf, RenderError> {
        let tex_path = target.with_extension("tex");
        fs::write(&tex_path, self.template.fill(fields)?)?;
        info!("saved {}", tex_path.display());

        Ok(tex_path)
    }
}
