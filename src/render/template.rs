//! LaTeX receipt templates with `\VAR{name}` placeholders.

use std::fs;
use std::path::Path;

use super::{FieldValue, RenderError, RenderFields};

const OPEN: &str = "\\VAR{";
const CLOSE: char = '}';

#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Template {
        Template { source: source.into() }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Template, RenderError> {
        Ok(Template::new(fs::read_to_string(path)?))
    }

    /// Substitutes every placeholder. Text is escaped for LaTeX; paths are
    /// written as-is with forward slashes.
    pub fn fill(&self, fields: &RenderFields) -> Result<String, RenderError> {
        let mut out = String::with_capacity(self.source.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            rest = &rest[start + OPEN.len()..];

            let end = rest.find(CLOSE).ok_or(RenderError::UnclosedPlaceholder)?;
            let key = rest[..end].trim();
            match fields.get(key) {
                Some(FieldValue::Text(text)) => out.push_str(&latex_escape(text)),
                Some(FieldValue::Path(path)) => out.push_str(&path.to_string_lossy().replace('\\', "/")),
                None => return Err(RenderError::UnknownPlaceholder(key.to_string())),
            }
            rest = &rest[end + 1..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

pub fn latex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            },
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    out
}
