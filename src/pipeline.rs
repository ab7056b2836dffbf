use std::path::{Path, PathBuf};

use log::debug;

use crate::receipt::{FormatError, Locale, ReceiptRecord, StatementRow};
use crate::render::{output_path, RenderError, RenderFields, RenderReceipt, Renderer};

/// Builds every record before anything is rendered, so a malformed row stops
/// the run with no receipt written.
pub fn receipts_from_statement(rows: &[StatementRow], locale: Locale) -> Result<Vec<ReceiptRecord>, FormatError> {
    rows.iter()
        .map(|row| {
            debug!("building receipt for `{}`", row.description);
            row.to_receipt(locale)
        })
        .collect()
}

pub struct Generator {
    renderer: Renderer,
    output_dir: PathBuf,
    signatures: [PathBuf; 2],
    locale: Locale,
}

impl Generator {
    pub fn new(renderer: Renderer, output_dir: impl Into<PathBuf>, signatures: [PathBuf; 2], locale: Locale) -> Generator {
        Generator {
            renderer,
            output_dir: output_dir.into(),
            signatures,
            locale,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn generate(&self, record: &ReceiptRecord) -> Result<PathBuf, RenderError> {
        let fields = RenderFields::build(record, self.locale, &self.signatures)?;
        let target = output_path(&self.output_dir, record)?;
        self.renderer.render(&fields, &target)
    }

    /// Renders in input order and stops at the first failure. Files already
    /// written are left in place.
    pub fn generate_all(&self, records: &[ReceiptRecord]) -> Result<Vec<PathBuf>, RenderError> {
        records.iter().map(|record| self.generate(record)).collect()
    }
}
