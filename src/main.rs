use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use quittance::data::{self, Descriptor};
use quittance::pipeline::{receipts_from_statement, Generator};
use quittance::receipt::{Locale, ReceiptRecord};
use quittance::render::{PdfRenderer, Renderer, Template, TexRenderer};
use quittance::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "quittance", version, about = "Generate rent receipts from a bank statement or a room descriptor")]
struct Cli {
    /// Settings file (defaults to ./quittance.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving the receipts
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Write the filled LaTeX source instead of compiling a PDF
    #[arg(long)]
    tex_only: bool,

    /// Build and log the receipts without rendering them
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// One receipt per rent row of a semicolon-separated statement
    Statement {
        csv: PathBuf,
    },

    /// One receipt per month listed in a YAML room descriptor
    Descriptor {
        yaml: PathBuf,

        /// Room number (defaults to `chambre`, then to the digits ending the file name)
        #[arg(long)]
        room: Option<u32>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(output_dir) = cli.output_dir {
        settings.output_dir = output_dir;
    }

    let locale = Locale::default();

    match cli.command {
        Command::Statement { csv } => {
            let rows = data::load_statement(&csv).with_context(|| format!("error in {}", csv.display()))?;
            let records = receipts_from_statement(&rows, locale).with_context(|| format!("error in {}", csv.display()))?;
            emit(&settings, &records, locale, cli.tex_only, cli.dry_run)?;
            info!("sum of rent receipts is {} €", data::rent_income_total(&rows));
        },

        Command::Descriptor { yaml, room } => {
            let records = Descriptor::load(&yaml, room, locale).with_context(|| format!("error in {}", yaml.display()))?;
            emit(&settings, &records, locale, cli.tex_only, cli.dry_run)?;
        },
    }

    Ok(())
}

fn emit(settings: &Settings, records: &[ReceiptRecord], locale: Locale, tex_only: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        for record in records {
            info!(
                "{}/{} room {} {}: {} (charge {})",
                record.month(),
                record.year(),
                record.room_number(),
                record.tenant(),
                record.paid_amount(),
                record.charge_amount()
            );
        }
        return Ok(());
    }

    let template = Template::load(&settings.template).with_context(|| format!("read {}", settings.template.display()))?;
    let renderer: Renderer = if tex_only {
        TexRenderer::new(template).into()
    } else {
        PdfRenderer::new(template, settings.builder.clone(), settings.builder_args.clone()).into()
    };

    let generator = Generator::new(renderer, settings.output_dir.clone(), settings.signature_paths()?, locale);
    let written = generator.generate_all(records)?;
    info!("{} receipt(s) written to {}", written.len(), generator.output_dir().display());

    Ok(())
}
