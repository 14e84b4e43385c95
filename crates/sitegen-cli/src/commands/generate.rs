use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use serde::Serialize;
use sitegen_config::SiteConfig;
use sitegen_core::{
    validate, Alumnus, BoardMember, ContactInfo, Domain, ParseMode, Record, Sponsor, Team,
};
use sitegen_render::{alumni_page, association_page, sponsors_page, teams_page, Chrome};
use sitegen_store::paths::display_name;
use sitegen_store::{load_domain, read_record, replace_page, write_page, ParsedFile};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct FileWarning {
    pub file: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub domain: Domain,
    pub output: PathBuf,
    pub files: Vec<String>,
    pub rendered: usize,
    pub skipped: Vec<String>,
    pub warnings: Vec<FileWarning>,
    pub written: bool,
}

/// Records that made it past validation, plus what was flagged on the way.
pub(crate) struct Screened {
    pub records: Vec<Record>,
    pub skipped: Vec<String>,
    pub warnings: Vec<FileWarning>,
}

/// Checks required fields file by file. Incomplete records are kept with a
/// warning, except in domains that drop them.
pub(crate) fn screen(domain: Domain, parsed: Vec<ParsedFile>) -> Screened {
    let mut screened = Screened {
        records: Vec::with_capacity(parsed.len()),
        skipped: Vec::new(),
        warnings: Vec::new(),
    };

    for ParsedFile { file, record } in parsed {
        info!(
            file = %file.name,
            name = record.field(domain.name_field()).unwrap_or("-"),
            "parsed {domain} record"
        );
        if let Err(err) = validate(domain, &record) {
            warn!(file = %file.name, "{err}");
            screened.warnings.push(FileWarning {
                file: file.name.clone(),
                message: err.to_string(),
            });
            if domain.drops_invalid() {
                warn!(file = %file.name, "skipping {domain} record");
                screened.skipped.push(file.name);
                continue;
            }
        }
        screened.records.push(record);
    }
    screened
}

/// Footer data for generated pages. Comes from the contact file when there
/// is one.
pub(crate) fn load_chrome(config: &SiteConfig) -> Result<Chrome> {
    let path = config.contact_data_file();
    if !path.is_file() {
        debug!(path = %path.display(), "no contact data, using default footer");
        return Ok(Chrome::default());
    }
    let record = read_record(&path, ParseMode::Simple)
        .with_context(|| format!("read contact data {}", path.display()))?;
    Ok(Chrome::from_contact(&ContactInfo::from_record(&record)))
}

fn render_page(domain: Domain, records: &[Record], seed: u64, chrome: &Chrome) -> String {
    match domain {
        Domain::Alumni => alumni_page(
            records.iter().map(Alumnus::from_record).collect(),
            seed,
            chrome,
        ),
        Domain::Board => association_page(
            records.iter().map(BoardMember::from_record).collect(),
            chrome,
        ),
        Domain::Sponsors => {
            let sponsors: Vec<Sponsor> = records.iter().map(Sponsor::from_record).collect();
            sponsors_page(&sponsors, chrome)
        }
        Domain::Teams => teams_page(records.iter().map(Team::from_record).collect(), chrome),
    }
}

fn write_output(domain: Domain, path: &Path, html: &str) -> Result<()> {
    let written = if domain == Domain::Sponsors {
        replace_page(path, html)
    } else {
        write_page(path, html)
    };
    written.with_context(|| format!("write {}", path.display()))
}

/// One generator run: list, parse, screen, render, write.
pub fn run_batch(ctx: &Context<'_>, domain: Domain) -> Result<BatchReport> {
    let config = ctx.config;
    let dir = config.data_dir(domain);
    let output = config.output_path(domain);
    debug!(dir = %dir.display(), output = %output.display(), "{domain} paths resolved");

    let parsed = load_domain(&dir, domain).with_context(|| format!("load {domain} data"))?;
    let mut report = BatchReport {
        domain,
        output,
        files: parsed.iter().map(|parsed| parsed.file.name.clone()).collect(),
        rendered: 0,
        skipped: Vec::new(),
        warnings: Vec::new(),
        written: false,
    };

    if parsed.is_empty() {
        info!(dir = %dir.display(), "no {domain} data files found, nothing to generate");
        return Ok(report);
    }

    let Screened {
        records,
        skipped,
        warnings,
    } = screen(domain, parsed);
    let chrome = load_chrome(config)?;
    let html = render_page(domain, &records, config.shuffle_seed, &chrome);
    write_output(domain, &report.output, &html)?;
    info!(
        page = %display_name(&report.output),
        cards = records.len(),
        "generated {domain} page"
    );

    report.rendered = records.len();
    report.skipped = skipped;
    report.warnings = warnings;
    report.written = true;
    Ok(report)
}

pub(crate) fn print_batch(report: &BatchReport) {
    if !report.written {
        println!("{}: no data files, nothing written", report.domain);
        return;
    }
    println!(
        "{}: wrote {} ({} of {} files rendered)",
        report.domain,
        report.output.display(),
        report.rendered,
        report.files.len()
    );
    for warning in &report.warnings {
        println!("  warning: {}: {}", warning.file, warning.message);
    }
    for skipped in &report.skipped {
        println!("  skipped: {skipped}");
    }
}

pub fn generate(ctx: &Context<'_>, domain: Domain) -> Result<()> {
    let report = run_batch(ctx, domain)?;
    if ctx.json {
        return print_json(&report);
    }
    print_batch(&report);
    Ok(())
}
