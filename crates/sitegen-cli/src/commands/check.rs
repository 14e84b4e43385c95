use crate::commands::generate::{screen, FileWarning, Screened};
use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use serde::Serialize;
use sitegen_core::{Domain, ParseMode};
use sitegen_store::{load_domain, read_record};
use std::path::PathBuf;

#[derive(Debug, Serialize)]
pub struct DomainCheck {
    pub domain: Domain,
    pub files: usize,
    pub valid: usize,
    pub skipped: Vec<String>,
    pub warnings: Vec<FileWarning>,
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub domains: Vec<DomainCheck>,
    pub contact_file: PathBuf,
    pub contact_fields: Option<usize>,
}

impl CheckReport {
    fn warning_count(&self) -> usize {
        self.domains.iter().map(|check| check.warnings.len()).sum()
    }
}

fn check_domain(ctx: &Context<'_>, domain: Domain) -> Result<DomainCheck> {
    let dir = ctx.config.data_dir(domain);
    let parsed = load_domain(&dir, domain).with_context(|| format!("load {domain} data"))?;
    let files = parsed.len();
    let Screened { skipped, warnings, .. } = screen(domain, parsed);
    Ok(DomainCheck {
        domain,
        files,
        valid: files - warnings.len(),
        skipped,
        warnings,
    })
}

/// Parses and validates every data file. Nothing is written; warnings do
/// not fail the run.
pub fn check(ctx: &Context<'_>) -> Result<()> {
    let domains = Domain::ALL
        .iter()
        .map(|&domain| check_domain(ctx, domain))
        .collect::<Result<Vec<_>>>()?;

    let contact_file = ctx.config.contact_data_file();
    let contact_fields = if contact_file.is_file() {
        let record = read_record(&contact_file, ParseMode::Simple)
            .with_context(|| format!("read contact data {}", contact_file.display()))?;
        Some(record.len())
    } else {
        None
    };

    let report = CheckReport {
        domains,
        contact_file,
        contact_fields,
    };

    if ctx.json {
        return print_json(&report);
    }
    for check in &report.domains {
        println!(
            "{}: {} file(s), {} valid",
            check.domain, check.files, check.valid
        );
        for warning in &check.warnings {
            println!("  warning: {}: {}", warning.file, warning.message);
        }
    }
    match report.contact_fields {
        Some(fields) => println!("contact: {fields} field(s)"),
        None => println!("contact: {} not found", report.contact_file.display()),
    }
    println!("{} warning(s)", report.warning_count());
    Ok(())
}
