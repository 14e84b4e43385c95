use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use serde::Serialize;
use sitegen_core::{ContactInfo, ParseMode};
use sitegen_render::{contact_page, footer_html, replace_footer};
use sitegen_store::paths::display_name;
use sitegen_store::{patch_page, read_record, write_page, PatchOutcome};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactReport {
    pub patched: Vec<PathBuf>,
    pub unchanged: Vec<PathBuf>,
    pub missing: Vec<PathBuf>,
    pub contact_page: PathBuf,
}

pub fn run_contact(ctx: &Context<'_>) -> Result<ContactReport> {
    let config = ctx.config;
    let data_file = config.contact_data_file();
    let record = read_record(&data_file, ParseMode::Simple)
        .with_context(|| format!("read contact data {}", data_file.display()))?;
    if record.is_empty() {
        warn!(path = %data_file.display(), "contact data has no fields, using defaults");
    } else {
        info!(fields = record.len(), "parsed contact data");
    }

    let info = ContactInfo::from_record(&record);
    let footer = footer_html(info.association_email());
    let mut report = ContactReport::default();

    for target in config.footer_target_paths() {
        let outcome = patch_page(&target, |html| replace_footer(html, &footer))
            .with_context(|| format!("update footer in {}", target.display()))?;
        match outcome {
            PatchOutcome::Patched => {
                info!(page = %display_name(&target), "updated footer");
                report.patched.push(target);
            }
            PatchOutcome::Unchanged => {
                info!(page = %display_name(&target), "no footer block found, left as is");
                report.unchanged.push(target);
            }
            PatchOutcome::Missing => {
                debug!(page = %target.display(), "footer target not generated yet, skipping");
                report.missing.push(target);
            }
        }
    }

    let page = config.contact_output_path();
    write_page(&page, &contact_page(&info))
        .with_context(|| format!("write {}", page.display()))?;
    info!(page = %display_name(&page), "generated contact page");
    report.contact_page = page;
    Ok(report)
}

pub(crate) fn print_contact(report: &ContactReport) {
    println!(
        "contact: wrote {}, updated {} footer(s)",
        report.contact_page.display(),
        report.patched.len()
    );
    for path in &report.unchanged {
        println!("  no footer block: {}", path.display());
    }
}

pub fn update_contact(ctx: &Context<'_>) -> Result<()> {
    let report = run_contact(ctx)?;
    if ctx.json {
        return print_json(&report);
    }
    print_contact(&report);
    Ok(())
}
