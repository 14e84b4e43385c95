use crate::commands::contact::{print_contact, run_contact, ContactReport};
use crate::commands::generate::{print_batch, run_batch, BatchReport};
use crate::commands::{print_json, Context};
use anyhow::Result;
use serde::Serialize;
use sitegen_core::Domain;

#[derive(Debug, Serialize)]
pub struct AllReport {
    pub batches: Vec<BatchReport>,
    pub contact: ContactReport,
}

/// Generators in page order, then the contact update so every freshly
/// written page gets the current footer.
pub fn run_all(ctx: &Context<'_>) -> Result<()> {
    let batches = Domain::ALL
        .iter()
        .map(|&domain| run_batch(ctx, domain))
        .collect::<Result<Vec<_>>>()?;
    let contact = run_contact(ctx)?;
    let report = AllReport { batches, contact };

    if ctx.json {
        return print_json(&report);
    }
    for batch in &report.batches {
        print_batch(batch);
    }
    print_contact(&report.contact);
    Ok(())
}
