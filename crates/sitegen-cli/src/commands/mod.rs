use anyhow::Result;
use serde::Serialize;
use sitegen_config::SiteConfig;
use std::io::{self, Write};

pub mod all;
pub mod check;
pub mod completions;
pub mod contact;
pub mod generate;

pub struct Context<'a> {
    pub config: &'a SiteConfig,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
