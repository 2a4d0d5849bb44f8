//! Library commands - browse saved content

use aiwriter_core::library::{ContentEntry, ContentStore};
use anyhow::Result;
use colored::Colorize;

use crate::context::AppContext;
use crate::output;

pub fn list(ctx: &AppContext, json: bool) -> Result<()> {
    let entries = output::report(ctx.library.list(), json)?;

    if json {
        return output::print_success(&entries);
    }

    if entries.is_empty() {
        println!("Library is empty.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{:>4}  {}  {}",
            format!("#{}", entry.id).cyan(),
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.title
        );
    }
    Ok(())
}

pub fn show(ctx: &AppContext, id: u64, json: bool) -> Result<()> {
    let entry = output::report(ctx.library.get(id), json)?;

    if json {
        output::print_success(&entry)
    } else {
        print_entry(&entry);
        Ok(())
    }
}

fn print_entry(entry: &ContentEntry) {
    println!("{} {}", format!("#{}", entry.id).cyan(), entry.title.bold());
    println!("Saved: {}", entry.created_at.to_rfc3339());
    println!();
    println!("{}", entry.content);
}
