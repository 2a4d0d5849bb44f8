//! Save command - store content in the local library

use anyhow::Result;
use colored::Colorize;

use super::read_content;
use crate::cli::ContentSource;
use crate::context::AppContext;
use crate::output;

pub fn run(
    ctx: &AppContext,
    title: Option<String>,
    source: ContentSource,
    json: bool,
) -> Result<()> {
    let content = read_content(source)?;
    let saved = output::report(ctx.actions().save_content(title.as_deref(), &content), json)?;

    if json {
        output::print_success(&saved)
    } else {
        println!("{} {}", "✓".green(), saved.message);
        println!("  #{} {}", saved.id, saved.title);
        Ok(())
    }
}
