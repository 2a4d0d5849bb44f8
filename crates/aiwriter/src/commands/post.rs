//! Post commands

use aiwriter_pipeline::actions::PostInput;
use anyhow::Result;
use colored::Colorize;

use super::read_content;
use crate::cli::ContentSource;
use crate::context::AppContext;
use crate::output;

/// Convert HTML to blocks and store it as a post
pub fn create(
    ctx: &AppContext,
    title: String,
    source: ContentSource,
    status: String,
    json: bool,
) -> Result<()> {
    let content = read_content(source)?;
    let input = PostInput {
        title,
        content,
        status,
    };
    let created = output::report(ctx.actions().create_post(&input), json)?;

    if json {
        output::print_success(&created)
    } else {
        println!("{} {}", "✓".green(), created.message);
        println!("  ID:     {}", created.post_id);
        println!("  Status: {}", created.status);
        println!("  Edit:   {}", created.edit_url.cyan());
        Ok(())
    }
}
