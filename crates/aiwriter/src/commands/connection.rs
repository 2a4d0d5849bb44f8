//! Test-connection command

use anyhow::Result;
use colored::Colorize;

use crate::context::AppContext;
use crate::output;

pub fn run(ctx: &AppContext, api_key: Option<String>, json: bool) -> Result<()> {
    let tested = output::report(ctx.actions().test_connection(api_key.as_deref()), json)?;

    if json {
        return output::print_success(&tested);
    }

    println!("{} {}", "✓".green(), tested.message);
    println!("  Models listed: {}", tested.model_info.total_models);
    for model in &tested.model_info.available_models {
        println!("  - {}", model);
    }
    Ok(())
}
