//! Generate command - one completion request, optionally saved or posted

use aiwriter_pipeline::actions::{
    CreatedPost, GenerateInput, GeneratedContent, PostInput, SavedContent,
};
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use crate::cli::GenerateArgs;
use crate::context::AppContext;
use crate::output;

#[derive(Debug, Serialize)]
struct GenerateOutput {
    #[serde(flatten)]
    generated: GeneratedContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved: Option<SavedContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    post: Option<CreatedPost>,
}

pub fn run(ctx: &AppContext, args: GenerateArgs) -> Result<()> {
    let actions = ctx.actions();
    let input = GenerateInput {
        topic: args.topic,
        content_type: args.content_type,
        length: args.length,
        tone: args.tone,
    };

    let generated = output::report(actions.generate(&input), args.json)?;

    // Auto-save already stored it
    let saved = if args.save && generated.saved_id.is_none() {
        let saved = actions.save_content(Some(&generated.title), &generated.content);
        Some(output::report(saved, args.json)?)
    } else {
        None
    };

    let post = if args.create_post {
        let created = actions.create_post(&PostInput {
            title: generated.title.clone(),
            content: generated.content.clone(),
            status: args.status,
        });
        Some(output::report(created, args.json)?)
    } else {
        None
    };

    let out = GenerateOutput {
        generated,
        saved,
        post,
    };

    if args.json {
        output::print_success(&out)
    } else {
        print_human(&out);
        Ok(())
    }
}

fn print_human(out: &GenerateOutput) {
    let generated = &out.generated;
    println!("{}", generated.title.bold());
    println!();
    println!("{}", generated.content);
    println!();

    let tokens = generated
        .usage_tokens
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!("Words: {}  Tokens: {}", generated.word_count, tokens);

    if let Some(id) = generated.saved_id {
        println!("{} Auto-saved to library as #{}", "✓".green(), id);
    }
    if let Some(saved) = &out.saved {
        println!("{} {} (#{})", "✓".green(), saved.message, saved.id);
    }
    if let Some(post) = &out.post {
        println!("{} {}", "✓".green(), post.message);
        println!("  Edit: {}", post.edit_url);
    }

    println!("{} {}", "✓".green(), generated.message);
}
