//! CLI command structure using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "aiwriter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log pipeline decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings directory (AIWRITER_CONFIG_DIR takes precedence)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate content for a topic
    Generate(GenerateArgs),

    /// Save content to the local library
    Save {
        /// Library entry title
        #[arg(long)]
        title: Option<String>,

        #[command(flatten)]
        content: ContentSource,

        #[arg(long)]
        json: bool,
    },

    /// Post management
    #[command(subcommand)]
    Post(PostCommands),

    /// Check the API key against the model listing
    TestConnection {
        /// Key to test instead of the configured one
        #[arg(long, value_name = "KEY")]
        api_key: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show or change settings
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Browse saved content
    #[command(subcommand)]
    Library(LibraryCommands),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// What to write about (at least 3 characters)
    #[arg(long)]
    pub topic: String,

    /// Content type, e.g. blog-post, how-to-guide, product-description
    #[arg(long = "type", default_value = "blog-post", value_name = "TYPE")]
    pub content_type: String,

    /// short, medium or long
    #[arg(long, default_value = "medium")]
    pub length: String,

    /// Writing tone (defaults to the default_tone setting)
    #[arg(long)]
    pub tone: Option<String>,

    /// Save the result to the library
    #[arg(long)]
    pub save: bool,

    /// Turn the result into a post
    #[arg(long)]
    pub create_post: bool,

    /// Status for --create-post: draft, publish or private
    #[arg(long, default_value = "draft", requires = "create_post")]
    pub status: String,

    #[arg(long)]
    pub json: bool,
}

/// Inline content or a file to read it from
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct ContentSource {
    /// HTML content
    #[arg(long)]
    pub content: Option<String>,

    /// Read HTML content from a file
    #[arg(long, value_name = "FILE")]
    pub content_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// Create a post from HTML content
    Create {
        #[arg(long)]
        title: String,

        #[command(flatten)]
        content: ContentSource,

        /// draft, publish or private
        #[arg(long, default_value = "draft")]
        status: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show all settings (the API key is masked)
    Show {
        #[arg(long)]
        json: bool,
    },

    /// Print one setting
    Get {
        /// Setting name, e.g. max_tokens
        key: String,
    },

    /// Change one setting
    Set { key: String, value: String },
}

#[derive(Subcommand)]
pub enum LibraryCommands {
    /// List saved entries, newest first
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one entry
    Show {
        id: u64,

        #[arg(long)]
        json: bool,
    },
}
