//! Post-processing of generated HTML

pub mod format;
pub mod text;
pub mod title;

pub use format::format_content;
pub use text::{plain_text, sanitize_text, strip_tags, word_count};
pub use title::{DEFAULT_TITLE, MAX_TITLE_CHARS, fallback_title, normalize_title};
