// * The Refinery: turns fetched HTML into cleaned token text.

pub mod text_cleaner;
pub mod visible_text;

// * Re-exports for convenient access
pub use text_cleaner::{clean_text, TextCleaner};
pub use visible_text::extract_visible_text;

/// Runs the full text pass over one page: visible text, then token cleaning.
pub fn refine_page(html: &str, cleaner: &TextCleaner) -> String {
    let visible = extract_visible_text(html);
    cleaner.clean(&visible)
}
