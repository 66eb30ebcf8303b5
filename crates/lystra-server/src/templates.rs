//! HTML renderer for the home and list pages.
//!
//! Pure functions producing complete, deterministic documents. The
//! integration tests compare handler output against these functions
//! byte for byte, so every page served goes through here.

use lystra_core::{Item, ListId};

/// Render the home page: an empty new-list form, no items.
pub fn home_page() -> String {
    let body = format!(
        "<h1>Start a new To-Do list</h1>\n{}\n",
        new_item_form("/lists/new")
    );
    page("To-Do lists", &body)
}

/// Render a list detail page: one table row per item, in the order
/// given, plus the add-item form for that list.
pub fn list_page(list_id: ListId, items: &[Item]) -> String {
    let mut rows = String::new();
    for (position, item) in items.iter().enumerate() {
        rows.push_str(&format!(
            "<tr><td>{}: {}</td></tr>\n",
            position + 1,
            escape(&item.text)
        ));
    }
    let body = format!(
        "<h1>Your To-Do list</h1>\n\
         <table id=\"id_list_table\">\n{rows}</table>\n{}\n",
        new_item_form(&format!("/lists/{list_id}/add_item"))
    );
    page("To-Do lists", &body)
}

fn new_item_form(action: &str) -> String {
    format!(
        "<form method=\"POST\" action=\"{action}\">\n\
         <input name=\"item_text\" id=\"id_new_item\" placeholder=\"Enter a to-do item\" />\n\
         </form>"
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head>\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         {body}</body>\n\
         </html>\n"
    )
}

/// Escape text for safe interpolation into HTML element content.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
