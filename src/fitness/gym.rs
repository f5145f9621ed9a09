use std::time::Duration;

use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::{config, error::ToolError, utils};

/// Some institutional sites reject unknown clients, so the scrape
/// identifies as a desktop browser.
const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Page text is capped before handing it to the model.
pub const SCHEDULE_TEXT_LIMIT: usize = 3000;

/// Fetches the fitness-center announcements page and extracts its text.
///
/// The page's main content container (`div.mcont` in the university CMS)
/// is preferred; when it is absent the whole document body is used
/// instead. Script and style contents are excluded either way, and the
/// result is truncated to [`SCHEDULE_TEXT_LIMIT`] characters.
pub async fn fetch_schedule_text() -> Result<String, ToolError> {
    let client = Client::builder().timeout(Duration::from_secs(10)).build()?;
    let response = client
        .get(config::gym_schedule_url())
        .header("User-Agent", DESKTOP_USER_AGENT)
        .send()
        .await?
        .error_for_status()?;

    let html = response.text().await?;
    Ok(extract_schedule_text(&html))
}

/// Pure extraction step, separated from the fetch so it stays testable.
pub fn extract_schedule_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let container = Selector::parse("div.mcont")
        .ok()
        .and_then(|sel| document.select(&sel).next());
    let fallback = Selector::parse("body")
        .ok()
        .and_then(|sel| document.select(&sel).next());

    let text = match container.or(fallback) {
        Some(element) => element_text(element),
        None => String::new(),
    };

    utils::truncate_chars(&text, SCHEDULE_TEXT_LIMIT)
}

/// Collects the visible text of an element, one trimmed line per text
/// node, skipping anything inside `<script>` or `<style>`.
fn element_text(element: ElementRef) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in element.descendants() {
        if let Some(text) = node.value().as_text() {
            let hidden = node
                .ancestors()
                .filter_map(ElementRef::wrap)
                .any(|el| matches!(el.value().name(), "script" | "style"));
            if hidden {
                continue;
            }

            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed);
            }
        }
    }

    parts.join("\n")
}
