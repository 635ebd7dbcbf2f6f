use scraper::{Html, Selector};

/// Page URL for a target name. The name is trimmed and percent-encoded so
/// non-ASCII and reserved characters cannot break out of the path segment.
pub fn page_url(base: &str, target_name: &str) -> String {
    format!("{}{}", base, urlencoding::encode(target_name.trim()))
}

/// Return the text of the first `<span>` in document order whose `lang`
/// attribute is exactly `en` (the infobox marker). Blank text counts as absent.
pub fn extract_english_name(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    // `[lang="en"]` would match case-insensitively for HTML documents, so filter by hand.
    let sel = Selector::parse("span[lang]").ok()?;
    let element = document
        .select(&sel)
        .find(|el| el.value().attr("lang") == Some("en"))?;

    let text: String = element.text().collect();
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
