use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder, StatusCode};
use scraper::{Html, Selector};
use std::time::Duration;

// Shared client; page fetches get a hard 5 second budget.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client")
});

// Static selectors to avoid recompiling them each time
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("Failed to parse title selector"));
static META_DESC_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("meta[name='description']").expect("Failed to parse meta selector")
});

/// Fetches `url` and reduces the page to `"{title}. {description}"`.
/// Empty string means "no usable content": transport failures, timeouts and
/// any status other than 200 all collapse into it, nothing surfaces as an
/// error here.
pub async fn extract(url: &str, strip_brand: bool) -> String {
    let response = match CLIENT.get(url).send().await {
        Ok(response) => response,
        Err(_) => return String::new(),
    };
    if response.status() != StatusCode::OK {
        return String::new();
    }
    let html = match response.text().await {
        Ok(html) => html,
        Err(_) => return String::new(),
    };
    page_content(&html, strip_brand)
}

/// Reads the document title and the `<meta name="description">` content out
/// of `html` and joins them. Both absent yields the empty string.
pub fn page_content(html: &str, strip_brand: bool) -> String {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default();
    let title = if strip_brand {
        clean_title(&title)
    } else {
        title.trim().to_string()
    };

    let description = document
        .select(&META_DESC_SELECTOR)
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or("");

    if title.is_empty() && description.is_empty() {
        return String::new();
    }
    format!("{title}. {description}").trim().to_string()
}

/// Keeps the part of a page title before the first dash separator, since web
/// publishing tools commonly append "Site Name" after one. This also cuts
/// titles whose primary content contains a dash ("Spider-Man Lab" becomes
/// "Spider"), a known limitation of the heuristic.
pub fn clean_title(title: &str) -> String {
    match title.find(['-', '\u{2013}', '\u{2014}']) {
        Some(idx) => title[..idx].trim().to_string(),
        None => title.trim().to_string(),
    }
}
