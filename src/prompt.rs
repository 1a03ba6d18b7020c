use std::str::FromStr;

use crate::error::AppError;

/// Prompt template strategy, fixed per deployment through config. The three
/// styles share the whole pipeline and differ only in the composed prompt
/// and how the model output is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Tagline,
    FewShotTitles,
    PlainTitles,
}

impl PromptStyle {
    /// The tagline style passes the raw page title through; the multi-title
    /// styles trim the trailing site-brand suffix first.
    pub fn strips_brand_suffix(self) -> bool {
        !matches!(self, PromptStyle::Tagline)
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            PromptStyle::Tagline => "No tagline generated",
            PromptStyle::FewShotTitles | PromptStyle::PlainTitles => "No title ideas generated",
        }
    }

    pub fn max_tokens(self) -> u32 {
        match self {
            PromptStyle::Tagline => 60,
            PromptStyle::FewShotTitles | PromptStyle::PlainTitles => 300,
        }
    }

    pub fn temperature(self) -> f32 {
        0.8
    }
}

impl FromStr for PromptStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tagline" => Ok(PromptStyle::Tagline),
            "few-shot-titles" => Ok(PromptStyle::FewShotTitles),
            "plain-titles" => Ok(PromptStyle::PlainTitles),
            other => Err(AppError::ConfigError(format!("Unknown prompt style: {other}"))),
        }
    }
}

/// What the prompt is composed from: free-text product input or scraped
/// page content.
pub enum PromptSource {
    Product { product: String, theme: String },
    Page { content: String },
}

impl PromptSource {
    fn content_text(&self) -> String {
        match self {
            PromptSource::Page { content } => content.clone(),
            PromptSource::Product { product, theme } if theme.is_empty() => product.clone(),
            PromptSource::Product { product, theme } => format!("{product}. Theme: {theme}"),
        }
    }
}

const FEW_SHOT_PREAMBLE: &str = "Suggest 3 to 5 catchy title ideas for the page content below. \
Ignore branding or cloud provider names unless they appear in the content itself. \
Return one title per line.";

const FEW_SHOT_EXAMPLE: &str = "Content: 'Protein folding at scale. Distributed compute for structural biology teams.'\n\
Titles:\n\
- Folding Proteins, Unfolding Possibilities\n\
- Structure at Scale\n\
- Biology Meets Big Compute";

/// Pure string composition; no state is read or written.
pub fn build(style: PromptStyle, source: &PromptSource) -> String {
    match (style, source) {
        (PromptStyle::Tagline, PromptSource::Product { product, theme }) => {
            let mut full_prompt =
                format!("Generate a catchy tagline for the product/idea: '{product}'");
            if !theme.is_empty() {
                full_prompt.push_str(&format!(" with the theme/style: '{theme}'"));
            }
            full_prompt
        }
        (PromptStyle::Tagline, PromptSource::Page { content }) => {
            format!("Generate a catchy tagline for the following page content: '{content}'")
        }
        (PromptStyle::FewShotTitles, source) => {
            format!(
                "{FEW_SHOT_PREAMBLE}\n\n{FEW_SHOT_EXAMPLE}\n\nContent: '{}'\nTitles:\n",
                source.content_text()
            )
        }
        (PromptStyle::PlainTitles, source) => {
            format!(
                "Suggest 3 to 5 catchy title ideas derived from the following page content, ignoring any site branding: '{}'",
                source.content_text()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_prompt_from_product() {
        let source = PromptSource::Product {
            product: "solar kettle".into(),
            theme: String::new(),
        };
        assert_eq!(
            build(PromptStyle::Tagline, &source),
            "Generate a catchy tagline for the product/idea: 'solar kettle'"
        );
    }

    #[test]
    fn tagline_prompt_appends_theme() {
        let source = PromptSource::Product {
            product: "solar kettle".into(),
            theme: "retro".into(),
        };
        assert_eq!(
            build(PromptStyle::Tagline, &source),
            "Generate a catchy tagline for the product/idea: 'solar kettle' with the theme/style: 'retro'"
        );
    }

    #[test]
    fn tagline_prompt_from_page_content() {
        let source = PromptSource::Page {
            content: "Acme Portal. Lab tooling.".into(),
        };
        assert_eq!(
            build(PromptStyle::Tagline, &source),
            "Generate a catchy tagline for the following page content: 'Acme Portal. Lab tooling.'"
        );
    }

    #[test]
    fn few_shot_prompt_ends_with_open_titles_list() {
        let source = PromptSource::Page {
            content: "Acme Portal.".into(),
        };
        let prompt = build(PromptStyle::FewShotTitles, &source);
        assert!(prompt.contains("Content: 'Acme Portal.'"));
        assert!(prompt.ends_with("Titles:\n"));
        // The worked example comes before the real content.
        assert!(prompt.find("Folding Proteins").unwrap() < prompt.find("Acme Portal").unwrap());
    }

    #[test]
    fn plain_prompt_mentions_the_branding_rule() {
        let source = PromptSource::Page {
            content: "Acme Portal.".into(),
        };
        let prompt = build(PromptStyle::PlainTitles, &source);
        assert!(prompt.contains("'Acme Portal.'"));
        assert!(prompt.contains("ignoring any site branding"));
    }

    #[test]
    fn multi_title_styles_accept_product_text_as_content() {
        let source = PromptSource::Product {
            product: "solar kettle".into(),
            theme: "retro".into(),
        };
        let prompt = build(PromptStyle::PlainTitles, &source);
        assert!(prompt.contains("'solar kettle. Theme: retro'"));
    }

    #[test]
    fn styles_parse_from_config_names() {
        assert_eq!("tagline".parse::<PromptStyle>().unwrap(), PromptStyle::Tagline);
        assert_eq!(
            "few-shot-titles".parse::<PromptStyle>().unwrap(),
            PromptStyle::FewShotTitles
        );
        assert_eq!(
            "plain-titles".parse::<PromptStyle>().unwrap(),
            PromptStyle::PlainTitles
        );
        assert!("fancy".parse::<PromptStyle>().is_err());
    }
}
