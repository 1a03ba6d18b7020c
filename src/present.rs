use serde_json::Value;

use crate::error::{AppError, Result};
use crate::prompt::PromptStyle;

/// Turns a raw model response body into display lines for the chosen style.
/// A body that is not JSON is an invocation failure; a well-formed body with
/// missing fields degrades to the style's placeholder text instead.
pub fn present(style: PromptStyle, body: &str) -> Result<Vec<String>> {
    let text = generated_text(body, style.placeholder())?;
    Ok(match style {
        PromptStyle::Tagline => vec![strip_wrapping_quotes(&text)],
        PromptStyle::FewShotTitles => title_lines(&text),
        PromptStyle::PlainTitles => vec![text],
    })
}

fn generated_text(body: &str, placeholder: &str) -> Result<String> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| AppError::LlmError(format!("Invalid response format from model: {e}")))?;
    // A missing level at any depth indexes to null and falls through to the
    // placeholder.
    let text = json["output"]["message"]["content"][0]["text"]
        .as_str()
        .unwrap_or(placeholder);
    Ok(text.to_string())
}

/// Removes one pair of wrapping double quotes plus surrounding whitespace.
fn strip_wrapping_quotes(text: &str) -> String {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    inner.trim().to_string()
}

/// Splits the block into display lines, dropping whitespace-only lines and
/// leading bullet markers (hyphens, bullets, list numbers).
fn title_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            if line.trim().is_empty() {
                return None;
            }
            let cleaned = line
                .trim_start_matches(|c: char| {
                    matches!(c, '-' | '\u{2022}' | '.' | ' ') || c.is_ascii_digit()
                })
                .trim();
            if cleaned.is_empty() {
                None
            } else {
                Some(cleaned.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_strips_wrapping_quotes() {
        let body = r#"{"output":{"message":{"content":[{"text":"\"Go Fast\""}]}}}"#;
        assert_eq!(present(PromptStyle::Tagline, body).unwrap(), vec!["Go Fast"]);
    }

    #[test]
    fn unquoted_tagline_is_only_trimmed() {
        let body = r#"{"output":{"message":{"content":[{"text":"  Go Fast  "}]}}}"#;
        assert_eq!(present(PromptStyle::Tagline, body).unwrap(), vec!["Go Fast"]);
    }

    #[test]
    fn missing_output_falls_back_to_placeholder() {
        assert_eq!(
            present(PromptStyle::Tagline, "{}").unwrap(),
            vec!["No tagline generated"]
        );
        assert_eq!(
            present(PromptStyle::FewShotTitles, "{}").unwrap(),
            vec!["No title ideas generated"]
        );
    }

    #[test]
    fn missing_intermediate_level_also_falls_back() {
        let body = r#"{"output":{"message":{}}}"#;
        assert_eq!(
            present(PromptStyle::Tagline, body).unwrap(),
            vec!["No tagline generated"]
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(present(PromptStyle::Tagline, "not json").is_err());
    }

    #[test]
    fn bullet_markers_are_stripped_per_line() {
        let body = serde_json::json!({
            "output": {"message": {"content": [
                {"text": "- Build Smarter\n   \n2. Ship Faster\n\u{2022} Think Bigger"}
            ]}}
        })
        .to_string();
        assert_eq!(
            present(PromptStyle::FewShotTitles, &body).unwrap(),
            vec!["Build Smarter", "Ship Faster", "Think Bigger"]
        );
    }

    #[test]
    fn lines_emptied_by_stripping_are_skipped() {
        let body = serde_json::json!({
            "output": {"message": {"content": [{"text": "1.\n- Build Smarter"}]}}
        })
        .to_string();
        assert_eq!(
            present(PromptStyle::FewShotTitles, &body).unwrap(),
            vec!["Build Smarter"]
        );
    }

    #[test]
    fn plain_style_keeps_the_raw_block() {
        let body = serde_json::json!({
            "output": {"message": {"content": [{"text": "- One\n- Two"}]}}
        })
        .to_string();
        assert_eq!(
            present(PromptStyle::PlainTitles, &body).unwrap(),
            vec!["- One\n- Two"]
        );
    }
}
