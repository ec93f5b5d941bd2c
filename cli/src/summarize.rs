//! Outline generation through the Gemini API.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

const EDITOR_PROMPT: &str = "\
You are the Chief Editor at The Economist. Read the full magazine text below.
Your job is to produce a structured summary that mirrors the magazine's own sections and article headlines.

SECTION & HEADLINE RULES:
- Use the Table of Contents within the document to identify every section and the article headlines inside each section.
- Preserve the exact section names and article headlines from the magazine. Do not invent new ones.
- Keep the original section order. Under each section, list every headline in the order it appears.

SUMMARY RULES:
- Under each headline, write a concise summary of the corresponding article.
- Priority sections ('The world this week', 'Britain', 'Business', 'Finance & economics', 'Science & technology') should receive 4-6 sentences per article.
- Other sections can be shorter (1-3 sentences) but must stay under their correct headline.
- If a section or headline appears but has no meaningful content in the issue, include the heading but write 'No significant coverage this issue.'

FORMATTING:
- Use '## ' for Section headers and '### ' for Article headlines.
- Do not use bold (**) characters in the body text.

DOCUMENT CONTENT:
";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// Build the editor prompt around the extracted issue text.
pub fn build_prompt(document_text: &str) -> String {
    format!("{}{}", EDITOR_PROMPT, document_text)
}

/// Gemini `generateContent` client.
pub struct Summarizer {
    client: Client,
    api_key: String,
    model: String,
}

impl Summarizer {
    /// Create a summarizer for a model.
    pub fn new(api_key: String, model: String) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(600))
            .build()?;
        Ok(Self {
            client,
            api_key,
            model,
        })
    }

    /// Turn issue text into a `## ` / `### ` outline.
    pub fn summarize(&self, document_text: &str) -> Result<String, Box<dyn std::error::Error>> {
        let prompt = build_prompt(document_text);
        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);
        log::debug!("POST {} ({} prompt bytes)", url, prompt.len());

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(format!("summarizer returned HTTP {}: {}", status, body.trim()).into());
        }

        let body: GenerateResponse = response.json()?;
        response_text(body).ok_or_else(|| "summarizer returned no text".into())
    }
}

fn response_text(response: GenerateResponse) -> Option<String> {
    let text: String = response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt() {
        let prompt = build_prompt("Leaders\nThe world this week");
        assert!(prompt.contains("Use '## ' for Section headers"));
        assert!(prompt.ends_with("DOCUMENT CONTENT:\nLeaders\nThe world this week"));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r####"{"candidates":[{"content":{"parts":[{"text":"## Business\n"},{"text":"### Banks"}]}}]}"####,
        )
        .unwrap();
        assert_eq!(response_text(body).unwrap(), "## Business\n### Banks");
    }

    #[test]
    fn test_response_text_empty() {
        let body: GenerateResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(response_text(body).is_none());

        let body: GenerateResponse =
            serde_json::from_str(r#"{"candidates":[{"finishReason":"SAFETY"}]}"#).unwrap();
        assert!(response_text(body).is_none());
    }
}
