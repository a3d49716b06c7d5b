//! Improvement suggestions for title, meta description and H1.
//!
//! Two generators share one contract: the deterministic mock transform and
//! a hosted chat-completions model. [`suggest`] never fails; any problem with
//! the hosted call falls back to the mock transform.

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::options::{SuggesterConfig, SuggestionMode};
use crate::patterns::REPLY_LINE;
use crate::result::Suggestion;

const TITLE_JOINER: &str = " | ";
const TITLE_TAIL: &str = "Expert Guide";
const META_JOINER: &str = " ";
const META_TAIL: &str = "Learn more and get started today.";
const H1_JOINER: &str = ": ";
const H1_TAIL: &str = "A Complete Guide";

/// Generate suggestions using the configured generator.
#[must_use]
pub fn suggest(title: &str, meta: &str, h1: &str, config: &SuggesterConfig) -> Suggestion {
    match config.mode {
        SuggestionMode::Mock => mock_suggestions(title, meta, h1),
        SuggestionMode::HostedLlm => match hosted_suggestions(title, meta, h1, config) {
            Ok(suggestion) => suggestion,
            Err(e) => {
                warn!("hosted suggestions unavailable, using mock transform: {e}");
                mock_suggestions(title, meta, h1)
            }
        },
    }
}

/// Deterministic offline suggestions: a fixed phrase appended to each field.
///
/// # Examples
///
/// ```
/// use seo_agent::suggest::mock_suggestions;
///
/// let s = mock_suggestions("Running Shoes", "", "Shoes");
/// assert_eq!(s.title, "Running Shoes | Expert Guide");
/// assert_eq!(s.meta, "Learn more and get started today.");
/// assert_eq!(s.h1, "Shoes: A Complete Guide");
/// ```
#[must_use]
pub fn mock_suggestions(title: &str, meta: &str, h1: &str) -> Suggestion {
    Suggestion {
        title: append(title, TITLE_JOINER, TITLE_TAIL),
        meta: append(meta, META_JOINER, META_TAIL),
        h1: append(h1, H1_JOINER, H1_TAIL),
    }
}

fn append(base: &str, joiner: &str, tail: &str) -> String {
    let base = base.trim();
    if base.is_empty() {
        tail.to_string()
    } else {
        format!("{base}{joiner}{tail}")
    }
}

/// Prompt sent to the hosted model.
#[must_use]
pub fn build_prompt(title: &str, meta: &str, h1: &str) -> String {
    format!(
        "You are an SEO expert. Improve the following elements for better SEO:\n\
         - Title: {title}\n\
         - Meta description: {meta}\n\
         - H1: {h1}\n\
         \n\
         Rules:\n\
         - Title: 30-60 characters, compelling, keyword-rich.\n\
         - Meta: 80-160 characters, clear and engaging.\n\
         - H1: concise, keyword-focused.\n\
         \n\
         Reply with only a JSON object with the string fields \"title\", \"meta\" and \"h1\"."
    )
}

/// Parse a model reply into a suggestion.
///
/// Accepts a JSON object (optionally inside a code fence) or `Title: ...`
/// style lines. Fields the reply leaves out are filled from the mock
/// transform; a reply with none of the three is an error.
pub fn parse_reply(reply: &str, title: &str, meta: &str, h1: &str) -> Result<Suggestion> {
    let parsed = parse_json_reply(reply).unwrap_or_else(|| parse_labelled_lines(reply));

    if parsed.title.is_empty() && parsed.meta.is_empty() && parsed.h1.is_empty() {
        return Err(Error::Suggestion("reply contained no suggestions".to_string()));
    }

    let fallback = mock_suggestions(title, meta, h1);
    Ok(Suggestion {
        title: non_empty_or(parsed.title, fallback.title),
        meta: non_empty_or(parsed.meta, fallback.meta),
        h1: non_empty_or(parsed.h1, fallback.h1),
    })
}

fn non_empty_or(value: String, fallback: String) -> String {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[derive(Deserialize)]
struct JsonReply {
    #[serde(default)]
    title: String,
    #[serde(default, alias = "meta_description", alias = "description")]
    meta: String,
    #[serde(default)]
    h1: String,
}

fn parse_json_reply(reply: &str) -> Option<Suggestion> {
    let start = reply.find('{')?;
    let end = reply.rfind('}')?;
    let body = reply.get(start..=end)?;
    let json: JsonReply = serde_json::from_str(body).ok()?;
    Some(Suggestion {
        title: json.title.trim().to_string(),
        meta: json.meta.trim().to_string(),
        h1: json.h1.trim().to_string(),
    })
}

fn parse_labelled_lines(reply: &str) -> Suggestion {
    let mut suggestion = Suggestion::default();

    for line in reply.lines() {
        let Some(caps) = REPLY_LINE.captures(line) else {
            continue;
        };
        let label = caps[1].to_lowercase();
        let value = caps[2].trim().trim_matches('"').to_string();

        if label.starts_with("title") {
            suggestion.title = value;
        } else if label.starts_with("meta") {
            suggestion.meta = value;
        } else if label.starts_with("h1") {
            suggestion.h1 = value;
        }
    }

    suggestion
}

#[cfg(feature = "http")]
fn hosted_suggestions(title: &str, meta: &str, h1: &str, config: &SuggesterConfig) -> Result<Suggestion> {
    let reply = hosted::complete(&build_prompt(title, meta, h1), config)?;
    debug!("model reply: {reply}");
    parse_reply(&reply, title, meta, h1)
}

#[cfg(not(feature = "http"))]
fn hosted_suggestions(_title: &str, _meta: &str, _h1: &str, _config: &SuggesterConfig) -> Result<Suggestion> {
    debug!("built without the `http` feature");
    Err(Error::Suggestion("hosted suggestions require the `http` feature".to_string()))
}

#[cfg(feature = "http")]
mod hosted {
    use reqwest::blocking::Client;
    use serde::{Deserialize, Serialize};

    use crate::error::{Error, Result};
    use crate::options::SuggesterConfig;

    #[derive(Serialize)]
    struct ChatRequest<'a> {
        model: &'a str,
        max_tokens: u32,
        messages: Vec<ChatMessage<'a>>,
    }

    #[derive(Serialize)]
    struct ChatMessage<'a> {
        role: &'a str,
        content: &'a str,
    }

    #[derive(Deserialize)]
    struct ChatResponse {
        choices: Vec<ChatChoice>,
    }

    #[derive(Deserialize)]
    struct ChatChoice {
        message: ChatReply,
    }

    #[derive(Deserialize)]
    struct ChatReply {
        content: Option<String>,
    }

    /// Send one user prompt and return the first choice's text.
    pub(super) fn complete(prompt: &str, config: &SuggesterConfig) -> Result<String> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Suggestion("no API key configured".to_string()))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Suggestion(format!("failed to build HTTP client: {e}")))?;

        let body = ChatRequest {
            model: &config.model,
            max_tokens: config.max_tokens,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let resp = client
            .post(&config.endpoint)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .map_err(|e| Error::Suggestion(format!("chat completions call failed: {e}")))?;

        let status = resp.status().as_u16();
        let text = resp
            .text()
            .map_err(|e| Error::Suggestion(format!("unreadable chat completions response: {e}")))?;
        read_chat_response(status, &text)
    }

    /// Pull the first non-empty choice text out of a chat-completions reply.
    fn read_chat_response(status: u16, body: &str) -> Result<String> {
        if !(200..300).contains(&status) {
            return Err(Error::Suggestion(format!("chat completions returned {status}: {body}")));
        }

        let parsed: ChatResponse = serde_json::from_str(body)
            .map_err(|e| Error::Suggestion(format!("unreadable chat completions response: {e}")))?;

        parsed
            .choices
            .into_iter()
            .find_map(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| Error::Suggestion("empty reply".to_string()))
    }

}
