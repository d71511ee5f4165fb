//! Grading client: sends a submission to a remote text-generation endpoint and
//! turns the canned JSON critique into a `GradingResult`.
//!
//! One POST per submission, never retried. Every failure (transport error,
//! non-success status, unparseable reply) becomes a failed result with the
//! "confused" emotion; `analyze` itself never errors.
//!
//! NOTE: We never log the API key or the submitted code, only lengths and status.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::config::{GradingConfig, Prompts};
use crate::domain::{Emotion, GradingResult};
use crate::util::{render_template, strip_code_fence, trunc_for_log};

const API_KEY_HEADER: &str = "x-api-key";
const VERSION_HEADER: &str = "anthropic-version";

/// Anything that can grade a submission. Swapped for a stub in tests.
#[async_trait]
pub trait CodeAnalyzer: Send + Sync {
  async fn analyze(&self, language: &str, challenge_desc: &str, code: &str) -> GradingResult;
}

/// Fixed decision table over the raw scores; the first matching row wins.
pub fn derive_emotion(correct: bool, completeness: f64, quality: f64, overachiever: bool) -> Emotion {
  if overachiever || (correct && quality >= 95.0) {
    Emotion::Exceptional
  } else if correct && completeness >= 90.0 && quality >= 80.0 {
    Emotion::Proud
  } else if correct && completeness >= 70.0 {
    Emotion::Satisfied
  } else if completeness >= 50.0 {
    Emotion::Encouraging
  } else if completeness >= 30.0 {
    Emotion::Stern
  } else {
    Emotion::Disappointed
  }
}

/// Turn a raw (successful) response body into a result. Malformed bodies fail softly.
pub fn parse_reply(body: &str) -> GradingResult {
  let reply: MessagesResponse = match serde_json::from_str(body) {
    Ok(r) => r,
    Err(e) => return GradingResult::failed(format!("Could not analyze code: response is not valid JSON ({e})")),
  };

  let text: String = reply
    .content
    .iter()
    .filter(|b| b.kind == "text")
    .filter_map(|b| b.text.as_deref())
    .collect();

  let analysis: AnalysisPayload = match serde_json::from_str(strip_code_fence(&text)) {
    Ok(a) => a,
    Err(e) => {
      return GradingResult::failed(format!(
        "Could not analyze code: unexpected analysis format ({e}): {}",
        trunc_for_log(&text, 120)
      ))
    }
  };

  let tux_emotion = derive_emotion(
    analysis.correct,
    analysis.completeness,
    analysis.quality_score,
    analysis.overachiever,
  );
  GradingResult {
    success: true,
    correct: analysis.correct,
    completeness: percent(analysis.completeness),
    quality_score: percent(analysis.quality_score),
    issues: analysis.issues,
    strengths: analysis.strengths,
    suggestions: analysis.suggestions,
    summary: analysis.summary,
    tux_emotion,
  }
}

fn percent(v: f64) -> u8 {
  if v.is_finite() { v.round().clamp(0.0, 100.0) as u8 } else { 0 }
}

#[derive(Clone)]
pub struct AnthropicAnalyzer {
  client: reqwest::Client,
  api_key: String,
  pub base_url: String,
  pub model: String,
  max_tokens: u32,
  api_version: String,
  prompt_template: String,
}

impl AnthropicAnalyzer {
  pub fn new(cfg: &GradingConfig, prompts: &Prompts, api_key: String) -> Result<Self, reqwest::Error> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = cfg.timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(Self {
      client: builder.build()?,
      api_key,
      base_url: cfg.base_url.trim_end_matches('/').to_string(),
      model: cfg.model.clone(),
      max_tokens: cfg.max_tokens,
      api_version: cfg.api_version.clone(),
      prompt_template: prompts.analysis_template.clone(),
    })
  }

  pub fn build_prompt(&self, language: &str, challenge_desc: &str, code: &str) -> Result<String, String> {
    let lower = language.to_lowercase();
    render_template(
      &self.prompt_template,
      &[
        ("challenge", challenge_desc),
        ("language", language),
        ("language_lower", &lower),
        ("code", code),
      ],
    )
  }
}

#[async_trait]
impl CodeAnalyzer for AnthropicAnalyzer {
  #[instrument(level = "info", skip(self, challenge_desc, code), fields(%language, model = %self.model, code_len = code.len()))]
  async fn analyze(&self, language: &str, challenge_desc: &str, code: &str) -> GradingResult {
    let prompt = match self.build_prompt(language, challenge_desc, code) {
      Ok(p) => p,
      Err(missing) => {
        error!(target: "grading", %missing, "Analysis prompt template has an unknown placeholder");
        return GradingResult::failed(format!("Analysis error: prompt template uses unknown placeholder '{missing}'"));
      }
    };

    let req = MessagesRequest {
      model: &self.model,
      max_tokens: self.max_tokens,
      messages: vec![MessageReq { role: "user", content: &prompt }],
    };

    let url = format!("{}/v1/messages", self.base_url);
    let start = Instant::now();
    let res = self
      .client
      .post(&url)
      .header(USER_AGENT, "tux-bootcamp/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(API_KEY_HEADER, &self.api_key)
      .header(VERSION_HEADER, &self.api_version)
      .json(&req)
      .send()
      .await;

    let res = match res {
      Ok(r) => r,
      Err(e) => {
        error!(target: "grading", elapsed = ?start.elapsed(), error = %e, "Grading request failed");
        return GradingResult::failed(format!("Analysis error: {e}"));
      }
    };

    let status = res.status();
    let body = match res.text().await {
      Ok(b) => b,
      Err(e) => {
        error!(target: "grading", %status, error = %e, "Failed to read grading response body");
        return GradingResult::failed(format!("Analysis error: {e}"));
      }
    };
    let elapsed = start.elapsed();

    if !status.is_success() {
      let msg = extract_api_error(&body).unwrap_or_else(|| trunc_for_log(&body, 200));
      warn!(target: "grading", %status, ?elapsed, "Grading service returned an error status");
      return GradingResult::failed(format!("Could not analyze code: HTTP {status}: {msg}"));
    }

    let result = parse_reply(&body);
    info!(
      target: "grading",
      ?elapsed,
      body_len = body.len(),
      success = result.success,
      emotion = %result.tux_emotion,
      "Grading response received"
    );
    result
  }
}

/// Used when no API key is configured.
#[derive(Clone, Debug, Default)]
pub struct OfflineAnalyzer;

#[async_trait]
impl CodeAnalyzer for OfflineAnalyzer {
  async fn analyze(&self, language: &str, _challenge_desc: &str, _code: &str) -> GradingResult {
    warn!(target: "grading", %language, "Grading requested but no grading service is configured");
    GradingResult::failed("Grading service not configured (set ANTHROPIC_API_KEY).")
  }
}

// --- Wire DTOs ---

#[derive(Serialize)]
struct MessagesRequest<'a> {
  model: &'a str,
  max_tokens: u32,
  messages: Vec<MessageReq<'a>>,
}
#[derive(Serialize)]
struct MessageReq<'a> { role: &'a str, content: &'a str }

#[derive(Deserialize)]
struct MessagesResponse {
  #[serde(default)] content: Vec<ContentBlock>,
}
#[derive(Deserialize)]
struct ContentBlock {
  #[serde(rename = "type")] kind: String,
  #[serde(default)] text: Option<String>,
}

#[derive(Deserialize)]
struct AnalysisPayload {
  #[serde(default)] correct: bool,
  #[serde(default)] completeness: f64,
  #[serde(default)] quality_score: f64,
  #[serde(default)] overachiever: bool,
  #[serde(default)] issues: Vec<String>,
  #[serde(default)] strengths: Vec<String>,
  #[serde(default)] suggestions: Vec<String>,
  #[serde(default)] summary: String,
}

/// Try to extract a clean error message from an API error body.
fn extract_api_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap { error: EObj }
  #[derive(Deserialize)]
  struct EObj { message: String }
  serde_json::from_str::<EWrap>(body).ok().map(|w| w.error.message)
}
