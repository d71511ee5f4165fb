//! Loading boot camp configuration from TOML.
//!
//! Every field is defaulted, so an empty file (or no file at all) yields the
//! stock setup. See `AppConfig` for the schema:
//!
//! ```toml
//! [app]
//! output_dir = "TuxBootCamp_Challenges"
//! resources_dir = "./resources"   # optional; built-in content when absent
//!
//! [motivation]
//! initial = 50
//! commit_bonus = 10
//!
//! [grading]
//! model = "claude-sonnet-4-20250514"
//! timeout_secs = 60                # optional; no timeout when absent
//!
//! [prompts]
//! analysis_template = "..."        # {challenge} {language} {language_lower} {code}
//! ```

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
  #[serde(default)]
  pub app: AppSection,
  #[serde(default)]
  pub motivation: MotivationConfig,
  #[serde(default)]
  pub grading: GradingConfig,
  #[serde(default)]
  pub prompts: Prompts,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AppSection {
  /// Where challenge files are written. Relative paths resolve against the working dir.
  pub output_dir: PathBuf,
  /// Directory holding the five JSON resource files.
  pub resources_dir: Option<PathBuf>,
}

impl Default for AppSection {
  fn default() -> Self {
    Self { output_dir: PathBuf::from("TuxBootCamp_Challenges"), resources_dir: None }
  }
}

/// Motivation deltas applied by the session.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MotivationConfig {
  pub initial: u8,
  pub commit_bonus: i32,
  pub accept_bonus: i32,
  pub correct_bonus: i32,
  /// Incorrect but at least half complete.
  pub partial_bonus: i32,
  pub failure_penalty: i32,
}

impl Default for MotivationConfig {
  fn default() -> Self {
    Self {
      initial: 50,
      commit_bonus: 10,
      accept_bonus: 15,
      correct_bonus: 20,
      partial_bonus: 10,
      failure_penalty: -5,
    }
  }
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
  pub base_url: String,
  pub model: String,
  pub max_tokens: u32,
  pub api_version: String,
  pub timeout_secs: Option<u64>,
}

impl Default for GradingConfig {
  fn default() -> Self {
    Self {
      base_url: "https://api.anthropic.com".into(),
      model: "claude-sonnet-4-20250514".into(),
      max_tokens: 1000,
      api_version: "2023-06-01".into(),
      timeout_secs: None,
    }
  }
}

/// Prompt used by the grading client. Override in TOML to tune tone or criteria.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Prompts {
  pub analysis_template: String,
}

impl Default for Prompts {
  fn default() -> Self {
    Self {
      analysis_template: r#"You are Sergeant Tux analyzing recruit code for a programming boot camp.

CHALLENGE: {challenge}
LANGUAGE: {language}

STUDENT CODE:
```{language_lower}
{code}
```

Analyze this code and respond in this EXACT JSON format:
{
    "correct": true/false,
    "completeness": 0-100,
    "quality_score": 0-100,
    "overachiever": true/false,
    "issues": ["issue1", "issue2"],
    "strengths": ["strength1", "strength2"],
    "suggestions": ["suggestion1", "suggestion2"],
    "summary": "brief summary"
}

IMPORTANT ANALYSIS CRITERIA:
1. Does it meet or EXCEED the challenge requirements?
2. If the student went BEYOND requirements (added error handling, additional features, better practices), they are an OVERACHIEVER
3. Award high scores (90+) for code that exceeds expectations
4. Check syntax and functionality
5. Recognize professional practices (error handling, input validation, memory safety, good naming)

Be tough but FAIR. Recognize excellence when you see it. If a recruit went above and beyond, they deserve HIGH MARKS!

If the challenge is "beginner" level but the code shows "intermediate" or "advanced" practices, this is OUTSTANDING and should score 95+."#
        .into(),
    }
  }
}

impl AppConfig {
  /// Environment overrides for the grading endpoint and model.
  pub fn apply_env(&mut self) {
    if let Ok(url) = std::env::var("ANTHROPIC_BASE_URL") {
      if !url.trim().is_empty() {
        self.grading.base_url = url;
      }
    }
    if let Ok(model) = std::env::var("GRADING_MODEL") {
      if !model.trim().is_empty() {
        self.grading.model = model;
      }
    }
  }
}

pub fn parse_config(s: &str) -> Result<AppConfig, toml::de::Error> {
  toml::from_str::<AppConfig>(s)
}

/// Load `AppConfig` from BOOTCAMP_CONFIG_PATH, then apply env overrides.
/// On any IO/parsing error the defaults are used.
pub fn load_config_from_env() -> AppConfig {
  let mut cfg = match std::env::var("BOOTCAMP_CONFIG_PATH") {
    Ok(path) => match std::fs::read_to_string(&path) {
      Ok(s) => match parse_config(&s) {
        Ok(cfg) => {
          info!(target: "tux_bootcamp", %path, "Loaded boot camp config (TOML)");
          cfg
        }
        Err(e) => {
          error!(target: "tux_bootcamp", %path, error = %e, "Failed to parse TOML config; using defaults");
          AppConfig::default()
        }
      },
      Err(e) => {
        error!(target: "tux_bootcamp", %path, error = %e, "Failed to read TOML config file; using defaults");
        AppConfig::default()
      }
    },
    Err(_) => AppConfig::default(),
  };
  cfg.apply_env();
  cfg
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_gives_defaults() {
    let cfg = parse_config("").unwrap();
    assert_eq!(cfg.app.output_dir, PathBuf::from("TuxBootCamp_Challenges"));
    assert!(cfg.app.resources_dir.is_none());
    assert_eq!(cfg.motivation, MotivationConfig::default());
    assert_eq!(cfg.grading.max_tokens, 1000);
    assert!(cfg.grading.timeout_secs.is_none());
  }

  #[test]
  fn partial_sections_keep_other_defaults() {
    let cfg = parse_config(
      r#"
      [app]
      resources_dir = "/srv/tux"

      [motivation]
      commit_bonus = 3

      [grading]
      timeout_secs = 30
      "#,
    )
    .unwrap();
    assert_eq!(cfg.app.resources_dir, Some(PathBuf::from("/srv/tux")));
    assert_eq!(cfg.app.output_dir, PathBuf::from("TuxBootCamp_Challenges"));
    assert_eq!(cfg.motivation.commit_bonus, 3);
    assert_eq!(cfg.motivation.initial, 50);
    assert_eq!(cfg.grading.timeout_secs, Some(30));
    assert_eq!(cfg.grading.model, "claude-sonnet-4-20250514");
  }

  #[test]
  fn wrong_types_are_rejected() {
    assert!(parse_config("[motivation]\ninitial = \"lots\"").is_err());
  }

  #[test]
  fn default_prompt_has_every_placeholder() {
    let p = Prompts::default().analysis_template;
    for key in ["{challenge}", "{language}", "{language_lower}", "{code}"] {
      assert!(p.contains(key), "{key}");
    }
  }
}
