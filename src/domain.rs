//! Domain models used by the boot camp: languages, challenges, motivation tiers,
//! emotion tags, and grading results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canned task attached to one language.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
  pub title: String,
  pub description: String,
  pub difficulty: String, // "Easy" | "Medium" | "Hard"
}

/// Reference data for one language. Loaded once, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageEntry {
  #[serde(default)] pub name: String,
  pub description: String,
  pub difficulty: String,
  #[serde(default)] pub drill_sergeant_take: String,
  #[serde(default)] pub use_cases: Vec<String>,
  #[serde(default)] pub sample_code: String,
  #[serde(default)] pub learning_resources: Vec<String>,
  #[serde(default)] pub challenges: Vec<Challenge>,
}

/// Motivation buckets used to pick persona phrases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotivationTier {
  Low,
  MediumLow,
  MediumHigh,
  High,
}

impl MotivationTier {
  pub fn from_score(score: u8) -> Self {
    match score {
      0..=19 => MotivationTier::Low,
      20..=49 => MotivationTier::MediumLow,
      50..=79 => MotivationTier::MediumHigh,
      _ => MotivationTier::High,
    }
  }

  pub fn key(self) -> &'static str {
    match self {
      MotivationTier::Low => "low",
      MotivationTier::MediumLow => "medium_low",
      MotivationTier::MediumHigh => "medium_high",
      MotivationTier::High => "high",
    }
  }
}

/// How Tux feels about a graded submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emotion {
  Exceptional,
  Proud,
  Satisfied,
  Encouraging,
  Stern,
  Disappointed,
  Confused,
}

impl Emotion {
  pub const ALL: [Emotion; 7] = [
    Emotion::Exceptional,
    Emotion::Proud,
    Emotion::Satisfied,
    Emotion::Encouraging,
    Emotion::Stern,
    Emotion::Disappointed,
    Emotion::Confused,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      Emotion::Exceptional => "exceptional",
      Emotion::Proud => "proud",
      Emotion::Satisfied => "satisfied",
      Emotion::Encouraging => "encouraging",
      Emotion::Stern => "stern",
      Emotion::Disappointed => "disappointed",
      Emotion::Confused => "confused",
    }
  }
}

impl fmt::Display for Emotion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Outcome of one grading request. Consumed immediately, never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GradingResult {
  pub success: bool,
  pub correct: bool,
  pub completeness: u8,
  pub quality_score: u8,
  pub issues: Vec<String>,
  pub strengths: Vec<String>,
  pub suggestions: Vec<String>,
  pub summary: String,
  pub tux_emotion: Emotion,
}

impl GradingResult {
  /// Result used for every remote-service failure: nothing scored, Tux is confused.
  pub fn failed(summary: impl Into<String>) -> Self {
    Self {
      success: false,
      correct: false,
      completeness: 0,
      quality_score: 0,
      issues: Vec::new(),
      strengths: Vec::new(),
      suggestions: Vec::new(),
      summary: summary.into(),
      tux_emotion: Emotion::Confused,
    }
  }
}
