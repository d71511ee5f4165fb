//! Progress tracker: one learner's motivation gauge and language history.
//!
//! The motivation score is clamped to [0, 100] by `update_motivation` itself.
//! No operation here fails; callers only pass languages from the content store.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::domain::MotivationTier;

pub const MOTIVATION_MIN: u8 = 0;
pub const MOTIVATION_MAX: u8 = 100;

#[derive(Clone, Debug, Serialize)]
pub struct LearnerProfile {
  pub name: String,
  pub joined_at: DateTime<Local>,
  pub languages_started: BTreeSet<String>,
  pub languages_completed: BTreeSet<String>,
  pub motivation: u8,
  pub completion_attempts: BTreeMap<String, u32>,
}

impl LearnerProfile {
  pub fn new(name: impl Into<String>, initial_motivation: u8) -> Self {
    Self {
      name: name.into(),
      joined_at: Local::now(),
      languages_started: BTreeSet::new(),
      languages_completed: BTreeSet::new(),
      motivation: initial_motivation.min(MOTIVATION_MAX),
      completion_attempts: BTreeMap::new(),
    }
  }

  /// `score = clamp(score + delta, 0, 100)`; saturates, never wraps.
  pub fn update_motivation(&mut self, delta: i32) -> u8 {
    let next = (i64::from(self.motivation) + i64::from(delta)).clamp(i64::from(MOTIVATION_MIN), i64::from(MOTIVATION_MAX));
    self.motivation = next as u8;
    self.motivation
  }

  pub fn motivation_tier(&self) -> MotivationTier {
    MotivationTier::from_score(self.motivation)
  }

  /// Idempotent. Returns `true` only the first time a language is started.
  pub fn start_language(&mut self, language: &str) -> bool {
    self.languages_started.insert(language.to_string())
  }

  pub fn has_started(&self, language: &str) -> bool {
    self.languages_started.contains(language)
  }

  pub fn complete_language(&mut self, language: &str) -> bool {
    self.languages_completed.insert(language.to_string())
  }

  /// Count one submission for `language`; returns the new count.
  pub fn record_attempt(&mut self, language: &str) -> u32 {
    let n = self.completion_attempts.entry(language.to_string()).or_insert(0);
    *n += 1;
    *n
  }

  pub fn attempts(&self, language: &str) -> u32 {
    self.completion_attempts.get(language).copied().unwrap_or(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn update_matches_clamp_for_a_grid_of_inputs() {
    for start in [0u8, 1, 5, 19, 50, 95, 99, 100] {
      for delta in [i32::MIN, -1000, -101, -20, -5, -1, 0, 1, 5, 20, 101, 1000, i32::MAX] {
        let mut p = LearnerProfile::new("t", start);
        let expected = (i64::from(start) + i64::from(delta)).clamp(0, 100) as u8;
        assert_eq!(p.update_motivation(delta), expected, "start={start} delta={delta}");
        assert_eq!(p.motivation, expected);
      }
    }
  }

  #[test]
  fn saturates_at_both_bounds() {
    let mut p = LearnerProfile::new("t", 95);
    assert_eq!(p.update_motivation(20), 100);
    let mut p = LearnerProfile::new("t", 5);
    assert_eq!(p.update_motivation(-20), 0);
  }

  #[test]
  fn initial_motivation_is_clamped() {
    assert_eq!(LearnerProfile::new("t", 250).motivation, 100);
  }

  #[test]
  fn start_language_is_idempotent() {
    let mut p = LearnerProfile::new("t", 50);
    assert!(p.start_language("Rust"));
    assert!(!p.start_language("Rust"));
    assert_eq!(p.languages_started.len(), 1);
    assert!(p.has_started("Rust"));
  }

  #[test]
  fn attempts_are_counted_per_language() {
    let mut p = LearnerProfile::new("t", 50);
    assert_eq!(p.record_attempt("Go"), 1);
    assert_eq!(p.record_attempt("Go"), 2);
    assert_eq!(p.record_attempt("C"), 1);
    assert_eq!(p.attempts("Go"), 2);
    assert_eq!(p.attempts("Rust"), 0);
  }
}
