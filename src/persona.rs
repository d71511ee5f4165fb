//! Persona engine: Tux's voice.
//!
//! Picks one phrase from a bucket (motivation tier, emotion, speech context or
//! the general drill expressions), uniformly at random with replacement, then
//! substitutes `{placeholders}`. The random source is injected so tests can run
//! against a fixed sequence.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::RngCore;

use crate::domain::{Emotion, GradingResult, MotivationTier};
use crate::error::{PersonaError, ResourceError};
use crate::resources::{Category, ResourceStore};
use crate::util::render_template;

const FALLBACK_ACCENT: &str = "#ffffff";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhraseCategory<'a> {
  Motivation(MotivationTier),
  Emotion(Emotion),
  /// `starting_language`, `struggle`, `checkpoint`, `completion`.
  Speech(&'a str),
  Expression,
}

impl PhraseCategory<'_> {
  fn key(&self) -> String {
    match self {
      PhraseCategory::Motivation(tier) => format!("motivation_levels.{}", tier.key()),
      PhraseCategory::Emotion(e) => format!("emotions.{}", e.as_str()),
      PhraseCategory::Speech(ctx) => format!("speeches.{ctx}"),
      PhraseCategory::Expression => "favorite_expressions".into(),
    }
  }
}

pub struct PersonaEngine {
  resources: Arc<ResourceStore>,
  rng: Box<dyn RngCore + Send>,
  last_emotion: Option<Emotion>,
}

impl PersonaEngine {
  pub fn new(resources: Arc<ResourceStore>, rng: Box<dyn RngCore + Send>) -> Self {
    Self { resources, rng, last_emotion: None }
  }

  /// The engine's random source, shared with other per-session random picks.
  pub fn rng(&mut self) -> &mut (dyn RngCore + Send) {
    self.rng.as_mut()
  }

  pub fn pick(&mut self, category: PhraseCategory<'_>, params: &[(&str, &str)]) -> Result<String, PersonaError> {
    let key = category.key();
    let bucket = match (category, self.resources.list(Category::Tux, &key)) {
      (PhraseCategory::Speech(_), Err(ResourceError::MissingKey { .. })) => {
        self.resources.list(Category::Tux, &PhraseCategory::Expression.key())?
      }
      (_, res) => res?,
    };
    let chosen = bucket
      .choose(self.rng.as_mut())
      .ok_or_else(|| PersonaError::EmptyBucket(key.clone()))?;
    render_template(chosen, params).map_err(PersonaError::MissingParameter)
  }

  pub fn motivation_phrase(&mut self, score: u8, name: &str) -> Result<String, PersonaError> {
    self.pick(PhraseCategory::Motivation(MotivationTier::from_score(score)), &[("name", name)])
  }

  /// Base phrase for the emotion plus the analysis highlights that fit it.
  pub fn emotional_response(
    &mut self,
    emotion: Emotion,
    analysis: Option<&GradingResult>,
  ) -> Result<String, PersonaError> {
    let mut out = self.pick(PhraseCategory::Emotion(emotion), &[])?;

    let Some(result) = analysis else {
      self.last_emotion = Some(emotion);
      return Ok(out);
    };

    let praise = matches!(emotion, Emotion::Proud | Emotion::Satisfied | Emotion::Encouraging);
    let critique = matches!(emotion, Emotion::Stern | Emotion::Disappointed | Emotion::Encouraging);

    if praise && !result.strengths.is_empty() {
      out.push_str(self.feedback("what_i_liked")?);
      for strength in result.strengths.iter().take(2) {
        out.push_str(&self.feedback_with("strength_bullet", &[("strength", strength)])?);
      }
    }
    if critique && !result.issues.is_empty() {
      out.push_str(self.feedback("needs_improvement")?);
      for issue in result.issues.iter().take(3) {
        out.push_str(&self.feedback_with("issue_bullet", &[("issue", issue)])?);
      }
    }
    if !result.suggestions.is_empty() {
      out.push_str(self.feedback("your_mission")?);
      for (i, suggestion) in result.suggestions.iter().take(2).enumerate() {
        let number = (i + 1).to_string();
        out.push_str(&self.feedback_with("suggestion_number", &[("number", &number), ("suggestion", suggestion)])?);
      }
    }
    self.last_emotion = Some(emotion);
    Ok(out)
  }

  pub fn intro_speech(&self) -> Result<String, PersonaError> {
    Ok(self.resources.text(Category::Tux, "intro_speech")?.to_string())
  }

  pub fn enrollment_speech(&self, name: &str) -> Result<String, PersonaError> {
    let tpl = self.resources.text(Category::Tux, "enrollment_speech")?;
    render_template(tpl, &[("student_name", &name.to_uppercase())]).map_err(PersonaError::MissingParameter)
  }

  /// Fixed (non-random) message from `messages.*`.
  pub fn message(&self, key: &str, params: &[(&str, &str)]) -> Result<String, PersonaError> {
    let tpl = self.resources.text(Category::Tux, &format!("messages.{key}"))?;
    render_template(tpl, params).map_err(PersonaError::MissingParameter)
  }

  /// Display accent for the last emotion shown. Never affects phrase selection.
  pub fn accent(&self) -> String {
    let key = self.last_emotion.map(Emotion::as_str).unwrap_or("neutral");
    self
      .resources
      .text(Category::Tux, &format!("emotion_accents.{key}"))
      .unwrap_or(FALLBACK_ACCENT)
      .to_string()
  }

  fn feedback(&self, key: &str) -> Result<&str, PersonaError> {
    Ok(self.resources.text(Category::Tux, &format!("feedback_templates.{key}"))?)
  }

  fn feedback_with(&self, key: &str, params: &[(&str, &str)]) -> Result<String, PersonaError> {
    render_template(self.feedback(key)?, params).map_err(PersonaError::MissingParameter)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::mock::StepRng;

  fn engine() -> PersonaEngine {
    // A zero step RNG always lands on the first phrase of a bucket.
    PersonaEngine::new(Arc::new(ResourceStore::builtin()), Box::new(StepRng::new(0, 0)))
  }

  fn result() -> GradingResult {
    GradingResult {
      success: true,
      correct: true,
      completeness: 95,
      quality_score: 85,
      issues: vec!["i1".into(), "i2".into(), "i3".into(), "i4".into()],
      strengths: vec!["s1".into(), "s2".into(), "s3".into()],
      suggestions: vec!["g1".into(), "g2".into(), "g3".into()],
      summary: "ok".into(),
      tux_emotion: Emotion::Proud,
    }
  }

  #[test]
  fn motivation_tiers_use_fixed_thresholds() {
    assert_eq!(MotivationTier::from_score(0), MotivationTier::Low);
    assert_eq!(MotivationTier::from_score(19), MotivationTier::Low);
    assert_eq!(MotivationTier::from_score(20), MotivationTier::MediumLow);
    assert_eq!(MotivationTier::from_score(49), MotivationTier::MediumLow);
    assert_eq!(MotivationTier::from_score(50), MotivationTier::MediumHigh);
    assert_eq!(MotivationTier::from_score(79), MotivationTier::MediumHigh);
    assert_eq!(MotivationTier::from_score(80), MotivationTier::High);
    assert_eq!(MotivationTier::from_score(100), MotivationTier::High);
  }

  #[test]
  fn deterministic_rng_picks_first_phrase_and_substitutes_name() {
    let mut tux = engine();
    let phrase = tux.motivation_phrase(5, "Ada").unwrap();
    assert_eq!(phrase, "Listen up, Ada! I've seen QUITTERS before, but you're testing my patience!");
    // Same sequence, same phrase: repeats are allowed.
    assert_eq!(tux.motivation_phrase(5, "Ada").unwrap(), phrase);
  }

  #[test]
  fn missing_parameter_is_an_error() {
    let mut tux = engine();
    let err = tux.pick(PhraseCategory::Speech("starting_language"), &[]).unwrap_err();
    assert!(matches!(err, PersonaError::MissingParameter(ref p) if p == "language"));
  }

  #[test]
  fn unknown_speech_context_falls_back_to_expressions() {
    let mut tux = engine();
    let phrase = tux.pick(PhraseCategory::Speech("victory_lap"), &[]).unwrap();
    assert_eq!(phrase, "DROP AND GIVE ME CODE!");
  }

  #[test]
  fn every_emotion_has_phrases() {
    let mut tux = engine();
    for emotion in Emotion::ALL {
      assert!(!tux.emotional_response(emotion, None).unwrap().is_empty());
    }
  }

  #[test]
  fn proud_response_lists_two_strengths_and_two_suggestions() {
    let mut tux = engine();
    let text = tux.emotional_response(Emotion::Proud, Some(&result())).unwrap();
    assert!(text.contains("What I LIKED"));
    assert!(text.contains("+ s1\n+ s2\n"));
    assert!(!text.contains("s3"));
    assert!(!text.contains("IMPROVEMENT"));
    assert!(text.contains("1. g1\n2. g2\n"));
    assert!(!text.contains("g3"));
  }

  #[test]
  fn encouraging_response_lists_strengths_and_three_issues() {
    let mut tux = engine();
    let text = tux.emotional_response(Emotion::Encouraging, Some(&result())).unwrap();
    assert!(text.contains("What I LIKED"));
    assert!(text.contains("- i1\n- i2\n- i3\n"));
    assert!(!text.contains("i4"));
  }

  #[test]
  fn accent_tracks_last_emotion_only() {
    let mut tux = engine();
    assert_eq!(tux.accent(), "#ffffff");
    tux.emotional_response(Emotion::Stern, None).unwrap();
    assert_eq!(tux.last_emotion, Some(Emotion::Stern));
    assert_eq!(tux.accent(), "#ff8c00");
  }

  #[test]
  fn enrollment_speech_upper_cases_name() {
    let tux = engine();
    let speech = tux.enrollment_speech("grace").unwrap();
    assert!(speech.starts_with("WELCOME TO THE PROGRAM, GRACE!"));
  }
}
