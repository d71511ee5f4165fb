//! One learner's session: the screen controller behind a WebSocket connection.
//!
//! A session owns its screen state, the learner profile, a persona engine with
//! its own random source, and whatever the current modal is working on (an
//! offered challenge or an opened submission). Shared, read-only data comes
//! from `AppState`.
//!
//! Every operation either succeeds and moves the session forward, or fails and
//! leaves the screen exactly where it was. Grading is split in two:
//! `submit_for_review` hands out a `GradingJob` and marks the review in flight,
//! `apply_grading` consumes the single result once it comes back.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{info, instrument, warn};

use crate::challenge_file::{mission_briefing, ChallengeRequest};
use crate::domain::{Challenge, GradingResult};
use crate::error::SessionError;
use crate::persona::{PersonaEngine, PhraseCategory};
use crate::progress::LearnerProfile;
use crate::protocol::{
  ChallengeFileOut, ChallengeOfferOut, CommitOut, DashboardOut, EnrolledOut, GradingOut, LanguageOut,
  LanguageSummary, NoticeOut, ResourcesOut, ReviewingOut, SubmissionOut, WelcomeOut,
};
use crate::resources::Category;
use crate::screen::{Screen, ScreenEvent, TransitionError};
use crate::state::AppState;

/// Everything the grading client needs, detached from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradingJob {
  pub language: String,
  pub challenge_desc: String,
  pub code: String,
}

#[derive(Clone, Debug)]
struct Draft {
  language: String,
  code: String,
  briefing: String,
}

pub struct Session {
  state: Arc<AppState>,
  screen: Screen,
  learner: Option<LearnerProfile>,
  tux: PersonaEngine,
  selected: Option<String>,
  offer: Option<Challenge>,
  draft: Option<Draft>,
  /// Language of the submission currently being graded.
  in_flight: Option<String>,
}

impl Session {
  pub fn new(state: Arc<AppState>, rng: Box<dyn RngCore + Send>) -> Self {
    let tux = PersonaEngine::new(state.resources.clone(), rng);
    Self {
      state,
      screen: Screen::default(),
      learner: None,
      tux,
      selected: None,
      offer: None,
      draft: None,
      in_flight: None,
    }
  }

  pub fn from_entropy(state: Arc<AppState>) -> Self {
    Self::new(state, Box::new(StdRng::from_entropy()))
  }

  pub fn screen(&self) -> Screen {
    self.screen
  }

  pub fn learner(&self) -> Option<&LearnerProfile> {
    self.learner.as_ref()
  }

  pub fn selected(&self) -> Option<&str> {
    self.selected.as_deref()
  }

  pub fn grading_pending(&self) -> bool {
    self.in_flight.is_some()
  }

  pub fn welcome(&self) -> Result<WelcomeOut, SessionError> {
    Ok(WelcomeOut {
      title: self.ui("banner_title")?,
      subtitle: self.ui("banner_subtitle")?,
      intro: self.tux.intro_speech()?,
      prompt: self.ui("login_prompt")?,
      enroll_button: self.ui("enroll_button")?,
      screen: self.screen,
    })
  }

  #[instrument(level = "info", skip(self, name), fields(name_len = name.len()))]
  pub fn enroll(&mut self, name: &str) -> Result<EnrolledOut, SessionError> {
    let next = self.screen.next(&ScreenEvent::SubmitName(name.to_string()))?;
    let name = name.trim();
    let speech = self.tux.enrollment_speech(name)?;
    let acknowledge_button = self.ui("yes_sergeant")?;

    self.learner = Some(LearnerProfile::new(name, self.state.config.motivation.initial));
    self.screen = next;
    info!(target: "session", learner = %name, "Recruit enrolled");
    Ok(EnrolledOut { name: name.to_string(), speech, acknowledge_button, screen: next })
  }

  #[instrument(level = "info", skip(self))]
  pub fn acknowledge(&mut self) -> Result<DashboardOut, SessionError> {
    let next = self.screen.next(&ScreenEvent::AcknowledgeSpeech)?;
    let out = self.dashboard_for(next)?;
    self.screen = next;
    Ok(out)
  }

  /// Current dashboard without changing screens.
  pub fn dashboard(&mut self) -> Result<DashboardOut, SessionError> {
    self.dashboard_for(self.screen)
  }

  #[instrument(level = "info", skip(self))]
  pub fn select_language(&mut self, language: &str) -> Result<LanguageOut, SessionError> {
    self.require(Screen::Dashboard, "select_language")?;
    let learner = self.learner.as_ref().ok_or(SessionError::NotEnrolled)?;
    let entry = self
      .state
      .content
      .language(language)
      .ok_or_else(|| SessionError::UnknownLanguage(language.to_string()))?;

    let out = LanguageOut {
      name: entry.name.clone(),
      description: entry.description.clone(),
      difficulty: entry.difficulty.clone(),
      drill_sergeant_take: entry.drill_sergeant_take.clone(),
      use_cases: entry.use_cases.clone(),
      sample_code: entry.sample_code.clone(),
      challenge_count: entry.challenges.len(),
      started: learner.has_started(&entry.name),
      completed: learner.languages_completed.contains(&entry.name),
      attempts: learner.attempts(&entry.name),
    };
    self.selected = Some(out.name.clone());
    Ok(out)
  }

  pub fn show_resources(&self) -> Result<ResourcesOut, SessionError> {
    let language = self.selected.as_deref().ok_or(SessionError::NoLanguageSelected)?;
    let resources = self
      .state
      .content
      .language(language)
      .map(|l| l.learning_resources.clone())
      .unwrap_or_default();
    Ok(ResourcesOut { language: language.to_string(), resources, footer: self.ui("resources_footer")? })
  }

  /// Start the selected language. Only the first commitment earns the bonus.
  #[instrument(level = "info", skip(self))]
  pub fn commit_language(&mut self) -> Result<CommitOut, SessionError> {
    self.require(Screen::Dashboard, "commit_language")?;
    let language = self.selected.clone().ok_or(SessionError::NoLanguageSelected)?;
    let bonus = self.state.config.motivation.commit_bonus;

    let (first_time, motivation) = {
      let learner = self.learner.as_mut().ok_or(SessionError::NotEnrolled)?;
      let first = learner.start_language(&language);
      if first {
        learner.update_motivation(bonus);
      }
      (first, learner.motivation)
    };

    let motivation_text = motivation.to_string();
    let out = if first_time {
      CommitOut {
        title: self.notice_title("commitment_accepted"),
        message: self
          .tux
          .message("commit_accepted", &[("language", &language), ("motivation", &motivation_text)])?,
        speech: Some(self.tux.pick(PhraseCategory::Speech("starting_language"), &[("language", &language)])?),
        language,
        first_time,
        motivation,
      }
    } else {
      CommitOut {
        title: self.notice_title("already_committed"),
        message: self.tux.message("already_committed", &[("language", &language)])?,
        speech: None,
        language,
        first_time,
        motivation,
      }
    };
    info!(target: "session", language = %out.language, first_time, motivation, "Language commitment");
    Ok(out)
  }

  #[instrument(level = "info", skip(self))]
  pub fn request_challenge(&mut self) -> Result<ChallengeOfferOut, SessionError> {
    let next = self.screen.next(&ScreenEvent::OpenChallengeOffer)?;
    let language = self.selected.clone().ok_or(SessionError::NoLanguageSelected)?;
    let name = self.learner.as_ref().ok_or(SessionError::NotEnrolled)?.name.clone();
    if !self.state.content.has_challenges(&language) {
      return Err(SessionError::NoChallenges(language));
    }

    let challenge = self
      .state
      .content
      .random_challenge(&language, self.tux.rng())
      .cloned()
      .ok_or_else(|| SessionError::NoChallenges(language.clone()))?;
    let number = self
      .state
      .content
      .challenges(&language)
      .iter()
      .position(|c| *c == challenge)
      .map_or(1, |i| i + 1);
    let headline = self.tux.message(
      "challenge_offer",
      &[("number", &number.to_string()), ("language", &language), ("name", &name)],
    )?;

    info!(target: "session", %language, title = %challenge.title, number, "Challenge offered");
    self.offer = Some(challenge.clone());
    self.screen = next;
    Ok(ChallengeOfferOut { language, number, headline, challenge, screen: next })
  }

  /// Write the offered challenge to disk and return to the dashboard.
  /// A write failure keeps the offer open.
  #[instrument(level = "info", skip(self))]
  pub fn accept_challenge(&mut self) -> Result<ChallengeFileOut, SessionError> {
    self.require(Screen::ChallengeOffer, "accept_challenge")?;
    let next = self.screen.next(&ScreenEvent::ModalDone)?;
    let challenge = self.offer.clone().ok_or(TransitionError::NotAllowed {
      from: self.screen,
      event: "accept_challenge",
    })?;
    let language = self.selected.clone().ok_or(SessionError::NoLanguageSelected)?;
    let bonus = self.state.config.motivation.accept_bonus;

    let learner = self.learner.as_mut().ok_or(SessionError::NotEnrolled)?;
    let path = self.state.files.create(&ChallengeRequest {
      language: &language,
      title: &challenge.title,
      description: &challenge.description,
      difficulty: &challenge.difficulty,
      learner: &learner.name,
    })?;
    let motivation = learner.update_motivation(bonus);

    let path = path.display().to_string();
    let message = self
      .tux
      .message("challenge_accepted", &[("path", &path), ("motivation", &motivation.to_string())])?;
    let notice = self.notice_title("challenge_accepted");

    self.offer = None;
    self.screen = next;
    Ok(ChallengeFileOut { language, title: challenge.title, path, notice, message, motivation, screen: next })
  }

  pub fn decline_challenge(&mut self) -> Result<DashboardOut, SessionError> {
    self.require(Screen::ChallengeOffer, "decline_challenge")?;
    let next = self.screen.next(&ScreenEvent::ModalDone)?;
    let out = self.dashboard_for(next)?;
    if let Some(c) = self.offer.take() {
      info!(target: "session", title = %c.title, "Challenge declined");
    }
    self.screen = next;
    Ok(out)
  }

  /// Open the submission modal for `code` written in the selected language.
  #[instrument(level = "info", skip(self, code), fields(code_len = code.len()))]
  pub fn open_submission(&mut self, code: &str) -> Result<SubmissionOut, SessionError> {
    let next = self.screen.next(&ScreenEvent::OpenSubmission)?;
    let language = self.selected.clone().ok_or(SessionError::NoLanguageSelected)?;
    if code.trim().is_empty() {
      return Err(SessionError::NothingToSubmit);
    }
    let attempts = self.learner.as_ref().ok_or(SessionError::NotEnrolled)?.attempts(&language);
    let submit_button = self.ui("submit_button")?;

    let briefing = mission_briefing(code);
    self.draft = Some(Draft { language: language.clone(), code: code.to_string(), briefing: briefing.clone() });
    self.screen = next;
    Ok(SubmissionOut { language, briefing, code_len: code.len(), attempts, submit_button, screen: next })
  }

  /// Hand the open submission to the grader. Rejected while a review is in flight.
  #[instrument(level = "info", skip(self))]
  pub fn submit_for_review(&mut self) -> Result<(GradingJob, ReviewingOut), SessionError> {
    self.require(Screen::Submission, "submit_for_review")?;
    if self.in_flight.is_some() {
      return Err(SessionError::GradingInFlight);
    }
    let draft = self.draft.as_ref().ok_or(SessionError::NothingToSubmit)?;
    let job = GradingJob {
      language: draft.language.clone(),
      challenge_desc: draft.briefing.clone(),
      code: draft.code.clone(),
    };
    let button = self.ui("analyzing")?;
    let text = self.ui("reviewing")?;

    let attempt = self.learner.as_mut().ok_or(SessionError::NotEnrolled)?.record_attempt(&job.language);
    self.in_flight = Some(job.language.clone());
    info!(target: "session", language = %job.language, attempt, code_len = job.code.len(), "Submission sent for review");
    Ok((job.clone(), ReviewingOut { language: job.language, attempt, button, text }))
  }

  /// Apply the one result of the in-flight review.
  ///
  /// Motivation moves on every result, including a failed review, which takes
  /// the failure penalty. All text is rendered before the learner is touched, so
  /// an error leaves the profile as it was; the in-flight review is cleared either way.
  #[instrument(level = "info", skip(self, result), fields(success = result.success, emotion = %result.tux_emotion))]
  pub fn apply_grading(&mut self, result: GradingResult) -> Result<GradingOut, SessionError> {
    let Some(language) = self.in_flight.take() else {
      warn!(target: "session", "Grading result arrived with no review in flight; ignored");
      return Err(TransitionError::NotAllowed { from: self.screen, event: "grading_result" }.into());
    };
    if self.learner.is_none() {
      return Err(SessionError::NotEnrolled);
    }

    let response = self.tux.emotional_response(result.tux_emotion, Some(&result))?;
    let speech = if result.correct {
      Some(self.tux.pick(PhraseCategory::Speech("completion"), &[])?)
    } else if result.success && result.completeness < 50 {
      Some(self.tux.pick(PhraseCategory::Speech("struggle"), &[])?)
    } else {
      None
    };
    let submit_button = self.ui("submit_button")?;

    let m = &self.state.config.motivation;
    let delta = if result.correct {
      m.correct_bonus
    } else if result.completeness >= 50 {
      m.partial_bonus
    } else {
      m.failure_penalty
    };

    let learner = self.learner.as_mut().ok_or(SessionError::NotEnrolled)?;
    if result.correct {
      learner.complete_language(&language);
    }
    let motivation = learner.update_motivation(delta);
    let completed = learner.languages_completed.contains(&language);

    info!(target: "session", %language, correct = result.correct, completeness = result.completeness, delta, motivation, "Grading applied");
    Ok(GradingOut {
      language,
      accent: self.tux.accent(),
      submit_button,
      result,
      response,
      motivation,
      completed,
      speech,
    })
  }

  pub fn close_submission(&mut self) -> Result<DashboardOut, SessionError> {
    self.require(Screen::Submission, "close_submission")?;
    let next = self.screen.next(&ScreenEvent::ModalDone)?;
    let out = self.dashboard_for(next)?;
    self.draft = None;
    self.screen = next;
    Ok(out)
  }

  /// In-place notice for a failed operation, in Tux's voice where one exists.
  pub fn notice(&self, err: &SessionError) -> NoticeOut {
    let (title_key, message) = match err {
      SessionError::NoLanguageSelected => ("hold_it", self.tux.message("pick_language_first", &[])),
      SessionError::UnknownLanguage(l) => ("hold_it", self.tux.message("unknown_language", &[("language", l)])),
      SessionError::NoChallenges(l) => ("tux_says", self.tux.message("no_challenges", &[("language", l)])),
      SessionError::GradingInFlight => ("hold_it", self.tux.message("review_in_progress", &[])),
      SessionError::NothingToSubmit => ("hold_it", self.tux.message("nothing_to_submit", &[])),
      SessionError::Io(_) => ("file_error", Ok(err.to_string())),
      e if e.is_user_input() => ("hold_it", Ok(err.to_string())),
      _ => ("error", Ok(err.to_string())),
    };
    NoticeOut {
      title: self.notice_title(title_key),
      message: message.unwrap_or_else(|_| err.to_string()),
      screen: self.screen,
    }
  }

  fn dashboard_for(&mut self, screen: Screen) -> Result<DashboardOut, SessionError> {
    let learner = self.learner.as_ref().ok_or(SessionError::NotEnrolled)?;
    let motivation_phrase = self.tux.motivation_phrase(learner.motivation, &learner.name)?;
    let languages = self
      .state
      .content
      .languages()
      .map(|l| LanguageSummary {
        name: l.name.clone(),
        difficulty: l.difficulty.clone(),
        started: learner.has_started(&l.name),
        completed: learner.languages_completed.contains(&l.name),
      })
      .collect();
    Ok(DashboardOut {
      learner: learner.name.clone(),
      motivation: learner.motivation,
      tier: learner.motivation_tier(),
      motivation_phrase,
      accent: self.tux.accent(),
      prompt: self.ui("select_language_prompt")?,
      languages,
      selected: self.selected.clone(),
      screen,
    })
  }

  fn require(&self, screen: Screen, event: &'static str) -> Result<(), SessionError> {
    if self.screen == screen {
      Ok(())
    } else {
      Err(TransitionError::NotAllowed { from: self.screen, event }.into())
    }
  }

  fn ui(&self, key: &str) -> Result<String, SessionError> {
    Ok(self.state.resources.text(Category::Ui, key)?.to_string())
  }

  fn notice_title(&self, key: &str) -> String {
    self
      .state
      .resources
      .text(Category::Ui, &format!("notices.{key}"))
      .map(str::to_string)
      .unwrap_or_else(|_| key.to_uppercase())
  }
}
