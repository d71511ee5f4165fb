//! Error types for each layer of the boot camp.
//!
//! - `ResourceError`: loading / key-path lookup over the JSON resource documents
//! - `PersonaError`: phrase selection and template substitution
//! - `SessionError`: user-input and I/O failures surfaced to the learner
//! - `StartupError`: anything that prevents the server from starting

use thiserror::Error;

use crate::screen::TransitionError;

#[derive(Debug, Error)]
pub enum ResourceError {
  #[error("Required resource file not found: {path}")]
  MissingFile { path: String },

  #[error("Failed to read resource file {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("Resource file {path} is not valid JSON: {source}")]
  Parse {
    path: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("Missing resource key: {category}.{key}")]
  MissingKey { category: String, key: String },

  #[error("Resource {category}.{key} has the wrong shape (expected {expected})")]
  WrongShape {
    category: String,
    key: String,
    expected: &'static str,
  },
}

#[derive(Debug, Error)]
pub enum PersonaError {
  #[error(transparent)]
  Resource(#[from] ResourceError),

  #[error("No phrases available for {0}")]
  EmptyBucket(String),

  #[error("Template parameter '{0}' was not supplied")]
  MissingParameter(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
  #[error("Enroll first, recruit!")]
  NotEnrolled,

  #[error("No language selected")]
  NoLanguageSelected,

  #[error("Unknown language: {0}")]
  UnknownLanguage(String),

  #[error("No challenges available for {0}")]
  NoChallenges(String),

  #[error("A review is already in progress")]
  GradingInFlight,

  #[error("Nothing to submit")]
  NothingToSubmit,

  #[error(transparent)]
  Transition(#[from] TransitionError),

  #[error(transparent)]
  Persona(#[from] PersonaError),

  #[error(transparent)]
  Resource(#[from] ResourceError),

  #[error("Couldn't create challenge file: {0}")]
  Io(#[from] std::io::Error),
}

impl SessionError {
  /// User-input problems are reported in place as a notice; everything else is an error.
  pub fn is_user_input(&self) -> bool {
    matches!(
      self,
      SessionError::NotEnrolled
        | SessionError::NoLanguageSelected
        | SessionError::UnknownLanguage(_)
        | SessionError::NoChallenges(_)
        | SessionError::GradingInFlight
        | SessionError::NothingToSubmit
        | SessionError::Transition(_)
    )
  }
}

#[derive(Debug, Error)]
pub enum StartupError {
  #[error(transparent)]
  Resource(#[from] ResourceError),

  #[error("Failed to build HTTP client: {0}")]
  HttpClient(#[from] reqwest::Error),
}
