//! Core behaviors behind the WebSocket handler.
//!
//! This includes:
//!   - Dispatching one client message to the session and shaping the reply
//!   - Running a grading job off the session loop and handing back its single result
//!
//! Grading runs on its own task. Whatever happens there (success, remote error,
//! panic) exactly one `GradingResult` is sent back through the oneshot channel.

use std::sync::Arc;

use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument};

use crate::domain::GradingResult;
use crate::error::SessionError;
use crate::grading::CodeAnalyzer;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::session::{GradingJob, Session};

/// Run `job` on a separate task; a panic inside the analyzer becomes a failed result.
#[instrument(level = "info", skip(analyzer, job), fields(language = %job.language, code_len = job.code.len()))]
pub async fn grade(analyzer: Arc<dyn CodeAnalyzer>, job: GradingJob) -> GradingResult {
  let handle = tokio::spawn(async move {
    analyzer.analyze(&job.language, &job.challenge_desc, &job.code).await
  });
  match handle.await {
    Ok(result) => result,
    Err(e) => {
      error!(target: "grading", error = %e, "Grading task failed");
      GradingResult::failed(format!("Analysis failed: {e}"))
    }
  }
}

/// Spawn `grade` and return the receiving end of its result.
pub fn spawn_grading(analyzer: Arc<dyn CodeAnalyzer>, job: GradingJob) -> oneshot::Receiver<GradingResult> {
  let (tx, rx) = oneshot::channel();
  tokio::spawn(async move {
    let result = grade(analyzer, job).await;
    if tx.send(result).is_err() {
      debug!(target: "grading", "Session closed before grading finished; result dropped");
    }
  });
  rx
}

/// Apply a single client message. Returns the reply and, for a submission,
/// the job the caller must start.
pub fn dispatch(session: &mut Session, msg: ClientWsMessage) -> (ServerWsMessage, Option<GradingJob>) {
  let outcome = match msg {
    ClientWsMessage::Ping => Ok(ServerWsMessage::Pong),
    ClientWsMessage::Hello => session.welcome().map(ServerWsMessage::Welcome),
    ClientWsMessage::Enroll { name } => session.enroll(&name).map(ServerWsMessage::Enrolled),
    ClientWsMessage::AcknowledgeSpeech => session.acknowledge().map(ServerWsMessage::Dashboard),
    ClientWsMessage::Dashboard => session.dashboard().map(ServerWsMessage::Dashboard),
    ClientWsMessage::SelectLanguage { language } => session.select_language(&language).map(ServerWsMessage::Language),
    ClientWsMessage::ShowResources => session.show_resources().map(ServerWsMessage::Resources),
    ClientWsMessage::CommitLanguage => session.commit_language().map(ServerWsMessage::Committed),
    ClientWsMessage::RequestChallenge => session.request_challenge().map(ServerWsMessage::ChallengeOffer),
    ClientWsMessage::AcceptChallenge => session.accept_challenge().map(ServerWsMessage::ChallengeAccepted),
    ClientWsMessage::DeclineChallenge => session.decline_challenge().map(ServerWsMessage::Dashboard),
    ClientWsMessage::OpenSubmission { code } => session.open_submission(&code).map(ServerWsMessage::SubmissionOpened),
    ClientWsMessage::CloseSubmission => session.close_submission().map(ServerWsMessage::Dashboard),
    ClientWsMessage::SubmitForReview => {
      return match session.submit_for_review() {
        Ok((job, reviewing)) => (ServerWsMessage::Reviewing(reviewing), Some(job)),
        Err(e) => (failure_reply(session, e), None),
      };
    }
  };

  match outcome {
    Ok(reply) => (reply, None),
    Err(e) => (failure_reply(session, e), None),
  }
}

/// Reply for a finished grading job.
pub fn grading_reply(session: &mut Session, result: GradingResult) -> ServerWsMessage {
  match session.apply_grading(result) {
    Ok(out) => ServerWsMessage::GradingResult(out),
    Err(e) => failure_reply(session, e),
  }
}

fn failure_reply(session: &Session, err: SessionError) -> ServerWsMessage {
  if err.is_user_input() {
    info!(target: "session", error = %err, screen = %session.screen(), modal = session.screen().is_modal(), "Rejected user input");
  } else {
    error!(target: "session", error = %err, screen = %session.screen(), selected = ?session.selected(), "Operation failed");
  }
  ServerWsMessage::Notice(session.notice(&err))
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use rand::rngs::mock::StepRng;

  use crate::config::AppConfig;
  use crate::domain::Emotion;
  use crate::grading::{derive_emotion, OfflineAnalyzer};
  use crate::state::AppState;

  struct FixedAnalyzer;

  #[async_trait]
  impl CodeAnalyzer for FixedAnalyzer {
    async fn analyze(&self, _language: &str, challenge_desc: &str, _code: &str) -> GradingResult {
      GradingResult {
        success: true,
        correct: true,
        completeness: 100,
        quality_score: 96,
        issues: vec![],
        strengths: vec!["stayed on mission".into()],
        suggestions: vec![],
        summary: challenge_desc.to_string(),
        tux_emotion: derive_emotion(true, 100.0, 96.0, false),
      }
    }
  }

  struct PanickingAnalyzer;

  #[async_trait]
  impl CodeAnalyzer for PanickingAnalyzer {
    async fn analyze(&self, _language: &str, _challenge_desc: &str, _code: &str) -> GradingResult {
      panic!("grader blew up")
    }
  }

  fn job() -> GradingJob {
    GradingJob { language: "Rust".into(), challenge_desc: "Build a stack".into(), code: "fn main() {}".into() }
  }

  fn session(dir: &std::path::Path) -> Session {
    let mut cfg = AppConfig::default();
    cfg.app.output_dir = dir.to_path_buf();
    let state = AppState::from_config(cfg, None).unwrap().with_analyzer(Arc::new(FixedAnalyzer));
    Session::new(Arc::new(state), Box::new(StepRng::new(0, 0)))
  }

  fn send(s: &mut Session, json: &str) -> (ServerWsMessage, Option<GradingJob>) {
    dispatch(s, serde_json::from_str(json).unwrap())
  }

  #[tokio::test]
  async fn spawned_grading_delivers_one_result() {
    let rx = spawn_grading(Arc::new(FixedAnalyzer), job());
    let result = rx.await.unwrap();
    assert_eq!(result.tux_emotion, Emotion::Exceptional);
    assert_eq!(result.summary, "Build a stack");
  }

  #[tokio::test]
  async fn panicking_grader_becomes_confused_result() {
    let result = spawn_grading(Arc::new(PanickingAnalyzer), job()).await.unwrap();
    assert!(!result.success);
    assert_eq!(result.tux_emotion, Emotion::Confused);
  }

  #[tokio::test]
  async fn offline_grader_result_is_not_success() {
    let result = grade(Arc::new(OfflineAnalyzer), job()).await;
    assert!(!result.success);
  }

  #[tokio::test]
  async fn full_session_over_dispatch() {
    let tmp = tempfile::tempdir().unwrap();
    let mut s = session(tmp.path());

    assert!(matches!(send(&mut s, r#"{"type":"hello"}"#).0, ServerWsMessage::Welcome(_)));
    assert!(matches!(send(&mut s, r#"{"type":"enroll","name":""}"#).0, ServerWsMessage::Notice(_)));
    assert!(matches!(send(&mut s, r#"{"type":"enroll","name":"Grace"}"#).0, ServerWsMessage::Enrolled(_)));
    assert!(matches!(send(&mut s, r#"{"type":"acknowledge_speech"}"#).0, ServerWsMessage::Dashboard(_)));
    assert!(matches!(send(&mut s, r#"{"type":"select_language","language":"Rust"}"#).0, ServerWsMessage::Language(_)));
    assert!(matches!(send(&mut s, r#"{"type":"show_resources"}"#).0, ServerWsMessage::Resources(_)));
    assert!(matches!(send(&mut s, r#"{"type":"commit_language"}"#).0, ServerWsMessage::Committed(_)));
    assert!(matches!(send(&mut s, r#"{"type":"request_challenge"}"#).0, ServerWsMessage::ChallengeOffer(_)));

    let (reply, _) = send(&mut s, r#"{"type":"accept_challenge"}"#);
    let ServerWsMessage::ChallengeAccepted(file) = reply else { panic!("expected challenge_accepted") };
    let code = std::fs::read_to_string(&file.path).unwrap();

    let open = serde_json::json!({ "type": "open_submission", "code": code }).to_string();
    assert!(matches!(send(&mut s, &open).0, ServerWsMessage::SubmissionOpened(_)));

    let (reply, job) = send(&mut s, r#"{"type":"submit_for_review"}"#);
    assert!(matches!(reply, ServerWsMessage::Reviewing(_)));
    let job = job.unwrap();
    let (reply, none) = send(&mut s, r#"{"type":"submit_for_review"}"#);
    assert!(none.is_none());
    assert!(matches!(reply, ServerWsMessage::Notice(ref n) if n.title == "HOLD IT!"));

    let result = spawn_grading(Arc::new(FixedAnalyzer), job).await.unwrap();
    let ServerWsMessage::GradingResult(out) = grading_reply(&mut s, result) else { panic!("expected grading_result") };
    assert!(out.completed);
    // The briefing travelled from the generated file into the grading request.
    assert!(!out.result.summary.is_empty());
    assert_ne!(out.result.summary, "Complete the coding challenge");

    assert!(matches!(send(&mut s, r#"{"type":"close_submission"}"#).0, ServerWsMessage::Dashboard(_)));
  }
}
