//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! The server only sends view models; layout and styling are the front-end's business.

use serde::{Deserialize, Serialize};

use crate::domain::{Challenge, GradingResult, MotivationTier};
use crate::screen::Screen;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Hello,
    Enroll {
        name: String,
    },
    AcknowledgeSpeech,
    /// Re-send the current dashboard.
    Dashboard,
    SelectLanguage {
        language: String,
    },
    ShowResources,
    CommitLanguage,
    RequestChallenge,
    AcceptChallenge,
    DeclineChallenge,
    OpenSubmission {
        code: String,
    },
    SubmitForReview,
    CloseSubmission,
}

impl ClientWsMessage {
    /// Wire tag, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            ClientWsMessage::Ping => "ping",
            ClientWsMessage::Hello => "hello",
            ClientWsMessage::Enroll { .. } => "enroll",
            ClientWsMessage::AcknowledgeSpeech => "acknowledge_speech",
            ClientWsMessage::Dashboard => "dashboard",
            ClientWsMessage::SelectLanguage { .. } => "select_language",
            ClientWsMessage::ShowResources => "show_resources",
            ClientWsMessage::CommitLanguage => "commit_language",
            ClientWsMessage::RequestChallenge => "request_challenge",
            ClientWsMessage::AcceptChallenge => "accept_challenge",
            ClientWsMessage::DeclineChallenge => "decline_challenge",
            ClientWsMessage::OpenSubmission { .. } => "open_submission",
            ClientWsMessage::SubmitForReview => "submit_for_review",
            ClientWsMessage::CloseSubmission => "close_submission",
        }
    }

    /// Length of submitted code, if the message carries any. The code itself is never logged.
    pub fn code_len(&self) -> Option<usize> {
        match self {
            ClientWsMessage::OpenSubmission { code } => Some(code.len()),
            _ => None,
        }
    }
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Welcome(WelcomeOut),
    Enrolled(EnrolledOut),
    Dashboard(DashboardOut),
    Language(LanguageOut),
    Resources(ResourcesOut),
    Committed(CommitOut),
    ChallengeOffer(ChallengeOfferOut),
    ChallengeAccepted(ChallengeFileOut),
    SubmissionOpened(SubmissionOut),
    Reviewing(ReviewingOut),
    GradingResult(GradingOut),
    /// User-input problem or I/O failure; session state is unchanged.
    Notice(NoticeOut),
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct WelcomeOut {
    pub title: String,
    pub subtitle: String,
    pub intro: String,
    pub prompt: String,
    pub enroll_button: String,
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct EnrolledOut {
    pub name: String,
    pub speech: String,
    pub acknowledge_button: String,
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct LanguageSummary {
    pub name: String,
    pub difficulty: String,
    pub started: bool,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct DashboardOut {
    pub learner: String,
    pub motivation: u8,
    pub tier: MotivationTier,
    pub motivation_phrase: String,
    pub accent: String,
    pub prompt: String,
    pub languages: Vec<LanguageSummary>,
    pub selected: Option<String>,
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct LanguageOut {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub drill_sergeant_take: String,
    pub use_cases: Vec<String>,
    pub sample_code: String,
    pub challenge_count: usize,
    pub started: bool,
    pub completed: bool,
    pub attempts: u32,
}

#[derive(Debug, Serialize)]
pub struct ResourcesOut {
    pub language: String,
    pub resources: Vec<String>,
    pub footer: String,
}

#[derive(Debug, Serialize)]
pub struct CommitOut {
    pub language: String,
    pub first_time: bool,
    pub motivation: u8,
    pub title: String,
    pub message: String,
    pub speech: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChallengeOfferOut {
    pub language: String,
    pub number: usize,
    pub headline: String,
    pub challenge: Challenge,
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct ChallengeFileOut {
    pub language: String,
    pub title: String,
    pub path: String,
    pub notice: String,
    pub message: String,
    pub motivation: u8,
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct SubmissionOut {
    pub language: String,
    pub briefing: String,
    pub code_len: usize,
    pub attempts: u32,
    pub submit_button: String,
    pub screen: Screen,
}

#[derive(Debug, Serialize)]
pub struct ReviewingOut {
    pub language: String,
    pub attempt: u32,
    pub button: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GradingOut {
    pub language: String,
    pub result: GradingResult,
    pub response: String,
    pub accent: String,
    pub motivation: u8,
    pub completed: bool,
    pub speech: Option<String>,
    pub submit_button: String,
}

#[derive(Debug, Serialize)]
pub struct NoticeOut {
    pub title: String,
    pub message: String,
    pub screen: Screen,
}

//
// HTTP response DTOs
//

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[derive(Debug, Serialize)]
pub struct LanguageListItem {
    pub name: String,
    pub difficulty: String,
    pub challenges: usize,
}

#[derive(Debug, Serialize)]
pub struct LanguagesOut {
    pub languages: Vec<LanguageListItem>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_use_snake_case_tags() {
        let m: ClientWsMessage = serde_json::from_str(r#"{"type":"select_language","language":"Rust"}"#).unwrap();
        assert!(matches!(m, ClientWsMessage::SelectLanguage { ref language } if language == "Rust"));
        let m: ClientWsMessage = serde_json::from_str(r#"{"type":"submit_for_review"}"#).unwrap();
        assert!(matches!(m, ClientWsMessage::SubmitForReview));
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"type":"fly"}"#).is_err());
    }

    #[test]
    fn kind_and_code_len_describe_a_submission_without_its_code() {
        let m: ClientWsMessage =
            serde_json::from_str(r#"{"type":"open_submission","code":"SECRET_SOURCE fn main(){}"}"#).unwrap();
        assert_eq!(m.kind(), "open_submission");
        assert_eq!(m.code_len(), Some(25));
        let logged = format!("{} {:?}", m.kind(), m.code_len());
        assert!(!logged.contains("SECRET_SOURCE"));

        let m: ClientWsMessage = serde_json::from_str(r#"{"type":"enroll","name":"Ada"}"#).unwrap();
        assert_eq!(m.kind(), "enroll");
        assert_eq!(m.code_len(), None);
    }

    #[test]
    fn server_newtype_variants_are_flattened_under_the_tag() {
        let msg = ServerWsMessage::Notice(NoticeOut {
            title: "HOLD IT!".into(),
            message: "PICK A LANGUAGE FIRST!".into(),
            screen: Screen::Dashboard,
        });
        let v = serde_json::to_value(&msg).unwrap();
        assert_eq!(v["type"], "notice");
        assert_eq!(v["title"], "HOLD IT!");
        assert_eq!(v["screen"], "dashboard");
    }
}
