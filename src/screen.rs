//! Screen state machine: which view a session is currently showing.
//!
//!   LoggedOut --SubmitName(non-empty)--> Enrolling --AcknowledgeSpeech--> Dashboard
//!   Dashboard --OpenChallengeOffer--> ChallengeOffer --ModalDone--> Dashboard
//!   Dashboard --OpenSubmission-----> Submission     --ModalDone--> Dashboard
//!
//! Modal screens never move to each other directly.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    LoggedOut,
    Enrolling,
    Dashboard,
    ChallengeOffer,
    Submission,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::LoggedOut
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Screen::LoggedOut => "logged_out",
            Screen::Enrolling => "enrolling",
            Screen::Dashboard => "dashboard",
            Screen::ChallengeOffer => "challenge_offer",
            Screen::Submission => "submission",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenEvent {
    SubmitName(String),
    AcknowledgeSpeech,
    OpenChallengeOffer,
    OpenSubmission,
    /// A modal finished, either completed or cancelled.
    ModalDone,
}

impl ScreenEvent {
    fn label(&self) -> &'static str {
        match self {
            ScreenEvent::SubmitName(_) => "submit_name",
            ScreenEvent::AcknowledgeSpeech => "acknowledge_speech",
            ScreenEvent::OpenChallengeOffer => "open_challenge_offer",
            ScreenEvent::OpenSubmission => "open_submission",
            ScreenEvent::ModalDone => "modal_done",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("I need a NAME, recruit! SPEAK UP!")]
    EmptyName,

    #[error("'{event}' is not available on the {from} screen")]
    NotAllowed { from: Screen, event: &'static str },
}

impl Screen {
    /// Transition table. On error the caller keeps its current screen.
    pub fn next(self, event: &ScreenEvent) -> Result<Screen, TransitionError> {
        use Screen::*;
        use ScreenEvent::*;

        match (self, event) {
            (LoggedOut, SubmitName(name)) if name.trim().is_empty() => Err(TransitionError::EmptyName),
            (LoggedOut, SubmitName(_)) => Ok(Enrolling),
            (Enrolling, AcknowledgeSpeech) => Ok(Dashboard),
            (Dashboard, OpenChallengeOffer) => Ok(ChallengeOffer),
            (Dashboard, OpenSubmission) => Ok(Submission),
            (ChallengeOffer, ModalDone) | (Submission, ModalDone) => Ok(Dashboard),
            (from, ev) => Err(TransitionError::NotAllowed { from, event: ev.label() }),
        }
    }

    pub fn is_modal(self) -> bool {
        matches!(self, Screen::ChallengeOffer | Screen::Submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_keeps_logged_out() {
        let screen = Screen::LoggedOut;
        for name in ["", "   ", "\t\n"] {
            let err = screen.next(&ScreenEvent::SubmitName(name.into())).unwrap_err();
            assert_eq!(err, TransitionError::EmptyName);
        }
        assert_eq!(screen, Screen::LoggedOut);
    }

    #[test]
    fn non_empty_name_enters_enrolling_once() {
        let next = Screen::LoggedOut
            .next(&ScreenEvent::SubmitName("Ada".into()))
            .unwrap();
        assert_eq!(next, Screen::Enrolling);

        // A second submission is not a valid event once enrolling.
        let again = next.next(&ScreenEvent::SubmitName("Ada".into()));
        assert!(matches!(again, Err(TransitionError::NotAllowed { from: Screen::Enrolling, .. })));
    }

    #[test]
    fn full_flow_returns_to_dashboard_from_modals() {
        let s = Screen::LoggedOut
            .next(&ScreenEvent::SubmitName("Linus".into()))
            .and_then(|s| s.next(&ScreenEvent::AcknowledgeSpeech))
            .unwrap();
        assert_eq!(s, Screen::Dashboard);

        let offer = s.next(&ScreenEvent::OpenChallengeOffer).unwrap();
        assert!(offer.is_modal());
        assert_eq!(offer.next(&ScreenEvent::ModalDone).unwrap(), Screen::Dashboard);

        let sub = s.next(&ScreenEvent::OpenSubmission).unwrap();
        assert_eq!(sub.next(&ScreenEvent::ModalDone).unwrap(), Screen::Dashboard);
    }

    #[test]
    fn modals_never_chain() {
        assert!(Screen::ChallengeOffer.next(&ScreenEvent::OpenSubmission).is_err());
        assert!(Screen::Submission.next(&ScreenEvent::OpenChallengeOffer).is_err());
        assert!(Screen::Dashboard.next(&ScreenEvent::ModalDone).is_err());
        assert!(Screen::LoggedOut.next(&ScreenEvent::AcknowledgeSpeech).is_err());
    }
}
