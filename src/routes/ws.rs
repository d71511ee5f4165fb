//! WebSocket upgrade + session loop. One `Session` per connection.
//!
//! Each client message is parsed as JSON, applied to the session and answered
//! with a single JSON message. A submission starts a grading task; its result is
//! awaited alongside the socket and applied here, on the session's own loop.

use std::sync::Arc;
use async_trait::async_trait;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument};
use uuid::Uuid;

use crate::domain::GradingResult;
use crate::logic::{dispatch, grading_reply, spawn_grading};
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::session::Session;
use crate::state::AppState;

/// The two socket calls the session loop needs.
#[async_trait]
pub trait WsTransport: Send {
  async fn recv(&mut self) -> Option<Result<Message, axum::Error>>;
  async fn send(&mut self, msg: Message) -> Result<(), axum::Error>;
}

#[async_trait]
impl WsTransport for WebSocket {
  async fn recv(&mut self) -> Option<Result<Message, axum::Error>> {
    WebSocket::recv(self).await
  }

  async fn send(&mut self, msg: Message) -> Result<(), axum::Error> {
    WebSocket::send(self, msg).await
  }
}

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "tux_bootcamp", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

#[instrument(level = "info", skip(socket, state), fields(session_id = %Uuid::new_v4()))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "tux_bootcamp", "WebSocket connected");
  let session = run_session(&mut socket, state).await;
  let learner = session.learner().map(|l| l.name.as_str()).unwrap_or("-");
  info!(target: "tux_bootcamp", %learner, grading_pending = session.grading_pending(), "WebSocket disconnected");
}

/// Drive one session until the peer goes away. Returns the session for the exit log.
pub async fn run_session<T: WsTransport>(transport: &mut T, state: Arc<AppState>) -> Session {
  let mut session = Session::from_entropy(state.clone());
  let mut pending: Option<oneshot::Receiver<GradingResult>> = None;

  loop {
    let reply = tokio::select! {
      msg = transport.recv() => match msg {
        Some(Ok(Message::Text(txt))) => match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "session", kind = incoming.kind(), code_len = ?incoming.code_len(), "WS received");
            let (reply, job) = dispatch(&mut session, incoming);
            if let Some(job) = job {
              pending = Some(spawn_grading(state.analyzer.clone(), job));
            }
            reply
          }
          Err(e) => ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) },
        },
        Some(Ok(Message::Ping(payload))) => {
          let _ = transport.send(Message::Pong(payload)).await;
          continue;
        }
        Some(Ok(Message::Close(_))) | None => break,
        Some(Ok(_)) => continue,
        Some(Err(e)) => {
          error!(target: "tux_bootcamp", error = %e, "WS receive error");
          break;
        }
      },
      res = next_result(&mut pending), if pending.is_some() => {
        pending = None;
        let result = res.unwrap_or_else(|_| GradingResult::failed("Analysis failed: grading task ended without a result"));
        grading_reply(&mut session, result)
      }
    };

    let out = serde_json::to_string(&reply).unwrap_or_else(|e| {
      serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
    });

    if let Err(e) = transport.send(Message::Text(out)).await {
      error!(target: "tux_bootcamp", error = %e, "WS send error");
      break;
    }
  }
  session
}

async fn next_result(
  pending: &mut Option<oneshot::Receiver<GradingResult>>,
) -> Result<GradingResult, oneshot::error::RecvError> {
  match pending {
    Some(rx) => rx.await,
    None => std::future::pending().await,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::Value;
  use tokio::sync::{mpsc, Notify};

  use crate::config::AppConfig;
  use crate::grading::{derive_emotion, CodeAnalyzer};

  /// In-memory socket: the test pushes client frames and reads server frames.
  struct ChannelTransport {
    inbound: mpsc::UnboundedReceiver<Message>,
    outbound: mpsc::UnboundedSender<Message>,
  }

  #[async_trait]
  impl WsTransport for ChannelTransport {
    async fn recv(&mut self) -> Option<Result<Message, axum::Error>> {
      self.inbound.recv().await.map(Ok)
    }

    async fn send(&mut self, msg: Message) -> Result<(), axum::Error> {
      self.outbound.send(msg).map_err(axum::Error::new)
    }
  }

  /// Holds every review until the gate opens.
  struct GatedAnalyzer {
    gate: Arc<Notify>,
  }

  #[async_trait]
  impl CodeAnalyzer for GatedAnalyzer {
    async fn analyze(&self, _language: &str, _challenge_desc: &str, _code: &str) -> GradingResult {
      self.gate.notified().await;
      GradingResult {
        success: true,
        correct: true,
        completeness: 100,
        quality_score: 90,
        issues: vec![],
        strengths: vec![],
        suggestions: vec![],
        summary: "done".into(),
        tux_emotion: derive_emotion(true, 100.0, 90.0, false),
      }
    }
  }

  async fn reply(rx: &mut mpsc::UnboundedReceiver<Message>) -> Value {
    match rx.recv().await {
      Some(Message::Text(txt)) => serde_json::from_str(&txt).unwrap(),
      other => panic!("expected a text frame, got {other:?}"),
    }
  }

  fn text(json: &str) -> Message {
    Message::Text(json.to_string())
  }

  #[tokio::test]
  async fn session_loop_stays_responsive_and_applies_one_result() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cfg = AppConfig::default();
    cfg.app.output_dir = tmp.path().to_path_buf();
    let gate = Arc::new(Notify::new());
    let state = AppState::from_config(cfg, None)
      .unwrap()
      .with_analyzer(Arc::new(GatedAnalyzer { gate: gate.clone() }));

    let (client_tx, inbound) = mpsc::unbounded_channel();
    let (outbound, mut server_rx) = mpsc::unbounded_channel();
    let mut transport = ChannelTransport { inbound, outbound };
    let driver = tokio::spawn(async move { run_session(&mut transport, Arc::new(state)).await });

    for (msg, kind) in [
      (r#"{"type":"enroll","name":"Linus"}"#, "enrolled"),
      (r#"{"type":"acknowledge_speech"}"#, "dashboard"),
      (r#"{"type":"select_language","language":"Rust"}"#, "language"),
      (r#"{"type":"open_submission","code":"fn main() {}"}"#, "submission_opened"),
      (r#"{"type":"submit_for_review"}"#, "reviewing"),
    ] {
      client_tx.send(text(msg)).unwrap();
      assert_eq!(reply(&mut server_rx).await["type"], kind);
    }

    // Review still held: the loop keeps answering and refuses a second submit.
    client_tx.send(text(r#"{"type":"ping"}"#)).unwrap();
    assert_eq!(reply(&mut server_rx).await["type"], "pong");
    client_tx.send(text(r#"{"type":"submit_for_review"}"#)).unwrap();
    let busy = reply(&mut server_rx).await;
    assert_eq!(busy["type"], "notice");
    assert_eq!(busy["title"], "HOLD IT!");

    gate.notify_one();
    let graded = reply(&mut server_rx).await;
    assert_eq!(graded["type"], "grading_result");
    assert_eq!(graded["completed"], true);
    assert_eq!(graded["motivation"], 70);

    client_tx.send(text("{not json")).unwrap();
    assert_eq!(reply(&mut server_rx).await["type"], "error");

    drop(client_tx);
    let session = driver.await.unwrap();
    assert!(!session.grading_pending());
    assert_eq!(session.learner().unwrap().attempts("Rust"), 1);
    // Exactly one grading reply was delivered.
    assert!(server_rx.try_recv().is_err());
  }
}
