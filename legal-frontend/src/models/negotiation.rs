use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Transcript length after which a negotiation is closed locally.
pub const MAX_MESSAGES: usize = 10;

pub const STATUS_IN_PROGRESS: &str = "in_progress";
pub const STATUS_COMPLETED: &str = "completed";

/// The two negotiating parties; turns alternate between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    #[serde(rename = "user1")]
    User1,
    #[serde(rename = "user2")]
    User2,
}

impl Speaker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speaker::User1 => "user1",
            Speaker::User2 => "user2",
        }
    }

    pub fn other(&self) -> Speaker {
        match self {
            Speaker::User1 => Speaker::User2,
            Speaker::User2 => Speaker::User1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub summary: String,
    pub compromise: String,
}

/// Body of `POST /negotiate`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NegotiationRequest {
    pub negotiation_id: String,
    pub speaker: Speaker,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NegotiationResponse {
    pub negotiation_id: String,
    pub status: String,
    pub messages_remaining: i32,
    pub messages_sent: i32,
    pub user1_messages: i32,
    pub user2_messages: i32,
    #[serde(default)]
    pub messages: Option<Vec<ChatMessage>>,
    #[serde(default)]
    pub verdict: Option<Verdict>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnRejected {
    #[error("Message must not be blank")]
    BlankMessage,
    #[error("Negotiation is complete")]
    Completed,
}

/// Negotiation screen state, kept per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatState {
    /// Empty until the backend assigns one on the first turn.
    pub negotiation_id: String,
    pub current_speaker: Speaker,
    pub messages: Vec<ChatMessage>,
    pub messages_remaining: i32,
    pub messages_sent: i32,
    pub status: String,
    pub user1_messages: i32,
    pub user2_messages: i32,
    pub verdict: Option<Verdict>,
    pub error: Option<String>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            negotiation_id: String::new(),
            current_speaker: Speaker::User1,
            messages: Vec::new(),
            messages_remaining: MAX_MESSAGES as i32,
            messages_sent: 0,
            status: STATUS_IN_PROGRESS.to_string(),
            user1_messages: 0,
            user2_messages: 0,
            verdict: None,
            error: None,
        }
    }
}

impl ChatState {
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED || self.messages.len() >= MAX_MESSAGES
    }

    pub fn check_can_send(&self, message: &str) -> Result<(), TurnRejected> {
        if message.trim().is_empty() {
            return Err(TurnRejected::BlankMessage);
        }
        if self.is_completed() {
            return Err(TurnRejected::Completed);
        }
        Ok(())
    }

    pub fn next_request(&self, message: &str) -> NegotiationRequest {
        NegotiationRequest {
            negotiation_id: self.negotiation_id.clone(),
            speaker: self.current_speaker,
            message: message.to_string(),
        }
    }

    /// Record a turn the backend accepted and hand the floor to the other party.
    pub fn apply_success(&mut self, message: String, response: NegotiationResponse) {
        self.messages.push(ChatMessage {
            speaker: self.current_speaker.as_str().to_string(),
            message,
        });
        self.current_speaker = self.current_speaker.other();
        self.error = None;

        self.negotiation_id = response.negotiation_id;
        self.messages_remaining = response.messages_remaining;
        self.messages_sent = response.messages_sent;
        self.status = response.status;
        self.user1_messages = response.user1_messages;
        self.user2_messages = response.user2_messages;
        self.verdict = response.verdict;

        if self.messages.len() >= MAX_MESSAGES || self.messages_remaining <= 0 {
            self.status = STATUS_COMPLETED.to_string();
        }
    }

    pub fn apply_failure(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(id: &str, remaining: i32, sent: i32) -> NegotiationResponse {
        NegotiationResponse {
            negotiation_id: id.to_string(),
            status: STATUS_IN_PROGRESS.to_string(),
            messages_remaining: remaining,
            messages_sent: sent,
            user1_messages: (sent + 1) / 2,
            user2_messages: sent / 2,
            messages: None,
            verdict: None,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = ChatState::default();
        assert_eq!(state.messages_remaining, 10);
        assert_eq!(state.status, "in_progress");
        assert_eq!(state.current_speaker, Speaker::User1);
        assert!(state.negotiation_id.is_empty());
    }

    #[test]
    fn test_speaker_alternates_after_success() {
        let mut state = ChatState::default();

        let request = state.next_request("I propose 10 lakh");
        assert_eq!(request.speaker, Speaker::User1);
        assert_eq!(request.negotiation_id, "");
        state.apply_success("I propose 10 lakh".into(), response("neg-1", 9, 1));

        let request = state.next_request("Counter: 8 lakh");
        assert_eq!(request.speaker, Speaker::User2);
        assert_eq!(request.negotiation_id, "neg-1");
        state.apply_success("Counter: 8 lakh".into(), response("neg-1", 8, 2));

        assert_eq!(state.current_speaker, Speaker::User1);
        assert_eq!(state.messages[0].speaker, "user1");
        assert_eq!(state.messages[1].speaker, "user2");
        assert_eq!(state.messages_sent, 2);
    }

    #[test]
    fn test_failure_keeps_turn() {
        let mut state = ChatState::default();
        state.apply_failure("API error: 500 - Internal Server Error");

        assert_eq!(state.current_speaker, Speaker::User1);
        assert!(state.messages.is_empty());
        assert_eq!(
            state.error.as_deref(),
            Some("API error: 500 - Internal Server Error")
        );

        state.clear_error();
        assert!(state.error.is_none());
    }

    #[test]
    fn test_completes_after_ten_messages() {
        let mut state = ChatState::default();
        for i in 0..MAX_MESSAGES {
            assert!(state.check_can_send("offer").is_ok());
            // backend keeps reporting budget left; the local transcript closes it
            state.apply_success(format!("offer {}", i), response("neg-1", 5, i as i32 + 1));
        }

        assert_eq!(state.status, STATUS_COMPLETED);
        assert_eq!(state.check_can_send("one more"), Err(TurnRejected::Completed));
    }

    #[test]
    fn test_completes_when_backend_reports_zero_remaining() {
        let mut state = ChatState::default();
        let mut last = response("neg-1", 0, 1);
        last.verdict = Some(Verdict {
            summary: "Both parties agree on price".into(),
            compromise: "9 lakh".into(),
        });
        state.apply_success("final offer".into(), last);

        assert!(state.is_completed());
        assert_eq!(state.verdict.as_ref().unwrap().compromise, "9 lakh");
    }

    #[test]
    fn test_blank_message_rejected() {
        let state = ChatState::default();
        assert_eq!(state.check_can_send("   "), Err(TurnRejected::BlankMessage));
    }

    #[test]
    fn test_request_wire_format() {
        let state = ChatState::default();
        let body = serde_json::to_value(state.next_request("hello")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"negotiation_id": "", "speaker": "user1", "message": "hello"})
        );
    }
}
