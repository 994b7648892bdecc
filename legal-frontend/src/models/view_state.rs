use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// What a screen shows for its most recent backend request.
///
/// Serialized as `{"state": "idle"}`, `{"state": "loading"}`,
/// `{"state": "success", "data": ...}` or `{"state": "error", "message": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success { data: T },
    Error { message: String },
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn success(data: T) -> Self {
        ViewState::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ViewState::Error {
            message: message.into(),
        }
    }

    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ViewState::success(data),
            Err(e) => ViewState::error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(ViewState::<u32>::default(), ViewState::Idle);
    }

    #[test]
    fn test_tagged_serialization() {
        assert_eq!(
            serde_json::to_value(ViewState::<u32>::Loading).unwrap(),
            json!({"state": "loading"})
        );
        assert_eq!(
            serde_json::to_value(ViewState::success(vec![1, 2])).unwrap(),
            json!({"state": "success", "data": [1, 2]})
        );
        assert_eq!(
            serde_json::to_value(ViewState::<u32>::error("boom")).unwrap(),
            json!({"state": "error", "message": "boom"})
        );
    }

    #[test]
    fn test_from_result_keeps_error_text() {
        let state: ViewState<u32> = ViewState::from_result(Err("API error: 500"));
        assert_eq!(state, ViewState::error("API error: 500"));
    }

    #[test]
    fn test_session_round_trip() {
        let state = ViewState::success("contract".to_string());
        let stored = serde_json::to_string(&state).unwrap();
        let restored: ViewState<String> = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, state);
    }
}
