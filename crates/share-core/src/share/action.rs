use serde::{Deserialize, Serialize};
use std::fmt;

const ACTION_SEND: &str = "android.intent.action.SEND";
const ACTION_SEND_MULTIPLE: &str = "android.intent.action.SEND_MULTIPLE";
const ACTION_VIEW: &str = "android.intent.action.VIEW";

/// Logical share action.
///
/// Serialized as a bare string: `"SEND"`, `"VIEW"`, or the untranslated action
/// text for anything unrecognised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ShareAction {
    Send,
    View,
    /// Unknown platform action, passed through verbatim
    Other(String),
}

impl ShareAction {
    pub fn as_str(&self) -> &str {
        match self {
            ShareAction::Send => "SEND",
            ShareAction::View => "VIEW",
            ShareAction::Other(action) => action,
        }
    }
}

/// Map a raw platform action to its logical action.
///
/// Total: unknown actions are passed through, never rejected. The logical
/// literals map to themselves, so translating twice is the same as once.
pub fn translate_action(action: &str) -> ShareAction {
    match action {
        ACTION_SEND | ACTION_SEND_MULTIPLE | "SEND" => ShareAction::Send,
        ACTION_VIEW | "VIEW" => ShareAction::View,
        other => ShareAction::Other(other.to_string()),
    }
}

impl fmt::Display for ShareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ShareAction {
    fn from(s: String) -> Self {
        translate_action(&s)
    }
}

impl From<ShareAction> for String {
    fn from(action: ShareAction) -> Self {
        match action {
            ShareAction::Other(action) => action,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_family_maps_to_send() {
        assert_eq!(translate_action(ACTION_SEND), ShareAction::Send);
        assert_eq!(translate_action(ACTION_SEND_MULTIPLE), ShareAction::Send);
    }

    #[test]
    fn test_view_maps_to_view() {
        assert_eq!(translate_action(ACTION_VIEW), ShareAction::View);
    }

    #[test]
    fn test_unknown_action_passes_through() {
        assert_eq!(
            translate_action("android.intent.action.EDIT"),
            ShareAction::Other("android.intent.action.EDIT".to_string())
        );
        assert_eq!(translate_action(""), ShareAction::Other(String::new()));
    }

    #[test]
    fn test_translate_is_idempotent() {
        for raw in [
            ACTION_SEND,
            ACTION_SEND_MULTIPLE,
            ACTION_VIEW,
            "android.intent.action.PICK",
            "send",
        ] {
            let once = translate_action(raw);
            let twice = translate_action(once.as_str());
            assert_eq!(once, twice, "translate not idempotent for {raw}");
        }
    }

    #[test]
    fn test_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(ShareAction::Send).unwrap(),
            serde_json::json!("SEND")
        );
        assert_eq!(
            serde_json::to_value(ShareAction::Other("custom".into())).unwrap(),
            serde_json::json!("custom")
        );
    }
}
