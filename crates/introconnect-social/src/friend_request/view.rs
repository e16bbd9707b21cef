use introconnect_common::RequestId;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::notifications::SeenFlags;

/// The read-only slice of a friend request the notification badge needs.
///
/// Anything other than a JSON boolean in a flag (missing, `null`, `0`, a
/// string) deserializes as `false`, and a missing id gets a fresh one, so a
/// malformed record shows up as unread instead of failing the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequestView {
    #[serde(default, alias = "_id")]
    pub id: RequestId,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub recipient_seen_pending: bool,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub sender_seen_accepted: bool,
}

impl FriendRequestView {
    pub fn unseen(id: impl Into<RequestId>) -> Self {
        Self {
            id: id.into(),
            recipient_seen_pending: false,
            sender_seen_accepted: false,
        }
    }
}

impl SeenFlags for FriendRequestView {
    fn recipient_seen_pending(&self) -> bool {
        self.recipient_seen_pending
    }

    fn sender_seen_accepted(&self) -> bool {
        self.sender_seen_accepted
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Other(IgnoredAny),
}

fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Other(_) => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mongo_style_document() {
        let json = r#"{"_id":"r1","recipientSeenPending":true,"senderSeenAccepted":false}"#;
        let view: FriendRequestView = serde_json::from_str(json).unwrap();
        assert_eq!(view.id.as_str(), "r1");
        assert!(view.recipient_seen_pending);
        assert!(!view.sender_seen_accepted);
    }

    #[test]
    fn missing_flags_read_as_unseen() {
        let view: FriendRequestView = serde_json::from_str(r#"{"id":"r2"}"#).unwrap();
        assert!(!view.recipient_seen_pending);
        assert!(!view.sender_seen_accepted);
    }

    #[test]
    fn null_flags_read_as_unseen() {
        let json = r#"{"id":"r3","recipientSeenPending":null,"senderSeenAccepted":null}"#;
        let view: FriendRequestView = serde_json::from_str(json).unwrap();
        assert_eq!(view, FriendRequestView::unseen("r3"));
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let json = serde_json::to_string(&FriendRequestView::unseen("r4")).unwrap();
        assert!(json.contains("\"recipientSeenPending\":false"));
        assert!(json.contains("\"senderSeenAccepted\":false"));
    }

    #[test]
    fn non_boolean_flags_read_as_unseen() {
        let json = r#"{"_id":"r5","recipientSeenPending":0,"senderSeenAccepted":"yes"}"#;
        let view: FriendRequestView = serde_json::from_str(json).unwrap();
        assert!(!view.recipient_seen_pending);
        assert!(!view.sender_seen_accepted);
    }

    #[test]
    fn object_flag_reads_as_unseen() {
        let json = r#"{"_id":"r6","recipientSeenPending":{"at":1},"senderSeenAccepted":true}"#;
        let view: FriendRequestView = serde_json::from_str(json).unwrap();
        assert!(!view.recipient_seen_pending);
        assert!(view.sender_seen_accepted);
    }

    #[test]
    fn missing_id_gets_a_fresh_one() {
        let view: FriendRequestView = serde_json::from_str("{}").unwrap();
        assert!(!view.id.as_str().is_empty());
        assert!(!view.recipient_seen_pending);
        assert!(!view.sender_seen_accepted);
    }
}
