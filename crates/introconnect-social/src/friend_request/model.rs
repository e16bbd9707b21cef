use chrono::{DateTime, Utc};
use introconnect_common::{RequestId, SocialError, UserId};
use serde::{Deserialize, Serialize};

use super::view::FriendRequestView;
use crate::notifications::SeenFlags;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FriendRequestStatus {
    #[default]
    Pending,
    Accepted,
}

/// A friend request between two users.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    #[serde(alias = "_id")]
    pub id: RequestId,
    pub sender: UserId,
    pub recipient: UserId,
    #[serde(default)]
    pub status: FriendRequestStatus,
    /// Recipient has seen the request while it was pending.
    #[serde(default)]
    pub recipient_seen_pending: bool,
    /// Sender has seen that the request was accepted.
    #[serde(default)]
    pub sender_seen_accepted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FriendRequest {
    pub fn new(sender: UserId, recipient: UserId) -> Result<Self, SocialError> {
        if sender == recipient {
            return Err(SocialError::SelfRequest);
        }
        let now = Utc::now();
        Ok(Self {
            id: RequestId::new(),
            sender,
            recipient,
            status: FriendRequestStatus::Pending,
            recipient_seen_pending: false,
            sender_seen_accepted: false,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.status == FriendRequestStatus::Pending
    }

    pub fn is_accepted(&self) -> bool {
        self.status == FriendRequestStatus::Accepted
    }

    /// Move a pending request to accepted.
    ///
    /// The sender's flag is cleared so the acceptance shows up on their badge.
    pub fn accept(&mut self) -> Result<(), SocialError> {
        if self.is_accepted() {
            return Err(SocialError::InvalidTransition(format!(
                "request {} is already accepted",
                self.id
            )));
        }
        self.status = FriendRequestStatus::Accepted;
        self.sender_seen_accepted = false;
        self.touch();
        Ok(())
    }

    pub fn mark_seen_by_recipient(&mut self) {
        self.recipient_seen_pending = true;
        self.touch();
    }

    pub fn mark_seen_by_sender(&mut self) {
        self.sender_seen_accepted = true;
        self.touch();
    }

    pub fn view(&self) -> FriendRequestView {
        FriendRequestView {
            id: self.id.clone(),
            recipient_seen_pending: self.recipient_seen_pending,
            sender_seen_accepted: self.sender_seen_accepted,
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl SeenFlags for FriendRequest {
    fn recipient_seen_pending(&self) -> bool {
        self.recipient_seen_pending
    }

    fn sender_seen_accepted(&self) -> bool {
        self.sender_seen_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> FriendRequest {
        FriendRequest::new(UserId::from("alice"), UserId::from("bob")).unwrap()
    }

    #[test]
    fn new_request_is_pending_and_unseen() {
        let req = request();
        assert!(req.is_pending());
        assert!(!req.recipient_seen_pending);
        assert!(!req.sender_seen_accepted);
        assert_eq!(req.created_at, req.updated_at);
    }

    #[test]
    fn self_request_is_rejected() {
        let err = FriendRequest::new(UserId::from("alice"), UserId::from("alice")).unwrap_err();
        assert_eq!(err, SocialError::SelfRequest);
    }

    #[test]
    fn accept_flips_status() {
        let mut req = request();
        req.accept().unwrap();
        assert!(req.is_accepted());
        assert!(!req.sender_seen_accepted);
        assert!(req.updated_at >= req.created_at);
    }

    #[test]
    fn accept_twice_fails() {
        let mut req = request();
        req.accept().unwrap();
        let err = req.accept().unwrap_err();
        assert!(matches!(err, SocialError::InvalidTransition(_)));
    }

    #[test]
    fn accept_clears_early_sender_flag() {
        let mut req = request();
        req.mark_seen_by_sender();
        req.accept().unwrap();
        assert!(!req.sender_seen_accepted);
    }

    #[test]
    fn seen_flags_are_independent() {
        let mut req = request();
        req.mark_seen_by_recipient();
        assert!(req.recipient_seen_pending);
        assert!(!req.sender_seen_accepted);

        req.mark_seen_by_recipient();
        assert!(req.recipient_seen_pending);
    }

    #[test]
    fn view_copies_flags() {
        let mut req = request();
        req.mark_seen_by_recipient();
        let view = req.view();
        assert_eq!(view.id, req.id);
        assert!(view.recipient_seen_pending);
        assert!(!view.sender_seen_accepted);
    }

    #[test]
    fn deserializes_with_schema_defaults() {
        let json = r#"{
            "_id": "r1",
            "sender": "alice",
            "recipient": "bob",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }"#;
        let req: FriendRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.status, FriendRequestStatus::Pending);
        assert!(!req.recipient_seen_pending);
        assert!(!req.sender_seen_accepted);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&FriendRequestStatus::Accepted).unwrap();
        assert_eq!(json, "\"accepted\"");
    }
}
