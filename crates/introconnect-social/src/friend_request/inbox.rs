use introconnect_common::UserId;
use serde::{Deserialize, Deserializer, Serialize};

use super::model::FriendRequest;
use super::view::FriendRequestView;
use crate::notifications::{count_unread_breakdown, UnreadCounts};

/// Friend requests relevant to one user's notification badge.
///
/// `incoming_reqs` holds pending requests the user received;
/// `accepted_reqs` holds requests the user sent that were accepted.
/// Absent or `null` collections deserialize as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequests {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub incoming_reqs: Vec<FriendRequestView>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub accepted_reqs: Vec<FriendRequestView>,
}

impl FriendRequests {
    /// Partition `requests` from `user`'s point of view.
    pub fn for_user(user: &UserId, requests: &[FriendRequest]) -> Self {
        let incoming_reqs = requests
            .iter()
            .filter(|r| r.is_pending() && &r.recipient == user)
            .map(FriendRequest::view)
            .collect();
        let accepted_reqs = requests
            .iter()
            .filter(|r| r.is_accepted() && &r.sender == user)
            .map(FriendRequest::view)
            .collect();
        Self {
            incoming_reqs,
            accepted_reqs,
        }
    }

    pub fn unread(&self) -> UnreadCounts {
        count_unread_breakdown(&self.incoming_reqs, &self.accepted_reqs)
    }

    pub fn is_empty(&self) -> bool {
        self.incoming_reqs.is_empty() && self.accepted_reqs.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<FriendRequestView>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<FriendRequestView>>::deserialize(deserializer)?.unwrap_or_default())
}
