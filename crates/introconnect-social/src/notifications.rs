//! Unread notification badge.
//!
//! The badge counts pending requests the recipient has not looked at yet,
//! plus accepted requests the sender has not looked at yet. Nothing is
//! cached; callers recompute whenever they refetch the underlying lists.

/// Access to the two independent "seen" flags of a friend request.
pub trait SeenFlags {
    fn recipient_seen_pending(&self) -> bool;
    fn sender_seen_accepted(&self) -> bool;
}

/// Unread counts split by source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnreadCounts {
    pub incoming: usize,
    pub accepted: usize,
}

impl UnreadCounts {
    pub fn total(&self) -> usize {
        self.incoming + self.accepted
    }
}

/// Number of unseen items for the notification badge.
pub fn count_unread<T: SeenFlags>(incoming: &[T], accepted: &[T]) -> usize {
    count_unread_breakdown(incoming, accepted).total()
}

pub fn count_unread_breakdown<T: SeenFlags>(incoming: &[T], accepted: &[T]) -> UnreadCounts {
    UnreadCounts {
        incoming: incoming
            .iter()
            .filter(|r| !r.recipient_seen_pending())
            .count(),
        accepted: accepted
            .iter()
            .filter(|r| !r.sender_seen_accepted())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::friend_request::FriendRequestView;

    fn view(id: &str, recipient_seen: bool, sender_seen: bool) -> FriendRequestView {
        FriendRequestView {
            id: id.into(),
            recipient_seen_pending: recipient_seen,
            sender_seen_accepted: sender_seen,
        }
    }

    #[test]
    fn empty_inputs_count_zero() {
        let none: Vec<FriendRequestView> = Vec::new();
        assert_eq!(count_unread(&none, &none), 0);
    }

    #[test]
    fn counts_each_side_by_its_own_flag() {
        let incoming = vec![
            view("a", false, true),
            view("b", true, false),
            view("c", false, false),
        ];
        let accepted = vec![view("d", false, false), view("e", true, true)];

        let counts = count_unread_breakdown(&incoming, &accepted);
        assert_eq!(counts.incoming, 2);
        assert_eq!(counts.accepted, 1);
        assert_eq!(count_unread(&incoming, &accepted), 3);
    }

    #[test]
    fn sender_flag_is_ignored_for_incoming() {
        let incoming = vec![view("a", true, false)];
        let none: Vec<FriendRequestView> = Vec::new();
        assert_eq!(count_unread(&incoming, &none), 0);
    }

    #[test]
    fn recipient_flag_is_ignored_for_accepted() {
        let accepted = vec![view("a", false, true)];
        let none: Vec<FriendRequestView> = Vec::new();
        assert_eq!(count_unread(&none, &accepted), 0);
    }

    #[test]
    fn order_does_not_matter() {
        let mut incoming = vec![
            view("a", false, false),
            view("b", true, false),
            view("c", false, true),
            view("d", true, true),
        ];
        let mut accepted = vec![view("e", false, false), view("f", true, true)];
        let expected = count_unread(&incoming, &accepted);

        incoming.reverse();
        accepted.reverse();
        assert_eq!(count_unread(&incoming, &accepted), expected);

        incoming.rotate_left(1);
        assert_eq!(count_unread(&incoming, &accepted), expected);
    }

    #[test]
    fn all_seen_counts_zero() {
        let incoming = vec![view("a", true, false)];
        let accepted = vec![view("b", false, true)];
        assert_eq!(count_unread(&incoming, &accepted), 0);
    }
}
