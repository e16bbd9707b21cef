//! Friend request records and the per-user projections built from them.
//!
//! A request links a sender and a recipient. It starts out pending and
//! becomes accepted once the recipient agrees. Each side carries its own
//! "seen" flag so the notification badge can be computed independently
//! for the recipient (new pending request) and the sender (request accepted).

mod inbox;
mod model;
mod view;

pub use inbox::FriendRequests;
pub use model::{FriendRequest, FriendRequestStatus};
pub use view::FriendRequestView;
