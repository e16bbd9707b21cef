pub mod avatar;
pub mod friend_request;
pub mod notifications;
pub mod profile;

pub use avatar::{AvatarCatalog, AvatarPool, AvatarRef, RandomShuffle, Shuffle, PRESET_AVATARS};
pub use friend_request::{FriendRequest, FriendRequestStatus, FriendRequestView, FriendRequests};
pub use notifications::{count_unread, count_unread_breakdown, SeenFlags, UnreadCounts};
pub use profile::{ProfileDraft, ProfileEditor};
