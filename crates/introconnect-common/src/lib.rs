pub mod errors;
pub mod id;

pub use errors::{ConfigError, IntroError, SocialError};
pub use id::{new_id, RequestId, UserId};

pub type Result<T> = std::result::Result<T, IntroError>;
