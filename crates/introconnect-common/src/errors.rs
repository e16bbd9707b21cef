use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("could not determine the OS config directory")]
    NoConfigDir,

    #[error("config io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SocialError {
    #[error("avatar catalog is empty")]
    EmptyCatalog,

    #[error("duplicate avatar in catalog: {0}")]
    DuplicateAvatar(String),

    #[error("cannot send a friend request to yourself")]
    SelfRequest,

    #[error("invalid friend request transition: {0}")]
    InvalidTransition(String),
}

#[derive(Debug, thiserror::Error)]
pub enum IntroError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Social(#[from] SocialError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("api.dev_base_url is empty".into());
        assert_eq!(
            err.to_string(),
            "config validation error: api.dev_base_url is empty"
        );

        let err = ConfigError::Io {
            path: PathBuf::from("/etc/introconnect"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            err.to_string(),
            "config io error at /etc/introconnect: denied"
        );
    }

    #[test]
    fn social_error_display() {
        assert_eq!(
            SocialError::EmptyCatalog.to_string(),
            "avatar catalog is empty"
        );
        assert_eq!(
            SocialError::DuplicateAvatar("a.png".into()).to_string(),
            "duplicate avatar in catalog: a.png"
        );
        assert_eq!(
            SocialError::SelfRequest.to_string(),
            "cannot send a friend request to yourself"
        );
    }

    #[test]
    fn intro_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: IntroError = config_err.into();
        assert!(matches!(err, IntroError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn intro_error_from_social() {
        let err: IntroError = SocialError::EmptyCatalog.into();
        assert!(matches!(err, IntroError::Social(SocialError::EmptyCatalog)));
        assert_eq!(err.to_string(), "avatar catalog is empty");
    }

    #[test]
    fn intro_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: IntroError = io_err.into();
        assert!(matches!(err, IntroError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn intro_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: IntroError = json_err.into();
        assert!(matches!(err, IntroError::Json(_)));
        assert!(err.to_string().starts_with("json error:"));
    }
}
