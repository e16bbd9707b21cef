//! Validation for the `[api]` section.

use crate::schema::IntroConfig;

pub(crate) fn validate_api(errors: &mut Vec<String>, config: &IntroConfig) {
    if config.api.dev_base_url.trim().is_empty() {
        errors.push("api.dev_base_url must not be empty".into());
    }
    if config.api.prod_base_url.trim().is_empty() {
        errors.push("api.prod_base_url must not be empty".into());
    }
}
