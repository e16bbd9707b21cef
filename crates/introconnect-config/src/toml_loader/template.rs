//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# IntroConnect Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# mode = "production"                       # development, production
# dev_base_url = "http://localhost:5001/api"
# prod_base_url = "/api"
# with_credentials = true

[avatars]
# Leave empty to use the built-in preset catalog.
# presets = [
#   "https://api.dicebear.com/7.x/fun-emoji/png?seed=Felix&size=128",
#   "https://api.dicebear.com/7.x/fun-emoji/png?seed=Aneka&size=128",
# ]
# seed = 42                                 # reproducible shuffle order

[logging]
# level = "INFO"                            # DEBUG, INFO, WARNING, ERROR
"##
}
