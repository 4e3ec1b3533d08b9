//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# mintdesk configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[desktop]
# viewport_width = 1440.0
# viewport_height = 900.0
# panel_height = 48.0     # 0-200, excluded from the work area
# z_index_seed = 100
# widgets = true

[windows]
# default_width = 600.0
# default_height = 450.0
# min_width = 300.0       # 50-2000
# min_height = 200.0      # 50-2000
# snap_threshold = 20.0   # 0-200

# Per-app initial position. Declaring this table replaces the built-in one.
# [windows.positions]
# about = { x = 100.0, y = 80.0 }
# skills = { x = 150.0, y = 100.0 }
# projects = { x = 200.0, y = 120.0 }
# github = { x = 120.0, y = 90.0 }
# contact = { x = 180.0, y = 110.0 }
# experience = { x = 140.0, y = 95.0 }

[github]
# username = "anjisha616"
# excluded_repos = ["cafe-clone", "netflix-clone", "starbucks-clone", "anjisha616"]
# api_base = "https://api.github.com"
# repo_limit = 6          # 1-30
# cache_ttl_secs = 300
# max_retries = 3         # 0-10
# initial_backoff_ms = 500
# max_backoff_ms = 8000
# request_timeout_secs = 15

[logging]
# level = "info"          # trace, debug, info, warn, error
"##
    .to_string()
}
