//! The desktop's TOML config file: locating it, seeding it on first run,
//! and reading it.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path, parse_config};
pub use paths::{config_path_in, default_config_path, ensure_config_file};
