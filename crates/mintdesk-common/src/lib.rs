pub mod actions;
pub mod errors;
pub mod events;
pub mod types;

pub use actions::{Action, ActionParseError, ProjectFilter, ResizeDirection};
pub use errors::{ConfigError, DeskError};
pub use events::{Event, EventBus};
pub use types::{AppId, Point, Rect, Size};

pub type Result<T> = std::result::Result<T, DeskError>;
