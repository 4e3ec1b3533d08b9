pub mod catalog;
pub mod content;
pub mod events;
pub mod geometry;
pub mod gesture;
pub mod manager;
pub mod record;
pub mod region;
pub mod settings;
pub mod taskbar;

pub use catalog::{resolve_meta, AppMeta};
pub use content::{ContentProvider, NoContent, StaticContent, Surface, TextSurface};
pub use events::{SubscriptionId, WindowEvent};
pub use gesture::Gesture;
pub use manager::{OpenOptions, WindowManager};
pub use record::{WindowRecord, WindowState};
pub use region::{FrameStyle, WindowRegion, FRAME_STYLE};
pub use settings::WmSettings;
pub use taskbar::{Taskbar, TaskbarEntry};
