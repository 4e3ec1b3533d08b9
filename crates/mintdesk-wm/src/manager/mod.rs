//! The WindowManager coordinates the window registry, stacking, focus,
//! gestures and change notification.

mod focus;
mod gestures;
mod notify;
mod operations;
mod types;

pub use types::*;
