//! The interactive desktop session: command dispatch, panel loads and the
//! input/event loop.

mod core;
mod dispatch;
mod loads;
mod run;


pub use self::core::{Flow, Session};
