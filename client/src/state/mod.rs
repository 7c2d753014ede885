//! Application state for the focus monitor client.
//!
//! Each module holds plain data plus the transitions the pages call; pages
//! wrap them in `RwSignal`s and provide them through context.

pub mod diary;
pub mod history;
pub mod monitor;
pub mod pip;
pub mod pomodoro;
pub mod session;
pub mod toasts;
pub mod todos;
pub mod ui;
