//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one widget each and take the state signal they edit as
//! a prop. The shared monitor and toast signals come from context.

pub mod alert_border;
pub mod calendar_heatmap;
pub mod diary_editor;
pub mod distraction_overlay;
pub mod history_list;
pub mod mode_card;
pub mod pip_panel;
pub mod pomodoro_panel;
pub mod score_badge;
pub mod settings_modal;
pub mod todo_panel;
pub mod toast_layer;
