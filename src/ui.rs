//! Ratatui front-end: a filterable, sortable song table with an add form and
//! a delete confirmation dialog. All catalog logic lives in the core modules;
//! this layer only collects input and renders outcomes.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;
mod theme;

pub use app::App;
pub use terminal::run_app;
