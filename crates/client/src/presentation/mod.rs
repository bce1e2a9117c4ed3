//! Terminal presentation: setup/teardown, styling and frame rendering.
pub mod terminal;
pub mod theme;
pub mod ui;
