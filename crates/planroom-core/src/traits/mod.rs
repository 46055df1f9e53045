//! Core traits defined in `planroom-core` and implemented by other crates.

pub mod ui_state;

pub use ui_state::UiStateStore;
