//! Screen renderers and shared styling.
//!
//! Renderers take a render config borrowed from `App` and draw into a frame
//! area. They never mutate application state beyond widget selection.

pub mod project_form;
pub mod projects;
pub mod theme;

pub use theme::Theme;
