//! UI layer: the single viewer page.

pub mod app;

pub use app::ViewerApp;
