//! Command-line presentation: argument tree, prompts, output rendering.

pub mod app;
pub mod apply;
pub mod cli;
pub mod prompt;
pub mod render;

pub use app::{App, Backend};
pub use prompt::Prompter;
pub use render::Renderer;
