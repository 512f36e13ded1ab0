#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod config;
pub mod dialogs;
pub mod error;
pub mod file_handler;
pub mod input;
pub mod machine;
pub mod panels;
pub mod tool;

pub use app::SketchApp;
pub use canvas::Canvas;
pub use command::{RecordingSurface, RenderCommand, RenderSurface};
pub use error::{SketchError, SketchResult};
pub use input::{InputEvent, InputHandler, route_event};
pub use machine::{DrawingMachine, Phase};
pub use tool::{ActiveTool, ShapeKind, ToolState};
