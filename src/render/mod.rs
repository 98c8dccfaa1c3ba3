//! Rendering pipeline.

pub mod renderer;

pub use renderer::{LastRender, PromptRenderer, RenderFrame, RenderPlan};
