mod input;
mod loop_runner;
mod metrics;
mod rendering;
mod scene;

pub use input::{InputEvent, Key, Modifiers, PointerButton};
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{
    Background, BackgroundError, BackgroundSource, Canvas, Renderer, TextSize,
};
pub use scene::{Color, Scene, Vec2};
