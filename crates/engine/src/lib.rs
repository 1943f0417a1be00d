pub mod app;

pub use app::{
    run_app, AppError, Background, BackgroundError, BackgroundSource, Canvas, Color, InputEvent,
    Key, LoopConfig, LoopMetricsSnapshot, Modifiers, PointerButton, Renderer, Scene, TextSize,
    Vec2,
};
