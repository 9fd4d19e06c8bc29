pub mod animator;

pub use animator::{ChartAnimator, FrameLoop, LoopState};
