pub mod renderer;

pub use renderer::{PlaybackView, Renderer};
