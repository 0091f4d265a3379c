pub mod headless;
pub mod watch;

pub use headless::{HeadlessMode, HeadlessReport};
pub use watch::{PlaybackSpeed, WatchMode};
