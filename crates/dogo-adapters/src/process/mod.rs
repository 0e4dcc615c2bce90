//! External process adapters.

mod recording;
mod system;

pub use recording::{RecordedCommand, RecordingRunner};
pub use system::ProcessRunner;
