//! Mock implementations of the bot's outbound ports
//!
//! Lets the request and broadcast flows run without network or yt-dlp.

pub mod mock_messenger;
pub mod mock_source;

#[allow(unused_imports)]
pub use mock_messenger::{Failure, RecordingMessenger, Sent};
#[allow(unused_imports)]
pub use mock_source::{FakeBehavior, FakeSource};
