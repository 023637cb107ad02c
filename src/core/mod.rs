pub mod auth;
pub mod battery;
pub mod boot;
pub mod contact;
pub mod cue;
pub mod desktop;
pub mod machine;
pub mod terminal;
pub mod timer;

pub use auth::{AuthOutcome, Key};
pub use cue::Cue;
pub use machine::{Machine, OpenMode, Screen};
