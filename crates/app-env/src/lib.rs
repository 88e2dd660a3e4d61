//! Application Environment Metadata
//!
//! Answers the questions an application shell asks about itself at runtime:
//! what am I called, which version and build am I, was I compiled for
//! development or production, and am I running on a desktop emulator instead
//! of device hardware. Everything is resolved at compile time except the
//! wall-clock helpers.
//!
//! # Example
//!
//! ```
//! use app_env::{app_info, BuildChannel};
//!
//! let info = app_info!();
//! println!("{} {}", info.name, info.version_build());
//! println!("channel: {}", BuildChannel::current());
//! ```

mod channel;
mod info;
mod timestamp;

pub use channel::{is_development, is_emulator, is_production, BuildChannel};
pub use info::AppInfo;
pub use timestamp::{internet_timestamp, unix_time};
