pub mod capabilities;
pub mod config;
pub mod cursor;
pub mod effects;
pub mod nav;
pub mod progress;
pub mod reveal;
pub mod scroll;
pub mod tabs;
pub mod timing;

pub use capabilities::*;
pub use config::*;
