pub mod config;
pub mod hsb;
pub mod matcher;

pub use config::ColorConfig;
pub use hsb::{parse_hex_color, Hsb};
pub use matcher::ColorMatcher;
