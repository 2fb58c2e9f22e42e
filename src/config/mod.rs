//! Layered TOML configuration.

mod filesystem;
mod loader;
mod model;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ConfigLoader, FileConfigLoader, LOCAL_CONFIG_NAME};
pub use model::{
    CONFIG_VERSION, Config, DEFAULT_INDICATOR, DEFAULT_PIE_FRAMES, DEFAULT_TITLE, InputConfig,
    MAX_PIE_FRAMES, PieSource, ReportConfig,
};
