mod config_error;
mod header;
mod sidebar;

pub use config_error::ConfigError;
pub use header::Header;
pub use sidebar::MobileSidebar;
