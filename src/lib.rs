pub mod logger;
pub mod plugin;
