mod app_context;
mod config_warnings;

pub use app_context::AppContext;
pub use config_warnings::warn_env_typos;
