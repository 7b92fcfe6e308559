pub mod config;
pub mod error;
pub mod eval;
pub mod extract;
pub mod format;
pub mod host;
pub mod logger;
pub mod plugin;
pub mod selection;

pub use config::{
    Settings, SettingsUpdate, UserConfigError, UserConfigResult, load_user_config,
    load_user_config_from, user_config_path,
};
pub use error::{CalcError, CalcResult};
pub use eval::EvalOutcome;
pub use format::FloatFormat;
pub use host::{EchoChannel, EditorHost, PositionMarker};
pub use logger::LogLevel;
pub use plugin::CalcPlugin;
pub use selection::{Position, Range};
