mod settings;
mod tail;

pub use settings::{
    LoadSettingsError, ResolveStateDirError, SaveSettingsError, Settings, ThemeChoice,
    load_settings, resolve_state_dir, save_settings,
};
pub use tail::{LogTail, read_appended, read_tail};
