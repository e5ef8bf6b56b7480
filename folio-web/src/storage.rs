//! Local storage helpers

use folio_common::Theme;
use tracing::warn;

/// Key the theme preference is stored under
pub const THEME_KEY: &str = "folio.theme";

pub fn get_storage() -> Option<web_sys_x::Storage> {
    web_sys_x::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get_string(key: &str) -> Option<String> {
    get_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = get_storage() {
        if storage.set_item(key, value).is_err() {
            warn!("Could not write {key} to local storage");
        }
    }
}

/// Stored theme preference, if any. Unknown values are ignored.
pub fn load_theme() -> Option<Theme> {
    let raw = get_string(THEME_KEY)?;
    match raw.parse() {
        Ok(theme) => Some(theme),
        Err(e) => {
            warn!("Ignoring stored theme: {e}");
            None
        }
    }
}

pub fn save_theme(theme: Theme) {
    set_string(THEME_KEY, theme.as_str());
}
