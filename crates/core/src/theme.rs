use crate::dom::ClassList;
use crate::traits::PreferenceStore;
use crate::PageError;

pub const DARK_MODE_CLASS: &str = "dark-mode";
pub const DARK_MODE_KEY: &str = "darkMode";

/// Applies a stored dark-mode preference at page load. Only the exact
/// stored string `"true"` turns it on; light mode is the default.
pub fn apply_stored_theme<S>(body: &mut ClassList, store: &S) -> Result<bool, PageError>
where
    S: PreferenceStore + ?Sized,
{
    let enabled = store.get(DARK_MODE_KEY)?.as_deref() == Some("true");
    if enabled {
        body.add(DARK_MODE_CLASS);
    }
    Ok(enabled)
}

/// Flips dark mode and persists the resulting flag.
pub fn toggle_dark_mode<S>(body: &mut ClassList, store: &mut S) -> Result<bool, PageError>
where
    S: PreferenceStore + ?Sized,
{
    let enabled = body.toggle(DARK_MODE_CLASS);
    store.set(DARK_MODE_KEY, if enabled { "true" } else { "false" })?;
    Ok(enabled)
}
