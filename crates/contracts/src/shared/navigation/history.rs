//! Синхронизация адресной строки с активной вкладкой.

use super::tab::TabItem;

/// The two history primitives the tab layer relies on.
pub trait AddressBar {
    /// Current `path?query` as shown in the address bar.
    fn current(&self) -> String;

    /// Replaces the current history entry without navigating.
    fn replace(&self, address: &str);
}

/// Rewrites the address bar to `tab`'s address unless it already matches.
/// Returns `true` when a replace was issued.
pub fn sync_address(bar: &impl AddressBar, tab: &TabItem) -> bool {
    let target = tab.address();
    if bar.current() == target {
        return false;
    }
    log::debug!("address bar -> '{}'", target);
    bar.replace(&target);
    true
}
