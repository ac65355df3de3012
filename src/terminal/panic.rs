//! Panic hook that gives the terminal back before the panic is printed.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that restores the terminal.
///
/// Call after `color_eyre::install()` so the eyre hook is the one chained.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!(%panic_info, "panicked");
        original_hook(panic_info);
    }));
}
