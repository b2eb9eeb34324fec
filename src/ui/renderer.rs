//! Top-level rendering coordinator.
//!
//! Computes the view model for the pane size and hands it to the layout in
//! [`components`](crate::ui::components), painted with the active theme.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning, so the caller
/// does not need to clear the pane first.
///
/// # Parameters
///
/// * `state` - Application state to render
/// * `rows` - Pane height
/// * `cols` - Pane width
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, state.theme(), rows, cols);
}
