//! Plain-text rendering for stdout.

use crate::presenter::assign_columns;
use crate::session::ScreenState;
use crate::theme::GRID_COLUMNS;
use itertools::Itertools;
use std::fmt::Write;

/// Render the screen as text, one block per grid column.
///
/// Cards are numbered by their position in the upstream result list.
pub fn render(state: &ScreenState) -> String {
    let ScreenState::Results(summaries) = state else {
        return state.status_message().unwrap_or_default();
    };

    let mut out = String::new();
    for (c, column) in assign_columns(summaries).iter().enumerate() {
        if column.is_empty() {
            continue;
        }
        let _ = writeln!(out, "── {}열 ──", c + 1);
        for (row, card) in column.iter().enumerate() {
            let n = row * GRID_COLUMNS + c + 1;
            let _ = writeln!(out, "[{n}] {}", card.title);
            let _ = writeln!(out, "    {}", card.description);
            let meta = [card.source.as_deref(), card.published.as_deref()]
                .into_iter()
                .flatten()
                .join(" · ");
            if !meta.is_empty() {
                let _ = writeln!(out, "    {meta}");
            }
            let _ = writeln!(out, "    {}", card.link_url);
        }
    }
    out
}
