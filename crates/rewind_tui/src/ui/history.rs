//! Move history list rendering.

use crate::app::App;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};

/// Label for one history entry.
pub fn entry_label(index: usize, cursor: usize) -> String {
    if index == cursor && index > 0 {
        format!("You are at move #{}", index)
    } else if index == 0 {
        "Go to game start".to_string()
    } else {
        format!("Go to move #{}", index)
    }
}

/// Renders the history list in the chosen display order.
///
/// Reversal is a display concern only; the underlying timeline is never
/// touched here.
pub fn render_history(f: &mut Frame, area: Rect, app: &App) {
    let timeline = app.timeline();
    let cursor = timeline.cursor();

    let mut items: Vec<ListItem> = (0..timeline.len())
        .map(|index| {
            let style = if index == cursor {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry_label(index, cursor)).style(style)
        })
        .collect();

    if !app.ascending() {
        items.reverse();
    }

    let title = if app.ascending() {
        " History "
    } else {
        " History (newest first) "
    };
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_entry_label() {
        assert_eq!(entry_label(0, 3), "Go to game start");
        // The start entry keeps its label even while displayed
        assert_eq!(entry_label(0, 0), "Go to game start");
    }

    #[test]
    fn test_move_entry_labels() {
        assert_eq!(entry_label(2, 0), "Go to move #2");
        assert_eq!(entry_label(2, 2), "You are at move #2");
    }
}
