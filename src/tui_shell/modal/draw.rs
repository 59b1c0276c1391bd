use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::super::{DrawerAction, Modal, ModalKind};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, modal: &Modal) {
    let area = frame.area();
    let (w, h) = match modal.kind {
        ModalKind::Drawer { .. } => (30, 6),
        _ => (
            area.width.saturating_sub(6).clamp(20, 90),
            area.height.saturating_sub(6).clamp(8, 22),
        ),
    };
    let w = w.min(area.width);
    let h = h.min(area.height);
    // The drawer slides in from the left; everything else is centered.
    let x = match modal.kind {
        ModalKind::Drawer { .. } => area.x,
        _ => area.x + (area.width.saturating_sub(w)) / 2,
    };
    let y = match modal.kind {
        ModalKind::Drawer { .. } => area.y,
        _ => area.y + (area.height.saturating_sub(h)) / 2,
    };
    let box_area = ratatui::layout::Rect {
        x,
        y,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal_title(modal));
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Viewer => {
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        ModalKind::Drawer { selected } => {
            let items: Vec<ListItem> = DrawerAction::ALL
                .iter()
                .map(|a| ListItem::new(a.label()))
                .collect();
            let mut state = ListState::default();
            state.select(Some(*selected));
            let list = List::new(items).highlight_style(Style::default().bg(Color::DarkGray));
            frame.render_stateful_widget(list, inner, &mut state);
        }

        ModalKind::TextInput { action, prompt } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                parts[0],
            );

            let shown = if action.is_secret() {
                "*".repeat(modal.input.len())
            } else {
                modal.input.buf.clone()
            };
            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(shown),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );

            let x = prompt.chars().count() as u16 + modal.input.cursor as u16;
            let y = parts[1].y + 1;
            frame.set_cursor_position((parts[1].x + 1 + x, y));
        }
    }
}

fn modal_title(modal: &Modal) -> Line<'static> {
    let mut spans = vec![
        Span::styled(modal.title.clone(), Style::default().fg(Color::Yellow)),
        Span::raw("  ".to_string()),
        Span::styled("Esc".to_string(), Style::default().fg(Color::Gray)),
    ];
    if matches!(
        &modal.kind,
        ModalKind::TextInput { .. } | ModalKind::Drawer { .. }
    ) {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            "Enter".to_string(),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}
