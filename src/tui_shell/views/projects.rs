use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::model::Project;

use super::super::app::now_ts;
use super::super::{RenderCtx, View, fmt_ts_list, render_view_chrome};
use super::clamp_selection;

#[derive(Debug)]
pub(in crate::tui_shell) struct ProjectsView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) items: Vec<Project>,
    pub(in crate::tui_shell) selected: usize,
    current: Option<String>,
}

impl ProjectsView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            updated_at: now_ts(),
            items: Vec::new(),
            selected: 0,
            current: None,
        }
    }

    /// Most recently opened first.
    pub(in crate::tui_shell) fn refresh(&mut self, mut items: Vec<Project>, current: Option<String>) {
        items.reverse();
        if self.items != items {
            self.updated_at = now_ts();
        }
        self.items = items;
        self.current = current;
        self.selected = clamp_selection(self.selected, self.items.len());
    }

    pub(in crate::tui_shell) fn selected_project(&self) -> Option<&Project> {
        self.items.get(self.selected)
    }
}

impl View for ProjectsView {
    fn title(&self) -> &str {
        "My Projects"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        self.selected = clamp_selection(self.selected + 1, self.items.len());
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);

        if self.items.is_empty() {
            frame.render_widget(
                Paragraph::new("(no projects yet; choose a book to start one)\n\nEsc: back"),
                inner,
            );
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|p| {
                let label = p.label();
                let mark = if self.current.as_deref() == Some(label.as_str()) {
                    "* "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::raw(format!("{:<56}", label)),
                    Span::styled(
                        fmt_ts_list(&p.opened_at, ctx),
                        Style::default().fg(Color::Gray),
                    ),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(clamp_selection(self.selected, self.items.len())));
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title("(Enter: reopen; Esc: back)"),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
