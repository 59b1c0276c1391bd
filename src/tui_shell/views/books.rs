use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::books::BookFile;

use super::super::app::now_ts;
use super::super::{RenderCtx, View, render_view_chrome};
use super::{PanelStatus, clamp_selection};

#[derive(Debug)]
pub(in crate::tui_shell) struct BookView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) items: Vec<BookFile>,
    pub(in crate::tui_shell) selected: usize,
    repository: Option<String>,
    status: PanelStatus,
    chosen: Option<String>,
}

impl BookView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            updated_at: now_ts(),
            items: Vec::new(),
            selected: 0,
            repository: None,
            status: PanelStatus::Idle,
            chosen: None,
        }
    }

    pub(in crate::tui_shell) fn refresh(
        &mut self,
        repository: Option<String>,
        items: Vec<BookFile>,
        status: PanelStatus,
        chosen: Option<String>,
    ) {
        if self.items != items || self.status != status {
            self.updated_at = now_ts();
        }
        self.repository = repository;
        self.items = items;
        self.status = status;
        self.chosen = chosen;
        self.selected = clamp_selection(self.selected, self.items.len());
    }

    pub(in crate::tui_shell) fn status(&self) -> &PanelStatus {
        &self.status
    }

    /// Nothing is selectable until the listing has loaded.
    pub(in crate::tui_shell) fn selected_file(&self) -> Option<&BookFile> {
        if self.status != PanelStatus::Ready {
            return None;
        }
        self.items.get(self.selected)
    }
}

impl View for BookView {
    fn title(&self) -> &str {
        "Book"
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

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);

        let Some(repo) = self.repository.as_deref() else {
            frame.render_widget(Paragraph::new("Select a repository first."), inner);
            return;
        };

        match &self.status {
            PanelStatus::Loading | PanelStatus::Idle => {
                frame.render_widget(Paragraph::new("Loading…"), inner);
                return;
            }
            PanelStatus::Failed(msg) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "Something went wrong loading the book list.",
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(""),
                    Line::from(msg.clone()),
                    Line::from(""),
                    Line::from("b: back to Repository (the list is fetched again on return)"),
                ];
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
                return;
            }
            PanelStatus::Ready => {}
        }

        if self.items.is_empty() {
            frame.render_widget(
                Paragraph::new(format!("{}\n\n(no book files in this repository)", repo)),
                inner,
            );
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|f| {
                let mark = if self.chosen.as_deref() == Some(f.path.as_str()) {
                    "* "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::styled(format!("{:<5}", f.code), Style::default().fg(Color::Yellow)),
                    Span::raw(format!("{:<40}", f.path)),
                    Span::styled(format!("{} B", f.size), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(clamp_selection(self.selected, self.items.len())));
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(format!("{} (Enter: open)", repo)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
