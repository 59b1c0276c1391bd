use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::model::RepositoryRef;

use super::super::app::now_ts;
use super::super::{RenderCtx, View, render_view_chrome};
use super::{PanelStatus, clamp_selection};

#[derive(Debug)]
pub(in crate::tui_shell) struct RepositoryView {
    pub(in crate::tui_shell) updated_at: String,
    pub(in crate::tui_shell) items: Vec<RepositoryRef>,
    pub(in crate::tui_shell) selected: usize,
    owner: Option<String>,
    query: String,
    status: PanelStatus,
    chosen: Option<String>,
}

impl RepositoryView {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            updated_at: now_ts(),
            items: Vec::new(),
            selected: 0,
            owner: None,
            query: String::new(),
            status: PanelStatus::Idle,
            chosen: None,
        }
    }

    pub(in crate::tui_shell) fn refresh(
        &mut self,
        owner: Option<String>,
        query: String,
        items: Vec<RepositoryRef>,
        status: PanelStatus,
        chosen: Option<String>,
    ) {
        if self.items != items || self.status != status {
            self.updated_at = now_ts();
        }
        self.owner = owner;
        self.query = query;
        self.items = items;
        self.status = status;
        self.chosen = chosen;
        self.selected = clamp_selection(self.selected, self.items.len());
    }

    pub(in crate::tui_shell) fn selected_repository(&self) -> Option<&RepositoryRef> {
        self.items.get(self.selected)
    }
}

impl View for RepositoryView {
    fn title(&self) -> &str {
        "Repository"
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

        let scope = if self.query.is_empty() {
            format!(
                "owner: {}",
                self.owner.as_deref().unwrap_or("(sign in first)")
            )
        } else {
            format!("search: {}", self.query)
        };

        match &self.status {
            PanelStatus::Loading => {
                frame.render_widget(Paragraph::new(format!("{}\n\nLoading…", scope)), inner);
                return;
            }
            PanelStatus::Failed(msg) => {
                let lines = vec![
                    Line::from(scope),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("Something went wrong loading repositories: {}", msg),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(""),
                    Line::from("b: back to Login (the list is fetched again on return)"),
                ];
                frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
                return;
            }
            PanelStatus::Idle if self.owner.is_none() => {
                frame.render_widget(Paragraph::new("Sign in to list repositories."), inner);
                return;
            }
            _ => {}
        }

        if self.items.is_empty() {
            frame.render_widget(
                Paragraph::new(format!("{}\n\n(no repositories)", scope)),
                inner,
            );
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|r| {
                let mark = if self.chosen.as_deref() == Some(r.full_name.as_str()) {
                    "* "
                } else {
                    "  "
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, Style::default().fg(Color::Green)),
                    Span::raw(format!("{:<32}", r.full_name)),
                    Span::styled(r.description.clone(), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let mut state = ListState::default();
        state.select(Some(clamp_selection(self.selected, self.items.len())));
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .title(format!("{} (Enter: choose; /: filter)", scope)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, inner, &mut state);
    }
}
