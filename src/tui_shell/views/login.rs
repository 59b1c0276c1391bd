use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::super::app::now_ts;
use super::super::{RenderCtx, View, render_view_chrome};

#[derive(Debug)]
pub(in crate::tui_shell) struct LoginView {
    pub(in crate::tui_shell) updated_at: String,
    server: String,
    user: Option<String>,
    remember: Option<bool>,
}

impl LoginView {
    pub(in crate::tui_shell) fn new(server: &str) -> Self {
        Self {
            updated_at: now_ts(),
            server: server.to_string(),
            user: None,
            remember: None,
        }
    }

    pub(in crate::tui_shell) fn refresh(&mut self, user: Option<String>, remember: Option<bool>) {
        if self.user != user || self.remember != remember {
            self.user = user;
            self.remember = remember;
            self.updated_at = now_ts();
        }
    }
}

impl View for LoginView {
    fn title(&self) -> &str {
        "Login"
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }

    fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect, _ctx: &RenderCtx) {
        let inner = render_view_chrome(frame, self.title(), self.updated_at(), area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled("server: ", Style::default().fg(Color::Gray)),
                Span::raw(self.server.clone()),
            ]),
            Line::from(""),
        ];
        match &self.user {
            Some(user) => {
                lines.push(Line::from(vec![
                    Span::raw("Signed in as "),
                    Span::styled(user.clone(), Style::default().fg(Color::Green)),
                ]));
                if self.remember == Some(false) {
                    lines.push(Line::from(Span::styled(
                        "This login is kept for this session only.",
                        Style::default().fg(Color::Gray),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(Line::from("n: continue to Repository   l: log out"));
            }
            None => {
                lines.push(Line::from("Not signed in."));
                lines.push(Line::from(""));
                lines.push(Line::from("Press Enter to sign in with your username and password."));
            }
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
