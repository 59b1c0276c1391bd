use crate::startup::reference_data;

use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(area);

    frame.render_widget(app_bar(app), chunks[0]);
    frame.render_widget(stepper_header(app), chunks[1]);

    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
    };
    app.view().render(frame, chunks[2], &ctx);

    frame.render_widget(Paragraph::new(nav_line(app)), chunks[3]);

    // Status / last result
    {
        let mut lines = Vec::new();
        if let Some(r) = &app.last_result {
            let style = match r.kind {
                EntryKind::Error => Style::default().fg(Color::Red),
                _ => Style::default().fg(Color::White),
            };
            for (i, l) in r.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(Line::from(vec![
                        Span::styled(
                            format!("{} ", fmt_ts_ui(&r.ts)),
                            Style::default().fg(Color::Gray),
                        ),
                        Span::styled(l.as_str(), style),
                    ]));
                } else {
                    lines.push(Line::from(Span::styled(l.as_str(), style)));
                }
            }
        }
        if lines.is_empty() {
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::TOP).title("Last")),
            chunks[4],
        );
    }

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
    }
}

fn app_bar(app: &App) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.config.app_name),
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
    ];
    match app.signed_in_user() {
        Some(user) => spans.push(Span::styled(user, Style::default().fg(Color::Green))),
        None => spans.push(Span::styled(
            "signed out".to_string(),
            Style::default().fg(Color::Red),
        )),
    }
    spans.push(Span::raw("  "));
    match app.files.current_path() {
        Some(path) => spans.push(Span::styled(
            path.to_string(),
            Style::default().fg(Color::Cyan),
        )),
        None => spans.push(Span::styled(
            "(no book)".to_string(),
            Style::default().fg(Color::Gray),
        )),
    }

    if let Some(refs) = reference_data() {
        let (loaded, total) = refs.progress();
        if total > 0 {
            let failed = refs.failures().len();
            let style = if failed > 0 {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(format!("refs {}/{}", loaded, total), style));
        }
    }

    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        "m: menu".to_string(),
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
    ));

    Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM))
}

fn stepper_header(app: &App) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, step) in STEPS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" ── ", Style::default().fg(Color::Gray)));
        }
        let marker = if app.stepper.is_complete(i) {
            "✓".to_string()
        } else {
            (i + 1).to_string()
        };
        let mut style = if app.stepper.is_complete(i) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        if i == app.stepper.active() && !app.show_projects {
            style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
        }
        spans.push(Span::styled(format!("{} {}", marker, step.label()), style));
    }

    let instructions = if app.show_projects {
        "My Projects".to_string()
    } else {
        app.stepper.current().instructions().to_string()
    };
    Paragraph::new(vec![
        Line::from(spans),
        Line::from(Span::styled(
            instructions,
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(Block::default().borders(Borders::BOTTOM))
}

fn nav_line(app: &App) -> Line<'static> {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::Gray).add_modifier(Modifier::DIM);

    let enter = if app.show_projects {
        "Enter: reopen"
    } else {
        match app.stepper.current() {
            Step::Login if app.auth.current().is_none() => "Enter: sign in",
            Step::Login => "l: log out",
            Step::Repository => "Enter: choose  /: filter",
            Step::Book => "Enter: open book",
        }
    };

    Line::from(vec![
        Span::styled(
            "◀ Back (b)",
            if app.stepper.can_back() {
                enabled
            } else {
                disabled
            },
        ),
        Span::raw("   "),
        Span::styled(
            "Next (n) ▶",
            if app.stepper.can_next() {
                enabled
            } else {
                disabled
            },
        ),
        Span::raw("   "),
        Span::styled(enter, Style::default().fg(Color::Gray)),
    ])
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
