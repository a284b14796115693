use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::Tabs;
use ratatui::widgets::Wrap;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Anchor;
use crate::domain::models::BackendBox;
use crate::domain::models::DsaSkill;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::Mode;
use crate::domain::models::TextArea;
use crate::domain::services::AppState;
use crate::domain::services::FocusTarget;
use crate::domain::services::ReportView;
use crate::infrastructure::backends::HttpBackend;

const STATUS_HINT: &str = "Tab: next section | CTRL+S: submit | CTRL+Y: copy email draft | CTRL+C: quit";

fn focus_style(focused: bool) -> Style {
    if focused {
        return Style::default().fg(Color::Yellow);
    }
    return Style::default();
}

fn section_block(title: &str, focused: bool) -> Block<'_> {
    return Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(focus_style(focused))
        .title(title);
}

fn centered_rect(width_percentage: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * width_percentage / 100;
    let height = height.min(area.height);

    return Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
}

fn render_header<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let titles = Anchor::iter()
        .map(|anchor| return Line::from(anchor.title()))
        .collect::<Vec<Line>>();

    let title = format!(
        " Placify | {} | mode: {} ",
        app_state.page.mode_title, app_state.selection
    );

    frame.render_widget(
        Tabs::new(titles)
            .block(section_block(&title, false))
            .select(app_state.page.focus.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        rect,
    );
}

fn render_modes<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let focused = app_state.focus == FocusTarget::Modes;
    let mut lines = Mode::iter()
        .enumerate()
        .map(|(idx, mode)| {
            let mut style = Style::default();
            let mut cursor = "  ";
            if idx == app_state.mode_cursor {
                cursor = "> ";
                style = focus_style(focused).add_modifier(Modifier::BOLD);
            }

            let mut spans = vec![
                Span::styled(format!("{cursor}{}. {}", idx + 1, mode.title()), style),
                Span::raw(format!(" - {}", mode.summary())),
            ];
            if mode == app_state.selection {
                spans.push(Span::styled(
                    " (selected)",
                    Style::default().fg(Color::Green),
                ));
            }

            return Line::from(spans);
        })
        .collect::<Vec<Line>>();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 1, 2 or 3, or Enter on the highlighted mode.",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(section_block("Choose an assessment mode", focused)),
        rect,
    );
}

fn render_resume<B: Backend>(
    frame: &mut Frame<B>,
    rect: Rect,
    app_state: &AppState,
    textarea: &tui_textarea::TextArea,
    loading: &Loading,
) {
    let skills_height = u16::try_from(DsaSkill::iter().count()).unwrap_or(3) + 2;
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(skills_height),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(rect);

    let skill_focused = app_state.focus == FocusTarget::Skill;
    let skills = DsaSkill::iter()
        .enumerate()
        .map(|(idx, skill)| {
            let mut marker = "( )";
            if app_state.form.dsa_skill == Some(skill) {
                marker = "(*)";
            }

            let mut style = Style::default();
            if skill_focused && idx == app_state.skill_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }

            return Line::from(Span::styled(format!("{marker} {}", skill.label()), style));
        })
        .collect::<Vec<Line>>();

    frame.render_widget(
        Paragraph::new(skills).block(section_block("DSA skill", skill_focused)),
        layout[0],
    );

    frame.render_widget(textarea.widget(), layout[1]);

    if app_state.is_waiting() {
        loading.render(frame, layout[2]);
        return;
    }

    let submit = &app_state.page.submit;
    let mut label_style = Style::default().add_modifier(Modifier::BOLD);
    if !submit.enabled {
        label_style = label_style.add_modifier(Modifier::DIM);
    }

    frame.render_widget(
        Paragraph::new(Span::styled(submit.label.to_string(), label_style))
            .alignment(Alignment::Center)
            .block(section_block("", app_state.focus == FocusTarget::Submit)),
        layout[2],
    );
}

fn render_report<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &mut AppState) {
    let focused = app_state.focus == FocusTarget::Report;

    if !app_state.has_report {
        frame.render_widget(
            Paragraph::new("No report yet. Fill in the Resume section and press CTRL+S.")
                .block(section_block("Report", focused)),
            rect,
        );
        return;
    }

    let lines = ReportView::new(&app_state.page.report, &app_state.api_url).as_lines();
    frame.render_widget(
        Paragraph::new(lines)
            .block(section_block("Report", focused))
            .wrap(Wrap { trim: false })
            .scroll((app_state.scroll.position, 0)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut app_state.scroll.scrollbar_state,
    );
}

fn render_status<B: Backend>(frame: &mut Frame<B>, rect: Rect, app_state: &AppState) {
    let text = app_state
        .notice
        .to_owned()
        .unwrap_or_else(|| return STATUS_HINT.to_string());

    frame.render_widget(
        Paragraph::new(Span::styled(
            text,
            Style::default().add_modifier(Modifier::DIM),
        )),
        rect,
    );
}

fn render_alert<B: Backend>(frame: &mut Frame<B>, area: Rect, text: &str) {
    let height = u16::try_from(text.lines().count()).unwrap_or(1) + 6;
    let rect = centered_rect(60, height, area);

    let mut lines = text
        .lines()
        .map(|line| return Line::from(line.to_string()))
        .collect::<Vec<Line>>();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to dismiss.",
        Style::default().add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::Red))
                    .title("Alert"),
            ),
        rect,
    );
}

fn submit_form(
    app_state: &mut AppState,
    textarea: &tui_textarea::TextArea,
    tx: &mpsc::UnboundedSender<Action>,
) -> Result<()> {
    let description = textarea.lines().join("\n");
    if let Some(req) = app_state.submit(&description) {
        tx.send(Action::Assess(req))?;
    }

    return Ok(());
}

fn copy_email_draft(app_state: &mut AppState, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
    if let Some(draft) = app_state.email_draft() {
        tx.send(Action::CopyToClipboard(draft))?;
    } else {
        app_state.notice = Some("No email draft to copy yet.".to_string());
    }

    return Ok(());
}

fn handle_focused_input(
    app_state: &mut AppState,
    textarea: &mut tui_textarea::TextArea,
    tx: &mpsc::UnboundedSender<Action>,
    input: Input,
) -> Result<()> {
    match app_state.focus {
        FocusTarget::Modes => match input {
            Input { key: Key::Up, .. } => app_state.move_mode_cursor(-1),
            Input { key: Key::Down, .. } => app_state.move_mode_cursor(1),
            Input {
                key: Key::Enter, ..
            } => app_state.select_mode_at_cursor(),
            Input {
                key: Key::Char(c @ '1'..='3'),
                ..
            } => {
                app_state.mode_cursor = (c as usize) - ('1' as usize);
                app_state.select_mode_at_cursor();
            }
            _ => (),
        },
        FocusTarget::Skill => match input {
            Input { key: Key::Up, .. } => app_state.move_skill_cursor(-1),
            Input { key: Key::Down, .. } => app_state.move_skill_cursor(1),
            Input {
                key: Key::Char(' '),
                ..
            }
            | Input {
                key: Key::Enter, ..
            } => app_state.choose_skill_at_cursor(),
            _ => (),
        },
        FocusTarget::Description => {
            textarea.input(input);
        }
        FocusTarget::Submit => {
            if let Input {
                key: Key::Enter, ..
            } = input
            {
                submit_form(app_state, textarea, tx)?;
            }
        }
        FocusTarget::Report => match input {
            Input { key: Key::Up, .. } => app_state.scroll.up(),
            Input { key: Key::Down, .. } => app_state.scroll.down(),
            Input {
                key: Key::PageUp, ..
            }
            | Input {
                key: Key::Char('u'),
                ctrl: true,
                ..
            } => app_state.scroll.up_page(),
            Input {
                key: Key::PageDown,
                ..
            }
            | Input {
                key: Key::Char('d'),
                ctrl: true,
                ..
            } => app_state.scroll.down_page(),
            _ => (),
        },
    }

    return Ok(());
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    rx: &mut mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut textarea = TextArea::project_description(false);
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        for char in "Built a REST API with authentication and rate limiting.".chars() {
            textarea.insert_char(char);
        }
        app_state.choose_skill_at_cursor();
    }

    loop {
        TextArea::set_focus(&mut textarea, app_state.focus == FocusTarget::Description);

        terminal.draw(|frame| {
            let area = frame.size();
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Length(3),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .split(area);

            let report_rect = layout[1].inner(&Margin {
                vertical: 1,
                horizontal: 1,
            });
            if report_rect.width != app_state.last_known_width
                || report_rect.height != app_state.last_known_height
            {
                app_state.set_rect(report_rect);
            }

            render_header(frame, layout[0], app_state);
            match app_state.page.focus {
                Anchor::Modes => render_modes(frame, layout[1], app_state),
                Anchor::Resume => render_resume(frame, layout[1], app_state, &textarea, &loading),
                Anchor::Report => render_report(frame, layout[1], app_state),
            }
            render_status(frame, layout[2], app_state);

            if let Some(alert) = app_state.page.current_alert() {
                render_alert(frame, area, alert);
            }
        })?;

        if app_state.is_waiting() {
            if let Some(event) = rx.recv().await {
                app_state.handle_event(event);
            }

            continue;
        }

        while let Ok(event) = rx.try_recv() {
            app_state.handle_event(event);
        }

        let input: Input = crossterm::event::read()?.into();
        if let Input {
            key: Key::Char('c'),
            ctrl: true,
            ..
        } = input
        {
            break;
        }

        if app_state.page.current_alert().is_some() {
            if let Input {
                key: Key::Enter | Key::Esc,
                ..
            } = input
            {
                app_state.dismiss_alert();
            }

            continue;
        }

        match input {
            Input { key: Key::Tab, .. } => app_state.focus_next(),
            Input {
                key: Key::Char('s'),
                ctrl: true,
                ..
            } => submit_form(app_state, &textarea, &tx)?,
            Input {
                key: Key::Char('y'),
                ctrl: true,
                ..
            } => copy_email_draft(app_state, &tx)?,
            input => handle_focused_input(app_state, &mut textarea, &tx, input)?,
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    mut rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut app_state = AppState::new(
        &Config::get(ConfigKey::ApiURL),
        Mode::parse(&Config::get(ConfigKey::Mode)).unwrap_or_default(),
        &Config::sections()?,
    );

    let backend: BackendBox = Box::<HttpBackend>::default();
    app_state.check_backend(&backend).await;

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;

    start_loop(&mut terminal, &mut app_state, tx, &mut rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
