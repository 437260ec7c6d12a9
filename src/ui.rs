use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::{
    app::App,
    clock::Clock,
    controller::SessionSnapshot,
    corpus::ReferenceTextProvider,
    diff::CharacterClassification,
    session::SessionStatus,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;
const TITLE: &str = "Dactylo - Typing Practice";

impl<P: ReferenceTextProvider, C: Clock> Widget for &App<P, C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let view = SessionView {
            snapshot: self.controller.snapshot(),
            show_ghost_text: self.config.show_ghost_text,
        };
        view.render(area, buf);
    }
}

/// Renders one controller snapshot
pub struct SessionView {
    pub snapshot: SessionSnapshot,
    pub show_ghost_text: bool,
}

impl SessionView {
    fn prompt_spans(&self) -> Vec<Span<'static>> {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = bold_style.fg(Color::Green);
        let red_bold_style = bold_style.fg(Color::Red);
        let dim_bold_style = bold_style.add_modifier(Modifier::DIM);
        let cursor_style = dim_bold_style.add_modifier(Modifier::UNDERLINED);

        let snapshot = &self.snapshot;
        let mut typed = snapshot.typed_text.chars();
        let mut cursor_drawn = snapshot.status != SessionStatus::Active;

        snapshot
            .reference_text
            .chars()
            .zip(snapshot.classification.chars.iter())
            .map(|(expected, class)| {
                let actual = typed.next();
                match class {
                    CharacterClassification::Correct => {
                        Span::styled(expected.to_string(), green_bold_style)
                    }
                    CharacterClassification::Incorrect => Span::styled(
                        match actual {
                            Some(' ') | None => "·".to_owned(),
                            Some(c) => c.to_string(),
                        },
                        red_bold_style,
                    ),
                    CharacterClassification::Pending if !cursor_drawn => {
                        cursor_drawn = true;
                        Span::styled(expected.to_string(), cursor_style)
                    }
                    CharacterClassification::Pending => {
                        Span::styled(expected.to_string(), dim_bold_style)
                    }
                }
            })
            .collect()
    }

    fn status_line(&self) -> &'static str {
        match self.snapshot.status {
            SessionStatus::Idle => "Press Enter to start practice",
            SessionStatus::Active => "Esc to reset, Ctrl-C to quit",
            SessionStatus::Finished => "Finished! Enter for a new sentence, Esc to reset",
        }
    }
}

impl Widget for SessionView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(2), // title
                    Constraint::Min(3),    // prompt
                    Constraint::Length(2), // ghost text
                    Constraint::Length(2), // stats
                    Constraint::Length(1), // legend
                ]
                .as_ref(),
            )
            .split(area);

        Paragraph::new(Span::styled(TITLE, bold_style.fg(Color::Green)))
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        if self.snapshot.status != SessionStatus::Idle {
            Paragraph::new(Line::from(self.prompt_spans()))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(chunks[1], buf);
        }

        if self.show_ghost_text && self.snapshot.status == SessionStatus::Active {
            Paragraph::new(Span::styled(
                self.snapshot.remaining_text.clone(),
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[2], buf);
        }

        Paragraph::new(Span::styled(self.snapshot.stats.to_string(), bold_style))
            .alignment(Alignment::Center)
            .render(chunks[3], buf);

        Paragraph::new(Span::styled(self.status_line(), italic_style))
            .alignment(Alignment::Center)
            .render(chunks[4], buf);
    }
}
