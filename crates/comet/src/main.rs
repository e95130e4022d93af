use std::io::stdout;
use std::time::Duration;

use comet_config::Config;
use comet_core::ColorTheme;
use comet_trail::{FrameClock, TrailParams, TrailState, link_segments, point_circles};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Paragraph};
use ratatui::{DefaultTerminal, Frame};

mod form;
mod submit;

use form::{ContactForm, Field};
use submit::{SubmitStatus, Submitter};

/// Virtual canvas units per terminal cell. Cells are roughly twice as tall
/// as they are wide, so these keep the world square-ish and let the
/// 100-unit link distance span about ten columns.
const CELL_WIDTH: f64 = 10.0;
const CELL_HEIGHT: f64 = 20.0;

/// Target frame interval (~60 fps).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::load()?;
    let terminal = ratatui::init();
    let _ = execute!(stdout(), EnableMouseCapture);
    let result = App::new(&config).run(terminal);
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

/// The main application which holds the state and logic of the client.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Trail simulation state.
    trail: TrailState,
    /// Trail tuning parameters.
    params: TrailParams,
    /// Current trail color theme.
    theme: ColorTheme,
    /// Frame scheduler for the animation loop.
    clock: FrameClock,
    /// Random source for point drift and lifetime.
    rng: rand::rngs::ThreadRng,
    /// Contact form state.
    form: ContactForm,
    /// Background submitter for the relay endpoint.
    submitter: Submitter,
    /// Explicit recipient from config, if any.
    to: Option<String>,
    /// Last known terminal height in rows, for pointer mapping.
    rows: u16,
}

impl App {
    /// Construct a new instance of [`App`] from loaded configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            running: false,
            trail: TrailState::new(),
            params: TrailParams::default(),
            theme: ColorTheme::from_name(&config.trail.theme).unwrap_or_default(),
            clock: FrameClock::new(FRAME_INTERVAL),
            rng: rand::rng(),
            form: ContactForm::default(),
            submitter: Submitter::new(config.relay.url.clone()),
            to: config.relay.to.clone(),
            rows: 0,
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
            if self.clock.tick() {
                self.trail.advance();
            }
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.rows = area.height;
        self.render_trail(frame, area);
        self.render_form(frame, area);
        self.render_status(frame, area);
    }

    /// Render the trail canvas across the whole area.
    fn render_trail(&self, frame: &mut Frame, area: Rect) {
        let width = f64::from(area.width) * CELL_WIDTH;
        let height = f64::from(area.height) * CELL_HEIGHT;
        let circles = point_circles(&self.trail, &self.params, self.theme);
        let segments = link_segments(&self.trail, &self.params, self.theme);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for segment in &segments {
                    ctx.draw(segment);
                }
                for circle in &circles {
                    ctx.draw(circle);
                }
            });
        frame.render_widget(canvas, area);
    }

    /// Render the centered contact form.
    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let [form_area] = Layout::horizontal([Constraint::Length(46)])
            .flex(Flex::Center)
            .areas(area);
        let [form_area] = Layout::vertical([Constraint::Length(8)])
            .flex(Flex::Center)
            .areas(form_area);

        let accent = self.theme.color();
        let lines = vec![
            self.field_line("name", Field::Name),
            self.field_line("email", Field::Email),
            self.field_line("subject", Field::Subject),
            self.field_line("message", Field::Message),
            Line::from(""),
            Line::from("enter to send".dark_gray()).centered(),
        ];
        let block = Block::bordered()
            .title(" get in touch ")
            .border_style(Style::new().fg(accent));
        frame.render_widget(Paragraph::new(lines).block(block), form_area);
    }

    /// A single form field line with a focus marker and cursor.
    fn field_line(&self, label: &'static str, field: Field) -> Line<'_> {
        let accent = self.theme.color();
        let focused = self.form.focus() == field;
        let marker = if focused { "▌" } else { " " };
        let mut spans = vec![
            Span::styled(marker, Style::new().fg(accent)),
            format!("{label:<9}").dark_gray(),
            Span::raw(self.form.value(field)),
        ];
        if focused {
            spans.push(Span::styled("█", Style::new().fg(accent)));
        }
        Line::from(spans)
    }

    /// Render the submission status and help text at the bottom.
    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let accent = self.theme.color();
        let chunks = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        let status = match self.submitter.status() {
            SubmitStatus::Idle => Line::from(""),
            SubmitStatus::Sending => Line::from(Span::styled("sending...", Style::new().fg(accent))),
            SubmitStatus::Sent { at } => {
                Line::from(format!("sent at {}", at.format("%H:%M:%S")).green())
            }
            SubmitStatus::Failed(reason) => Line::from(format!("failed: {reason}").red()),
        };
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            chunks[1],
        );

        let help = Line::from(vec![
            "esc".bold().fg(accent),
            " quit  ".dark_gray(),
            "tab".bold().fg(accent),
            " next field  ".dark_gray(),
            "enter".bold().fg(accent),
            " send  ".dark_gray(),
            "ctrl-t".bold().fg(accent),
            " cycle color".dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[2]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// The poll timeout keeps the animation at its frame rate.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(self.clock.timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc)
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (KeyModifiers::CONTROL, KeyCode::Char('t') | KeyCode::Char('T')) => {
                self.cycle_color_theme();
            }
            (_, KeyCode::Tab) => self.form.focus_next(),
            (_, KeyCode::BackTab) => self.form.focus_prev(),
            (_, KeyCode::Enter) => self.submit(),
            (_, KeyCode::Backspace) => self.form.backspace(),
            (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input(c);
            }
            _ => {}
        }
    }

    /// Map a pointer move into canvas space and grow the trail.
    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        if self.rows == 0 {
            return;
        }
        if !matches!(
            mouse.kind,
            MouseEventKind::Moved | MouseEventKind::Drag(_)
        ) {
            return;
        }
        let x = (f64::from(mouse.column) + 0.5) * CELL_WIDTH;
        let y = (f64::from(self.rows.saturating_sub(mouse.row)) - 0.5) * CELL_HEIGHT;
        self.trail.pointer_moved(x, y, &self.params, &mut self.rng);
    }

    /// Validate locally, then hand the payload to the background submitter.
    fn submit(&mut self) {
        match self.form.to_message(self.to.clone()) {
            Ok(msg) => self.submitter.submit(msg),
            Err(reason) => self.submitter.reject(reason),
        }
    }

    /// Cycle through available trail color themes.
    fn cycle_color_theme(&mut self) {
        self.theme = self.theme.next();
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
