//! Terminal user interface for the splash screen.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and rendering using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod logo;
pub mod theme;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use crate::animation::TypingAnimator;
use crate::branding::APP_DISPLAY_NAME;
use crate::config::Config;
use crate::countdown::{Countdown, CountdownParts};

// Re-export TUI components
pub use logo::Logo;
pub use theme::Theme;

/// Trailing cursor marker shown while the heading types and erases.
const CURSOR_MARKER: &str = "▌";

/// Upper bound on the input poll timeout, so resizes stay responsive even
/// when no component deadline is near.
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Countdown recomputation cadence.
const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// Countdown tile geometry.
const TILE_WIDTH: u16 = 11;
const TILE_HEIGHT: u16 = 4;
const TILE_GAP: u16 = 2;

/// Labels under the four countdown tiles.
const TILE_LABELS: [&str; 4] = ["DAYS", "HOURS", "MINUTES", "SECONDS"];

/// All runtime state of the splash screen.
///
/// Each component is constructed exactly once here; the event loop owns
/// every deadline, and a component's next deadline is only re-armed from
/// its own tick.
pub struct AppState {
    /// Loaded configuration (the theme field mutates on toggle)
    pub config: Config,
    /// Active color theme, derived from the persisted preference
    pub theme: Theme,
    /// Logo resolved at startup
    pub logo: Logo,
    /// Typing heading animation
    pub animator: TypingAnimator,
    /// Countdown toward the launch instant
    pub countdown: Countdown,
    /// Most recent countdown snapshot
    pub parts: CountdownParts,
    animator_deadline: Option<Instant>,
    countdown_deadline: Option<Instant>,
}

impl AppState {
    /// Builds the splash state from a validated config and launch instant.
    ///
    /// The countdown ticks once immediately; the animator's first tick is
    /// due as soon as the event loop starts.
    #[must_use]
    pub fn new(config: Config, target: DateTime<Local>) -> Self {
        let theme = Theme::from_preference(config.ui.theme);
        let logo = Logo::select(config.ui.custom_logo.as_deref());
        let animator = TypingAnimator::new(&config.launch.heading, config.animation);

        let mut countdown = Countdown::new(target);
        let parts = countdown.tick(Local::now());

        let now = Instant::now();
        let countdown_deadline = if countdown.is_expired() {
            None
        } else {
            Some(now + COUNTDOWN_INTERVAL)
        };

        Self {
            config,
            theme,
            logo,
            animator,
            countdown,
            parts,
            animator_deadline: Some(now),
            countdown_deadline,
        }
    }

    /// Flips the theme, applies it, and persists the new preference.
    ///
    /// The in-session theme is authoritative; a failed save only loses the
    /// preference for the next run.
    pub fn toggle_theme(&mut self) {
        self.config.ui.theme = self.config.ui.theme.toggled();
        self.theme = Theme::from_preference(self.config.ui.theme);
        let _ = self.config.save();
    }

    /// How long the event loop may block waiting for input.
    ///
    /// Bounded by the nearest component deadline and `MAX_POLL_INTERVAL`.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = MAX_POLL_INTERVAL;

        for deadline in [self.animator_deadline, self.countdown_deadline]
            .into_iter()
            .flatten()
        {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }

        timeout
    }

    /// Fires every component whose deadline has elapsed.
    ///
    /// The animator stops being scheduled once done; the countdown once
    /// expired. Neither ever has more than one outstanding deadline.
    fn advance_timers(&mut self, now: Instant) {
        if self.animator_deadline.is_some_and(|deadline| now >= deadline) {
            self.animator_deadline = self.animator.tick().map(|delay| now + delay);
        }

        if self.countdown_deadline.is_some_and(|deadline| now >= deadline) {
            self.parts = self.countdown.tick(Local::now());
            self.countdown_deadline = if self.countdown.is_expired() {
                None
            } else {
                Some(now + COUNTDOWN_INTERVAL)
            };
        }
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        // Render current state
        terminal.draw(|f| render(f, state))?;

        // Block on input no longer than the nearest timer deadline
        let now = Instant::now();
        if event::poll(state.poll_timeout(now))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        state.advance_timers(Instant::now());
    }

    Ok(())
}

/// Handles one key event; returns true when the user quits.
fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.kind != KeyEventKind::Press {
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Char('t') => state.toggle_theme(),
        _ => {}
    }

    Ok(false)
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    // This ensures consistent background regardless of terminal settings
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(10),   // Splash content
            Constraint::Length(1), // Hint bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_splash(f, chunks[1], state);
    render_hint_bar(f, chunks[2], state);
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let title = Paragraph::new(Span::styled(
        APP_DISPLAY_NAME,
        Style::default()
            .fg(state.theme.primary)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    f.render_widget(title, area);
}

/// Renders the centered column: logo, animated heading, countdown tiles.
fn render_splash(f: &mut Frame, area: Rect, state: &AppState) {
    let heading_height = state.animator.full_height() as u16;
    let content_height = state.logo.height() + 1 + heading_height + 1 + TILE_HEIGHT;
    let top_pad = area.height.saturating_sub(content_height) / 2;

    let chunks = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(top_pad),
            Constraint::Length(state.logo.height()),
            Constraint::Length(1),
            Constraint::Length(heading_height),
            Constraint::Length(1),
            Constraint::Length(TILE_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    render_logo(f, chunks[1], state);
    render_heading(f, chunks[3], state);
    render_countdown(f, chunks[5], state);
}

fn render_logo(f: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .logo
        .lines()
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default().fg(state.theme.primary),
            ))
        })
        .collect();

    let logo = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(logo, area);
}

/// Renders the typing heading, with the cursor marker on every update
/// except the final one.
fn render_heading(f: &mut Frame, area: Rect, state: &AppState) {
    let mut lines: Vec<Line> = state
        .animator
        .lines()
        .iter()
        .map(|line| {
            Line::from(Span::styled(
                line.clone(),
                Style::default()
                    .fg(state.theme.text)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    if state.animator.shows_cursor() {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled(
                CURSOR_MARKER,
                Style::default().fg(state.theme.accent),
            ));
        }
    }

    let heading = Paragraph::new(Text::from(lines)).alignment(Alignment::Center);
    f.render_widget(heading, area);
}

/// Renders the four countdown tiles, centered as one row.
fn render_countdown(f: &mut Frame, area: Rect, state: &AppState) {
    let total_width = 4 * TILE_WIDTH + 3 * TILE_GAP;
    if area.width < total_width || area.height < TILE_HEIGHT {
        return;
    }

    let values = [
        state.parts.days,
        state.parts.hours,
        state.parts.minutes,
        state.parts.seconds,
    ];
    let left = area.x + (area.width - total_width) / 2;

    for (index, (label, value)) in TILE_LABELS.iter().zip(values).enumerate() {
        let tile = Rect {
            x: left + index as u16 * (TILE_WIDTH + TILE_GAP),
            y: area.y,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(state.theme.surface));

        let text = Text::from(vec![
            Line::from(Span::styled(
                format!("{value:02}"),
                Style::default()
                    .fg(state.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                *label,
                Style::default().fg(state.theme.text_muted),
            )),
        ]);

        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, tile);
    }
}

fn render_hint_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let hints = Line::from(vec![
        Span::styled("t", Style::default().fg(state.theme.text_secondary)),
        Span::styled(" toggle theme", Style::default().fg(state.theme.text_muted)),
        Span::styled("  ·  ", Style::default().fg(state.theme.text_muted)),
        Span::styled("q", Style::default().fg(state.theme.text_secondary)),
        Span::styled(" quit", Style::default().fg(state.theme.text_muted)),
    ]);

    let bar = Paragraph::new(hints).alignment(Alignment::Center);
    f.render_widget(bar, area);
}
