//! Terminal abacus application state and input handling.

use std::io;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{info, warn};
use crate::abacus::{Abacus, BeadSide, Evaluation};
use crate::config::{AbacusConfig, ConfigError};
use crate::notation::{NotationRenderer, NotationStyle};

/// Terminal abacus application state.
pub struct AbacusApp {
    abacus: Abacus,
    /// Selected rod (0 = rightmost, 3^0).
    pub selected: usize,
    /// Active notation style.
    pub notation: NotationStyle,
    /// Evaluation of the current digits, refreshed after every mutation.
    pub evaluation: Evaluation,
    /// Status message to display.
    pub status: String,
    /// Should we quit?
    pub should_quit: bool,
    renderer: Box<dyn NotationRenderer>,
}

impl AbacusApp {
    /// Create the app for a configuration, using the configured notation.
    pub fn new(config: &AbacusConfig) -> Result<Self, ConfigError> {
        let abacus = Abacus::with_config(config)?;
        Ok(Self::with_renderer(abacus, config.notation, config.notation.renderer()))
    }

    /// Create the app with an explicit notation renderer.
    pub fn with_renderer(abacus: Abacus, notation: NotationStyle, renderer: Box<dyn NotationRenderer>) -> Self {
        let evaluation = abacus.evaluate();
        Self {
            abacus,
            selected: 0,
            notation,
            evaluation,
            status: "Ready. ←/→ select a rod, ↑/↓ move beads, 'q' to quit.".into(),
            should_quit: false,
            renderer,
        }
    }

    /// The abacus being shown. Mutate it through the app so the
    /// evaluation stays current.
    pub fn abacus(&self) -> &Abacus {
        &self.abacus
    }

    /// Notation for the current evaluation.
    pub fn notation_text(&self) -> String {
        self.renderer.render(&self.evaluation.terms)
    }

    /// Flip a bead on the selected rod.
    pub fn toggle(&mut self, side: BeadSide) {
        match self.abacus.toggle_bead(self.selected, side) {
            Ok(digit) => {
                self.status = format!("Rod 3^{}: {} bead → digit {}", self.selected, side, digit.to_i8());
            }
            Err(e) => {
                warn!(error = %e, "toggle rejected");
                self.status = format!("Error: {}", e);
            }
        }
        self.refresh();
    }

    /// Reset every rod to the empty form.
    pub fn clear(&mut self) {
        self.abacus.clear();
        self.status = "Cleared.".into();
        self.refresh();
    }

    /// Move the selection one rod to the left (more significant).
    pub fn select_left(&mut self) {
        if self.selected + 1 < self.abacus.rod_count() {
            self.selected += 1;
        }
    }

    /// Move the selection one rod to the right (less significant).
    pub fn select_right(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Switch between LaTeX and plain notation.
    pub fn toggle_notation(&mut self) {
        self.notation = self.notation.toggled();
        self.renderer = self.notation.renderer();
        self.status = format!("Notation: {:?}", self.notation);
    }

    /// Dispatch a key press.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.select_left(),
            KeyCode::Right | KeyCode::Char('l') => self.select_right(),
            KeyCode::Up | KeyCode::Char('t') | KeyCode::Char('k') => self.toggle(BeadSide::Top),
            KeyCode::Down | KeyCode::Char('b') | KeyCode::Char('j') => self.toggle(BeadSide::Bottom),
            KeyCode::Char('c') => self.clear(),
            KeyCode::Char('n') => self.toggle_notation(),
            _ => {}
        }
    }

    fn refresh(&mut self) {
        self.evaluation = self.abacus.evaluate();
    }
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Dropping runs on every exit from [`run_abacus`], including errors from
/// drawing or reading input and panics that unwind.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        use crossterm::{terminal::{enable_raw_mode, EnterAlternateScreen}, ExecutableCommand};

        enable_raw_mode()?;
        let guard = TerminalGuard;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{terminal::{disable_raw_mode, LeaveAlternateScreen}, ExecutableCommand};

        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "failed to leave raw mode");
        }
        if let Err(e) = io::stdout().execute(LeaveAlternateScreen) {
            warn!(error = %e, "failed to leave alternate screen");
        }
    }
}

/// Run the interactive abacus.
pub fn run_abacus(config: &AbacusConfig) -> io::Result<()> {
    use ratatui::backend::CrosstermBackend;

    let mut app = AbacusApp::new(config)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    info!(rods = app.abacus.rod_count(), notation = ?app.notation, "starting abacus");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    run_loop(&mut terminal, &mut app, crossterm::event::read)
}

/// Draw, wait for the next event, dispatch it. Repeats until quit or the
/// first error, which is returned as-is.
fn run_loop<B, F>(terminal: &mut Terminal<B>, app: &mut AbacusApp, mut next_event: F) -> io::Result<()>
where
    B: Backend,
    F: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, app);
        })?;

        // Every input is handled to completion before the next redraw
        if let Event::Key(key) = next_event()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
