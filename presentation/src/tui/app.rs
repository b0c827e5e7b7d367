//! TUI application — main loop.
//!
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream      keyboard / resize
//!   ├─ event_rx (AppEvent)        submission completions
//!   └─ tick_interval              flash expiry
//! ```
//!
//! Submissions run in a spawned task so the loop stays responsive; the
//! outcome comes back through `event_rx` as a single event. While one is
//! Pending the state refuses to start another — no cancellation, the
//! in-flight request runs to completion or failure.

use super::event::AppEvent;
use super::render;
use super::state::{AppState, ResultsTab};
use cardio_application::SubmitAssessment;
use cardio_domain::Section;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Main TUI application
pub struct TuiApp {
    use_case: Arc<SubmitAssessment>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    flash_duration: Duration,
    show_completion: bool,
}

impl TuiApp {
    pub fn new(use_case: SubmitAssessment) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            use_case: Arc::new(use_case),
            event_tx,
            event_rx,
            flash_duration: Duration::from_secs(3),
            show_completion: true,
        }
    }

    /// How long flash messages stay on the status bar.
    pub fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.flash_duration = duration;
        self
    }

    /// Whether to render the completion gauge.
    pub fn with_completion_gauge(mut self, show: bool) -> Self {
        self.show_completion = show;
        self
    }

    /// Run the TUI main loop
    pub async fn run(&mut self) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        let mut state = AppState::new();
        state.show_completion = self.show_completion;
        let mut event_stream = EventStream::new();
        let mut tick = tokio::time::interval(Duration::from_millis(250));

        loop {
            terminal.draw(|frame| render::render(frame, &state))?;

            if state.should_quit {
                break;
            }

            tokio::select! {
                // Terminal events (keyboard, resize)
                Some(Ok(term_event)) = event_stream.next() => {
                    if let Event::Key(key) = term_event {
                        self.handle_key(&mut state, key);
                    }
                }

                // Submission completions
                Some(app_event) = self.event_rx.recv() => {
                    let AppEvent::SubmissionFinished(outcome) = app_event;
                    state.finish_submission(outcome);
                }

                // Tick for flash expiry
                _ = tick.tick() => {
                    state.expire_flash(self.flash_duration);
                }
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn handle_key(&self, state: &mut AppState, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            state.should_quit = true;
            return;
        }

        // Edit mode captures everything except Enter/Esc
        if state.editing.is_some() {
            match key.code {
                KeyCode::Enter => state.commit_edit(),
                KeyCode::Esc => state.cancel_edit(),
                KeyCode::Backspace => state.pop_edit_char(),
                KeyCode::Char(c) => state.push_edit_char(c),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,

            // Sections: direct jump and sequential movement
            KeyCode::Char('1') => state.go_to_section(Section::Demographics),
            KeyCode::Char('2') => state.go_to_section(Section::Vitals),
            KeyCode::Char('3') => state.go_to_section(Section::Tests),
            KeyCode::Tab => state.next_section(),
            KeyCode::BackTab => state.prev_section(),

            // Field focus
            KeyCode::Down | KeyCode::Char('j') => state.focus_next(),
            KeyCode::Up | KeyCode::Char('k') => state.focus_prev(),

            // Value changes
            KeyCode::Left | KeyCode::Char('h') => {
                state.cycle_option(-1);
                state.nudge_scalar(-1.0);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                state.cycle_option(1);
                state.nudge_scalar(1.0);
            }
            KeyCode::Enter => state.begin_edit(),

            // Results tabs
            KeyCode::Char('m') => state.show_results_tab(ResultsTab::Models),
            KeyCode::Char('c') => state.show_results_tab(ResultsTab::Consensus),

            // Submit
            KeyCode::Char('s') => self.submit(state),

            _ => {}
        }
    }

    /// Start a submission if the state allows one.
    fn submit(&self, state: &mut AppState) {
        let Some(record) = state.begin_submission() else {
            if !state.wizard.on_final_section() {
                state.set_flash("Submit from the Tests section (press 3)");
            }
            return;
        };

        let use_case = self.use_case.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let outcome = use_case.execute(record).await;
            // Receiver only drops on quit; a lost completion is fine then
            let _ = event_tx.send(AppEvent::SubmissionFinished(outcome));
        });
    }
}
