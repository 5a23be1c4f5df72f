//! App state and core application logic
//!
//! Manages the application state machine, navigation stack,
//! and keyboard handling for the movie detail viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::fetch::FetchState;
use crate::models::MovieDetail;

// =============================================================================
// App State Enum
// =============================================================================

/// Application state enum representing current screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppState {
    /// Landing screen showing the requested movie id and key hints
    #[default]
    Home,
    /// Detail view for one movie
    Detail,
}

// =============================================================================
// Detail View State
// =============================================================================

/// Detail view state
#[derive(Debug)]
pub struct DetailState {
    /// TMDB id of the movie being shown
    pub movie_id: u64,
    /// Fetch progress for the detail record
    pub fetch: FetchState<MovieDetail>,
    /// Vertical scroll offset of the content area
    pub scroll: u16,
}

impl DetailState {
    pub fn new(movie_id: u64) -> Self {
        Self {
            movie_id,
            fetch: FetchState::Idle,
            scroll: 0,
        }
    }

    /// Scroll up one line
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll down one line
    pub fn scroll_down(&mut self) {
        // Render clamps to content height; the cap just bounds runaway input
        if self.scroll < u16::MAX - 1 {
            self.scroll += 1;
        }
    }
}

// =============================================================================
// Main Application State
// =============================================================================

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Current state/screen
    pub state: AppState,
    /// Navigation history stack
    pub nav_stack: Vec<AppState>,
    /// Whether the app is running
    pub running: bool,
    /// Detail view state
    pub detail: DetailState,
    /// Set when the user asked for a (re)fetch; consumed by the event loop
    wants_fetch: bool,
}

impl App {
    /// Create a new App showing the given movie
    pub fn new(movie_id: u64) -> Self {
        Self {
            state: AppState::Home,
            nav_stack: Vec::new(),
            running: true,
            detail: DetailState::new(movie_id),
            wants_fetch: false,
        }
    }

    /// Navigate to a new state, pushing current to stack
    pub fn navigate(&mut self, state: AppState) {
        // Don't push if going to same state
        if self.state != state {
            self.nav_stack.push(self.state.clone());
            self.state = state;
        }
    }

    /// Open the detail view and request a fetch unless data is already loaded
    pub fn open_detail(&mut self) {
        self.navigate(AppState::Detail);
        if self.detail.fetch.data().is_none() {
            self.request_fetch();
        }
    }

    /// Go back to previous state; exactly one pop per call
    pub fn back(&mut self) -> bool {
        if let Some(prev) = self.nav_stack.pop() {
            self.state = prev;
            true
        } else {
            false
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Ask the event loop to start (or restart) the detail fetch
    pub fn request_fetch(&mut self) {
        self.wants_fetch = true;
    }

    /// Consume a pending fetch request
    pub fn take_fetch_request(&mut self) -> bool {
        std::mem::take(&mut self.wants_fetch)
    }

    // -------------------------------------------------------------------------
    // Keyboard Event Handling
    // -------------------------------------------------------------------------

    /// Handle keyboard event, returns true if event was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Global quit shortcut (Ctrl+C or q)
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                true
            }
            KeyCode::Esc | KeyCode::Backspace => {
                // No-op at the root of the stack
                self.back();
                true
            }
            _ => match self.state {
                AppState::Home => self.handle_home_key(key),
                AppState::Detail => self.handle_detail_key(key),
            },
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter => {
                self.open_detail();
                true
            }
            _ => false,
        }
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.detail.scroll_up();
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.detail.scroll_down();
                true
            }
            KeyCode::Char('r') => {
                self.request_fetch();
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
