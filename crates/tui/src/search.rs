// crates/tui/src/search.rs
//! Search box state with last-value-wins debouncing
//!
//! Every edit bumps a generation counter. The runtime starts one timer per
//! edit carrying that generation; only a timer whose generation is still
//! current commits the query.

/// Where the search box is in its debounce cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing typed since start
    #[default]
    Idle,
    /// Edited, waiting for the quiet period to end
    Typing,
    /// The latest text has been committed
    Debounced,
}

/// Text being typed plus the last committed query
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: String,
    committed: String,
    phase: SearchPhase,
    generation: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text as currently typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Text the current results were requested for
    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the text and returns the generation the new timer carries
    pub fn set_query(&mut self, query: impl Into<String>) -> u64 {
        self.query = query.into();
        self.phase = SearchPhase::Typing;
        self.generation += 1;
        self.generation
    }

    /// Appends one character
    pub fn push_char(&mut self, c: char) -> u64 {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.set_query(query)
    }

    /// Deletes the last character; `None` when there was nothing to delete
    pub fn pop_char(&mut self) -> Option<u64> {
        if self.query.is_empty() {
            return None;
        }
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        Some(self.set_query(query))
    }

    /// Empties the box; `None` when it was already empty
    pub fn clear(&mut self) -> Option<u64> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.set_query(String::new()))
        }
    }

    /// Handles a fired timer
    ///
    /// Returns the query to fetch when `generation` is the latest one and
    /// the text has not been committed yet. Stale timers return `None`.
    pub fn on_timer(&mut self, generation: u64) -> Option<String> {
        if generation != self.generation || self.phase != SearchPhase::Typing {
            return None;
        }

        self.phase = SearchPhase::Debounced;
        self.committed = self.query.clone();
        Some(self.committed.clone())
    }
}
