// InteractiveSession - owns the query screen state and the in-flight worker
//
// The session is driven by exactly one task (the event loop). It spawns at
// most one lookup worker at a time; the worker's JoinHandle is the handoff,
// so the outcome moves to the UI task when the handle is joined. The worker
// never sees SessionState.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tui_textarea::TextArea;

use crate::client::{QueryOutcome, SlangLookup};
use crate::protocol::SlangDefinition;

pub const STATUS_READY: &str = "type a slang term and press Enter";
pub const STATUS_EMPTY_TERM: &str = "query term must not be empty";
pub const STATUS_SUCCEEDED: &str = "query succeeded";
pub const STATUS_PARSE_FAILED: &str = "server response could not be parsed";
pub const STATUS_WORKER_STOPPED: &str = "query worker stopped unexpectedly";

/// Coarse classification of the status line, used for coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Busy,
    Success,
    Notice,
    Error,
}

/// Everything the screen shows. Mutated only by the session's owner task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub input_text: String,
    pub status_text: String,
    pub result_text: String,
    /// True from dispatch until the outcome is consumed
    pub pending: bool,
    pub status_kind: StatusKind,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            status_text: STATUS_READY.to_string(),
            result_text: String::new(),
            pending: false,
            status_kind: StatusKind::Idle,
        }
    }
}

/// Pure description of one frame, produced by [`InteractiveSession::render`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    pub input: String,
    /// Cursor column within `input`, in characters
    pub cursor_col: usize,
    pub result: String,
    pub status: String,
    pub status_kind: StatusKind,
    pub pending: bool,
}

/// What `submit` did with a term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitResult {
    /// A query is already in flight; nothing changed.
    Rejected,
    /// The term was empty; status updated, nothing spawned.
    Invalid,
    /// A worker was spawned.
    Dispatched,
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Redraw,
    Ignore,
}

pub struct InteractiveSession {
    lookup: Arc<dyn SlangLookup>,
    state: SessionState,

    // Text editing is delegated to tui-textarea; state.input_text mirrors it.
    input: TextArea<'static>,
    history: Vec<String>,
    history_index: Option<usize>,
    history_draft: Option<String>,

    worker: Option<JoinHandle<QueryOutcome>>,
}

impl InteractiveSession {
    pub fn new(lookup: Arc<dyn SlangLookup>) -> Self {
        Self {
            lookup,
            state: SessionState::default(),
            input: TextArea::default(),
            history: Vec::new(),
            history_index: None,
            history_draft: None,
            worker: None,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state.pending
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Submit a term for lookup.
    ///
    /// While a query is pending this is a no-op. Must be called from within a
    /// tokio runtime because it spawns the worker.
    pub fn submit(&mut self, term: &str) -> SubmitResult {
        if self.state.pending {
            tracing::debug!("Submission of {:?} rejected: query already pending", term);
            return SubmitResult::Rejected;
        }

        let term = term.trim();
        if term.is_empty() {
            self.state.status_text = STATUS_EMPTY_TERM.to_string();
            self.state.status_kind = StatusKind::Notice;
            self.state.result_text.clear();
            return SubmitResult::Invalid;
        }

        self.state.pending = true;
        self.state.status_text = format!("querying: {}", term);
        self.state.status_kind = StatusKind::Busy;

        let lookup = Arc::clone(&self.lookup);
        let owned_term = term.to_string();
        tracing::info!("Dispatching lookup for {:?}", owned_term);
        self.worker = Some(tokio::spawn(async move {
            lookup.execute(&owned_term).await
        }));

        SubmitResult::Dispatched
    }

    /// Consume the outcome of the dispatched query.
    pub fn on_outcome_received(&mut self, outcome: QueryOutcome) {
        tracing::info!("Query finished: {}", outcome.kind());
        self.state.pending = false;

        match outcome {
            QueryOutcome::Success(definition) => {
                self.state.result_text = format_definition(&definition);
                self.state.status_text = STATUS_SUCCEEDED.to_string();
                self.state.status_kind = StatusKind::Success;
            }
            QueryOutcome::NotFound(term) => {
                self.state.result_text.clear();
                self.state.status_text = format!("slang not found: {}", term);
                self.state.status_kind = StatusKind::Notice;
            }
            QueryOutcome::ParseError(body) => {
                tracing::debug!("Unparseable body ({} bytes)", body.len());
                self.state.result_text.clear();
                self.state.status_text = STATUS_PARSE_FAILED.to_string();
                self.state.status_kind = StatusKind::Error;
            }
            QueryOutcome::TransportError(reason) => {
                self.state.result_text.clear();
                self.state.status_text = reason;
                self.state.status_kind = StatusKind::Error;
            }
        }
    }

    /// Wait for the in-flight worker and take its outcome.
    ///
    /// Never resolves while idle. Cancel-safe: dropping the future leaves the
    /// worker in place, so it can sit in a `select!` next to input events.
    pub async fn next_outcome(&mut self) -> QueryOutcome {
        let Some(handle) = self.worker.as_mut() else {
            return std::future::pending().await;
        };

        let joined = handle.await;
        self.worker = None;
        match joined {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Lookup worker did not complete: {}", e);
                QueryOutcome::TransportError(STATUS_WORKER_STOPPED.to_string())
            }
        }
    }

    /// Give an in-flight query up to `grace` to deliver its outcome, then
    /// abort it. Returns the outcome if it arrived.
    pub async fn shutdown(&mut self, grace: Duration) -> Option<QueryOutcome> {
        let mut handle = self.worker.take()?;

        match tokio::time::timeout(grace, &mut handle).await {
            Ok(Ok(outcome)) => {
                self.on_outcome_received(outcome.clone());
                Some(outcome)
            }
            Ok(Err(e)) => {
                tracing::warn!("Lookup worker failed during shutdown: {}", e);
                self.state.pending = false;
                None
            }
            Err(_) => {
                tracing::warn!("Aborting lookup still pending after {:?}", grace);
                handle.abort();
                self.state.pending = false;
                None
            }
        }
    }

    pub fn render(&self) -> FrameView {
        FrameView {
            input: self.state.input_text.clone(),
            cursor_col: self.input.cursor().1,
            result: self.state.result_text.clone(),
            status: self.state.status_text.clone(),
            status_kind: self.state.status_kind,
            pending: self.state.pending,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::Ignore;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => KeyAction::Quit,
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            (KeyCode::Char('q'), m)
                if self.state.input_text.is_empty() && !m.contains(KeyModifiers::CONTROL) =>
            {
                KeyAction::Quit
            }
            (KeyCode::Enter, _) => {
                let term = self.state.input_text.clone();
                if self.submit(&term) == SubmitResult::Dispatched {
                    self.history.push(term.trim().to_string());
                    self.history_index = None;
                    self.history_draft = None;
                    self.set_input("");
                }
                KeyAction::Redraw
            }
            (KeyCode::Up, _) => {
                self.history_previous();
                KeyAction::Redraw
            }
            (KeyCode::Down, _) => {
                self.history_next();
                KeyAction::Redraw
            }
            _ => {
                if self.input.input(key) {
                    self.sync_input();
                    KeyAction::Redraw
                } else {
                    KeyAction::Ignore
                }
            }
        }
    }

    // ── Input helpers ─────────────────────────────────────────────────────────

    fn set_input(&mut self, text: &str) {
        let mut input = TextArea::default();
        input.insert_str(text);
        self.input = input;
        self.sync_input();
    }

    fn sync_input(&mut self) {
        // Single-line field: Enter is intercepted above, so there is one line.
        self.state.input_text = self.input.lines().concat();
    }

    fn history_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let index = match self.history_index {
            None => {
                self.history_draft = Some(self.state.input_text.clone());
                self.history.len() - 1
            }
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.history_index = Some(index);
        let entry = self.history[index].clone();
        self.set_input(&entry);
    }

    fn history_next(&mut self) {
        let Some(index) = self.history_index else {
            return;
        };
        if index + 1 < self.history.len() {
            self.history_index = Some(index + 1);
            let entry = self.history[index + 1].clone();
            self.set_input(&entry);
        } else {
            self.history_index = None;
            let draft = self.history_draft.take().unwrap_or_default();
            self.set_input(&draft);
        }
    }
}

/// Result panel text for a successful lookup
pub fn format_definition(definition: &SlangDefinition) -> String {
    format!(
        "term:       {}\ndefinition: {}\norigin:     {}",
        definition.term(),
        definition.definition(),
        definition.origin()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl SlangLookup for Echo {
        async fn execute(&self, term: &str) -> QueryOutcome {
            QueryOutcome::NotFound(term.to_string())
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(session: &mut InteractiveSession, text: &str) {
        for c in text.chars() {
            session.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let session = InteractiveSession::new(Arc::new(Echo));
        let state = session.state();
        assert!(!state.pending);
        assert_eq!(state.status_text, STATUS_READY);
        assert!(state.result_text.is_empty());
        assert_eq!(state.status_kind, StatusKind::Idle);
    }

    #[test]
    fn test_typing_updates_input_text() {
        let mut session = InteractiveSession::new(Arc::new(Echo));
        type_text(&mut session, "yeeet");
        session.handle_key(key(KeyCode::Backspace));
        assert_eq!(session.state().input_text, "yeet");
        assert_eq!(session.render().cursor_col, 4);
    }

    #[test]
    fn test_q_quits_only_on_empty_input() {
        let mut session = InteractiveSession::new(Arc::new(Echo));
        assert_eq!(session.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);

        type_text(&mut session, "s");
        assert_eq!(session.handle_key(key(KeyCode::Char('q'))), KeyAction::Redraw);
        assert_eq!(session.state().input_text, "sq");
        assert_eq!(session.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut session = InteractiveSession::new(Arc::new(Echo));
        type_text(&mut session, "abc");
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(session.handle_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_format_definition_lists_all_fields() {
        let text = format_definition(&SlangDefinition::new("yeet", "to throw", "internet slang"));
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("yeet"));
        assert!(text.contains("to throw"));
        assert!(text.contains("internet slang"));
    }

    #[tokio::test]
    async fn test_enter_dispatches_and_clears_input() {
        let mut session = InteractiveSession::new(Arc::new(Echo));
        type_text(&mut session, "bussin");
        assert_eq!(session.handle_key(key(KeyCode::Enter)), KeyAction::Redraw);

        assert!(session.is_pending());
        assert_eq!(session.state().status_text, "querying: bussin");
        assert!(session.state().input_text.is_empty());
        assert_eq!(session.history(), ["bussin".to_string()]);

        let outcome = session.next_outcome().await;
        session.on_outcome_received(outcome);
        assert!(!session.is_pending());
        assert_eq!(session.state().status_text, "slang not found: bussin");
    }

    #[tokio::test]
    async fn test_history_recall() {
        let mut session = InteractiveSession::new(Arc::new(Echo));
        for term in ["one", "two"] {
            type_text(&mut session, term);
            session.handle_key(key(KeyCode::Enter));
            let outcome = session.next_outcome().await;
            session.on_outcome_received(outcome);
        }

        type_text(&mut session, "dra");
        session.handle_key(key(KeyCode::Up));
        assert_eq!(session.state().input_text, "two");
        session.handle_key(key(KeyCode::Up));
        assert_eq!(session.state().input_text, "one");
        session.handle_key(key(KeyCode::Up));
        assert_eq!(session.state().input_text, "one");
        session.handle_key(key(KeyCode::Down));
        assert_eq!(session.state().input_text, "two");
        session.handle_key(key(KeyCode::Down));
        assert_eq!(session.state().input_text, "dra");
    }

    #[tokio::test]
    async fn test_enter_while_pending_keeps_input() {
        let mut session = InteractiveSession::new(Arc::new(Echo));
        type_text(&mut session, "first");
        session.handle_key(key(KeyCode::Enter));
        type_text(&mut session, "second");
        session.handle_key(key(KeyCode::Enter));

        assert_eq!(session.state().input_text, "second");
        assert_eq!(session.state().status_text, "querying: first");
        assert_eq!(session.history().len(), 1);
    }
}
