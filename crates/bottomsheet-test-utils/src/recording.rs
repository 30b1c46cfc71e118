//! Recording presenter and event log.

use std::sync::Arc;

use bottomsheet_ui::{Presentation, Presenter};
use parking_lot::Mutex;

/// Ordered, cloneable log of named events.
///
/// Clones share the same storage, so a presenter and any number of
/// completion closures can write to one log and tests can check ordering.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().push(entry.into());
    }

    /// Snapshot of every entry so far.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Number of entries equal to `entry`.
    pub fn count(&self, entry: &str) -> usize {
        self.entries.lock().iter().filter(|e| e.as_str() == entry).count()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

/// Presenter that records each teardown as `dismiss(animated=<flag>)`.
#[derive(Debug, Clone)]
pub struct RecordingPresenter {
    log: EventLog,
}

impl RecordingPresenter {
    pub fn new(log: &EventLog) -> Self {
        Self { log: log.clone() }
    }

    /// Wrap this presenter in a modal [`Presentation`].
    pub fn into_presentation(self) -> Presentation {
        Presentation::modal(self)
    }
}

impl Presenter for RecordingPresenter {
    fn dismiss(&mut self, animated: bool) {
        self.log.record(format!("dismiss(animated={animated})"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let log = EventLog::new();
        let other = log.clone();
        other.record("a");
        log.record("b");
        assert_eq!(log.entries(), vec!["a", "b"]);
        assert_eq!(other.count("a"), 1);
    }

    #[test]
    fn test_presenter_records_dismiss() {
        let log = EventLog::new();
        let mut presenter = RecordingPresenter::new(&log);
        presenter.dismiss(false);
        presenter.dismiss(true);
        assert_eq!(
            log.entries(),
            vec!["dismiss(animated=false)", "dismiss(animated=true)"]
        );
    }
}
