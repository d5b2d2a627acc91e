use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// Decides when an edited plan should be written back to storage.
///
/// A save happens only when the plan fingerprint changed since the last
/// save and at least `debounce` elapsed since then.
#[derive(Clone, Debug)]
pub struct AutoSave {
    debounce: Duration,
    last_fingerprint: Option<String>,
    last_saved: Option<Instant>,
}

impl Default for AutoSave {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl AutoSave {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            last_fingerprint: None,
            last_saved: None,
        }
    }

    pub fn should_save(&self, fingerprint: &str, now: Instant) -> bool {
        if self.last_fingerprint.as_deref() == Some(fingerprint) {
            return false;
        }

        match self.last_saved {
            Some(at) => now.saturating_duration_since(at) >= self.debounce,
            None => true,
        }
    }

    pub fn mark_saved(&mut self, fingerprint: impl Into<String>, now: Instant) {
        self.last_fingerprint = Some(fingerprint.into());
        self.last_saved = Some(now);
    }

    /// Records the fingerprint of a plan just read from storage, so that it
    /// is not written back unchanged.
    pub fn mark_loaded(&mut self, fingerprint: impl Into<String>) {
        self.last_fingerprint = Some(fingerprint.into());
    }

    pub fn is_dirty(&self, fingerprint: &str) -> bool {
        self.last_fingerprint.as_deref() != Some(fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_change_saves_immediately() {
        let autosave = AutoSave::default();
        assert!(autosave.should_save("a", Instant::now()));
    }

    #[test]
    fn test_unchanged_fingerprint_is_never_saved() {
        let mut autosave = AutoSave::new(Duration::from_secs(2));
        let start = Instant::now();
        autosave.mark_saved("a", start);

        assert!(!autosave.should_save("a", start + Duration::from_secs(60)));
        assert!(!autosave.is_dirty("a"));
    }

    #[test]
    fn test_changes_within_debounce_window_are_coalesced() {
        let mut autosave = AutoSave::new(Duration::from_secs(2));
        let start = Instant::now();
        autosave.mark_saved("a", start);

        assert!(!autosave.should_save("b", start + Duration::from_millis(500)));
        assert!(autosave.is_dirty("b"));
        assert!(autosave.should_save("c", start + Duration::from_secs(2)));
    }

    #[test]
    fn test_loaded_plan_is_not_saved_back() {
        let mut autosave = AutoSave::default();
        autosave.mark_loaded("a");

        assert!(!autosave.should_save("a", Instant::now()));
        assert!(autosave.should_save("b", Instant::now()));
    }
}
