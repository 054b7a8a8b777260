//! Session state: the journal and theme stores for one run

use crate::domain::{Clock, JournalStore, ThemeStore};
use crate::infrastructure::Config;

/// Owns every store a run works with; services borrow from it
#[derive(Debug)]
pub struct Session<C: Clock> {
    journal: JournalStore<C>,
    theme: ThemeStore,
}

impl<C: Clock> Session<C> {
    pub fn new(journal: JournalStore<C>, theme: ThemeStore) -> Self {
        Session { journal, theme }
    }

    /// Build a session as `config` describes, reading time from `clock`
    pub fn from_config(config: &Config, clock: C) -> Self {
        let journal = if config.seed_samples {
            JournalStore::with_sample_entries(clock)
        } else {
            JournalStore::new(clock)
        };
        let theme = ThemeStore::new(config.theme, config.host_scheme());

        tracing::debug!(
            entries = journal.len(),
            theme = %theme.preference(),
            "session started"
        );
        Session { journal, theme }
    }

    pub fn journal(&self) -> &JournalStore<C> {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut JournalStore<C> {
        &mut self.journal
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeStore {
        &mut self.theme
    }
}
