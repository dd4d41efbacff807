//! Shared, lazily built dictionary.
//!
//! [`DictionaryStore`] owns the word list sources and the currently published
//! [`Dictionary`]. Readers take an `Arc` snapshot; a (re)load always builds a
//! fresh dictionary and publishes it with a single pointer swap, so a reader
//! never observes a half-merged set.
//!
//! An empty dictionary is treated as "not loaded": the next
//! [`ensure_loaded`](DictionaryStore::ensure_loaded) tries the sources again.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::checker;
use crate::dictionary::{self, Dictionary, DictionarySources, SourceOutcome};

/// Owner of the process-wide dictionary.
#[derive(Debug)]
pub struct DictionaryStore {
    sources: DictionarySources,
    current: RwLock<Arc<Dictionary>>,
    /// Serializes loads so concurrent cold requests build the set once.
    load_lock: Mutex<()>,
}

impl DictionaryStore {
    /// A store that loads from `sources` on first use.
    pub fn new(sources: DictionarySources) -> Self {
        Self {
            sources,
            current: RwLock::new(Arc::new(Dictionary::new())),
            load_lock: Mutex::new(()),
        }
    }

    /// A store with `dictionary` already published.
    pub fn with_dictionary(sources: DictionarySources, dictionary: Dictionary) -> Self {
        let store = Self::new(sources);
        *store.current.write() = Arc::new(dictionary);
        store
    }

    /// The configured sources.
    pub fn sources(&self) -> &DictionarySources {
        &self.sources
    }

    /// The currently published dictionary, loaded or not.
    pub fn snapshot(&self) -> Arc<Dictionary> {
        self.current.read().clone()
    }

    /// Returns `true` if a non-empty dictionary is published.
    pub fn is_loaded(&self) -> bool {
        !self.current.read().is_empty()
    }

    /// The published dictionary, building it first if it is empty.
    pub fn ensure_loaded(&self) -> Arc<Dictionary> {
        let current = self.snapshot();
        if !current.is_empty() {
            return current;
        }

        let _guard = self.load_lock.lock();
        // Another caller may have finished a load while we waited.
        let current = self.snapshot();
        if !current.is_empty() {
            return current;
        }

        tracing::debug!("dictionary empty, loading");
        self.publish(dictionary::load(&self.sources).dictionary)
    }

    /// Rebuild the dictionary from its sources and publish it.
    ///
    /// Returns the published dictionary and what happened to each source.
    #[tracing::instrument(skip(self))]
    pub fn reload(&self) -> (Arc<Dictionary>, Vec<SourceOutcome>) {
        let _guard = self.load_lock.lock();
        let report = dictionary::load(&self.sources);
        (self.publish(report.dictionary), report.outcomes)
    }

    /// Unknown words in `text`, loading the dictionary first if needed.
    pub fn check(&self, text: &str) -> Vec<String> {
        let dictionary = self.ensure_loaded();
        checker::find_misspelled(text, &dictionary)
    }

    fn publish(&self, dictionary: Dictionary) -> Arc<Dictionary> {
        let fresh = Arc::new(dictionary);
        *self.current.write() = Arc::clone(&fresh);
        fresh
    }
}
