//! Dictionary loading.
//!
//! A [`Dictionary`] is the set of known words, merged from one or more plain
//! text word lists (UTF-8, one word per line). Loading is best-effort: a word
//! list that is missing or unreadable is recorded in the [`LoadReport`] and
//! skipped, and the remaining lists are still merged.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::config::Config;
use crate::error::{SourceError, SourceResult};

/// An immutable set of known words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `word` is a known word. Matching is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Merge the entries of one word list, returning how many entries it had.
    fn extend_from_list(&mut self, content: &str) -> usize {
        let mut entries = 0;
        for word in entries_of(content) {
            self.words.insert(word.to_string());
            entries += 1;
        }
        entries
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty())
            .collect();
        Self { words }
    }
}

/// Entries of a word list: each line trimmed, blank lines dropped.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`.
fn entries_of(content: &str) -> impl Iterator<Item = &str> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// The ordered word lists a dictionary is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionarySources {
    base_dir: Utf8PathBuf,
    files: Vec<Utf8PathBuf>,
}

impl DictionarySources {
    /// Word lists `files`, with relative paths resolved against `base_dir`.
    pub fn new(base_dir: impl Into<Utf8PathBuf>, files: Vec<Utf8PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            files,
        }
    }

    /// Sources named by the configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.resolved_dictionary_dir(),
            config.dictionary_files.clone(),
        )
    }

    /// Directory relative word lists are resolved against.
    pub fn base_dir(&self) -> &Utf8Path {
        &self.base_dir
    }

    /// Number of configured word lists.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` when no word lists are configured.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Resolved locations of every word list, in load order.
    pub fn paths(&self) -> impl Iterator<Item = Utf8PathBuf> + '_ {
        self.files.iter().map(|file| self.resolve(file))
    }

    fn resolve(&self, file: &Utf8Path) -> Utf8PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.base_dir.join(file)
        }
    }
}

/// What happened to one word list during a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceStatus {
    /// The list was read; `entries` non-blank lines were merged.
    Loaded {
        /// Non-blank lines read from the list (before deduplication).
        entries: usize,
    },
    /// The list does not exist.
    Missing,
    /// The list exists but could not be read.
    Failed {
        /// Human-readable failure description.
        reason: String,
    },
}

/// Outcome of loading a single word list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceOutcome {
    /// Resolved location of the word list.
    pub path: Utf8PathBuf,
    /// What happened.
    #[serde(flatten)]
    pub status: SourceStatus,
}

/// Result of building a dictionary from its sources.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// The merged dictionary.
    pub dictionary: Dictionary,
    /// One outcome per source, in load order.
    pub outcomes: Vec<SourceOutcome>,
}

impl LoadReport {
    /// Number of sources that contributed words.
    pub fn loaded_sources(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, SourceStatus::Loaded { .. }))
            .count()
    }
}

/// Build a dictionary from every source, skipping the ones that cannot be read.
///
/// Never fails: per-source problems are logged and recorded in the returned
/// report. Loading the same sources twice yields the same dictionary.
#[tracing::instrument(skip_all, fields(sources = sources.len()))]
pub fn load(sources: &DictionarySources) -> LoadReport {
    let mut report = LoadReport::default();

    for path in sources.paths() {
        let status = match read_source(&path) {
            Ok(content) => {
                let entries = report.dictionary.extend_from_list(&content);
                tracing::info!(source = %path, entries, "loaded word list");
                SourceStatus::Loaded { entries }
            }
            Err(err) if err.is_not_found() => {
                tracing::warn!(source = %path, "word list not found, skipping");
                SourceStatus::Missing
            }
            Err(err) => {
                tracing::error!(source = %path, error = %err, "failed to read word list, skipping");
                SourceStatus::Failed {
                    reason: err.to_string(),
                }
            }
        };
        report.outcomes.push(SourceOutcome { path, status });
    }

    tracing::info!(
        total = report.dictionary.len(),
        loaded_sources = report.loaded_sources(),
        "dictionary loaded"
    );
    report
}

/// Read a whole word list as UTF-8 text.
fn read_source(path: &Utf8Path) -> SourceResult<String> {
    let bytes = std::fs::read(path.as_std_path()).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            SourceError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    String::from_utf8(bytes).map_err(|source| SourceError::Encoding {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn utf8_dir(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap()
    }

    fn sources(tmp: &TempDir, files: &[&str]) -> DictionarySources {
        DictionarySources::new(utf8_dir(tmp), files.iter().map(Utf8PathBuf::from).collect())
    }

    #[test]
    fn entries_are_trimmed_and_blank_lines_dropped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "  আমি \n\n\tভালো\r\n   \nআছি\n").unwrap();

        let report = load(&sources(&tmp, &["a.txt"]));

        let dict = &report.dictionary;
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("আমি"));
        assert!(dict.contains("ভালো"));
        assert!(dict.contains("আছি"));
        assert!(!dict.contains(""));
        assert_eq!(
            report.outcomes[0].status,
            SourceStatus::Loaded { entries: 3 }
        );
    }

    #[test]
    fn sources_merge_and_deduplicate() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "আমি\nভালো\n").unwrap();
        fs::write(tmp.path().join("b.txt"), "ভালো\nআছি\nআমি\n").unwrap();

        let report = load(&sources(&tmp, &["a.txt", "b.txt"]));

        assert_eq!(report.dictionary.len(), 3);
        assert_eq!(report.loaded_sources(), 2);
        assert_eq!(
            report.outcomes[1].status,
            SourceStatus::Loaded { entries: 3 }
        );
    }

    #[test]
    fn missing_source_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("present.txt"), "কথা\n").unwrap();

        let report = load(&sources(&tmp, &["absent.txt", "present.txt"]));

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].status, SourceStatus::Missing);
        assert!(report.outcomes[0].path.ends_with("absent.txt"));
        assert!(report.dictionary.contains("কথা"));
        assert_eq!(report.dictionary.len(), 1);
    }

    #[test]
    fn invalid_utf8_source_fails_without_aborting() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bad.txt"), [0xff, 0xfe, 0x00, b'\n']).unwrap();
        fs::write(tmp.path().join("good.txt"), "বলা\n").unwrap();

        let report = load(&sources(&tmp, &["bad.txt", "good.txt"]));

        match &report.outcomes[0].status {
            SourceStatus::Failed { reason } => assert!(reason.contains("UTF-8")),
            other => panic!("expected failure, got {other:?}"),
        }
        assert!(report.dictionary.contains("বলা"));
    }

    #[test]
    fn directory_in_place_of_file_fails_without_aborting() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("dir.txt")).unwrap();

        let report = load(&sources(&tmp, &["dir.txt"]));

        assert!(matches!(
            report.outcomes[0].status,
            SourceStatus::Failed { .. }
        ));
        assert!(report.dictionary.is_empty());
    }

    #[test]
    fn no_resolvable_sources_gives_empty_dictionary() {
        let tmp = TempDir::new().unwrap();
        let report = load(&sources(&tmp, &["one.txt", "two.txt"]));
        assert!(report.dictionary.is_empty());
        assert_eq!(report.loaded_sources(), 0);
    }

    #[test]
    fn loading_twice_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.txt"), "আমি\nভালো\nআমি\n").unwrap();
        let srcs = sources(&tmp, &["a.txt", "a.txt", "missing.txt"]);

        let first = load(&srcs);
        let second = load(&srcs);

        assert_eq!(first.dictionary, second.dictionary);
        assert_eq!(first.dictionary.len(), 2);
    }

    #[test]
    fn cr_only_line_endings_are_split() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("mac.txt"), "আমি\rভালো\r\rআছি").unwrap();

        let report = load(&sources(&tmp, &["mac.txt"]));

        let dict = &report.dictionary;
        assert_eq!(dict.len(), 3);
        assert!(dict.contains("আমি"));
        assert!(dict.contains("ভালো"));
        assert!(dict.contains("আছি"));
        assert_eq!(
            report.outcomes[0].status,
            SourceStatus::Loaded { entries: 3 }
        );
    }

    #[test]
    fn byte_order_mark_is_not_part_of_first_entry() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("bom.txt"), "\u{feff}আমি\nতুমি\n").unwrap();

        let report = load(&sources(&tmp, &["bom.txt"]));

        assert!(report.dictionary.contains("আমি"));
        assert!(!report.dictionary.contains("\u{feff}আমি"));
    }

    #[test]
    fn absolute_paths_ignore_base_dir() {
        let tmp = TempDir::new().unwrap();
        let list = utf8_dir(&tmp).join("abs.txt");
        fs::write(&list, "শব্দ\n").unwrap();

        let srcs = DictionarySources::new("/nonexistent-base", vec![list.clone()]);
        let report = load(&srcs);

        assert_eq!(report.outcomes[0].path, list);
        assert!(report.dictionary.contains("শব্দ"));
    }

    #[test]
    fn from_iterator_drops_empty_words() {
        let dict: Dictionary = ["আমি", "", "ভালো", "আমি"].into_iter().collect();
        assert_eq!(dict.len(), 2);
        assert!(!dict.contains(""));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let outcome = SourceOutcome {
            path: Utf8PathBuf::from("words.txt"),
            status: SourceStatus::Loaded { entries: 7 },
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["path"], "words.txt");
        assert_eq!(json["status"], "loaded");
        assert_eq!(json["entries"], 7);
    }
}
