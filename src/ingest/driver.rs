use super::report::Report;
use crate::classify::Classification;
use crate::history::Hand;
use crate::save::Store;
use anyhow::Context;
use anyhow::Result;
use rayon::prelude::*;
use std::path::Path;
use std::path::PathBuf;

/// batch ingestion: parse files into hands, classify, and fold outcomes
/// into the store one hand at a time. parsing is embarrassingly parallel
/// across files; the merge pass is a single writer, so no aggregate sees
/// concurrent access.
pub struct Driver<S> {
    store: S,
}

impl<S: Store> Driver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
    pub fn into_store(self) -> S {
        self.store
    }

    /// ingest every .txt file under `dir`, looking one subdirectory deep,
    /// the way hand-history exporters nest tables under session folders.
    pub fn ingest_dir(&mut self, dir: &Path) -> Result<Report> {
        let files = Self::discover(dir)?;
        log::info!("ingesting {} files from {}", files.len(), dir.display());
        let parsed = files
            .par_iter()
            .map(|path| Self::parse_file(path))
            .collect::<Vec<_>>();
        let mut report = Report {
            files: files.len(),
            ..Report::default()
        };
        for parse in parsed {
            let Some((hands, malformed)) = parse else {
                report.unreadable += 1;
                continue;
            };
            report.malformed += malformed;
            for hand in hands {
                match self.merge(&hand)? {
                    true => report.ingested += 1,
                    false => report.duplicates += 1,
                }
            }
        }
        self.store.flush()?;
        log::info!("{}", report);
        Ok(report)
    }

    /// ingest one blob of hand-history text. entry point for single files
    /// and tests; same per-hand isolation as the directory pass.
    pub fn ingest_text(&mut self, text: &str) -> Result<Report> {
        let (hands, malformed) = Hand::all(text);
        let mut report = Report {
            files: 1,
            malformed,
            ..Report::default()
        };
        for hand in hands {
            match self.merge(&hand)? {
                true => report.ingested += 1,
                false => report.duplicates += 1,
            }
        }
        Ok(report)
    }

    /// fold one hand into the store, at most once per hand id. storage
    /// errors propagate; everything else is local to the hand.
    fn merge(&mut self, hand: &Hand) -> Result<bool> {
        if self.store.ingested(hand.id())? {
            log::debug!("hand {} already ingested, skipping", hand.id());
            return Ok(false);
        }
        let classified = Classification::from(hand);
        for seat in hand.seats() {
            if let Some(outcome) = classified.outcome(&seat.name) {
                let mut profile = self.store.get(&seat.name)?.unwrap_or_default();
                profile.absorb(&seat.position.to_string(), outcome);
                self.store.put(&seat.name, profile)?;
            }
        }
        self.store.record(hand.id())?;
        Ok(true)
    }

    fn parse_file(path: &Path) -> Option<(Vec<Hand>, usize)> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(Hand::all(&text)),
            Err(e) => {
                log::error!("unreadable file {}: {}", path.display(), e);
                None
            }
        }
    }

    fn discover(dir: &Path) -> Result<Vec<PathBuf>> {
        fn texts(dir: &Path, depth: usize, found: &mut Vec<PathBuf>) -> Result<()> {
            let entries = std::fs::read_dir(dir)
                .with_context(|| format!("read hand directory {}", dir.display()))?;
            for entry in entries {
                let path = entry?.path();
                if path.is_dir() && depth > 0 {
                    texts(&path, depth - 1, found)?;
                } else if path.extension().is_some_and(|x| x.eq_ignore_ascii_case("txt")) {
                    found.push(path);
                }
            }
            Ok(())
        }
        let mut found = Vec::new();
        texts(dir, 1, &mut found)?;
        found.sort();
        Ok(found)
    }
}
