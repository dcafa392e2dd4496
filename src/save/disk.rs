use super::memory::Memory;
use super::store::Store;
use crate::stats::Profile;
use anyhow::Context;
use anyhow::Result;
use std::path::Path;
use std::path::PathBuf;

/// JSON snapshot store: the whole state loads on open and writes back on
/// flush. plenty for the scale of a personal hand-history database, and
/// it keeps the engine behind the [Store] seam where a real database
/// could replace it.
#[derive(Debug)]
pub struct Archive {
    path: PathBuf,
    cache: Memory,
}

impl Archive {
    /// open a snapshot, starting empty when the file does not exist yet.
    pub fn open(path: &Path) -> Result<Self> {
        let cache = match std::fs::metadata(path) {
            Err(_) => Memory::default(),
            Ok(_) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("read store {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("decode store {}", path.display()))?
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            cache,
        })
    }
}

impl Store for Archive {
    fn get(&self, player: &str) -> Result<Option<Profile>> {
        self.cache.get(player)
    }
    fn put(&mut self, player: &str, profile: Profile) -> Result<()> {
        self.cache.put(player, profile)
    }
    fn ingested(&self, hand: u64) -> Result<bool> {
        self.cache.ingested(hand)
    }
    fn record(&mut self, hand: u64) -> Result<()> {
        self.cache.record(hand)
    }
    fn players(&self) -> Result<Vec<String>> {
        self.cache.players()
    }
    fn flush(&mut self) -> Result<()> {
        let text = serde_json::to_string(&self.cache)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("write store {}", self.path.display()))?;
        log::debug!("flushed store to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let archive = Archive::open(&dir.path().join("none.json")).unwrap();
        assert!(archive.players().unwrap().is_empty());
    }

    #[test]
    fn flush_then_reopen_restores_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        let mut profile = Profile::default();
        profile.absorb(
            "SB",
            &crate::classify::Outcome {
                vpip: true,
                pfr: true,
                three_bet: true,
                three_bet_chance: true,
            },
        );
        let mut archive = Archive::open(&path).unwrap();
        archive.put("bob", profile.clone()).unwrap();
        archive.record(7).unwrap();
        archive.flush().unwrap();
        let reopened = Archive::open(&path).unwrap();
        assert_eq!(reopened.get("bob").unwrap(), Some(profile));
        assert!(reopened.ingested(7).unwrap());
    }

    #[test]
    fn corrupt_snapshot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Archive::open(&path).is_err());
    }
}
