use super::store::Store;
use crate::stats::Profile;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// in-memory store, also the snapshot the disk store serializes. useful
/// on its own for dry runs and tests.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    profiles: BTreeMap<String, Profile>,
    ingested: BTreeSet<u64>,
}

impl Store for Memory {
    fn get(&self, player: &str) -> Result<Option<Profile>> {
        Ok(self.profiles.get(player).cloned())
    }
    fn put(&mut self, player: &str, profile: Profile) -> Result<()> {
        self.profiles.insert(player.to_string(), profile);
        Ok(())
    }
    fn ingested(&self, hand: u64) -> Result<bool> {
        Ok(self.ingested.contains(&hand))
    }
    fn record(&mut self, hand: u64) -> Result<()> {
        self.ingested.insert(hand);
        Ok(())
    }
    fn players(&self) -> Result<Vec<String>> {
        Ok(self.profiles.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Outcome;

    #[test]
    fn unknown_player_is_absent() {
        let memory = Memory::default();
        assert_eq!(memory.get("nobody").unwrap(), None);
        assert!(memory.players().unwrap().is_empty());
    }

    #[test]
    fn put_then_get_roundtrips() {
        let mut memory = Memory::default();
        let mut profile = Profile::default();
        profile.absorb(
            "BTN",
            &Outcome {
                vpip: true,
                ..Outcome::default()
            },
        );
        memory.put("alice", profile.clone()).unwrap();
        assert_eq!(memory.get("alice").unwrap(), Some(profile));
        assert_eq!(memory.players().unwrap(), vec!["alice".to_string()]);
    }

    #[test]
    fn dedup_set_remembers() {
        let mut memory = Memory::default();
        assert!(!memory.ingested(42).unwrap());
        memory.record(42).unwrap();
        assert!(memory.ingested(42).unwrap());
    }
}
