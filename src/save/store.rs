use crate::stats::Profile;
use anyhow::Result;

/// the persistence seam. the core folds outcomes into aggregates through
/// this surface and never touches a storage engine directly: get, upsert,
/// and a dedup set of already-ingested hand ids so re-ingesting the same
/// file is a no-op.
///
/// errors crossing this boundary are fatal for the current run, but since
/// the driver merges per hand, prior persisted state stays valid and the
/// run can be retried.
pub trait Store {
    /// running counters for one player, if ever seen.
    fn get(&self, player: &str) -> Result<Option<Profile>>;
    /// upsert one player's counters.
    fn put(&mut self, player: &str, profile: Profile) -> Result<()>;
    /// has this hand id already been folded in?
    fn ingested(&self, hand: u64) -> Result<bool>;
    /// remember a hand id so duplicates are skipped on later runs.
    fn record(&mut self, hand: u64) -> Result<()>;
    /// every player name ever seen, sorted.
    fn players(&self) -> Result<Vec<String>>;
    /// persist any buffered state. default is a no-op for stores that
    /// write through.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
