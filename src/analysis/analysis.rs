use crate::save::Store;
use crate::stats::Aggregate;
use crate::stats::Sheet;
use anyhow::Result;
use std::collections::BTreeMap;

/// read-only dashboard surface over a store. nothing here mutates
/// profiles; rates are recomputed from persisted counters on each query.
pub struct Analysis<S>(S);

impl<S: Store> Analysis<S> {
    pub fn new(store: S) -> Self {
        Self(store)
    }

    pub fn players(&self) -> Result<Vec<String>> {
        self.0.players()
    }

    /// overall stats for one player, or None for a player never seen. the
    /// dashboard renders that as "no data" rather than an error.
    pub fn sheet(&self, player: &str) -> Result<Option<Sheet>> {
        Ok(self.0.get(player)?.map(|p| Sheet::from(&p.overall)))
    }

    /// the same stats split by the position the hands were played from.
    pub fn positions(&self, player: &str) -> Result<Option<BTreeMap<String, Sheet>>> {
        Ok(self.0.get(player)?.map(|profile| {
            profile
                .positions
                .iter()
                .map(|(position, aggregate)| (position.clone(), Sheet::from(aggregate)))
                .collect()
        }))
    }

    /// aggregate-weighted population average: counters are summed across
    /// all players before taking ratios, so players with more hands weigh
    /// more. an unweighted mean of percentages would overstate short
    /// samples.
    pub fn population(&self) -> Result<Sheet> {
        let total = self
            .0
            .players()?
            .iter()
            .map(|name| self.0.get(name))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .map(|profile| profile.overall)
            .fold(Aggregate::default(), Aggregate::combine);
        Ok(Sheet::from(&total))
    }

    /// every player's overall sheet, for machine-readable export.
    pub fn export(&self) -> Result<BTreeMap<String, Sheet>> {
        let mut sheets = BTreeMap::new();
        for name in self.players()? {
            if let Some(sheet) = self.sheet(&name)? {
                sheets.insert(name, sheet);
            }
        }
        Ok(sheets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Outcome;
    use crate::save::Memory;
    use crate::save::Store;
    use crate::stats::Profile;

    fn outcome(vpip: bool, pfr: bool) -> Outcome {
        Outcome {
            vpip,
            pfr,
            ..Outcome::default()
        }
    }

    fn store() -> Memory {
        let mut memory = Memory::default();
        let mut nit = Profile::default();
        for _ in 0..9 {
            nit.absorb("BTN", &Outcome::default());
        }
        nit.absorb("BTN", &outcome(true, true));
        let mut whale = Profile::default();
        for _ in 0..15 {
            whale.absorb("SB", &outcome(true, false));
        }
        for _ in 0..15 {
            whale.absorb("BB", &Outcome::default());
        }
        memory.put("nit", nit).unwrap();
        memory.put("whale", whale).unwrap();
        memory
    }

    #[test]
    fn unknown_player_is_no_data() {
        let analysis = Analysis::new(store());
        assert_eq!(analysis.sheet("unknown").unwrap(), None);
        assert_eq!(analysis.positions("unknown").unwrap(), None);
    }

    #[test]
    fn per_player_rates() {
        let analysis = Analysis::new(store());
        let nit = analysis.sheet("nit").unwrap().unwrap();
        assert_eq!(nit.hands, 10);
        assert_eq!(nit.vpip_pct, 10.0);
        assert_eq!(nit.pfr_pct, 10.0);
    }

    #[test]
    fn positional_rates_split_by_seat() {
        let analysis = Analysis::new(store());
        let whale = analysis.positions("whale").unwrap().unwrap();
        assert_eq!(whale.len(), 2);
        assert_eq!(whale["SB"].hands, 15);
        assert_eq!(whale["SB"].vpip_pct, 100.0);
        assert_eq!(whale["BB"].vpip_pct, 0.0);
    }

    #[test]
    fn population_is_aggregate_weighted() {
        let analysis = Analysis::new(store());
        let population = analysis.population().unwrap();
        // 16 vpip hands over 40 total, not the mean of 10% and 50%.
        assert_eq!(population.hands, 40);
        assert_eq!(population.vpip_pct, 40.0);
    }

    #[test]
    fn empty_store_population_is_zero() {
        let analysis = Analysis::new(Memory::default());
        let population = analysis.population().unwrap();
        assert_eq!(population.hands, 0);
        assert_eq!(population.vpip_pct, 0.0);
    }

    #[test]
    fn export_covers_every_player() {
        let analysis = Analysis::new(store());
        let export = analysis.export().unwrap();
        assert_eq!(export.len(), 2);
        assert!(export.contains_key("nit") && export.contains_key("whale"));
    }
}
