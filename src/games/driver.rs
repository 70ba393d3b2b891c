//! Driver implementation.

use crate::core::{GameRng, GamesConfig, GamesError, SetupError, UniformSource};
use crate::duel::{DuelEngine, DuelOutcome, DuelPair, DuelReport};
use crate::people::{District, DistrictId, Person, PersonId};
use crate::registry::{DistrictRegistry, TreeNode};
use crate::setup::Panem;

/// Result of a single `HungerGames::step`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Round {
    /// A duel was fought.
    Duel(DuelReport),
    /// The games are over.
    Finished(StopReason),
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No district is left in the games.
    NoDistricts,
    /// Districts remain but no odd/even pair across districts exists.
    NoPair,
    /// `max_rounds` duels were fought.
    RoundLimit,
}

/// What happened over a full run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamesSummary {
    pub rounds: u32,
    pub stop: StopReason,
    /// Everyone who lost a duel, in order.
    pub fallen: Vec<Person>,
    /// Districts eliminated, in order.
    pub eliminated: Vec<DistrictId>,
    /// Districts still in the games, ascending.
    pub surviving: Vec<DistrictId>,
    /// Winner of the final duel.
    pub last_winner: Option<PersonId>,
}

/// The games: a duel engine plus round bookkeeping.
///
/// ```
/// use district_games::{GamesConfig, HungerGames, Panem};
///
/// let panem = Panem::parse("2\n1 2\n2\nA X 1 15 1 5\nB Y 2 30 2 5").unwrap();
/// let mut games = HungerGames::new(GamesConfig::default());
/// games.setup(panem).unwrap();
/// games.add_all_districts();
///
/// let pair = games.select_duelers().unwrap();
/// assert_eq!(pair.person1().unwrap().first_name(), "A");
/// assert_eq!(pair.person2().unwrap().first_name(), "B");
/// ```
#[derive(Clone, Debug)]
pub struct HungerGames<R = GameRng> {
    engine: DuelEngine<R>,
    config: GamesConfig,
    rounds: u32,
}

impl HungerGames<GameRng> {
    /// Games seeded from `config.seed`.
    #[must_use]
    pub fn new(config: GamesConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: UniformSource> HungerGames<R> {
    /// Games drawing from an injected generator. `config.seed` is ignored.
    pub fn with_rng(config: GamesConfig, rng: R) -> Self {
        let engine = DuelEngine::new(DistrictRegistry::new(), rng, config.duel_die_sides);
        Self {
            engine,
            config,
            rounds: 0,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GamesConfig {
        &self.config
    }

    #[must_use]
    pub fn engine(&self) -> &DuelEngine<R> {
        &self.engine
    }

    /// Duels fought so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Stage every district of `panem`, with its people.
    pub fn setup(&mut self, panem: Panem) -> Result<(), SetupError> {
        let districts = panem.into_districts()?;
        tracing::info!(districts = districts.len(), "panem set up");
        let registry = self.engine.registry_mut();
        for district in districts {
            registry.stage(district);
        }
        Ok(())
    }

    /// Staged districts, not yet in the games.
    #[must_use]
    pub fn districts(&self) -> &[District] {
        self.engine.registry().staged()
    }

    /// Root of the active-district tree.
    #[must_use]
    pub fn root(&self) -> Option<&TreeNode> {
        self.engine.registry().root()
    }

    pub fn add_district_to_game(&mut self, id: DistrictId) -> Result<bool, GamesError> {
        self.engine.add_district_to_game(id)
    }

    /// Enter every staged district in staging order. Returns how many entered.
    pub fn add_all_districts(&mut self) -> usize {
        self.engine.registry_mut().add_all()
    }

    pub fn find_district(&self, id: DistrictId) -> Result<&District, GamesError> {
        self.engine.find_district(id)
    }

    pub fn select_duelers(&mut self) -> Option<DuelPair> {
        self.engine.select_duelers()
    }

    pub fn eliminate_dueler(&mut self, pair: DuelPair) -> Result<DuelOutcome, GamesError> {
        self.engine.eliminate_dueler(pair)
    }

    pub fn eliminate_district(&mut self, id: DistrictId) -> Result<District, GamesError> {
        self.engine.eliminate_district(id)
    }

    /// Fight one round.
    pub fn step(&mut self) -> Result<Round, GamesError> {
        if self.engine.registry().tree().is_empty() {
            return Ok(Round::Finished(StopReason::NoDistricts));
        }
        if self.config.max_rounds.is_some_and(|max| self.rounds >= max) {
            return Ok(Round::Finished(StopReason::RoundLimit));
        }
        let Some(pair) = self.engine.select_duelers() else {
            return Ok(Round::Finished(StopReason::NoPair));
        };

        match self.engine.eliminate_dueler(pair)? {
            DuelOutcome::Decided(report) => {
                self.rounds += 1;
                tracing::info!(
                    round = self.rounds,
                    winner = %report.winner,
                    fallen = %report.loser,
                    "round fought"
                );
                Ok(Round::Duel(report))
            }
            // Selection only yields complete pairs
            DuelOutcome::Bye { .. } | DuelOutcome::Empty => {
                Ok(Round::Finished(StopReason::NoPair))
            }
        }
    }

    /// Fight rounds until the games end.
    pub fn run(&mut self) -> Result<GamesSummary, GamesError> {
        let mut fallen = Vec::new();
        let mut eliminated = Vec::new();
        let mut last_winner = None;

        let stop = loop {
            match self.step()? {
                Round::Duel(report) => {
                    last_winner = Some(report.winner);
                    eliminated.extend(report.eliminated.iter().copied());
                    fallen.push(report.loser);
                }
                Round::Finished(reason) => break reason,
            }
        };

        let surviving = self.engine.registry().tree().in_order_ids();
        tracing::info!(rounds = self.rounds, ?stop, survivors = surviving.len(), "games over");

        Ok(GamesSummary {
            rounds: self.rounds,
            stop,
            fallen,
            eliminated,
            surviving,
            last_winner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEM: &str = "3\n2 1 3\n6\n\
        A One 1 15 1 4\n\
        B One 2 40 1 4\n\
        C Two 3 40 2 4\n\
        D Two 4 13 2 4\n\
        E Three 5 40 3 4\n\
        F Three 6 40 3 4\n";

    fn games(config: GamesConfig) -> HungerGames {
        let mut games = HungerGames::new(config);
        games.setup(Panem::parse(PANEM).unwrap()).unwrap();
        games
    }

    #[test]
    fn test_setup_stages_everything() {
        let games = games(GamesConfig::default());
        assert_eq!(games.districts().len(), 3);
        assert!(games.root().is_none());
    }

    #[test]
    fn test_add_all_builds_tree() {
        let mut games = games(GamesConfig::default());
        assert_eq!(games.add_all_districts(), 3);
        assert!(games.districts().is_empty());
        assert_eq!(games.root().unwrap().district().id(), DistrictId::new(2));
    }

    #[test]
    fn test_step_without_districts() {
        let mut games = games(GamesConfig::default());
        assert_eq!(games.step(), Ok(Round::Finished(StopReason::NoDistricts)));
    }

    #[test]
    fn test_round_limit() {
        let mut games = games(GamesConfig::default().with_max_rounds(1));
        games.add_all_districts();

        assert!(matches!(games.step(), Ok(Round::Duel(_))));
        assert_eq!(games.step(), Ok(Round::Finished(StopReason::RoundLimit)));
        assert_eq!(games.rounds(), 1);
    }

    #[test]
    fn test_run_terminates() {
        let mut games = games(GamesConfig::default());
        games.add_all_districts();

        let summary = games.run().unwrap();
        assert!(summary.rounds >= 1);
        assert_eq!(summary.fallen.len(), summary.rounds as usize);
        assert!(summary.last_winner.is_some());
        assert_ne!(summary.stop, StopReason::RoundLimit);
        for id in &summary.eliminated {
            assert!(games.find_district(*id).is_err());
        }
        assert_eq!(summary.surviving, games.engine().registry().tree().in_order_ids());
    }

    #[test]
    fn test_run_is_reproducible() {
        let run = |seed| {
            let mut games = games(GamesConfig::default().with_seed(seed));
            games.add_all_districts();
            games.run().unwrap()
        };

        assert_eq!(run(2023), run(2023));
    }
}
