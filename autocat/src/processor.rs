use chrono::{DateTime, Utc, serde::ts_seconds, serde::ts_seconds_option};
use metrics::counter;
use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(not(test))]
use tracing::{error, info, warn};
#[cfg(test)]
use {println as info, println as warn, println as error};

use crate::{
    categorizer::UserScoreCategorizer,
    error::AutoCatError,
    filter::{Filter, resolve_filter},
    model::{AutoCatResult, GameId},
    storage::{CategoryRegistry, GameRecord},
};

/// Tally of one categorization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub autocat: String,
    pub processed: usize,
    pub success: usize,
    pub failure: usize,
    pub not_in_database: usize,
    pub filtered: usize,
    #[serde(with = "ts_seconds")]
    pub started_at: DateTime<Utc>,
    #[serde(with = "ts_seconds_option")]
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunSummary {
    fn new(autocat: &str) -> Self {
        Self {
            autocat: autocat.to_string(),
            processed: 0,
            success: 0,
            failure: 0,
            not_in_database: 0,
            filtered: 0,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    fn record(&mut self, result: AutoCatResult) {
        self.processed += 1;
        match result {
            AutoCatResult::Success => self.success += 1,
            AutoCatResult::Failure => self.failure += 1,
            AutoCatResult::NotInDatabase => self.not_in_database += 1,
            AutoCatResult::Filtered => self.filtered += 1,
        }
    }
}

/// Runs one autocat over a selection of games.
pub struct Processor {
    categorizer: UserScoreCategorizer,
}

impl Processor {
    pub fn new(categorizer: UserScoreCategorizer) -> Self {
        info!("Initializing processor for autocat {}", categorizer.autocat().name);
        Self { categorizer }
    }

    pub fn categorizer(&self) -> &UserScoreCategorizer {
        &self.categorizer
    }

    /// Categorizes every game in `games`.
    pub fn run_all<G: GameRecord>(
        &self,
        games: &mut BTreeMap<GameId, G>,
        filters: &[Filter],
        registry: &mut dyn CategoryRegistry,
    ) -> Result<RunSummary, AutoCatError> {
        let selection: Vec<GameId> = games.keys().copied().collect();
        self.run(&selection, games, filters, registry)
    }

    /// Categorizes the games listed in `selection`, in order.
    ///
    /// Ids missing from `games` count as failures and the run goes on; a fatal
    /// categorizer error stops the run and is returned as is.
    pub fn run<G: GameRecord>(
        &self,
        selection: &[GameId],
        games: &mut BTreeMap<GameId, G>,
        filters: &[Filter],
        registry: &mut dyn CategoryRegistry,
    ) -> Result<RunSummary, AutoCatError> {
        let autocat = self.categorizer.autocat();
        let mut summary = RunSummary::new(&autocat.name);

        let filter = resolve_filter(autocat.filter.as_deref(), filters);
        if let (Some(name), None) = (autocat.filter.as_deref(), filter) {
            warn!("Filter {} not found, running autocat {} unfiltered", name, autocat.name);
        }

        for game_id in selection {
            let result = match self
                .categorizer
                .categorize_game(games.get_mut(game_id), filter, registry)
            {
                Ok(result) => result,
                Err(e) => {
                    error!("Autocat {} aborted at game {}: {}", autocat.name, game_id, e);
                    counter!("autocat_runs_aborted_total", "autocat" => autocat.name.clone())
                        .increment(1);
                    return Err(e);
                }
            };

            counter!(
                "autocat_games_total",
                "autocat" => autocat.name.clone(),
                "result" => result.to_string()
            )
            .increment(1);
            summary.record(result);
        }

        summary.finished_at = Some(Utc::now());
        info!(
            "Autocat {} processed {} games: {} success, {} failure, {} not in database, {} filtered",
            summary.autocat,
            summary.processed,
            summary.success,
            summary.failure,
            summary.not_in_database,
            summary.filtered
        );
        Ok(summary)
    }
}
