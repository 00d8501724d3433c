use std::sync::Arc;
use tracing::{Span, debug, error, trace};

use crate::error::AutoCatError;
use crate::filter::Filter;
use crate::model::{AutoCatResult, AutoCatUserScore};
use crate::scorers::effective_score;
use crate::storage::{CategoryRegistry, GameDatabase, GameRecord};

/// Applies a user-score autocat to games.
///
/// Every event is emitted inside the span handed over at construction, so the
/// caller decides where categorization logs end up.
pub struct UserScoreCategorizer {
    autocat: AutoCatUserScore,
    database: Option<Arc<dyn GameDatabase>>,
    span: Span,
}

impl UserScoreCategorizer {
    pub fn new(
        autocat: AutoCatUserScore,
        database: Option<Arc<dyn GameDatabase>>,
        span: Span,
    ) -> Self {
        Self {
            autocat,
            database,
            span,
        }
    }

    pub fn autocat(&self) -> &AutoCatUserScore {
        &self.autocat
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Categorizes one game.
    ///
    /// Returns `Err` only when the database cannot be used at all, which should
    /// end the whole run. A missing game yields `AutoCatResult::Failure`.
    pub fn categorize_game<G>(
        &self,
        game: Option<&mut G>,
        filter: Option<&Filter>,
        registry: &mut dyn CategoryRegistry,
    ) -> Result<AutoCatResult, AutoCatError>
    where
        G: GameRecord + ?Sized,
    {
        let _entered = self.span.enter();

        let Some(database) = self.database.as_deref() else {
            error!(autocat = %self.autocat.name, "Game database is not available");
            return Err(AutoCatError::DatabaseUnavailable);
        };

        let Some(game) = game else {
            error!(autocat = %self.autocat.name, "Game reference is missing");
            return Ok(AutoCatResult::Failure);
        };
        let game_id = game.id();

        let stats = database
            .contains(game_id)
            .inspect_err(|e| error!(game_id, error = %e, "Game database lookup failed"))?;
        let Some(stats) = stats else {
            trace!(game_id, "Game not in database");
            return Ok(AutoCatResult::NotInDatabase);
        };

        if !game.include_game(filter) {
            trace!(game_id, "Game rejected by filter");
            return Ok(AutoCatResult::Filtered);
        }

        let score = effective_score(&stats, self.autocat.use_wilson_score);
        trace!(
            game_id,
            raw = stats.positive_percentage,
            reviews = stats.total_reviews,
            score,
            "Computed effective score"
        );

        let Some(rule) = self.autocat.find_rule(score, stats.total_reviews) else {
            debug!(game_id, score, "No rule matched");
            return Ok(AutoCatResult::Success);
        };

        let category_name = self.autocat.get_category_name(&rule.name);
        debug!(game_id, score, category = %category_name, "Rule matched");
        game.add_category(registry.get_category(&category_name));

        Ok(AutoCatResult::Success)
    }
}
