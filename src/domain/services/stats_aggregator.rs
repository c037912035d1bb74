#[cfg(test)]
#[path = "stats_aggregator_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Api;
use crate::domain::models::ClientError;
use crate::domain::models::PrimaryStats;
use crate::domain::models::ScheduleFilter;
use crate::domain::models::SecondaryStats;
use crate::domain::models::Sport;
use crate::domain::models::SportStatsBundle;

fn best_effort<T>(dataset: &str, sport: Sport, res: Result<T, ClientError>) -> Option<T> {
    match res {
        Ok(value) => return Some(value),
        Err(err) => {
            tracing::warn!(dataset, sport = %sport, error = %err, "optional stats unavailable");
            return None;
        }
    }
}

/// Stats for the active sport. Each load is stamped with a generation and
/// only the completion carrying the latest generation is applied.
pub struct StatsAggregator {
    sport: Sport,
    generation: u64,
    bundle: Option<SportStatsBundle>,
    failure: Option<ClientError>,
    loading: bool,
}

impl StatsAggregator {
    pub fn new(sport: Sport) -> StatsAggregator {
        return StatsAggregator {
            sport,
            generation: 0,
            bundle: None,
            failure: None,
            loading: false,
        };
    }

    pub fn sport(&self) -> Sport {
        return self.sport;
    }

    pub fn generation(&self) -> u64 {
        return self.generation;
    }

    pub fn bundle(&self) -> Option<&SportStatsBundle> {
        return self.bundle.as_ref();
    }

    pub fn failure(&self) -> Option<&ClientError> {
        return self.failure.as_ref();
    }

    pub fn is_loading(&self) -> bool {
        return self.loading;
    }

    /// True when nothing is cached, in flight or failed for the active sport.
    /// A failed load waits for a manual retry.
    pub fn needs_load(&self) -> bool {
        return self.bundle.is_none() && !self.loading && self.failure.is_none();
    }

    fn reset(&mut self, sport: Sport) {
        self.sport = sport;
        self.generation += 1;
        self.bundle = None;
        self.failure = None;
        self.loading = false;
    }

    /// Switches sport without loading. Anything still in flight becomes stale.
    pub fn select(&mut self, sport: Sport) {
        self.reset(sport);
    }

    pub fn load(&mut self, sport: Sport, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        self.reset(sport);
        self.loading = true;
        tracing::debug!(sport = %sport, generation = self.generation, "loading stats");

        tx.send(Action::LoadStats {
            sport,
            generation: self.generation,
        })?;

        return Ok(());
    }

    /// Applies a finished load. Returns false when the result was stale and
    /// dropped.
    pub fn complete(
        &mut self,
        sport: Sport,
        generation: u64,
        result: Result<SportStatsBundle, ClientError>,
    ) -> bool {
        if generation != self.generation || sport != self.sport {
            tracing::debug!(
                sport = %sport,
                generation,
                current = self.generation,
                "discarding stale stats"
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(bundle) => {
                self.bundle = Some(bundle);
            }
            Err(err) => {
                tracing::error!(sport = %sport, error = %err, "stats load failed");
                self.failure = Some(err);
            }
        }

        return true;
    }

    /// Runs the four primary requests as one all-or-nothing batch, then the
    /// soccer-only best-effort pair.
    pub async fn fetch(
        api: &(dyn Api + Send + Sync),
        sport: Sport,
    ) -> Result<SportStatsBundle, ClientError> {
        let (overview, leaderboard, all_games, upcoming_games) = futures::try_join!(
            api.overview(sport),
            api.leaderboard(sport),
            api.schedule(sport, ScheduleFilter::All),
            api.schedule(sport, ScheduleFilter::Upcoming),
        )?;

        let primary = PrimaryStats {
            overview,
            leaderboard,
            all_games: all_games.games,
            upcoming_games: upcoming_games.games,
        };

        let mut secondary = SecondaryStats::default();
        if sport.is_soccer() {
            let (year_over_year, goalkeepers) =
                futures::join!(api.year_over_year(), api.goalkeepers(sport));
            secondary.year_over_year = best_effort("year-over-year", sport, year_over_year);
            secondary.goalkeepers = best_effort("goalkeepers", sport, goalkeepers);
        }

        return Ok(SportStatsBundle::new(sport, primary, secondary));
    }
}
