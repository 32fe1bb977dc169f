use crate::log::{debug, info};
use crate::person::STATUS_COUNT;
use crate::population::Population;

/// Drives a `Population` for a bounded number of days and keeps every grid snapshot and
/// status-count row, starting with the initial state.
pub struct Model {
    days_in_simulation: usize,
    remain_days: usize,
    current_day: usize,
    population: Population,
    data: Vec<Vec<Vec<u8>>>,
    stats: Vec<[usize; STATUS_COUNT]>,
    name: String,
}

impl Model {
    #[must_use]
    pub fn new(days_in_simulation: usize, population: Population) -> Self {
        let mut model = Model {
            days_in_simulation,
            remain_days: days_in_simulation,
            current_day: 1,
            population,
            // The budget may come from a parameter file, so history grows with the days run.
            data: Vec::new(),
            stats: Vec::new(),
            name: String::new(),
        };
        model.record();
        model
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Runs `days` more days (`None` for the whole remaining budget), capped at the remaining
    /// budget. Returns `false` if no day was run.
    pub fn simulate(&mut self, days: Option<usize>) -> bool {
        let days = days.map_or(self.remain_days, |days| days.min(self.remain_days));
        if days == 0 {
            return false;
        }

        for day in 1..=days {
            self.population.update();
            self.record();
            debug!(
                "{}: day {} status counts {:?}",
                self.name,
                self.current_day + day - 1,
                self.population.status_count()
            );
        }
        self.remain_days -= days;
        self.current_day += days;

        info!(
            "{}: simulated {days} days, {} remaining, final status counts {:?}",
            self.name,
            self.remain_days,
            self.population.status_count()
        );
        true
    }

    /// Rewinds the day counter, resets the population, and restarts the history from the new
    /// initial state.
    pub fn reset(&mut self, same_seed: bool) {
        self.remain_days = self.days_in_simulation;
        self.current_day = 1;
        self.population.reset(same_seed);

        self.data.clear();
        self.stats.clear();
        self.record();
    }

    fn record(&mut self) {
        self.data.push(self.population.people());
        self.stats.push(*self.population.status_count());
    }

    /// One grid snapshot per recorded day.
    #[must_use]
    pub fn data(&self) -> &[Vec<Vec<u8>>] {
        &self.data
    }

    /// One status-count row per recorded day.
    #[must_use]
    pub fn stats(&self) -> &[[usize; STATUS_COUNT]] {
        &self.stats
    }

    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access for adjusting parameters between runs. Changes to the grid state are not
    /// reflected in the history until the next recorded day.
    pub fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    #[must_use]
    pub fn current_day(&self) -> usize {
        self.current_day
    }

    #[must_use]
    pub fn remain_days(&self) -> usize {
        self.remain_days
    }

    #[must_use]
    pub fn days_in_simulation(&self) -> usize {
        self.days_in_simulation
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
