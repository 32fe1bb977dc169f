/*!

The disease-progression state machine of a single grid cell.

```text
Susceptible -> Incubated -> Infected -> Recovered
                                     -> Dead
```

Transitions are only legal from their source state; called from any other state they do nothing
and return `false`. `Recovered` and `Dead` are terminal.

*/

use crate::disease::Disease;
use crate::random::RandomExt;
use rand::Rng;
use std::fmt::{self, Display};

/// The number of distinct `Status` values.
pub const STATUS_COUNT: usize = 5;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Status {
    Susceptible = 0,
    Incubated = 1,
    Infected = 2,
    Recovered = 3,
    Dead = 4,
}

impl Status {
    pub const ALL: [Status; STATUS_COUNT] = [
        Status::Susceptible,
        Status::Incubated,
        Status::Infected,
        Status::Recovered,
        Status::Dead,
    ];

    /// The integer status code, `0..=4`.
    #[must_use]
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Status> {
        Status::ALL.get(usize::from(code)).copied()
    }

    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Status::Susceptible => 'S',
            Status::Incubated => '.',
            Status::Infected => '-',
            Status::Recovered => '+',
            Status::Dead => '!',
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One grid cell. The position is fixed for the lifetime of the person; countdowns are `None`
/// while not armed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    status: Status,
    remain_incubated_days: Option<u32>,
    remain_infected_days: Option<u32>,
    position: (usize, usize),
}

impl Person {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Person {
            status: Status::Susceptible,
            remain_incubated_days: None,
            remain_infected_days: None,
            position: (row, col),
        }
    }

    pub fn incubate(&mut self, days_in_incubation: u32) -> bool {
        if self.status != Status::Susceptible {
            return false;
        }
        self.status = Status::Incubated;
        self.remain_incubated_days = Some(days_in_incubation);
        self.remain_infected_days = None;
        true
    }

    pub fn infect(&mut self, days_with_symptoms: u32) -> bool {
        if self.status != Status::Incubated {
            return false;
        }
        self.status = Status::Infected;
        self.remain_incubated_days = Some(0);
        self.remain_infected_days = Some(days_with_symptoms);
        true
    }

    pub fn recover(&mut self) -> bool {
        self.remove(Status::Recovered)
    }

    pub fn die(&mut self) -> bool {
        self.remove(Status::Dead)
    }

    fn remove(&mut self, terminal: Status) -> bool {
        if self.status != Status::Infected {
            return false;
        }
        self.status = terminal;
        self.remain_incubated_days = Some(0);
        self.remain_infected_days = Some(0);
        true
    }

    /// Advances this person by one day of internal progression. Contact with other people is not
    /// part of this step. Only an infected person whose symptomatic countdown ends draws from
    /// `rng`.
    pub fn update<R: Rng + ?Sized>(&mut self, disease: &Disease, rng: &mut R) {
        match self.status {
            Status::Incubated => {
                if count_down(&mut self.remain_incubated_days) {
                    self.infect(disease.days_with_symptoms());
                }
            }
            Status::Infected => {
                if count_down(&mut self.remain_infected_days) {
                    if rng.sample_chance() < disease.fatality_rate() {
                        self.die();
                    } else {
                        self.recover();
                    }
                }
            }
            // No reinfection or waning immunity in this model.
            Status::Susceptible | Status::Recovered | Status::Dead => {}
        }
    }

    #[must_use]
    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.status == Status::Susceptible
    }

    #[must_use]
    #[inline]
    pub fn is_infectious(&self) -> bool {
        matches!(self.status, Status::Incubated | Status::Infected)
    }

    #[must_use]
    #[inline]
    pub fn is_removed(&self) -> bool {
        matches!(self.status, Status::Recovered | Status::Dead)
    }

    #[must_use]
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn symbol(&self) -> char {
        self.status.symbol()
    }

    /// `(row, col)` on the grid.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        self.position
    }

    #[must_use]
    pub fn remain_incubated_days(&self) -> Option<u32> {
        self.remain_incubated_days
    }

    #[must_use]
    pub fn remain_infected_days(&self) -> Option<u32> {
        self.remain_infected_days
    }
}

/// Decrements an armed countdown if it is positive and reports whether it now stands at zero.
fn count_down(remaining: &mut Option<u32>) -> bool {
    match remaining {
        Some(days) => {
            *days = days.saturating_sub(1);
            *days == 0
        }
        None => false,
    }
}
