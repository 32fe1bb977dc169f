/*!

The population engine: a `size × size` grid of `Person`s advanced one day at a time.

The grid is a flat row-major arena owned by the `Population`. The neighbor table and the list of
infectious people hold indices into that arena and are rebuilt together with it, so no index ever
outlives its grid generation.

A day step (`update()`) runs in three phases:

 1. Every person advances its own disease progression, in row-major order.
 2. Every person who was infectious at the start of the day meets `encounters` neighbors sampled
    with replacement and tries to transmit to each of them.
 3. The status counts and the infectious list are recomputed from the grid.

Because phase 2 iterates over the infectious list as it stood *before* phase 1, someone infected
today cannot transmit until tomorrow. All randomness comes from one generator, drawn in a fixed
order, so a run is reproducible from its seed.

*/

use crate::disease::Disease;
use crate::error::SimError;
use crate::log::{debug, trace};
use crate::neighborhood::Neighborhood;
use crate::person::{Person, STATUS_COUNT, Status};
use crate::random::{RandomExt, SimRng, rng_from_seed};
use std::fmt::{self, Display};
use std::rc::Rc;

pub struct Population {
    size: usize,
    travel_radius: usize,
    encounters: usize,
    init_incubations: usize,
    init_infections: usize,
    seed: u64,
    name: String,
    disease: Rc<Disease>,
    rng: SimRng,
    // Row-major arena; cell `(row, col)` lives at `row * size + col`.
    people: Vec<Person>,
    neighborhood: Neighborhood,
    status_count: [usize; STATUS_COUNT],
    // Arena indices of every incubated or infected person, in row-major order.
    infectious_people: Vec<usize>,
}

impl Population {
    /// Builds the grid and seeds the initial cases: `init_incubations` cells are drawn (with
    /// replacement) and incubated, then `init_infections` of those draws are drawn again and moved
    /// on to infected.
    ///
    /// Fails with `SimError::InvalidParameter` if `size` is zero, if `init_infections` exceeds
    /// `init_incubations`, or if `init_incubations + init_infections` exceeds `size * size`.
    pub fn new(
        size: usize,
        travel_radius: usize,
        encounters: usize,
        init_incubations: usize,
        init_infections: usize,
        disease: Rc<Disease>,
        seed: u64,
    ) -> Result<Self, SimError> {
        validate(size, init_incubations, init_infections)?;
        trace!(
            "creating population: size={size} travel_radius={travel_radius} \
             encounters={encounters} init_incubations={init_incubations} \
             init_infections={init_infections} seed={seed}"
        );

        let mut population = Population {
            size,
            travel_radius,
            encounters,
            init_incubations,
            init_infections,
            seed,
            name: String::new(),
            disease,
            rng: rng_from_seed(seed),
            people: Vec::new(),
            neighborhood: Neighborhood::new(0, travel_radius),
            status_count: [0; STATUS_COUNT],
            infectious_people: Vec::new(),
        };
        population.build_generation();
        population.seed_initial_cases();
        Ok(population)
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Advances the population by one day. Does nothing once no one is infectious.
    pub fn update(&mut self) {
        if self.infectious_people.is_empty() {
            return;
        }
        let transmitters = std::mem::take(&mut self.infectious_people);

        for person in &mut self.people {
            person.update(&self.disease, &mut self.rng);
        }

        for &current in &transmitters {
            for other in self.get_encountered(current) {
                self.interact(current, other);
            }
        }

        self.tally();
        debug!(
            "{}: day step with {} transmitters, status counts {:?}",
            self.name,
            transmitters.len(),
            self.status_count
        );
    }

    /// Restores the initial configuration: a fresh grid at the same coordinates, a fresh neighbor
    /// table, and the same seeding procedure as construction. With `same_seed` the generator is
    /// first reseeded from the stored seed and the original trajectory is replayed exactly;
    /// otherwise the generator continues from its current state.
    pub fn reset(&mut self, same_seed: bool) {
        trace!("{}: resetting population, same_seed={same_seed}", self.name);
        if same_seed {
            self.rng = rng_from_seed(self.seed);
        }
        self.build_generation();
        self.seed_initial_cases();
    }

    /// Replaces the grid and the neighbor table together.
    fn build_generation(&mut self) {
        let size = self.size;
        self.people = (0..size * size)
            .map(|index| Person::new(index / size, index % size))
            .collect();
        self.neighborhood = Neighborhood::new(size, self.travel_radius);
    }

    fn seed_initial_cases(&mut self) {
        let cells: Vec<usize> = (0..self.people.len()).collect();
        let incubations = self.sample(&cells, self.init_incubations);
        let infections = self.sample(&incubations, self.init_infections);

        for &index in &incubations {
            self.people[index].incubate(self.disease.days_in_incubation());
        }
        for &index in &infections {
            self.people[index].infect(self.disease.days_with_symptoms());
        }
        self.tally();
    }

    /// Recomputes `status_count` and `infectious_people` from the grid.
    fn tally(&mut self) {
        self.status_count = [0; STATUS_COUNT];
        self.infectious_people.clear();
        for (index, person) in self.people.iter().enumerate() {
            self.status_count[usize::from(person.status().code())] += 1;
            if person.is_infectious() {
                self.infectious_people.push(index);
            }
        }
    }

    fn sample(&mut self, candidates: &[usize], count: usize) -> Vec<usize> {
        self.rng.sample_with_replacement(candidates, count)
    }

    fn get_encountered(&mut self, index: usize) -> Vec<usize> {
        self.rng
            .sample_with_replacement(self.neighborhood.neighbors_of(index), self.encounters)
    }

    /// Attempts transmission from `current` to `other`. Only an infectious `current` and a
    /// susceptible `other` roll the generator.
    fn interact(&mut self, current: usize, other: usize) -> bool {
        if !self.people[current].is_infectious() || !self.people[other].is_susceptible() {
            return false;
        }
        if self.rng.sample_chance() < self.disease.transmission_rate() {
            self.people[other].incubate(self.disease.days_in_incubation());
            return true;
        }
        false
    }

    /// Status codes of the whole grid, one inner vector per row.
    #[must_use]
    pub fn people(&self) -> Vec<Vec<u8>> {
        self.people
            .chunks(self.size)
            .map(|row| row.iter().map(|person| person.status().code()).collect())
            .collect()
    }

    /// Panics if `row` or `col` is outside the grid.
    #[must_use]
    pub fn person(&self, row: usize, col: usize) -> &Person {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a {0}x{0} grid",
            self.size
        );
        &self.people[row * self.size + col]
    }

    /// Counts per status, in the order Susceptible, Incubated, Infected, Recovered, Dead.
    #[must_use]
    pub fn status_count(&self) -> &[usize; STATUS_COUNT] {
        &self.status_count
    }

    #[must_use]
    pub fn count_of(&self, status: Status) -> usize {
        self.status_count[usize::from(status.code())]
    }

    pub fn infectious_people(&self) -> impl Iterator<Item = &Person> + '_ {
        self.infectious_people.iter().map(|&index| &self.people[index])
    }

    /// True once nobody is infectious; further updates change nothing.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        self.infectious_people.is_empty()
    }

    #[must_use]
    pub fn neighborhood(&self) -> &Neighborhood {
        &self.neighborhood
    }

    #[must_use]
    pub fn disease(&self) -> &Disease {
        &self.disease
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn travel_radius(&self) -> usize {
        self.travel_radius
    }

    #[must_use]
    pub fn encounters(&self) -> usize {
        self.encounters
    }

    #[must_use]
    pub fn init_incubations(&self) -> usize {
        self.init_incubations
    }

    #[must_use]
    pub fn init_infections(&self) -> usize {
        self.init_infections
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Changes the travel radius and rebuilds the neighbor table for the current grid.
    pub fn set_travel_radius(&mut self, radius: usize) {
        self.travel_radius = radius;
        self.neighborhood = Neighborhood::new(self.size, radius);
    }

    pub fn set_encounters(&mut self, encounters: usize) {
        self.encounters = encounters;
    }

    /// Stores a new seed. It is used the next time `reset(true)` is called.
    pub fn set_seed(&mut self, seed: u64) {
        self.seed = seed;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

fn validate(size: usize, init_incubations: usize, init_infections: usize) -> Result<(), SimError> {
    if size == 0 {
        return Err("size must be positive".into());
    }
    if init_infections > init_incubations {
        return Err(SimError::InvalidParameter(format!(
            "initial infections ({init_infections}) cannot exceed initial incubations \
             ({init_incubations})"
        )));
    }
    let capacity = size
        .checked_mul(size)
        .ok_or_else(|| SimError::InvalidParameter(format!("size {size} is too large")))?;
    if init_incubations.saturating_add(init_infections) > capacity {
        return Err(SimError::InvalidParameter(format!(
            "initial incubations and infections ({init_incubations} + {init_infections}) exceed \
             population size ({capacity})"
        )));
    }
    Ok(())
}

impl Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.people.chunks(self.size) {
            let mut first = true;
            for person in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", person.symbol())?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
