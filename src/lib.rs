//! A disease spread engine on a 2D grid.
//!
//! A `Population` is a `size × size` grid of people, each moving through
//! `Susceptible → Incubated → Infected → {Recovered, Dead}`. Every call to
//! `Population::update()` advances the grid by one day: people progress through their disease,
//! then everyone who was infectious at the start of the day meets a few neighbors within the
//! travel radius and may pass the disease on. A run is fully determined by its seed.
//!
//! ```rust
//! use std::rc::Rc;
//! use ixa_grid::{Disease, Model, Population};
//!
//! let disease = Rc::new(Disease::new(0.2, 0.0, 7, 8).unwrap().with_name("Virus"));
//! let population = Population::new(15, 1, 4, 1, 0, disease, 42).unwrap();
//! let mut model = Model::new(50, population);
//! model.simulate(None);
//! assert_eq!(model.stats().len(), 51);
//! ```
pub mod disease;
pub mod error;
pub mod log;
pub mod model;
pub mod neighborhood;
pub mod parameters;
pub mod person;
pub mod population;
pub mod random;

pub use disease::Disease;
pub use error::SimError;
pub use model::Model;
pub use parameters::Parameters;
pub use person::{Person, STATUS_COUNT, Status};
pub use population::Population;

// Re-exported for users who want to drive the random helpers with their own generator.
pub use rand;
