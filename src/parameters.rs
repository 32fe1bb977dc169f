/*!

Loading simulation parameters from JSON.

```json
{
  "disease": { "transmission_rate": 0.2, "fatality_rate": 0.0,
               "days_in_incubation": 7, "days_with_symptoms": 8, "name": "Virus" },
  "population": { "size": 15, "travel_radius": 1, "encounters": 4,
                  "init_incubations": 1, "init_infections": 0, "name": "City" },
  "days_in_simulation": 50
}
```

`seed` and the names are optional. Values are validated by the same constructors used in code, so
a file can never produce a `Disease` or `Population` that could not be built directly.

*/

use crate::disease::Disease;
use crate::error::SimError;
use crate::log::trace;
use crate::model::Model;
use crate::population::Population;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiseaseParameters {
    pub transmission_rate: f64,
    pub fatality_rate: f64,
    pub days_in_incubation: u32,
    pub days_with_symptoms: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PopulationParameters {
    pub size: usize,
    pub travel_radius: usize,
    pub encounters: usize,
    pub init_incubations: usize,
    pub init_infections: usize,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    pub disease: DiseaseParameters,
    pub population: PopulationParameters,
    #[serde(default)]
    pub days_in_simulation: usize,
}

impl DiseaseParameters {
    pub fn build(&self) -> Result<Disease, SimError> {
        Ok(Disease::new(
            self.transmission_rate,
            self.fatality_rate,
            self.days_in_incubation,
            self.days_with_symptoms,
        )?
        .with_name(self.name.as_str()))
    }
}

impl PopulationParameters {
    pub fn build(&self, disease: Rc<Disease>) -> Result<Population, SimError> {
        Ok(Population::new(
            self.size,
            self.travel_radius,
            self.encounters,
            self.init_incubations,
            self.init_infections,
            disease,
            self.seed,
        )?
        .with_name(self.name.as_str()))
    }
}

impl Parameters {
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        trace!("loading parameters from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json_string(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates and builds the disease and the population it spreads in.
    pub fn build_population(&self) -> Result<Population, SimError> {
        let disease = Rc::new(self.disease.build()?);
        self.population.build(disease)
    }

    /// Builds a population and wraps it in a `Model` with a `days_in_simulation` budget.
    pub fn build_model(&self) -> Result<Model, SimError> {
        Ok(Model::new(self.days_in_simulation, self.build_population()?))
    }
}
