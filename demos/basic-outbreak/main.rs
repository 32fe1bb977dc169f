use ixa_grid::log::{LevelFilter, info, set_log_level};
use ixa_grid::{Parameters, SimError, Status};

static PARAMETERS: &str = r#"{
    "disease": { "transmission_rate": 0.2, "fatality_rate": 0.0,
                 "days_in_incubation": 7, "days_with_symptoms": 8, "name": "Virus" },
    "population": { "size": 15, "travel_radius": 1, "encounters": 4,
                    "init_incubations": 1, "init_infections": 0, "seed": 123, "name": "City" },
    "days_in_simulation": 50
}"#;

fn main() -> Result<(), SimError> {
    set_log_level(LevelFilter::Info);

    // A parameter file may be given as the only argument.
    let parameters = match std::env::args().nth(1) {
        Some(path) => Parameters::from_json_file(path)?,
        None => Parameters::from_json_str(PARAMETERS)?,
    };
    let mut model = parameters.build_model()?.with_name("Model");
    model.simulate(None);

    let population = model.population();
    print!("{population}");
    for status in Status::ALL {
        info!("{status:?} ({status}): {}", population.count_of(status));
    }
    Ok(())
}
