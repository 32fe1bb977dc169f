use crate::error::SimError;

/// Epidemiological parameters of a disease. Both rates always lie in `[0, 1]`; every setter
/// validates before it writes, so an invalid value never becomes observable.
#[derive(Clone, Debug, PartialEq)]
pub struct Disease {
    transmission_rate: f64,
    fatality_rate: f64,
    days_in_incubation: u32,
    days_with_symptoms: u32,
    name: String,
}

impl Disease {
    /// Creates a disease, failing with `SimError::InvalidParameter` if either rate is outside
    /// `[0, 1]` (NaN included).
    pub fn new(
        transmission_rate: f64,
        fatality_rate: f64,
        days_in_incubation: u32,
        days_with_symptoms: u32,
    ) -> Result<Self, SimError> {
        validate_rate("transmission rate", transmission_rate)?;
        validate_rate("fatality rate", fatality_rate)?;
        Ok(Disease {
            transmission_rate,
            fatality_rate,
            days_in_incubation,
            days_with_symptoms,
            name: String::new(),
        })
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn transmission_rate(&self) -> f64 {
        self.transmission_rate
    }

    #[must_use]
    pub fn fatality_rate(&self) -> f64 {
        self.fatality_rate
    }

    #[must_use]
    pub fn days_in_incubation(&self) -> u32 {
        self.days_in_incubation
    }

    #[must_use]
    pub fn days_with_symptoms(&self) -> u32 {
        self.days_with_symptoms
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_transmission_rate(&mut self, rate: f64) -> Result<(), SimError> {
        validate_rate("transmission rate", rate)?;
        self.transmission_rate = rate;
        Ok(())
    }

    pub fn set_fatality_rate(&mut self, rate: f64) -> Result<(), SimError> {
        validate_rate("fatality rate", rate)?;
        self.fatality_rate = rate;
        Ok(())
    }

    pub fn set_days_in_incubation(&mut self, days: u32) {
        self.days_in_incubation = days;
    }

    pub fn set_days_with_symptoms(&mut self, days: u32) {
        self.days_with_symptoms = days;
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}

fn validate_rate(what: &str, rate: f64) -> Result<(), SimError> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(SimError::InvalidParameter(format!(
            "{what} must be between 0 and 1, got {rate}"
        )))
    }
}
