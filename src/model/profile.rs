#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileId(pub usize);

impl ProfileId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Workload class with its base power draw per node.
#[derive(Clone, Debug)]
pub struct PowerProfile {
    name: String,
    /// watts, > 0.0
    base_power: f64,
}

impl PowerProfile {
    pub fn new(name: impl Into<String>, base_power: f64) -> Self {
        Self {
            name: name.into(),
            base_power,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_power(&self) -> f64 {
        self.base_power
    }
}
