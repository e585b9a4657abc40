#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolicyId(pub usize);

impl PolicyId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// DVFS / throttling regime.
#[derive(Clone, Debug)]
pub struct DvfsPolicy {
    name: String,
    /// multiplier on base power, > 0.0
    scale: f64,
}

impl DvfsPolicy {
    pub fn new(name: impl Into<String>, scale: f64) -> Self {
        Self {
            name: name.into(),
            scale,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
