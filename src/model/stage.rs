#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StageId(pub usize);

impl StageId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named lifecycle phase.
#[derive(Clone, Debug)]
pub struct Stage {
    name: String,
    /// seconds, > 0.0
    duration: f64,
}

impl Stage {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}
