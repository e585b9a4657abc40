use crate::error::Error;
use crate::model::node::Node;
use crate::model::policy::DvfsPolicy;
use crate::model::profile::PowerProfile;
use crate::model::stage::Stage;

/// Bounds of the uniform jitter multiplier, `0 < lo < 1 < hi`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    lo: f64,
    hi: f64,
}

impl Jitter {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }
}

/// One estimation run: which dimensions are active, their values, the jitter
/// range and the seed. Policies and nodes are optional dimensions.
#[derive(Clone, Debug)]
pub struct Variant {
    name: String,
    title: String,
    stages: Vec<Stage>,
    profiles: Vec<PowerProfile>,
    policies: Option<Vec<DvfsPolicy>>,
    nodes: Option<Vec<Node>>,
    jitter: Jitter,
    seed: u64,
    chart_focus: Option<String>,
}

impl Variant {
    pub fn new(
        name: impl Into<String>,
        stages: Vec<Stage>,
        profiles: Vec<PowerProfile>,
        jitter: Jitter,
        seed: u64,
    ) -> Self {
        let name = name.into();
        Self {
            title: name.clone(),
            name,
            stages,
            profiles,
            policies: None,
            nodes: None,
            jitter,
            seed,
            chart_focus: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn policies(mut self, policies: Vec<DvfsPolicy>) -> Self {
        self.policies = Some(policies);
        self
    }

    pub fn nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Restricts the chart to the series of a single profile.
    pub fn chart_focus(mut self, profile: impl Into<String>) -> Self {
        self.chart_focus = Some(profile.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chart_title(&self) -> &str {
        &self.title
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn profiles(&self) -> &[PowerProfile] {
        &self.profiles
    }

    pub fn policy_list(&self) -> Option<&[DvfsPolicy]> {
        self.policies.as_deref()
    }

    pub fn node_list(&self) -> Option<&[Node]> {
        self.nodes.as_deref()
    }

    pub fn jitter(&self) -> Jitter {
        self.jitter
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn focus(&self) -> Option<&str> {
        self.chart_focus.as_deref()
    }

    /// Number of leaves an estimation of this variant produces.
    pub fn leaf_count(&self) -> usize {
        self.profiles.len()
            * self.policies.as_ref().map_or(1, |p| p.len())
            * self.stages.len()
            * self.nodes.as_ref().map_or(1, |n| n.len())
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.stages.is_empty() {
            return Err(Error::invalid(format!("{}: no stages", self.name)));
        }
        if self.profiles.is_empty() {
            return Err(Error::invalid(format!("{}: no power profiles", self.name)));
        }
        if self.policies.as_ref().is_some_and(|p| p.is_empty()) {
            return Err(Error::invalid(format!("{}: empty DVFS policy list", self.name)));
        }
        if self.nodes.as_ref().is_some_and(|n| n.is_empty()) {
            return Err(Error::invalid(format!("{}: empty node list", self.name)));
        }

        if let Some(s) = self.stages.iter().find(|s| !is_positive(s.duration())) {
            return Err(Error::invalid(format!(
                "{}: stage {} has non-positive duration {}",
                self.name,
                s.name(),
                s.duration()
            )));
        }
        if let Some(p) = self.profiles.iter().find(|p| !is_positive(p.base_power())) {
            return Err(Error::invalid(format!(
                "{}: profile {} has non-positive base power {}",
                self.name,
                p.name(),
                p.base_power()
            )));
        }
        if let Some(p) = self
            .policy_list()
            .unwrap_or_default()
            .iter()
            .find(|p| !is_positive(p.scale()))
        {
            return Err(Error::invalid(format!(
                "{}: policy {} has non-positive scale {}",
                self.name,
                p.name(),
                p.scale()
            )));
        }

        let Jitter { lo, hi } = self.jitter;
        if !(lo > 0.0 && lo < 1.0 && hi > 1.0 && hi.is_finite()) {
            return Err(Error::invalid(format!(
                "{}: jitter bounds [{}, {}] must satisfy 0 < lo < 1 < hi",
                self.name, lo, hi
            )));
        }

        if let Some(focus) = &self.chart_focus {
            if !self.profiles.iter().any(|p| p.name() == focus) {
                return Err(Error::invalid(format!(
                    "{}: chart focus {} is not a known profile",
                    self.name, focus
                )));
            }
        }
        Ok(())
    }
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant() -> Variant {
        Variant::new(
            "test",
            vec![Stage::new("Fusion", 45.0), Stage::new("Migration", 35.0)],
            vec![PowerProfile::new("Edge", 4.0)],
            Jitter::new(0.9, 1.1),
            1,
        )
    }

    fn assert_invalid(variant: &Variant) {
        assert!(matches!(
            variant.validate(),
            Err(Error::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_valid_variant() {
        assert!(variant().validate().is_ok());
        assert!(
            variant()
                .policies(vec![DvfsPolicy::new("Energy_Saver", 0.8)])
                .nodes(vec![Node::new("Node 1")])
                .chart_focus("Edge")
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let mut v = variant();
        v.stages.push(Stage::new("Dissolution", 0.0));
        assert_invalid(&v);
    }

    #[test]
    fn test_negative_base_power_is_rejected() {
        let mut v = variant();
        v.profiles.push(PowerProfile::new("Offline", -6.5));
        assert_invalid(&v);
    }

    #[test]
    fn test_non_positive_scale_is_rejected() {
        assert_invalid(&variant().policies(vec![DvfsPolicy::new("Off", 0.0)]));
    }

    #[test]
    fn test_empty_dimensions_are_rejected() {
        let mut v = variant();
        v.stages.clear();
        assert_invalid(&v);

        let mut v = variant();
        v.profiles.clear();
        assert_invalid(&v);

        assert_invalid(&variant().policies(vec![]));
        assert_invalid(&variant().nodes(vec![]));
    }

    #[test]
    fn test_jitter_bounds_must_bracket_one() {
        let mut v = variant();
        v.jitter = Jitter::new(1.0, 1.1);
        assert_invalid(&v);

        v.jitter = Jitter::new(0.9, 1.0);
        assert_invalid(&v);

        v.jitter = Jitter::new(0.0, 1.1);
        assert_invalid(&v);
    }

    #[test]
    fn test_unknown_chart_focus_is_rejected() {
        assert_invalid(&variant().chart_focus("Offline"));
    }

    #[test]
    fn test_leaf_count() {
        assert_eq!(2, variant().leaf_count());
        let v = variant()
            .policies(vec![
                DvfsPolicy::new("No_DVFS", 1.0),
                DvfsPolicy::new("Energy_Saver", 0.8),
                DvfsPolicy::new("Thermal_Limit", 0.9),
            ])
            .nodes((1..=4).map(|i| Node::new(format!("Node {}", i))).collect());
        assert_eq!(24, v.leaf_count());
    }
}
