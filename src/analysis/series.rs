use crate::analysis::aggregate::{Dimension, aggregate};
use crate::model::leaf::LeafKey;
use crate::model::policy::PolicyId;
use crate::model::profile::ProfileId;
use crate::model::stage::StageId;
use crate::simulation::table::EnergyTable;
use crate::variant::variant::Variant;

/// One bar series of the chart: per-stage totals of a (profile, policy) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    label: String,
    values: Vec<f64>,
}

impl Series {
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Joules per stage, in stage declaration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

pub fn stage_series(variant: &Variant, table: &EnergyTable) -> Vec<Series> {
    let totals = aggregate(
        table,
        &[Dimension::Profile, Dimension::Policy, Dimension::Stage],
    );

    let profiles = variant
        .profiles()
        .iter()
        .enumerate()
        .filter(|(_, p)| variant.focus().is_none_or(|f| f == p.name()))
        .collect::<Vec<_>>();

    let policies: Vec<(Option<PolicyId>, Option<&str>)> = match variant.policy_list() {
        Some(list) => list
            .iter()
            .enumerate()
            .map(|(i, p)| (Some(PolicyId(i)), Some(p.name())))
            .collect(),
        None => vec![(None, None)],
    };

    let show_profile = profiles.len() > 1 || variant.policy_list().is_none();

    profiles
        .iter()
        .flat_map(|(p_id, profile)| {
            let totals = &totals;
            policies.iter().map(move |(policy, policy_name)| {
                let label = match (show_profile, policy_name) {
                    (true, Some(name)) => format!("{} / {}", profile.name(), name),
                    (false, Some(name)) => name.to_string(),
                    (_, None) => profile.name().to_string(),
                };
                let values = (0..variant.stages().len())
                    .map(|s| {
                        let key = LeafKey {
                            profile: Some(ProfileId(*p_id)),
                            policy: *policy,
                            stage: Some(StageId(s)),
                            node: None,
                        };
                        totals.get(&key).copied().unwrap_or(0.0)
                    })
                    .collect();
                Series { label, values }
            })
        })
        .collect()
}
