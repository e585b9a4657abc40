use crate::error::Error;
use crate::model::leaf::LeafKey;
use crate::model::node::NodeId;
use crate::model::policy::PolicyId;
use crate::model::profile::ProfileId;
use crate::model::stage::StageId;
use crate::simulation::sampler::Sampler;
use crate::simulation::table::EnergyTable;
use crate::variant::variant::Variant;
use log::debug;

pub struct Estimator {
    sampler: Box<dyn Sampler>,
}

impl Estimator {
    pub fn new(sampler: Box<dyn Sampler>) -> Self {
        Self { sampler }
    }

    /// Computes one energy sample per leaf of `variant`.
    ///
    /// Leaves are visited profile → policy → stage → node and each one
    /// consumes exactly one jitter draw, so the result depends on this order
    /// for a given sampler stream.
    pub fn estimate(&mut self, variant: &Variant) -> Result<EnergyTable, Error> {
        variant.validate()?;

        // An inactive dimension contributes a single `None` slot.
        let policies: Vec<(Option<PolicyId>, f64)> = match variant.policy_list() {
            Some(list) => list
                .iter()
                .enumerate()
                .map(|(i, p)| (Some(PolicyId(i)), p.scale()))
                .collect(),
            None => vec![(None, 1.0)],
        };
        let nodes: Vec<Option<NodeId>> = match variant.node_list() {
            Some(list) => (0..list.len()).map(|i| Some(NodeId(i))).collect(),
            None => vec![None],
        };

        let jitter = variant.jitter();
        let mut table = EnergyTable::new();

        for (p_id, profile) in variant.profiles().iter().enumerate() {
            for (policy, scale) in &policies {
                let effective_power = profile.base_power() * scale;
                for (s_id, stage) in variant.stages().iter().enumerate() {
                    for node in &nodes {
                        let variability = self.sampler.sample(jitter.lo(), jitter.hi());
                        let joules = effective_power * stage.duration() * variability;
                        let key = LeafKey::new(ProfileId(p_id), *policy, StageId(s_id), *node);
                        debug!("{:?}: jitter {:.4} -> {:.2} J", key, variability, joules);
                        let inserted = table.insert(key, joules);
                        debug_assert!(inserted, "leaf {:?} drawn twice", key);
                    }
                }
            }
        }

        debug_assert_eq!(variant.leaf_count(), table.len());
        Ok(table)
    }
}
