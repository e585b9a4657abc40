use crate::model::leaf::LeafKey;
use crate::model::stage::StageId;
use crate::simulation::table::EnergyTable;
use crate::variant::variant::Variant;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    Profile,
    Policy,
    Stage,
    Node,
}

fn mask(key: &LeafKey, keep: &[Dimension]) -> LeafKey {
    LeafKey {
        profile: key.profile.filter(|_| keep.contains(&Dimension::Profile)),
        policy: key.policy.filter(|_| keep.contains(&Dimension::Policy)),
        stage: key.stage.filter(|_| keep.contains(&Dimension::Stage)),
        node: key.node.filter(|_| keep.contains(&Dimension::Node)),
    }
}

/// Sums leaves that agree on the `keep` dimensions.
///
/// Returned keys carry `None` for every dropped dimension and are ordered by
/// declaration index of the kept ones.
pub fn aggregate(table: &EnergyTable, keep: &[Dimension]) -> BTreeMap<LeafKey, f64> {
    table
        .iter()
        .fold(BTreeMap::new(), |mut acc, (key, joules)| {
            *acc.entry(mask(key, keep)).or_insert(0.0) += joules;
            acc
        })
}

/// Energy per stage across every other dimension, in stage declaration order.
pub fn stage_totals(variant: &Variant, table: &EnergyTable) -> Vec<f64> {
    let totals = aggregate(table, &[Dimension::Stage]);
    (0..variant.stages().len())
        .map(|i| {
            let key = LeafKey {
                profile: None,
                policy: None,
                stage: Some(StageId(i)),
                node: None,
            };
            totals.get(&key).copied().unwrap_or(0.0)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::NodeId;
    use crate::model::policy::PolicyId;
    use crate::model::profile::ProfileId;
    use crate::simulation::engine::Estimator;
    use crate::simulation::sampler::SeededSampler;
    use crate::simulation::sampler::testing::FixedSampler;
    use crate::variant::presets;
    use approx::assert_relative_eq;

    fn seeded(variant: &Variant) -> EnergyTable {
        Estimator::new(Box::new(SeededSampler::new(variant.seed())))
            .estimate(variant)
            .unwrap()
    }

    #[test]
    fn test_stage_totals_match_manual_sum() {
        let variant = presets::full_dvfs();
        let table = seeded(&variant);

        let totals = stage_totals(&variant, &table);

        assert_eq!(variant.stages().len(), totals.len());
        for (i, total) in totals.iter().enumerate() {
            let manual = table
                .iter()
                .filter(|(k, _)| k.stage == Some(StageId(i)))
                .map(|(_, j)| *j)
                .sum::<f64>();
            assert_relative_eq!(manual, *total, max_relative = 1e-12);
        }
        assert_relative_eq!(table.total(), totals.iter().sum::<f64>(), max_relative = 1e-12);
    }

    #[test]
    fn test_sum_over_nodes() {
        let variant = presets::mlperf();
        let table = Estimator::new(Box::new(FixedSampler(1.0)))
            .estimate(&variant)
            .unwrap();

        let totals = aggregate(&table, &[Dimension::Profile, Dimension::Stage]);

        assert_eq!(2 * 4, totals.len());
        let offline_fusion = LeafKey {
            profile: Some(ProfileId(1)),
            policy: None,
            stage: Some(StageId(1)),
            node: None,
        };
        assert_relative_eq!(1170.0, totals[&offline_fusion]);
    }

    #[test]
    fn test_output_in_declaration_order() {
        let variant = presets::edge_dvfs();
        let table = seeded(&variant);

        let totals = aggregate(&table, &[Dimension::Policy, Dimension::Node]);
        let keys = totals.keys().copied().collect::<Vec<_>>();

        let expected = (0..3)
            .flat_map(|p| {
                (0..4).map(move |n| LeafKey {
                    profile: None,
                    policy: Some(PolicyId(p)),
                    stage: None,
                    node: Some(NodeId(n)),
                })
            })
            .collect::<Vec<_>>();
        assert_eq!(expected, keys);
    }

    #[test]
    fn test_keep_everything_is_identity() {
        let variant = presets::full_dvfs();
        let table = seeded(&variant);

        let all = aggregate(
            &table,
            &[
                Dimension::Profile,
                Dimension::Policy,
                Dimension::Stage,
                Dimension::Node,
            ],
        );

        assert_eq!(table.len(), all.len());
        table
            .iter()
            .for_each(|(k, j)| assert_relative_eq!(*j, all[k]));
    }

    #[test]
    fn test_keep_nothing_is_grand_total() {
        let variant = presets::baseline();
        let table = seeded(&variant);

        let all = aggregate(&table, &[]);

        assert_eq!(1, all.len());
        assert_relative_eq!(table.total(), *all.values().next().unwrap());
    }
}
