use crate::model::node::Node;
use crate::model::policy::DvfsPolicy;
use crate::model::profile::PowerProfile;
use crate::model::stage::Stage;
use crate::variant::variant::{Jitter, Variant};

const CLUSTER_NODES: usize = 4;
/// Jetson Nano 2GB average draw under ML load.
const NODE_POWER_W: f64 = 5.0;

pub fn lifecycle_stages() -> Vec<Stage> {
    vec![
        Stage::new("Instantiation", 30.0),
        Stage::new("Fusion", 45.0),
        Stage::new("Dissolution", 20.0),
        Stage::new("Migration", 35.0),
    ]
}

fn mlperf_profiles() -> Vec<PowerProfile> {
    vec![
        // latency-oriented, SingleStream
        PowerProfile::new("Edge", 4.0),
        // throughput-oriented batch
        PowerProfile::new("Offline", 6.5),
    ]
}

fn dvfs_policies() -> Vec<DvfsPolicy> {
    vec![
        DvfsPolicy::new("No_DVFS", 1.0),
        DvfsPolicy::new("Energy_Saver", 0.8),
        DvfsPolicy::new("Thermal_Limit", 0.9),
    ]
}

fn cluster_nodes() -> Vec<Node> {
    (1..=CLUSTER_NODES)
        .map(|i| Node::new(format!("Node {}", i)))
        .collect()
}

/// Whole cluster as one aggregate profile, one draw per stage.
pub fn baseline() -> Variant {
    Variant::new(
        "Baseline",
        lifecycle_stages(),
        vec![PowerProfile::new(
            "MLPerf",
            CLUSTER_NODES as f64 * NODE_POWER_W,
        )],
        Jitter::new(0.9, 1.1),
        42,
    )
    .title("Energy by Lifecycle Stage, 4x Jetson Nano 2GB (MLPerf)")
}

pub fn mlperf() -> Variant {
    Variant::new(
        "MLPerf",
        lifecycle_stages(),
        mlperf_profiles(),
        Jitter::new(0.85, 1.15),
        7,
    )
    .nodes(cluster_nodes())
    .title("Energy by Stage and MLPerf Scenario, per-node aggregated")
}

pub fn edge_dvfs() -> Variant {
    Variant::new(
        "Edge DVFS",
        lifecycle_stages(),
        mlperf_profiles(),
        Jitter::new(0.85, 1.15),
        11,
    )
    .policies(dvfs_policies())
    .nodes(cluster_nodes())
    .chart_focus("Edge")
    .title("Impact of DVFS Policies, MLPerf SingleStream (Edge)")
}

pub fn full_dvfs() -> Variant {
    Variant::new(
        "Full DVFS",
        lifecycle_stages(),
        mlperf_profiles(),
        Jitter::new(0.85, 1.15),
        11,
    )
    .policies(dvfs_policies())
    .nodes(cluster_nodes())
    .title("Energy by Stage, MLPerf Scenario and DVFS Policy")
}

pub fn all() -> Vec<Variant> {
    vec![baseline(), mlperf(), edge_dvfs(), full_dvfs()]
}
