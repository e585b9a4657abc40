use crate::model::node::NodeId;
use crate::model::policy::PolicyId;
use crate::model::profile::ProfileId;
use crate::model::stage::StageId;

/// Flat key of one energy sample.
///
/// Field order matches the estimation nesting order (profile, policy, stage,
/// node), so the derived `Ord` sorts keys exactly as they were drawn.
/// Inactive dimensions are `None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeafKey {
    pub profile: Option<ProfileId>,
    pub policy: Option<PolicyId>,
    pub stage: Option<StageId>,
    pub node: Option<NodeId>,
}

impl LeafKey {
    pub fn new(
        profile: ProfileId,
        policy: Option<PolicyId>,
        stage: StageId,
        node: Option<NodeId>,
    ) -> Self {
        Self {
            profile: Some(profile),
            policy,
            stage: Some(stage),
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_nesting_order() {
        let a = LeafKey::new(ProfileId(0), Some(PolicyId(1)), StageId(3), Some(NodeId(3)));
        let b = LeafKey::new(ProfileId(1), Some(PolicyId(0)), StageId(0), Some(NodeId(0)));
        let c = LeafKey::new(ProfileId(0), Some(PolicyId(1)), StageId(2), Some(NodeId(3)));
        let d = LeafKey::new(ProfileId(0), Some(PolicyId(1)), StageId(3), Some(NodeId(0)));

        assert!(a < b);
        assert!(c < a);
        assert!(d < a);
    }
}
