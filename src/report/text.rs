use crate::analysis::aggregate::stage_totals;
use crate::model::leaf::LeafKey;
use crate::simulation::table::EnergyTable;
use crate::variant::variant::Variant;
use std::fmt;
use std::io::{self, Write};

/// Nested plain-text dump of every leaf, followed by per-stage totals.
pub struct Report<'a> {
    variant: &'a Variant,
    table: &'a EnergyTable,
}

impl<'a> Report<'a> {
    pub fn new(variant: &'a Variant, table: &'a EnergyTable) -> Self {
        Self { variant, table }
    }

    fn write_headers(
        &self,
        f: &mut fmt::Formatter<'_>,
        key: &LeafKey,
        prev: Option<&LeafKey>,
    ) -> fmt::Result {
        let v = self.variant;
        let profile_changed = prev.is_none_or(|p| p.profile != key.profile);
        let policy_changed = profile_changed || prev.is_some_and(|p| p.policy != key.policy);

        if let Some(id) = key.profile.filter(|_| profile_changed) {
            writeln!(f, "\nScenario: {}", v.profiles()[id.index()].name())?;
        }
        if let (Some(id), Some(list)) = (key.policy, v.policy_list()) {
            if policy_changed {
                writeln!(f, "  DVFS Policy: {}", list[id.index()].name())?;
            }
        }
        Ok(())
    }

    fn indent(&self) -> usize {
        if self.variant.policy_list().is_some() { 4 } else { 2 }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.variant;
        writeln!(f, "== {}: {} ==", v.name(), v.chart_title())?;

        let pad = self.indent();
        let mut prev: Option<&LeafKey> = None;
        for (key, joules) in self.table.iter() {
            self.write_headers(f, key, prev)?;
            let stage = key.stage.map_or("?", |s| v.stages()[s.index()].name());
            match (key.node, v.node_list()) {
                (Some(n), Some(nodes)) => {
                    let stage_changed = prev.is_none_or(|p| {
                        p.profile != key.profile || p.policy != key.policy || p.stage != key.stage
                    });
                    if stage_changed {
                        writeln!(f, "{:pad$}{}:", "", stage)?;
                    }
                    writeln!(
                        f,
                        "{:w$}{}: {:.2} J",
                        "",
                        nodes[n.index()].name(),
                        joules,
                        w = pad + 2
                    )?;
                }
                _ => writeln!(f, "{:pad$}{}: {:.2} J", "", stage, joules)?,
            }
            prev = Some(key);
        }

        writeln!(f, "\nStage totals:")?;
        for (stage, total) in v.stages().iter().zip(stage_totals(v, self.table)) {
            writeln!(f, "  {}: {:.2} J", stage.name(), total)?;
        }
        writeln!(f, "  Total: {:.2} J", self.table.total())
    }
}

/// Writes the report of every run to `out`, one after another.
pub fn write_reports(runs: &[(Variant, EnergyTable)], out: &mut impl Write) -> io::Result<()> {
    for (variant, table) in runs {
        writeln!(out, "{}", Report::new(variant, table))?;
    }
    out.flush()
}
