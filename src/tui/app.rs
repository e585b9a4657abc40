use crate::analysis::series::{Series, stage_series};
use crate::simulation::table::EnergyTable;
use crate::variant::variant::Variant;

/// What the chart needs from one estimated variant.
pub struct VariantView {
    name: String,
    title: String,
    stages: Vec<String>,
    series: Vec<Series>,
}

impl VariantView {
    pub fn new(variant: &Variant, table: &EnergyTable) -> Self {
        Self {
            name: variant.name().to_string(),
            title: variant.chart_title().to_string(),
            stages: variant.stages().iter().map(|s| s.name().to_string()).collect(),
            series: stage_series(variant, table),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn stages(&self) -> &[String] {
        &self.stages
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }
}

pub struct App {
    views: Vec<VariantView>,
    selected: usize,
}

impl App {
    pub fn new(views: Vec<VariantView>) -> Self {
        Self { views, selected: 0 }
    }

    pub fn views(&self) -> &[VariantView] {
        &self.views
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> Option<&VariantView> {
        self.views.get(self.selected)
    }

    pub fn next(&mut self) {
        if !self.views.is_empty() {
            self.selected = (self.selected + 1) % self.views.len();
        }
    }

    pub fn previous(&mut self) {
        if !self.views.is_empty() {
            self.selected = (self.selected + self.views.len() - 1) % self.views.len();
        }
    }
}
