use crate::error::Error;
use crate::report::text::write_reports;
use crate::simulation::engine::Estimator;
use crate::simulation::sampler::SeededSampler;
use crate::simulation::table::EnergyTable;
use crate::tui::app::{App, VariantView};
use crate::tui::draw::draw_app;
use crate::tui::terminal::TerminalGuard;
use crate::variant::presets;
use crate::variant::variant::Variant;
use crossterm::event::{Event, KeyCode, KeyEventKind};
use crossterm::tty::IsTty;
use env_logger::Builder;
use log::{info, warn};
use std::io;
use std::time::Duration;

mod analysis;
mod error;
mod model;
mod report;
mod simulation;
mod tui;
mod variant;

fn main() -> Result<(), Error> {
    Builder::from_default_env().format_timestamp(None).init();

    let mut runs: Vec<(Variant, EnergyTable)> = Vec::new();
    for variant in presets::all() {
        let mut estimator = Estimator::new(Box::new(SeededSampler::new(variant.seed())));
        let table = estimator.estimate(&variant)?;
        info!(
            "{}: seed {}, {} leaves, {:.2} J total",
            variant.name(),
            variant.seed(),
            table.len(),
            table.total()
        );
        runs.push((variant, table));
    }

    if !io::stdout().is_tty() {
        warn!("stdout is not a terminal, skipping chart");
    } else if let Err(e) = show_chart(&runs) {
        warn!("chart unavailable: {}", e);
    }

    match write_reports(&runs, &mut io::stdout().lock()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        res => Ok(res?),
    }
}

fn show_chart(runs: &[(Variant, EnergyTable)]) -> io::Result<()> {
    let mut guard = TerminalGuard::init()?;
    let mut app = App::new(
        runs.iter()
            .map(|(variant, table)| VariantView::new(variant, table))
            .collect(),
    );

    loop {
        guard.terminal().draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Right | KeyCode::Tab => app.next(),
                    KeyCode::Left | KeyCode::BackTab => app.previous(),
                    _ => continue,
                },
                _ => continue,
            }
        }
    }
    Ok(())
}
