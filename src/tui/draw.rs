use crate::analysis::series::Series;
use crate::tui::app::{App, VariantView};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Padding, Row, Table, Tabs};

const PALETTE: [Color; 6] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightRed,
    Color::LightBlue,
];
const BAR_GAP: u16 = 1;
const GROUP_GAP: u16 = 3;
const MAX_BAR_WIDTH: u16 = 9;

fn series_color(i: usize) -> Color {
    PALETTE[i % PALETTE.len()]
}

pub fn draw_app(frame: &mut Frame, app: &App) {
    let Some(view) = app.current() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length((view.series().len() + 3) as u16),
        ])
        .split(frame.area());

    frame.render_widget(build_header(view), chunks[0]);
    frame.render_widget(build_tabs(app), chunks[1]);
    frame.render_widget(build_chart(view, chunks[2]), chunks[2]);
    frame.render_widget(build_legend(view), chunks[3]);
    frame.render_widget(build_series_table(view), chunks[4]);
}

fn build_header(view: &'_ VariantView) -> Block<'_> {
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Lifecycle Energy ")
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw("·").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(format!(" {} ", view.title())).style(Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("·").style(Style::default().add_modifier(Modifier::DIM)),
            Span::raw(" q quit, ←/→ switch ").style(Style::default().add_modifier(Modifier::DIM)),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_tabs(app: &'_ App) -> Tabs<'_> {
    Tabs::new(app.views().iter().map(|v| v.name().to_string()))
        .select(app.selected())
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::BOTTOM))
}

/// Widest bar that still fits every stage group into `area`.
fn bar_width(area: Rect, groups: usize, bars: usize) -> u16 {
    if groups == 0 || bars == 0 {
        return 1;
    }
    let inner = area.width.saturating_sub(2) as usize;
    let per_group = (inner / groups).saturating_sub(GROUP_GAP as usize);
    let per_bar = per_group.saturating_sub((bars - 1) * BAR_GAP as usize) / bars;
    (per_bar as u16).clamp(1, MAX_BAR_WIDTH)
}

fn build_chart<'a>(view: &'a VariantView, area: Rect) -> BarChart<'a> {
    let series = view.series();
    let mut chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Line::from(vec![
                    Span::from(" Energy Consumption (Joules) ").style(Style::default().add_modifier(Modifier::BOLD)),
                ]))
                .title_bottom(Line::from(" Lifecycle Stage ").centered())
                .padding(Padding::horizontal(1)),
        )
        .bar_width(bar_width(area, view.stages().len(), series.len()))
        .bar_gap(BAR_GAP)
        .group_gap(GROUP_GAP);

    for (s_id, stage) in view.stages().iter().enumerate() {
        let bars = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let joules = s.values().get(s_id).copied().unwrap_or(0.0);
                Bar::default()
                    .value(joules.round() as u64)
                    .text_value(format!("{:.0}", joules))
                    .style(Style::default().fg(series_color(i)))
                    .value_style(Style::default().fg(Color::Black).bg(series_color(i)))
            })
            .collect::<Vec<_>>();
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(stage.as_str()))
                .bars(&bars),
        );
    }
    chart
}

fn build_legend(view: &'_ VariantView) -> Line<'_> {
    Line::from(
        view.series()
            .iter()
            .enumerate()
            .flat_map(|(i, s)| {
                [
                    Span::raw(" ■ ").style(Style::default().fg(series_color(i))),
                    Span::raw(s.label()),
                ]
            })
            .collect::<Vec<_>>(),
    )
    .centered()
}

fn build_series_table(view: &'_ VariantView) -> Table<'_> {
    let stage_cnt = view.stages().len();
    let mut widths = vec![Constraint::Length(28)];
    widths.extend((0..=stage_cnt).map(|_| Constraint::Length(14)));

    let header = std::iter::once(Cell::from("Series"))
        .chain(view.stages().iter().map(|s| Cell::from(format!("{:>13}", s))))
        .chain(std::iter::once(Cell::from(format!("{:>13}", "Total"))))
        .collect::<Vec<_>>();

    Table::new(
        view.series().iter().enumerate().map(|(i, s)| series_row(i, s)),
        widths,
    )
    .header(Row::new(header).style(Style::default().bg(Color::DarkGray).fg(White)))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Stage totals (J) ").style(Style::default().add_modifier(Modifier::BOLD)),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn series_row(i: usize, series: &Series) -> Row<'_> {
    let total = series.values().iter().sum::<f64>();
    let cells = std::iter::once(
        Cell::from(series.label()).style(Style::default().fg(series_color(i))),
    )
    .chain(series.values().iter().map(|v| Cell::from(format!("{:>13.2}", v))))
    .chain(std::iter::once(
        Cell::from(format!("{:>13.2}", total)).style(Style::default().add_modifier(Modifier::BOLD)),
    ))
    .collect::<Vec<_>>();
    Row::new(cells)
}
