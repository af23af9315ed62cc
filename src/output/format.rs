use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::cli::SortOrder;
use crate::consts::DATE_FORMAT;
use crate::core::DailyAverage;

/// Rendering switches shared by all output formats
#[derive(Debug, Clone, Copy)]
pub(crate) struct RenderOptions {
    pub(crate) order: SortOrder,
    pub(crate) use_color: bool,
    /// Show at most this many day rows per panel (header excluded)
    pub(crate) max_days: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            order: SortOrder::Asc,
            use_color: false,
            max_days: None,
        }
    }
}

pub(super) fn format_date(day: &DailyAverage) -> String {
    day.date.format(DATE_FORMAT).to_string()
}

pub(super) fn format_average(value: f64) -> String {
    format!("{value:.1}")
}

/// Days in display order; the pipeline always hands them over ascending
pub(super) fn ordered(averages: &[DailyAverage], order: SortOrder) -> Vec<&DailyAverage> {
    match order {
        SortOrder::Asc => averages.iter().collect(),
        SortOrder::Desc => averages.iter().rev().collect(),
    }
}

/// Days in display order, cut to `max_days`, plus how many were hidden
pub(super) fn visible_days<'a>(
    averages: &'a [DailyAverage],
    opts: &RenderOptions,
) -> (Vec<&'a DailyAverage>, usize) {
    let mut days = ordered(averages, opts.order);
    let hidden = match opts.max_days {
        Some(max) if days.len() > max => {
            let hidden = days.len() - max;
            days.truncate(max);
            hidden
        }
        _ => 0,
    };
    (days, hidden)
}

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}
