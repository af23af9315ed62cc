//! Text panels - the per-file result block
//!
//! ```text
//! Sensor = A1    Dates = 01/02/2023 to 03/04/2023
//! 2024-01-01    72.0
//! 2024-01-02    70.4
//! ```

use crate::board::{PanelTitle, ResultBoard, ResultPanel};
use crate::consts::PANEL_GAP;
use crate::output::format::{RenderOptions, format_average, format_date, visible_days};

fn header_line(title: &PanelTitle, use_color: bool) -> String {
    match title {
        PanelTitle::Sensor(meta) => {
            let name = if use_color {
                format!("\x1b[1m{}\x1b[0m", meta.sensor)
            } else {
                meta.sensor.clone()
            };
            format!(
                "Sensor = {name}{PANEL_GAP}Dates = {} to {}",
                meta.date_from, meta.date_to
            )
        }
        PanelTitle::File(stem) => format!("File = {stem}"),
    }
}

/// The panel text exactly as copied: header, then one line per day, ascending
pub(crate) fn format_panel(panel: &ResultPanel) -> String {
    render_panel(panel, &RenderOptions::default())
}

/// Header, then up to `max_days` day lines and a `... N more` marker
pub(crate) fn render_panel(panel: &ResultPanel, opts: &RenderOptions) -> String {
    let (days, hidden) = visible_days(&panel.averages, opts);
    let mut lines = Vec::with_capacity(days.len() + 2);
    lines.push(header_line(&panel.title, opts.use_color));
    for day in days {
        lines.push(format!(
            "{}{PANEL_GAP}{}",
            format_date(day),
            format_average(day.average)
        ));
    }
    if hidden > 0 {
        lines.push(format!("... {hidden} more"));
    }
    lines.join("\n")
}

pub(crate) fn print_panels(board: &ResultBoard, opts: &RenderOptions) {
    let rendered: Vec<String> = board
        .panels()
        .iter()
        .map(|panel| render_panel(panel, opts))
        .collect();
    println!("{}", rendered.join("\n\n"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SortOrder;
    use crate::core::{DailyAverage, SensorMetadata};
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn panel(days: &[(u32, f64)]) -> ResultPanel {
        ResultPanel {
            id: 0,
            source: PathBuf::from("x.csv"),
            title: PanelTitle::Sensor(SensorMetadata {
                sensor: "A1".into(),
                date_from: "01/02/2023".into(),
                date_to: "03/04/2023".into(),
            }),
            averages: days
                .iter()
                .map(|&(d, average)| DailyAverage {
                    date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
                    average,
                })
                .collect(),
        }
    }

    #[test]
    fn format_panel_is_byte_exact() {
        let p = panel(&[(1, 72.0), (2, 70.4)]);
        assert_eq!(
            format_panel(&p),
            "Sensor = A1    Dates = 01/02/2023 to 03/04/2023\n\
             2024-01-01    72.0\n\
             2024-01-02    70.4"
        );
    }

    #[test]
    fn empty_series_is_header_only() {
        assert_eq!(
            format_panel(&panel(&[])),
            "Sensor = A1    Dates = 01/02/2023 to 03/04/2023"
        );
    }

    #[test]
    fn unmatched_file_header() {
        let mut p = panel(&[(1, 60.0)]);
        p.title = PanelTitle::File("random_file_name".into());
        assert_eq!(format_panel(&p), "File = random_file_name\n2024-01-01    60.0");
    }

    #[test]
    fn color_bolds_sensor_name_only() {
        let opts = RenderOptions {
            use_color: true,
            ..RenderOptions::default()
        };
        let out = render_panel(&panel(&[]), &opts);
        assert_eq!(
            out,
            "Sensor = \x1b[1mA1\x1b[0m    Dates = 01/02/2023 to 03/04/2023"
        );
    }

    #[test]
    fn desc_order_reverses_days() {
        let opts = RenderOptions {
            order: SortOrder::Desc,
            ..RenderOptions::default()
        };
        let out = render_panel(&panel(&[(1, 1.0), (2, 2.0)]), &opts);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[1], "2024-01-02    2.0");
        assert_eq!(lines[2], "2024-01-01    1.0");
    }

    #[test]
    fn max_days_excludes_header_from_count() {
        let opts = RenderOptions {
            max_days: Some(3),
            ..RenderOptions::default()
        };
        let out = render_panel(&panel(&[(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)]), &opts);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "2024-01-03    3.0");
        assert_eq!(lines[4], "... 1 more");
    }

    #[test]
    fn max_days_not_reached_leaves_panel_alone() {
        let opts = RenderOptions {
            max_days: Some(1),
            ..RenderOptions::default()
        };
        let p = panel(&[(1, 1.0)]);
        assert_eq!(render_panel(&p, &opts), format_panel(&p));
    }
}
