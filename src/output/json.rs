use serde::Serialize;

use crate::board::{PanelTitle, ResultBoard, ResultPanel};
use crate::core::DailyAverage;
use crate::output::format::{RenderOptions, ordered};

#[derive(Debug, Serialize)]
struct PanelJson<'a> {
    file: String,
    sensor: Option<&'a str>,
    date_from: Option<&'a str>,
    date_to: Option<&'a str>,
    days: Vec<&'a DailyAverage>,
}

fn panel_json<'a>(panel: &'a ResultPanel, opts: &RenderOptions) -> PanelJson<'a> {
    let meta = match &panel.title {
        PanelTitle::Sensor(meta) => Some(meta),
        PanelTitle::File(_) => None,
    };
    PanelJson {
        file: panel.source.display().to_string(),
        sensor: meta.map(|m| m.sensor.as_str()),
        date_from: meta.map(|m| m.date_from.as_str()),
        date_to: meta.map(|m| m.date_to.as_str()),
        days: ordered(&panel.averages, opts.order),
    }
}

pub(crate) fn output_panels_json(
    board: &ResultBoard,
    opts: &RenderOptions,
) -> Result<String, serde_json::Error> {
    let output: Vec<PanelJson<'_>> = board
        .panels()
        .iter()
        .map(|panel| panel_json(panel, opts))
        .collect();
    serde_json::to_string_pretty(&output)
}
