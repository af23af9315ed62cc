use comfy_table::{Cell, Color};

use crate::board::{PanelTitle, ResultBoard, ResultPanel};
use crate::output::format::{
    RenderOptions, create_styled_table, format_average, format_date, header_cell, right_cell,
    visible_days,
};

fn table_title(title: &PanelTitle) -> String {
    match title {
        PanelTitle::Sensor(meta) => format!(
            "Sensor {}  ({} to {})",
            meta.sensor, meta.date_from, meta.date_to
        ),
        PanelTitle::File(stem) => format!("File {stem}"),
    }
}

pub(crate) fn render_table(panel: &ResultPanel, opts: &RenderOptions) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![header_cell("Date", c), header_cell("Avg °F", c)]);

    let (days, hidden) = visible_days(&panel.averages, opts);
    for day in days {
        table.add_row(vec![
            Cell::new(format_date(day)),
            right_cell(&format_average(day.average)),
        ]);
    }
    if hidden > 0 {
        let mut more = Cell::new(format!("... {hidden} more"));
        if c {
            more = more.fg(Color::DarkGrey);
        }
        table.add_row(vec![more, Cell::new("")]);
    }

    let title = if c {
        format!("\x1b[1m{}\x1b[0m", table_title(&panel.title))
    } else {
        table_title(&panel.title)
    };
    format!("{title}\n{table}")
}

pub(crate) fn print_tables(board: &ResultBoard, opts: &RenderOptions) {
    for (i, panel) in board.panels().iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render_table(panel, opts));
    }
}
