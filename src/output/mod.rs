mod clipboard;
mod format;
mod json;
mod panel;
mod table;

pub(crate) use clipboard::print_clipboard;
pub(crate) use format::RenderOptions;
pub(crate) use json::output_panels_json;
pub(crate) use panel::print_panels;
pub(crate) use table::print_tables;
