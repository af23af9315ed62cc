//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigFormat, ConfigSortOrder};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// Oldest first (default)
    #[default]
    Asc,
    /// Newest first
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum OutputFormat {
    /// One text panel per sensor file (default)
    #[default]
    Text,
    /// Tab-separated date/average lines, as copied to the clipboard
    Copy,
    /// One table per sensor file
    Table,
    /// JSON array of panels
    Json,
}

#[derive(Parser)]
#[command(name = "tempify")]
#[command(about = "Daily average temperatures from MOCREO sensor CSV exports", version)]
pub(crate) struct Cli {
    /// CSV files, directories or glob patterns
    #[arg(required = true, value_name = "INPUTS")]
    pub(crate) inputs: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub(crate) format: OutputFormat,

    /// Output as JSON (shorthand for --format=json)
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Filter from date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long)]
    pub(crate) since: Option<String>,

    /// Filter until date (YYYYMMDD or YYYY-MM-DD)
    #[arg(short, long)]
    pub(crate) until: Option<String>,

    /// Sort order for days within a panel
    #[arg(short, long, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Compact output (limit each panel to its display height)
    #[arg(short = 'c', long)]
    pub(crate) compact: bool,

    /// Use the expanded panel height with --compact
    #[arg(long)]
    pub(crate) expand: bool,

    /// Also show files whose name does not follow the MOCREO convention
    #[arg(long)]
    pub(crate) include_unmatched: bool,

    /// Dismiss panels for this sensor (repeatable)
    #[arg(long, value_name = "SENSOR")]
    pub(crate) exclude_sensor: Vec<String>,

    /// Enable debug output (show processing details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.compact && config.compact {
            self.compact = true;
        }
        if !self.expand && config.expand {
            self.expand = true;
        }
        if !self.include_unmatched && config.include_unmatched {
            self.include_unmatched = true;
        }

        // For enum values, apply config only if CLI is at default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }

        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        if let Some(format) = config.format
            && self.format == OutputFormat::Text
            && !self.json
        {
            self.format = match format {
                ConfigFormat::Text => OutputFormat::Text,
                ConfigFormat::Copy => OutputFormat::Copy,
                ConfigFormat::Table => OutputFormat::Table,
                ConfigFormat::Json => OutputFormat::Json,
            };
        }

        // Lists accumulate
        for sensor in &config.exclude_sensors {
            if !self.exclude_sensor.contains(sensor) {
                self.exclude_sensor.push(sensor.clone());
            }
        }

        self
    }

    pub(crate) fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
