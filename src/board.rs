//! Result board - the ordered collection of displayed result panels
//!
//! The shell owns the board; the pipeline never touches it. Every
//! operation consumes the board and hands back the updated one.

use std::path::PathBuf;

use crate::core::{DailyAverage, SensorMetadata};

pub(crate) const COLLAPSED_HEIGHT: usize = 3;
pub(crate) const EXPANDED_HEIGHT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PanelTitle {
    Sensor(SensorMetadata),
    /// File name did not follow the naming convention
    File(String),
}

#[derive(Debug, Clone)]
pub(crate) struct ResultPanel {
    pub(crate) id: usize,
    pub(crate) source: PathBuf,
    pub(crate) title: PanelTitle,
    pub(crate) averages: Vec<DailyAverage>,
}

impl ResultPanel {
    pub(crate) fn sensor(&self) -> Option<&str> {
        match &self.title {
            PanelTitle::Sensor(meta) => Some(&meta.sensor),
            PanelTitle::File(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ResultBoard {
    panels: Vec<ResultPanel>,
    next_id: usize,
    expanded: bool,
}

impl ResultBoard {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn panels(&self) -> &[ResultPanel] {
        &self.panels
    }

    pub(crate) fn len(&self) -> usize {
        self.panels.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub(crate) fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Lines of text each panel shows at once
    pub(crate) fn panel_height(&self) -> usize {
        if self.expanded {
            EXPANDED_HEIGHT
        } else {
            COLLAPSED_HEIGHT
        }
    }

    /// Append a panel; ids are never reused within one board
    pub(crate) fn add(
        mut self,
        source: PathBuf,
        title: PanelTitle,
        averages: Vec<DailyAverage>,
    ) -> Self {
        let id = self.next_id;
        self.next_id += 1;
        self.panels.push(ResultPanel {
            id,
            source,
            title,
            averages,
        });
        self
    }

    pub(crate) fn remove(mut self, id: usize) -> Self {
        self.panels.retain(|p| p.id != id);
        self
    }

    /// Dismiss every panel for the given sensor token
    pub(crate) fn remove_sensor(self, sensor: &str) -> Self {
        let ids: Vec<usize> = self
            .panels
            .iter()
            .filter(|p| p.sensor() == Some(sensor))
            .map(|p| p.id)
            .collect();
        ids.into_iter().fold(self, |board, id| board.remove(id))
    }

    #[cfg(test)]
    pub(crate) fn clear(mut self) -> Self {
        self.panels.clear();
        self
    }

    pub(crate) fn toggle_expansion(mut self) -> Self {
        self.expanded = !self.expanded;
        self
    }
}
