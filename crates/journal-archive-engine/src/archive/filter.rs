use serde::Serialize;

use crate::models::VolumeGroup;

/// Which volume groups to display. Both filters are optional and independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArchiveFilter {
    pub year: Option<i32>,
    pub volume: Option<u32>,
}

impl ArchiveFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_year(self, year: Option<i32>) -> Self {
        Self { year, ..self }
    }

    pub fn with_volume(self, volume: Option<u32>) -> Self {
        Self { volume, ..self }
    }

    pub fn is_active(&self) -> bool {
        self.year.is_some() || self.volume.is_some()
    }

    pub fn matches(&self, group: &VolumeGroup) -> bool {
        self.year.is_none_or(|year| group.year == year)
            && self.volume.is_none_or(|volume| group.volume_number == volume)
    }
}
