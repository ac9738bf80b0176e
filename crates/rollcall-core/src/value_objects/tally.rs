//! Status tally - per-status counts over a set of attendance snapshots

use serde::{Deserialize, Serialize};

use crate::entities::AttendanceSnapshot;
use crate::value_objects::AttendanceStatus;

/// Per-status counts for one archive entry
///
/// A pure aggregate over the entry's current snapshot children. Legacy
/// status aliases are already normalized at parse time, so counting is
/// a plain enum match. Zero snapshots yields the all-zero tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusTally {
    pub present: usize,
    pub excused: usize,
    pub sick: usize,
    pub unexcused: usize,
}

impl StatusTally {
    /// Count snapshots by status
    pub fn count(snapshots: &[AttendanceSnapshot]) -> Self {
        let mut tally = Self::default();
        for snapshot in snapshots {
            tally.add(snapshot.status);
        }
        tally
    }

    /// Record one occurrence of a status
    pub fn add(&mut self, status: AttendanceStatus) {
        match status {
            AttendanceStatus::Present => self.present += 1,
            AttendanceStatus::Excused => self.excused += 1,
            AttendanceStatus::Sick => self.sick += 1,
            AttendanceStatus::Unexcused => self.unexcused += 1,
        }
    }

    /// Total number of counted snapshots
    pub fn total(&self) -> usize {
        self.present + self.excused + self.sick + self.unexcused
    }
}
