//! Result of a calibration pass.

use bevy_ecs::prelude::*;
use serde::Serialize;
use std::fmt;

/// Counts reported by one calibration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CalibrationSummary {
    /// Nodes whose stored order actually changed.
    pub calibrated: usize,
    /// Nodes left alone because their order is reserved.
    pub skipped: usize,
    /// Sprite-carrying nodes considered by the pass.
    pub total: usize,
    /// Degenerate sprites deleted by cleanup.
    pub removed: usize,
    /// Degenerate sprites cleanup could not delete.
    pub failed_removals: usize,
    /// Sprite-carrying nodes owned by the dynamic sorter.
    pub excluded: usize,
}

impl fmt::Display for CalibrationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "calibrated {} / total {} (skipped {} reserved, removed {} degenerate)",
            self.calibrated, self.total, self.skipped, self.removed
        )?;
        if self.failed_removals > 0 {
            write!(f, ", {} removals failed", self.failed_removals)?;
        }
        Ok(())
    }
}

/// Summary of the most recent pass run inside the world.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastCalibration(pub CalibrationSummary);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let summary = CalibrationSummary {
            calibrated: 3,
            skipped: 1,
            total: 5,
            removed: 2,
            ..Default::default()
        };
        assert_eq!(
            summary.to_string(),
            "calibrated 3 / total 5 (skipped 1 reserved, removed 2 degenerate)"
        );
    }

    #[test]
    fn test_display_mentions_failures() {
        let summary = CalibrationSummary {
            failed_removals: 1,
            ..Default::default()
        };
        assert!(summary.to_string().ends_with(", 1 removals failed"));
    }

    #[test]
    fn test_serialized_fields() {
        let summary = CalibrationSummary {
            calibrated: 4,
            skipped: 2,
            total: 7,
            excluded: 1,
            ..Default::default()
        };
        let value: serde_json::Value = serde_json::to_value(summary).unwrap();
        assert_eq!(value["calibrated"], 4);
        assert_eq!(value["skipped"], 2);
        assert_eq!(value["total"], 7);
        assert_eq!(value["removed"], 0);
        assert_eq!(value["failed_removals"], 0);
        assert_eq!(value["excluded"], 1);

        let json = serde_json::to_string_pretty(&summary).unwrap();
        assert!(json.contains("\"calibrated\": 4"));
    }
}
