//! Latest-sample selection over an unordered statistics series.

use crate::error::{ExporterError, Result};
use crate::model::SendDataPoint;

/// Return the point with the greatest timestamp.
///
/// SES does not order the series. This is a single scan over a borrowed
/// slice, so callers keep their data untouched. When several points share the
/// maximum timestamp any one of them may be returned.
pub fn select_latest(points: &[SendDataPoint]) -> Result<&SendDataPoint> {
    points
        .iter()
        .max_by_key(|p| p.timestamp)
        .ok_or(ExporterError::EmptySeries)
}
