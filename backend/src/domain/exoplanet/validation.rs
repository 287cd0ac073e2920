//! Range rules shared by exoplanet creation and replacement.

use std::ops::RangeInclusive;

use super::{ExoplanetDraft, ExoplanetKind, ExoplanetValidationError};

/// Accepted distance from the reference point, in light-years.
pub const DISTANCE_RANGE_LIGHT_YEARS: RangeInclusive<i64> = 10..=1000;
/// Accepted radius, in Earth radii.
pub const RADIUS_RANGE_EARTH_RADII: RangeInclusive<f64> = 0.1..=10.0;
/// Accepted mass for terrestrial planets, in Earth masses.
pub const MASS_RANGE_EARTH_MASSES: RangeInclusive<f64> = 0.1..=10.0;

/// Check a draft in rule order: distance, radius, then mass or type.
///
/// Returns the narrowed distance and the parsed kind. Gas giant mass is not
/// checked.
pub(super) fn validate_draft(
    draft: &ExoplanetDraft,
) -> Result<(i32, ExoplanetKind), ExoplanetValidationError> {
    if !DISTANCE_RANGE_LIGHT_YEARS.contains(&draft.distance) {
        return Err(ExoplanetValidationError::DistanceOutOfRange);
    }
    let distance = i32::try_from(draft.distance)
        .map_err(|_| ExoplanetValidationError::DistanceOutOfRange)?;

    if !RADIUS_RANGE_EARTH_RADII.contains(&draft.radius) {
        return Err(ExoplanetValidationError::RadiusOutOfRange);
    }

    let kind = draft.kind.parse::<ExoplanetKind>()?;
    if kind == ExoplanetKind::Terrestrial && !MASS_RANGE_EARTH_MASSES.contains(&draft.mass) {
        return Err(ExoplanetValidationError::MassOutOfRange);
    }

    Ok((distance, kind))
}
