//! Exoplanet catalogue records.
//!
//! An [`Exoplanet`] can only be built from an [`ExoplanetDraft`] that passes
//! the range rules in [`validation`], so every value held by the service or
//! returned by a repository satisfies them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod validation;

pub use validation::{
    DISTANCE_RANGE_LIGHT_YEARS, MASS_RANGE_EARTH_MASSES, RADIUS_RANGE_EARTH_RADII,
};

/// Validation failures for exoplanet drafts.
///
/// The `Display` text is returned verbatim to API clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExoplanetValidationError {
    #[error("distance out of range")]
    DistanceOutOfRange,
    #[error("radius out of range")]
    RadiusOutOfRange,
    #[error("mass out of range")]
    MassOutOfRange,
    #[error("invalid type")]
    InvalidType,
}

/// Error returned when an exoplanet identifier is not a UUID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("exoplanet id must be a valid UUID (got {value:?})")]
pub struct ParseExoplanetIdError {
    value: String,
}

/// Server-assigned exoplanet identifier.
///
/// # Examples
/// ```
/// use exoplanet_backend::domain::ExoplanetId;
///
/// let id = ExoplanetId::new("6f1c1c52-3f0e-4d55-9d64-2d4c0c2b7e1a").expect("valid id");
/// assert_eq!(id.to_string(), "6f1c1c52-3f0e-4d55-9d64-2d4c0c2b7e1a");
/// assert!(ExoplanetId::new("kepler-22b").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExoplanetId(Uuid);

impl ExoplanetId {
    /// Parse an identifier from its textual form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, ParseExoplanetIdError> {
        let id = id.as_ref();
        Uuid::parse_str(id)
            .map(Self)
            .map_err(|_| ParseExoplanetIdError {
                value: id.to_owned(),
            })
    }

    /// Generate a fresh random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExoplanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExoplanetId {
    type Err = ParseExoplanetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ExoplanetId {
    type Error = ParseExoplanetIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ExoplanetId> for String {
    fn from(value: ExoplanetId) -> Self {
        value.to_string()
    }
}

/// Planet classification driving the gravity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExoplanetKind {
    GasGiant,
    Terrestrial,
}

impl ExoplanetKind {
    /// Wire and storage spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GasGiant => "GasGiant",
            Self::Terrestrial => "Terrestrial",
        }
    }
}

impl fmt::Display for ExoplanetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExoplanetKind {
    type Err = ExoplanetValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "GasGiant" => Ok(Self::GasGiant),
            "Terrestrial" => Ok(Self::Terrestrial),
            _ => Err(ExoplanetValidationError::InvalidType),
        }
    }
}

/// Caller-supplied exoplanet fields awaiting validation.
///
/// `kind` stays textual so an unknown classification surfaces as a validation
/// failure, after the distance and radius checks.
#[derive(Debug, Clone, PartialEq)]
pub struct ExoplanetDraft {
    pub name: String,
    pub description: String,
    pub distance: i64,
    pub radius: f64,
    pub mass: f64,
    pub kind: String,
}

/// Validated exoplanet record.
#[derive(Debug, Clone, PartialEq)]
pub struct Exoplanet {
    id: ExoplanetId,
    name: String,
    description: String,
    distance: i32,
    radius: f64,
    mass: f64,
    kind: ExoplanetKind,
}

impl Exoplanet {
    /// Validate a draft and attach its identifier.
    ///
    /// # Examples
    /// ```
    /// use exoplanet_backend::domain::{Exoplanet, ExoplanetDraft, ExoplanetId, ExoplanetKind};
    ///
    /// let planet = Exoplanet::new(
    ///     ExoplanetId::random(),
    ///     ExoplanetDraft {
    ///         name: "Kepler-22b".to_owned(),
    ///         description: "Habitable-zone candidate".to_owned(),
    ///         distance: 620,
    ///         radius: 2.4,
    ///         mass: 9.1,
    ///         kind: "Terrestrial".to_owned(),
    ///     },
    /// )
    /// .expect("valid draft");
    /// assert_eq!(planet.kind(), ExoplanetKind::Terrestrial);
    /// ```
    pub fn new(id: ExoplanetId, draft: ExoplanetDraft) -> Result<Self, ExoplanetValidationError> {
        let (distance, kind) = validation::validate_draft(&draft)?;
        Ok(Self {
            id,
            name: draft.name,
            description: draft.description,
            distance,
            radius: draft.radius,
            mass: draft.mass,
            kind,
        })
    }

    pub fn id(&self) -> ExoplanetId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Distance from the reference point in light-years.
    pub fn distance(&self) -> i32 {
        self.distance
    }

    /// Radius in Earth radii.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Mass in Earth masses. Zero when a gas giant was stored without one.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn kind(&self) -> ExoplanetKind {
        self.kind
    }
}
