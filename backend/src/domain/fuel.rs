//! Fuel estimation for crewed trips to a catalogued exoplanet.
//!
//! Gravity is a coarse surface estimate: gas giants use a fixed mass of 0.5
//! Earth masses, terrestrial planets their recorded mass. Fuel scales with
//! distance and crew, and inversely with the square of gravity.

use std::num::NonZeroU64;

use super::{Exoplanet, ExoplanetKind};

/// Effective mass assumed for every gas giant, in Earth masses.
pub const GAS_GIANT_EFFECTIVE_MASS: f64 = 0.5;

/// Error returned when a crew capacity is not a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("crew capacity must be a positive integer")]
pub struct InvalidCrewCapacity;

/// Number of crew members on a trip. Always at least one.
///
/// # Examples
/// ```
/// use exoplanet_backend::domain::CrewCapacity;
///
/// assert_eq!(CrewCapacity::new(10).map(CrewCapacity::get), Ok(10));
/// assert!(CrewCapacity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrewCapacity(NonZeroU64);

impl CrewCapacity {
    pub fn new(value: u64) -> Result<Self, InvalidCrewCapacity> {
        NonZeroU64::new(value).map(Self).ok_or(InvalidCrewCapacity)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

/// Surface gravity relative to Earth.
pub fn surface_gravity(planet: &Exoplanet) -> f64 {
    let radius = planet.radius();
    match planet.kind() {
        ExoplanetKind::GasGiant => GAS_GIANT_EFFECTIVE_MASS / (radius * radius),
        ExoplanetKind::Terrestrial => planet.mass() / (radius * radius),
    }
}

/// Fuel units needed to reach `planet` with `crew` aboard.
///
/// # Examples
/// ```
/// use exoplanet_backend::domain::{
///     CrewCapacity, Exoplanet, ExoplanetDraft, ExoplanetId, estimate_fuel,
/// };
///
/// let planet = Exoplanet::new(
///     ExoplanetId::random(),
///     ExoplanetDraft {
///         name: "Rocky".to_owned(),
///         description: String::new(),
///         distance: 300,
///         radius: 2.0,
///         mass: 4.0,
///         kind: "Terrestrial".to_owned(),
///     },
/// )
/// .expect("valid draft");
/// let crew = CrewCapacity::new(10).expect("positive crew");
/// assert_eq!(estimate_fuel(&planet, crew), 3000.0);
/// ```
pub fn estimate_fuel(planet: &Exoplanet, crew: CrewCapacity) -> f64 {
    let gravity = surface_gravity(planet);
    // Crews beyond 2^53 round to the nearest representable f64.
    let crew = crew.get() as f64;
    f64::from(planet.distance()) / (gravity * gravity) * crew
}
