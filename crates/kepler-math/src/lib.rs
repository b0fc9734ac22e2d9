//! Kepler orbit math: the fixed-iteration equation solver, focus-centered
//! positions, and the swept-area sectors of Kepler's second law.

mod error;
mod orbit;
mod position;
mod sector;
mod solver;

pub use error::OrbitError;
pub use orbit::{Eccentricity, MAX_ECCENTRICITY, ORBITAL_PERIOD, Orbit, SEMI_MAJOR_AXIS};
pub use position::OrbitPosition;
pub use sector::{ARC_SAMPLES, Sector, generate_sectors};
pub use solver::{KEPLER_ITERATIONS, solve_kepler};
