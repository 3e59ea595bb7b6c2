//! Readiness scoring and advisory composition for applicants weighing a move
//! away from salaried employment.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
