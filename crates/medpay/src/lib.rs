//! Statutory mediation fee calculations under the Turkish 2025 tariff.
//!
//! Three stateless calculators over immutable configuration tables:
//! fee assessment ([`tariff`]), freelance receipt breakdown ([`receipt`])
//! and statutory deadline scheduling ([`deadline`]). All computation is
//! synchronous and pure; input validation belongs to the calling shell.

pub mod config;
pub mod deadline;
pub mod receipt;
pub mod tariff;
pub mod telemetry;

pub use tariff::{
    DisputeCategory, FeeAssessment, FeeBasis, FeeRequest, TariffEngine, TariffSchedule,
};
