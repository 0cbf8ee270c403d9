//! Provisioning driver.
//!
//! - [`config`] - Settings for a run
//! - [`driver`] - The [`Provisioner`] that sequences compilation and tool checks

pub mod config;
pub mod driver;

pub use config::ProvisionConfig;
pub use driver::{inspect, ArtifactStatus, ProvisionReport, Provisioner, StatusReport};
