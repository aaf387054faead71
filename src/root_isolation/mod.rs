// common helpers
pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;

// algorithms
pub mod descartes;
pub mod bernstein;

pub use bernstein::bernstein_root_isolation;
pub use config::{BernsteinCfg, DescartesCfg, Unresolved};
pub use descartes::{descartes_root_isolation, upper_bound_roots, AcceptPolicy, DefaultAccept};
pub use errors::IsolationError;
pub use report::{IsolationReport, Termination};
