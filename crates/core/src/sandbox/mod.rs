pub mod executor;
pub mod harness;
pub mod probe;

pub use executor::SandboxExecutor;
pub use probe::ProbeReport;
