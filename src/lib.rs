// Library surface for the cli binary and integration tests.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod app_dirs;
pub mod corpus;
pub mod metrics;
pub mod results;
pub mod session;
