//! command line surfaces for locomotive route analytics: CSV ingestion,
//! run configuration, the per-depot analysis runner and its reports.
pub mod analysis;
pub mod app;
pub mod config;
pub mod ingest;
pub mod report;
