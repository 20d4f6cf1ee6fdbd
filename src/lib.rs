// The binary entry point is main.rs; the library exposes the module tree so
// integration tests and benchmarks can drive sessions without a terminal.
pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod session;
pub mod ui;
