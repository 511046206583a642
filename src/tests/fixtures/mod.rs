// Shared test fixtures. Compiled only for tests.

pub mod app;
pub mod projects;
pub mod tasks;

/// Reference "now" used across fixtures: 2023-11-14T22:13:20Z.
pub const FIXED_NOW: i64 = 1_700_000_000_000;
pub const ONE_DAY: i64 = 24 * 60 * 60 * 1_000;
