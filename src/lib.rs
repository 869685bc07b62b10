//! Workspace-level integration tests for ScaleCalc-rs.
//!
//! This package only hosts the cross-crate tests under `tests/`; the
//! library target is intentionally empty.
