//! # scalecalc-cli
//!
//! Speedup tables, JSON export, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::{CurveExport, Export, LawExport};
pub use presenter::TablePresenter;
