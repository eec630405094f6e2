//! Sheet writers shared by the CLI and tests.

pub mod sheet;

#[cfg(feature = "excel")]
pub mod excel_core;

pub use sheet::SheetWriter;
