//! Flatten Jobs Common Library
//!
//! スクレイピングした応募履歴（LinkedIn Applied Jobs）の行グルーピングと振り分け

pub mod types;
pub mod error;
pub mod grouper;
pub mod router;
pub mod pipeline;
pub mod export;

pub use types::{ColumnMapping, Destination, JobRecord, Row};
pub use error::{Error, Result};
pub use grouper::{RecordGrouper, UPDATE_MARKER};
pub use router::{classify, Placement, RecordRouter};
pub use pipeline::{flatten, FlattenStats};
pub use export::SheetWriter;
#[cfg(feature = "excel")]
pub use export::excel_core::WorkbookWriter;
