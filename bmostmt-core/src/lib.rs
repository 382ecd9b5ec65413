//! bmostmt-core: BMO statement layouts and the text-to-transaction pipeline.

pub mod amounts;
pub mod dates;
pub mod layout;
pub mod pipeline;
pub mod row_id;
pub mod types;

pub use layout::{AmountRule, Layout, builtin_layouts};
pub use pipeline::ParseReport;
pub use row_id::row_id;
pub use types::TransactionRow;
