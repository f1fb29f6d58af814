//! Query modules over a loaded price dataset.
//!
//! Each query struct borrows a `&[PriceRecord]` slice and exposes methods
//! returning plain values or `Result<T>`.

pub mod records;
pub mod summary;

pub use records::RecordQuery;
pub use summary::SummaryQuery;
