//! Day-indexed calendar aggregation.
//!
//! Plain items and the expanded occurrences of recurring items are grouped
//! into one entry list per day of a window.

pub mod bucket;
pub mod error;
pub mod view;

pub use bucket::{
    BucketOptions, CalendarDay, CalendarEntry, CalendarRange, CalendarView, bucket_by_day,
};
pub use error::{CalendarError, CalendarResult};
pub use view::ViewKind;
