pub mod attendance;
pub mod member;
pub mod month_record;
pub mod period;
pub mod queue;

pub use attendance::{AttendanceStatus, StreakKind};
pub use member::Member;
pub use month_record::{MonthRecord, RawPeriod, RawRow};
pub use period::Period;
pub use queue::QueueEntry;
