pub mod colors;
pub mod formatting;
pub mod table;

pub use formatting::describe_status;
pub use formatting::pct;
