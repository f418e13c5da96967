//! Schedule assembly for role and station modes.
//!
//! Both schedulers walk the expanded calendar period by period, replace special
//! dates with a single override row, and otherwise fill each duty from the
//! availability index, ranked by the shared usage counters.

mod role;
mod rows;
mod state;
mod station;

pub use role::RoleScheduler;
pub use rows::{Schedule, ScheduleRow, Seat, UnfilledReason};
pub use state::{Phase, SchedulerContext};
pub use station::StationScheduler;
