pub mod record;
pub mod snapshot;

pub use record::AttendanceRecord;
pub use snapshot::Snapshot;
