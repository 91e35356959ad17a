mod guid;
mod timespan;
mod timestamp;

pub use guid::Guid;
pub use timespan::Timespan;
pub use timestamp::Timestamp;
