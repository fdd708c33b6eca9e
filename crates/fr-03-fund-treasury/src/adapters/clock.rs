use crate::ports::outbound::TimeSource;
use shared_types::Timestamp;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos().min(Timestamp::MAX as u128) as Timestamp)
            .unwrap_or(0)
    }
}
