use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

/// Time left until (or, once started, elapsed since) the event start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    /// `now` is at or past the target; the fields hold elapsed time
    pub started: bool,
}

impl Countdown {
    pub fn between(target: DateTime<FixedOffset>, now: DateTime<Utc>) -> Self {
        let delta = target.with_timezone(&Utc) - now;
        let started = delta <= TimeDelta::zero();
        let total = delta.num_seconds().abs();

        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            started,
        }
    }
}
