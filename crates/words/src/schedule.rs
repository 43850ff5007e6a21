use super::*;
use chrono::DateTime;
use chrono::FixedOffset;
use chrono::NaiveTime;
use chrono::Offset;
use chrono::TimeDelta;
use chrono::Utc;

/// A daily firing time in a fixed timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    at: NaiveTime,
    offset: FixedOffset,
}

impl Default for Schedule {
    /// Midnight, US Eastern standard time.
    fn default() -> Self {
        Self {
            at: NaiveTime::MIN,
            offset: FixedOffset::west_opt(5 * 3600).unwrap_or(Utc.fix()),
        }
    }
}

impl Schedule {
    pub fn new(at: NaiveTime, offset: FixedOffset) -> Self {
        Self { at, offset }
    }
    /// Parses `HH:MM` and `±HH:MM`.
    pub fn parse(at: &str, offset: &str) -> Result<Self, ScheduleError> {
        let time = NaiveTime::parse_from_str(at.trim(), "%H:%M")
            .map_err(|_| ScheduleError::Time(at.to_string()))?;
        let zone = offset
            .trim()
            .parse::<FixedOffset>()
            .map_err(|_| ScheduleError::Offset(offset.to_string()))?;
        Ok(Self::new(time, zone))
    }
    /// First firing strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        let local = now.with_timezone(&self.offset).date_naive().and_time(self.at);
        let today = local - TimeDelta::seconds(self.offset.local_minus_utc() as i64);
        let today = today.and_utc();
        match today > now {
            true => today,
            false => today + TimeDelta::days(1),
        }
    }
    /// Time to wait from `now` until the next firing.
    pub fn delay(&self, now: DateTime<Utc>) -> std::time::Duration {
        (self.next_after(now) - now).to_std().unwrap_or_default()
    }
}
