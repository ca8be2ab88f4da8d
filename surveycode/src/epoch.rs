//! Minute offsets from the survey code epoch.

use chrono::{DateTime, Duration, NaiveDateTime};

use crate::codec::max_for_width;
use crate::error::{Error, Field, Result};

/// Unix seconds of the epoch, 2016-02-01T00:00:00.
pub const EPOCH_UNIX_SECS: i64 = 1_454_284_800;

/// Returns the epoch as a naive timestamp.
///
/// Purchase times carry no time zone; they are compared with the epoch as
/// wall-clock values.
pub fn epoch() -> NaiveDateTime {
    DateTime::from_timestamp(EPOCH_UNIX_SECS, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

/// Returns the whole minutes elapsed between the epoch and `ts`, truncated.
///
/// Timestamps before the epoch fail with [`Error::NegativeInput`], including
/// those less than a minute before it.
pub fn minutes_since_epoch(ts: NaiveDateTime) -> Result<u64> {
    let secs = ts.and_utc().timestamp() - EPOCH_UNIX_SECS;
    if secs < 0 {
        return Err(Error::NegativeInput {
            field: Field::Minutes,
            value: secs.div_euclid(60),
        });
    }
    Ok((secs / 60) as u64)
}

/// Returns the timestamp `minutes` after the epoch, or `None` if it is not
/// representable.
pub fn from_minutes(minutes: u64) -> Option<NaiveDateTime> {
    let minutes = i64::try_from(minutes).ok()?;
    epoch().checked_add_signed(Duration::try_minutes(minutes)?)
}

/// Returns the first timestamp whose minute offset no longer fits in `width`
/// symbols.
///
/// For the five-symbol minutes field this is 2034-08-26T16:25:00.
pub fn rollover(width: usize) -> Option<NaiveDateTime> {
    from_minutes(max_for_width(width).checked_add(1)?)
}
