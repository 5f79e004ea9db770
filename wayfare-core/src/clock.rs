use chrono::Utc;

/// Current wall-clock time as nanoseconds since the Unix epoch.
///
/// `timestamp_nanos_opt` only fails for dates past the year 2262; saturate
/// there rather than wrap.
pub fn now_nanos() -> u64 {
    Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX) as u64
}
