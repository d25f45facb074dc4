use chrono::{Duration, NaiveDate};

/// Maximum publication-date span the overview endpoint accepts per query.
pub const MAX_WINDOW_DAYS: i64 = 100;

/// One bounded publication-date sub-query, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Split [pub_start, pub_end] into consecutive 100-day strides starting at
/// pub_start. This is a fixed-stride partition, not an exact cover: the
/// final window's end may overshoot pub_end, and the server is expected to
/// clamp out-of-range dates.
pub fn plan_batches(pub_start: NaiveDate, pub_end: NaiveDate) -> Vec<DateWindow> {
    if pub_start > pub_end {
        return Vec::new();
    }

    let days = (pub_end - pub_start).num_days();
    let count = days / MAX_WINDOW_DAYS + 1;
    let stride = Duration::days(MAX_WINDOW_DAYS);

    let mut start = pub_start;
    let mut end = if days > MAX_WINDOW_DAYS {
        pub_start + stride
    } else {
        pub_end
    };

    let mut windows = Vec::with_capacity(count as usize);
    for _ in 0..count {
        windows.push(DateWindow { start, end });
        start = start + stride;
        end = end + stride;
    }
    windows
}
