use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Inclusive range of instants an event must fall in to be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    since: DateTime<Utc>,
    until: DateTime<Utc>,
}

impl DateWindow {
    /// Spans from the start of `since` to the last nanosecond of `until`, in `tz`.
    pub fn from_dates<Tz: TimeZone>(
        since: NaiveDate,
        until: NaiveDate,
        tz: &Tz,
    ) -> anyhow::Result<Self> {
        if since > until {
            anyhow::bail!("since date ({since}) is after until date ({until})");
        }
        let end_of_day = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999)
            .context("invalid end of day")?;
        Ok(Self {
            since: local_instant(tz, since, NaiveTime::MIN)?,
            until: local_instant(tz, until, end_of_day)?,
        })
    }

    pub fn since(&self) -> DateTime<Utc> {
        self.since
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.since <= at && at <= self.until
    }
}

fn local_instant<Tz: TimeZone>(
    tz: &Tz,
    date: NaiveDate,
    time: NaiveTime,
) -> anyhow::Result<DateTime<Utc>> {
    let local = date.and_time(time);
    // A wall-clock time skipped by a DST jump resolves to the first instant after the gap.
    let dt = (0..=MAX_GAP_MINUTES)
        .find_map(|minutes| {
            tz.from_local_datetime(&(local + Duration::minutes(minutes)))
                .earliest()
        })
        .with_context(|| format!("{local} does not exist in the local timezone"))?;
    Ok(dt.with_timezone(&Utc))
}

/// Everything a single report run needs.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub user: String,
    pub window: DateWindow,
    /// GitHub host, used for author profile links.
    pub host: String,
}

pub fn parse_date(input: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(input, "%Y-%m-%d"))
        .with_context(|| format!("invalid date `{input}`, expected YYYYMMDD"))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
