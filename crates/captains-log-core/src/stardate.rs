//! Standard Earth Time (SET) date codec.
//!
//! Maps real timestamps to the in-universe display format `YYYY.MM.DD.HH.MM`
//! and back. The SET year is the real year plus [`SC_YEAR_OFFSET`]; every
//! other field is the real value, zero-padded. No timezone conversion is
//! applied: the timestamp's own field values are used as given.
//!
//! Because the format is fixed-width and most-significant-first, string
//! ordering of stardates equals chronological ordering. The entry store
//! relies on this to sort by the stardate column.

use std::fmt;
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, Timelike, Utc,
};
use serde::Serialize;

use crate::error::StardateError;

/// Years added to the real year to get the SET year.
pub const SC_YEAR_OFFSET: i32 = 930;

/// Real years whose stardates keep a four-digit SET year, so that string
/// order matches time order.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 0..=(9999 - SC_YEAR_OFFSET);

/// Encode a timestamp as a stardate.
///
/// Only timestamps within [`SUPPORTED_YEARS`] (real years 0 to 9069) sort
/// correctly as strings; later years widen to five digits and earlier ones
/// take a sign.
pub fn to_stardate<T>(timestamp: &T) -> String
where
    T: Datelike + Timelike,
{
    format!(
        "{:04}.{:02}.{:02}.{:02}.{:02}",
        timestamp.year() + SC_YEAR_OFFSET,
        timestamp.month(),
        timestamp.day(),
        timestamp.hour(),
        timestamp.minute()
    )
}

/// Decode a stardate back into a real timestamp.
///
/// Hour and minute default to zero when the string stops after the day.
///
/// # Errors
///
/// Returns `StardateError` when the string does not have 3 to 5 numeric
/// fields or does not name a real calendar date and time. Callers decide
/// how to recover; nothing is substituted here.
pub fn to_earth_date(stardate: &str) -> Result<NaiveDateTime, StardateError> {
    let parts: Vec<&str> = stardate.trim().split('.').collect();
    if !(3..=5).contains(&parts.len()) {
        return Err(StardateError::FieldCount {
            input: stardate.to_string(),
            found: parts.len(),
        });
    }

    let field = |index: usize, name: &'static str| -> Result<u32, StardateError> {
        match parts.get(index) {
            Some(raw) => raw.trim().parse().map_err(|_| StardateError::InvalidField {
                input: stardate.to_string(),
                field: name,
            }),
            None => Ok(0),
        }
    };

    let sc_year: i32 = parts[0]
        .trim()
        .parse()
        .map_err(|_| StardateError::InvalidField {
            input: stardate.to_string(),
            field: "year",
        })?;
    let month = field(1, "month")?;
    let day = field(2, "day")?;
    let hour = field(3, "hour")?;
    let minute = field(4, "minute")?;

    let out_of_range = || StardateError::OutOfRange {
        input: stardate.to_string(),
    };
    let year = sc_year
        .checked_sub(SC_YEAR_OFFSET)
        .filter(|year| SUPPORTED_YEARS.contains(year))
        .ok_or_else(out_of_range)?;

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .ok_or_else(out_of_range)
}

/// The stardate for the current local time.
pub fn current_stardate() -> String {
    to_stardate(&Local::now())
}

/// Prefix a stardate for display.
pub fn format_stardate(stardate: &str) -> String {
    format!("SET {}", stardate)
}

/// Everything the front end shows about "now" in one place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StardateInfo {
    pub stardate: String,
    pub formatted_stardate: String,
    pub earth_date: String,
    pub earth_date_long: String,
    pub sc_year: i32,
    pub year: i32,
    pub day_of_year: u32,
    pub set_display: String,
}

impl StardateInfo {
    pub fn now() -> Self {
        Self::at(&Local::now().naive_local())
    }

    pub fn at(timestamp: &NaiveDateTime) -> Self {
        let stardate = to_stardate(timestamp);
        Self {
            formatted_stardate: format_stardate(&stardate),
            earth_date: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            earth_date_long: timestamp.format("%A, %B %d, %Y at %I:%M %p").to_string(),
            sc_year: timestamp.year() + SC_YEAR_OFFSET,
            year: timestamp.year(),
            day_of_year: timestamp.ordinal(),
            set_display: format!("Standard Earth Time {}", stardate),
            stardate,
        }
    }
}

/// Format the span between two timestamps as `HH:MM:SS`, prefixed with
/// `N days, ` once the span reaches a full day. Negative spans clamp to zero.
pub fn format_duration(start: &NaiveDateTime, end: &NaiveDateTime) -> String {
    let total = (*end - *start).num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{} days, {:02}:{:02}:{:02}", days, hours, minutes, seconds)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Named operational time zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipTimeZone {
    Utc,
    EarthStandard,
    SolSystem,
    Terra,
    Crusader,
    Hurston,
    ArcCorp,
    MicroTech,
    Local,
}

impl ShipTimeZone {
    pub const ALL: [ShipTimeZone; 9] = [
        ShipTimeZone::Utc,
        ShipTimeZone::EarthStandard,
        ShipTimeZone::SolSystem,
        ShipTimeZone::Terra,
        ShipTimeZone::Crusader,
        ShipTimeZone::Hurston,
        ShipTimeZone::ArcCorp,
        ShipTimeZone::MicroTech,
        ShipTimeZone::Local,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShipTimeZone::Utc => "UTC",
            ShipTimeZone::EarthStandard => "Earth Standard",
            ShipTimeZone::SolSystem => "Sol System",
            ShipTimeZone::Terra => "Terra",
            ShipTimeZone::Crusader => "Crusader",
            ShipTimeZone::Hurston => "Hurston",
            ShipTimeZone::ArcCorp => "ArcCorp",
            ShipTimeZone::MicroTech => "microTech",
            ShipTimeZone::Local => "Local",
        }
    }

    /// Hours east of UTC, or `None` for the host's local zone.
    pub fn utc_offset_hours(&self) -> Option<i32> {
        match self {
            ShipTimeZone::Utc
            | ShipTimeZone::EarthStandard
            | ShipTimeZone::SolSystem
            | ShipTimeZone::Terra => Some(0),
            ShipTimeZone::Crusader => Some(1),
            ShipTimeZone::Hurston => Some(2),
            ShipTimeZone::ArcCorp => Some(3),
            ShipTimeZone::MicroTech => Some(4),
            ShipTimeZone::Local => None,
        }
    }

    fn offset(&self) -> FixedOffset {
        match self.utc_offset_hours() {
            Some(hours) => FixedOffset::east_opt(hours * 3_600).unwrap_or_else(|| Utc.fix()),
            None => Local::now().offset().fix(),
        }
    }
}

impl fmt::Display for ShipTimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShipTimeZone {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ShipTimeZone::ALL
            .into_iter()
            .find(|zone| zone.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown ship time zone: {}", s))
    }
}

/// Current time in the given ship zone.
pub fn ship_time(zone: ShipTimeZone) -> DateTime<FixedOffset> {
    Utc::now().with_timezone(&zone.offset())
}
