//! Leaf and composite entities shared by all three response kinds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::codes::{
    CardinalDirection, IceThicknessUnit, PrecipitationType, PrecipitationUnit, SpeedUnit,
    TemperatureUnit, VisibilityUnit, WeatherConditionType,
};

/// Widest offset from UTC a civil time zone can have.
const MAX_UTC_OFFSET_SECONDS: i64 = 18 * 60 * 60;

/// Mean sea level air pressure. Always millibars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirPressure {
    #[serde(rename = "meanSeaLevelMillibars")]
    pub mean_sea_level_millibars: f64,
}

/// A time span: inclusive start, optional exclusive end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    #[serde(rename = "startTime")]
    pub start_time: chrono::DateTime<Utc>,

    #[serde(rename = "endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<chrono::DateTime<Utc>>,
}

/// IANA time zone, e.g. `America/New_York`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeZone {
    #[serde(rename = "id")]
    pub id: String,

    /// Database version, e.g. `2019a`.
    #[serde(rename = "version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Text in a particular BCP-47 language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "text")]
    pub text: String,

    #[serde(rename = "languageCode")]
    pub language_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    #[serde(rename = "degrees")]
    pub degrees: f64,

    #[serde(rename = "unit")]
    pub unit: TemperatureUnit,
}

/// Expected amount of melted precipitation (liquid water equivalent).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantitativePrecipitationForecast {
    #[serde(rename = "quantity")]
    pub quantity: f64,

    #[serde(rename = "unit")]
    pub unit: PrecipitationUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationProbability {
    #[serde(rename = "type")]
    pub kind: PrecipitationType,

    /// Chance of precipitation, 0..=100. Not range checked.
    #[serde(rename = "percent")]
    pub percent: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "probability")]
    pub probability: PrecipitationProbability,

    #[serde(rename = "qpf")]
    pub qpf: QuantitativePrecipitationForecast,

    /// Snow accumulation, liquid water equivalent.
    #[serde(rename = "snowQpf", default, skip_serializing_if = "Option::is_none")]
    pub snow_qpf: Option<QuantitativePrecipitationForecast>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSpeed {
    #[serde(rename = "value")]
    pub value: f64,

    #[serde(rename = "unit")]
    pub unit: SpeedUnit,
}

/// Direction the wind originates from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindDirection {
    /// 0..=360. Not range checked.
    #[serde(rename = "degrees")]
    pub degrees: i32,

    #[serde(rename = "cardinal")]
    pub cardinal: CardinalDirection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    #[serde(rename = "direction")]
    pub direction: WindDirection,

    #[serde(rename = "speed")]
    pub speed: WindSpeed,

    #[serde(rename = "gust")]
    pub gust: WindSpeed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visibility {
    #[serde(rename = "distance")]
    pub distance: f64,

    #[serde(rename = "unit")]
    pub unit: VisibilityUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IceThickness {
    #[serde(rename = "thickness")]
    pub thickness: f64,

    #[serde(rename = "unit")]
    pub unit: IceThicknessUnit,
}

/// Weather condition at a location for some period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Icon URI without the file extension; append `.svg` or `.png`.
    #[serde(rename = "iconBaseUri")]
    pub icon_base_uri: String,

    #[serde(rename = "description")]
    pub description: LocalizedText,

    #[serde(rename = "type")]
    pub kind: WeatherConditionType,
}

impl WeatherCondition {
    /// Full icon URI for the given extension, e.g. `"svg"`.
    pub fn icon_uri(&self, extension: &str) -> String {
        format!("{}.{extension}", self.icon_base_uri)
    }
}

/// Whole or partial calendar date. A zero component means "unspecified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    #[serde(rename = "year")]
    pub year: i32,

    #[serde(rename = "month")]
    pub month: i32,

    #[serde(rename = "day")]
    pub day: i32,
}

impl Date {
    /// Returns the calendar date when every component is set and valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if self.year == 0 || self.month == 0 || self.day == 0 {
            return None;
        }
        NaiveDate::from_ymd_opt(self.year, u32::try_from(self.month).ok()?, u32::try_from(self.day).ok()?)
    }
}

/// Civil date and time. Any component may be missing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DateTime {
    #[serde(rename = "year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    #[serde(rename = "month", default, skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,

    #[serde(rename = "day", default, skip_serializing_if = "Option::is_none")]
    pub day: Option<i32>,

    #[serde(rename = "hours", default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<i32>,

    #[serde(rename = "minutes", default, skip_serializing_if = "Option::is_none")]
    pub minutes: Option<i32>,

    #[serde(rename = "seconds", default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<i32>,

    #[serde(rename = "nanos", default, skip_serializing_if = "Option::is_none")]
    pub nanos: Option<i32>,

    /// Protobuf duration string, e.g. `"-28800s"`.
    #[serde(rename = "utcOffset", default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<String>,

    #[serde(rename = "timeZone", default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<TimeZone>,
}

impl DateTime {
    /// Date part, if year, month and day are all present and non-zero.
    pub fn date(&self) -> Option<NaiveDate> {
        Date {
            year: self.year?,
            month: self.month?,
            day: self.day?,
        }
        .to_naive_date()
    }

    /// Combines the date with the time of day. Missing time components count as zero.
    pub fn to_naive_date_time(&self) -> Option<NaiveDateTime> {
        let to_u32 = |v: Option<i32>| u32::try_from(v.unwrap_or(0)).ok();
        let time = NaiveTime::from_hms_nano_opt(
            to_u32(self.hours)?,
            to_u32(self.minutes)?,
            to_u32(self.seconds)?,
            to_u32(self.nanos)?,
        )?;
        Some(self.date()?.and_time(time))
    }

    /// Parses `utc_offset` into whole seconds east of UTC. Fractional offsets
    /// and offsets beyond ±18 hours yield `None`.
    pub fn utc_offset_seconds(&self) -> Option<i64> {
        let raw = self.utc_offset.as_deref()?.strip_suffix('s')?;
        let seconds: f64 = raw.parse().ok()?;
        if seconds.fract() != 0.0 || seconds.abs() > MAX_UTC_OFFSET_SECONDS as f64 {
            return None;
        }
        Some(seconds as i64)
    }
}
