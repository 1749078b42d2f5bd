//! Maps full response documents onto the model and checks the field contract:
//! aliases, optionality, code sets, ordering and error paths.

use chrono::{TimeZone as _, Utc};
use google_weather_core::mapping::{self, MappingError};
use google_weather_core::model::*;
use serde_json::{Value, json};

const CURRENT: &str = include_str!("fixtures/current_conditions.json");
const HOURLY: &str = include_str!("fixtures/hourly_forecast.json");
const DAILY: &str = include_str!("fixtures/daily_forecast.json");

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).expect("fixture is valid JSON")
}

fn remove(value: &mut Value, pointer: &str) {
    let (parent, key) = pointer.rsplit_once('/').expect("pointer has a parent");
    value
        .pointer_mut(parent)
        .and_then(Value::as_object_mut)
        .expect("parent object exists")
        .remove(key)
        .expect("key exists");
}

#[test]
fn current_conditions_fixture_maps_every_field() {
    let current: CurrentConditionsResponse = mapping::from_json(CURRENT).unwrap();

    assert_eq!(current.time_zone.id, "America/Los_Angeles");
    assert_eq!(current.time_zone.version, None);
    assert_eq!(current.weather_condition.kind, WeatherConditionType::Clear);
    assert_eq!(current.weather_condition.description.text, "Sunny");
    assert_eq!(current.temperature, Temperature { degrees: 13.7, unit: TemperatureUnit::Celsius });
    assert_eq!(current.feels_like_temperature.degrees, 13.1);
    assert_eq!(current.dew_point.degrees, 1.1);
    assert_eq!(current.heat_index.degrees, 13.7);
    assert_eq!(current.wind_chill.degrees, 13.1);
    assert_eq!(current.precipitation.probability.kind, PrecipitationType::Rain);
    assert_eq!(current.precipitation.qpf.unit, PrecipitationUnit::Millimeters);
    assert_eq!(current.precipitation.snow_qpf, None);
    assert_eq!(current.air_pressure.mean_sea_level_millibars, 1019.16);
    assert_eq!(current.wind.direction.cardinal, CardinalDirection::NorthNorthwest);
    assert_eq!(current.wind.direction.degrees, 335);
    assert_eq!(current.wind.gust.unit, SpeedUnit::KilometersPerHour);
    assert_eq!(current.visibility.unit, VisibilityUnit::Kilometers);
    assert_eq!(current.current_conditions_history.max_temperature.degrees, 14.3);
    assert_eq!(current.current_conditions_history.min_temperature.degrees, 3.7);
    assert_eq!(current.current_conditions_history.temperature_change.degrees, -0.6);
    assert!(current.is_daytime);
    assert_eq!(current.relative_humidity, 42);
    assert_eq!(current.uv_index, 1);
    assert_eq!(current.thunderstorm_probability, 0);
    assert_eq!(current.cloud_cover, 0);
    assert_eq!(current.current_time.date_naive().to_string(), "2025-01-28");
}

#[test]
fn current_conditions_missing_temperature_is_reported() {
    let mut doc = fixture(CURRENT);
    remove(&mut doc, "/temperature");

    let err = mapping::from_value::<CurrentConditionsResponse>(doc).unwrap_err();
    assert_eq!(err, MappingError::MissingField { path: "temperature".into() });
}

#[test]
fn current_conditions_missing_history_leaf_is_reported_by_path() {
    let mut doc = fixture(CURRENT);
    remove(&mut doc, "/currentConditionsHistory/qpf/unit");

    let err = mapping::from_value::<CurrentConditionsResponse>(doc).unwrap_err();
    assert_eq!(err.path(), "currentConditionsHistory.qpf.unit");
}

#[test]
fn hourly_fixture_preserves_order_and_optional_blocks() {
    let hourly: HourlyForecastResponse = mapping::from_json(HOURLY).unwrap();

    assert_eq!(hourly.forecast_hours.len(), 2);
    let first = &hourly.forecast_hours[0];
    let second = &hourly.forecast_hours[1];

    assert_eq!(first.interval.start_time, Utc.with_ymd_and_hms(2025, 2, 5, 23, 0, 0).unwrap());
    assert_eq!(second.interval.start_time, Utc.with_ymd_and_hms(2025, 2, 6, 0, 0, 0).unwrap());

    assert_eq!(first.display_date_time.hours, Some(15));
    assert_eq!(first.display_date_time.minutes, None);
    assert_eq!(first.display_date_time.utc_offset_seconds(), Some(-28800));
    assert_eq!(first.display_date_time.time_zone, None);
    assert_eq!(first.wet_bulb_temperature.degrees, 11.3);
    assert_eq!(first.ice_thickness, None);
    assert_eq!(first.precipitation.snow_qpf, None);

    let ice = second.ice_thickness.as_ref().expect("ice thickness present");
    assert_eq!(ice.unit, IceThicknessUnit::Millimeters);
    assert_eq!(second.precipitation.snow_qpf.as_ref().map(|q| q.quantity), Some(0.2));
    assert_eq!(second.precipitation.probability.kind, PrecipitationType::FreezingRain);

    assert_eq!(hourly.time_zone.version.as_deref(), Some("2024b"));
    assert!(hourly.has_next_page());
}

#[test]
fn hourly_unknown_condition_code_maps_to_sentinel() {
    let hourly: HourlyForecastResponse = mapping::from_json(HOURLY).unwrap();
    let condition = &hourly.forecast_hours[1].weather_condition;

    assert_eq!(condition.kind, WeatherConditionType::Unspecified);
    assert_eq!(condition.description.text, "Freezing drizzle");
}

#[test]
fn daily_fixture_maps_parts_sun_and_moon() {
    let daily: DailyForecastResponse = mapping::from_json(DAILY).unwrap();
    assert_eq!(daily.forecast_days.len(), 2);

    let day = &daily.forecast_days[0];
    assert_eq!(day.display_date, Date { year: 2025, month: 2, day: 10 });
    assert_eq!(day.daytime_forecast.weather_condition.kind, WeatherConditionType::PartlyCloudy);
    assert_eq!(day.nighttime_forecast.wind.direction.cardinal, CardinalDirection::WestNorthwest);
    assert_eq!(day.max_temperature.degrees, 13.3);
    assert_eq!(day.min_temperature.degrees, 1.5);
    assert_eq!(day.max_heat_index.degrees, 13.3);
    assert!(day.sun_events.sunrise_time.is_some());
    assert!(day.sun_events.sunset_time.is_some());
    assert_eq!(day.moon_events.moon_phase, MoonPhase::WaxingGibbous);
    assert_eq!(day.moon_events.moonrise_times.len(), 1);
    assert_eq!(day.moon_events.moonset_times.len(), 1);
    assert_eq!(day.ice_thickness, None);

    // Empty token means "no further page".
    assert_eq!(daily.next_page_token.as_deref(), Some(""));
    assert!(!daily.has_next_page());
}

#[test]
fn polar_day_has_absent_sun_events_and_empty_moon_lists() {
    let daily: DailyForecastResponse = mapping::from_json(DAILY).unwrap();
    let polar = &daily.forecast_days[1];

    assert_eq!(polar.sun_events.sunrise_time, None);
    assert_eq!(polar.sun_events.sunset_time, None);
    assert_eq!(polar.moon_events.moon_phase, MoonPhase::FullMoon);
    assert!(polar.moon_events.moonrise_times.is_empty());
    assert!(polar.moon_events.moonset_times.is_empty());
    assert!(polar.nighttime_forecast.ice_thickness.is_some());
    assert!(polar.daytime_forecast.ice_thickness.is_none());
}

#[test]
fn sun_events_without_times_construct() {
    let sun: SunEvents = mapping::from_value(json!({})).unwrap();
    assert_eq!(sun.sunrise_time, None);
    assert_eq!(sun.sunset_time, None);
}

#[test]
fn daily_order_is_preserved_for_zero_one_and_ten_days() {
    let doc = fixture(DAILY);
    let template = doc["forecastDays"][0].clone();

    for count in [0usize, 1, 10] {
        // Deliberately unsorted: day numbers run backwards.
        let days: Vec<Value> = (0..count)
            .map(|i| {
                let mut day = template.clone();
                day["displayDate"]["day"] = json!(20 - i);
                day
            })
            .collect();
        let page = json!({ "forecastDays": days, "timeZone": { "id": "UTC" } });

        let daily: DailyForecastResponse = mapping::from_value(page).unwrap();
        let got: Vec<i32> = daily.forecast_days.iter().map(|d| d.display_date.day).collect();
        let expected: Vec<i32> = (0..count).map(|i| 20 - i as i32).collect();
        assert_eq!(got, expected);
        assert_eq!(daily.next_page_token, None);
    }
}

#[test]
fn missing_field_deep_in_daily_is_reported_with_index() {
    let mut doc = fixture(DAILY);
    remove(&mut doc, "/forecastDays/1/nighttimeForecast/wind/speed");

    let err = mapping::from_value::<DailyForecastResponse>(doc).unwrap_err();
    assert_eq!(
        err,
        MappingError::MissingField {
            path: "forecastDays[1].nighttimeForecast.wind.speed".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "missing required field `forecastDays[1].nighttimeForecast.wind.speed`"
    );
}

#[test]
fn malformed_timestamp_is_invalid_at_its_path() {
    let mut doc = fixture(HOURLY);
    doc["forecastHours"][0]["interval"]["startTime"] = json!("yesterday");

    let err = mapping::from_value::<HourlyForecastResponse>(doc).unwrap_err();
    assert!(matches!(err, MappingError::InvalidValue { .. }));
    assert_eq!(err.path(), "forecastHours[0].interval.startTime");
}

#[test]
fn out_of_range_percentages_pass_through() {
    let mut doc = fixture(CURRENT);
    doc["relativeHumidity"] = json!(140);
    doc["wind"]["direction"]["degrees"] = json!(725);

    let current: CurrentConditionsResponse = mapping::from_value(doc).unwrap();
    assert_eq!(current.relative_humidity, 140);
    assert_eq!(current.wind.direction.degrees, 725);
}

#[test]
fn fractional_percentage_is_invalid() {
    let mut doc = fixture(CURRENT);
    doc["cloudCover"] = json!(12.5);

    let err = mapping::from_value::<CurrentConditionsResponse>(doc).unwrap_err();
    assert_eq!(err.path(), "cloudCover");
}

#[test]
fn forecast_days_is_required() {
    let err = mapping::from_value::<DailyForecastResponse>(json!({ "timeZone": { "id": "UTC" } }))
        .unwrap_err();
    assert_eq!(err, MappingError::MissingField { path: "forecastDays".into() });
}

#[test]
fn mapped_tree_serializes_back_to_wire_names() {
    let current: CurrentConditionsResponse = mapping::from_json(CURRENT).unwrap();
    let value = serde_json::to_value(&current).unwrap();

    assert_eq!(value["feelsLikeTemperature"]["unit"], "CELSIUS");
    assert_eq!(value["weatherCondition"]["type"], "CLEAR");
    assert!(value["precipitation"].get("snowQpf").is_none());

    let again: CurrentConditionsResponse = mapping::from_value(value).unwrap();
    assert_eq!(again, current);
}
