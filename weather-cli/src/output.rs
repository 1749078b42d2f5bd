//! Human-friendly rendering of the lookup responses.

use google_weather_core::model::{
    CurrentConditionsResponse, DailyForecastResponse, ForecastDay, ForecastHour,
    HourlyForecastResponse, PrecipitationUnit, SpeedUnit, Temperature, TemperatureUnit,
    VisibilityUnit, Wind,
};

fn temperature(t: &Temperature) -> String {
    let symbol = match t.unit {
        TemperatureUnit::Celsius => "°C",
        TemperatureUnit::Fahrenheit => "°F",
        TemperatureUnit::Unspecified => "°",
    };
    format!("{:.1}{symbol}", t.degrees)
}

fn speed_unit(unit: SpeedUnit) -> &'static str {
    match unit {
        SpeedUnit::KilometersPerHour => "km/h",
        SpeedUnit::MilesPerHour => "mph",
        SpeedUnit::Unspecified => "",
    }
}

fn wind(w: &Wind) -> String {
    format!(
        "{:.0} {} from {} ({}°), gusts {:.0} {}",
        w.speed.value,
        speed_unit(w.speed.unit),
        w.direction.cardinal,
        w.direction.degrees,
        w.gust.value,
        speed_unit(w.gust.unit),
    )
}

fn precipitation_unit(unit: PrecipitationUnit) -> &'static str {
    match unit {
        PrecipitationUnit::Millimeters => "mm",
        PrecipitationUnit::Inches => "in",
        PrecipitationUnit::Unspecified => "",
    }
}

pub fn current_summary(current: &CurrentConditionsResponse) -> String {
    let visibility_unit = match current.visibility.unit {
        VisibilityUnit::Kilometers => "km",
        VisibilityUnit::Miles => "mi",
        VisibilityUnit::Unspecified => "",
    };
    let history = &current.current_conditions_history;

    let lines = [
        format!(
            "{} ({}), {}",
            current.weather_condition.description.text,
            current.time_zone.id,
            current.current_time.format("%Y-%m-%d %H:%M UTC"),
        ),
        format!(
            "Temperature: {} (feels like {}), dew point {}",
            temperature(&current.temperature),
            temperature(&current.feels_like_temperature),
            temperature(&current.dew_point),
        ),
        format!(
            "Last 24h: high {}, low {}, change {}",
            temperature(&history.max_temperature),
            temperature(&history.min_temperature),
            temperature(&history.temperature_change),
        ),
        format!(
            "Precipitation: {}% {}, {:.1} {}",
            current.precipitation.probability.percent,
            current.precipitation.probability.kind,
            current.precipitation.qpf.quantity,
            precipitation_unit(current.precipitation.qpf.unit),
        ),
        format!("Wind: {}", wind(&current.wind)),
        format!(
            "Humidity {}%, cloud cover {}%, UV index {}, thunderstorm {}%",
            current.relative_humidity,
            current.cloud_cover,
            current.uv_index,
            current.thunderstorm_probability,
        ),
        format!(
            "Pressure {:.1} mb, visibility {:.0} {visibility_unit}",
            current.air_pressure.mean_sea_level_millibars, current.visibility.distance,
        ),
    ];

    lines.join("\n")
}

fn hour_line(hour: &ForecastHour) -> String {
    let when = hour
        .display_date_time
        .to_naive_date_time()
        .map(|local| local.format("%a %d %H:%M").to_string())
        .unwrap_or_else(|| hour.interval.start_time.format("%a %d %H:%MZ").to_string());

    format!(
        "{when}  {:>7}  {:>3}%  {:<24}  {}",
        temperature(&hour.temperature),
        hour.precipitation.probability.percent,
        hour.weather_condition.description.text,
        wind(&hour.wind),
    )
}

pub fn hourly_lines(hourly: &HourlyForecastResponse) -> Vec<String> {
    hourly.forecast_hours.iter().map(hour_line).collect()
}

fn day_line(day: &ForecastDay) -> String {
    let date = day
        .display_date
        .to_naive_date()
        .map(|d| d.format("%a %d %b").to_string())
        .unwrap_or_else(|| day.interval.start_time.format("%a %d %b").to_string());

    let sun = match (&day.sun_events.sunrise_time, &day.sun_events.sunset_time) {
        (Some(rise), Some(set)) => format!("sun {}-{} UTC", rise.format("%H:%M"), set.format("%H:%M")),
        (Some(rise), None) => format!("sunrise {} UTC", rise.format("%H:%M")),
        (None, Some(set)) => format!("sunset {} UTC", set.format("%H:%M")),
        (None, None) => "no sunrise/sunset".to_string(),
    };

    format!(
        "{date}  {:>7} / {:<7}  {:>3}%  {:<24}  {sun}, moon {}",
        temperature(&day.max_temperature),
        temperature(&day.min_temperature),
        day.daytime_forecast.precipitation.probability.percent,
        day.daytime_forecast.weather_condition.description.text,
        day.moon_events.moon_phase,
    )
}

pub fn daily_lines(daily: &DailyForecastResponse) -> Vec<String> {
    daily.forecast_days.iter().map(day_line).collect()
}
