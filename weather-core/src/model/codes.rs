//! Closed code sets used across the Weather API payloads.
//!
//! Every set carries an `Unspecified` arm. Decoding is permissive: a wire code
//! outside the set (or the set's own `*_UNSPECIFIED` code) resolves to
//! `Unspecified` rather than failing the surrounding response.

macro_rules! wire_codes {
    (
        $(#[$meta:meta])*
        pub enum $name:ident = $unspecified:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $code:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            Unspecified,
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Wire code of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $name::Unspecified => $unspecified,
                    $( $name::$variant => $code, )+
                }
            }

            pub const fn all() -> &'static [$name] {
                &[$name::Unspecified, $( $name::$variant, )+]
            }

            /// Resolves a wire code. Unknown codes map to `Unspecified`.
            pub fn from_code(code: &str) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    _ => $name::Unspecified,
                }
            }

            pub fn is_unspecified(&self) -> bool {
                matches!(self, $name::Unspecified)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_code(&code))
            }
        }
    };
}

wire_codes! {
    /// Unit of a temperature reading.
    pub enum TemperatureUnit = "TEMPERATURE_UNIT_UNSPECIFIED" {
        Celsius => "CELSIUS",
        Fahrenheit => "FAHRENHEIT",
    }
}

wire_codes! {
    /// Unit of accumulated (liquid equivalent) precipitation.
    pub enum PrecipitationUnit = "UNIT_UNSPECIFIED" {
        Millimeters => "MILLIMETERS",
        Inches => "INCHES",
    }
}

wire_codes! {
    pub enum PrecipitationType = "PRECIPITATION_TYPE_UNSPECIFIED" {
        /// No precipitation expected.
        None => "NONE",
        Snow => "SNOW",
        Rain => "RAIN",
        LightRain => "LIGHT_RAIN",
        HeavyRain => "HEAVY_RAIN",
        RainAndSnow => "RAIN_AND_SNOW",
        Sleet => "SLEET",
        FreezingRain => "FREEZING_RAIN",
    }
}

wire_codes! {
    pub enum SpeedUnit = "SPEED_UNIT_UNSPECIFIED" {
        KilometersPerHour => "KILOMETERS_PER_HOUR",
        MilesPerHour => "MILES_PER_HOUR",
    }
}

wire_codes! {
    /// 16-point compass direction the wind blows from.
    pub enum CardinalDirection = "CARDINAL_DIRECTION_UNSPECIFIED" {
        North => "NORTH",
        NorthNortheast => "NORTH_NORTHEAST",
        Northeast => "NORTHEAST",
        EastNortheast => "EAST_NORTHEAST",
        East => "EAST",
        EastSoutheast => "EAST_SOUTHEAST",
        Southeast => "SOUTHEAST",
        SouthSoutheast => "SOUTH_SOUTHEAST",
        South => "SOUTH",
        SouthSouthwest => "SOUTH_SOUTHWEST",
        Southwest => "SOUTHWEST",
        WestSouthwest => "WEST_SOUTHWEST",
        West => "WEST",
        WestNorthwest => "WEST_NORTHWEST",
        Northwest => "NORTHWEST",
        NorthNorthwest => "NORTH_NORTHWEST",
    }
}

wire_codes! {
    pub enum VisibilityUnit = "UNIT_UNSPECIFIED" {
        Kilometers => "KILOMETERS",
        Miles => "MILES",
    }
}

wire_codes! {
    pub enum IceThicknessUnit = "UNIT_UNSPECIFIED" {
        Millimeters => "MILLIMETERS",
        Inches => "INCHES",
    }
}

wire_codes! {
    /// Kind of weather condition, as reported alongside the icon and description.
    pub enum WeatherConditionType = "TYPE_UNSPECIFIED" {
        Clear => "CLEAR",
        MostlyClear => "MOSTLY_CLEAR",
        PartlyCloudy => "PARTLY_CLOUDY",
        MostlyCloudy => "MOSTLY_CLOUDY",
        Cloudy => "CLOUDY",
        Windy => "WINDY",
        WindAndRain => "WIND_AND_RAIN",
        LightRainShowers => "LIGHT_RAIN_SHOWERS",
        ChanceOfShowers => "CHANCE_OF_SHOWERS",
        ScatteredShowers => "SCATTERED_SHOWERS",
        RainShowers => "RAIN_SHOWERS",
        HeavyRainShowers => "HEAVY_RAIN_SHOWERS",
        LightToModerateRain => "LIGHT_TO_MODERATE_RAIN",
        ModerateToHeavyRain => "MODERATE_TO_HEAVY_RAIN",
        Rain => "RAIN",
        LightRain => "LIGHT_RAIN",
        HeavyRain => "HEAVY_RAIN",
        RainPeriodicallyHeavy => "RAIN_PERIODICALLY_HEAVY",
        LightSnowShowers => "LIGHT_SNOW_SHOWERS",
        ChanceOfSnowShowers => "CHANCE_OF_SNOW_SHOWERS",
        ScatteredSnowShowers => "SCATTERED_SNOW_SHOWERS",
        SnowShowers => "SNOW_SHOWERS",
        HeavySnowShowers => "HEAVY_SNOW_SHOWERS",
        LightToModerateSnow => "LIGHT_TO_MODERATE_SNOW",
        ModerateToHeavySnow => "MODERATE_TO_HEAVY_SNOW",
        Snow => "SNOW",
        LightSnow => "LIGHT_SNOW",
        HeavySnow => "HEAVY_SNOW",
        Snowstorm => "SNOWSTORM",
        SnowPeriodicallyHeavy => "SNOW_PERIODICALLY_HEAVY",
        HeavySnowStorm => "HEAVY_SNOW_STORM",
        BlowingSnow => "BLOWING_SNOW",
        RainAndSnow => "RAIN_AND_SNOW",
        Hail => "HAIL",
        HailShowers => "HAIL_SHOWERS",
        Thunderstorm => "THUNDERSTORM",
        Thundershower => "THUNDERSHOWER",
        LightThunderstormRain => "LIGHT_THUNDERSTORM_RAIN",
        ScatteredThunderstorms => "SCATTERED_THUNDERSTORMS",
        HeavyThunderstorm => "HEAVY_THUNDERSTORM",
    }
}

wire_codes! {
    pub enum MoonPhase = "MOON_PHASE_UNSPECIFIED" {
        NewMoon => "NEW_MOON",
        WaxingCrescent => "WAXING_CRESCENT",
        FirstQuarter => "FIRST_QUARTER",
        WaxingGibbous => "WAXING_GIBBOUS",
        FullMoon => "FULL_MOON",
        WaningGibbous => "WANING_GIBBOUS",
        LastQuarter => "LAST_QUARTER",
        WaningCrescent => "WANING_CRESCENT",
    }
}
