use std::str::FromStr;

/// A validated wind speed in km/h.
///
/// Construction goes through [`WindSpeed::from_kmh`] or the string and number
/// conversions, so a value of this type is always finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct WindSpeed(f64);

/// Rejected wind speed input. Detected before any display surface is touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidSpeedInput {
    #[error("invalid wind speed {0:?}, not a number")]
    NotANumber(String),
    #[error("invalid wind speed {0}, expected a non-negative number")]
    Negative(f64),
}

impl WindSpeed {
    /// Validates `kmh` as a wind speed.
    ///
    /// NaN and the infinities are rejected as [`InvalidSpeedInput::NotANumber`],
    /// anything below zero as [`InvalidSpeedInput::Negative`].
    pub fn from_kmh(kmh: f64) -> Result<Self, InvalidSpeedInput> {
        if !kmh.is_finite() {
            return Err(InvalidSpeedInput::NotANumber(kmh.to_string()));
        }

        if kmh < 0.0 {
            return Err(InvalidSpeedInput::Negative(kmh));
        }

        Ok(Self(kmh))
    }

    /// The speed in km/h.
    pub fn kmh(&self) -> f64 {
        self.0
    }

    /// Whether the air stands still, i.e. the speed is exactly zero.
    pub fn is_calm(&self) -> bool {
        self.0 == 0.0
    }
}

impl TryFrom<f64> for WindSpeed {
    type Error = InvalidSpeedInput;

    fn try_from(kmh: f64) -> Result<Self, Self::Error> {
        Self::from_kmh(kmh)
    }
}

impl FromStr for WindSpeed {
    type Err = InvalidSpeedInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kmh = s
            .trim()
            .parse::<f64>()
            .map_err(|_| InvalidSpeedInput::NotANumber(s.to_string()))?;

        Self::from_kmh(kmh)
    }
}

impl TryFrom<&str> for WindSpeed {
    type Error = InvalidSpeedInput;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Formats the speed unrounded, the way the speed readout shows it.
impl std::fmt::Display for WindSpeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn test_parse_wind_speed() {
    assert_eq!("30".parse::<WindSpeed>().unwrap().kmh(), 30.0);
    assert_eq!(" 12.5 ".parse::<WindSpeed>().unwrap().kmh(), 12.5);

    assert!(matches!(
        "abc".parse::<WindSpeed>(),
        Err(InvalidSpeedInput::NotANumber(_))
    ));
    assert!(matches!(
        "".parse::<WindSpeed>(),
        Err(InvalidSpeedInput::NotANumber(_))
    ));
    assert_eq!(
        "-5".parse::<WindSpeed>(),
        Err(InvalidSpeedInput::Negative(-5.0))
    );
}

#[test]
fn test_non_finite_speeds_are_not_numbers() {
    assert!(matches!(
        WindSpeed::from_kmh(f64::NAN),
        Err(InvalidSpeedInput::NotANumber(_))
    ));
    assert!(matches!(
        WindSpeed::from_kmh(f64::INFINITY),
        Err(InvalidSpeedInput::NotANumber(_))
    ));
    assert!(matches!(
        WindSpeed::from_kmh(f64::NEG_INFINITY),
        Err(InvalidSpeedInput::NotANumber(_))
    ));
}

#[test]
fn test_wind_speed_displays_unrounded() {
    assert_eq!(WindSpeed::from_kmh(30.0).unwrap().to_string(), "30");
    assert_eq!(WindSpeed::from_kmh(12.5).unwrap().to_string(), "12.5");
    assert_eq!(WindSpeed::from_kmh(0.0).unwrap().to_string(), "0");
}
