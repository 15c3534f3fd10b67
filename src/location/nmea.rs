//! Minimal NMEA 0183 parser: `RMC` sentences only.

use std::fmt;

use crate::model::constants::MPS_PER_KNOT;

/// Fields of a valid `RMC` sentence that the overlay cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RmcFix {
    /// Speed over ground in meters per second.
    pub speed_mps: f32,
    /// Latitude in decimal degrees, north positive.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees, east positive.
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NmeaError {
    /// Not a `$..RMC` sentence.
    NotRmc,
    /// Checksum present but does not match.
    BadChecksum { expected: u8, actual: u8 },
    /// Receiver reports no valid fix (status `V`).
    Void,
    /// Speed field empty or unparsable.
    MissingSpeed,
    /// Structurally broken sentence.
    Malformed(&'static str),
}

impl fmt::Display for NmeaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NmeaError::NotRmc => f.write_str("not an RMC sentence"),
            NmeaError::BadChecksum { expected, actual } => {
                write!(f, "checksum mismatch: expected {expected:02X}, got {actual:02X}")
            }
            NmeaError::Void => f.write_str("no fix"),
            NmeaError::MissingSpeed => f.write_str("missing speed over ground"),
            NmeaError::Malformed(why) => write!(f, "malformed sentence: {why}"),
        }
    }
}

impl std::error::Error for NmeaError {}

/// XOR of all bytes in `body` (the text between `$` and `*`).
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0, |acc, b| acc ^ b)
}

/// Parses one line. Trailing whitespace / CRLF is ignored.
pub fn parse_rmc(line: &str) -> Result<RmcFix, NmeaError> {
    let line = line.trim();
    let body = line
        .strip_prefix('$')
        .ok_or(NmeaError::Malformed("missing '$'"))?;

    let body = match body.split_once('*') {
        Some((data, sum)) => {
            let expected = u8::from_str_radix(sum.get(..2).unwrap_or(sum), 16)
                .map_err(|_| NmeaError::Malformed("bad checksum digits"))?;
            let actual = checksum(data);
            if expected != actual {
                return Err(NmeaError::BadChecksum { expected, actual });
            }
            data
        }
        None => body,
    };

    let fields: Vec<&str> = body.split(',').collect();
    let kind = fields[0];
    if kind.len() != 5 || !kind.ends_with("RMC") {
        return Err(NmeaError::NotRmc);
    }
    if fields.len() < 8 {
        return Err(NmeaError::Malformed("too few fields"));
    }

    if fields[2] != "A" {
        return Err(NmeaError::Void);
    }

    let knots: f32 = fields[7].parse().map_err(|_| NmeaError::MissingSpeed)?;

    Ok(RmcFix {
        speed_mps: knots * MPS_PER_KNOT,
        latitude: parse_coordinate(fields[3], fields[4], 'S'),
        longitude: parse_coordinate(fields[5], fields[6], 'W'),
    })
}

/// `ddmm.mmmm` / `dddmm.mmmm` plus hemisphere into signed decimal degrees.
fn parse_coordinate(raw: &str, hemisphere: &str, negative: char) -> Option<f64> {
    let value: f64 = raw.parse().ok()?;
    let degrees = (value / 100.0).trunc();
    let minutes = value - degrees * 100.0;
    let decimal = degrees + minutes / 60.0;
    if hemisphere.starts_with(negative) {
        Some(-decimal)
    } else {
        Some(decimal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RMC: &str = "$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A";

    #[test]
    fn parses_reference_sentence() {
        let fix = parse_rmc(RMC).unwrap();
        assert!((fix.speed_mps - 22.4 * MPS_PER_KNOT).abs() < 1e-4);
        assert!((fix.latitude.unwrap() - (48.0 + 7.038 / 60.0)).abs() < 1e-9);
        assert!((fix.longitude.unwrap() - (11.0 + 31.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn accepts_crlf_and_other_talkers() {
        let body = "GNRMC,000000,A,5200.000,S,00430.000,W,1.0,0,010120,,";
        let line = format!("${}*{:02X}\r\n", body, checksum(body));
        let fix = parse_rmc(&line).unwrap();
        assert!((fix.speed_mps - MPS_PER_KNOT).abs() < 1e-6);
        assert!(fix.latitude.unwrap() < 0.0);
        assert!(fix.longitude.unwrap() < 0.0);
    }

    #[test]
    fn checksum_is_optional() {
        let fix = parse_rmc("$GPRMC,1,A,,,,,2.0,,,,").unwrap();
        assert_eq!(fix.latitude, None);
        assert!((fix.speed_mps - 2.0 * MPS_PER_KNOT).abs() < 1e-6);
    }

    #[test]
    fn rejects_bad_checksum() {
        let line = RMC.replace("*6A", "*00");
        assert!(matches!(parse_rmc(&line), Err(NmeaError::BadChecksum { .. })));
    }

    #[test]
    fn rejects_void_fix() {
        let body = "GPRMC,123519,V,,,,,,,230394,,";
        let line = format!("${}*{:02X}", body, checksum(body));
        assert_eq!(parse_rmc(&line), Err(NmeaError::Void));
    }

    #[test]
    fn rejects_empty_speed() {
        assert_eq!(
            parse_rmc("$GPRMC,1,A,4807.038,N,01131.000,E,,,,,"),
            Err(NmeaError::MissingSpeed)
        );
    }

    #[test]
    fn other_sentences_are_not_rmc() {
        assert_eq!(
            parse_rmc("$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"),
            Err(NmeaError::NotRmc)
        );
        assert!(matches!(parse_rmc("garbage"), Err(NmeaError::Malformed(_))));
    }
}
