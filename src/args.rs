//! parse and validate the positional arguments of the generator
//!
//! all the parsers have the shape expected by `clap`'s `value_parser`.
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::error::ExpRvError;

fn invalid(name: &'static str, value: &str, reason: impl ToString) -> ExpRvError {
    ExpRvError::InvalidArgument {
        name,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// parses the number of samples, a non-negative integer
pub fn parse_count(s: &str) -> Result<u64, ExpRvError> {
    s.parse().map_err(|e| invalid("n", s, e))
}

/// parses the rate of the distribution
///
/// the rate has to be a finite and strictly positive real number, otherwise
/// the samples would be infinite, `NaN` or negative.
pub fn parse_rate(s: &str) -> Result<f64, ExpRvError> {
    let rate: f64 = s.parse().map_err(|e| invalid("lambda", s, e))?;

    if !rate.is_finite() {
        return Err(invalid("lambda", s, "rate should be finite"));
    }
    if rate <= 0.0 {
        return Err(invalid("lambda", s, "rate should be strictly positive"));
    }

    Ok(rate)
}

pub fn parse_seed(s: &str) -> Result<u64, ExpRvError> {
    s.parse().map_err(|e| invalid("seed", s, e))
}

/// the number of seconds since the Unix epoch
///
/// two runs started during the same second will share their seed.
pub fn default_seed() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.as_secs(),
        Err(e) => {
            warn!("system clock is before the Unix epoch ({e}), using 0 as the seed");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ExpRvError;

    use super::{default_seed, parse_count, parse_rate, parse_seed};

    fn invalid_template<T: std::fmt::Debug>(
        parser: fn(&str) -> Result<T, ExpRvError>,
        input: &str,
        expected_name: &str,
    ) {
        match parser(input) {
            Err(ExpRvError::InvalidArgument { name, value, .. }) => {
                assert_eq!(name, expected_name, "TEST | input: {input:?}");
                assert_eq!(value, input, "TEST | input: {input:?}");
            }
            Ok(x) => panic!("{input:?} should be rejected, got {x:?}"),
        }
    }

    #[test]
    fn count() {
        assert_eq!(parse_count("0"), Ok(0));
        assert_eq!(parse_count("5"), Ok(5));
        assert_eq!(parse_count("18446744073709551615"), Ok(u64::MAX));

        invalid_template(parse_count, "", "n");
        invalid_template(parse_count, "abc", "n");
        invalid_template(parse_count, "12abc", "n");
        invalid_template(parse_count, "-1", "n");
        invalid_template(parse_count, "1.5", "n");
        invalid_template(parse_count, "18446744073709551616", "n");
    }

    #[test]
    fn rate() {
        assert_eq!(parse_rate("2"), Ok(2.0));
        assert_eq!(parse_rate("0.5"), Ok(0.5));
        assert_eq!(parse_rate("1e-3"), Ok(0.001));

        invalid_template(parse_rate, "", "lambda");
        invalid_template(parse_rate, "fast", "lambda");
        invalid_template(parse_rate, "0", "lambda");
        invalid_template(parse_rate, "-0.0", "lambda");
        invalid_template(parse_rate, "-2", "lambda");
        invalid_template(parse_rate, "inf", "lambda");
        invalid_template(parse_rate, "NaN", "lambda");
    }

    #[test]
    fn seed() {
        assert_eq!(parse_seed("42"), Ok(42));
        assert_eq!(parse_seed("4000000000"), Ok(4_000_000_000));

        invalid_template(parse_seed, "forty-two", "seed");
        invalid_template(parse_seed, "-42", "seed");
    }

    #[test]
    fn error_message() {
        let err = parse_rate("0").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"invalid value "0" for `lambda`: rate should be strictly positive"#
        );
    }

    #[test]
    fn seed_from_clock() {
        // 2020-01-01T00:00:00Z
        assert!(default_seed() > 1_577_836_800);
    }
}
