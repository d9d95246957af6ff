// Random but plausible sensor readings for the "Sample Data" button.

use rand::seq::SliceRandom;
use rand::Rng;

/// Combined wind direction codes accepted by the backend.
pub const WIND_DIRECTIONS: [&str; 5] = ["NW", "NE", "SE", "SW", "cv"];

/// One reading per sensor field, formatted as the form expects it.
pub fn sample_readings<R: Rng + ?Sized>(rng: &mut R) -> Vec<(&'static str, String)> {
    let wind = WIND_DIRECTIONS
        .choose(rng)
        .copied()
        .unwrap_or(WIND_DIRECTIONS[0]);

    vec![
        ("DEWP", rng.gen_range(-20..20).to_string()),
        ("TEMP", rng.gen_range(-10..30).to_string()),
        ("PRES", rng.gen_range(980..1020).to_string()),
        ("Iws", format!("{:.2}", rng.gen::<f64>() * 40.0)),
        ("Is", precipitation_flag(rng)),
        ("Ir", precipitation_flag(rng)),
        ("cbwd", wind.to_string()),
        ("hour", rng.gen_range(0..24).to_string()),
        ("month", rng.gen_range(1..=12).to_string()),
        ("pm2_5_lag1", format!("{:.1}", rng.gen::<f64>() * 300.0)),
    ]
}

// Snow/rain hours are rare; one reading in ten reports any.
fn precipitation_flag<R: Rng + ?Sized>(rng: &mut R) -> String {
    let flag = if rng.gen_bool(0.1) { "1" } else { "0" };
    flag.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn value<'a>(readings: &'a [(&'static str, String)], field: &str) -> &'a str {
        readings
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, v)| v.as_str())
            .unwrap()
    }

    #[test]
    fn test_covers_every_field_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let readings = sample_readings(&mut rng);
        let names: Vec<_> = readings.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["DEWP", "TEMP", "PRES", "Iws", "Is", "Ir", "cbwd", "hour", "month", "pm2_5_lag1"]
        );
    }

    #[test]
    fn test_ranges_hold() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let r = sample_readings(&mut rng);
            let int = |f: &str| value(&r, f).parse::<i64>().unwrap();
            assert!((-20..=19).contains(&int("DEWP")));
            assert!((-10..=29).contains(&int("TEMP")));
            assert!((980..=1019).contains(&int("PRES")));
            assert!((0..=23).contains(&int("hour")));
            assert!((1..=12).contains(&int("month")));
            assert!(matches!(value(&r, "Is"), "0" | "1"));
            assert!(matches!(value(&r, "Ir"), "0" | "1"));
            assert!(WIND_DIRECTIONS.contains(&value(&r, "cbwd")));

            let iws = value(&r, "Iws");
            assert_eq!(iws.split('.').nth(1).map(str::len), Some(2), "{iws}");
            let iws: f64 = iws.parse().unwrap();
            assert!((0.0..=40.0).contains(&iws));

            let lag = value(&r, "pm2_5_lag1");
            assert_eq!(lag.split('.').nth(1).map(str::len), Some(1), "{lag}");
            let lag: f64 = lag.parse().unwrap();
            assert!((0.0..=300.0).contains(&lag));
        }
    }

    #[test]
    fn test_precipitation_flags_mostly_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        let snow_hours = (0..2000)
            .filter(|_| value(&sample_readings(&mut rng), "Is") == "1")
            .count();
        assert!(snow_hours > 100 && snow_hours < 320, "{snow_hours}");
    }
}
