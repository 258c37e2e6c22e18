use chrono::{DateTime, FixedOffset, NaiveDate};

/// One line of a cookie log: `cookie,timestamp`.
#[derive(PartialEq, Debug, Clone)]
pub struct CookieRecord {
    pub cookie: String,
    pub timestamp: DateTime<FixedOffset>,
}

impl CookieRecord {
    /// Calendar date in the offset the timestamp was written with.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

pub fn parse(line: &str) -> Result<CookieRecord, String> {
    let (cookie, timestamp) = line
        .split_once(',')
        .ok_or_else(|| format!("expected `cookie,timestamp`, got {line:?}"))?;
    if timestamp.contains(',') {
        return Err(format!("too many fields in {line:?}"));
    }
    if cookie.is_empty() {
        return Err("empty cookie".to_string());
    }

    let timestamp = DateTime::parse_from_rfc3339(timestamp.trim())
        .map_err(|err| format!("invalid timestamp {timestamp:?}: {err}"))?;

    Ok(CookieRecord {
        cookie: cookie.to_owned(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let record = parse("AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00").unwrap();
        assert_eq!(record.cookie, "AtY0laUfhglK3lC7");
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2018, 12, 9).unwrap());
        assert_eq!(record.timestamp.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_date_keeps_embedded_offset() {
        // 2018-12-10T04:50 in UTC, but still the 9th where it was logged
        let record = parse("SAZuXPGUrfbcn5UA,2018-12-09T23:50:00-05:00").unwrap();
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2018, 12, 9).unwrap());

        let record = parse("SAZuXPGUrfbcn5UA,2018-12-10T01:00:00+09:00").unwrap();
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2018, 12, 10).unwrap());
    }

    #[test]
    fn test_parse_errors() {
        for line in [
            "AtY0laUfhglK3lC7",
            "AtY0laUfhglK3lC7;2018-12-09T14:19:00+00:00",
            ",2018-12-09T14:19:00+00:00",
            "AtY0laUfhglK3lC7,2018-12-09",
            "AtY0laUfhglK3lC7,yesterday",
            "a,b,2018-12-09T14:19:00+00:00",
        ] {
            assert!(parse(line).is_err(), "Expected error for: {}", line);
        }
    }
}
