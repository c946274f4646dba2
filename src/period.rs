use chrono::NaiveDate;

use crate::error::Error;

/// Date format the call diary endpoint expects: day/month/year.
pub const CALLS_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date format the lead diary endpoint expects: month/day/year.
///
/// The two endpoints really do disagree on this; the format is a parameter
/// of each URL builder rather than a single global constant.
pub const LEADS_DATE_FORMAT: &str = "%m/%d/%Y";

/// The date window a diary report is requested over, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

impl Period {
    pub fn new(date_from: NaiveDate, date_to: NaiveDate) -> Self {
        Period { date_from, date_to }
    }

    /// Rejects inverted windows before any request is issued.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.date_from > self.date_to {
            return Err(Error::InvalidWindow {
                date_from: self.date_from,
                date_to: self.date_to,
            });
        }
        Ok(())
    }

    /// Renders both bounds with the given record-kind format.
    pub(crate) fn format_with(&self, format: &str) -> (String, String) {
        (
            self.date_from.format(format).to_string(),
            self.date_to.format(format).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn inverted_window_is_rejected() {
        let period = Period::new(date(2024, 6, 2), date(2024, 6, 1));
        assert!(matches!(
            period.validate(),
            Err(Error::InvalidWindow { .. })
        ));
    }

    #[test]
    fn single_day_window_is_valid() {
        let period = Period::new(date(2024, 6, 1), date(2024, 6, 1));
        assert!(period.validate().is_ok());
    }

    #[test]
    fn formats_differ_per_record_kind() {
        let period = Period::new(date(2024, 6, 1), date(2024, 12, 31));
        let (from, to) = period.format_with(CALLS_DATE_FORMAT);
        assert_eq!(from, "01/06/2024");
        assert_eq!(to, "31/12/2024");

        let (from, to) = period.format_with(LEADS_DATE_FORMAT);
        assert_eq!(from, "06/01/2024");
        assert_eq!(to, "12/31/2024");
    }
}
