use chrono::{Duration, NaiveDate};
use thiserror::Error;
use urlencoding::encode;

use super::facts::SpaceFact;
use crate::constants::DEFAULT_RANGE_DAYS;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a search is refused before any request goes out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select both start and end dates.")]
    MissingInput,
    #[error("Start date must be before end date.")]
    InvertedRange,
    #[error("'{value}' is not a valid date (expected YYYY-MM-DD).")]
    InvalidDate { value: String },
    #[error("Date range spans {days} days; the maximum is {max}.")]
    RangeTooLong { days: i64, max: u32 },
}

/// A validated, inclusive date range in the provider's `YYYY-MM-DD` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    /// Validate raw form values.
    ///
    /// The strings are passed through unchanged on success since the provider
    /// accepts exactly what a date input produces.
    ///
    /// # Errors
    ///
    /// See [`ValidationError`].
    pub fn parse(
        start: Option<&str>,
        end: Option<&str>,
        max_span_days: Option<u32>,
    ) -> Result<Self, ValidationError> {
        let (Some(start), Some(end)) = (non_blank(start), non_blank(end)) else {
            return Err(ValidationError::MissingInput);
        };

        let start_date = parse_date(start)?;
        let end_date = parse_date(end)?;

        if start_date > end_date {
            return Err(ValidationError::InvertedRange);
        }

        if let Some(max) = max_span_days {
            let days = (end_date - start_date).num_days() + 1;
            if days > i64::from(max) {
                return Err(ValidationError::RangeTooLong { days, max });
            }
        }

        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }

    /// The range the search form is prefilled with: the last few days up to `today`.
    #[must_use]
    pub fn default_for(today: NaiveDate) -> Self {
        let start = today - Duration::days(DEFAULT_RANGE_DAYS - 1);
        Self {
            start: start.format(DATE_FORMAT).to_string(),
            end: today.format(DATE_FORMAT).to_string(),
        }
    }

    /// Link to the gallery page for this range showing `fact`, optionally
    /// with one entry's detail view open.
    #[must_use]
    pub fn page_href(&self, fact: SpaceFact, view: Option<&str>) -> String {
        let base = format!(
            "/?start_date={}&end_date={}&fact={}",
            encode(&self.start),
            encode(&self.end),
            fact.index()
        );
        match view {
            Some(date) => format!("{base}&view={}", encode(date)),
            None => base,
        }
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: value.to_string(),
    })
}
