use chrono::NaiveDate;
use serde::Deserialize;

use super::error::ApiError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Query-string pagination for the user listing endpoints.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub page_id: i32,
    pub page_size: i32,
}

impl PaginationQuery {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.page_id < 1 {
            return Err(ApiError::validation("page_id must be at least 1"));
        }
        if self.page_size < 10 || self.page_size > 1000 {
            return Err(ApiError::validation("page_size must be between 10 and 1000"));
        }
        Ok(())
    }

    pub fn limit(&self) -> i64 {
        self.page_size as i64
    }

    pub fn offset(&self) -> i64 {
        ((self.page_id - 1) * self.page_size) as i64
    }
}

/// Optional date bounds on the per-user listing endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// How a listing should be bounded once the date parameters are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListWindow {
    All,
    Period { start: NaiveDate, end: NaiveDate },
}

impl DateRangeQuery {
    /// Resolves the optional bounds into a listing window. Both dates absent
    /// means an unbounded listing; both present means an inclusive period;
    /// one without the other is a validation error.
    pub fn resolve(&self) -> Result<ListWindow, ApiError> {
        match (self.start_date.as_deref(), self.end_date.as_deref()) {
            (None, None) => Ok(ListWindow::All),
            (Some(start), Some(end)) => Ok(ListWindow::Period {
                start: parse_date(start)?,
                end: parse_date(end)?,
            }),
            _ => Err(ApiError::validation(
                "start_date and end_date must be provided together",
            )),
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ApiError::validation(format!("invalid date '{value}', expected YYYY-MM-DD")))
}

pub fn validate_id(id: i64) -> Result<(), ApiError> {
    if id < 1 {
        return Err(ApiError::validation("id must be at least 1"));
    }
    Ok(())
}
