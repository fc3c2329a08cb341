//! # Post listing filter
//!
//! Query parameters of `GET /posts`. Only non-empty filters are emitted, in a
//! fixed order, so an empty filter produces no query string at all.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::PostStatus;

/// Timestamp format expected by the remote API for date bounds
pub const FILTER_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const START_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(0, 0, 0) {
    Some(time) => time,
    None => panic!("00:00:00 is a valid time"),
};

const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_opt(23, 59, 59) {
    Some(time) => time,
    None => panic!("23:59:59 is a valid time"),
};

/// Filter for the post listing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    content:   Option<String>,
    author:    Option<String>,
    from_date: Option<NaiveDateTime>,
    to_date:   Option<NaiveDateTime>,
    status:    Option<PostStatus>,
}

/// Blank strings mean "no filter"
fn non_blank(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    if value.trim().is_empty() { None } else { Some(value) }
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts of a single author
    pub fn by_author(author: impl Into<String>) -> Self {
        Self::new().with_author(author)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = non_blank(content);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = non_blank(author);
        self
    }

    pub fn with_from_date(mut self, from_date: Option<NaiveDateTime>) -> Self {
        self.from_date = from_date;
        self
    }

    pub fn with_to_date(mut self, to_date: Option<NaiveDateTime>) -> Self {
        self.to_date = to_date;
        self
    }

    pub fn with_status(mut self, status: Option<PostStatus>) -> Self {
        self.status = status;
        self
    }

    /// Restricts the listing to whole calendar days
    ///
    /// `from` starts at 00:00:00 and `to` ends at 23:59:59. A `to` day before
    /// the `from` day is dropped, leaving the range open-ended.
    pub fn within_days(self, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Self {
        let to = match (from, to) {
            (Some(from), Some(to)) if to < from => None,
            (_, to) => to,
        };
        self.with_from_date(from.map(|day| day.and_time(START_OF_DAY)))
            .with_to_date(to.map(|day| day.and_time(END_OF_DAY)))
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn from_date(&self) -> Option<NaiveDateTime> {
        self.from_date
    }

    pub fn to_date(&self) -> Option<NaiveDateTime> {
        self.to_date
    }

    pub fn status(&self) -> Option<PostStatus> {
        self.status
    }

    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Query parameters in wire order: content, author, fromDate, toDate, status
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(content) = &self.content {
            pairs.push(("content", content.clone()));
        }
        if let Some(author) = &self.author {
            pairs.push(("author", author.clone()));
        }
        if let Some(from_date) = self.from_date {
            pairs.push((
                "fromDate",
                from_date.format(FILTER_DATE_TIME_FORMAT).to_string(),
            ));
        }
        if let Some(to_date) = self.to_date {
            pairs.push(("toDate", to_date.format(FILTER_DATE_TIME_FORMAT).to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs
    }
}
