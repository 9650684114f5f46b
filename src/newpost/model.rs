use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// Extension of every post file.
pub const POST_EXTENSION: &str = "rst";

/// The values stamped into a new post, captured before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostStamp {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timezone: String,
}

impl PostStamp {
    pub fn new(id: Uuid, date: NaiveDate, timezone: impl Into<String>) -> Self {
        Self {
            id,
            date,
            timezone: timezone.into(),
        }
    }

    /// Captures the local date and timezone, then draws a fresh v4 id.
    ///
    /// The timezone is whatever chrono reports for the local offset (`%Z`),
    /// which is the numeric offset on most platforms.
    pub fn now() -> Self {
        let now = Local::now();
        let date = now.date_naive();
        let timezone = now.format("%Z").to_string();
        Self::new(Uuid::new_v4(), date, timezone)
    }

    /// `<uuid>.rst`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.id.hyphenated(), POST_EXTENSION)
    }

    /// Ordered `(key, value)` pairs written at the top of the post.
    pub fn metadata_fields(&self) -> [(&'static str, String); 3] {
        [
            ("date", self.date.format("%Y-%m-%d").to_string()),
            ("timezone", self.timezone.clone()),
            ("uuid", self.id.hyphenated().to_string()),
        ]
    }

    /// Renders the metadata block. Lines always end in a bare `\n`.
    pub fn to_metadata(&self) -> String {
        self.metadata_fields()
            .iter()
            .map(|(key, value)| format!(":{}: {}\n", key, value))
            .collect()
    }
}

/// A post that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timezone: String,
    pub path: PathBuf,
}

impl Post {
    pub fn from_stamp(stamp: PostStamp, path: PathBuf) -> Self {
        Self {
            id: stamp.id,
            date: stamp.date,
            timezone: stamp.timezone,
            path,
        }
    }
}
