use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::source::HolidaySource;
use crate::time::{Date, DateRange, InvalidDate};
use crate::utils;

/// The event list returned by the calendar service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Events {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    next_sync_token: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<Item>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    summary: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default)]
    start: EventStart,
}

/// All-day events only have a date. An event with a time of day has none,
/// which makes [`Events::holidays`] fail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventStart {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    date: String,
}

impl Item {
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn date(&self) -> Result<Date, InvalidDate> {
        self.start.date.parse()
    }
}

impl Events {
    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter()
    }

    /// The start dates of all events.
    ///
    /// # Errors
    ///
    /// If an event does not start on a plain date.
    pub fn holidays(&self) -> Result<Vec<Date>, InvalidDate> {
        self.items.iter().map(Item::date).collect()
    }

    pub fn holidays_in(&self, range: DateRange) -> Result<Vec<Date>, InvalidDate> {
        let mut holidays = self.holidays()?;
        holidays.retain(|date| range.contains(date));
        Ok(holidays)
    }
}

/// Fetches the holidays from a public google calendar.
///
/// The response is cached in `{cache_dir}/{calendar_id}.json` and later
/// calls read the cached file instead of asking the service again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoogleCalendar {
    calendar_id: String,
    api_key: String,
    cache_dir: PathBuf,
    base_url: String,
}

impl GoogleCalendar {
    pub const DEFAULT_CALENDAR_ID: &'static str = "en.austrian#holiday@group.v.calendar.google.com";
    pub const API_KEY_VAR: &'static str = "GCP_API_KEY";
    const BASE_URL: &'static str = "https://www.googleapis.com/calendar/v3/";

    #[must_use]
    pub fn new(
        calendar_id: impl Into<String>,
        api_key: impl Into<String>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            api_key: api_key.into(),
            cache_dir: cache_dir.into(),
            base_url: Self::BASE_URL.to_string(),
        }
    }

    /// Like [`GoogleCalendar::new`], with the api key from the environment.
    pub fn from_env(
        calendar_id: impl Into<String>,
        cache_dir: impl Into<PathBuf>,
    ) -> anyhow::Result<Self> {
        let api_key = env::var(Self::API_KEY_VAR)
            .with_context(|| format!("missing api key in \"{}\"", Self::API_KEY_VAR))?;

        Ok(Self::new(calendar_id, api_key, cache_dir))
    }

    /// Sends the requests to another server, the url should end with a `/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    #[must_use]
    pub fn cache_file(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.json", self.calendar_id))
    }

    fn url(&self, range: DateRange) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid calendar url \"{}\"", self.base_url))?;

        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("calendar url \"{}\" can not have a path", self.base_url))?
            .pop_if_empty()
            .extend(["calendars", self.calendar_id.as_str(), "events"]);

        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("timeMin", &range.start().to_rfc3339())
            .append_pair("timeMax", &range.end().to_rfc3339());

        Ok(url)
    }

    fn fetch(&self, range: DateRange) -> anyhow::Result<Events> {
        info!("Initiating GET request for \"{}\"", self.calendar_id);

        let response = minreq::get(self.url(range)?.as_str())
            .send()
            .with_context(|| format!("failed to fetch the calendar \"{}\"", self.calendar_id))?;

        if response.status_code != 200 {
            anyhow::bail!(
                "failed to fetch the calendar \"{}\" - status code: {}",
                self.calendar_id,
                response.status_code
            );
        }

        serde_json::from_slice(response.as_bytes())
            .with_context(|| format!("unexpected response for \"{}\"", self.calendar_id))
    }

    fn read_cache(path: &Path) -> anyhow::Result<Events> {
        let data = utils::read_to_string(path)
            .with_context(|| format!("failed to read cache \"{}\"", path.display()))?;

        serde_json::from_str(&data)
            .with_context(|| format!("failed to parse cache \"{}\"", path.display()))
    }

    fn write_cache(&self, path: &Path, events: &Events) -> anyhow::Result<()> {
        fs::create_dir_all(&self.cache_dir)?;
        utils::write(path, serde_json::to_string_pretty(events)?)
            .with_context(|| format!("failed to write cache \"{}\"", path.display()))
    }

    /// Returns the cached events or fetches them.
    pub fn events(&self, range: DateRange) -> anyhow::Result<Events> {
        let cache_file = self.cache_file();

        if cache_file.is_file() {
            info!("Skipping GET request, using \"{}\"", cache_file.display());
            return Self::read_cache(&cache_file);
        }

        let events = self.fetch(range)?;
        self.write_cache(&cache_file, &events)?;

        Ok(events)
    }
}

impl HolidaySource for GoogleCalendar {
    fn holidays(&self, range: DateRange) -> anyhow::Result<Vec<Date>> {
        let holidays = self.events(range)?.holidays_in(range)?;
        debug!(
            "found {} holidays in {} for \"{}\"",
            holidays.len(),
            range,
            self.calendar_id
        );

        Ok(holidays)
    }
}
