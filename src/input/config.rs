use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use log::info;
use serde::Deserialize;

use crate::planner::{
    DuplicatePolicy, GapBridgeAdvisor, Planner, PlannerOptions, RunDetector, RunStrategy,
};
use crate::sink::{TrelloBoard, TrelloClient};
use crate::source::{AustrianHolidays, GoogleCalendar, HolidaySource, JsonFileHolidays};
use crate::time::{Date, DateRange};
use crate::utils;

#[derive(Debug, Clone, Deserialize)]
struct RangeSection {
    #[serde(with = "utils::serde_toml_local_date")]
    start: Date,
    #[serde(with = "utils::serde_toml_local_date")]
    end: Date,
}

const fn default_min_run_length() -> usize {
    RunDetector::DEFAULT_MIN_LENGTH
}

const fn default_max_bridge_gap() -> usize {
    GapBridgeAdvisor::DEFAULT_MAX_GAP
}

#[derive(Debug, Clone, Deserialize)]
struct PlannerSection {
    #[serde(default = "default_min_run_length")]
    min_run_length: usize,
    #[serde(default = "default_max_bridge_gap")]
    max_bridge_gap: usize,
    #[serde(default)]
    runs: RunStrategy,
    #[serde(default)]
    duplicates: DuplicatePolicy,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            min_run_length: default_min_run_length(),
            max_bridge_gap: default_max_bridge_gap(),
            runs: RunStrategy::default(),
            duplicates: DuplicatePolicy::default(),
        }
    }
}

/// Which [`HolidaySource`] to ask for the holidays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SourceKind {
    #[default]
    Google,
    File,
    Austria,
}

impl FromStr for SourceKind {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string {
            "google" => Ok(Self::Google),
            "file" => Ok(Self::File),
            "austria" => Ok(Self::Austria),
            _ => Err(anyhow::anyhow!("Unknown holiday source: {}", string)),
        }
    }
}

impl TryFrom<String> for SourceKind {
    type Error = <Self as FromStr>::Err;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        Self::from_str(&string)
    }
}

fn default_calendar_id() -> String {
    GoogleCalendar::DEFAULT_CALENDAR_ID.to_string()
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("data")
}

#[derive(Debug, Clone, Deserialize)]
struct CalendarSection {
    #[serde(default)]
    source: SourceKind,
    #[serde(default = "default_calendar_id")]
    id: String,
    #[serde(default = "default_cache_dir")]
    cache_dir: PathBuf,
    file: Option<PathBuf>,
}

impl Default for CalendarSection {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            id: default_calendar_id(),
            cache_dir: default_cache_dir(),
            file: None,
        }
    }
}

fn default_board_name() -> String {
    TrelloBoard::DEFAULT_BOARD_NAME.to_string()
}

fn default_list_name() -> String {
    TrelloBoard::DEFAULT_LIST_NAME.to_string()
}

#[derive(Debug, Clone, Deserialize)]
struct BoardSection {
    #[serde(default = "default_board_name")]
    name: String,
    #[serde(default = "default_list_name")]
    list: String,
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            name: default_board_name(),
            list: default_list_name(),
        }
    }
}

/// The contents of the configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    range: RangeSection,
    #[serde(default)]
    planner: PlannerSection,
    #[serde(default)]
    calendar: CalendarSection,
    #[serde(default)]
    board: BoardSection,
}

#[derive(Debug, Clone)]
pub struct Config {
    range: DateRange,
    options: PlannerOptions,
    source: SourceKind,
    calendar_id: String,
    cache_dir: PathBuf,
    holidays_file: Option<PathBuf>,
    board_name: String,
    list_name: String,
}

/// Collects the overrides for a [`ConfigFile`], the result is validated by
/// [`ConfigBuilder::build`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    workspace: Option<PathBuf>,
    file: ConfigFile,
    start: Option<Date>,
    end: Option<Date>,
    min_run_length: Option<usize>,
    max_bridge_gap: Option<usize>,
    source: Option<SourceKind>,
}

impl ConfigBuilder {
    fn new(file: ConfigFile) -> Self {
        Self {
            workspace: None,
            file,
            start: None,
            end: None,
            min_run_length: None,
            max_bridge_gap: None,
            source: None,
        }
    }

    /// Relative paths in the config file are resolved against the workspace.
    pub fn workspace(&mut self, workspace: impl Into<PathBuf>) -> &mut Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn start(&mut self, start: Date) -> &mut Self {
        self.start = Some(start);
        self
    }

    pub fn end(&mut self, end: Date) -> &mut Self {
        self.end = Some(end);
        self
    }

    pub fn min_run_length(&mut self, min_run_length: usize) -> &mut Self {
        self.min_run_length = Some(min_run_length);
        self
    }

    pub fn max_bridge_gap(&mut self, max_bridge_gap: usize) -> &mut Self {
        self.max_bridge_gap = Some(max_bridge_gap);
        self
    }

    pub fn source(&mut self, source: SourceKind) -> &mut Self {
        self.source = Some(source);
        self
    }

    fn resolve(workspace: Option<&Path>, path: PathBuf) -> PathBuf {
        match workspace {
            Some(workspace) if path.is_relative() => workspace.join(path),
            _ => path,
        }
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let ConfigFile {
            range,
            planner,
            calendar,
            board,
        } = self.file;

        let range = DateRange::new(
            self.start.unwrap_or(range.start),
            self.end.unwrap_or(range.end),
        )?;

        let options = PlannerOptions::default()
            .with_min_run_length(self.min_run_length.unwrap_or(planner.min_run_length))
            .with_max_bridge_gap(self.max_bridge_gap.unwrap_or(planner.max_bridge_gap))
            .with_runs(planner.runs)
            .with_duplicates(planner.duplicates);

        let source = self.source.unwrap_or(calendar.source);
        if source == SourceKind::File && calendar.file.is_none() {
            anyhow::bail!("the holiday source \"file\" needs a `file` in the [calendar] section");
        }

        let workspace = self.workspace.as_deref();

        Ok(Config {
            range,
            options,
            source,
            calendar_id: calendar.id,
            cache_dir: Self::resolve(workspace, calendar.cache_dir),
            holidays_file: calendar.file.map(|file| Self::resolve(workspace, file)),
            board_name: board.name,
            list_name: board.list,
        })
    }
}

impl Config {
    pub fn try_from_toml(file: &str) -> anyhow::Result<ConfigBuilder> {
        Ok(ConfigBuilder::new(toml::from_str(file)?))
    }

    /// Reads the config file, relative paths in it are relative to the
    /// directory of the file.
    pub fn try_from_toml_file(path: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let path = path.as_ref();
        let mut builder = Self::try_from_toml(
            &utils::read_to_string(path)
                .with_context(|| format!("failed to read config \"{}\"", path.display()))?,
        )
        .with_context(|| format!("invalid config \"{}\"", path.display()))?;

        if let Some(parent) = path.parent() {
            builder.workspace(parent);
        }

        Ok(builder)
    }

    #[must_use]
    pub fn range(&self) -> DateRange {
        self.range
    }

    #[must_use]
    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    #[must_use]
    pub fn planner(&self) -> Planner {
        Planner::new(self.options)
    }

    #[must_use]
    pub fn source(&self) -> SourceKind {
        self.source
    }

    #[must_use]
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    #[must_use]
    pub fn holidays_file(&self) -> Option<&Path> {
        self.holidays_file.as_deref()
    }

    pub fn holiday_source(&self) -> anyhow::Result<Box<dyn HolidaySource>> {
        info!("using the {:?} holiday source", self.source);

        Ok(match self.source {
            SourceKind::Google => Box::new(GoogleCalendar::from_env(
                self.calendar_id.clone(),
                self.cache_dir.clone(),
            )?),
            SourceKind::File => Box::new(JsonFileHolidays::new(
                self.holidays_file
                    .clone()
                    .context("missing holidays file")?,
            )),
            SourceKind::Austria => Box::new(AustrianHolidays),
        })
    }

    pub fn task_board(&self) -> anyhow::Result<TrelloBoard> {
        Ok(TrelloBoard::new(TrelloClient::from_env()?)
            .with_names(self.board_name.clone(), self.list_name.clone()))
    }

    /// Asks the holiday source for the holidays in the configured range.
    pub fn holidays(&self) -> anyhow::Result<Vec<Date>> {
        self.holiday_source()?.holidays(self.range)
    }
}
