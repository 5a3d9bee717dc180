use std::env;

use anyhow::Context;
use log::info;
use serde::Deserialize;
use url::Url;

use crate::planner::Suggestion;
use crate::sink::TaskBoardSink;

#[derive(Debug, Clone, Deserialize)]
struct Created {
    id: String,
}

/// Creates boards, lists and cards on trello.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrelloClient {
    key: String,
    token: String,
    base_url: String,
}

impl TrelloClient {
    pub const KEY_VAR: &'static str = "TRELLO_KEY";
    pub const TOKEN_VAR: &'static str = "TRELLO_TOKEN";
    const BASE_URL: &'static str = "https://api.trello.com/1/";

    #[must_use]
    pub fn new(key: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            token: token.into(),
            base_url: Self::BASE_URL.to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let key = env::var(Self::KEY_VAR)
            .with_context(|| format!("missing trello key in \"{}\"", Self::KEY_VAR))?;
        let token = env::var(Self::TOKEN_VAR)
            .with_context(|| format!("missing trello token in \"{}\"", Self::TOKEN_VAR))?;

        Ok(Self::new(key, token))
    }

    /// Sends the requests to another server, the url should end with a `/`.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url<'a>(
        &self,
        path: &[&str],
        params: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .with_context(|| format!("invalid trello url \"{}\"", self.base_url))?;

        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("trello url \"{}\" can not have a path", self.base_url))?
            .pop_if_empty()
            .extend(path);

        url.query_pairs_mut()
            .extend_pairs(params)
            .append_pair("key", &self.key)
            .append_pair("token", &self.token);

        Ok(url)
    }

    /// Posts to the url and returns the id of the created object.
    fn create(&self, kind: &str, url: Url) -> anyhow::Result<String> {
        let response = minreq::post(url.as_str())
            .send()
            .with_context(|| format!("failed to create {}", kind))?;

        if response.status_code != 200 {
            anyhow::bail!(
                "failed to create {} - status code: {}",
                kind,
                response.status_code
            );
        }

        let created: Created = serde_json::from_slice(response.as_bytes())
            .with_context(|| format!("failed to create {} - unexpected response", kind))?;

        Ok(created.id)
    }

    pub fn create_board(&self, name: &str) -> anyhow::Result<String> {
        let url = self.url(&["boards", ""], [("name", name), ("defaultLists", "false")])?;
        self.create("board", url)
    }

    pub fn create_list(&self, board_id: &str, name: &str, pos: &str) -> anyhow::Result<String> {
        let url = self.url(&["boards", board_id, "lists"], [("name", name), ("pos", pos)])?;
        self.create("list", url)
    }

    pub fn create_card(&self, list_id: &str, name: &str) -> anyhow::Result<String> {
        let url = self.url(&["cards"], [("idList", list_id), ("name", name)])?;
        self.create("card", url)
    }
}

/// Puts every suggestion as a card on a new trello board.
#[derive(Debug, Clone)]
pub struct TrelloBoard {
    client: TrelloClient,
    board_name: String,
    list_name: String,
}

impl TrelloBoard {
    pub const DEFAULT_BOARD_NAME: &'static str = "Vacation Planner";
    pub const DEFAULT_LIST_NAME: &'static str = "Suggestions";

    #[must_use]
    pub fn new(client: TrelloClient) -> Self {
        Self {
            client,
            board_name: Self::DEFAULT_BOARD_NAME.to_string(),
            list_name: Self::DEFAULT_LIST_NAME.to_string(),
        }
    }

    #[must_use]
    pub fn with_names(mut self, board_name: impl Into<String>, list_name: impl Into<String>) -> Self {
        self.board_name = board_name.into();
        self.list_name = list_name.into();
        self
    }

    #[must_use]
    pub fn card_name(suggestion: &Suggestion) -> String {
        format!(
            "{} - {}: {} days of vacation for {} days of leave",
            suggestion.start(),
            suggestion.end(),
            suggestion.vacation_days(),
            suggestion.leave_days()
        )
    }
}

impl TaskBoardSink for TrelloBoard {
    fn publish(&mut self, suggestions: &[Suggestion]) -> anyhow::Result<()> {
        let board_id = self.client.create_board(&self.board_name)?;
        info!("created board \"{}\" ({})", self.board_name, board_id);

        let list_id = self.client.create_list(&board_id, &self.list_name, "1")?;

        for suggestion in suggestions {
            let name = Self::card_name(suggestion);
            self.client.create_card(&list_id, &name)?;
            info!("created card \"{}\"", name);
        }

        Ok(())
    }
}
