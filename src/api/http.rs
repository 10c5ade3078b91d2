use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::api::wire::{
    ErrorBody, MoveRequest, RollResponse, SessionResponse, StateResponse, ValidMove, ValidMovesResponse,
};
use crate::api::{ApiError, GameId, GameService, Roll, Session};
use crate::backgammon::GameState;

/// [`GameService`] backed by the game service's HTTP API.
/// Calls are blocking and made one at a time.
pub struct HttpGameService {
    client: Client,
    base: Url,
}

impl HttpGameService {
    pub fn new(base: Url, timeout: Duration) -> Result<Self, ApiError> {
        if base.cannot_be_a_base() {
            return Err(ApiError::Address(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(HttpGameService { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends path segments to the base address, keeping any prefix it has.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Address(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn game_url(&self, game: &GameId, action: &str) -> Result<Url, ApiError> {
        self.url(&["api", "game", game.as_str(), action])
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        debug!(status, bytes = body.len(), "service response");
        decode_response(status, &body)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "GET");
        self.send(self.client.get(url))
    }

    fn post<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        debug!(%url, "POST");
        self.send(self.client.post(url))
    }
}

/// Decodes a response body, turning non-success statuses into [`ApiError`]s
/// carrying the service's `{"error": ...}` message when there is one.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        return Ok(serde_json::from_str(body)?);
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| format!("unexpected response with status {status}"));
    Err(ApiError::from_status(status, message))
}

impl GameService for HttpGameService {
    fn new_game(&self) -> Result<Session, ApiError> {
        let response: SessionResponse = self.post(self.url(&["api", "game", "new"])?)?;
        Ok(response.try_into()?)
    }

    fn state(&self, game: &GameId) -> Result<GameState, ApiError> {
        let response: StateResponse = self.get(self.game_url(game, "state")?)?;
        Ok(response.state.try_into()?)
    }

    fn roll(&self, game: &GameId) -> Result<Roll, ApiError> {
        let response: RollResponse = self.post(self.game_url(game, "roll")?)?;
        Ok(response.try_into()?)
    }

    fn valid_moves(&self, game: &GameId) -> Result<Vec<ValidMove>, ApiError> {
        let response: ValidMovesResponse = self.get(self.game_url(game, "valid-moves")?)?;
        Ok(response.valid_moves)
    }

    fn make_move(&self, game: &GameId, request: MoveRequest) -> Result<GameState, ApiError> {
        let url = self.game_url(game, "move")?;
        debug!(%url, ?request, "POST");
        let response: StateResponse = self.send(self.client.post(url).json(&request))?;
        Ok(response.state.try_into()?)
    }

    fn ai_move(&self, game: &GameId) -> Result<GameState, ApiError> {
        let response: StateResponse = self.post(self.game_url(game, "ai-move")?)?;
        Ok(response.state.try_into()?)
    }

    fn refresh(&self, game: &GameId) -> Result<Session, ApiError> {
        let response: SessionResponse = self.post(self.game_url(game, "refresh")?)?;
        Ok(response.try_into()?)
    }
}
