//! Game-mode endpoint calls and the game session controller.
//!
//! A game is an annotation session scored against a hidden reference
//! board: each step earns a reward, the game terminates once every open
//! cell is classified, and the reference board is revealed on termination
//! for the post-game comparison view.

use tempo_board::board::{Board, Mismatch};

use crate::wire::{
    GameRequest, GameStepRequest, GameStepResponse, NewGameRequest, NewGameResponse, StepAction,
};
use crate::{ClientError, TempoClient};

/// Inclusive bounds for the game difficulty level (number of entities).
pub const LEVEL_RANGE: std::ops::RangeInclusive<u8> = 2..=5;

impl TempoClient {
    /// Start a new game at the given difficulty level.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidLevel`] before any network traffic
    /// for a level outside 2..=5 — the same bounds the backend enforces.
    pub async fn new_game(&self, level: u8) -> Result<NewGameResponse, ClientError> {
        if !LEVEL_RANGE.contains(&level) {
            return Err(ClientError::InvalidLevel { level });
        }
        tracing::info!(level, "creating game");
        self.post("/api/new_game", &NewGameRequest { level }).await
    }

    /// Play one move.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Rejected`] with the server's message when
    /// the move or game id is invalid.
    pub async fn game_step(
        &self,
        game_id: &str,
        action: StepAction,
    ) -> Result<GameStepResponse, ClientError> {
        self.post("/api/step", &GameStepRequest { game_id, action })
            .await
    }

    /// Undo the most recent move. The cumulative reward is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoHistory`] when there is nothing to undo.
    pub async fn game_undo(&self, game_id: &str) -> Result<GameStepResponse, ClientError> {
        self.post("/api/undo", &GameRequest { game_id })
            .await
            .map_err(ClientError::into_undo)
    }
}

/// A live game, with the same last-known-good discipline as
/// [`crate::session::AnnotationSession`]: only a successful response
/// replaces local state, and `&mut self` serializes mutating calls.
pub struct GameSession<'a> {
    client: &'a TempoClient,
    game_id: String,
    level: u8,
    text: String,
    board: Board,
    entities: Vec<String>,
    reward: f64,
    terminated: bool,
    is_success: bool,
    true_board: Option<Board>,
    moves: usize,
}

impl<'a> GameSession<'a> {
    /// Start a game.
    ///
    /// # Errors
    ///
    /// Propagates [`TempoClient::new_game`] errors plus board shape
    /// validation failures.
    pub async fn start(client: &'a TempoClient, level: u8) -> Result<GameSession<'a>, ClientError> {
        let resp = client.new_game(level).await?;
        let board = Board::from_wire(&resp.board, resp.endpoints)?;
        Ok(Self {
            client,
            game_id: resp.game_id,
            level: resp.level,
            text: resp.text,
            board,
            entities: resp.entities,
            reward: resp.reward,
            terminated: resp.terminated,
            is_success: resp.is_success,
            true_board: None,
            moves: 0,
        })
    }

    /// Play one move and merge the response.
    ///
    /// # Errors
    ///
    /// Local state is unchanged when the server rejects the move or the
    /// returned board fails validation.
    pub async fn step(&mut self, action: StepAction) -> Result<(), ClientError> {
        let resp = self.client.game_step(&self.game_id, action).await?;
        self.merge(resp)?;
        self.moves += 1;
        Ok(())
    }

    /// Undo the most recent move. The reward stays at its cumulative
    /// value; only the board and termination state roll back.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoHistory`] when no move has been accepted.
    pub async fn undo(&mut self) -> Result<(), ClientError> {
        if self.moves == 0 {
            return Err(ClientError::NoHistory);
        }
        let resp = self.client.game_undo(&self.game_id).await?;
        self.merge(resp)?;
        self.moves -= 1;
        Ok(())
    }

    /// Cells where the annotation disagrees with the revealed reference
    /// board. `None` until the game has terminated.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Board`] if the two boards disagree on size.
    pub fn mismatches(&self) -> Result<Option<Vec<Mismatch>>, ClientError> {
        match &self.true_board {
            Some(reference) => Ok(Some(self.board.mismatches(reference)?)),
            None => Ok(None),
        }
    }

    fn merge(&mut self, resp: GameStepResponse) -> Result<(), ClientError> {
        let board = Board::from_wire(&resp.board, resp.endpoints)?;
        let true_board = match resp.true_board {
            Some(matrix) => Some(Board::from_wire(&matrix, board.endpoints().to_vec())?),
            None => None,
        };
        self.board = board;
        self.text = resp.text;
        self.entities = resp.entities;
        self.reward = resp.reward;
        self.terminated = resp.terminated;
        self.is_success = resp.is_success;
        if true_board.is_some() {
            self.true_board = true_board;
        }
        Ok(())
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }

    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Document text with entity spans wrapped in `<e0>…</e0>` tags.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Entity surface strings, in the server's entity order.
    #[must_use]
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    #[must_use]
    pub fn reward(&self) -> f64 {
        self.reward
    }

    #[must_use]
    pub fn terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.is_success
    }

    /// The reference board, revealed on termination.
    #[must_use]
    pub fn true_board(&self) -> Option<&Board> {
        self.true_board.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempo_board::cell::Cell;
    use tempo_core::relation::Relation;

    const NEW_GAME_FIXTURE: &str = r#"{
        "game_id": "7c9d8e2f-0a1b-4c3d-8e5f-6a7b8c9d0e1f",
        "text": "They <e0>said</e0> they will <e1>buy</e1> it.",
        "board": [
            [-2, -2, -1, -1],
            [-2, -2, -1, -1],
            [-2, -2, -2, -2],
            [-2, -2, -2, -2]
        ],
        "endpoints": ["start e0", "end e0", "start e1", "end e1"],
        "entities": ["said", "buy"],
        "reward": 0,
        "terminated": false,
        "is_success": false,
        "level": 2
    }"#;

    const TERMINAL_STEP_FIXTURE: &str = r#"{
        "text": "They <e0>said</e0> they will <e1>buy</e1> it.",
        "board": [
            [-2, -2, 1, 1],
            [-2, -2, 1, 1],
            [-2, -2, -2, -2],
            [-2, -2, -2, -2]
        ],
        "endpoints": ["start e0", "end e0", "start e1", "end e1"],
        "entities": ["said", "buy"],
        "reward": 3.0,
        "terminated": true,
        "is_success": false,
        "true_board": [
            [-2, -2, 1, 0],
            [-2, -2, 1, 1],
            [-2, -2, -2, -2],
            [-2, -2, -2, -2]
        ]
    }"#;

    fn game(client: &TempoClient) -> GameSession<'_> {
        let resp: NewGameResponse = serde_json::from_str(NEW_GAME_FIXTURE).unwrap();
        let board = Board::from_wire(&resp.board, resp.endpoints).unwrap();
        GameSession {
            client,
            game_id: resp.game_id,
            level: resp.level,
            text: resp.text,
            board,
            entities: resp.entities,
            reward: resp.reward,
            terminated: resp.terminated,
            is_success: resp.is_success,
            true_board: None,
            moves: 0,
        }
    }

    #[test]
    fn parse_new_game_response() {
        let resp: NewGameResponse = serde_json::from_str(NEW_GAME_FIXTURE).unwrap();
        assert_eq!(resp.level, 2);
        assert_eq!(resp.entities, vec!["said", "buy"]);
        assert!(!resp.terminated);
        assert!((resp.reward - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn terminal_step_reveals_the_reference_board() {
        let client = TempoClient::new("http://localhost:5000");
        let mut game = game(&client);

        let resp: GameStepResponse = serde_json::from_str(TERMINAL_STEP_FIXTURE).unwrap();
        game.merge(resp).unwrap();

        assert!(game.terminated());
        assert!((game.reward() - 3.0).abs() < f64::EPSILON);
        let reference = game.true_board().expect("revealed on termination");
        assert_eq!(
            reference.get(0, 3),
            Some(Cell::Classified(Relation::After))
        );

        let mismatches = game.mismatches().unwrap().unwrap();
        assert_eq!(mismatches.len(), 1);
        assert_eq!((mismatches[0].row, mismatches[0].col), (0, 3));
        assert_eq!(mismatches[0].annotated, Relation::Before);
        assert_eq!(mismatches[0].reference, Relation::After);
    }

    #[test]
    fn mismatches_are_unavailable_before_termination() {
        let client = TempoClient::new("http://localhost:5000");
        let game = game(&client);
        assert!(game.mismatches().unwrap().is_none());
    }

    #[tokio::test]
    async fn level_bounds_are_checked_client_side() {
        let client = TempoClient::new("http://localhost:5000");
        assert!(matches!(
            client.new_game(1).await,
            Err(ClientError::InvalidLevel { level: 1 })
        ));
        assert!(matches!(
            client.new_game(6).await,
            Err(ClientError::InvalidLevel { level: 6 })
        ));
    }

    #[tokio::test]
    async fn undo_with_no_moves_fails_locally() {
        let client = TempoClient::new("http://localhost:5000");
        let mut game = game(&client);
        assert!(matches!(game.undo().await, Err(ClientError::NoHistory)));
    }
}
