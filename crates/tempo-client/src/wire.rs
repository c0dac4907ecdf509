//! Typed request and response bodies for the backend endpoints.
//!
//! Every endpoint is a POST with a JSON body. Response shapes differ in
//! small ways the types pin down: board matrices arrive as raw integer
//! rows (validated into a `Board` by the callers), the `entities` field of
//! board-carrying responses is a list of entity surface strings rather
//! than entity objects, and undo responses add `undo_success` while
//! omitting `n_relations`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tempo_core::entity::{Entity, EntitySpan};
use tempo_core::relation::Relation;

pub use tempo_board::closure::TimelineRelation;

/// A step action in the wire's asymmetric encoding: the position as an
/// integer `[row, col]` pair, the relation as its display symbol, together
/// `[[row, col], ">"]`. Create/undo/results use integers internally but
/// the step action sends the human symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepAction {
    pub row: usize,
    pub col: usize,
    pub relation: Relation,
}

impl StepAction {
    #[must_use]
    pub const fn new(row: usize, col: usize, relation: Relation) -> Self {
        Self { row, col, relation }
    }
}

impl Serialize for StepAction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ((self.row, self.col), self.relation.symbol()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for StepAction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ((row, col), symbol): ((usize, usize), String) =
            Deserialize::deserialize(deserializer)?;
        let relation = Relation::from_symbol(&symbol)
            .ok_or_else(|| D::Error::custom(format!("unknown relation symbol '{symbol}'")))?;
        Ok(Self { row, col, relation })
    }
}

/// One accepted annotation step, as tracked by the session and echoed in
/// the results payload. `timestamp` is the step's ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRelation {
    pub position: (usize, usize),
    pub relation: Relation,
    pub timestamp: usize,
}

/// `/api/new_annotation_session` request.
#[derive(Debug, Serialize)]
pub struct NewAnnotationSessionRequest<'a> {
    pub text: &'a str,
    pub entities: &'a [Entity],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dct: Option<&'a str>,
}

/// `/api/new_annotation_session` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAnnotationSessionResponse {
    pub session_id: String,
    pub text: String,
    pub board: Vec<Vec<i64>>,
    pub endpoints: Vec<String>,
    /// Entity surface strings, in the server's (re-sorted) entity order.
    #[serde(default)]
    pub entities: Vec<String>,
    pub has_incoherence: bool,
    pub n_annotated: usize,
    pub n_relations: usize,
}

/// `/api/annotation_step` request.
#[derive(Debug, Serialize)]
pub struct AnnotationStepRequest<'a> {
    pub session_id: &'a str,
    pub action: StepAction,
}

/// `/api/annotation_step` and `/api/annotation_undo` response. Undo
/// responses set `undo_success` and omit `n_relations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationStepResponse {
    pub board: Vec<Vec<i64>>,
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    pub has_incoherence: bool,
    #[serde(default)]
    pub relations_count: usize,
    pub n_annotated: usize,
    #[serde(default)]
    pub n_relations: Option<usize>,
    #[serde(default)]
    pub undo_success: bool,
}

/// Request carrying only a session id (`annotation_undo`,
/// `get_annotation_results`).
#[derive(Debug, Serialize)]
pub struct SessionRequest<'a> {
    pub session_id: &'a str,
}

/// `/api/get_annotation_results` response. `entities` echoes the creation
/// payload; `relations` is the accepted-step history in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationResultsResponse {
    pub text: String,
    pub entities: Vec<Entity>,
    pub dct: Option<String>,
    pub relations: Vec<RecordedRelation>,
    pub board: Vec<Vec<i64>>,
    pub endpoints: Vec<String>,
    pub total_relations: usize,
}

/// `/api/new_game` request.
#[derive(Debug, Serialize)]
pub struct NewGameRequest {
    pub level: u8,
}

/// `/api/new_game` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGameResponse {
    pub game_id: String,
    /// Document text with entity spans wrapped in `<e0>…</e0>` tags.
    pub text: String,
    pub board: Vec<Vec<i64>>,
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    pub reward: f64,
    pub terminated: bool,
    pub is_success: bool,
    pub level: u8,
}

/// `/api/step` request.
#[derive(Debug, Serialize)]
pub struct GameStepRequest<'a> {
    pub game_id: &'a str,
    pub action: StepAction,
}

/// Request carrying only a game id (`/api/undo`).
#[derive(Debug, Serialize)]
pub struct GameRequest<'a> {
    pub game_id: &'a str,
}

/// `/api/step` and `/api/undo` response. The reference board is revealed
/// only when the game terminates; undo responses set `undo_success`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStepResponse {
    pub text: String,
    pub board: Vec<Vec<i64>>,
    pub endpoints: Vec<String>,
    #[serde(default)]
    pub entities: Vec<String>,
    pub reward: f64,
    pub terminated: bool,
    pub is_success: bool,
    #[serde(default)]
    pub true_board: Option<Vec<Vec<i64>>>,
    #[serde(default)]
    pub undo_success: bool,
}

/// `/api/annotate_entities` request.
#[derive(Debug, Serialize)]
pub struct AnnotateEntitiesRequest<'a> {
    pub text: &'a str,
}

/// `/api/annotate_entities` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotateEntitiesResponse {
    pub entities: Vec<EntitySpan>,
}

/// `/api/temporal_closure` request and response both carry a timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelinePayload {
    pub timeline: Vec<TimelineRelation>,
}
