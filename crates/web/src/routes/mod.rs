use askama::Template;
use axum::{
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::{error, warn};

use chessboard_core::{BoardView, GameRecord};

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate {
    pub title: String,
    /// Start position as submitted, empty for the standard start
    pub fen: String,
    pub moves: String,
    pub current_fen: String,
    pub pgn: String,
    pub view: BoardView,
}

#[derive(Deserialize)]
pub struct BoardQuery {
    pub fen: Option<String>,
    /// Space separated SAN moves played from `fen`
    pub moves: Option<String>,
    #[serde(default)]
    pub flipped: bool,
}

pub enum AppError {
    Core(chessboard_core::Error),
    Render(askama::Error),
}

impl From<chessboard_core::Error> for AppError {
    fn from(error: chessboard_core::Error) -> Self {
        AppError::Core(error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(chessboard_core::Error::Json(e)) => {
                error!("Failed to serialize board: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Core(e) => {
                warn!("Rejected board request: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            AppError::Render(e) => {
                error!("Failed to render template: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

fn load_game(query: &BoardQuery) -> Result<GameRecord, AppError> {
    let mut game = match query.fen.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        Some(fen) => GameRecord::from_fen(fen)?,
        None => GameRecord::new(),
    };

    if let Some(moves) = &query.moves {
        game.play_all(moves.split_whitespace())?;
    }

    Ok(game)
}

pub async fn board_page(Query(query): Query<BoardQuery>) -> Result<Html<String>, AppError> {
    let game = load_game(&query)?;
    let view = BoardView::build(&game, query.flipped)?;

    let template = BoardTemplate {
        title: "Chessboard".to_string(),
        fen: query.fen.clone().unwrap_or_default(),
        moves: query.moves.clone().unwrap_or_default(),
        current_fen: game.fen(),
        pgn: game.pgn().to_string(),
        view,
    };
    let html = template.render().map_err(AppError::Render)?;
    Ok(Html(html))
}

pub async fn board_json(Query(query): Query<BoardQuery>) -> Result<Json<BoardView>, AppError> {
    let game = load_game(&query)?;
    Ok(Json(BoardView::build(&game, query.flipped)?))
}

pub async fn board_pgn(Query(query): Query<BoardQuery>) -> Result<String, AppError> {
    let game = load_game(&query)?;
    Ok(game.pgn().to_string())
}

pub async fn health() -> &'static str {
    "ok"
}
