pub mod games {
    use crate::AppState;
    use axum::extract::{Path, State};
    use std::sync::Arc;

    pub fn router(state: Arc<AppState>) -> axum::Router {
        axum::Router::new()
            .route("/", axum::routing::get(list))
            .route("/:id", axum::routing::get(info))
            .with_state(state)
    }

    async fn list(
        State(state): State<Arc<AppState>>,
    ) -> axum::response::Json<Vec<common::GameSummary>> {
        axum::response::Json(state.games.iter().map(crate::game_summary).collect())
    }

    async fn info(
        State(state): State<Arc<AppState>>,
        Path(game_id): Path<u32>,
    ) -> Result<axum::response::Json<common::GameSummary>, axum::http::StatusCode> {
        tracing::info!("Get info for Game: {:?}", game_id);

        let game = state
            .games
            .iter()
            .find(|game| game.id == game_id)
            .ok_or(axum::http::StatusCode::NOT_FOUND)?;

        Ok(axum::response::Json(crate::game_summary(game)))
    }
}

pub mod ranking {
    use crate::AppState;
    use axum::extract::State;
    use std::sync::Arc;

    pub fn router(state: Arc<AppState>) -> axum::Router {
        axum::Router::new()
            .route("/", axum::routing::get(list))
            .with_state(state)
    }

    async fn list(
        State(state): State<Arc<AppState>>,
    ) -> axum::response::Json<Vec<common::RankingEntry>> {
        axum::response::Json(state.ranking.iter().map(crate::ranking_entry).collect())
    }
}

pub fn router(state: std::sync::Arc<crate::AppState>) -> axum::Router {
    axum::Router::new()
        .nest("/games", games::router(state.clone()))
        .nest("/ranking", ranking::router(state))
}
