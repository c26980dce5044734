//! Query endpoint with session handling

use axum::{extract::State, Json};

use crate::error::Result;
use crate::server::extract::ValidatedJson;
use crate::server::state::AppState;
use crate::types::{QueryRequest, QueryResponse, SessionRef};

/// POST /api/query - Answer a query within a conversation session
///
/// A missing or empty `session_id` gets a freshly issued session. Any
/// collaborator failure aborts the request with a 500 carrying its message.
pub async fn query_documents(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<QueryRequest>,
) -> Result<Json<QueryResponse>> {
    let (query, session) = request.into_parts();

    let session_id = match session {
        SessionRef::Provided(session_id) => session_id,
        SessionRef::Absent => state.session_provider().create_session().await?,
    };

    tracing::info!("Query ({} chars) in session {}", query.len(), session_id);

    let rag_answer = state.rag_backend().query(&query, &session_id).await?;
    let response = QueryResponse::new(rag_answer, session_id);

    tracing::debug!("Query answered with {} sources", response.sources.len());

    Ok(Json(response))
}
