//! Lookup submission. Validates the identifier, runs the fetch, records the
//! outcome, and sends the browser back to the card page.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::client;
use crate::container::RequestState;
use crate::error::CardError;
use crate::state::AppState;

/// Query parameters for `GET /lookup`.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    #[serde(default)]
    steam_id: String,
}

/// Start a lookup for the submitted identifier.
///
/// The fetch completes before the redirect, so the page the browser lands
/// on already shows the outcome. A lookup overtaken by a newer submission
/// is discarded by the container, and the newer result stands.
pub async fn start_lookup(
    State(state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> Result<Redirect, CardError> {
    let identifier = params.steam_id.trim();
    validate_identifier(identifier)?;

    let token = state.card.begin().await;
    tracing::info!(identifier, token, "lookup started");

    let outcome =
        match client::fetch_profile(&state.http, &state.config.backend_url, identifier).await {
            Ok(profile) => RequestState::Loaded(Arc::new(profile)),
            Err(err) => {
                // Every failure shows the same not-found view; the reason
                // only goes to the log.
                tracing::warn!(identifier, error = %err, "lookup failed");
                RequestState::NotFound
            }
        };
    state.card.complete(token, outcome).await;

    Ok(Redirect::to("/"))
}

/// Accept SteamID64s and vanity names, reject anything else before it can
/// reach the backend URL path.
fn validate_identifier(identifier: &str) -> Result<(), CardError> {
    if identifier.is_empty() {
        return Err(CardError::InvalidIdentifier(
            "empty identifier".to_string(),
        ));
    }
    if !identifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CardError::InvalidIdentifier(format!(
            "'{identifier}' contains unsupported characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_steam_id64_and_vanity_names() {
        assert!(validate_identifier("76561197960287930").is_ok());
        assert!(validate_identifier("gordon_freeman").is_ok());
        assert!(validate_identifier("gabe-n").is_ok());
    }

    #[test]
    fn rejects_empty_identifiers() {
        assert!(matches!(
            validate_identifier(""),
            Err(CardError::InvalidIdentifier(_))
        ));
    }

    #[test]
    fn rejects_path_and_query_metacharacters() {
        for bad in ["../users", "a/b", "id?admin=1", "id#x", "id with space", "héro"] {
            assert!(
                matches!(
                    validate_identifier(bad),
                    Err(CardError::InvalidIdentifier(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
