//! Profile backend client.
//!
//! One lookup is one `GET {backend}/api/steam-user/{identifier}` returning
//! the profile payload as JSON. There are no retries and no caching; the
//! caller decides what a failed lookup means for the displayed state.

use anyhow::Context;
use steamcard_core::UserProfile;

use crate::error::CardError;

/// Fetch and decode the profile for a Steam identifier.
///
/// # Errors
///
/// - [`CardError::InvalidIdentifier`] when the identifier is empty
/// - [`CardError::Backend`] when the backend cannot be reached
/// - [`CardError::NotFound`] when the backend answers with a non-success
///   status (it responds 404 for unknown users)
/// - [`CardError::Internal`] when the body is not a decodable profile
pub async fn fetch_profile(
    http: &reqwest::Client,
    backend_url: &str,
    identifier: &str,
) -> Result<UserProfile, CardError> {
    if identifier.is_empty() {
        return Err(CardError::InvalidIdentifier(
            "identifier must not be empty".to_string(),
        ));
    }

    let url = format!("{backend_url}/api/steam-user/{identifier}");
    tracing::debug!(url = %url, "fetching profile");

    let response = http.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CardError::NotFound(format!(
            "backend answered {status} for '{identifier}'"
        )));
    }

    let body = response.text().await?;
    let profile = UserProfile::from_json(&body)
        .with_context(|| format!("undecodable profile payload for '{identifier}'"))?;

    tracing::debug!(
        username = %profile.username,
        games = profile.games_owned.len(),
        "profile fetched"
    );

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    const PAYLOAD: &str = r#"{
        "avatar": "https://avatars.example/a.jpg",
        "username": "gordon",
        "profileUrl": "https://steamcommunity.com/id/gordon/",
        "gamesOwned": [
            {"appid": 220, "name": "Half-Life 2", "img_icon_url": "fcfb3",
             "playtime_forever": 1234}
        ]
    }"#;

    /// Spawn a stub backend on an ephemeral port, returning its base URL.
    async fn spawn_backend(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn fetches_and_decodes_profile() {
        let router = Router::new().route("/api/steam-user/{id}", get(|| async { PAYLOAD }));
        let backend = spawn_backend(router).await;

        let http = reqwest::Client::new();
        let profile = fetch_profile(&http, &backend, "gordon").await.unwrap();

        assert_eq!(profile.username, "gordon");
        assert_eq!(profile.games_owned.len(), 1);
        assert_eq!(profile.games_owned[0].app_id, 220);
    }

    #[tokio::test]
    async fn non_success_status_maps_to_not_found() {
        let router = Router::new().route(
            "/api/steam-user/{id}",
            get(|| async { (StatusCode::NOT_FOUND, "User not found") }),
        );
        let backend = spawn_backend(router).await;

        let http = reqwest::Client::new();
        let err = fetch_profile(&http, &backend, "nobody").await.unwrap_err();
        assert!(matches!(err, CardError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn server_error_status_maps_to_not_found() {
        let router = Router::new().route(
            "/api/steam-user/{id}",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream broke") }),
        );
        let backend = spawn_backend(router).await;

        let http = reqwest::Client::new();
        let err = fetch_profile(&http, &backend, "gordon").await.unwrap_err();
        assert!(matches!(err, CardError::NotFound(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn unreachable_backend_maps_to_backend_error() {
        // Port 9 (discard) is not listening on loopback.
        let http = reqwest::Client::new();
        let err = fetch_profile(&http, "http://127.0.0.1:9", "gordon")
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::Backend(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn undecodable_body_maps_to_internal() {
        let router =
            Router::new().route("/api/steam-user/{id}", get(|| async { "<html>oops</html>" }));
        let backend = spawn_backend(router).await;

        let http = reqwest::Client::new();
        let err = fetch_profile(&http, &backend, "gordon").await.unwrap_err();
        assert!(matches!(err, CardError::Internal(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn empty_identifier_is_rejected_without_io() {
        let http = reqwest::Client::new();
        let err = fetch_profile(&http, "http://127.0.0.1:9", "")
            .await
            .unwrap_err();
        assert!(matches!(err, CardError::InvalidIdentifier(_)), "got {err:?}");
    }
}
