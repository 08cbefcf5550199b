//! HTTP-level client tests against a wiremock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use filmstat_tmdb::{TmdbClient, TmdbConfig, TmdbError};

fn client_for(server: &MockServer) -> TmdbClient {
    TmdbClient::new(TmdbConfig::new("test-key").with_base_url(server.uri()))
}

#[tokio::test]
async fn movie_details_decodes_well_formed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("language", "pt-BR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 550,
            "title": "Clube da Luta",
            "release_date": "1999-10-15",
            "revenue": 100_853_753,
            "genres": [{ "id": 18, "name": "Drama" }]
        })))
        .mount(&server)
        .await;

    let details = client_for(&server)
        .movie_details(550, "pt-BR")
        .await
        .unwrap();

    assert_eq!(details.id, 550);
    assert_eq!(details.title, "Clube da Luta");
    assert_eq!(details.genres, vec!["Drama"]);
}

#[tokio::test]
async fn movie_credits_returns_cast_in_billing_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/550/credits"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 550,
            "cast": [
                { "name": "Edward Norton", "character": "The Narrator", "order": 0 },
                { "name": "Brad Pitt", "character": "Tyler Durden", "order": 1 }
            ]
        })))
        .mount(&server)
        .await;

    let cast = client_for(&server).movie_credits(550, "pt-BR").await.unwrap();

    assert_eq!(cast.len(), 2);
    assert_eq!(cast[0].name, "Edward Norton");
    assert_eq!(cast[1].name, "Brad Pitt");
}

#[tokio::test]
async fn search_sends_query_and_page_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "Matrix"))
        .and(query_param("page", "2"))
        .and(query_param("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "page": 2,
            "results": [{ "id": 603, "title": "Matrix", "release_date": "1999-03-30" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server).search("Matrix", "pt-BR", 2).await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, 603);
    assert_eq!(results[0].release_year, Some(1999));
}

#[tokio::test]
async fn recommendations_and_similar_hit_distinct_paths() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/11/recommendations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "id": 1891, "title": "O Império Contra-Ataca" }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/11/similar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "id": 1892, "title": "O Retorno de Jedi" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let recs = client.recommendations(11, "pt-BR", 1).await.unwrap();
    let similar = client.similar(11, "pt-BR", 1).await.unwrap();

    assert_eq!(recs[0].id, 1891);
    assert_eq!(similar[0].id, 1892);
}

#[tokio::test]
async fn http_404_becomes_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/999999999"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status_code": 34,
            "status_message": "The resource you requested could not be found.",
            "success": false
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .movie_details(999_999_999, "pt-BR")
        .await
        .unwrap_err();

    match err {
        TmdbError::Status { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("could not be found"));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn status_error_without_json_body_falls_back_to_status_line() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway exploded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .movie_details(550, "pt-BR")
        .await
        .unwrap_err();

    match err {
        TmdbError::Status { status, .. } => assert_eq!(status, 500),
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_refused_becomes_network_error() {
    // Bind-then-drop leaves a port nothing is listening on. A non-pooled
    // server is required: pooled servers from `MockServer::start()` keep
    // listening after drop.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = TmdbClient::new(TmdbConfig::new("test-key").with_base_url(uri));
    let err = client.movie_details(550, "pt-BR").await.unwrap_err();

    assert!(matches!(err, TmdbError::Network(_)));
}

#[tokio::test]
async fn invalid_json_body_becomes_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .movie_details(550, "pt-BR")
        .await
        .unwrap_err();

    assert!(matches!(err, TmdbError::Decode(_)));
}
