//! Mock API tests for the superhero provider.
//!
//! Payload shapes follow the public superhero API: search results under
//! `results`, by-id responses flattened next to a `response` marker, and
//! "no results" reported as HTTP 200 with `response: "error"`.

use serde_json::json;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dashmix::prelude::*;

fn batman_json() -> serde_json::Value {
    json!({
        "id": "70",
        "name": "Batman",
        "powerstats": {
            "intelligence": "100",
            "strength": "26",
            "speed": "27",
            "durability": "50",
            "power": "47",
            "combat": "100"
        },
        "biography": {
            "full-name": "Bruce Wayne",
            "publisher": "DC Comics",
            "first-appearance": "Detective Comics #27"
        },
        "image": { "url": "https://www.superherodb.com/pictures2/portraits/10/100/639.jpg" }
    })
}

async fn client_for(server: &MockServer, key: &str) -> Dashmix {
    Dashmix::builder()
        .api_key(ProviderId::Superhero, key)
        .base_url(ProviderId::Superhero, format!("{}/api", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn search_places_key_in_path_and_normalizes_heroes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/test-key/search/batman"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "success",
            "results-for": "batman",
            "results": [batman_json()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key").await;
    let heroes = client.superhero().search("batman").await.unwrap();

    assert_eq!(heroes.len(), 1);
    let hero = &heroes[0];
    assert_eq!(hero.name, "Batman");
    assert_eq!(hero.full_name.as_deref(), Some("Bruce Wayne"));
    assert_eq!(hero.publisher.as_deref(), Some("DC Comics"));
    assert_eq!(hero.stats.intelligence, Some(100));
    assert_eq!(hero.stats.combat, Some(100));
}

#[tokio::test]
async fn search_with_no_matches_returns_empty_vec() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/test-key/search/zzzzz"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "error",
            "error": "character with given name not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key").await;
    let heroes = client.superhero().search("zzzzz").await.unwrap();
    assert!(heroes.is_empty());
}

#[tokio::test]
async fn by_id_parses_flattened_hero() {
    let server = MockServer::start().await;

    let mut body = batman_json();
    body["response"] = json!("success");
    Mock::given(method("GET"))
        .and(path("/api/test-key/70"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key").await;
    let hero = client.superhero().by_id(70).await.unwrap();
    assert_eq!(hero.id, "70");
    assert_eq!(hero.name, "Batman");
}

#[tokio::test]
async fn by_id_error_marker_becomes_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/test-key/999999"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": "error",
            "error": "invalid id"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key").await;
    let err = client.superhero().by_id(999_999).await.unwrap_err();
    match err {
        Error::Api {
            provider, message, ..
        } => {
            assert_eq!(provider, ProviderId::Superhero);
            assert_eq!(message, "invalid id");
        }
        e => panic!("unexpected error: {e:?}"),
    }
}

#[tokio::test]
async fn random_stays_inside_valid_id_range() {
    let server = MockServer::start().await;

    let mut body = batman_json();
    body["response"] = json!("success");
    Mock::given(method("GET"))
        .and(path_regex(r"^/api/test-key/\d+$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, "test-key").await;
    let hero = client.superhero().random().await.unwrap();
    assert_eq!(hero.name, "Batman");
}

#[tokio::test]
async fn missing_key_issues_no_request() {
    let server = MockServer::start().await;

    // Nothing should reach the server.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = Dashmix::builder()
        .base_url(ProviderId::Superhero, format!("{}/api", server.uri()))
        .build()
        .unwrap();

    let err = client.superhero().search("batman").await.unwrap_err();
    assert!(matches!(
        err,
        Error::MissingCredential {
            provider: ProviderId::Superhero
        }
    ));
}
