//! Unit tests for the stats API client

use super::*;
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn client_for(server: &MockServer) -> NbaStatsClient {
    let config = IngestConfig {
        base_url: server.uri(),
        season: Season::new("2023-24"),
        timeout: Duration::from_secs(5),
        ..IngestConfig::default()
    };
    NbaStatsClient::new(&config).unwrap()
}

fn directory_body() -> serde_json::Value {
    json!({
        "resource": "commonallplayers",
        "resultSets": [{
            "name": "CommonAllPlayers",
            "headers": ["PERSON_ID", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ID"],
            "rowSet": [
                [76001, "Alaa Abdelnaby", 0, 0],
                [2544, "LeBron James", 1, 1610612747]
            ]
        }]
    })
}

#[tokio::test]
async fn test_fetch_player_directory_includes_historical_players() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commonallplayers"))
        .and(query_param("IsOnlyCurrentSeason", "0"))
        .and(query_param("LeagueID", "00"))
        .and(query_param("Season", "2023-24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_body()))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);

    for _ in 0..2 {
        let table = client.fetch_player_directory().await.unwrap();
        assert_eq!(table.name, "CommonAllPlayers");
        assert_eq!(
            table.columns,
            vec!["PERSON_ID", "DISPLAY_FIRST_LAST", "ROSTERSTATUS", "TEAM_ID"]
        );
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0][1], json!("Alaa Abdelnaby"));
    }
}

#[tokio::test]
async fn test_fetch_player_directory_sends_stats_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commonallplayers"))
        .and(header("x-nba-stats-origin", "stats"))
        .and(header("x-nba-stats-token", "true"))
        .and(header("referer", "https://www.nba.com/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_body()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let table = client_for(&mock_server)
        .fetch_player_directory()
        .await
        .unwrap();
    assert_eq!(table.row_count(), 2);
}

#[tokio::test]
async fn test_fetch_season_stats_selects_first_result_set() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "resource": "leaguedashplayerstats",
        "resultSets": [
            {
                "name": "LeagueDashPlayerStats",
                "headers": ["PLAYER_ID", "PLAYER_NAME", "GP", "PTS"],
                "rowSet": [[2544, "LeBron James", 71, 1822]]
            },
            {
                "name": "Second",
                "headers": ["A"],
                "rowSet": [[1], [2], [3]]
            },
            {
                "name": "Third",
                "headers": ["B", "C"],
                "rowSet": []
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/leaguedashplayerstats"))
        .and(query_param("Season", "2023-24"))
        .and(query_param("MeasureType", "Base"))
        .and(query_param("PerMode", "Totals"))
        .and(query_param("SeasonType", "Regular Season"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let table = client_for(&mock_server)
        .fetch_season_stats(&Season::new("2023-24"))
        .await
        .unwrap();

    assert_eq!(table.name, "LeagueDashPlayerStats");
    assert_eq!(table.columns, vec!["PLAYER_ID", "PLAYER_NAME", "GP", "PTS"]);
    assert_eq!(table.rows, vec![vec![json!(2544), json!("LeBron James"), json!(71), json!(1822)]]);
}

#[tokio::test]
async fn test_invalid_season_surfaces_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/leaguedashplayerstats"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("The field Season must match the regular expression"),
        )
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server)
        .fetch_season_stats(&Season::new("2024"))
        .await;

    match result {
        Err(IngestError::Upstream {
            endpoint,
            status,
            message,
        }) => {
            assert_eq!(endpoint, LEAGUE_DASH_PLAYER_STATS);
            assert_eq!(status, 400);
            assert!(message.contains("Season must match"));
        }
        other => panic!("Expected Upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_response_without_result_sets_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commonallplayers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"resultSets": []})))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_player_directory().await;

    match result {
        Err(IngestError::MissingResultSet { endpoint }) => {
            assert_eq!(endpoint, COMMON_ALL_PLAYERS)
        }
        other => panic!("Expected MissingResultSet, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_http_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commonallplayers"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>blocked</html>"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).fetch_player_directory().await;
    assert!(matches!(result, Err(IngestError::Http(_))));
}

#[tokio::test]
async fn test_unreachable_host_is_http_error() {
    let config = IngestConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout: Duration::from_secs(2),
        ..IngestConfig::default()
    };
    let client = NbaStatsClient::new(&config).unwrap();

    let result = client.fetch_player_directory().await;
    assert!(matches!(result, Err(IngestError::Http(_))));
}

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let config = IngestConfig {
        base_url: "http://localhost:8080/stats/".to_string(),
        ..IngestConfig::default()
    };
    let client = NbaStatsClient::new(&config).unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080/stats");
}

#[test]
fn test_stats_base_url_constant() {
    assert_eq!(STATS_BASE_URL, "https://stats.nba.com/stats");
}
