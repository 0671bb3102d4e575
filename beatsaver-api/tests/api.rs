//! Every resource client against a local mock of the catalog service.
//!
//! Each test starts its own `MockServer`, points a `BeatSaverClient` at it
//! and checks what goes over the wire (verb, path, query, body) and how the
//! response is classified.

use beatsaver_api::types::{SearchQuery, SortOrder};
use beatsaver_api::{BeatSaverClient, BeatSaverError, ClientConfig, ErrorKind};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::json;

fn client_for(server: &MockServer) -> BeatSaverClient {
    let config = ClientConfig {
        base_url: server.base_url(),
        ..ClientConfig::default()
    };
    BeatSaverClient::with_config(&config).unwrap()
}

#[test]
fn map_by_id_returns_payload_unchanged() {
    let server = MockServer::start();
    let payload = json!({ "id": "abc", "name": "Test Map", "metadata": { "bpm": 174.0 } });
    let mock = server.mock(|when, then| {
        when.method(GET).path("/maps/id/abc");
        then.status(200).json_body(payload.clone());
    });

    let map = client_for(&server).maps().map_by_id("abc").unwrap();
    mock.assert();
    assert_eq!(map, payload);
}

#[test]
fn maps_by_ids_joins_in_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/maps/ids/a,b,c");
        then.status(200).json_body(json!({ "a": {}, "b": {}, "c": {} }));
    });

    client_for(&server)
        .maps()
        .maps_by_ids(&["a", "b", "c"])
        .unwrap();
    mock.assert();
}

#[test]
fn map_routes() {
    let server = MockServer::start();
    let routes = [
        "/maps/hash/e2f1c7d6",
        "/maps/uploader/4284201/2",
        "/maps/collaborations/4284201",
        "/maps/latest",
        "/maps/plays/0",
    ];
    let mocks: Vec<_> = routes
        .iter()
        .map(|route| {
            server.mock(|when, then| {
                when.method(GET).path(*route);
                then.status(200).json_body(json!({ "route": route }));
            })
        })
        .collect();

    let client = client_for(&server);
    let maps = client.maps();
    assert_eq!(maps.map_by_hash("e2f1c7d6").unwrap()["route"], routes[0]);
    assert_eq!(maps.maps_by_uploader("4284201", 2).unwrap()["route"], routes[1]);
    assert_eq!(maps.maps_with_collaborations("4284201").unwrap()["route"], routes[2]);
    assert_eq!(maps.latest_maps().unwrap()["route"], routes[3]);
    assert_eq!(maps.maps_by_play_count(0).unwrap()["route"], routes[4]);
    for mock in &mocks {
        mock.assert();
    }
}

#[test]
fn deleted_maps_sends_before_only_when_given() {
    let server = MockServer::start();
    let with_date = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/deleted")
            .query_param("before", "2024-01-01");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    let client = client_for(&server);
    client.maps().deleted_maps(Some("2024-01-01")).unwrap();
    with_date.assert();

    let any = server.mock(|when, then| {
        when.method(GET).path("/maps/deleted");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    client.maps().deleted_maps(None).unwrap();
    // The date-filtered mock must not have matched the second call.
    with_date.assert_hits(1);
    any.assert_hits(1);
}

#[test]
fn user_routes() {
    let server = MockServer::start();
    let by_id = server.mock(|when, then| {
        when.method(GET).path("/users/id/58338");
        then.status(200).json_body(json!({ "id": 58338 }));
    });
    let by_ids = server.mock(|when, then| {
        when.method(GET).path("/users/ids/1,2");
        then.status(200).json_body(json!([{ "id": 1 }, { "id": 2 }]));
    });
    let by_name = server.mock(|when, then| {
        when.method(GET).path("/users/name/Joetastic");
        then.status(200).json_body(json!({ "name": "Joetastic" }));
    });

    let client = client_for(&server);
    let maps = client.maps();
    assert_eq!(maps.user_by_id("58338").unwrap(), json!({ "id": 58338 }));
    assert_eq!(
        maps.users_by_ids(&["1".to_owned(), "2".to_owned()]).unwrap(),
        json!([{ "id": 1 }, { "id": 2 }])
    );
    assert_eq!(maps.user_by_name("Joetastic").unwrap()["name"], "Joetastic");
    by_id.assert();
    by_ids.assert();
    by_name.assert();
}

#[test]
fn verify_posts_json_token() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/users/verify")
            .json_body(json!({ "token": "s3cret" }));
        then.status(200).json_body(json!({ "success": true }));
    });

    let resp = client_for(&server).maps().verify_user_token("s3cret").unwrap();
    mock.assert();
    assert_eq!(resp, json!({ "success": true }));
}

#[test]
fn rejected_token_is_auth_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/users/verify");
        then.status(403).body("forbidden");
    });

    let err = client_for(&server)
        .maps()
        .verify_user_token("bad")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AuthFailure);
    assert_eq!(err.status(), Some(403));
}

#[test]
fn search_sends_set_filters_and_default_sort() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search/text/0")
            .query_param("minNps", "4.0")
            .query_param("verified", "false")
            .query_param("sortOrder", "Latest");
        then.status(200).json_body(json!({ "docs": [] }));
    });

    let query = SearchQuery {
        min_nps: Some(4.0),
        verified: Some(false),
        ..SearchQuery::default()
    };
    client_for(&server).search().search_maps(&query).unwrap();
    mock.assert();
}

#[test]
fn search_page_and_sort_order() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/search/text/4")
            .query_param("q", "camellia")
            .query_param("sortOrder", "Rating");
        then.status(200).json_body(json!({ "docs": [], "info": { "pages": 5 } }));
    });

    let query = SearchQuery {
        page: 4,
        q: Some("camellia".into()),
        sort_order: SortOrder::Rating,
        ..SearchQuery::default()
    };
    let resp = client_for(&server).search().search_maps(&query).unwrap();
    mock.assert();
    assert_eq!(resp["info"]["pages"], 5);
}

#[test]
fn playlist_routes() {
    let server = MockServer::start();
    let latest = server.mock(|when, then| {
        when.method(GET).path("/playlists/latest");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    let search = server.mock(|when, then| {
        when.method(GET)
            .path("/playlists/search/1")
            .query_param("q", "tech");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    let search_v1 = server.mock(|when, then| {
        when.method(GET).path("/playlists/search/v1/0");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    let by_user = server.mock(|when, then| {
        when.method(GET).path("/playlists/user/58338/0");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    let detail = server.mock(|when, then| {
        when.method(GET).path("/playlists/id/1234/3");
        then.status(200).json_body(json!({ "playlist": { "playlistId": 1234 } }));
    });

    let client = client_for(&server);
    let playlists = client.playlists();
    playlists.latest_playlists().unwrap();
    playlists.search_playlists(1, Some("tech")).unwrap();
    playlists.search_playlists_v1(0, None).unwrap();
    playlists.playlists_by_user("58338", 0).unwrap();
    let resp = playlists.playlist_detail("1234", 3).unwrap();

    latest.assert();
    search.assert();
    search_v1.assert();
    by_user.assert();
    detail.assert();
    assert_eq!(resp["playlist"]["playlistId"], 1234);
}

#[test]
fn status_codes_map_to_error_kinds() {
    let cases = [
        (404, ErrorKind::NotFound),
        (401, ErrorKind::AuthFailure),
        (403, ErrorKind::AuthFailure),
        (429, ErrorKind::RateLimited),
        (500, ErrorKind::ServerError),
        (503, ErrorKind::ServerError),
        (599, ErrorKind::ServerError),
        (400, ErrorKind::Unexpected),
        (418, ErrorKind::Unexpected),
    ];
    for (status, kind) in cases {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/maps/latest");
            then.status(status).body("boom");
        });
        let err = client_for(&server).maps().latest_maps().unwrap_err();
        assert_eq!(err.kind(), kind, "status {status}");
        assert_eq!(err.status(), Some(status));
    }
}

#[test]
fn unexpected_status_keeps_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/playlists/latest");
        then.status(400).body("invalid page");
    });

    match client_for(&server).playlists().latest_playlists() {
        Err(BeatSaverError::Unexpected { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "invalid page");
        }
        other => panic!("expected Unexpected, got {other:?}"),
    }
}

#[test]
fn malformed_success_body_is_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/search/text/0");
        then.status(200).body("<html>maintenance</html>");
    });

    let err = client_for(&server)
        .search()
        .search_maps(&SearchQuery::default())
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    assert_eq!(err.status(), Some(200));
}

#[test]
fn invalid_utf8_success_body_is_decode_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/maps/id/abc");
        then.status(200)
            .header("content-type", "application/json")
            .body(b"{\"n\":\"\xff\xfe\"}");
    });

    let err = client_for(&server).maps().map_by_id("abc").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    assert_eq!(err.status(), Some(200));
}

#[test]
fn connection_refused_is_transport_failure() {
    let config = ClientConfig {
        base_url: "http://127.0.0.1:1".into(),
        ..ClientConfig::default()
    };
    let client = BeatSaverClient::with_config(&config).unwrap();
    let err = client.maps().latest_maps().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    assert_eq!(err.status(), None);
}

#[test]
fn one_client_serves_concurrent_callers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/maps/id/abc");
        then.status(200).json_body(json!({ "id": "abc" }));
    });
    let client = client_for(&server);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| client.maps().map_by_id("abc")))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), json!({ "id": "abc" }));
        }
    });
    mock.assert_hits(8);
}

#[test]
fn user_agent_is_sent_when_configured() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/maps/latest")
            .header("user-agent", "beatsaver-api-tests");
        then.status(200).json_body(json!({ "docs": [] }));
    });
    let config = ClientConfig {
        base_url: server.base_url(),
        user_agent: Some("beatsaver-api-tests".into()),
        ..ClientConfig::default()
    };

    BeatSaverClient::with_config(&config)
        .unwrap()
        .maps()
        .latest_maps()
        .unwrap();
    mock.assert();
}
