//! Publishes suggestions to a mocked trello api.

use mockito::Matcher;
use vacation_planner::date;
use vacation_planner::planner::Suggestion;
use vacation_planner::sink::{TaskBoardSink, TrelloBoard, TrelloClient};

use pretty_assertions::assert_eq;

fn client(server: &mockito::Server) -> TrelloClient {
    TrelloClient::new("key", "token").with_base_url(format!("{}/", server.url()))
}

#[test]
fn test_create_board() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/boards/")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "Vacation Planner".into()),
            Matcher::UrlEncoded("defaultLists".into(), "false".into()),
            Matcher::UrlEncoded("key".into(), "key".into()),
            Matcher::UrlEncoded("token".into(), "token".into()),
        ]))
        .with_status(200)
        .with_body("{\"id\": \"board-id\", \"name\": \"Vacation Planner\"}")
        .create();

    assert_eq!(
        client(&server).create_board("Vacation Planner").unwrap(),
        "board-id"
    );

    mock.assert();
}

#[test]
fn test_unauthorized() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/boards/")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body("invalid key")
        .create();

    let error = client(&server).create_board("Vacation Planner").unwrap_err();
    assert_eq!(
        error.to_string(),
        "failed to create board - status code: 401"
    );

    mock.assert();
}

#[test]
fn test_empty_response() {
    let mut server = mockito::Server::new();

    let mock = server
        .mock("POST", "/cards")
        .match_query(Matcher::Any)
        .with_status(200)
        .create();

    let error = client(&server).create_card("list-id", "card").unwrap_err();
    assert_eq!(
        error.to_string(),
        "failed to create card - unexpected response"
    );

    mock.assert();
}

#[test]
fn test_publish() {
    let mut server = mockito::Server::new();

    let board = server
        .mock("POST", "/boards/")
        .match_query(Matcher::UrlEncoded("name".into(), "Holidays".into()))
        .with_status(200)
        .with_body("{\"id\": \"board-id\"}")
        .expect(1)
        .create();

    let list = server
        .mock("POST", "/boards/board-id/lists")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("name".into(), "2024".into()),
            Matcher::UrlEncoded("pos".into(), "1".into()),
        ]))
        .with_status(200)
        .with_body("{\"id\": \"list-id\"}")
        .expect(1)
        .create();

    let cards = server
        .mock("POST", "/cards")
        .match_query(Matcher::UrlEncoded("idList".into(), "list-id".into()))
        .with_status(200)
        .with_body("{\"id\": \"card-id\"}")
        .expect(2)
        .create();

    let mut sink = TrelloBoard::new(client(&server)).with_names("Holidays", "2024");
    sink.publish(&[
        Suggestion::new(date!(2024:04:27), date!(2024:05:05), 10, 5),
        Suggestion::new(date!(2024:12:25), date!(2024:12:29), 6, 1),
    ])
    .unwrap();

    board.assert();
    list.assert();
    cards.assert();
}

#[test]
fn test_publish_stops_on_error() {
    let mut server = mockito::Server::new();

    let board = server
        .mock("POST", "/boards/")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let cards = server
        .mock("POST", "/cards")
        .match_query(Matcher::Any)
        .expect(0)
        .create();

    let mut sink = TrelloBoard::new(client(&server));
    assert!(sink
        .publish(&[Suggestion::new(date!(2024:04:27), date!(2024:05:05), 10, 5)])
        .is_err());

    board.assert();
    cards.assert();
}
