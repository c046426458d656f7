//! Integration tests for the HTTP client against an in-process authority.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rps_client::{Authority, Client, ClientError, ConnectionInfo};
use rps_primitives::api::{CreatePlayerRequest, JoinLobbyRequest};
use rps_primitives::game::{MatchId, Move};
use rps_primitives::identity::{Player, PlayerId};
use rps_primitives::lobby::LobbyId;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Default)]
struct Recorded {
    players: Vec<Value>,
    moves: Vec<Value>,
}

type Shared = Arc<Mutex<Recorded>>;

async fn create_player(State(recorded): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    recorded.lock().await.players.push(body);

    StatusCode::CREATED
}

async fn get_player(Path(id): Path<String>) -> Result<Json<Value>, (StatusCode, &'static str)> {
    if id == "ghost" {
        return Err((StatusCode::NOT_FOUND, "player not found"));
    }

    Ok(Json(json!({ "id": id, "name": "Alice" })))
}

async fn join_lobby(Path(lobby_id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    assert_eq!(lobby_id, "lobby1");

    Json(json!({
        "player1Id": body["playerId"],
        "player2Id": "",
        "gameId": "g1",
    }))
}

async fn get_lobby() -> Json<Value> {
    Json(json!({ "player1Id": "alice", "player2Id": null }))
}

async fn get_match(Path(game_id): Path<String>) -> Json<Value> {
    Json(json!({
        "gameId": game_id,
        "firstPlayerId": "alice",
        "secondPlayerId": "bob",
        "firstPlayerMoves": ["ROCK"],
        "secondPlayerMoves": ["SCISSORS"],
        "firstPlayerMoveCount": 2,
        "secondPlayerMoveCount": 1,
        "completedRounds": 1,
        "firstPlayerScore": 1.0,
        "secondPlayerScore": 0.0,
        "winnerId": "",
    }))
}

async fn make_move(State(recorded): State<Shared>, Json(body): Json<Value>) -> StatusCode {
    if body["move"] == "LIZARD" {
        return StatusCode::BAD_REQUEST;
    }

    recorded.lock().await.moves.push(body);

    StatusCode::OK
}

async fn leaderboard() -> Json<Value> {
    Json(json!({
        "players": [
            { "playerId": "alice", "playerName": "Alice", "gamesWon": 3, "gamesLost": 1, "score": 6.5 },
            { "playerId": "bob", "playerName": "Bob", "gamesWon": 1, "gamesLost": 3, "score": 2.0 },
        ]
    }))
}

async fn player_stats(Path(id): Path<String>) -> Json<Value> {
    Json(json!({ "playerId": id, "playerName": "Bob", "gamesWon": 1, "gamesLost": 3, "score": 2.0 }))
}

/// Serves a scripted authority under `/api` on an ephemeral port.
async fn serve() -> (Client, Shared) {
    let recorded = Shared::default();

    let game = Router::new()
        .route("/game/player", post(create_player))
        .route("/game/player/:id", get(get_player))
        .route("/game/lobby/:lobby_id/join", post(join_lobby))
        .route("/game/lobby/:lobby_id", get(get_lobby))
        .route("/game/leaderboard", get(leaderboard))
        .route("/game/leaderboard/player/:id", get(player_stats))
        .route("/game/:game_id", get(get_match))
        .route("/game/:game_id/move", post(make_move))
        .with_state(Arc::clone(&recorded));

    let app = Router::new().nest("/api", game);

    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    drop(tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    }));

    // no trailing slash on purpose, paths must still land under /api
    let url = format!("http://{addr}/api").parse().unwrap();
    let client = Client::new(ConnectionInfo::new(url).unwrap());

    (client, recorded)
}

fn id(s: &str) -> PlayerId {
    s.parse().unwrap()
}

#[tokio::test]
async fn test_register_posts_id_and_name() {
    let (client, recorded) = serve().await;

    client
        .register_player(&Player::new(id("alice"), "Alice"))
        .await
        .unwrap();

    client
        .create_player(CreatePlayerRequest::new(id("bob"), "Bob".to_owned()))
        .await
        .unwrap();

    let recorded = recorded.lock().await;

    assert_eq!(
        recorded.players,
        vec![
            json!({ "id": "alice", "name": "Alice" }),
            json!({ "id": "bob", "name": "Bob" }),
        ]
    );
}

#[tokio::test]
async fn test_join_reply_decodes_empty_seat_as_absent() {
    let (client, _recorded) = serve().await;

    let lobby_id: LobbyId = "lobby1".parse().unwrap();

    let lobby = client
        .join_lobby(&lobby_id, JoinLobbyRequest::new(id("alice")))
        .await
        .unwrap();

    assert_eq!(lobby.player1_id, Some(id("alice")));
    assert_eq!(lobby.player2_id, None);
    assert_eq!(lobby.game_id.as_ref().map(MatchId::as_str), Some("g1"));

    let polled = client.lobby_state(&lobby_id).await.unwrap();

    assert!(!polled.is_full());
    assert!(polled.game_id.is_none());
}

#[tokio::test]
async fn test_match_snapshot_decodes() {
    let (client, _recorded) = serve().await;

    let snapshot = client
        .match_state(&"g1".parse().unwrap())
        .await
        .unwrap();

    assert_eq!(snapshot.first_player_id, id("alice"));
    assert_eq!(snapshot.second_player_id, Some(id("bob")));
    assert_eq!(snapshot.first_player_moves, vec![Move::Rock]);
    assert_eq!(snapshot.second_player_moves, vec![Move::Scissors]);
    assert_eq!(snapshot.completed_rounds, 1);
    assert!(snapshot.winner_id.is_none());

    let view = rps_client::derive(&id("bob"), &snapshot).unwrap();

    assert!(view.can_move());
}

#[tokio::test]
async fn test_move_posts_uppercase_symbol() {
    let (client, recorded) = serve().await;

    client
        .submit_move(&"g1".parse().unwrap(), &id("alice"), Move::Paper)
        .await
        .unwrap();

    assert_eq!(
        recorded.lock().await.moves,
        vec![json!({ "playerId": "alice", "move": "PAPER" })]
    );
}

#[tokio::test]
async fn test_leaderboard_keeps_authority_order() {
    let (client, _recorded) = serve().await;

    let board = client.leaderboard().await.unwrap();

    let names: Vec<_> = board
        .players
        .iter()
        .map(|entry| entry.player_name.as_str())
        .collect();

    assert_eq!(names, ["Alice", "Bob"]);

    let stats = client.get_player_stats(&id("bob")).await.unwrap();

    assert_eq!(stats.games_lost, 3);
}

#[tokio::test]
async fn test_non_success_status_becomes_client_error() {
    let (client, _recorded) = serve().await;

    let report = client.get_player(&id("ghost")).await.unwrap_err();

    let error = report.downcast_ref::<ClientError>().unwrap();

    assert_eq!(error.status_code, 404);
    assert_eq!(error.message, "player not found");

    let found = client.get_player(&id("alice")).await.unwrap();

    assert_eq!(found.name, "Alice");
}
