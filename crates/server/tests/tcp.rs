use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};

use game_core::PlayerId;
use game_server::connection;
use runtime::{RuntimeConfig, SessionHandle};

struct Client {
    lines: Lines<BufReader<OwnedReadHalf>>,
    writer: OwnedWriteHalf,
}

impl Client {
    async fn send(&mut self, message: Value) {
        let mut line = message.to_string();
        line.push('\n');
        self.writer.write_all(line.as_bytes()).await.unwrap();
    }

    async fn next(&mut self) -> Value {
        let line = self.lines.next_line().await.unwrap().expect("connection closed");
        serde_json::from_str(&line).unwrap()
    }

    /// Skips state frames until the next response.
    async fn response(&mut self) -> Value {
        loop {
            let frame = self.next().await;
            if frame["type"] == "response" {
                return frame["data"].clone();
            }
        }
    }
}

async fn start() -> (TcpListener, SessionHandle) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let session = SessionHandle::spawn("tcp", &RuntimeConfig::default().with_seed(3));
    (listener, session)
}

async fn connect(listener: &TcpListener, session: &SessionHandle, id: &str) -> Client {
    let stream = TcpStream::connect(listener.local_addr().unwrap()).await.unwrap();
    let (server_side, _) = listener.accept().await.unwrap();
    let session = session.clone();
    let player = PlayerId::from(id);
    tokio::spawn(async move { connection::serve(server_side, player, session).await });

    let (read_half, writer) = stream.into_split();
    Client {
        lines: BufReader::new(read_half).lines(),
        writer,
    }
}

#[tokio::test]
async fn first_frame_is_a_snapshot() {
    let (listener, session) = start().await;
    let mut client = connect(&listener, &session, "c1").await;

    let frame = client.next().await;
    assert_eq!(frame["type"], "state");
    assert_eq!(frame["data"]["phase"], "WAITING");
    assert_eq!(frame["data"]["locations"][0], "starting_grounds");
}

#[tokio::test]
async fn actions_get_a_response_and_a_broadcast() {
    let (listener, session) = start().await;
    let mut ann = connect(&listener, &session, "c1").await;
    let mut bob = connect(&listener, &session, "c2").await;
    ann.next().await;
    bob.next().await;

    ann.send(json!({"action": "join", "payload": {"name": "Ann"}})).await;
    let response = ann.response().await;
    assert_eq!(response, json!({"success": true, "message": "Joined as Ann."}));

    let frame = bob.next().await;
    assert_eq!(frame["type"], "state");
    assert_eq!(frame["data"]["players"][0]["name"], "Ann");
    assert_eq!(frame["data"]["players"][0]["location"], "unknown");
}

#[tokio::test]
async fn bad_input_is_answered_not_fatal() {
    let (listener, session) = start().await;
    let mut client = connect(&listener, &session, "c1").await;
    client.next().await;

    client.send(json!({"action": "dance"})).await;
    let response = client.response().await;
    assert_eq!(response["success"], false);
    assert_eq!(response["message"], "Unknown action: dance");

    client.writer.write_all(b"not json\n").await.unwrap();
    let response = client.response().await;
    assert_eq!(response["success"], false);

    client.send(json!({"action": "join", "payload": {"name": "Ann"}})).await;
    assert_eq!(client.response().await["success"], true);
}

#[tokio::test]
async fn closing_the_socket_leaves_the_session() {
    let (listener, session) = start().await;
    let mut client = connect(&listener, &session, "c1").await;
    client.next().await;
    client.send(json!({"action": "join", "payload": {"name": "Ann"}})).await;
    client.response().await;

    let mut events = session.subscribe();
    drop(client);

    loop {
        let event = events.recv().await.unwrap();
        if event.state().players.is_empty() {
            break;
        }
    }
    assert!(!session.state().await.unwrap().contains_player(&PlayerId::from("c1")));
}
