//! Health endpoint served over a real socket.

use std::time::Duration;

use chatdesk::adapter::inbound::http;
use chatdesk::domain::{ConversationId, InboundEvent};
use chatdesk::port::EventHandler;
use chatdesk::testkit::config::{dry_run, recording_desk};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio_util::sync::CancellationToken;

async fn get(address: &str, path: &str) -> String {
    let mut stream = None;
    for _ in 0..50 {
        match TcpStream::connect(address).await {
            Ok(s) => {
                stream = Some(s);
                break;
            }
            Err(_) => tokio::time::sleep(Duration::from_millis(20)).await,
        }
    }
    let mut stream = stream.expect("server accepts connections");
    let request = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();
    response
}

#[tokio::test]
async fn health_reports_trading_flag() {
    let (desk, _responder) = recording_desk(&dry_run());
    let listener = http::bind("127.0.0.1:0").await.expect("bind health listener");
    let address = listener.local_addr().expect("bound address").to_string();
    let stop = CancellationToken::new();
    let server_stop = stop.clone();

    let server = tokio::spawn(http::serve(
        listener,
        http::health::router(desk.status()),
        async move { server_stop.cancelled().await },
    ));

    let response = get(&address, "/health").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains(r#""status":"ok""#));
    assert!(response.contains(r#""tradingActive":false"#));
    assert!(response.contains(r#""timestamp":""#));

    desk.handler().handle(InboundEvent::from_text(
        ConversationId::new(7),
        "3️⃣ Start/Stop Trading",
    ));
    let response = get(&address, "/health").await;
    assert!(response.contains(r#""tradingActive":true"#));

    // Probing does not change state.
    let _ = get(&address, "/health").await;
    assert!(desk.store.trading_active());

    let response = get(&address, "/nope").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");

    stop.cancel();
    server.await.unwrap().unwrap();
}
