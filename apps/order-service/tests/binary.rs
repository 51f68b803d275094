//! Order Service Binary Tests
//!
//! Runs the compiled `order-service` executable to check process-level startup
//! behavior.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{BufRead, BufReader};
use std::net::{TcpListener, TcpStream};
use std::process::{Command, Stdio};

fn service() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_order-service"));
    command
        .env("ORDER_SERVICE_HOST", "127.0.0.1")
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1");
    command
}

#[test]
fn occupied_port_exits_with_failure() {
    let occupant = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = occupant.local_addr().unwrap().port();

    let output = service()
        .env("ORDER_SERVICE_PORT", port.to_string())
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let expected = format!("failed to bind to port {port}");
    assert!(
        stdout.contains(&expected) || stderr.contains(&expected),
        "output does not name port {port}:\n{stdout}\n{stderr}"
    );

    drop(occupant);
}

#[test]
fn startup_line_reports_bound_port() {
    let mut child = service()
        .env("ORDER_SERVICE_PORT", "0")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    let stdout = child.stdout.take().unwrap();
    let marker = "Order Service running on port ";
    let line = BufReader::new(stdout)
        .lines()
        .map_while(Result::ok)
        .find(|line| line.contains(marker));

    let port: u16 = line
        .as_deref()
        .and_then(|line| line.split(marker).nth(1))
        .map(|rest| rest.chars().take_while(char::is_ascii_digit).collect::<String>())
        .and_then(|digits| digits.parse().ok())
        .unwrap_or(0);

    let connected = port != 0 && TcpStream::connect(("127.0.0.1", port)).is_ok();

    child.kill().unwrap();
    child.wait().unwrap();

    assert_ne!(port, 0, "startup line missing or reports port 0: {line:?}");
    assert!(connected, "nothing listening on reported port {port}");
}
