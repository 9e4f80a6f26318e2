//! Example reading from an in-memory snapshot instead of the process environment

use std::net::SocketAddr;
use typedenv::{get_bytes, get_i64, get_list_by, get_parsed, MapEnv, ReadEnv};

fn describe<E: ReadEnv>(label: &str, env: &E) {
    let fallback: SocketAddr = ([127, 0, 0, 1], 8080).into();

    println!("{label}:");
    println!("  Bind: {}", get_parsed(env, "BIND", fallback));
    println!("  Offset: {}", get_i64(env, "OFFSET", 0));
    println!("  Search Path: {:?}", get_list_by(env, "SEARCH_PATH", ':', Vec::new()));
    println!("  Token Bytes: {}", get_bytes(env, "TOKEN", Vec::new()).len());
}

fn main() {
    tracing_subscriber::fmt::init();

    let staging = MapEnv::new()
        .with("BIND", "0.0.0.0:9000")
        .with("OFFSET", "-15")
        .with("SEARCH_PATH", "/opt/app/bin:/usr/bin")
        .with("TOKEN", "s3cr3t");

    describe("Staging snapshot", &staging);
    describe("Process snapshot", &MapEnv::capture());
}
