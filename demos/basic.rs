//! Basic usage example

use tracing::Level;
use typedenv::{get, get_bool, get_f64, get_list, get_u8, get_uint, SystemEnv};

#[derive(Debug)]
struct Config {
    pub server_addr: String,
    pub max_connections: u64,
    pub retries: u8,
    pub debug_mode: bool,
    pub sample_rate: f64,
    pub allowed_origins: Vec<String>,
}

impl Config {
    fn from_env() -> Self {
        let env = SystemEnv;
        Self {
            server_addr: get(&env, "SERVER_ADDR", "127.0.0.1:8080"),
            max_connections: get_uint(&env, "MAX_CONNECTIONS", 10),
            retries: get_u8(&env, "RETRIES", 3),
            debug_mode: get_bool(&env, "DEBUG_MODE", false),
            sample_rate: get_f64(&env, "SAMPLE_RATE", 1.0),
            allowed_origins: get_list(&env, "ALLOWED_ORIGINS", vec!["*".to_string()]),
        }
    }
}

fn main() {
    // Unparseable values are reported at debug level
    tracing_subscriber::fmt().with_max_level(Level::DEBUG).init();

    // Set environment variables for demonstration
    std::env::set_var("SERVER_ADDR", "0.0.0.0:3000");
    std::env::set_var("MAX_CONNECTIONS", "not-a-number");
    std::env::set_var("DEBUG_MODE", "T");
    std::env::set_var("ALLOWED_ORIGINS", "https://a.example,https://b.example");

    let config = Config::from_env();

    println!("Configuration loaded:");
    println!("  Server Address: {}", config.server_addr);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Retries: {}", config.retries);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Sample Rate: {}", config.sample_rate);
    println!("  Allowed Origins: {:?}", config.allowed_origins);
}
