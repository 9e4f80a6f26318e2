//! Typed environment variable accessors with default fallback
//!
//! `typedenv` reads a single environment variable, parses it into the
//! requested type, and hands back a caller-supplied default whenever the
//! variable is unset or its value does not parse. No accessor returns an
//! error or panics.
//!
//! # Features
//!
//! - **Typed**: text, `u64`, `u8`, `bool`, raw bytes, comma-separated lists,
//!   `f64`, `i64`, and any other `FromStr` type via [`get_parsed`]
//! - **Injectable environment**: accessors read through [`ReadEnv`], so
//!   tests can use a [`MapEnv`] instead of mutating the process environment
//! - **Quiet fallback**: unparseable values are reported as `tracing` debug
//!   events and otherwise replaced by the default
//!
//! # Value Parsing
//!
//! | Accessor | Type | Accepted text |
//! |----------|------|---------------|
//! | [`get`] | `String` | anything valid UTF-8, including empty |
//! | [`get_uint`], [`get_u8`] | `u64`, `u8` | base-10 digits in range |
//! | [`get_i64`] | `i64` | optionally signed base-10 digits in range |
//! | [`get_f64`] | `f64` | Rust float literals (`10.5`, `1e3`, `inf`) |
//! | [`get_bool`] | `bool` | `1 t T TRUE true True` / `0 f F FALSE false False` |
//! | [`get_bytes`] | `Vec<u8>` | anything |
//! | [`get_list`] | `Vec<String>` | comma-separated text, empty -> `[]` |
//!
//! # Example
//!
//! ```rust
//! use typedenv::{get, get_bool, get_f64, get_i64, get_uint, MapEnv};
//!
//! let env = MapEnv::new()
//!     .with("N", "10")
//!     .with("BAD", "abc")
//!     .with("F", "true")
//!     .with("X", "10.5")
//!     .with("Y", "VALUE")
//!     .with("NAME", "");
//!
//! assert_eq!(get_uint(&env, "N", 0), 10);
//! assert_eq!(get_uint(&env, "BAD", 0), 0);
//! assert!(get_bool(&env, "F", false));
//! assert_eq!(get_f64(&env, "X", 0.0), 10.5);
//! assert_eq!(get_i64(&env, "Y", 0), 0);
//!
//! // An empty value is still a value.
//! assert_eq!(get(&env, "NAME", "fallback"), "");
//! assert_eq!(get(&env, "UNSET", "fallback"), "fallback");
//! ```
//!
//! Reading the real process environment goes through [`SystemEnv`]:
//!
//! ```rust
//! use typedenv::{get_uint, SystemEnv};
//!
//! let workers = get_uint(&SystemEnv, "TYPEDENV_DOC_WORKERS", 4);
//! # assert_eq!(workers, 4);
//! ```

mod error;
mod get;
mod source;

pub use get::{
    get, get_bool, get_bytes, get_f64, get_i64, get_list, get_list_by, get_parsed, get_u8,
    get_uint, DEFAULT_LIST_SEPARATOR,
};
pub use source::{MapEnv, ReadEnv, SystemEnv};
