//! Typed accessors with default fallback
//!
//! Every accessor looks the variable up once, parses it once, and returns
//! the caller's default if the variable is unset or the value does not
//! parse. Nothing here reports an error.

use crate::error::{EnvError, InvalidBool, InvalidFloat};
use crate::source::ReadEnv;
use std::convert::Infallible;
use std::env::VarError;
use std::ffi::OsString;
use std::fmt::Display;
use std::str::FromStr;

/// Separator used by [`get_list`].
pub const DEFAULT_LIST_SEPARATOR: char = ',';

/// Text value of `key`, or `default` if unset.
///
/// An empty value is returned as-is. A value that is not valid UTF-8 falls
/// back to `default`.
pub fn get<E: ReadEnv + ?Sized>(env: &E, key: &str, default: impl Into<String>) -> String {
    parse_or_default(env, key, default.into(), Ok::<_, Infallible>)
}

/// Unsigned integer value of `key` in base 10, or `default`.
///
/// Negative and out-of-range values fall back to `default`.
pub fn get_uint<E: ReadEnv + ?Sized>(env: &E, key: &str, default: u64) -> u64 {
    get_parsed(env, key, default)
}

/// `u8` value of `key` in base 10, or `default`.
///
/// Values outside `0..=255` fall back to `default`.
pub fn get_u8<E: ReadEnv + ?Sized>(env: &E, key: &str, default: u8) -> u8 {
    get_parsed(env, key, default)
}

/// Boolean value of `key`, or `default`.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True`, `0`, `f`, `F`, `FALSE`,
/// `false` and `False`. Any other text falls back to `default`.
pub fn get_bool<E: ReadEnv + ?Sized>(env: &E, key: &str, default: bool) -> bool {
    parse_or_default(env, key, default, |value| parse_bool(&value))
}

/// Raw bytes of `key`, or `default` if unset.
///
/// The value is not decoded, so non-UTF-8 content is returned unchanged
/// (in the platform's encoded form). An empty value yields an empty vector.
pub fn get_bytes<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    default: impl Into<Vec<u8>>,
) -> Vec<u8> {
    env.var_os(key)
        .map(OsString::into_encoded_bytes)
        .unwrap_or_else(|| default.into())
}

/// Value of `key` split on [`DEFAULT_LIST_SEPARATOR`], or `default` if unset.
///
/// ```rust
/// use typedenv::{get_list, MapEnv};
///
/// let env = MapEnv::new().with("HOSTS", "a,b,c").with("NONE", "");
/// assert_eq!(get_list(&env, "HOSTS", vec![]), ["a", "b", "c"]);
/// assert!(get_list(&env, "NONE", vec!["x".to_string()]).is_empty());
/// ```
pub fn get_list<E: ReadEnv + ?Sized>(env: &E, key: &str, default: Vec<String>) -> Vec<String> {
    get_list_by(env, key, DEFAULT_LIST_SEPARATOR, default)
}

/// Value of `key` split on `separator`, or `default` if unset.
///
/// An empty value yields an empty list. Elements are not trimmed and empty
/// elements between separators are kept.
pub fn get_list_by<E: ReadEnv + ?Sized>(
    env: &E,
    key: &str,
    separator: char,
    default: Vec<String>,
) -> Vec<String> {
    parse_or_default(env, key, default, |value| {
        Ok::<_, Infallible>(split_list(&value, separator))
    })
}

/// 64-bit floating point value of `key`, or `default`.
///
/// Literals too large for `f64` (`1e400`) fall back to `default`; only a
/// spelled-out infinity (`inf`, `-Infinity`, ...) yields an infinite value.
/// Hexadecimal float literals such as `0x1p-2` are not accepted.
pub fn get_f64<E: ReadEnv + ?Sized>(env: &E, key: &str, default: f64) -> f64 {
    parse_or_default(env, key, default, |value| parse_f64(&value))
}

/// 64-bit signed integer value of `key` in base 10, or `default`.
pub fn get_i64<E: ReadEnv + ?Sized>(env: &E, key: &str, default: i64) -> i64 {
    get_parsed(env, key, default)
}

/// Value of `key` parsed with [`FromStr`], or `default`.
///
/// The numeric accessors are thin wrappers over this; use it directly for
/// any other `FromStr` type.
///
/// ```rust
/// use std::net::SocketAddr;
/// use typedenv::{get_parsed, MapEnv};
///
/// let env = MapEnv::new().with("BIND", "0.0.0.0:9000").with("PORT", "http");
/// let fallback: SocketAddr = "127.0.0.1:8080".parse().unwrap();
///
/// assert_eq!(get_parsed(&env, "BIND", fallback).port(), 9000);
/// assert_eq!(get_parsed::<_, u16>(&env, "PORT", 8080), 8080);
/// ```
pub fn get_parsed<E, T>(env: &E, key: &str, default: T) -> T
where
    E: ReadEnv + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    parse_or_default(env, key, default, |value| value.parse::<T>())
}

fn parse_or_default<E, T, F, Err>(env: &E, key: &str, default: T, parse: F) -> T
where
    E: ReadEnv + ?Sized,
    F: FnOnce(String) -> Result<T, Err>,
    Err: Display,
{
    let parsed = lookup(env, key)
        .and_then(|value| parse(value).map_err(|e| EnvError::parse_error::<T>(key, e)));

    match parsed {
        Ok(value) => value,
        Err(EnvError::Missing { .. }) => default,
        Err(err) => {
            tracing::debug!(
                var = err.name(),
                type_name = std::any::type_name::<T>(),
                reason = %err,
                "unusable environment value, using default"
            );
            default
        }
    }
}

fn lookup<E: ReadEnv + ?Sized>(env: &E, key: &str) -> Result<String, EnvError> {
    env.var(key).map_err(|e| match e {
        VarError::NotPresent => EnvError::missing(key),
        VarError::NotUnicode(_) => EnvError::not_unicode(key),
    })
}

fn parse_bool(value: &str) -> Result<bool, InvalidBool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(InvalidBool(other.to_string())),
    }
}

fn parse_f64(value: &str) -> Result<f64, InvalidFloat> {
    let number = value.parse::<f64>()?;
    if number.is_infinite() && !is_spelled_infinity(value) {
        return Err(InvalidFloat::OutOfRange(value.to_string()));
    }
    Ok(number)
}

fn is_spelled_infinity(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn split_list(value: &str, separator: char) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    value.split(separator).map(str::to_string).collect()
}
