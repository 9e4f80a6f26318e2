//! Read-only environment sources

use std::collections::HashMap;
use std::env;
use std::ffi::OsString;

/// Lookup capability over an environment table.
///
/// Accessors only ever read through this trait, so tests can hand them a
/// [`MapEnv`] instead of mutating the process environment.
///
/// # Thread Safety
///
/// Does **not** require `Send + Sync`. Both provided sources are, so add
/// the bounds at your call site when sharing one across threads:
///
/// ```ignore
/// fn spawn_work<E: ReadEnv + Send + Sync + 'static>(env: Arc<E>) { … }
/// ```
pub trait ReadEnv {
    /// Raw value of `key`, or `None` if it is not set.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Value of `key` as UTF-8, with the same error semantics as [`std::env::var`].
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        match self.var_os(key) {
            Some(value) => value.into_string().map_err(env::VarError::NotUnicode),
            None => Err(env::VarError::NotPresent),
        }
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for &E {
    #[inline]
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

impl<E: ReadEnv + ?Sized> ReadEnv for Box<E> {
    #[inline]
    fn var_os(&self, key: &str) -> Option<OsString> {
        (**self).var_os(key)
    }
}

/// Zero-sized type, delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }
}

/// Owned, immutable-through-[`ReadEnv`] environment table.
///
/// ```rust
/// use typedenv::{get_uint, MapEnv};
///
/// let env = MapEnv::new().with("WORKERS", "8");
/// assert_eq!(get_uint(&env, "WORKERS", 1), 8);
/// assert_eq!(get_uint(&env, "RETRIES", 3), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, OsString>,
}

impl MapEnv {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    ///
    /// Variables whose names are not valid UTF-8 are skipped since they
    /// cannot be addressed by a `&str` key.
    pub fn capture() -> Self {
        env::vars_os()
            .filter_map(|(key, value)| key.into_string().ok().map(|key| (key, value)))
            .collect()
    }

    /// Add or replace `key`, consuming and returning the table.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Number of variables in the table.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// `true` if the table holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl ReadEnv for MapEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_sources_are_send_sync() {
        assert_send_sync::<SystemEnv>();
        assert_send_sync::<MapEnv>();
    }

    #[test]
    fn test_system_env_delegation() {
        let std_result = std::env::var("PATH");
        let provider_result = SystemEnv.var("PATH");
        assert_eq!(std_result.is_ok(), provider_result.is_ok());
    }

    #[test]
    fn test_system_env_missing() {
        assert_eq!(SystemEnv.var_os("TYPEDENV_NONEXISTENT_VAR_12345"), None);
        assert_eq!(
            SystemEnv.var("TYPEDENV_NONEXISTENT_VAR_12345"),
            Err(env::VarError::NotPresent)
        );
    }

    #[test]
    fn test_map_env_lookup() {
        let env = MapEnv::new().with("KEY", "VALUE").with("EMPTY", "");

        assert_eq!(env.var("KEY"), Ok("VALUE".to_string()));
        assert_eq!(env.var("EMPTY"), Ok(String::new()));
        assert_eq!(env.var("MISSING"), Err(env::VarError::NotPresent));
        assert_eq!(env.len(), 2);
    }

    #[test]
    fn test_map_env_with_replaces() {
        let env = MapEnv::new().with("KEY", "first").with("KEY", "second");
        assert_eq!(env.var("KEY"), Ok("second".to_string()));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_map_env_from_iter() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.var("A"), Ok("1".to_string()));
        assert_eq!(env.var("B"), Ok("2".to_string()));
        assert!(!env.is_empty());
    }

    #[test]
    fn test_map_env_capture_matches_process() {
        let env = MapEnv::capture();
        assert_eq!(env.var_os("PATH"), std::env::var_os("PATH"));
    }

    #[test]
    fn test_reference_and_box_sources() {
        fn lookup<E: ReadEnv>(env: E, key: &str) -> Option<String> {
            env.var(key).ok()
        }

        let env = MapEnv::new().with("KEY", "VALUE");
        assert_eq!(lookup(&env, "KEY"), Some("VALUE".to_string()));

        let boxed: Box<dyn ReadEnv> = Box::new(env);
        assert_eq!(lookup(boxed, "KEY"), Some("VALUE".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_var_reports_not_unicode() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(vec![0x66, 0x6f, 0xff]);
        let env = MapEnv::new().with("RAW", raw.clone());

        assert_eq!(env.var_os("RAW"), Some(raw.clone()));
        assert_eq!(env.var("RAW"), Err(env::VarError::NotUnicode(raw)));
    }
}
