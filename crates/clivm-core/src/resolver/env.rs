//! Read-only view of the process environment.
//!
//! The search path and global config list are captured through this trait so
//! tests can describe an environment without mutating the real one.

use std::ffi::OsString;

pub trait EnvProvider {
    /// Raw value of `key`, if set.
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// Value of `key` when set, non-empty and valid UTF-8.
    fn var_nonempty(&self, key: &str) -> Option<String> {
        self.var_os(key)
            .and_then(|value| value.into_string().ok())
            .filter(|value| !value.is_empty())
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables; everything else reads as unset.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockEnv {
    vars: std::collections::BTreeMap<String, OsString>,
}

#[cfg(test)]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.vars.insert(key.into(), value.as_ref().to_os_string());
        self
    }
}

#[cfg(test)]
impl EnvProvider for MockEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_read_as_unset() {
        let env = MockEnv::new().with_var("PATHEXT", "").with_var("HOME", "/home/u");
        assert_eq!(env.var_nonempty("PATHEXT"), None);
        assert_eq!(env.var_nonempty("HOME").as_deref(), Some("/home/u"));
        assert_eq!(env.var_os("PATHEXT"), Some(OsString::new()));
        assert_eq!(env.var_os("MISSING"), None);
    }
}
