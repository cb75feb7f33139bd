//! Auth-token resolution for the CLI.
//!
//! The token is looked up, in order, in `HONEYBADGER_AUTH_TOKEN`, then in one
//! of the supported password managers (1Password, Bitwarden, KeePassXC) when
//! the matching environment variables are set.

use std::fmt;
use std::process::{Command, Stdio};

use crate::error::Error;

pub const ENV_AUTH_TOKEN: &str = "HONEYBADGER_AUTH_TOKEN";

/// Where the resolved token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    Env,
    OnePassword,
    Bitwarden,
    Keepassxc,
}

impl fmt::Display for TokenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenSource::Env => ENV_AUTH_TOKEN,
            TokenSource::OnePassword => "1Password",
            TokenSource::Bitwarden => "Bitwarden",
            TokenSource::Keepassxc => "KeePassXC",
        };
        f.write_str(name)
    }
}

/// Resolve the personal auth token from the environment or a password manager.
pub fn resolve_auth_token() -> Result<(String, TokenSource), Error> {
    resolve_with(&|key: &str| std::env::var(key).ok(), &run_cmd)
}

type Lookup<'a> = dyn Fn(&str) -> Option<String> + 'a;
type Runner<'a> = dyn Fn(&[&str], &[(&str, &str)]) -> Option<String> + 'a;

fn resolve_with(lookup: &Lookup<'_>, run: &Runner<'_>) -> Result<(String, TokenSource), Error> {
    let var = |key: &str| -> Option<String> {
        lookup(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    if let Some(token) = var(ENV_AUTH_TOKEN) {
        return Ok((token, TokenSource::Env));
    }

    // op://vault/item/field
    if let Some(reference) = var("HONEYBADGER_OP_REFERENCE") {
        tracing::debug!("reading auth token from 1Password");
        return non_empty(run(&["op", "read", &reference], &[]), TokenSource::OnePassword);
    }

    if let Some(item_id) = var("HONEYBADGER_BW_ITEM_ID") {
        tracing::debug!("reading auth token from Bitwarden");
        let session = var("HONEYBADGER_BW_SESSION");
        let env: Vec<(&str, &str)> = session
            .as_deref()
            .map(|s| ("BW_SESSION", s))
            .into_iter()
            .collect();
        return non_empty(
            run(&["bw", "get", "password", &item_id], &env),
            TokenSource::Bitwarden,
        );
    }

    if let (Some(db), Some(entry)) = (var("HONEYBADGER_KPXC_DB"), var("HONEYBADGER_KPXC_ENTRY")) {
        tracing::debug!("reading auth token from KeePassXC");
        let attribute = var("HONEYBADGER_KPXC_ATTRIBUTE").unwrap_or_else(|| "Password".into());
        return non_empty(
            run(&["keepassxc-cli", "show", "-a", &attribute, &db, &entry], &[]),
            TokenSource::Keepassxc,
        );
    }

    Err(Error::Auth(format!(
        "no auth token found; set {} or configure a password manager \
         (HONEYBADGER_OP_REFERENCE, HONEYBADGER_BW_ITEM_ID, \
         HONEYBADGER_KPXC_DB + HONEYBADGER_KPXC_ENTRY)",
        ENV_AUTH_TOKEN
    )))
}

fn non_empty(output: Option<String>, source: TokenSource) -> Result<(String, TokenSource), Error> {
    match output.filter(|s| !s.is_empty()) {
        Some(token) => Ok((token, source)),
        None => Err(Error::Auth(format!("could not read auth token from {}", source))),
    }
}

/// Run a password-manager CLI and return its trimmed stdout.
/// stderr is discarded so prompts and diagnostics never reach our output.
fn run_cmd(args: &[&str], env: &[(&str, &str)]) -> Option<String> {
    let (bin, rest) = args.split_first()?;
    let mut cmd = Command::new(bin);
    cmd.args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null());
    for (key, value) in env {
        cmd.env(key, value);
    }
    let out = cmd.output().ok()?;
    if !out.status.success() {
        tracing::debug!(bin = %bin, status = %out.status, "credential command failed");
        return None;
    }
    String::from_utf8(out.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn never_runs(_: &[&str], _: &[(&str, &str)]) -> Option<String> {
        panic!("no command should run")
    }

    fn fails(_: &[&str], _: &[(&str, &str)]) -> Option<String> {
        None
    }

    #[test]
    fn env_token_wins() {
        let vars = env(&[
            ("HONEYBADGER_AUTH_TOKEN", "  abc123 "),
            ("HONEYBADGER_OP_REFERENCE", "op://v/i/f"),
        ]);
        let (token, source) =
            resolve_with(&|k: &str| vars.get(k).cloned(), &never_runs).unwrap();
        assert_eq!(token, "abc123");
        assert_eq!(source, TokenSource::Env);
    }

    #[test]
    fn one_password_reads_reference() {
        let vars = env(&[("HONEYBADGER_OP_REFERENCE", "op://Work/Honeybadger/token")]);
        let calls = RefCell::new(Vec::new());
        let run = |args: &[&str], _: &[(&str, &str)]| {
            calls.borrow_mut().push(args.join(" "));
            Some("from-op".to_string())
        };
        let (token, source) = resolve_with(&|k: &str| vars.get(k).cloned(), &run).unwrap();
        assert_eq!(token, "from-op");
        assert_eq!(source, TokenSource::OnePassword);
        assert_eq!(calls.borrow()[0], "op read op://Work/Honeybadger/token");
    }

    #[test]
    fn bitwarden_passes_session() {
        let vars = env(&[
            ("HONEYBADGER_BW_ITEM_ID", "item-uuid"),
            ("HONEYBADGER_BW_SESSION", "sess"),
        ]);
        let run = |args: &[&str], extra: &[(&str, &str)]| {
            assert_eq!(args, ["bw", "get", "password", "item-uuid"]);
            assert_eq!(extra, [("BW_SESSION", "sess")]);
            Some("from-bw".to_string())
        };
        let (token, source) = resolve_with(&|k: &str| vars.get(k).cloned(), &run).unwrap();
        assert_eq!(token, "from-bw");
        assert_eq!(source, TokenSource::Bitwarden);
    }

    #[test]
    fn keepassxc_defaults_to_password_attribute() {
        let vars = env(&[
            ("HONEYBADGER_KPXC_DB", "/tmp/db.kdbx"),
            ("HONEYBADGER_KPXC_ENTRY", "Web/Honeybadger"),
        ]);
        let run = |args: &[&str], _: &[(&str, &str)]| {
            assert_eq!(
                args,
                ["keepassxc-cli", "show", "-a", "Password", "/tmp/db.kdbx", "Web/Honeybadger"]
            );
            Some("from-kpxc".to_string())
        };
        let (_, source) = resolve_with(&|k: &str| vars.get(k).cloned(), &run).unwrap();
        assert_eq!(source, TokenSource::Keepassxc);
    }

    #[test]
    fn failed_command_is_an_auth_error() {
        let vars = env(&[("HONEYBADGER_BW_ITEM_ID", "item-uuid")]);
        let err = resolve_with(&|k: &str| vars.get(k).cloned(), &fails).unwrap_err();
        assert!(matches!(err, Error::Auth(ref msg) if msg.contains("Bitwarden")));
    }

    #[test]
    fn nothing_configured() {
        let err = resolve_with(&|_: &str| None, &fails).unwrap_err();
        assert!(matches!(err, Error::Auth(ref msg) if msg.contains("HONEYBADGER_AUTH_TOKEN")));
    }

    #[test]
    fn blank_env_token_is_ignored() {
        let vars = env(&[("HONEYBADGER_AUTH_TOKEN", "   ")]);
        assert!(resolve_with(&|k: &str| vars.get(k).cloned(), &fails).is_err());
    }
}
