use std::time::Duration;

use anyhow::{bail, Context};
use zosmf_domain::ConnectionProfile;

use crate::cli::ConnectionArgs;

const DEFAULT_PORT: u16 = 443;

/// Resolves the profile from flags, then the process environment (after
/// loading `.env`).
pub fn load_profile(args: &ConnectionArgs) -> anyhow::Result<ConnectionProfile> {
    dotenv::dotenv().ok();
    resolve_profile(args, |key| std::env::var(key).ok())
}

/// Flags win over `env`. Host, user and password are mandatory.
pub fn resolve_profile(
    args: &ConnectionArgs,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<ConnectionProfile> {
    let host = required(args.host.clone(), &env, "ZOSMF_HOST", "--host")?;
    let user = required(args.user.clone(), &env, "ZOSMF_USER", "--user")?;
    let password = required(args.password.clone(), &env, "ZOSMF_PASSWORD", "--password")?;

    let port = match args.port {
        Some(port) => port,
        None => match env("ZOSMF_PORT") {
            Some(port) => port
                .trim()
                .parse()
                .with_context(|| format!("ZOSMF_PORT is not a port number: {port}"))?,
            None => DEFAULT_PORT,
        },
    };

    let reject_unauthorized = if args.insecure {
        false
    } else {
        match env("ZOSMF_REJECT_UNAUTHORIZED") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("ZOSMF_REJECT_UNAUTHORIZED must be true or false: {value}"))?,
            None => true,
        }
    };

    let timeout = match args.timeout {
        Some(secs) => Some(secs),
        None => env("ZOSMF_TIMEOUT_SECS")
            .map(|secs| {
                secs.trim()
                    .parse::<u64>()
                    .with_context(|| format!("ZOSMF_TIMEOUT_SECS is not a number: {secs}"))
            })
            .transpose()?,
    };

    let profile = ConnectionProfile::new(host, port, user, password)
        .with_reject_unauthorized(reject_unauthorized);
    Ok(match timeout {
        Some(secs) => profile.with_timeout(Duration::from_secs(secs)),
        None => profile,
    })
}

fn required(
    flag: Option<String>,
    env: &impl Fn(&str) -> Option<String>,
    key: &str,
    name: &str,
) -> anyhow::Result<String> {
    match flag.or_else(|| env(key)).filter(|value| !value.trim().is_empty()) {
        Some(value) => Ok(value),
        None => bail!("Missing connection setting: pass {name} or set {key}"),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
