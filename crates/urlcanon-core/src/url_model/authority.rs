//! Authority splitting: `[userinfo@]host[:port]`.

use crate::error::InvalidUrlReason;

pub(super) struct Authority<'a> {
    pub userinfo: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u16>,
}

pub(super) fn split_authority(authority: &str) -> Result<Authority<'_>, InvalidUrlReason> {
    let (userinfo, host_port) = match authority.rsplit_once('@') {
        Some((u, hp)) => (Some(u), hp),
        None => (None, authority),
    };

    let (host, port) = if host_port.starts_with('[') {
        let close = host_port
            .find(']')
            .ok_or(InvalidUrlReason::UnterminatedIpv6)?;
        let host = &host_port[..=close];
        let after = &host_port[close + 1..];
        let port = if after.is_empty() {
            None
        } else {
            let p = after
                .strip_prefix(':')
                .ok_or(InvalidUrlReason::InvalidPort)?;
            parse_port(p)?
        };
        (host, port)
    } else {
        match host_port.rsplit_once(':') {
            Some((h, p)) => (h, parse_port(p)?),
            None => (host_port, None),
        }
    };

    if host.is_empty() || host == "[]" {
        return Err(InvalidUrlReason::EmptyHost);
    }
    if host.chars().any(|c| c == ' ' || c.is_ascii_control()) {
        return Err(InvalidUrlReason::InvalidHost);
    }

    Ok(Authority {
        userinfo,
        host,
        port,
    })
}

/// Empty port text (`host:`) counts as absent.
fn parse_port(p: &str) -> Result<Option<u16>, InvalidUrlReason> {
    if p.is_empty() {
        return Ok(None);
    }
    // u16::from_str would accept a leading '+'.
    if !p.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidUrlReason::InvalidPort);
    }
    p.parse::<u16>()
        .map(Some)
        .map_err(|_| InvalidUrlReason::InvalidPort)
}
