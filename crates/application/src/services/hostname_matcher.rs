use ec2_dns_domain::{DomainError, MatchResult};
use fancy_regex::Regex;
use std::net::Ipv4Addr;
use tracing::debug;

/// EC2 private DNS hostnames, which embed the instance's private IPv4 address:
///
/// - `ip-10-78-32-168.ec2.internal` (us-east-1)
/// - `ip-10-78-32-168.us-east-2.compute.internal` (every other region)
///
/// Octet groups are only checked for 1-3 digits here; range checking is left
/// to the address parser so that `ip-999-1-1-1...` is a miss, not an error.
const EC2_HOSTNAME_PATTERN: &str = r"(?i)^ip-(\d{1,3})-(\d{1,3})-(\d{1,3})-(\d{1,3})[.](?:[a-zA-Z0-9-]{1,255}[.]compute|ec2)[.]internal[.]?$";

/// Decodes the IPv4 address embedded in an EC2 internal hostname.
///
/// Compiled once at startup and shared by every listener; matching takes
/// `&self` only and holds no state between calls.
#[derive(Debug, Clone)]
pub struct HostnameMatcher {
    pattern: Regex,
}

impl HostnameMatcher {
    pub fn new() -> Result<Self, DomainError> {
        let pattern = Regex::new(EC2_HOSTNAME_PATTERN)
            .map_err(|e| DomainError::InvalidPattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn match_name(&self, name: &str) -> MatchResult {
        let captures = match self.pattern.captures(name) {
            Ok(Some(captures)) => captures,
            Ok(None) => return MatchResult::NoMatch,
            Err(e) => {
                debug!(name = %name, error = %e, "Hostname pattern evaluation failed");
                return MatchResult::NoMatch;
            }
        };

        let octets: Vec<&str> = (1..=4)
            .filter_map(|group| captures.get(group).map(|m| m.as_str()))
            .collect();
        if octets.len() != 4 {
            return MatchResult::NoMatch;
        }

        octets.join(".").parse::<Ipv4Addr>().ok().into()
    }
}
