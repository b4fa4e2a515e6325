use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    NoMatch,
    Address(Ipv4Addr),
}

impl MatchResult {
    pub fn address(&self) -> Option<Ipv4Addr> {
        match self {
            MatchResult::Address(addr) => Some(*addr),
            MatchResult::NoMatch => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Address(_))
    }
}

impl From<Option<Ipv4Addr>> for MatchResult {
    fn from(addr: Option<Ipv4Addr>) -> Self {
        addr.map_or(MatchResult::NoMatch, MatchResult::Address)
    }
}
