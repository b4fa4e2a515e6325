use std::fmt;

/// DNS class of a question or record. Only `IN` has meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DnsClass {
    Internet,
    Other(u16),
}

impl DnsClass {
    pub fn to_u16(&self) -> u16 {
        match self {
            DnsClass::Internet => 1,
            DnsClass::Other(code) => *code,
        }
    }

    pub fn from_u16(code: u16) -> Self {
        match code {
            1 => DnsClass::Internet,
            other => DnsClass::Other(other),
        }
    }
}

impl fmt::Display for DnsClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsClass::Internet => f.write_str("IN"),
            DnsClass::Other(code) => write!(f, "CLASS{}", code),
        }
    }
}
