pub mod hostname_matcher;

pub use hostname_matcher::HostnameMatcher;
