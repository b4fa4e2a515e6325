pub mod codec;
pub mod listener;
pub mod server;

pub use listener::DnsListeners;
pub use server::DnsServerHandler;
