//! ec2-dns Infrastructure Layer
pub mod dns;
pub mod system;
