pub mod resolver_file;

pub use resolver_file::{ResolverFile, ResolverFileError};
