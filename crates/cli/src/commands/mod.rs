mod check;
mod run;
mod setup;
mod version;

pub use check::check;
pub use run::run;
pub use setup::setup;
pub use version::version;
