use anyhow::{bail, Context};
use ec2_dns_domain::Config;
use ec2_dns_infrastructure::system::ResolverFile;

pub fn setup(config: &Config) -> anyhow::Result<()> {
    if !cfg!(target_os = "macos") {
        bail!("setup currently only supports macOS");
    }

    // SAFETY: geteuid has no preconditions and cannot fail.
    if unsafe { libc::geteuid() } != 0 {
        bail!("setup must be run as root");
    }

    let resolver_file = ResolverFile::from_config(config);
    resolver_file.install().with_context(|| {
        format!(
            "could not set up resolver config {}",
            resolver_file.path().display()
        )
    })?;

    println!("Setup complete. You may now start with: `ec2-dns run`");
    Ok(())
}
