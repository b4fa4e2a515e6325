use anyhow::Context;
use ec2_dns_domain::Config;
use ec2_dns_infrastructure::system::ResolverFile;

pub fn check(config: &Config) -> anyhow::Result<()> {
    let resolver_file = ResolverFile::from_config(config);
    resolver_file
        .check()
        .context("resolver not correctly configured, try `sudo ec2-dns setup`")?;

    println!(
        "Resolver config {} is correctly configured",
        resolver_file.path().display()
    );
    Ok(())
}
