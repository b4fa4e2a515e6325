const BUILD_DATE: Option<&str> = option_env!("EC2_DNS_BUILD_DATE");

pub fn version() {
    println!("ec2-dns {}", env!("CARGO_PKG_VERSION"));
    println!("  Build date: {}", BUILD_DATE.unwrap_or("unknown"));
    println!(
        "  Built for:  {}/{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    );
}
