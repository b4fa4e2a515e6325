use clap::{Parser, Subcommand};
use ec2_dns_domain::CliOverrides;

mod bootstrap;
mod commands;
mod di;
mod server;

#[derive(Parser, Debug)]
#[command(name = "ec2-dns")]
#[command(version)]
#[command(about = "Resolve AWS EC2 internal hostnames locally")]
#[command(
    long_about = "Resolves AWS internal EC2 FQDNs where the IP is embedded in the hostname.\n\
                  For example: ip-10-78-32-168.us-east-2.compute.internal resolves to 10.78.32.168"
)]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Run the DNS resolver in the foreground
    Run {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<String>,

        /// DNS port (UDP and TCP)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Install the system resolver file routing ".internal" to this server (macOS, root)
    Setup,

    /// Verify the system resolver file
    Check,

    /// Print the version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (bind_address, dns_port) = match &cli.command {
        Command::Version => {
            commands::version();
            return Ok(());
        }
        Command::Run { bind, port } => (bind.clone(), *port),
        Command::Setup | Command::Check => (None, None),
    };

    let cli_overrides = CliOverrides {
        dns_port,
        bind_address,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    match cli.command {
        Command::Run { .. } => commands::run(config).await,
        Command::Setup => commands::setup(&config),
        Command::Check => commands::check(&config),
        Command::Version => Ok(()),
    }
}
