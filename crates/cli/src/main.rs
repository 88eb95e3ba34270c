use clap::Parser;
use nameserver_sort_domain::config::ProbeMethod;
use nameserver_sort_domain::CliOverrides;
use std::path::PathBuf;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "nameserver-sort")]
#[command(version)]
#[command(about = "Rank a country's public nameservers by latency")]
struct Cli {
    /// Country code to fetch nameservers for
    #[arg(short = 'c', long, value_name = "CODE")]
    country_code: Option<String>,

    /// Output debug information
    #[arg(short = 'd', long)]
    debug: bool,

    /// Base name of the JSON and CSV outputs
    #[arg(short = 'f', long, value_name = "NAME")]
    filename: Option<String>,

    /// Max number of nameservers to test
    #[arg(short = 'm', long, value_name = "NUM")]
    max: Option<usize>,

    /// Directory to write outputs to
    #[arg(short = 'w', long, value_name = "DIR")]
    write: Option<PathBuf>,

    /// Probe timeout in seconds (IPv4 and hostnames)
    #[arg(short = 't', long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Minimum replies per probe (IPv4 and hostnames)
    #[arg(short = 'r', long, value_name = "NUM")]
    replies: Option<u32>,

    /// Probe method (dns, ping)
    #[arg(long, value_name = "METHOD")]
    method: Option<ProbeMethod>,

    /// Max probes in flight at once
    #[arg(long, value_name = "NUM")]
    concurrency: Option<usize>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let log_level = match (&self.log_level, self.debug) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some("debug".to_string()),
            (None, false) => None,
        };

        CliOverrides {
            country_code: self.country_code.clone(),
            max_servers: self.max,
            timeout_secs: self.timeout,
            min_replies: self.replies,
            method: self.method,
            max_in_flight: self.concurrency,
            output_dir: self.write.clone(),
            filename: self.filename.clone(),
            log_level,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    info!("Starting nameserver-sort v{}", env!("CARGO_PKG_VERSION"));

    let listing_code = config.source.listing_code();
    info!(
        country = %listing_code,
        max_servers = config.source.max_servers,
        method = %config.probe.method,
        output = %config.output.directory.display(),
        "Configuration loaded"
    );

    let use_cases = di::UseCases::new(&config)?;

    let ranked = use_cases
        .rank_nameservers
        .execute(
            &listing_code,
            config.source.max_servers,
            config.probe.settings(),
        )
        .await
        .inspect_err(|e| error!(error = %e, "Ranking failed"))?;

    let Some(fastest) = ranked.fastest() else {
        error!(country = %listing_code, "No usable results");
        anyhow::bail!("no usable results for '{}'", listing_code);
    };

    info!(
        address = %fastest.address,
        average_ms = fastest.average,
        "Fastest nameserver"
    );

    let written = use_cases.write_results.execute(&ranked)?;
    for path in &written {
        info!(path = %path.display(), "Written");
    }

    Ok(())
}
