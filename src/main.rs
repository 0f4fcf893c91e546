use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use acuity_site::commands;
use acuity_site::platform::{NativeSignals, SignalSource, Signals};

/// acuity-site - download routing for the Acuity landing page
///
/// Resolves a visitor's platform from its platform string and user agent,
/// and shows how the page's download buttons are wired for it.
///
/// Examples:
///   acuity-site resolve --platform MacIntel
///   acuity-site route --user-agent "Mozilla/5.0 (X11; Linux x86_64)" --click primary
///   acuity-site check --catalog ./catalog.json
#[derive(Parser, Debug)]
#[command(author, version = env!("ACUITY_SITE_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Download catalog file (JSON; also via ACUITY_CATALOG)
    #[arg(long = "catalog", short = 'c', value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the platform a client resolves to
    Resolve(SignalArgs),

    /// Route the landing page and simulate clicks
    Route(RouteArgs),

    /// Check that catalog URIs point at published artifacts
    Check,

    /// Print the effective download catalog
    Catalog,

    /// Print the launcher window configuration
    Window,
}

#[derive(clap::Args, Debug)]
pub struct SignalArgs {
    /// Low-level platform identifier (e.g. "Win32", "MacIntel"); defaults to this machine
    #[arg(long = "platform", short = 'p', value_name = "PLATFORM")]
    pub platform: Option<String>,

    /// User-agent string
    #[arg(long = "user-agent", short = 'u', value_name = "UA")]
    pub user_agent: Option<String>,
}

impl SignalArgs {
    /// Flags override the signals of this machine one by one.
    fn signals(&self) -> Signals {
        let native = NativeSignals.signals();
        Signals::new(
            self.platform.clone().unwrap_or(native.platform),
            self.user_agent.clone().unwrap_or(native.user_agent),
        )
    }
}

#[derive(clap::Args, Debug)]
pub struct RouteArgs {
    #[command(flatten)]
    pub signals: SignalArgs,

    /// Element to click after routing ("primary", a platform key, or an element id)
    #[arg(long = "click", value_name = "ELEMENT")]
    pub clicks: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = acuity_site::runtime::RealRuntime;

    match cli.command {
        Commands::Resolve(args) => commands::resolve(&args.signals()),
        Commands::Route(args) => {
            commands::route(runtime, cli.catalog, &args.signals.signals(), &args.clicks)?
        }
        Commands::Check => commands::check(runtime, cli.catalog).await?,
        Commands::Catalog => commands::catalog(runtime, cli.catalog)?,
        Commands::Window => commands::window()?,
    }
    Ok(())
}
