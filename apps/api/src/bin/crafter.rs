use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use postcrafter::build_gateway;
use postcrafter::config::Config;
use postcrafter::terminal::{self, clipboard::system_clipboard};
use postcrafter::wizard::Wizard;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // stderr, warnings only, so log lines do not interleave with the prompts
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("postcrafter=warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    println!("LinkedIn Post Crafter");
    println!("Select your goal, provide the key points, choose a tone, and let AI draft the post.");

    let mut wizard = Wizard::new(build_gateway(&config)?);
    let mut clipboard = system_clipboard();
    terminal::run(&mut wizard, clipboard.as_mut()).await?;

    Ok(())
}
