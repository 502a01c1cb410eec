use clap::Parser;
use tracing_subscriber::EnvFilter;

use aws_caller::cli::Cli;
use aws_caller::credentials::{default_chain, CredentialsResolver};
use aws_caller::fast_exit;
use aws_caller::reporter::IdentityReporter;
use aws_caller::sts;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let resolver = CredentialsResolver::new(default_chain().await);
    let mut stdout = std::io::stdout().lock();

    if let Err(err) = IdentityReporter::run(&resolver, sts::connect, &mut stdout).await {
        fast_exit!("Error: {:?}", err);
    }
}
