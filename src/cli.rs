use clap::Parser;

/// Print the account, principal ARN and user id of the ambient AWS credentials.
///
/// Credentials are looked up from the environment, the shared config files,
/// the ECS task metadata endpoint and the EC2 instance metadata service, in
/// that order.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {}
