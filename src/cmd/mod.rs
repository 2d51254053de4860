//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function routes the parsed CLI to the appropriate
//! subcommand handler: [`run`] or [`health`].

pub mod health;
pub mod run;

use crate::cli::{Cli, Commands};
use crate::error::ProxyError;

pub async fn dispatch(cli: Cli) -> Result<(), ProxyError> {
    match cli.command {
        Some(Commands::Run(args)) => run::execute(*args).await,
        Some(Commands::Health(args)) => health::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  playfab-proxy v{version}: pass-through proxy for the PlayFab client API\n\n  \
         No command provided. To get started:\n\n    \
         playfab-proxy run                     Start the proxy on :3000\n    \
         playfab-proxy run --title-id ABCD1    Proxy to another title\n    \
         playfab-proxy --help                  See all commands and options\n"
    );
}
