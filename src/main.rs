use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = playfab_proxy::cli::Cli::parse();
    if let Err(e) = playfab_proxy::cmd::dispatch(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
