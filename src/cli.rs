use std::net::SocketAddr;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Address the console listens on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: SocketAddr,

    /// Base URL of the archive backend.
    #[arg(long, env = "BOOKDECK_BACKEND", default_value = "http://127.0.0.1:9427")]
    pub backend: String,
}
