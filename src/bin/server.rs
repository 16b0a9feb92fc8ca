//! Entry point of the JSON Sudoku service. Binds the port given by the
//! `PORT` environment variable (3000 by default) and serves the routes from
//! [sudoku_solver::api].

use std::env;
use std::io;
use std::net::{Ipv4Addr, SocketAddr};

use tokio::net::TcpListener;

use sudoku_solver::api;

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let port = env::var("PORT").ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = TcpListener::bind(address).await?;

    log::info!("listening on {}", address);

    axum::serve(listener, api::router()).await
}
