//! Command line and environment configuration for the server.

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

use clap::Parser;

use crate::PasswordHash;

/// The port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// The REST API server for managing users.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// The port to serve the API from.
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// The address to bind the server to.
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// File path to the JSON file the users are saved to.
    #[arg(long, env = "DATA_PATH", default_value = "./data/users.json")]
    pub data_path: PathBuf,

    /// The bcrypt cost used when hashing passwords.
    #[arg(long, env = "HASH_COST", default_value_t = PasswordHash::DEFAULT_COST)]
    pub hash_cost: u32,
}

impl Config {
    /// The port to listen on, falling back to [DEFAULT_PORT] with a warning if none was configured.
    pub fn port_or_default(&self) -> u16 {
        match self.port {
            Some(port) => port,
            None => {
                tracing::warn!("No port value specified, using the default port {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        }
    }

    /// The socket address the server should bind to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port_or_default())
    }
}
