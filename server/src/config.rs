//! Command-line and environment configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::store::{IdPolicy, TodoStore};

#[derive(Clone, Debug, Parser)]
#[command(name = "todo-server")]
#[command(about = "In-memory todo HTTP API")]
#[command(version)]
pub struct Config {
    /// Interface to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// How new todos get their id
    #[arg(long, env = "TODO_ID_POLICY", value_enum, default_value_t = IdPolicy::Sequential)]
    pub id_policy: IdPolicy,

    /// Start with an empty store instead of the two seed todos
    #[arg(long, env = "TODO_NO_SEED")]
    pub no_seed: bool,

    /// Tracing filter used when RUST_LOG is unset
    #[arg(long, default_value = "todo_server=info,tower_http=info")]
    pub log_filter: String,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// The store the server starts with.
    pub fn store(&self) -> TodoStore {
        if self.no_seed {
            TodoStore::new(self.id_policy)
        } else {
            TodoStore::seeded(self.id_policy)
        }
    }
}
