use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;
use schedweb_core::error::{Result, SchedWebError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served for every non-ops path.
    #[serde(default = "default_static_root")]
    pub static_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_root: default_static_root(),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(SchedWebError::BadRequest("port must be between 1 and 65535".into()));
        }
        if self.static_root.as_os_str().is_empty() {
            return Err(SchedWebError::BadRequest("static_root must not be empty".into()));
        }
        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| SchedWebError::BadRequest(format!("host must be an IP address: {e}")))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}
fn default_static_root() -> PathBuf {
    PathBuf::from("public")
}
