//! Host configuration
//!
//! Only decides how invocations reach the responder. Nothing here can
//! change the response itself.

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Set by the Lambda execution environment.
const LAMBDA_RUNTIME_API: &str = "AWS_LAMBDA_RUNTIME_API";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown transport '{0}' (expected lambda, stdio or http)")]
    UnknownTransport(String),

    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// How invocations arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    /// AWS Lambda runtime API
    Lambda,
    /// Length-prefixed JSON frames on stdin/stdout
    Stdio,
    /// Local HTTP server
    Http,
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lambda" => Ok(Transport::Lambda),
            "stdio" => Ok(Transport::Stdio),
            "http" => Ok(Transport::Http),
            _ => Err(ConfigError::UnknownTransport(s.to_string())),
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transport::Lambda => "lambda",
            Transport::Stdio => "stdio",
            Transport::Http => "http",
        };
        f.write_str(name)
    }
}

/// Host configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub transport: Transport,

    /// Bind address for the HTTP transport
    pub http_host: IpAddr,

    /// Port for the HTTP transport
    pub http_port: u16,
}

impl HostConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = match lookup("HELLO_RESPONDER_TRANSPORT") {
            Some(value) => value.parse()?,
            None if lookup(LAMBDA_RUNTIME_API).is_some() => Transport::Lambda,
            None => Transport::Http,
        };

        let http_host = parse_var(&lookup, "HELLO_RESPONDER_HOST")?
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));

        let http_port = parse_var(&lookup, "HELLO_RESPONDER_PORT")?.unwrap_or(8080);

        Ok(Self {
            transport,
            http_host,
            http_port,
        })
    }

    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }
}

fn parse_var<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(None),
    }
}
