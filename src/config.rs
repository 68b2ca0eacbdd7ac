// src/config.rs

use crate::content::models::Resource;
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Command line arguments, each with an environment fallback.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "ShieldHub cybersecurity awareness service")]
pub struct Config {
    /// Address to bind
    #[arg(long, env = "SHIELDHUB_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// JSON bundle of articles, quiz questions and the featured resource to load at startup
    #[arg(long, env = "SHIELDHUB_CONTENT")]
    pub content: Option<PathBuf>,

    /// Do not load the built-in quiz when no content bundle is given
    #[arg(long, env = "SHIELDHUB_NO_SEED")]
    pub no_seed: bool,

    /// Title of the featured resource
    #[arg(long, env = "SHIELDHUB_RESOURCE_TITLE")]
    pub resource_title: Option<String>,

    /// Link of the featured resource
    #[arg(long, env = "SHIELDHUB_RESOURCE_URL")]
    pub resource_url: Option<String>,

    /// Description of the featured resource
    #[arg(long, env = "SHIELDHUB_RESOURCE_DESCRIPTION")]
    pub resource_description: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Config {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Applies any resource overrides on top of `base`. Returns `None` when nothing is overridden.
    pub fn resource_override(&self, base: Resource) -> Option<Resource> {
        if self.resource_title.is_none()
            && self.resource_url.is_none()
            && self.resource_description.is_none()
        {
            return None;
        }
        Some(Resource {
            title: self.resource_title.clone().unwrap_or(base.title),
            url: self.resource_url.clone().unwrap_or(base.url),
            description: self.resource_description.clone().unwrap_or(base.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("shieldhub").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn explicit_address() {
        let config = parse(&["--host", "127.0.0.1", "--port", "8080"]);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse().unwrap());
    }

    #[test]
    fn resource_override_merges_fields() {
        let config = parse(&["--resource-title", "Stay Safe"]);
        let merged = config.resource_override(Resource::default()).unwrap();
        assert_eq!(merged.title, "Stay Safe");
        assert_eq!(merged.url, Resource::default().url);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = Config::try_parse_from(["shieldhub", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}
