// Runtime configuration read from the environment (optionally seeded from `.env`).

use anyhow::Context;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_DATA_FILE: &str = "peer_feedback.csv";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "mercadia_it_impact.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub data_file: PathBuf,
    pub export_file_name: String,
    pub admin_key: Option<String>,
    pub delete_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_addr = value("FEEDBACK_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr = raw_addr
            .parse()
            .with_context(|| format!("FEEDBACK_BIND_ADDR is not a socket address: {raw_addr}"))?;

        Ok(Self {
            bind_addr,
            data_file: value("FEEDBACK_DATA_FILE")
                .unwrap_or_else(|| DEFAULT_DATA_FILE.into())
                .into(),
            export_file_name: value("FEEDBACK_EXPORT_FILE_NAME")
                .unwrap_or_else(|| DEFAULT_EXPORT_FILE_NAME.into()),
            admin_key: lookup("FEEDBACK_ADMIN_KEY"),
            delete_key: lookup("FEEDBACK_DELETE_KEY"),
        })
    }
}
