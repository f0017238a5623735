use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

use crate::errors::{Error, Result};

/// Opens URLs outside the application.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}

/// Hands the URL to the platform launcher (`open`, `cmd /c start`, or
/// `xdg-open`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemUrlOpener;

#[cfg(target_os = "macos")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/c", "start", "", url]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn launcher(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[async_trait]
impl UrlOpener for SystemUrlOpener {
    async fn open(&self, url: &str) -> Result<()> {
        debug!("Opening {}", url);
        let mut command = launcher(url);
        let status = command
            .status()
            .await
            .map_err(|e| Error::Open {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::Open {
                url: url.to_string(),
                message: format!("launcher exited with {}", status),
            })
        }
    }
}

/// Keeps opened URLs in memory instead of launching anything.
#[derive(Debug, Default, Clone)]
pub struct RecordingUrlOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingUrlOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl UrlOpener for RecordingUrlOpener {
    async fn open(&self, url: &str) -> Result<()> {
        self.opened
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(url.to_string());
        Ok(())
    }
}
