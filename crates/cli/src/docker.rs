//! Docker dependency management for chromactl
//!
//! The store is an external server. This module can bootstrap a local one
//! in docker when it is unreachable, bound to the configured host port and
//! with telemetry wired from configuration.

use anyhow::{anyhow, Context, Result};
use chromactl_core::config::StoreConfig;
use std::process::Command;
use std::time::{Duration, Instant};
use tokio::time::sleep;
use tracing::info;

const CONTAINER_NAME: &str = "chromactl-chroma";
const CONTAINER_IMAGE: &str = "chromadb/chroma";

/// Check if Docker is installed and available
pub fn is_docker_available() -> bool {
    Command::new("docker")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Check if the store container exists, running or not
fn container_exists() -> Result<bool> {
    let output = Command::new("docker")
        .args(["ps", "-a", "--filter"])
        .arg(format!("name={CONTAINER_NAME}"))
        .args(["--format", "{{.Names}}"])
        .output()
        .context("Failed to check container status")?;

    if !output.status.success() {
        return Ok(false);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().any(|name| name == CONTAINER_NAME))
}

/// Check if the store container is running
pub fn is_store_container_running() -> Result<bool> {
    let output = Command::new("docker")
        .args(["ps", "--filter"])
        .arg(format!("name={CONTAINER_NAME}"))
        .args(["--format", "{{.Names}}"])
        .output()
        .context("Failed to check container status")?;

    if !output.status.success() {
        return Ok(false);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.lines().any(|name| name == CONTAINER_NAME))
}

/// Start the store container, creating it on first use
pub fn start_store_container(config: &StoreConfig) -> Result<()> {
    if !is_docker_available() {
        return Err(anyhow!(
            "Docker is not installed. Please install Docker from https://docs.docker.com/get-docker/"
        ));
    }

    info!("Starting store container...");

    let output = if container_exists()? {
        Command::new("docker")
            .args(["start", CONTAINER_NAME])
            .output()
            .context("Failed to execute docker start")?
    } else {
        let telemetry = if config.anonymized_telemetry {
            "ANONYMIZED_TELEMETRY=TRUE"
        } else {
            "ANONYMIZED_TELEMETRY=FALSE"
        };
        Command::new("docker")
            .args(["run", "-d", "--name", CONTAINER_NAME, "-p"])
            .arg(format!("{}:8000", config.port))
            .args(["-e", telemetry, CONTAINER_IMAGE])
            .output()
            .context("Failed to execute docker run")?
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(anyhow!("Failed to start store container:\n{}", stderr));
    }

    info!("Store container started");
    Ok(())
}

/// Check store health via its heartbeat endpoint
pub async fn check_store_health(config: &StoreConfig) -> Result<bool> {
    let url = format!("{}/api/v1/heartbeat", config.base_url());

    match reqwest::get(&url).await {
        Ok(response) => Ok(response.status().is_success()),
        Err(_) => Ok(false),
    }
}

/// Wait for the store to become healthy
pub async fn wait_for_store(config: &StoreConfig, timeout: Duration) -> Result<()> {
    info!("Waiting for the store to become healthy...");

    let start = Instant::now();

    while start.elapsed() < timeout {
        if check_store_health(config).await? {
            info!("Store is healthy");
            return Ok(());
        }

        sleep(Duration::from_secs(1)).await;
    }

    Err(anyhow!(
        "Store failed to become healthy within {} seconds. \
         Check logs with: docker logs {CONTAINER_NAME}",
        timeout.as_secs()
    ))
}

/// Ensure the store is running, starting it if necessary
pub async fn ensure_store_running(config: &StoreConfig) -> Result<()> {
    // First check if the store is already healthy
    if check_store_health(config).await? {
        info!("Store is already running and healthy");
        return Ok(());
    }

    if !config.auto_start {
        return Err(anyhow!(
            "Store at {} is not reachable. Start it manually, or enable \
             store.auto_start in your configuration",
            config.base_url()
        ));
    }

    if !is_store_container_running()? {
        info!("Store container is not running, starting it...");
        start_store_container(config)?;
    }

    wait_for_store(config, Duration::from_secs(60)).await?;

    Ok(())
}

/// Get status of the store and its runtime dependencies
pub async fn get_store_status(config: &StoreConfig) -> Result<StoreStatus> {
    let docker_available = is_docker_available();
    let container_running = is_store_container_running().unwrap_or(false);
    let store_healthy = check_store_health(config).await.unwrap_or(false);

    Ok(StoreStatus {
        docker_available,
        container_running,
        store_healthy,
    })
}

#[derive(Debug)]
pub struct StoreStatus {
    pub docker_available: bool,
    pub container_running: bool,
    pub store_healthy: bool,
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Store Status:")?;
        writeln!(
            f,
            "  Docker:           {}",
            if self.docker_available {
                "✓ Available"
            } else {
                "✗ Not found"
            }
        )?;
        writeln!(
            f,
            "  Store Container:  {}",
            if self.container_running {
                "✓ Running"
            } else {
                "✗ Not running"
            }
        )?;
        writeln!(
            f,
            "  Store Health:     {}",
            if self.store_healthy {
                "✓ Healthy"
            } else {
                "✗ Unhealthy"
            }
        )?;
        Ok(())
    }
}
