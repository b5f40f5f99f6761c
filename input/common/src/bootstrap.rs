//! One-shot boot sequence: fetch the game data, open audio, instantiate the
//! runtime, then hand control to the input translators.
//!
//! The sequence is generic over [`Host`] so the browser glue and the tests
//! drive the same ordering and the same error boundary.

use crate::error::ShellError;
use crate::launch::{LaunchConfig, RuntimePlan};
use log::{error, info};

/// Environment-specific steps of the boot sequence.
#[allow(async_fn_in_trait)]
pub trait Host {
    type Asset;
    type Audio;
    /// Handle to the instantiated runtime's render target.
    type Runtime;
    /// Live state once the translators are wired.
    type Session;

    async fn fetch_asset(&self, url: &str) -> Result<Self::Asset, ShellError>;

    fn create_audio(&self) -> Result<Self::Audio, ShellError>;

    async fn instantiate(
        &self,
        plan: &RuntimePlan,
        asset: Self::Asset,
    ) -> Result<Self::Runtime, ShellError>;

    /// Attach the touch and gamepad translators and the audio lifecycle hooks.
    fn activate(&self, audio: Self::Audio, runtime: Self::Runtime) -> Self::Session;
}

/// Run the boot sequence. Every failure is logged here and reported as `None`;
/// nothing is activated unless all steps succeed.
pub async fn initialize<H: Host>(host: &H, config: &LaunchConfig) -> Option<H::Session> {
    match run(host, config).await {
        Ok(session) => {
            info!("runtime initialized from {}", config.asset_url);
            Some(session)
        }
        Err(err) => {
            error!("failed to load runtime: {err}");
            None
        }
    }
}

async fn run<H: Host>(host: &H, config: &LaunchConfig) -> Result<H::Session, ShellError> {
    let asset = host.fetch_asset(&config.asset_url).await?;
    let audio = host.create_audio()?;
    let runtime = host.instantiate(&config.plan(), asset).await?;
    Ok(host.activate(audio, runtime))
}
