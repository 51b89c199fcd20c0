use crate::models::InstallOutcome;
use crate::traits::DeferredPrompt;
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Holds at most one deferred install prompt for the lifetime of the page.
pub struct InstallPromptSlot<P> {
    pending: Mutex<Option<P>>,
}

impl<P> Default for InstallPromptSlot<P> {
    fn default() -> Self {
        Self {
            pending: Mutex::new(None),
        }
    }
}

impl<P> InstallPromptSlot<P>
where
    P: DeferredPrompt + Send,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps the prompt instead of letting the browser show it. Any earlier
    /// prompt is replaced. Returns true: the install control should be shown.
    pub async fn capture(&self, prompt: P) -> bool {
        *self.pending.lock().await = Some(prompt);
        true
    }

    pub async fn is_pending(&self) -> bool {
        self.pending.lock().await.is_some()
    }

    /// Shows the native install flow once. The slot is emptied before the
    /// prompt is awaited, so a second activation is a no-op whatever the
    /// user chooses.
    pub async fn activate(&self) -> Option<InstallOutcome> {
        let mut prompt = self.pending.lock().await.take()?;
        match prompt.prompt().await {
            Ok(InstallOutcome::Accepted) => {
                info!("user accepted the install prompt");
                Some(InstallOutcome::Accepted)
            }
            Ok(InstallOutcome::Dismissed) => Some(InstallOutcome::Dismissed),
            Err(error) => {
                warn!(error = %error, "install prompt failed");
                None
            }
        }
    }
}
