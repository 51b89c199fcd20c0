use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::debug;

pub const ALERT_DISMISS_DELAY: Duration = Duration::from_millis(5_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Visible,
    Fading,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: String,
    pub message: String,
    pub phase: AlertPhase,
}

impl Alert {
    pub fn new(level: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            message: message.into(),
            phase: AlertPhase::Visible,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlertTray {
    alerts: Vec<Alert>,
}

impl AlertTray {
    pub fn push(&mut self, alert: Alert) {
        self.alerts.push(alert);
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    fn fade_all(&mut self) -> usize {
        for alert in &mut self.alerts {
            alert.phase = AlertPhase::Fading;
        }
        self.alerts.len()
    }

    fn remove_faded(&mut self) {
        self.alerts.retain(|alert| alert.phase != AlertPhase::Fading);
    }
}

/// One-shot timer that fades out and removes every alert present when it
/// fires. Dropping the handle does not cancel it.
pub fn schedule_alert_dismissal(tray: Arc<Mutex<AlertTray>>, delay: Duration) -> JoinHandle<usize> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let mut tray = tray.lock().await;
        let dismissed = tray.fade_all();
        tray.remove_faded();
        debug!(dismissed, "alerts dismissed");
        dismissed
    })
}
