//! Background submission to the relay endpoint.

use std::sync::{Arc, RwLock};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use comet_core::ContactMessage;

/// Timeout for the relay request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Submission state shown in the status line.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent {
        at: DateTime<Local>,
    },
    Failed(String),
}

/// Posts contact messages to the relay on a background thread so the
/// animation loop never blocks on the network.
#[derive(Debug)]
pub struct Submitter {
    /// Latest submission state, shared with the worker thread.
    status: Arc<RwLock<SubmitStatus>>,
    /// Relay endpoint URL.
    url: String,
}

impl Submitter {
    /// Create a submitter targeting the given endpoint URL.
    pub fn new(url: String) -> Self {
        Self {
            status: Arc::new(RwLock::new(SubmitStatus::Idle)),
            url,
        }
    }

    /// Current submission state.
    pub fn status(&self) -> SubmitStatus {
        self.status
            .read()
            .map(|status| status.clone())
            .unwrap_or(SubmitStatus::Idle)
    }

    /// Record a locally rejected submission without touching the network.
    pub fn reject(&self, reason: String) {
        if let Ok(mut status) = self.status.write() {
            *status = SubmitStatus::Failed(reason);
        }
    }

    /// Submit a message in the background. Ignored while a submission is
    /// already in flight.
    pub fn submit(&self, msg: ContactMessage) {
        if let Ok(mut status) = self.status.write() {
            if *status == SubmitStatus::Sending {
                return;
            }
            *status = SubmitStatus::Sending;
        }

        let status = self.status.clone();
        let url = self.url.clone();
        thread::spawn(move || {
            let result = post_message(&url, &msg);
            if let Ok(mut s) = status.write() {
                *s = match result {
                    Ok(()) => SubmitStatus::Sent { at: Local::now() },
                    Err(reason) => SubmitStatus::Failed(reason),
                };
            }
        });
    }
}

/// POST the payload as JSON. A non-success response surfaces its body text
/// as the failure reason.
fn post_message(url: &str, msg: &ContactMessage) -> Result<(), String> {
    let agent = ureq::Agent::config_builder()
        .timeout_global(Some(REQUEST_TIMEOUT))
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent
        .post(url)
        .send_json(msg)
        .map_err(|e| format!("HTTP error: {e}"))?;

    if response.status().is_success() {
        return Ok(());
    }

    let detail = response.body_mut().read_to_string().unwrap_or_default();
    if detail.is_empty() {
        Err("error".to_string())
    } else {
        Err(detail)
    }
}
