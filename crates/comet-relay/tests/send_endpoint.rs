//! Endpoint tests against an in-memory mail transport.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use comet_relay::{Email, Mailer, RelayError, RelayState, router};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Records deliveries instead of talking to a real transport.
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
    fail_verify: Option<RelayError>,
    fail_send: Option<RelayError>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn verify(&self) -> Result<(), RelayError> {
        match &self.fail_verify {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn send(&self, email: &Email) -> Result<(), RelayError> {
        if let Some(err) = &self.fail_send {
            return Err(err.clone());
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

fn state_with(mailer: Arc<RecordingMailer>) -> RelayState {
    RelayState {
        mailer,
        account: "owner@example.com".to_string(),
    }
}

async fn post_json(state: RelayState, body: &str) -> (StatusCode, String) {
    let response = router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/send")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn valid_payload_returns_ok() {
    let mailer = Arc::new(RecordingMailer::default());
    let (status, body) = post_json(
        state_with(mailer.clone()),
        r#"{"to":"inbox@example.com","message":"hello","name":"Ada"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, r#"{"ok":true}"#);

    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, "inbox@example.com");
    assert_eq!(sent[0].from, "owner@example.com");
    assert_eq!(sent[0].subject, "Message from Ada");
    assert_eq!(sent[0].text, "hello");
}

#[tokio::test]
async fn recipient_falls_back_to_account() {
    let mailer = Arc::new(RecordingMailer::default());
    let (status, _) = post_json(state_with(mailer.clone()), r#"{"message":"hello"}"#).await;

    assert_eq!(status, StatusCode::OK);
    let sent = mailer.sent.lock().unwrap();
    assert_eq!(sent[0].to, "owner@example.com");
    assert_eq!(sent[0].subject, "Message from website");
}

#[tokio::test]
async fn verify_failure_returns_500_with_body() {
    let mailer = Arc::new(RecordingMailer {
        fail_verify: Some(RelayError::Verify("relay refused".to_string())),
        ..RecordingMailer::default()
    });
    let (status, body) = post_json(state_with(mailer.clone()), r#"{"message":"hello"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.is_empty());
    assert!(body.contains("relay refused"));
    // Verification failure aborts before any delivery attempt.
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn delivery_failure_returns_500_with_body() {
    let mailer = Arc::new(RecordingMailer {
        fail_send: Some(RelayError::Smtp("mailbox unavailable".to_string())),
        ..RecordingMailer::default()
    });
    let (status, body) = post_json(state_with(mailer), r#"{"message":"hello"}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("mailbox unavailable"));
}

#[tokio::test]
async fn malformed_body_is_rejected_before_delivery() {
    let mailer = Arc::new(RecordingMailer::default());
    let (status, _) = post_json(state_with(mailer.clone()), "{not json").await;

    assert!(status.is_client_error());
    assert!(mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn script_message_is_escaped_in_html_body() {
    let mailer = Arc::new(RecordingMailer::default());
    let (status, _) = post_json(
        state_with(mailer.clone()),
        r#"{"message":"<script>alert(1)</script>"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let sent = mailer.sent.lock().unwrap();
    assert!(!sent[0].html.contains("<script>"));
}
