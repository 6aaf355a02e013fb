//! 完成通知 - 尽力而为的webhook投递
//!
//! 固定间隔重试，全部失败也只记录日志，从不影响报告状态。

use std::time::Duration;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::report::context::ReportContext;
use crate::types::RequestStatus;

/// webhook通知载荷
#[derive(Debug, Serialize)]
pub struct NotificationPayload {
    pub report_id: String,
    pub deal_id: String,
    pub status: RequestStatus,
    pub artifact_url: Option<String>,
    pub completed_at: DateTime<Utc>,
}

/// 投递完成通知；未配置webhook时静默跳过
pub async fn execute(context: &ReportContext, status: RequestStatus, artifact_url: Option<String>) {
    let notify = &context.config.notify;
    let Some(webhook_url) = notify.webhook_url.clone() else {
        return;
    };

    let payload = NotificationPayload {
        report_id: context.request.id.to_string(),
        deal_id: context.request.deal_key(),
        status,
        artifact_url,
        completed_at: Utc::now(),
    };

    for attempt in 1..=notify.attempts {
        match send(&webhook_url, &payload, notify.timeout_seconds).await {
            Ok(()) => {
                println!("📣 完成通知已投递: {}", webhook_url);
                return;
            }
            Err(e) => {
                eprintln!(
                    "   ⚠️ 通知投递失败 (第 {} / {} 次尝试): {}",
                    attempt, notify.attempts, e
                );
                if attempt < notify.attempts {
                    tokio::time::sleep(Duration::from_millis(notify.retry_delay_ms)).await;
                }
            }
        }
    }

    eprintln!("   ⚠️ 通知投递已放弃，不影响报告状态");
}

async fn send(webhook_url: &str, payload: &NotificationPayload, timeout_seconds: u64) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .context("failed to build the notification HTTP client")?;

    client
        .post(webhook_url)
        .json(payload)
        .send()
        .await
        .context("notification request failed")?
        .error_for_status()
        .context("notification endpoint returned an error status")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_payload_serialization() {
        let payload = NotificationPayload {
            report_id: Uuid::nil().to_string(),
            deal_id: "deal-042".to_string(),
            status: RequestStatus::Completed,
            artifact_url: Some("file:///tmp/report.html".to_string()),
            completed_at: Utc::now(),
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["status"], "completed");
        assert_eq!(json["deal_id"], "deal-042");
        assert!(json["artifact_url"].is_string());
    }
}
