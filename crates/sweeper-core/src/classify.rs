use crate::error::SweepError;
use crate::notification::Notification;

/// Extract the pull request number from the last path segment of the
/// notification's subject url.
pub fn pull_number(notification: &Notification) -> Result<u64, SweepError> {
    let Some(url) = notification.subject.url.as_deref() else {
        return Err(SweepError::PullNumber {
            url: String::new(),
            reason: "notification subject has no url".to_string(),
        });
    };

    let last = url.rsplit('/').next().unwrap_or(url);
    last.parse::<u64>().map_err(|e| SweepError::PullNumber {
        url: url.to_string(),
        reason: e.to_string(),
    })
}
