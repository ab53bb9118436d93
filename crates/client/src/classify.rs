//! Failure taxonomy for remote calls.
//!
//! Every remote failure, whatever raised it, maps to one taxonomy entry that
//! decides the user-facing message and whether a retry button makes sense.
//! Unknown failures default to retryable so the user is never silently
//! stuck.

use crate::ClientError;

/// Taxonomy of remote-call failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Timeout,
    Unauthorized,
    NoCredits,
    Server,
    Unknown,
}

impl ErrorKind {
    /// Stable identifier into the UI's message catalog.
    pub const fn message_key(self) -> &'static str {
        match self {
            ErrorKind::Network => "errors.network",
            ErrorKind::Timeout => "errors.timeout",
            ErrorKind::Unauthorized => "errors.unauthorized",
            ErrorKind::NoCredits => "errors.no_credits",
            ErrorKind::Server => "errors.server",
            ErrorKind::Unknown => "errors.unknown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    /// `Unauthorized` and `NoCredits` are terminal for the current attempt:
    /// they need the user to re-auth or upgrade, not to press retry.
    pub retryable: bool,
}

impl ClassifiedError {
    fn of(kind: ErrorKind) -> Self {
        Self {
            kind,
            retryable: !matches!(kind, ErrorKind::Unauthorized | ErrorKind::NoCredits),
        }
    }

    pub const fn message_key(&self) -> &'static str {
        self.kind.message_key()
    }
}

/// Classifies a structured client failure.
///
/// Rules are evaluated in order, first match wins. Each rule accepts either
/// the distinguishable failure kind or the message text, because some
/// layers (notably the scan backend) flatten everything into strings.
pub fn classify(err: &ClientError) -> ClassifiedError {
    let message = err.to_string();

    if matches!(err, ClientError::Status { code: 401, .. }) || message == "Unauthorized" {
        return ClassifiedError::of(ErrorKind::Unauthorized);
    }
    if matches!(err, ClientError::Status { code: 402, .. })
        || message.contains("INSUFFICIENT_CREDITS")
    {
        return ClassifiedError::of(ErrorKind::NoCredits);
    }
    if matches!(err, ClientError::Transport(_)) || mentions_network(&message) {
        return ClassifiedError::of(ErrorKind::Network);
    }
    if matches!(err, ClientError::Aborted) || mentions_timeout(&message) {
        return ClassifiedError::of(ErrorKind::Timeout);
    }
    if matches!(err, ClientError::Status { code: 500..=599, .. })
        || embeds_server_status(&message)
    {
        return ClassifiedError::of(ErrorKind::Server);
    }
    ClassifiedError::of(ErrorKind::Unknown)
}

/// Classifies a failure that arrived as bare text (a thrown string, a log
/// line). Same rules as [`classify`] minus the kind checks.
pub fn classify_message(message: &str) -> ClassifiedError {
    if message == "Unauthorized" {
        return ClassifiedError::of(ErrorKind::Unauthorized);
    }
    if message.contains("INSUFFICIENT_CREDITS") {
        return ClassifiedError::of(ErrorKind::NoCredits);
    }
    if mentions_network(message) {
        return ClassifiedError::of(ErrorKind::Network);
    }
    if mentions_timeout(message) {
        return ClassifiedError::of(ErrorKind::Timeout);
    }
    if embeds_server_status(message) {
        return ClassifiedError::of(ErrorKind::Server);
    }
    ClassifiedError::of(ErrorKind::Unknown)
}

fn mentions_network(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("network") || lower.contains("failed to fetch") || lower.contains("fetch failed")
}

fn mentions_timeout(message: &str) -> bool {
    let lower = message.to_lowercase();
    lower.contains("timeout") || lower.contains("timed out")
}

/// A 500–599 status embedded anywhere in the message text.
fn embeds_server_status(message: &str) -> bool {
    message
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<u16>().ok())
        .any(|status| (500..=599).contains(&status))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, message: &str) -> ClientError {
        ClientError::Status {
            code,
            message: message.to_string(),
        }
    }

    #[test]
    fn transport_kind_is_network() {
        let c = classify(&ClientError::Transport("connection refused".to_string()));
        assert_eq!(c.kind, ErrorKind::Network);
        assert!(c.retryable);
    }

    #[test]
    fn network_message_is_network_without_kind() {
        let c = classify_message("Network request failed");
        assert_eq!(c.kind, ErrorKind::Network);
        assert!(c.retryable);
    }

    #[test]
    fn abort_and_timeout_messages_classify_alike() {
        assert_eq!(classify(&ClientError::Aborted).kind, ErrorKind::Timeout);
        assert_eq!(classify_message("timeout").kind, ErrorKind::Timeout);
        assert_eq!(classify_message("request timed out").kind, ErrorKind::Timeout);
    }

    #[test]
    fn unauthorized_is_terminal() {
        for c in [
            classify(&status(401, "nope")),
            classify_message("Unauthorized"),
        ] {
            assert_eq!(c.kind, ErrorKind::Unauthorized);
            assert!(!c.retryable);
            assert_eq!(c.message_key(), "errors.unauthorized");
        }
    }

    #[test]
    fn insufficient_credits_is_terminal() {
        let c = classify_message("INSUFFICIENT_CREDITS");
        assert_eq!(c.kind, ErrorKind::NoCredits);
        assert!(!c.retryable);
        assert_eq!(classify(&status(402, "payment required")).kind, ErrorKind::NoCredits);
    }

    #[test]
    fn embedded_5xx_is_server() {
        let c = classify_message("Request failed: 502");
        assert_eq!(c.kind, ErrorKind::Server);
        assert!(c.retryable);
        assert_eq!(classify(&status(503, "unavailable")).kind, ErrorKind::Server);
    }

    #[test]
    fn non_5xx_numbers_do_not_look_like_server_errors() {
        assert_eq!(classify_message("Request failed: 404").kind, ErrorKind::Unknown);
        assert_eq!(classify_message("item 5000 missing").kind, ErrorKind::Unknown);
    }

    #[test]
    fn everything_else_is_retryable_unknown() {
        let c = classify_message("weird");
        assert_eq!(c.kind, ErrorKind::Unknown);
        assert!(c.retryable);
    }

    #[test]
    fn exact_marker_only_for_unauthorized() {
        // Substring mentions are not the auth marker.
        assert_ne!(
            classify_message("user Unauthorized somewhere").kind,
            ErrorKind::Unauthorized
        );
    }
}
