use crate::logging::{LogLevel, Logger};
use serde_json::{json, Value};
use std::time::Duration;

const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_SECTION_THRESHOLD: f64 = 0.3;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;
const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
const DEFAULT_SKILL_STAGGER_MS: u64 = 150;
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 5_000;
const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 300;
const DEFAULT_CONTACT_MIN_MESSAGE: usize = 10;
const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_OWNER_NAME: &str = "Biniam Birhanu";

const THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const COUNTER_DURATION_MS_BOUNDS: (u64, u64) = (100, 10_000);
const FRAME_INTERVAL_MS_BOUNDS: (u64, u64) = (4, 100);
const SKILL_STAGGER_MS_BOUNDS: (u64, u64) = (0, 1_000);
const NOTIFICATION_TTL_MS_BOUNDS: (u64, u64) = (500, 30_000);
const NOTIFICATION_EXIT_MS_BOUNDS: (u64, u64) = (0, 2_000);
const CONTACT_MIN_MESSAGE_BOUNDS: (usize, usize) = (1, 1_000);

/// Credentials for the email relay. Present only when every id is set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Page-wide settings, built once by the page controller and handed to each
/// component.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub log_level: LogLevel,
    pub section_threshold: f64,
    pub reveal_threshold: f64,
    pub counter_duration: Duration,
    pub frame_interval: Duration,
    pub skill_stagger: Duration,
    pub notification_ttl: Duration,
    pub notification_exit: Duration,
    pub contact_min_message: usize,
    pub relay_endpoint: String,
    pub relay_credentials: Option<RelayCredentials>,
    pub owner_name: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::from_source(|_| None)
    }
}

impl PageConfig {
    /// Reads every knob through `lookup`, keyed by its `data-*` attribute name.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = parse_non_empty(&lookup, "data-log-level")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);
        let section_threshold = parse_f64_with_bounds(
            &lookup,
            "data-section-threshold",
            DEFAULT_SECTION_THRESHOLD,
            THRESHOLD_BOUNDS,
        );
        let reveal_threshold = parse_f64_with_bounds(
            &lookup,
            "data-reveal-threshold",
            DEFAULT_REVEAL_THRESHOLD,
            THRESHOLD_BOUNDS,
        );
        let counter_duration_ms = parse_u64_with_bounds(
            &lookup,
            "data-counter-duration-ms",
            DEFAULT_COUNTER_DURATION_MS,
            COUNTER_DURATION_MS_BOUNDS,
        );
        let frame_interval_ms = parse_u64_with_bounds(
            &lookup,
            "data-frame-interval-ms",
            DEFAULT_FRAME_INTERVAL_MS,
            FRAME_INTERVAL_MS_BOUNDS,
        );
        let skill_stagger_ms = parse_u64_with_bounds(
            &lookup,
            "data-skill-stagger-ms",
            DEFAULT_SKILL_STAGGER_MS,
            SKILL_STAGGER_MS_BOUNDS,
        );
        let notification_ttl_ms = parse_u64_with_bounds(
            &lookup,
            "data-notification-ttl-ms",
            DEFAULT_NOTIFICATION_TTL_MS,
            NOTIFICATION_TTL_MS_BOUNDS,
        );
        let notification_exit_ms = parse_u64_with_bounds(
            &lookup,
            "data-notification-exit-ms",
            DEFAULT_NOTIFICATION_EXIT_MS,
            NOTIFICATION_EXIT_MS_BOUNDS,
        );
        let contact_min_message = parse_usize_with_bounds(
            &lookup,
            "data-contact-min-message",
            DEFAULT_CONTACT_MIN_MESSAGE,
            CONTACT_MIN_MESSAGE_BOUNDS,
        );
        let relay_endpoint = parse_non_empty(&lookup, "data-relay-endpoint")
            .filter(|value| value.starts_with("https://") || value.starts_with("http://"))
            .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string());
        let relay_credentials = match (
            parse_non_empty(&lookup, "data-relay-service-id"),
            parse_non_empty(&lookup, "data-relay-template-id"),
            parse_non_empty(&lookup, "data-relay-public-key"),
        ) {
            (Some(service_id), Some(template_id), Some(public_key)) => Some(RelayCredentials {
                service_id,
                template_id,
                public_key,
            }),
            _ => None,
        };
        let owner_name = parse_non_empty(&lookup, "data-owner-name")
            .unwrap_or_else(|| DEFAULT_OWNER_NAME.to_string());

        Self {
            log_level,
            section_threshold,
            reveal_threshold,
            counter_duration: Duration::from_millis(counter_duration_ms),
            frame_interval: Duration::from_millis(frame_interval_ms),
            skill_stagger: Duration::from_millis(skill_stagger_ms),
            notification_ttl: Duration::from_millis(notification_ttl_ms),
            notification_exit: Duration::from_millis(notification_exit_ms),
            contact_min_message,
            relay_endpoint,
            relay_credentials,
            owner_name,
        }
    }

    pub fn logger(&self) -> Logger {
        Logger::new(self.log_level)
    }

    /// Fields for the startup log line. Relay secrets are reduced to a flag.
    pub fn summary(&self) -> Value {
        json!({
            "logLevel": self.log_level.as_str(),
            "sectionThreshold": self.section_threshold,
            "revealThreshold": self.reveal_threshold,
            "counterDurationMs": self.counter_duration.as_millis() as u64,
            "frameIntervalMs": self.frame_interval.as_millis() as u64,
            "skillStaggerMs": self.skill_stagger.as_millis() as u64,
            "notificationTtlMs": self.notification_ttl.as_millis() as u64,
            "relayConfigured": self.relay_credentials.is_some(),
        })
    }
}

fn parse_non_empty<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_u64_with_bounds<F>(lookup: &F, name: &str, default: u64, bounds: (u64, u64)) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_usize_with_bounds<F>(lookup: &F, name: &str, default: usize, bounds: (usize, usize)) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds<F>(lookup: &F, name: &str, default: f64, bounds: (f64, f64)) -> f64
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_page_behaviour() {
        let config = PageConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.section_threshold, 0.3);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.counter_duration, Duration::from_millis(2_000));
        assert_eq!(config.frame_interval, Duration::from_millis(16));
        assert_eq!(config.skill_stagger, Duration::from_millis(150));
        assert_eq!(config.notification_ttl, Duration::from_millis(5_000));
        assert_eq!(config.notification_exit, Duration::from_millis(300));
        assert_eq!(config.contact_min_message, 10);
        assert_eq!(config.owner_name, "Biniam Birhanu");
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
        assert!(config.relay_credentials.is_none());
    }

    #[test]
    fn values_within_bounds_are_applied() {
        let config = PageConfig::from_source(source(&[
            ("data-log-level", "debug"),
            ("data-section-threshold", "0.5"),
            ("data-counter-duration-ms", " 1500 "),
            ("data-skill-stagger-ms", "100"),
        ]));

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.section_threshold, 0.5);
        assert_eq!(config.counter_duration, Duration::from_millis(1_500));
        assert_eq!(config.skill_stagger, Duration::from_millis(100));
    }

    #[test]
    fn out_of_bounds_or_malformed_values_fall_back_to_defaults() {
        let config = PageConfig::from_source(source(&[
            ("data-section-threshold", "1.5"),
            ("data-reveal-threshold", "NaN"),
            ("data-counter-duration-ms", "50"),
            ("data-frame-interval-ms", "fast"),
            ("data-contact-min-message", "0"),
            ("data-relay-endpoint", "ftp://relay.example"),
        ]));

        assert_eq!(config.section_threshold, DEFAULT_SECTION_THRESHOLD);
        assert_eq!(config.reveal_threshold, DEFAULT_REVEAL_THRESHOLD);
        assert_eq!(config.counter_duration, Duration::from_millis(DEFAULT_COUNTER_DURATION_MS));
        assert_eq!(config.frame_interval, Duration::from_millis(DEFAULT_FRAME_INTERVAL_MS));
        assert_eq!(config.contact_min_message, DEFAULT_CONTACT_MIN_MESSAGE);
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
    }

    #[test]
    fn relay_credentials_require_every_id() {
        let partial = PageConfig::from_source(source(&[
            ("data-relay-service-id", "service"),
            ("data-relay-template-id", "template"),
        ]));
        assert!(partial.relay_credentials.is_none());

        let complete = PageConfig::from_source(source(&[
            ("data-relay-service-id", "service"),
            ("data-relay-template-id", "template"),
            ("data-relay-public-key", "key"),
        ]));
        assert_eq!(
            complete.relay_credentials,
            Some(RelayCredentials {
                service_id: "service".to_string(),
                template_id: "template".to_string(),
                public_key: "key".to_string(),
            })
        );
    }

    #[test]
    fn summary_hides_relay_secrets() {
        let config = PageConfig::from_source(source(&[
            ("data-relay-service-id", "service"),
            ("data-relay-template-id", "template"),
            ("data-relay-public-key", "secret-key"),
        ]));

        let summary = config.summary().to_string();
        assert!(summary.contains("\"relayConfigured\":true"));
        assert!(!summary.contains("secret-key"));
    }
}
