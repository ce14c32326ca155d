use crate::logging::Logger;
use crate::storage::KeyValueStore;
use serde_json::json;
use std::collections::BTreeMap;
use std::time::Duration;

pub const VISITOR_COUNT_KEY: &str = "visitorCount";
pub const PAGE_VIEWS_KEY: &str = "pageViews";
pub const VISITED_KEY: &str = "visited";
pub const PROJECT_CLICKS_KEY: &str = "projectClicks";
pub const TIME_SPENT_KEY: &str = "timeSpent";
pub const MAX_SCROLL_KEY: &str = "maxScroll";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisitCounts {
    pub visitors: u64,
    pub page_views: u64,
}

fn read_count<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> u64 {
    store
        .get(key)
        .and_then(|value| value.trim().parse::<u64>().ok())
        .unwrap_or(0)
}

/// Counts a unique visitor once per session and a page view on every load.
pub fn record_visit<D, S>(durable: &mut D, session: &mut S, logger: Logger) -> VisitCounts
where
    D: KeyValueStore + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let mut visitors = read_count(durable, VISITOR_COUNT_KEY);
    let page_views = read_count(session, PAGE_VIEWS_KEY).saturating_add(1);

    if session.get(VISITED_KEY).is_none() {
        visitors = visitors.saturating_add(1);
        if let Err(error) = durable.set(VISITOR_COUNT_KEY, &visitors.to_string()) {
            logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
        }
        if let Err(error) = session.set(VISITED_KEY, "true") {
            logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
        }
    }

    if let Err(error) = session.set(PAGE_VIEWS_KEY, &page_views.to_string()) {
        logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
    }

    VisitCounts {
        visitors,
        page_views,
    }
}

/// Bumps the per-project click tally kept as a JSON object. A corrupt tally
/// starts over rather than blocking the click.
pub fn record_project_click<D>(durable: &mut D, project_id: &str, logger: Logger) -> u64
where
    D: KeyValueStore + ?Sized,
{
    let mut clicks: BTreeMap<String, u64> = durable
        .get(PROJECT_CLICKS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    let count = clicks.entry(project_id.to_string()).or_insert(0);
    *count = count.saturating_add(1);
    let count = *count;

    match serde_json::to_string(&clicks) {
        Ok(encoded) => {
            if let Err(error) = durable.set(PROJECT_CLICKS_KEY, &encoded) {
                logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
            }
        }
        Err(error) => logger.warn("project_clicks_encode_failed", json!({ "reason": error.to_string() })),
    }

    count
}

/// Stores how long the page was open, in milliseconds. Written once when the
/// page is being unloaded; each load overwrites the previous value.
pub fn record_time_spent<D>(durable: &mut D, elapsed: Duration, logger: Logger)
where
    D: KeyValueStore + ?Sized,
{
    let millis = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    if let Err(error) = durable.set(TIME_SPENT_KEY, &millis.to_string()) {
        logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
    }
}

/// Stores the deepest scroll position of this page load as a percentage of
/// the scrollable height.
pub fn record_scroll_depth<D>(durable: &mut D, depth_percent: f64, logger: Logger)
where
    D: KeyValueStore + ?Sized,
{
    if !depth_percent.is_finite() {
        return;
    }

    let depth = depth_percent.clamp(0.0, 100.0);
    if let Err(error) = durable.set(MAX_SCROLL_KEY, &depth.to_string()) {
        logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use crate::storage::MemoryStore;

    fn quiet() -> Logger {
        Logger::new(LogLevel::Error)
    }

    #[test]
    fn first_load_counts_visitor_and_view() {
        let mut durable = MemoryStore::default();
        let mut session = MemoryStore::default();

        let counts = record_visit(&mut durable, &mut session, quiet());

        assert_eq!(counts, VisitCounts { visitors: 1, page_views: 1 });
        assert_eq!(durable.get(VISITOR_COUNT_KEY).as_deref(), Some("1"));
        assert_eq!(session.get(VISITED_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn reload_in_same_session_counts_only_the_view() {
        let mut durable = MemoryStore::default();
        let mut session = MemoryStore::default();

        record_visit(&mut durable, &mut session, quiet());
        let counts = record_visit(&mut durable, &mut session, quiet());

        assert_eq!(counts, VisitCounts { visitors: 1, page_views: 2 });
    }

    #[test]
    fn new_session_counts_returning_visitor() {
        let mut durable = MemoryStore::default();
        record_visit(&mut durable, &mut MemoryStore::default(), quiet());
        let counts = record_visit(&mut durable, &mut MemoryStore::default(), quiet());

        assert_eq!(counts, VisitCounts { visitors: 2, page_views: 1 });
    }

    #[test]
    fn garbage_counts_restart_from_zero() {
        let mut durable = MemoryStore::default();
        durable.values.insert(VISITOR_COUNT_KEY.to_string(), "NaN".to_string());
        let mut session = MemoryStore::default();
        session.values.insert(PAGE_VIEWS_KEY.to_string(), "-3".to_string());

        let counts = record_visit(&mut durable, &mut session, quiet());

        assert_eq!(counts, VisitCounts { visitors: 1, page_views: 1 });
    }

    #[test]
    fn read_only_storage_still_reports_counts() {
        let mut durable = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };
        let mut session = MemoryStore {
            read_only: true,
            ..MemoryStore::default()
        };

        let counts = record_visit(&mut durable, &mut session, quiet());

        assert_eq!(counts, VisitCounts { visitors: 1, page_views: 1 });
        assert!(durable.values.is_empty());
    }

    #[test]
    fn project_clicks_accumulate_as_json() {
        let mut durable = MemoryStore::default();

        assert_eq!(record_project_click(&mut durable, "chat-app", quiet()), 1);
        assert_eq!(record_project_click(&mut durable, "chat-app", quiet()), 2);
        assert_eq!(record_project_click(&mut durable, "todo-golang", quiet()), 1);

        assert_eq!(
            durable.get(PROJECT_CLICKS_KEY).as_deref(),
            Some(r#"{"chat-app":2,"todo-golang":1}"#)
        );
    }

    #[test]
    fn corrupt_click_tally_starts_over() {
        let mut durable = MemoryStore::default();
        durable.values.insert(PROJECT_CLICKS_KEY.to_string(), "{not json".to_string());

        assert_eq!(record_project_click(&mut durable, "amazon-clone", quiet()), 1);
    }

    #[test]
    fn time_spent_is_stored_in_millis() {
        let mut durable = MemoryStore::default();

        record_time_spent(&mut durable, Duration::from_millis(93_250), quiet());
        assert_eq!(durable.get(TIME_SPENT_KEY).as_deref(), Some("93250"));

        record_time_spent(&mut durable, Duration::from_secs(4), quiet());
        assert_eq!(durable.get(TIME_SPENT_KEY).as_deref(), Some("4000"));
    }

    #[test]
    fn scroll_depth_follows_the_tracked_maximum() {
        let mut durable = MemoryStore::default();
        let mut tracker = crate::viewport::ScrollTracker::default();

        for scroll_y in [0.0, 250.0, 500.0, 125.0] {
            let before = tracker.max_depth_percent();
            tracker.on_scroll(scroll_y, 1_800.0, 800.0);
            if tracker.max_depth_percent() > before {
                record_scroll_depth(&mut durable, tracker.max_depth_percent(), quiet());
            }
        }

        assert_eq!(durable.get(MAX_SCROLL_KEY).as_deref(), Some("50"));
    }

    #[test]
    fn scroll_depth_ignores_nonsense_and_clamps() {
        let mut durable = MemoryStore::default();

        record_scroll_depth(&mut durable, f64::NAN, quiet());
        assert_eq!(durable.get(MAX_SCROLL_KEY), None);

        record_scroll_depth(&mut durable, 140.0, quiet());
        assert_eq!(durable.get(MAX_SCROLL_KEY).as_deref(), Some("100"));
    }
}
