use crate::logging::Logger;
use serde_json::json;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

pub const COUNTER_TARGET_ATTR: &str = "data-target";
pub const SKILL_WIDTH_ATTR: &str = "data-width";

/// Inline style for reveal elements before they have been seen.
pub const REVEAL_HIDDEN_STYLE: &str = "opacity: 0; transform: translateY(30px); transition: all 0.6s ease;";
/// Terminal inline style, kept even after the element scrolls away.
pub const REVEAL_SHOWN_STYLE: &str = "opacity: 1; transform: translateY(0); transition: all 0.6s ease;";

const NAVBAR_SCROLLED_AFTER: f64 = 100.0;
const NAVBAR_HIDE_AFTER: f64 = 200.0;
const BACK_TO_TOP_AFTER: f64 = 500.0;

#[derive(Debug, Error, PartialEq)]
pub enum AttributeError {
    #[error("missing attribute `{0}`")]
    Missing(&'static str),
    #[error("attribute `{name}` has malformed value {value:?}")]
    Malformed { name: &'static str, value: String },
}

pub fn parse_counter_target(raw: Option<&str>) -> Result<u32, AttributeError> {
    let raw = raw.ok_or(AttributeError::Missing(COUNTER_TARGET_ATTR))?;
    raw.trim()
        .parse::<u32>()
        .map_err(|_| AttributeError::Malformed {
            name: COUNTER_TARGET_ATTR,
            value: raw.to_string(),
        })
}

/// Skill widths are percentages; anything above 100 is capped.
pub fn parse_width_percent(raw: Option<&str>) -> Result<f64, AttributeError> {
    let raw = raw.ok_or(AttributeError::Missing(SKILL_WIDTH_ATTR))?;
    raw.trim()
        .trim_end_matches('%')
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .map(|value| value.min(100.0))
        .ok_or_else(|| AttributeError::Malformed {
            name: SKILL_WIDTH_ATTR,
            value: raw.to_string(),
        })
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewportSection {
    pub section_id: String,
    pub nav_link: Option<String>,
    pub visibility_threshold: f64,
}

impl ViewportSection {
    /// Pairs each `section[id]` with the nav link whose href is `#<id>`.
    pub fn link_sections<S, L>(section_ids: S, nav_hrefs: L, threshold: f64) -> Vec<Self>
    where
        S: IntoIterator,
        S::Item: Into<String>,
        L: IntoIterator,
        L::Item: AsRef<str>,
    {
        let hrefs: Vec<String> = nav_hrefs
            .into_iter()
            .map(|href| href.as_ref().to_string())
            .collect();

        section_ids
            .into_iter()
            .map(Into::into)
            .map(|section_id: String| {
                let anchor = format!("#{section_id}");
                let nav_link = hrefs.iter().find(|href| **href == anchor).cloned();
                Self {
                    section_id,
                    nav_link,
                    visibility_threshold: threshold,
                }
            })
            .collect()
    }
}

/// One-shot guard keyed by element. Remembers how many times the guarded
/// action actually ran so callers can check it never exceeds one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: HashMap<String, u32>,
}

impl OneShot {
    pub fn claim(&mut self, key: &str) -> bool {
        if self.fired.contains_key(key) {
            return false;
        }
        self.fired.insert(key.to_string(), 0);
        true
    }

    pub fn record_run(&mut self, key: &str) {
        *self.fired.entry(key.to_string()).or_insert(0) += 1;
    }

    #[cfg(test)]
    pub fn runs(&self, key: &str) -> u32 {
        self.fired.get(key).copied().unwrap_or(0)
    }
}

/// One displayed counter value. `steps` is how many frame intervals pass
/// before it is shown, so small targets still take the full duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub value: u32,
    pub steps: u32,
    pub done: bool,
}

/// Fixed-duration count-up from zero. Each frame adds `target / frames` and
/// shows the ceiling. Frames whose ceiling would repeat the previous value
/// are folded into the next one; the last frame always shows the target.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    shown: u32,
    interval: Duration,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration: Duration, interval: Duration) -> Self {
        let interval_ms = interval.as_millis().max(1) as f64;
        let frames = (duration.as_millis() as f64 / interval_ms).max(1.0);

        Self {
            target,
            increment: f64::from(target) / frames,
            current: 0.0,
            shown: 0,
            interval,
            done: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn tick(&mut self) -> Option<CounterFrame> {
        if self.done {
            return None;
        }

        let target = f64::from(self.target);
        let mut steps = 0;

        loop {
            self.current += self.increment;
            steps += 1;

            if self.current.ceil() >= target {
                self.done = true;
                self.shown = self.target;
                break;
            }

            let value = self.current.ceil() as u32;
            if value > self.shown {
                self.shown = value;
                break;
            }
        }

        Some(CounterFrame {
            value: self.shown,
            steps,
            done: self.done,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillBarStep {
    pub index: usize,
    pub delay: Duration,
    pub width_percent: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollChrome {
    pub scrolled: bool,
    pub hidden: bool,
    pub progress_percent: f64,
    pub back_to_top_visible: bool,
}

/// Navbar and progress-bar state derived from the window scroll position,
/// plus the deepest point reached on this page load.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    last_scroll_y: f64,
    max_depth_percent: f64,
}

impl ScrollTracker {
    pub fn on_scroll(&mut self, scroll_y: f64, scroll_height: f64, viewport_height: f64) -> ScrollChrome {
        let scrollable = scroll_height - viewport_height;
        let progress_percent = if scrollable > 0.0 {
            (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        let chrome = ScrollChrome {
            scrolled: scroll_y > NAVBAR_SCROLLED_AFTER,
            hidden: scroll_y > self.last_scroll_y && scroll_y > NAVBAR_HIDE_AFTER,
            progress_percent,
            back_to_top_visible: scroll_y > BACK_TO_TOP_AFTER,
        };
        self.last_scroll_y = scroll_y;
        self.max_depth_percent = self.max_depth_percent.max(progress_percent);

        chrome
    }

    pub fn max_depth_percent(&self) -> f64 {
        self.max_depth_percent
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EngineTiming {
    pub counter_duration: Duration,
    pub frame_interval: Duration,
    pub skill_stagger: Duration,
}

/// Turns visibility notifications into nav highlighting and one-shot
/// entrance, counter and skill-bar effects. Holds no DOM handles; the browser
/// layer applies whatever the callbacks return.
#[derive(Clone, Debug)]
pub struct ViewportEngine {
    sections: Vec<ViewportSection>,
    active_link: Option<String>,
    reveals: OneShot,
    counters: OneShot,
    skill_groups: OneShot,
    timing: EngineTiming,
    logger: Logger,
}

impl ViewportEngine {
    pub fn new(timing: EngineTiming, logger: Logger) -> Self {
        Self {
            sections: Vec::new(),
            active_link: None,
            reveals: OneShot::default(),
            counters: OneShot::default(),
            skill_groups: OneShot::default(),
            timing,
            logger,
        }
    }

    /// Registers sections and returns the `(section id, threshold)` pairs the
    /// visibility watcher has to observe.
    pub fn observe_sections(&mut self, sections: Vec<ViewportSection>) -> Vec<(String, f64)> {
        let registrations = sections
            .iter()
            .map(|section| (section.section_id.clone(), section.visibility_threshold))
            .collect();

        self.logger.debug(
            "sections_observed",
            json!({ "count": sections.len() }),
        );
        self.sections = sections;

        registrations
    }

    #[cfg(test)]
    pub fn sections(&self) -> &[ViewportSection] {
        &self.sections
    }

    pub fn active_nav_link(&self) -> Option<&str> {
        self.active_link.as_deref()
    }

    /// The last visible section reported wins, whatever its position on
    /// screen. Returns the new active link when the highlight changed.
    pub fn on_section_visibility_changed(&mut self, section_id: &str, is_visible: bool) -> Option<Option<String>> {
        if !is_visible {
            return None;
        }

        let section = self
            .sections
            .iter()
            .find(|section| section.section_id == section_id)?;
        let next = section.nav_link.clone();

        if next == self.active_link {
            return None;
        }

        self.logger.debug(
            "section_activated",
            json!({ "section": section_id, "link": next }),
        );
        self.active_link = next.clone();
        Some(next)
    }

    /// Returns the terminal inline style the first time `key` is seen.
    pub fn on_animated_element_visible(&mut self, key: &str) -> Option<&'static str> {
        if !self.reveals.claim(key) {
            return None;
        }

        self.reveals.record_run(key);
        self.logger.debug("element_revealed", json!({ "element": key }));
        Some(REVEAL_SHOWN_STYLE)
    }

    /// Starts the count-up for `key` unless it already ran. A missing or
    /// malformed target consumes the trigger without animating.
    pub fn on_counter_visible(&mut self, key: &str, target_attr: Option<&str>) -> Option<CounterAnimation> {
        if !self.counters.claim(key) {
            return None;
        }

        match parse_counter_target(target_attr) {
            Ok(target) => {
                self.counters.record_run(key);
                self.logger.debug(
                    "counter_started",
                    json!({ "element": key, "target": target }),
                );
                Some(CounterAnimation::new(
                    target,
                    self.timing.counter_duration,
                    self.timing.frame_interval,
                ))
            }
            Err(error) => {
                self.logger.warn(
                    "counter_skipped",
                    json!({ "element": key, "reason": error.to_string() }),
                );
                None
            }
        }
    }

    /// Schedules every bar in the group with an index-based delay. Bars with
    /// a bad width are skipped; the others keep their original slot.
    pub fn on_skill_bars_visible<'a, I>(&mut self, container: &str, bars: I) -> Vec<SkillBarStep>
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        if !self.skill_groups.claim(container) {
            return Vec::new();
        }

        self.skill_groups.record_run(container);
        let stagger = self.timing.skill_stagger;
        let mut steps = Vec::new();

        for (index, width_attr) in bars.into_iter().enumerate() {
            match parse_width_percent(width_attr) {
                Ok(width_percent) => steps.push(SkillBarStep {
                    index,
                    delay: stagger.saturating_mul(index as u32),
                    width_percent,
                }),
                Err(error) => self.logger.warn(
                    "skill_bar_skipped",
                    json!({ "container": container, "index": index, "reason": error.to_string() }),
                ),
            }
        }

        steps
    }

    #[cfg(test)]
    pub fn reveal_runs(&self, key: &str) -> u32 {
        self.reveals.runs(key)
    }

    #[cfg(test)]
    pub fn counter_runs(&self, key: &str) -> u32 {
        self.counters.runs(key)
    }

    #[cfg(test)]
    pub fn skill_runs(&self, container: &str) -> u32 {
        self.skill_groups.runs(container)
    }
}
