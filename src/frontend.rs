use crate::browser::{self, BrowserStore};
use crate::catalog::{Catalog, ProjectRecord};
use crate::config::PageConfig;
use crate::contact::{self, draft_key, ContactSubmission, FIELD_NAMES};
use crate::gallery::{CardAction, DetailView, DismissTrigger, Filter, FilterState, ModalChange, ModalPresenter};
use crate::logging::{now_unix_millis, Logger};
use crate::notifications::{Notification, NotificationKind, NotificationQueue};
use crate::relay::EmailJsRelay;
use crate::shortcuts::Shortcut;
use crate::storage::KeyValueStore;
use crate::stories::{ReadMoreState, Story, BLOG_POSTS, TESTIMONIALS};
use crate::theme::{self, Theme};
use crate::viewport::{
    CounterAnimation, EngineTiming, ScrollChrome, ScrollTracker, ViewportEngine, ViewportSection,
    COUNTER_TARGET_ATTR, REVEAL_HIDDEN_STYLE, REVEAL_SHOWN_STYLE, SKILL_WIDTH_ATTR,
};
use crate::visits::{self, VisitCounts};
use serde_json::json;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const COUNTER_THRESHOLD: f64 = 0.0;
const SKILLS_CONTAINER: &str = "skills";
const HOME_SECTION: &str = "home";
const SENDING_LABEL: &str = "Sending...";
const SUBMIT_LABEL: &str = "Send Message";

const NAV_SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

const STATS: [(&str, &str, u32); 4] = [
    ("stat-projects", "Projects Completed", 4),
    ("stat-technologies", "Technologies", 15),
    ("stat-contributions", "GitHub Contributions", 250),
    ("stat-hours", "Hours of Coding", 1200),
];

const SKILL_GROUPS: [(&str, &[(&str, u32)]); 3] = [
    ("Languages", &[("Go", 80), ("JavaScript", 85), ("Java", 75)]),
    ("Frontend", &[("React", 80), ("HTML & CSS", 90)]),
    ("Backend", &[("Node.js", 75), ("REST APIs", 85), ("SQL", 70)]),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    const ALL: [ContactField; 3] = [Self::Name, Self::Email, Self::Message];

    fn name(self) -> &'static str {
        match self {
            Self::Name => FIELD_NAMES[0],
            Self::Email => FIELD_NAMES[1],
            Self::Message => FIELD_NAMES[2],
        }
    }
}

#[derive(Default)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
    sending: bool,
}

impl ContactForm {
    fn restore(store: &BrowserStore) -> Self {
        let mut form = Self::default();
        for field in ContactField::ALL {
            if let Some(saved) = store.get(&draft_key(field.name())) {
                form.set(field, saved);
            }
        }
        form
    }

    fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    fn submission(&self) -> ContactSubmission {
        ContactSubmission::new(&self.name, &self.email, &self.message)
    }
}

/// All page state, built once after load and shared by every callback.
struct PageController {
    config: PageConfig,
    logger: Logger,
    catalog: Catalog,
    filters: FilterState,
    presenter: ModalPresenter,
    engine: ViewportEngine,
    scroll: ScrollTracker,
    chrome: ScrollChrome,
    notifications: NotificationQueue,
    revealed: HashSet<String>,
    counters: HashMap<String, u32>,
    skill_widths: HashMap<String, f64>,
    visits: VisitCounts,
    started_at_ms: u64,
    stories: ReadMoreState,
    theme: Theme,
    contact: ContactForm,
    local: BrowserStore,
    menu_open: bool,
}

impl PageController {
    fn new() -> Self {
        let config = PageConfig::from_source(browser::root_attribute);
        let logger = config.logger();
        let catalog = Catalog::builtin();
        let mut local = BrowserStore::local();
        let mut session = BrowserStore::session();

        let theme = Theme::resolve(
            theme::read_stored_theme(&local).map(Theme::as_str),
            browser::system_prefers_dark(),
        );
        let visits = visits::record_visit(&mut local, &mut session, logger);
        let contact = ContactForm::restore(&local);
        let engine = ViewportEngine::new(
            EngineTiming {
                counter_duration: config.counter_duration,
                frame_interval: config.frame_interval,
                skill_stagger: config.skill_stagger,
            },
            logger,
        );

        logger.info("page_start", config.summary());

        Self {
            config,
            logger,
            catalog,
            filters: FilterState::default(),
            presenter: ModalPresenter::new(catalog),
            engine,
            scroll: ScrollTracker::default(),
            chrome: ScrollChrome::default(),
            notifications: NotificationQueue::new(),
            revealed: HashSet::new(),
            counters: HashMap::new(),
            skill_widths: HashMap::new(),
            visits,
            started_at_ms: now_unix_millis(),
            stories: ReadMoreState::default(),
            theme,
            contact,
            local,
            menu_open: false,
        }
    }

    fn save_draft(&mut self, field: ContactField) {
        let value = self.contact.value(field).to_string();
        if let Err(error) = self.local.set(&draft_key(field.name()), &value) {
            self.logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
        }
    }

    fn clear_drafts(&mut self) {
        for field in FIELD_NAMES {
            self.local.remove(&draft_key(field));
        }
    }
}

/// Shared handle to the controller plus the hook that re-renders the page.
#[derive(Clone)]
struct Page {
    controller: Rc<RefCell<PageController>>,
    refresh: UseForceUpdateHandle,
}

impl Page {
    /// Mutates the controller, then re-renders. The borrow ends before the
    /// render starts.
    fn update<R>(&self, change: impl FnOnce(&mut PageController) -> R) -> R {
        let result = change(&mut self.controller.borrow_mut());
        self.refresh.force_update();
        result
    }

    fn logger(&self) -> Logger {
        self.controller.borrow().logger
    }

    fn notify(&self, kind: NotificationKind, message: String) {
        let (id, ttl, exit) = self.update(|page| {
            let id = page.notifications.show(kind, message);
            (id, page.config.notification_ttl, page.config.notification_exit)
        });

        let page = self.clone();
        browser::set_timeout(ttl, move || {
            if !page.update(|state| state.notifications.begin_exit(id)) {
                return;
            }

            browser::set_timeout(exit, move || {
                page.update(|state| state.notifications.remove(id));
            });
        });
    }

    fn apply_modal_change(&self, change: ModalChange) {
        match change {
            ModalChange::Opened(_) => browser::set_scroll_locked(true),
            ModalChange::Closed => browser::set_scroll_locked(false),
            ModalChange::Replaced(_) | ModalChange::Unchanged => {}
        }
    }

    fn dismiss(&self, trigger: DismissTrigger) {
        let change = self.controller.borrow_mut().presenter.dismiss(trigger);
        if change == ModalChange::Closed {
            self.logger().debug("modal_dismissed", json!({ "trigger": trigger.as_str() }));
            self.apply_modal_change(change);
            self.refresh.force_update();
        }
    }

    fn toggle_theme(&self) {
        let next = self.update(|state| {
            state.theme = state.theme.toggled();
            if let Err(error) = theme::persist_theme(&mut state.local, state.theme) {
                state.logger.warn("storage_write_failed", json!({ "reason": error.to_string() }));
            }
            state.theme
        });
        browser::apply_theme_with_transition(next);
    }

    fn jump_home(&self) {
        self.update(|state| state.menu_open = false);
        browser::scroll_to_section(HOME_SECTION);
    }

    fn card_clicked(&self, project_id: &str) {
        let action = self.update(|page| {
            visits::record_project_click(&mut page.local, project_id, page.logger);
            page.presenter.card_clicked(project_id)
        });

        match action {
            CardAction::Detail(change) => self.apply_modal_change(change),
            CardAction::ComingSoon(message) => self.notify(NotificationKind::Info, message),
            CardAction::Ignored => self
                .logger()
                .debug("project_lookup_missed", json!({ "project": project_id })),
        }
    }

    fn submit_contact(&self) {
        let (submission, min_chars, owner, logger, relay) = {
            let page = self.controller.borrow();
            (
                page.contact.submission(),
                page.config.contact_min_message,
                page.config.owner_name.clone(),
                page.logger,
                EmailJsRelay::from_config(&page.config),
            )
        };

        if let Err(error) = submission.validate(min_chars) {
            self.notify(NotificationKind::Error, error.to_string());
            return;
        }

        self.update(|page| page.contact.sending = true);

        let page = self.clone();
        spawn_local(async move {
            let outcome = contact::submit(&relay, &submission, min_chars, &owner, logger).await;

            page.update(|state| {
                state.contact.sending = false;
                if outcome.is_ok() {
                    state.contact = ContactForm::default();
                    state.clear_drafts();
                }
            });

            let (kind, message) = contact::outcome_notification(&outcome);
            page.notify(kind, message);
        });
    }
}

fn run_counter(page: Page, key: String, mut animation: CounterAnimation) {
    let Some(frame) = animation.tick() else {
        return;
    };

    let delay = animation.interval().saturating_mul(frame.steps);

    browser::set_timeout(delay, move || {
        page.update(|state| state.counters.insert(key.clone(), frame.value));
        if !frame.done {
            run_counter(page, key, animation);
        }
    });
}

fn watch_sections(page: &Page) {
    let sections = browser::query_all("section[id]");
    let section_ids: Vec<String> = sections.iter().map(Element::id).collect();
    let nav_hrefs: Vec<String> = browser::query_all(".nav-menu a")
        .iter()
        .filter_map(|link| link.get_attribute("href"))
        .collect();

    let threshold = page.controller.borrow().config.section_threshold;
    let registrations = page
        .controller
        .borrow_mut()
        .engine
        .observe_sections(ViewportSection::link_sections(section_ids, nav_hrefs, threshold));

    for (section_id, threshold) in registrations {
        let targets: Vec<Element> = sections
            .iter()
            .filter(|section| section.id() == section_id)
            .cloned()
            .collect();
        let page = page.clone();

        browser::observe_visibility(&targets, threshold, false, move |section, visible| {
            let changed = page
                .controller
                .borrow_mut()
                .engine
                .on_section_visibility_changed(&section.id(), visible);
            if changed.is_some() {
                page.refresh.force_update();
            }
        });
    }
}

fn watch_reveals(page: &Page) {
    let threshold = page.controller.borrow().config.reveal_threshold;
    let page = page.clone();

    browser::observe_visibility(&browser::query_all(".reveal"), threshold, true, move |element, visible| {
        if !visible {
            return;
        }

        let key = browser::element_key(element);
        let fired = page
            .controller
            .borrow_mut()
            .engine
            .on_animated_element_visible(&key)
            .is_some();
        if fired {
            page.update(|state| state.revealed.insert(key));
        }
    });
}

fn watch_counters(page: &Page) {
    let page = page.clone();

    browser::observe_visibility(&browser::query_all(".stat-number"), COUNTER_THRESHOLD, true, move |element, visible| {
        if !visible {
            return;
        }

        let key = browser::element_key(element);
        let target = element.get_attribute(COUNTER_TARGET_ATTR);
        let animation = page
            .controller
            .borrow_mut()
            .engine
            .on_counter_visible(&key, target.as_deref());

        if let Some(animation) = animation {
            run_counter(page.clone(), key, animation);
        }
    });
}

fn watch_skill_bars(page: &Page) {
    let Some(container) = browser::query_one(&format!("#{SKILLS_CONTAINER}")) else {
        return;
    };
    let threshold = page.controller.borrow().config.section_threshold;
    let page = page.clone();

    browser::observe_visibility(&[container], threshold, true, move |_container, visible| {
        if !visible {
            return;
        }

        let bars = browser::query_all(".skill-progress");
        let widths: Vec<Option<String>> = bars
            .iter()
            .map(|bar| bar.get_attribute(SKILL_WIDTH_ATTR))
            .collect();
        let steps = page
            .controller
            .borrow_mut()
            .engine
            .on_skill_bars_visible(SKILLS_CONTAINER, widths.iter().map(Option::as_deref));

        for step in steps {
            let key = browser::element_key(&bars[step.index]);
            let page = page.clone();
            browser::set_timeout(step.delay, move || {
                page.update(|state| state.skill_widths.insert(key, step.width_percent));
            });
        }
    });
}

fn watch_scroll(page: &Page) {
    let page = page.clone();

    browser::on_window_event("scroll", move || {
        let (scroll_y, scroll_height, viewport_height) = browser::scroll_metrics();
        let changed = {
            let mut state = page.controller.borrow_mut();
            let deepest = state.scroll.max_depth_percent();
            let chrome = state.scroll.on_scroll(scroll_y, scroll_height, viewport_height);
            if state.scroll.max_depth_percent() > deepest {
                let (depth, logger) = (state.scroll.max_depth_percent(), state.logger);
                visits::record_scroll_depth(&mut state.local, depth, logger);
            }
            let changed = chrome != state.chrome;
            state.chrome = chrome;
            changed
        };

        if changed {
            page.refresh.force_update();
        }
    });
}

fn watch_shortcuts(page: &Page) {
    let page = page.clone();

    browser::on_document_keydown(move |press| {
        let Some(shortcut) = Shortcut::from_key(press) else {
            return false;
        };

        page.logger().debug("shortcut", json!({ "action": shortcut.as_str() }));
        match shortcut {
            Shortcut::ToggleTheme => page.toggle_theme(),
            Shortcut::JumpHome => page.jump_home(),
            Shortcut::CloseOverlay => page.dismiss(DismissTrigger::EscapeKey),
        }

        shortcut.suppresses_default()
    });
}

fn watch_unload(page: &Page) {
    let page = page.clone();

    browser::on_window_event("beforeunload", move || {
        let mut state = page.controller.borrow_mut();
        let elapsed = Duration::from_millis(now_unix_millis().saturating_sub(state.started_at_ms));
        let logger = state.logger;
        visits::record_time_spent(&mut state.local, elapsed, logger);
    });
}

#[derive(Properties, PartialEq)]
struct ExternalLinkProps {
    href: AttrValue,
    label: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    icon: Option<AttrValue>,
}

#[function_component(ExternalLink)]
fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
        >
            if let Some(icon) = props.icon.clone() {
                <i class={icon} aria-hidden="true"></i>{" "}
            }
            {props.label.clone()}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: &'static ProjectRecord,
    hidden: bool,
    revealed: bool,
    on_open: Callback<&'static str>,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let onclick = {
        let on_open = props.on_open.clone();
        Callback::from(move |_: MouseEvent| on_open.emit(project.id))
    };

    html! {
        <article
            class={classes!(
                "project-card",
                "reveal",
                project.is_planned().then_some("future"),
                props.hidden.then_some("is-filtered-out")
            )}
            data-key={project.id}
            data-category={project.category.as_str()}
            data-status={if project.is_planned() { "planned" } else { "completed" }}
            style={if props.revealed { REVEAL_SHOWN_STYLE } else { REVEAL_HIDDEN_STYLE }}
            hidden={props.hidden}
            {onclick}
        >
            <h3>{project.title}</h3>
            <p>{project.description}</p>
            <div class="tech-tags">
                { for project.technologies.iter().map(|tech| html! { <span class="tech-tag">{*tech}</span> }) }
            </div>
            if project.is_planned() {
                <span class="project-badge">{"Coming soon"}</span>
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectModalProps {
    view: Option<DetailView>,
    on_dismiss: Callback<DismissTrigger>,
}

#[function_component(ProjectModal)]
fn project_modal(props: &ProjectModalProps) -> Html {
    let on_backdrop = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |event: MouseEvent| {
            let outside = match (event.target(), event.current_target()) {
                (Some(target), Some(current)) => js_sys::Object::is(target.as_ref(), current.as_ref()),
                _ => false,
            };
            if outside {
                on_dismiss.emit(DismissTrigger::OutsideClick);
            }
        })
    };
    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(DismissTrigger::CloseControl))
    };

    let display = if props.view.is_some() { "display: block;" } else { "display: none;" };

    html! {
        <div id="project-modal" class="modal" style={display} onclick={on_backdrop}>
            <div class="modal-content" role="dialog" aria-modal="true">
                <button class="close" type="button" aria-label="Close project details" onclick={on_close}>
                    {"×"}
                </button>
                <div id="modal-body">
                    if let Some(view) = props.view.clone() {
                        <div class="modal-header">
                            <h2>{view.title}</h2>
                            <div class="project-links-modal">
                                { for view.links.iter().map(|link| html! {
                                    <ExternalLink
                                        href={link.href}
                                        label={link.label}
                                        class={classes!(link.class)}
                                        icon={AttrValue::from(link.icon)}
                                    />
                                }) }
                            </div>
                        </div>
                        <div class="modal-content-body">
                            <p class="project-description">{view.description}</p>
                            <div class="tech-section">
                                <h3><i class="fas fa-code"></i>{" Technologies Used"}</h3>
                                <div class="tech-tags">
                                    { for view.tags.iter().map(|tag| html! { <span class="tech-tag">{*tag}</span> }) }
                                </div>
                            </div>
                            <div class="features-section">
                                <h3><i class="fas fa-star"></i>{" Key Features"}</h3>
                                <ul class="features-list">
                                    { for view.features.iter().map(|feature| html! {
                                        <li><i class="fas fa-check"></i>{" "}{*feature}</li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NotificationToastProps {
    notification: Option<Notification>,
    on_close: Callback<u64>,
}

#[function_component(NotificationToast)]
fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notification) = props.notification.clone() else {
        return html! {};
    };

    let onclick = {
        let on_close = props.on_close.clone();
        let id = notification.id;
        Callback::from(move |_: MouseEvent| on_close.emit(id))
    };

    html! {
        <div
            class={classes!(
                "notification",
                format!("notification-{}", notification.kind.as_str()),
                notification.leaving.then_some("is-leaving")
            )}
            role="status"
        >
            <div class="notification-content">
                <i class={classes!("fas", notification.kind.icon())} aria-hidden="true"></i>
                <span>{notification.message.clone()}</span>
                <button class="notification-close" type="button" aria-label="Dismiss" {onclick}>
                    <i class="fas fa-times" aria-hidden="true"></i>
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StoryCardProps {
    story: &'static Story,
    expanded: bool,
    revealed: bool,
    button_label: &'static str,
    on_toggle: Callback<&'static str>,
}

#[function_component(StoryCard)]
fn story_card(props: &StoryCardProps) -> Html {
    let story = props.story;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(story.id))
    };
    let display = story.kind.text_display();
    let (short_style, full_style) = if props.expanded {
        ("display: none;".to_string(), format!("display: {display};"))
    } else {
        (format!("display: {display};"), "display: none;".to_string())
    };

    html! {
        <article
            class={classes!(story.kind.card_class(), "reveal")}
            data-key={story.id}
            style={if props.revealed { REVEAL_SHOWN_STYLE } else { REVEAL_HIDDEN_STYLE }}
        >
            <h3>{story.heading}</h3>
            <p class="story-byline">{story.byline}</p>
            <p>
                <span class="short-text" style={short_style}>{story.short_text}</span>
                <span class="full-text" style={full_style}>{story.full_text}</span>
            </p>
            <button class="read-more-btn" type="button" aria-expanded={props.expanded.to_string()} {onclick}>
                {props.button_label}
            </button>
        </article>
    }
}

#[function_component(App)]
fn app() -> Html {
    let controller = use_mut_ref(PageController::new);
    let refresh = use_force_update();
    let page = Page {
        controller: controller.clone(),
        refresh,
    };

    {
        let page = page.clone();
        use_effect_with((), move |_| {
            browser::apply_theme(page.controller.borrow().theme);
            watch_sections(&page);
            watch_reveals(&page);
            watch_counters(&page);
            watch_skill_bars(&page);
            watch_scroll(&page);
            watch_shortcuts(&page);
            watch_unload(&page);
            || ()
        });
    }

    let on_toggle_theme = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.toggle_theme())
    };

    let on_toggle_menu = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.update(|state| state.menu_open = !state.menu_open))
    };

    let on_nav_click = {
        let page = page.clone();
        Callback::from(move |_: MouseEvent| page.update(|state| state.menu_open = false))
    };

    let on_filter = {
        let page = page.clone();
        Callback::from(move |filter: Filter| {
            page.update(|state| state.filters.apply(filter));
        })
    };

    let on_open_card = {
        let page = page.clone();
        Callback::from(move |project_id: &'static str| page.card_clicked(project_id))
    };

    let on_dismiss = {
        let page = page.clone();
        Callback::from(move |trigger: DismissTrigger| page.dismiss(trigger))
    };

    let on_toggle_story = {
        let page = page.clone();
        Callback::from(move |story_id: &'static str| {
            page.update(|state| state.stories.toggle(story_id));
        })
    };

    let on_close_notification = {
        let page = page.clone();
        Callback::from(move |id: u64| {
            page.update(|state| state.notifications.remove(id));
        })
    };

    let on_input = |field: ContactField| {
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                ContactField::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => event.target_unchecked_into::<HtmlInputElement>().value(),
            };
            page.update(|state| {
                state.contact.set(field, value);
                state.save_draft(field);
            });
        })
    };

    let on_submit = {
        let page = page.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            page.submit_contact();
        })
    };

    let on_back_to_top = Callback::from(|_: MouseEvent| browser::scroll_to_top());

    let state = controller.borrow();
    let active_link = state.engine.active_nav_link().map(str::to_string);
    let chrome = state.chrome;
    let modal_view = state.presenter.current().map(DetailView::from_record);
    let navbar_style = if chrome.hidden {
        "transform: translateY(-100%);"
    } else {
        "transform: translateY(0);"
    };

    html! {
        <>
            <div id="progress-bar" style={format!("width: {:.2}%;", chrome.progress_percent)}></div>
            <nav class={classes!("navbar", chrome.scrolled.then_some("scrolled"))} style={navbar_style}>
                <a class="nav-logo" href="#home">{state.config.owner_name.clone()}</a>
                <ul class={classes!("nav-menu", state.menu_open.then_some("active"))}>
                    { for NAV_SECTIONS.iter().map(|(id, label)| {
                        let href = format!("#{id}");
                        let active = active_link.as_deref() == Some(href.as_str());
                        html! {
                            <li>
                                <a
                                    href={href}
                                    class={classes!("nav-link", active.then_some("active"))}
                                    onclick={on_nav_click.clone()}
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }) }
                </ul>
                <button
                    id="theme-toggle"
                    type="button"
                    aria-label={state.theme.toggle_label()}
                    aria-pressed={state.theme.pressed().to_string()}
                    onclick={on_toggle_theme}
                >
                    <i class={state.theme.icon()} aria-hidden="true"></i>
                </button>
                <button
                    class={classes!("hamburger", state.menu_open.then_some("active"))}
                    type="button"
                    aria-label="Toggle navigation"
                    onclick={on_toggle_menu}
                >
                    <span></span><span></span><span></span>
                </button>
            </nav>

            <main>
                <section id="home" class="hero">
                    <h1>{state.config.owner_name.clone()}</h1>
                    <p class="hero-subtitle">{"Software Engineering Student"}</p>
                    <div class="stats">
                        { for STATS.iter().map(|(key, label, target)| html! {
                            <div class="stat">
                                <span class="stat-number" id={*key} data-target={target.to_string()}>
                                    {state.counters.get(*key).copied().unwrap_or(0)}
                                </span>
                                <span class="stat-label">{*label}</span>
                            </div>
                        }) }
                    </div>
                </section>

                <section id="about">
                    <h2>{"About"}</h2>
                    <p>
                        {"Software engineering student building backend services in Go and interactive \
                          web applications in React, with a focus on clean architecture."}
                    </p>
                </section>

                <section id="skills">
                    <h2>{"Skills"}</h2>
                    <div class="skills-grid">
                        { for SKILL_GROUPS.iter().map(|(group, skills)| {
                            let group_key = format!("skill-group-{}", group.to_ascii_lowercase());
                            let revealed = state.revealed.contains(&group_key);
                            html! {
                                <div
                                    class="skill-category reveal"
                                    data-key={group_key.clone()}
                                    style={if revealed { REVEAL_SHOWN_STYLE } else { REVEAL_HIDDEN_STYLE }}
                                >
                                    <h3>{*group}</h3>
                                    { for skills.iter().map(|(skill, width)| {
                                        let bar_key = format!("skill-{}", skill.to_ascii_lowercase().replace(|ch: char| !ch.is_ascii_alphanumeric(), "-"));
                                        let shown = state.skill_widths.get(&bar_key).copied().unwrap_or(0.0);
                                        html! {
                                            <div class="skill">
                                                <div class="skill-info">
                                                    <span>{*skill}</span>
                                                    <span>{format!("{width}%")}</span>
                                                </div>
                                                <div class="skill-bar">
                                                    <div
                                                        class="skill-progress"
                                                        id={bar_key}
                                                        data-width={width.to_string()}
                                                        style={format!("width: {shown}%;")}
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    }) }
                                </div>
                            }
                        }) }
                    </div>
                </section>

                <section id="projects">
                    <h2>{"Projects"}</h2>
                    <div class="project-filters">
                        { for Filter::OPTIONS.iter().map(|filter| {
                            let filter = *filter;
                            let onclick = {
                                let on_filter = on_filter.clone();
                                Callback::from(move |_: MouseEvent| on_filter.emit(filter))
                            };
                            html! {
                                <button
                                    type="button"
                                    class={classes!("filter-btn", state.filters.is_active(filter).then_some("active"))}
                                    data-filter={filter.as_str()}
                                    {onclick}
                                >
                                    {filter.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <div class="projects-grid">
                        { for state.catalog.projects().iter().map(|project| html! {
                            <ProjectCard
                                key={project.id}
                                project={project}
                                hidden={!state.filters.is_visible(project)}
                                revealed={state.revealed.contains(project.id)}
                                on_open={on_open_card.clone()}
                            />
                        }) }
                    </div>
                </section>

                <section id="testimonials">
                    <h2>{"Testimonials"}</h2>
                    <div class="testimonials-grid">
                        { for TESTIMONIALS.iter().map(|story| html! {
                            <StoryCard
                                key={story.id}
                                story={story}
                                expanded={state.stories.is_expanded(story.id)}
                                revealed={state.revealed.contains(story.id)}
                                button_label={state.stories.button_label(story.id)}
                                on_toggle={on_toggle_story.clone()}
                            />
                        }) }
                    </div>
                </section>

                <section id="blog">
                    <h2>{"Blog"}</h2>
                    <div class="blog-grid">
                        { for BLOG_POSTS.iter().map(|story| html! {
                            <StoryCard
                                key={story.id}
                                story={story}
                                expanded={state.stories.is_expanded(story.id)}
                                revealed={state.revealed.contains(story.id)}
                                button_label={state.stories.button_label(story.id)}
                                on_toggle={on_toggle_story.clone()}
                            />
                        }) }
                    </div>
                </section>

                <section id="contact">
                    <h2>{"Contact"}</h2>
                    <form class="contact-form" onsubmit={on_submit} novalidate=true>
                        <input
                            type="text"
                            name={ContactField::Name.name()}
                            placeholder="Your Name"
                            value={state.contact.value(ContactField::Name).to_string()}
                            oninput={on_input(ContactField::Name)}
                        />
                        <input
                            type="email"
                            name={ContactField::Email.name()}
                            placeholder="Your Email"
                            value={state.contact.value(ContactField::Email).to_string()}
                            oninput={on_input(ContactField::Email)}
                        />
                        <textarea
                            name={ContactField::Message.name()}
                            placeholder="Your Message"
                            rows="5"
                            value={state.contact.value(ContactField::Message).to_string()}
                            oninput={on_input(ContactField::Message)}
                        />
                        <button class="btn-primary" type="submit" disabled={state.contact.sending}>
                            { if state.contact.sending { SENDING_LABEL } else { SUBMIT_LABEL } }
                        </button>
                    </form>
                </section>
            </main>

            <footer class="footer">
                <div class="social-links">
                    <ExternalLink href="https://github.com/benjamin-1995" label="GitHub" icon={AttrValue::from("fab fa-github")} />
                    <ExternalLink
                        href="https://linkedin.com/in/biniam-birihanu-95ba9b38b/"
                        label="LinkedIn"
                        icon={AttrValue::from("fab fa-linkedin")}
                    />
                </div>
                <p class="visitor-stats">
                    {"Visitors: "}<span id="visitor-count">{state.visits.visitors}</span>
                    {" · Page views: "}<span id="page-views">{state.visits.page_views}</span>
                </p>
            </footer>

            <button
                class={classes!("back-to-top", chrome.back_to_top_visible.then_some("is-visible"))}
                type="button"
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                <i class="fas fa-arrow-up" aria-hidden="true"></i>
            </button>

            <ProjectModal view={modal_view} on_dismiss={on_dismiss} />
            <NotificationToast
                notification={state.notifications.current().cloned()}
                on_close={on_close_notification}
            />
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(browser::mount_point().expect("missing #app mount point")).render();
}
