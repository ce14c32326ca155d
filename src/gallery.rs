use crate::catalog::{Catalog, Category, ProjectRecord};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    pub const OPTIONS: [Filter; 4] = [
        Self::All,
        Self::Category(Category::Web),
        Self::Category(Category::Backend),
        Self::Category(Category::Mobile),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(category) => category.label(),
        }
    }

    pub fn matches(self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => project.category == category,
        }
    }
}

/// Active filter control. Exactly one filter is active; cards that do not
/// match stay rendered but hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    active: Filter,
}

impl FilterState {
    #[cfg(test)]
    pub fn active(&self) -> Filter {
        self.active
    }

    pub fn is_active(&self, filter: Filter) -> bool {
        self.active == filter
    }

    /// Returns whether the active filter changed.
    pub fn apply(&mut self, filter: Filter) -> bool {
        let changed = self.active != filter;
        self.active = filter;
        changed
    }

    pub fn is_visible(&self, project: &ProjectRecord) -> bool {
        self.active.matches(project)
    }

    #[cfg(test)]
    pub fn visible_ids(&self, catalog: &Catalog) -> Vec<&'static str> {
        catalog
            .projects()
            .iter()
            .filter(|project| self.is_visible(project))
            .map(|project| project.id)
            .collect()
    }
}

/// Body scroll suppression while the overlay is up. A plain flag, not a
/// counter: any number of acquires is undone by one release.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Returns true when the page overflow has to change.
    pub fn acquire(&mut self) -> bool {
        !std::mem::replace(&mut self.locked, true)
    }

    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.locked, false)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    current_project_id: Option<&'static str>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.current_project_id.is_some()
    }

    #[cfg(test)]
    pub fn current_project_id(&self) -> Option<&'static str> {
        self.current_project_id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalChange {
    Opened(&'static ProjectRecord),
    Replaced(&'static ProjectRecord),
    Closed,
    Unchanged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissTrigger {
    OutsideClick,
    EscapeKey,
    CloseControl,
}

impl DismissTrigger {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OutsideClick => "outside-click",
            Self::EscapeKey => "escape-key",
            Self::CloseControl => "close-control",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    Detail(ModalChange),
    ComingSoon(String),
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailLink {
    pub label: &'static str,
    pub href: &'static str,
    pub class: &'static str,
    pub icon: &'static str,
}

/// Everything the overlay body shows for one project.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailView {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: Vec<&'static str>,
    pub features: Vec<&'static str>,
    pub links: Vec<DetailLink>,
}

impl DetailView {
    pub fn from_record(project: &'static ProjectRecord) -> Self {
        let mut links = Vec::new();

        if let Some(href) = project.links.github {
            links.push(DetailLink {
                label: "View Code",
                href,
                class: "btn-primary",
                icon: "fab fa-github",
            });
        }

        if let Some(href) = project.links.demo {
            links.push(DetailLink {
                label: "Live Demo",
                href,
                class: "btn-secondary",
                icon: "fas fa-external-link-alt",
            });
        }

        Self {
            title: project.title,
            description: project.description,
            tags: project.technologies.to_vec(),
            features: project.features.to_vec(),
            links,
        }
    }
}

pub fn coming_soon_message(project: &ProjectRecord) -> String {
    format!("{} is coming soon! Stay tuned for updates.", project.title)
}

/// Owns the catalog, the single detail overlay and its scroll lock.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalPresenter {
    catalog: Catalog,
    state: ModalState,
    scroll_lock: ScrollLock,
}

impl ModalPresenter {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            state: ModalState::default(),
            scroll_lock: ScrollLock::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ModalState {
        self.state
    }

    #[cfg(test)]
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    pub fn current(&self) -> Option<&'static ProjectRecord> {
        self.state
            .current_project_id
            .and_then(|id| self.catalog.get(id))
    }

    /// Unknown ids leave the overlay exactly as it was.
    pub fn open_detail(&mut self, project_id: &str) -> ModalChange {
        let Some(project) = self.catalog.get(project_id) else {
            return ModalChange::Unchanged;
        };

        let was_open = self.state.is_open();
        self.state.current_project_id = Some(project.id);
        self.scroll_lock.acquire();

        if was_open {
            ModalChange::Replaced(project)
        } else {
            ModalChange::Opened(project)
        }
    }

    pub fn close_detail(&mut self) -> ModalChange {
        if !self.state.is_open() {
            return ModalChange::Unchanged;
        }

        self.state.current_project_id = None;
        self.scroll_lock.release();
        ModalChange::Closed
    }

    pub fn dismiss(&mut self, _trigger: DismissTrigger) -> ModalChange {
        self.close_detail()
    }

    pub fn notify_planned_project(&self, project_id: &str) -> Option<String> {
        self.catalog
            .get(project_id)
            .filter(|project| project.is_planned())
            .map(coming_soon_message)
    }

    /// Planned projects have no detail content and answer with a toast
    /// message instead of opening the overlay.
    pub fn card_clicked(&mut self, project_id: &str) -> CardAction {
        if let Some(message) = self.notify_planned_project(project_id) {
            return CardAction::ComingSoon(message);
        }

        match self.open_detail(project_id) {
            ModalChange::Unchanged => CardAction::Ignored,
            change => CardAction::Detail(change),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectStatus;
    use crate::notifications::{NotificationKind, NotificationQueue};

    fn presenter() -> ModalPresenter {
        ModalPresenter::new(Catalog::builtin())
    }

    #[test]
    fn filter_is_idempotent_for_every_option() {
        let catalog = Catalog::builtin();

        for filter in Filter::OPTIONS {
            let mut once = FilterState::default();
            once.apply(filter);
            let mut twice = FilterState::default();
            twice.apply(filter);
            let changed_again = twice.apply(filter);

            assert!(!changed_again);
            assert_eq!(once.visible_ids(&catalog), twice.visible_ids(&catalog));
        }
    }

    #[test]
    fn filter_shows_exactly_matching_cards() {
        let catalog = Catalog::builtin();

        for category in Category::ALL {
            let mut state = FilterState::default();
            state.apply(Filter::Category(category));
            let expected: Vec<&str> = catalog
                .projects()
                .iter()
                .filter(|project| project.category == category)
                .map(|project| project.id)
                .collect();

            assert_eq!(state.visible_ids(&catalog), expected);
        }

        let mut state = FilterState::default();
        state.apply(Filter::Category(Category::Web));
        state.apply(Filter::All);
        assert_eq!(state.visible_ids(&catalog).len(), catalog.len());
    }

    #[test]
    fn exactly_one_filter_is_active() {
        let mut state = FilterState::default();
        assert!(state.is_active(Filter::All));
        assert!(state.apply(Filter::Category(Category::Backend)));

        let active: Vec<Filter> = Filter::OPTIONS
            .into_iter()
            .filter(|filter| state.is_active(*filter))
            .collect();
        assert_eq!(active, vec![Filter::Category(Category::Backend)]);
        assert_eq!(state.active(), Filter::Category(Category::Backend));
    }

    #[test]
    fn filter_controls_carry_distinct_tags_and_labels() {
        let tags: Vec<&str> = Filter::OPTIONS.iter().map(|filter| filter.as_str()).collect();
        let labels: Vec<&str> = Filter::OPTIONS.iter().map(|filter| filter.label()).collect();

        assert_eq!(tags, vec!["all", "web", "backend", "mobile"]);
        assert_eq!(labels.len(), 4);
        assert_eq!(Filter::All.label(), "All");
        assert_eq!(Filter::Category(Category::Backend).label(), Category::Backend.label());
        assert!(labels.iter().all(|label| !label.is_empty()));
    }

    #[test]
    fn repeated_opens_keep_one_current_project() {
        let mut presenter = presenter();

        assert!(matches!(presenter.open_detail("todo-golang"), ModalChange::Opened(_)));
        assert!(matches!(presenter.open_detail("chat-app"), ModalChange::Replaced(_)));
        assert!(matches!(presenter.open_detail("amazon-clone"), ModalChange::Replaced(_)));

        assert!(presenter.state().is_open());
        assert_eq!(presenter.state().current_project_id(), Some("amazon-clone"));
        assert!(presenter.scroll_locked());

        assert_eq!(presenter.close_detail(), ModalChange::Closed);
        assert!(!presenter.state().is_open());
        assert_eq!(presenter.state().current_project_id(), None);
        assert!(presenter.current().is_none());
        assert!(!presenter.scroll_locked());
    }

    #[test]
    fn every_dismissal_matches_close_detail() {
        let mut reference = presenter();
        reference.open_detail("todo-golang");
        reference.close_detail();

        for trigger in [
            DismissTrigger::OutsideClick,
            DismissTrigger::EscapeKey,
            DismissTrigger::CloseControl,
        ] {
            let mut presenter = presenter();
            presenter.open_detail("todo-golang");

            assert_eq!(presenter.dismiss(trigger), ModalChange::Closed, "{}", trigger.as_str());
            assert_eq!(presenter, reference);
        }
    }

    #[test]
    fn closing_a_closed_modal_is_a_no_op() {
        let mut presenter = presenter();

        assert_eq!(presenter.close_detail(), ModalChange::Unchanged);
        assert_eq!(presenter.dismiss(DismissTrigger::OutsideClick), ModalChange::Unchanged);
        assert_eq!(presenter, ModalPresenter::new(Catalog::builtin()));
    }

    #[test]
    fn unknown_id_leaves_state_unchanged() {
        let mut presenter = presenter();
        assert_eq!(presenter.open_detail("does-not-exist"), ModalChange::Unchanged);
        assert!(!presenter.state().is_open());
        assert!(!presenter.scroll_locked());

        presenter.open_detail("chat-app");
        let before = presenter.clone();
        assert_eq!(presenter.open_detail("does-not-exist"), ModalChange::Unchanged);
        assert_eq!(presenter, before);
    }

    #[test]
    fn scroll_lock_is_a_flag_not_a_counter() {
        let mut lock = ScrollLock::default();

        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert!(lock.release());
        assert!(!lock.is_locked());
        assert!(!lock.release());
    }

    #[test]
    fn detail_view_lists_links_only_when_present() {
        const WITH_DEMO: &[ProjectRecord] = &[ProjectRecord {
            id: "demo-only",
            title: "Demo Only",
            description: "Hosted without public code",
            technologies: &["Rust"],
            features: &["Hosting"],
            links: crate::catalog::ProjectLinks {
                github: None,
                demo: Some("https://demo.example.com"),
            },
            category: Category::Web,
            status: ProjectStatus::Completed,
        }];
        let catalog = Catalog::from_static(WITH_DEMO);
        let view = DetailView::from_record(catalog.get("demo-only").expect("fixture project"));

        assert_eq!(view.links.len(), 1);
        assert_eq!(view.links[0].label, "Live Demo");
        assert_eq!(view.links[0].class, "btn-secondary");
        assert_eq!(view.links[0].icon, "fas fa-external-link-alt");
    }

    #[test]
    fn backend_filter_then_open_and_planned_click() {
        let catalog = Catalog::builtin();
        let mut filters = FilterState::default();
        let mut presenter = ModalPresenter::new(catalog);
        let mut notifications = NotificationQueue::new();

        filters.apply(Filter::Category(Category::Backend));
        assert_eq!(filters.visible_ids(&catalog), vec!["todo-golang"]);

        match presenter.card_clicked("todo-golang") {
            CardAction::Detail(ModalChange::Opened(project)) => {
                let view = DetailView::from_record(project);
                assert_eq!(view.title, "Todo App with Golang");
                assert_eq!(view.tags, vec!["Golang", "REST API", "JSON"]);
                assert_eq!(view.description, project.description);
                assert_eq!(view.features, project.features.to_vec());
                assert_eq!(view.links[0].label, "View Code");
                assert_eq!(view.links[0].icon, "fab fa-github");
            }
            other => panic!("expected the detail overlay to open, got {other:?}"),
        }
        presenter.close_detail();

        match presenter.card_clicked("future-app") {
            CardAction::ComingSoon(message) => {
                notifications.show(NotificationKind::Info, message);
            }
            other => panic!("planned project should not open a detail view, got {other:?}"),
        }

        assert!(!presenter.state().is_open());
        assert_eq!(notifications.len(), 1);
        let shown = notifications.current().expect("coming soon notification");
        assert_eq!(shown.kind, NotificationKind::Info);
        assert_eq!(shown.message, "Campus Companion App is coming soon! Stay tuned for updates.");
    }

    #[test]
    fn unknown_card_is_ignored() {
        let mut presenter = presenter();
        assert_eq!(presenter.card_clicked("does-not-exist"), CardAction::Ignored);
    }
}
