use std::collections::HashSet;

pub const READ_MORE_LABEL: &str = "Read More";
pub const READ_LESS_LABEL: &str = "Read Less";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoryKind {
    Blog,
    Testimonial,
}

impl StoryKind {
    pub fn card_class(self) -> &'static str {
        match self {
            Self::Blog => "blog-card",
            Self::Testimonial => "testimonial-card",
        }
    }

    /// Blog posts expand into a block below the teaser; quotes expand in
    /// place.
    pub fn text_display(self) -> &'static str {
        match self {
            Self::Blog => "block",
            Self::Testimonial => "inline",
        }
    }
}

/// A blog post or testimonial card with a teaser and a longer body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub id: &'static str,
    pub kind: StoryKind,
    pub heading: &'static str,
    pub byline: &'static str,
    pub short_text: &'static str,
    pub full_text: &'static str,
}

pub const BLOG_POSTS: &[Story] = &[
    Story {
        id: "blog-go-rest",
        kind: StoryKind::Blog,
        heading: "Building a REST API in Go",
        byline: "Backend notes",
        short_text: "What I learned wiring a todo service with nothing but the standard library...",
        full_text: "What I learned wiring a todo service with nothing but the standard library: \
                    routing with net/http, keeping handlers small, encoding JSON responses \
                    consistently, and writing table-driven tests before adding any framework.",
    },
    Story {
        id: "blog-react-state",
        kind: StoryKind::Blog,
        heading: "Keeping React State Simple",
        byline: "Frontend notes",
        short_text: "Most of the bugs in my first chat app came from state living in too many places...",
        full_text: "Most of the bugs in my first chat app came from state living in too many places. \
                    Lifting it into one reducer, deriving everything else from it, and treating \
                    socket events as plain actions removed a whole class of stale-render issues.",
    },
];

pub const TESTIMONIALS: &[Story] = &[
    Story {
        id: "testimonial-mentor",
        kind: StoryKind::Testimonial,
        heading: "Project mentor",
        byline: "Software engineering program",
        short_text: "Biniam picks up new tools quickly and asks the right questions...",
        full_text: "Biniam picks up new tools quickly and asks the right questions. On the team \
                    project he owned the backend end to end and documented it so the rest of \
                    the group could build on it without waiting for him.",
    },
    Story {
        id: "testimonial-teammate",
        kind: StoryKind::Testimonial,
        heading: "Teammate",
        byline: "Hackathon squad",
        short_text: "Calm under deadline pressure and generous with code reviews...",
        full_text: "Calm under deadline pressure and generous with code reviews. When our demo \
                    broke an hour before judging he traced it to a CORS setting, fixed it, and \
                    walked the rest of us through what had happened.",
    },
];

/// Which cards currently show their full text. Every card starts collapsed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadMoreState {
    expanded: HashSet<&'static str>,
}

impl ReadMoreState {
    /// Flips one card and returns whether it is now expanded.
    pub fn toggle(&mut self, story_id: &'static str) -> bool {
        if self.expanded.remove(story_id) {
            false
        } else {
            self.expanded.insert(story_id);
            true
        }
    }

    pub fn is_expanded(&self, story_id: &str) -> bool {
        self.expanded.contains(story_id)
    }

    pub fn button_label(&self, story_id: &str) -> &'static str {
        if self.is_expanded(story_id) {
            READ_LESS_LABEL
        } else {
            READ_MORE_LABEL
        }
    }
}
