#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Web,
    Backend,
    Mobile,
}

impl Category {
    #[cfg(test)]
    pub const ALL: [Category; 3] = [Self::Web, Self::Backend, Self::Mobile];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Backend => "backend",
            Self::Mobile => "mobile",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web",
            Self::Backend => "Backend",
            Self::Mobile => "Mobile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Completed,
    Planned,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    pub github: Option<&'static str>,
    pub demo: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub links: ProjectLinks,
    pub category: Category,
    pub status: ProjectStatus,
}

impl ProjectRecord {
    pub fn is_planned(&self) -> bool {
        self.status == ProjectStatus::Planned
    }
}

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: "todo-golang",
        title: "Todo App with Golang",
        description: "RESTful API backend for todo management built with Golang, featuring CRUD operations and clean architecture",
        technologies: &["Golang", "REST API", "JSON"],
        features: &["CRUD Operations", "Clean Architecture", "API Endpoints", "Task Management"],
        links: ProjectLinks {
            github: Some("https://github.com/benjamin-1995/todo-golang"),
            demo: None,
        },
        category: Category::Backend,
        status: ProjectStatus::Completed,
    },
    ProjectRecord {
        id: "amazon-clone",
        title: "Amazon Clone",
        description: "E-commerce website clone with shopping cart functionality, product listings, and responsive design",
        technologies: &["JavaScript", "HTML5", "CSS3"],
        features: &["Product Listings", "Shopping Cart", "Responsive Design", "User Interface"],
        links: ProjectLinks {
            github: Some("https://github.com/benjamin-1995/amazon-clone"),
            demo: None,
        },
        category: Category::Web,
        status: ProjectStatus::Completed,
    },
    ProjectRecord {
        id: "grade-calculator",
        title: "Student Grade Calculator",
        description: "Interactive React web application for GPA calculation with data visualization and progress tracking",
        technologies: &["React", "CSS3", "JavaScript"],
        features: &["GPA Calculation", "Data Visualization", "Progress Tracking", "Interactive UI"],
        links: ProjectLinks {
            github: Some("https://github.com/benjamin-1995/grade-calculator"),
            demo: None,
        },
        category: Category::Web,
        status: ProjectStatus::Completed,
    },
    ProjectRecord {
        id: "chat-app",
        title: "Real-Time Chat Application",
        description: "Modern messaging platform with file sharing, group chats, real-time messaging using Socket.io and Node.js",
        technologies: &["React", "Socket.io", "Node.js"],
        features: &["Real-time Messaging", "Group Chats", "File Sharing", "User Authentication"],
        links: ProjectLinks {
            github: Some("https://github.com/benjamin-1995/chat-app"),
            demo: None,
        },
        category: Category::Web,
        status: ProjectStatus::Completed,
    },
    ProjectRecord {
        id: "future-app",
        title: "Campus Companion App",
        description: "Mobile companion for course schedules, announcements and study groups",
        technologies: &["Flutter", "Firebase"],
        features: &["Course Schedules", "Push Announcements", "Study Groups"],
        links: ProjectLinks {
            github: None,
            demo: None,
        },
        category: Category::Mobile,
        status: ProjectStatus::Planned,
    },
];

/// The fixed project table shown in the gallery. Built once, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Catalog {
    projects: &'static [ProjectRecord],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    pub fn builtin() -> Self {
        Self { projects: PROJECTS }
    }

    #[cfg(test)]
    pub fn from_static(projects: &'static [ProjectRecord]) -> Self {
        Self { projects }
    }

    pub fn projects(&self) -> &'static [ProjectRecord] {
        self.projects
    }

    pub fn get(&self, id: &str) -> Option<&'static ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use url::Url;

    #[test]
    fn ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<&str> = catalog.projects().iter().map(|project| project.id).collect();

        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn category_tags_are_distinct_from_the_all_filter() {
        let tags: HashSet<&str> = Category::ALL.iter().map(|category| category.as_str()).collect();

        assert_eq!(tags.len(), Category::ALL.len());
        assert!(!tags.contains("all"));
        assert_eq!(Category::Mobile.label(), "Mobile");
    }

    #[test]
    fn links_are_absolute_https_urls() {
        for project in Catalog::builtin().projects() {
            for link in [project.links.github, project.links.demo].into_iter().flatten() {
                let parsed = Url::parse(link).expect("catalog link should parse");
                assert_eq!(parsed.scheme(), "https", "{} has a non-https link", project.id);
            }
        }
    }

    #[test]
    fn lookup_finds_scenario_project() {
        let catalog = Catalog::builtin();
        let todo = catalog.get("todo-golang").expect("todo-golang is in the catalog");

        assert_eq!(todo.title, "Todo App with Golang");
        assert_eq!(todo.category, Category::Backend);
        assert_eq!(todo.technologies.len(), 3);
        assert!(!todo.is_planned());
        assert!(catalog.get("future-app").is_some_and(ProjectRecord::is_planned));
        assert!(catalog.get("does-not-exist").is_none());
    }

    #[test]
    fn completed_projects_carry_detail_content() {
        for project in Catalog::builtin().projects().iter().filter(|project| !project.is_planned()) {
            assert!(!project.technologies.is_empty(), "{} has no technologies", project.id);
            assert!(!project.features.is_empty(), "{} has no features", project.id);
        }
    }
}
