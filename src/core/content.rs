//! # Portfolio Content
//!
//! What the page says, and the element ids every part of it answers to.
//! The id scheme is shared by the core (which binds behaviour to ids) and the
//! host (which lays out and renders them).

use serde::{Deserialize, Serialize};

use crate::core::filter::{FILTER_ALL, FilterButton, ProjectCard};
use crate::core::host::ElementId;
use crate::core::scroll::{PageBindings, SectionBinding, StatBinding};

pub mod ids {
    use crate::core::host::ElementId;

    pub const NAVBAR: &str = "navbar";
    pub const TYPEWRITER: &str = "typewriter";
    pub const HERO_VISUAL: &str = "hero-visual";
    pub const ABOUT_TEXT: &str = "about-text";
    pub const ABOUT_STATS: &str = "about-stats";
    pub const CONTACT_CONTENT: &str = "contact-content";

    pub fn element(id: &str) -> ElementId {
        ElementId::from(id)
    }

    pub fn nav_link(section: &str) -> ElementId {
        ElementId::new(format!("nav-link:{section}"))
    }

    pub fn section_title(section: &str) -> ElementId {
        ElementId::new(format!("title:{section}"))
    }

    pub fn stat(index: usize) -> ElementId {
        ElementId::new(format!("stat:{index}"))
    }

    pub fn project(index: usize) -> ElementId {
        ElementId::new(format!("project:{index}"))
    }

    pub fn skill(index: usize) -> ElementId {
        ElementId::new(format!("skill:{index}"))
    }

    pub fn filter(category: &str) -> ElementId {
        ElementId::new(format!("filter:{category}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Home,
        SectionKind::About,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SectionKind::Home => "home",
            SectionKind::About => "about",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Home => "Home",
            SectionKind::About => "About",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Contact => "Contact",
        }
    }

    pub fn element(self) -> ElementId {
        ElementId::from(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioContent {
    pub name: String,
    pub greeting: String,
    pub phrases: Vec<String>,
    pub about: Vec<String>,
    pub stats: Vec<Stat>,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillCategory>,
    pub contact: Vec<String>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        let strings = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let project = |title: &str, category: &str, description: &str| Project {
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
        };
        let skill = |name: &str, items: &[&str]| SkillCategory {
            name: name.to_string(),
            items: strings(items),
        };
        Self {
            name: "Alex Morgan".to_string(),
            greeting: "Hi, I'm".to_string(),
            phrases: strings(&[
                "Full-Stack Developer",
                "Mobile App Developer",
                "AI Enthusiast",
                "Problem Solver",
            ]),
            about: strings(&[
                "I build fast, friendly software for the web and for phones, and I like \
                 the parts in between: APIs, data pipelines and the tooling that holds them together.",
                "Lately I have been wiring language models into everyday products, \
                 with a bias for things that stay useful when the network does not.",
            ]),
            stats: vec![
                Stat {
                    label: "Projects shipped".to_string(),
                    count: 42,
                },
                Stat {
                    label: "Years coding".to_string(),
                    count: 7,
                },
                Stat {
                    label: "Cups of coffee".to_string(),
                    count: 1250,
                },
            ],
            projects: vec![
                project("Trailhead", "web", "Route planner with offline maps and elevation profiles."),
                project("Pocket Ledger", "mobile", "Shared budgets that sync across phones."),
                project("Sift", "ai", "Inbox triage that learns what you actually read."),
                project("Shopfront", "web", "Headless storefront with sub-second page loads."),
                project("Pulse", "mobile", "Habit tracker with a widget-first design."),
                project("Captioner", "ai", "On-device captions for recorded talks."),
            ],
            skills: vec![
                skill("Frontend", &["TypeScript", "React", "CSS"]),
                skill("Backend", &["Rust", "Node.js", "PostgreSQL"]),
                skill("Mobile", &["Kotlin", "Swift", "Flutter"]),
                skill("Tooling", &["Docker", "CI/CD", "Linux"]),
            ],
            contact: strings(&[
                "alex@example.dev",
                "github.com/alexmorgan",
                "Open to freelance and full-time roles.",
            ]),
        }
    }
}

impl PortfolioContent {
    /// Scroll behaviour wiring for this page.
    pub fn bindings(&self) -> PageBindings {
        let sections = SectionKind::ALL
            .iter()
            .map(|kind| SectionBinding {
                section: kind.element(),
                link: Some(ids::nav_link(kind.id())),
            })
            .collect();
        let nav_links = SectionKind::ALL
            .iter()
            .map(|kind| ids::nav_link(kind.id()))
            .collect();

        let mut reveal = Vec::new();
        for kind in &SectionKind::ALL[1..] {
            reveal.push(ids::section_title(kind.id()));
        }
        reveal.push(ids::element(ids::ABOUT_TEXT));
        reveal.push(ids::element(ids::ABOUT_STATS));
        reveal.extend((0..self.projects.len()).map(ids::project));
        reveal.extend((0..self.skills.len()).map(ids::skill));
        reveal.push(ids::element(ids::CONTACT_CONTENT));

        let stats = self
            .stats
            .iter()
            .enumerate()
            .map(|(i, stat)| StatBinding {
                id: ids::stat(i),
                target: stat.count,
            })
            .collect();

        PageBindings {
            navbar: Some(ids::element(ids::NAVBAR)),
            sections,
            nav_links,
            reveal,
            stats_container: Some(ids::element(ids::ABOUT_STATS)),
            stats,
            parallax: Some(ids::element(ids::HERO_VISUAL)),
        }
    }

    /// `all` first, then each category in order of first appearance.
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        let mut categories: Vec<&str> = vec![FILTER_ALL];
        for project in &self.projects {
            if !categories.contains(&project.category.as_str()) {
                categories.push(&project.category);
            }
        }
        categories
            .into_iter()
            .map(|c| FilterButton {
                id: ids::filter(c),
                filter: c.to_string(),
            })
            .collect()
    }

    pub fn project_cards(&self) -> Vec<ProjectCard> {
        self.projects
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectCard {
                id: ids::project(i),
                category: p.category.clone(),
            })
            .collect()
    }
}
