//! Static page content.
//!
//! The project table is loaded once at startup and never mutated. Skills and
//! stats feed the reveal animator (skill bars carry a target level, stats a
//! target count).

use crate::types::{ProjectCategory, ProjectFilter, ProjectId, ProjectRecord};

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: ProjectId(1),
        title: "Modern E-Commerce Store",
        description: "A fully functional e-commerce platform built with modern web technologies. \
            Features include product catalog with filtering and search, user authentication, \
            shopping cart with real-time updates, secure checkout process, and admin dashboard \
            for inventory management. The project demonstrates full-stack development skills and \
            understanding of e-commerce business logic.",
        technologies: &["HTML", "CSS", "JS", "JSON"],
        features: &[
            "User authentication & authorization system",
            "Product catalog with search and filtering",
            "Shopping cart with real-time updates",
            "Secure payment processing integration",
            "Order tracking and history",
            "Admin dashboard for product management",
            "Responsive design for all devices",
            "Product reviews and ratings system",
        ],
        live_url: "https://e-commerce-1-lac.vercel.app/",
        category: ProjectCategory::Web,
    },
    ProjectRecord {
        id: ProjectId(2),
        title: "Mabini Tourism Website",
        description: "A tourism website dedicated to promoting the beautiful coastal town of \
            Mabini, Batangas. This project showcases local attractions, diving spots, \
            accommodations, and travel information. Features interactive maps, image galleries, \
            and information about local culture and activities. The website aims to boost local \
            tourism and provide valuable information for travelers.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Google Maps API"],
        features: &[
            "Interactive Google Maps integration",
            "Photo gallery of tourist attractions",
            "Diving spot information and locations",
            "Accommodation and restaurant listings",
            "Travel tips and local information",
            "Responsive design for mobile users",
            "Contact form for inquiries",
            "Local events calendar",
        ],
        live_url: "https://mabini-tourism-nine.vercel.app/",
        category: ProjectCategory::Web,
    },
    ProjectRecord {
        id: ProjectId(3),
        title: "Interactive Puzzle Game",
        description: "A fun and challenging puzzle game built with vanilla JavaScript. Features \
            multiple difficulty levels, score tracking, timer, and responsive design. The game \
            includes smooth animations, sound effects, and intuitive controls. This project \
            demonstrates game development skills, algorithm implementation, and user experience \
            design.",
        technologies: &["JavaScript", "HTML", "CSS"],
        features: &[
            "Multiple difficulty levels (Easy, Medium, Hard)",
            "Score tracking and high score system",
            "Timer with countdown feature",
            "Smooth animations and transitions",
            "Sound effects and background music",
            "Responsive design for all devices",
            "Game instructions and tutorials",
            "Pause and resume functionality",
        ],
        live_url: "https://puzzle-game-ten-tawny.vercel.app/",
        category: ProjectCategory::Game,
    },
];

/// A skill card with an animated progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Target bar width as a percentage
    pub level: &'static str,
}

/// A headline number in the about section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub label: &'static str,
    /// Counter target; `None` falls back to the rendered text
    pub target: Option<&'static str>,
    pub text: &'static str,
}

const SKILLS: &[Skill] = &[
    Skill { name: "HTML5", level: "95" },
    Skill { name: "CSS3", level: "90" },
    Skill { name: "JavaScript", level: "85" },
    Skill { name: "Responsive Design", level: "90" },
    Skill { name: "Git & GitHub", level: "75" },
    Skill { name: "UI/UX Design", level: "70" },
];

const STATS: &[Stat] = &[
    Stat { label: "Projects Completed", target: Some("15"), text: "0" },
    Stat { label: "Technologies", target: Some("12"), text: "0" },
    Stat { label: "Hours of Coding", target: Some("1200"), text: "0" },
    Stat { label: "Cups of Coffee", target: None, text: "120" },
];

/// Read-only lookup over the page's static content.
#[derive(Debug, Clone, Copy)]
pub struct ContentMap {
    projects: &'static [ProjectRecord],
}

impl Default for ContentMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentMap {
    /// The built-in project table
    pub const fn new() -> Self {
        Self { projects: PROJECTS }
    }

    /// Look up a project by id
    pub fn get(&self, id: ProjectId) -> Option<&'static ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// All projects in display order
    pub fn projects(&self) -> &'static [ProjectRecord] {
        self.projects
    }

    /// Projects visible under `filter`, in display order
    pub fn filtered(&self, filter: ProjectFilter) -> impl Iterator<Item = &'static ProjectRecord> {
        self.projects
            .iter()
            .filter(move |p| filter.matches(p.category))
    }

    /// Filter buttons in bar order
    pub fn filters(&self) -> [ProjectFilter; 3] {
        [
            ProjectFilter::All,
            ProjectFilter::Only(ProjectCategory::Web),
            ProjectFilter::Only(ProjectCategory::Game),
        ]
    }

    pub fn skills(&self) -> &'static [Skill] {
        SKILLS
    }

    pub fn stats(&self) -> &'static [Stat] {
        STATS
    }
}
