//! Fixed page content: tabs, presets, skills, projects and contact methods

use crate::types::{Accent, ImagePreset};
use egui_phosphor::regular as icons;

// ============================================================================
// HERO
// ============================================================================

pub const OWNER_FIRST_NAME: &str = "Shristi";
pub const OWNER_LAST_NAME: &str = "Khanna";
pub const HERO_BADGE: &str = "UI/UX Designer & Cloud Computing Enthusiast";
pub const HERO_SUBTITLE: &str = "B.Tech CSE graduate passionate about crafting intuitive user experiences \
and innovative design solutions that bridge technology and human needs.";

// ============================================================================
// ABOUT
// ============================================================================

pub const ABOUT_INTRO: &str = "I'm a passionate B.Tech Computer Science Engineering graduate with a \
specialization in Cloud Computing and Machine Learning, combined with 1-2 years of hands-on UI/UX design experience.";
pub const PROFILE_CAPTION: &str = "UI/UX Designer & B.Tech Graduate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AboutTab {
    Journey,
    Values,
    Facts,
    Philosophy,
}

impl AboutTab {
    pub const ALL: [AboutTab; 4] = [
        AboutTab::Journey,
        AboutTab::Values,
        AboutTab::Facts,
        AboutTab::Philosophy,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AboutTab::Journey => "Journey",
            AboutTab::Values => "Values",
            AboutTab::Facts => "Facts",
            AboutTab::Philosophy => "Philosophy",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AboutTab::Journey => "My Journey",
            AboutTab::Values => "What Drives Me",
            AboutTab::Facts => "Quick Facts",
            AboutTab::Philosophy => "Design Philosophy",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AboutTab::Journey => icons::ROCKET,
            AboutTab::Values => icons::HEART,
            AboutTab::Facts => icons::MEDAL,
            AboutTab::Philosophy => icons::LIGHTBULB,
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            AboutTab::Journey => Accent::Purple,
            AboutTab::Values => Accent::Blue,
            AboutTab::Facts => Accent::Green,
            AboutTab::Philosophy => Accent::Pink,
        }
    }
}

/// Image style per About tab, indexed like `AboutTab::ALL`
pub static ABOUT_PRESETS: [ImagePreset; 4] = [
    // Journey
    ImagePreset {
        scale: 1.0,
        tilt_deg: 0.0,
        brightness: 1.0,
        saturation: 1.1,
    },
    // Values
    ImagePreset {
        scale: 1.02,
        tilt_deg: 2.0,
        brightness: 1.05,
        saturation: 1.2,
    },
    // Facts
    ImagePreset {
        scale: 0.98,
        tilt_deg: -1.0,
        brightness: 0.95,
        saturation: 0.9,
    },
    // Philosophy
    ImagePreset {
        scale: 1.01,
        tilt_deg: 1.0,
        brightness: 1.02,
        saturation: 1.15,
    },
];

pub const JOURNEY_PARAGRAPHS: [&str; 2] = [
    "My journey in design began with a curiosity about how technology can be made more human-centered. \
Through my academic pursuits in CSE and practical experience in UI/UX design, I've developed a unique \
perspective that combines technical expertise with creative problem-solving.",
    "I have a curious mind that constantly explores new design trends, tools, and human-computer interaction \
patterns, and I'm an absolute learner who thrives on turning feedback into refined, impactful designs.",
];

pub struct ValueItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const VALUES: [ValueItem; 4] = [
    ValueItem {
        icon: icons::PALETTE,
        title: "Creative Problem Solving",
        description: "Finding innovative solutions through design thinking",
        accent: Accent::Purple,
    },
    ValueItem {
        icon: icons::USERS,
        title: "User-Centered Design",
        description: "Putting user needs at the heart of every design",
        accent: Accent::Blue,
    },
    ValueItem {
        icon: icons::CODE,
        title: "Technical Integration",
        description: "Bridging design and development seamlessly",
        accent: Accent::Green,
    },
    ValueItem {
        icon: icons::CLOUD,
        title: "Future-Forward Thinking",
        description: "Embracing emerging technologies and trends",
        accent: Accent::Pink,
    },
];

pub const FACTS: [(&str, &str); 5] = [
    ("Experience", "1-2 Years in UI/UX"),
    ("Education", "B.Tech CSE"),
    ("Specialization", "Cloud Computing & ML"),
    ("Projects Completed", "15+"),
    ("Internships", "4 Companies"),
];

pub const PHILOSOPHY_QUOTE: &str = "\"Good design is not just what looks good. It's what works well, feels \
intuitive, and creates a meaningful connection between the user and the product.\"";
pub const PHILOSOPHY_ATTRIBUTION: &str = "- My Design Mantra";

// ============================================================================
// SKILLS
// ============================================================================

pub const SKILLS_INTRO: &str = "A comprehensive toolkit combining design thinking, technical skills, and \
user-centered methodologies to create exceptional digital experiences.";

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub description: &'static str,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub description: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8, description: &'static str) -> Skill {
    Skill {
        name,
        level,
        description,
    }
}

pub static SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Design Tools",
        icon: icons::FIGMA_LOGO,
        accent: Accent::Purple,
        description: "Mastery of industry-standard design software",
        skills: &[
            skill("Figma", 95, "Advanced prototyping and collaboration"),
            skill("Sketch", 75, "UI/UX design and prototyping"),
            skill("WordPress", 85, "Website development and customization"),
        ],
    },
    SkillCategory {
        title: "Research & Testing",
        icon: icons::MAGNIFYING_GLASS,
        accent: Accent::Blue,
        description: "User research and validation methodologies",
        skills: &[
            skill("Usability Testing", 88, "User behavior analysis and feedback"),
            skill("A/B Testing", 82, "Performance optimization and validation"),
            skill("User Feedback Sessions", 90, "Qualitative user insights"),
        ],
    },
    SkillCategory {
        title: "Design Fundamentals",
        icon: icons::PALETTE,
        accent: Accent::Green,
        description: "Core principles of visual design",
        skills: &[
            skill("Typography", 85, "Type hierarchy and readability"),
            skill("Color Theory", 90, "Color psychology and accessibility"),
            skill("Layout Composition", 88, "Visual balance and hierarchy"),
        ],
    },
    SkillCategory {
        title: "Development Skills",
        icon: icons::CODE,
        accent: Accent::Pink,
        description: "Technical implementation capabilities",
        skills: &[
            skill("HTML", 85, "Semantic markup and accessibility"),
            skill("CSS", 88, "Responsive design and animations"),
            skill("Basic JavaScript", 75, "Interactive functionality"),
            skill("C", 80, "System programming fundamentals"),
            skill("Python", 82, "Data analysis and automation"),
        ],
    },
    SkillCategory {
        title: "Project Management",
        icon: icons::GEAR,
        accent: Accent::Indigo,
        description: "Agile methodologies and team collaboration",
        skills: &[
            skill("Agile", 85, "Iterative development approach"),
            skill("Scrum", 80, "Sprint planning and execution"),
            skill("Sprint Planning", 78, "Task breakdown and estimation"),
            skill("Stand-Ups", 85, "Daily progress tracking"),
            skill("Iterative Design", 88, "Continuous improvement process"),
        ],
    },
];

pub struct ProcessStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
}

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        icon: icons::MAGNIFYING_GLASS,
        title: "Research",
        description: "Understanding user needs and market requirements",
        accent: Accent::Purple,
    },
    ProcessStep {
        icon: icons::STACK,
        title: "Ideation",
        description: "Brainstorming and conceptualizing solutions",
        accent: Accent::Blue,
    },
    ProcessStep {
        icon: icons::DEVICE_MOBILE,
        title: "Prototyping",
        description: "Creating interactive mockups and wireframes",
        accent: Accent::Green,
    },
    ProcessStep {
        icon: icons::CHART_BAR,
        title: "Testing",
        description: "Validating designs through user feedback",
        accent: Accent::Pink,
    },
];

// ============================================================================
// PROJECTS
// ============================================================================

pub const PROJECTS_INTRO: &str = "A selection of product and web design work, from research and \
wireframes through to tested high-fidelity interfaces.";

pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
    pub problem_statement: &'static str,
    pub design_process: &'static [&'static str],
    pub key_features: &'static [&'static str],
    pub wireframes: &'static [&'static str],
    pub final_ui: &'static [&'static str],
    pub results: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        id: 1,
        title: "Wallpaper Download App Design",
        category: "Mobile App Design",
        description: "A fast, aesthetic, and intuitive wallpaper browsing experience",
        image: "/wallpaper.jpeg",
        tags: &["Mobile UI", "Visual Design", "User Experience"],
        accent: Accent::Pink,
        problem_statement: "Existing wallpaper apps are cluttered and slow, making it hard to discover and \
preview wallpapers. The goal was to design a fast, aesthetic, and intuitive browsing experience.",
        design_process: &[
            "Analyzed competitor apps and UX flaws",
            "Built wireframes for browsing, preview, and download flow",
            "Designed vibrant, minimal high-fidelity UI",
            "Conducted usability tests and refined previews and favorites",
        ],
        key_features: &[
            "Organized categories and search filters",
            "Wallpaper preview on lock/home screen",
            "Favorites for saving wallpapers",
            "One-tap download and apply",
        ],
        wireframes: &["/Wallpaper Wireframe.jpeg", "/Wallpaper Wireframe.jpeg"],
        final_ui: &["/wallpaper.jpeg", "/wallpaper.jpeg"],
        results: "40% faster browsing with improved navigation. Preview feature increased user \
satisfaction. Positive usability feedback: 'clean' and 'easy to use.'",
    },
    Project {
        id: 2,
        title: "Perfume Web Page Design",
        category: "E-commerce Web Design",
        description: "Luxurious, visually immersive web page to showcase perfumes and drive sales",
        image: "/Perfum.jpeg",
        tags: &["E-commerce", "Luxury Brand", "Web Design"],
        accent: Accent::Blue,
        problem_statement: "The client needed a luxurious, visually immersive web page to showcase \
perfumes and drive sales.",
        design_process: &[
            "Studied luxury e-commerce design patterns",
            "Wireframed core sections: hero, collections, scent profiles",
            "Applied elegant typography, high-quality visuals, and refined layouts",
            "Tested navigation clarity and brand storytelling",
        ],
        key_features: &[
            "Hero banner with brand storytelling",
            "High-quality product images",
            "Scent descriptions with emotional appeal",
            "Responsive design across devices",
        ],
        wireframes: &["/Perfum Wireframe.jpeg", "/Perfum Wireframe.jpeg"],
        final_ui: &["/Perfum.jpeg", "/Perfum.jpeg"],
        results: "35% increase in time spent on site during testing. Improved navigation boosted \
browsing flow. Well-received by the client for brand alignment.",
    },
    Project {
        id: 3,
        title: "Bus App & Payment Gateway Design",
        category: "Mobile App Design",
        description: "Seamless bus booking app with integrated payment solutions",
        image: "/Bus Booking .jpeg",
        tags: &["Transportation", "Payment Integration", "Mobile UX"],
        accent: Accent::Green,
        problem_statement: "Commuters face issues with slow booking, lack of live updates, and limited \
payments. The goal was to create a seamless bus booking app with integrated payment solutions.",
        design_process: &[
            "Researched commuter needs and pain points",
            "Sketched booking, seat selection, and payment flows",
            "Created intuitive UI with route highlights and clear CTAs",
            "Tested booking flow and payment steps with users",
        ],
        key_features: &[
            "Real-time bus tracking with live maps",
            "Interactive seat reservation",
            "Multiple payment options (cards, UPI, wallets)",
            "Digital QR tickets for contactless boarding",
        ],
        wireframes: &["/Bus Booking Wireframe .jpeg", "/Bus Booking Wireframe .jpeg"],
        final_ui: &["/Bus Booking .jpeg", "/Bus Booking .jpeg"],
        results: "Booking time reduced from 5 minutes to <2 minutes. Payment gateway improved checkout \
speed by 40%. Testers praised clarity and convenience.",
    },
    Project {
        id: 4,
        title: "Journal App UI/UX",
        category: "Mobile App Design",
        description: "Digital journaling tool with motivation and secure features",
        image: "/Journal.png",
        tags: &["Personal Productivity", "Security", "Wellness"],
        accent: Accent::Orange,
        problem_statement: "People struggle to journal regularly due to lack of motivation, inspiration, \
and secure digital tools.",
        design_process: &[
            "Explored user needs for daily reflection",
            "Designed wireframes for entries, mood tracking, and progress",
            "Developed calming, minimal UI for focus",
            "Tested reminders, cloud sync, and export features",
        ],
        key_features: &[
            "Guided daily prompts and quick entry option",
            "Mood tracking with emotion tags",
            "Calendar view and progress visualization",
            "Cloud sync with encryption and biometric login",
            "Export to PDF for sharing",
        ],
        wireframes: &["/Journal Wireframe.jpeg", "/Journal Wireframe.jpeg"],
        final_ui: &["/Journal.png", "/Journal.png"],
        results: "Journaling consistency increased by 60% among testers. Users found patterns via mood \
tracking. Lightweight UI made journaling a quick 2-minute habit. Positive reviews for simplicity and security.",
    },
];

// ============================================================================
// CONTACT
// ============================================================================

pub const CONTACT_INTRO: &str = "I'm always open to new opportunities, collaborations, and interesting \
conversations. Feel free to reach out!";

pub struct ContactMethod {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
    pub accent: Accent,
}

pub const CONTACT_METHODS: [ContactMethod; 4] = [
    ContactMethod {
        icon: icons::ENVELOPE,
        title: "Email",
        value: "shristi.khanna@example.com",
        link: Some("mailto:shristi.khanna@example.com"),
        accent: Accent::Purple,
    },
    ContactMethod {
        icon: icons::LINKEDIN_LOGO,
        title: "LinkedIn",
        value: "linkedin.com/in/shristi-khanna-3a1801250",
        link: Some("https://www.linkedin.com/in/shristi-khanna-3a1801250/"),
        accent: Accent::Blue,
    },
    ContactMethod {
        icon: icons::GITHUB_LOGO,
        title: "GitHub",
        value: "github.com/srisht-art",
        link: Some("https://github.com/srisht-art"),
        accent: Accent::Green,
    },
    ContactMethod {
        icon: icons::MAP_PIN,
        title: "Location",
        value: "Lucknow, India",
        link: None,
        accent: Accent::Pink,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_preset_per_about_tab() {
        assert_eq!(ABOUT_PRESETS.len(), AboutTab::ALL.len());
        assert_eq!(ABOUT_PRESETS[0].saturation, 1.1);
        assert_eq!(ABOUT_PRESETS[2].tilt_deg, -1.0);
    }

    #[test]
    fn skill_levels_are_percentages() {
        for category in &SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            assert!(category.skills.iter().all(|s| s.level <= 100));
        }
    }

    #[test]
    fn projects_reference_site_absolute_images() {
        let mut ids: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
        for project in &PROJECTS {
            assert!(project.image.starts_with('/'));
            assert!(project
                .wireframes
                .iter()
                .chain(project.final_ui)
                .all(|p| p.starts_with('/')));
        }
    }

    #[test]
    fn only_location_has_no_link() {
        let unlinked: Vec<&str> = CONTACT_METHODS
            .iter()
            .filter(|m| m.link.is_none())
            .map(|m| m.title)
            .collect();
        assert_eq!(unlinked, ["Location"]);
    }
}
