// Static copy for the landing and bio pages.

pub const SITE_OWNER: &str = "SHOTA'S";
pub const SITE_TITLE: &str = "UNIVERSE";
pub const FULL_NAME: &str = "Shota Matsumoto";
pub const CONTACT_EMAIL: &str = "sm11745@nyu.edu";
pub const PROFILE_PHOTO: &str = "assets/profile-photo.png";

pub const WELCOME_TEXT: &str = "Welcome to Shota's universe! Each constellation represents my personal or group projects, so explore them as you wish. Click and drag or swipe horizontally to explore my universe, and learn about each project and me as a pseron!";

pub const INSTRUCTIONS: [&str; 3] = [
    "Click and drag or Swipe horizontally to explore my universe.",
    "Each constellation represents my project.",
    "My universe loops infinitely, so keep exploring!",
];

pub const BIO_PARAGRAPHS: [&str; 2] = [
    "A very passionate web & mobile developer who loves creating to make impacts in the world. Supporting 200K students around the world on multiple social media platforms, I founded an Instagram-style mobile learning app, Brainlot, to innovate the way students learn. I also love creating VR simulations to comprehend and control human emotions as I did in the past internship and research experience.",
    "Having full-stack and data-analytics experience for 4 years, I now focus on building scalable, intelligent systems that combine AI, XR, and human-centered design to solve real-world problems.",
];

pub const CONTACT_BLURB: &str = "I\u{2019}m always open to discuss new ideas, projects, research and potential collaborations, so feel free to reach out to me. I can\u{2019}t wait to connect with you.";

#[derive(Clone, Copy, Debug)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

pub const SKILLS: [SkillGroup; 4] = [
    SkillGroup {
        category: "Frontend",
        items: &[
            "React",
            "TypeScript",
            "Next.js",
            "Tailwind CSS",
            "Framer Motion",
            "React Native",
            "Expo",
            "React Native Web",
        ],
    },
    SkillGroup {
        category: "Backend",
        items: &["Node.js", "Python", "PostgreSQL", "MongoDB", "GraphQL"],
    },
    SkillGroup {
        category: "Design",
        items: &["Figma", "Adobe XD", "UI/UX", "Prototyping", "Design Systems"],
    },
    SkillGroup {
        category: "Tools",
        items: &["Git", "Docker", "AWS", "Vercel", "CI/CD"],
    },
];

/// Brand or UI glyph drawn as an inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowLeft,
    Menu,
    ChevronLeft,
    ChevronRight,
    Close,
    Home,
    User,
    ExternalLink,
    Mail,
    Github,
    Linkedin,
    Instagram,
}

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Email",
        icon: Icon::Mail,
        href: "mailto:sm11745@nyu.edu",
    },
    SocialLink {
        name: "GitHub",
        icon: Icon::Github,
        href: "https://github.com/KimShota",
    },
    SocialLink {
        name: "LinkedIn",
        icon: Icon::Linkedin,
        href: "https://www.linkedin.com/in/shota-matsumoto-12405a22a/",
    },
    SocialLink {
        name: "Instagram",
        icon: Icon::Instagram,
        href: "https://www.instagram.com/shotacademic/",
    },
];

impl Icon {
    /// Filled glyphs use `fill="currentColor"`, the rest are stroked outlines.
    pub fn is_filled(self) -> bool {
        matches!(self, Icon::Github | Icon::Linkedin | Icon::Instagram)
    }

    /// SVG path data on a 24x24 view box.
    pub fn path(self) -> &'static str {
        match self {
            Icon::ArrowLeft => "M10 19l-7-7m0 0l7-7m-7 7h18",
            Icon::Menu => "M4 6h16M4 12h16M4 18h16",
            Icon::ChevronLeft => "M15 19l-7-7 7-7",
            Icon::ChevronRight => "M9 5l7 7-7 7",
            Icon::Close => "M6 18L18 6M6 6l12 12",
            Icon::Home => "M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6",
            Icon::User => "M16 7a4 4 0 11-8 0 4 4 0 018 0zM12 14a7 7 0 00-7 7h14a7 7 0 00-7-7z",
            Icon::ExternalLink => "M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14",
            Icon::Mail => "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            Icon::Github => "M12 0c-6.626 0-12 5.373-12 12 0 5.302 3.438 9.8 8.207 11.387.599.111.793-.261.793-.577v-2.234c-3.338.726-4.033-1.416-4.033-1.416-.546-1.387-1.333-1.756-1.333-1.756-1.089-.745.083-.729.083-.729 1.205.084 1.839 1.237 1.839 1.237 1.07 1.834 2.807 1.304 3.492.997.107-.775.418-1.305.762-1.604-2.665-.305-5.467-1.334-5.467-5.931 0-1.311.469-2.381 1.236-3.221-.124-.303-.535-1.524.117-3.176 0 0 1.008-.322 3.301 1.23.957-.266 1.983-.399 3.003-.404 1.02.005 2.047.138 3.006.404 2.291-1.552 3.297-1.23 3.297-1.23.653 1.653.242 2.874.118 3.176.77.84 1.235 1.911 1.235 3.221 0 4.609-2.807 5.624-5.479 5.921.43.372.823 1.102.823 2.222v3.293c0 .319.192.694.801.576 4.765-1.589 8.199-6.086 8.199-11.386 0-6.627-5.373-12-12-12z",
            Icon::Linkedin => "M20.447 20.452h-3.554v-5.569c0-1.328-.027-3.037-1.852-3.037-1.853 0-2.136 1.445-2.136 2.939v5.667H9.351V9h3.414v1.561h.046c.477-.9 1.637-1.85 3.37-1.85 3.601 0 4.267 2.37 4.267 5.455v6.286zM5.337 7.433c-1.144 0-2.063-.926-2.063-2.065 0-1.138.92-2.063 2.063-2.063 1.14 0 2.064.925 2.064 2.063 0 1.139-.925 2.065-2.064 2.065zm1.782 13.019H3.555V9h3.564v11.452zM22.225 0H1.771C.792 0 0 .774 0 1.729v20.542C0 23.227.792 24 1.771 24h20.451C23.2 24 24 23.227 24 22.271V1.729C24 .774 23.2 0 22.222 0h.003z",
            Icon::Instagram => "M12 2.163c3.204 0 3.584.012 4.85.07 3.252.148 4.771 1.691 4.919 4.919.058 1.265.069 1.645.069 4.849 0 3.205-.012 3.584-.069 4.849-.149 3.225-1.664 4.771-4.919 4.919-1.266.058-1.644.07-4.85.07-3.204 0-3.584-.012-4.849-.07-3.26-.149-4.771-1.699-4.919-4.92-.058-1.265-.07-1.644-.07-4.849 0-3.204.013-3.583.07-4.849.149-3.227 1.664-4.771 4.919-4.919 1.266-.057 1.645-.069 4.849-.069zm0-2.163c-3.259 0-3.667.014-4.947.072-4.358.2-6.78 2.618-6.98 6.98-.059 1.281-.073 1.689-.073 4.948 0 3.259.014 3.668.072 4.948.2 4.358 2.618 6.78 6.98 6.98 1.281.058 1.689.072 4.948.072 3.259 0 3.668-.014 4.948-.072 4.354-.2 6.782-2.618 6.979-6.98.059-1.28.073-1.689.073-4.948 0-3.259-.014-3.667-.072-4.947-.196-4.354-2.617-6.78-6.979-6.98-1.281-.059-1.69-.073-4.949-.073zm0 5.838c-3.403 0-6.162 2.759-6.162 6.162s2.759 6.163 6.162 6.163 6.162-2.759 6.162-6.163c0-3.403-2.759-6.162-6.162-6.162zm0 10.162c-2.209 0-4-1.79-4-4 0-2.209 1.791-4 4-4s4 1.791 4 4c0 2.21-1.791 4-4 4zm6.406-11.845c-.796 0-1.441.645-1.441 1.44s.645 1.44 1.441 1.44c.795 0 1.439-.645 1.439-1.44s-.644-1.44-1.439-1.44z",
        }
    }
}
