use http::Uri;
use thiserror::Error;

pub const OWNER_NAME: &str = "Mahathir Rojan";
pub const OWNER_EMAIL: &str = "mahathir.rojan@gmail.com";
pub const RESUME_URL: &str =
    "https://drive.google.com/file/d/1wVJeTSo9T4zEPVHbOiT08jE6nmi8Yfuu/view?usp=sharing";
pub const PROFILE_IMAGE: &str = "/images/IMG_7281.jpg";

/// Official MTA line colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineColor {
    /// A, C, E
    Blue,
    /// B, D, F, M
    Orange,
    /// N, Q, R, W
    Yellow,
    /// 1, 2, 3
    Red,
    /// 4, 5, 6
    Green,
    /// 7
    Purple,
    /// S (shuttle)
    Gray,
}

impl LineColor {
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#0039A6",
            Self::Orange => "#FF6319",
            Self::Yellow => "#FCCC0A",
            Self::Red => "#EE352E",
            Self::Green => "#00933C",
            Self::Purple => "#B933AD",
            Self::Gray => "#A7A9AC",
        }
    }

    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Blue => [0x00, 0x39, 0xA6],
            Self::Orange => [0xFF, 0x63, 0x19],
            Self::Yellow => [0xFC, 0xCC, 0x0A],
            Self::Red => [0xEE, 0x35, 0x2E],
            Self::Green => [0x00, 0x93, 0x3C],
            Self::Purple => [0xB9, 0x33, 0xAD],
            Self::Gray => [0xA7, 0xA9, 0xAC],
        }
    }
}

/// Letter color on a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeText {
    #[default]
    White,
    Black,
}

impl BadgeText {
    pub const fn class(self) -> &'static str {
        match self {
            Self::White => "text-white",
            Self::Black => "text-black",
        }
    }

    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::White => [0xFF, 0xFF, 0xFF],
            Self::Black => [0x00, 0x00, 0x00],
        }
    }
}

/// The in-page sections reachable through anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    About,
    Work,
    Skills,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [Self::About, Self::Work, Self::Skills];

    pub const fn anchor(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Work => "work",
            Self::Skills => "skills",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Self::About => "#about",
            Self::Work => "#work",
            Self::Skills => "#skills",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Work => "Work",
            Self::Skills => "Skills",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("link for {0} is not an absolute http(s) URL")]
    RelativeLink(&'static str),
    #[error("link for {0} could not be parsed")]
    InvalidLink(&'static str),
    #[error("badge for {0} must be a single uppercase letter or digit")]
    InvalidBadge(&'static str),
    #[error("skill category {0} has no skills")]
    EmptySkillList(&'static str),
    #[error("skill category {0} contains a blank skill")]
    BlankSkill(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: &'static str,
    /// Stack summary shown under the title.
    pub kind: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub badge: char,
    pub color: LineColor,
    pub badge_text: BadgeText,
}

impl ProjectRecord {
    pub fn validate(&self) -> Result<(), ContentError> {
        check_absolute_link(self.title, self.link)?;
        if !(self.badge.is_ascii_uppercase() || self.badge.is_ascii_digit()) {
            return Err(ContentError::InvalidBadge(self.title));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategoryRecord {
    pub title: &'static str,
    pub color: LineColor,
    pub skills: &'static [&'static str],
}

impl SkillCategoryRecord {
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.skills.is_empty() {
            return Err(ContentError::EmptySkillList(self.title));
        }
        if self.skills.iter().any(|s| s.trim().is_empty()) {
            return Err(ContentError::BlankSkill(self.title));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    pub label: &'static str,
    pub href: &'static str,
    /// Opens in a new browsing context.
    pub external: bool,
}

fn check_absolute_link(owner: &'static str, link: &str) -> Result<(), ContentError> {
    let uri = link
        .parse::<Uri>()
        .map_err(|_| ContentError::InvalidLink(owner))?;
    match (uri.scheme_str(), uri.host()) {
        (Some("http") | Some("https"), Some(host)) if !host.is_empty() => Ok(()),
        _ => Err(ContentError::RelativeLink(owner)),
    }
}

pub const PROJECTS: [ProjectRecord; 5] = [
    ProjectRecord {
        title: "Knicks Dashboard",
        kind: "Next.js • TypeScript • REST API",
        description: "A real-time Knicks dashboard that displays live scores, recent games, player stats, and box scores using ESPN’s public NBA API. Built with Next.js and TypeScript for fast loading and smooth UI updates.",
        link: "http://knicks-dashboard.vercel.app",
        badge: 'K',
        color: LineColor::Blue,
        badge_text: BadgeText::White,
    },
    ProjectRecord {
        title: "Hunter Helpdesk Kiosk",
        kind: "Next.js • PostgreSQL • TypeScript",
        description: "A digital check-in system used by 20,000+ students. Features real-time queue logic, admin dashboard, and kiosk interfaces to replace paper logs.",
        link: "https://hunter-helpdesk-kiosk.vercel.app",
        badge: 'H',
        color: LineColor::Blue,
        badge_text: BadgeText::White,
    },
    ProjectRecord {
        title: "MySubway",
        kind: "Swift • Python • GTFS",
        description: "Real-time NYC subway tracker integrating official GTFS feeds. Custom algorithms deliver accurate train times and service alerts faster than standard apps.",
        link: "https://github.com/mahathirrojan/MYSubway",
        badge: 'S',
        color: LineColor::Gray,
        badge_text: BadgeText::White,
    },
    ProjectRecord {
        title: "NBA Fantasy Analytics",
        kind: "React • Firebase • API",
        description: "Real-time performance stats and analytics dashboard helping fantasy users make data-driven lineup decisions in seconds.",
        link: "https://github.com/mahathirrojan/nba-fantasy-frontend",
        badge: 'N',
        color: LineColor::Yellow,
        badge_text: BadgeText::Black,
    },
    ProjectRecord {
        title: "Film Analyzer",
        kind: "Django • OpenAI • Next.js • PostgreSQL",
        description: "AI-powered analysis of movie trailers for emotion and pacing, comparing machine insights against audience reactions.",
        link: "https://github.com/aurnabdas/CapStone-Film-Analyzer",
        badge: 'F',
        color: LineColor::Orange,
        badge_text: BadgeText::White,
    },
];

pub const SKILL_CATEGORIES: [SkillCategoryRecord; 4] = [
    SkillCategoryRecord {
        title: "Frontend Engineering",
        color: LineColor::Blue,
        skills: &[
            "React",
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Framer Motion",
            "HTML5/CSS3",
        ],
    },
    SkillCategoryRecord {
        title: "Backend Development",
        color: LineColor::Red,
        skills: &[
            "Node.js",
            "Express",
            "Python",
            "FastAPI",
            "REST APIs",
            "GraphQL",
        ],
    },
    SkillCategoryRecord {
        title: "Database & Cloud",
        color: LineColor::Orange,
        skills: &["PostgreSQL", "Firebase", "Supabase", "AWS (Basic)", "Vercel"],
    },
    SkillCategoryRecord {
        title: "Tools & Environment",
        color: LineColor::Green,
        skills: &[
            "Git / GitHub",
            "Linux / Unix",
            "ServiceNow",
            "Postman",
            "Figma",
        ],
    },
];

pub const CONTACT_LINKS: [ContactLink; 3] = [
    ContactLink {
        kind: ContactKind::Email,
        label: OWNER_EMAIL,
        href: "mailto:mahathir.rojan@gmail.com",
        external: false,
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        label: "LinkedIn",
        href: "https://linkedin.com/in/m-rojan",
        external: true,
    },
    ContactLink {
        kind: ContactKind::GitHub,
        label: "GitHub",
        href: "https://github.com/mahathirrojan",
        external: true,
    },
];

/// Checks every literal record on the page.
pub fn validate_all() -> Result<(), ContentError> {
    PROJECTS.iter().try_for_each(ProjectRecord::validate)?;
    SKILL_CATEGORIES
        .iter()
        .try_for_each(SkillCategoryRecord::validate)?;
    check_absolute_link("Resume", RESUME_URL)?;
    CONTACT_LINKS
        .iter()
        .filter(|c| c.external)
        .try_for_each(|c| check_absolute_link(c.label, c.href))
}

/// Footer copyright text for the given calendar year.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {OWNER_NAME}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_content_validates() {
        assert_eq!(validate_all(), Ok(()));
    }

    #[test]
    fn test_transit_colors_are_exact() {
        assert_eq!(LineColor::Blue.hex(), "#0039A6");
        assert_eq!(LineColor::Orange.hex(), "#FF6319");
        assert_eq!(LineColor::Yellow.hex(), "#FCCC0A");
        assert_eq!(LineColor::Red.hex(), "#EE352E");
        assert_eq!(LineColor::Green.hex(), "#00933C");
        assert_eq!(LineColor::Purple.hex(), "#B933AD");
        assert_eq!(LineColor::Gray.hex(), "#A7A9AC");

        // rgb() must agree with hex() for every color
        let all = [
            LineColor::Blue,
            LineColor::Orange,
            LineColor::Yellow,
            LineColor::Red,
            LineColor::Green,
            LineColor::Purple,
            LineColor::Gray,
        ];
        for color in all {
            let [r, g, b] = color.rgb();
            assert_eq!(format!("#{r:02X}{g:02X}{b:02X}"), color.hex());
        }
    }

    #[test]
    fn test_project_order_and_links() {
        let titles = PROJECTS.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Knicks Dashboard",
                "Hunter Helpdesk Kiosk",
                "MySubway",
                "NBA Fantasy Analytics",
                "Film Analyzer",
            ]
        );
        assert_eq!(PROJECTS[0].link, "http://knicks-dashboard.vercel.app");
        assert_eq!(
            PROJECTS[4].link,
            "https://github.com/aurnabdas/CapStone-Film-Analyzer"
        );
        // only the yellow badge uses dark text
        for p in PROJECTS.iter() {
            let expected = if p.color == LineColor::Yellow {
                BadgeText::Black
            } else {
                BadgeText::White
            };
            assert_eq!(p.badge_text, expected, "{}", p.title);
        }
    }

    #[test]
    fn test_skill_lists_are_unique_and_ordered() {
        let titles = SKILL_CATEGORIES.iter().map(|s| s.title).collect::<Vec<_>>();
        assert_eq!(
            titles,
            vec![
                "Frontend Engineering",
                "Backend Development",
                "Database & Cloud",
                "Tools & Environment",
            ]
        );
        for category in SKILL_CATEGORIES.iter() {
            let unique = category.skills.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), category.skills.len(), "{}", category.title);
        }
        assert_eq!(SKILL_CATEGORIES[0].skills[0], "React");
        assert_eq!(SKILL_CATEGORIES[3].skills.last(), Some(&"Figma"));
    }

    #[test]
    fn test_invalid_records_are_rejected() {
        let relative = ProjectRecord {
            link: "/projects/local",
            ..PROJECTS[0]
        };
        assert_eq!(
            relative.validate(),
            Err(ContentError::RelativeLink("Knicks Dashboard"))
        );

        let garbage = ProjectRecord {
            link: "not a url",
            ..PROJECTS[0]
        };
        assert_eq!(
            garbage.validate(),
            Err(ContentError::InvalidLink("Knicks Dashboard"))
        );

        let ftp = ProjectRecord {
            link: "ftp://example.com/file",
            ..PROJECTS[1]
        };
        assert!(matches!(ftp.validate(), Err(ContentError::RelativeLink(_))));

        let lowercase = ProjectRecord {
            badge: 'k',
            ..PROJECTS[0]
        };
        assert_eq!(
            lowercase.validate(),
            Err(ContentError::InvalidBadge("Knicks Dashboard"))
        );

        let empty = SkillCategoryRecord {
            skills: &[],
            ..SKILL_CATEGORIES[0]
        };
        assert_eq!(
            empty.validate(),
            Err(ContentError::EmptySkillList("Frontend Engineering"))
        );

        let blank = SkillCategoryRecord {
            skills: &["Rust", "  "],
            ..SKILL_CATEGORIES[1]
        };
        assert_eq!(
            blank.validate(),
            Err(ContentError::BlankSkill("Backend Development"))
        );
    }

    #[test]
    fn test_section_anchors() {
        for section in SectionId::ALL {
            assert_eq!(section.href(), format!("#{}", section.anchor()));
            assert_eq!(section.anchor(), section.label().to_lowercase());
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright_line(2025), "© 2025 Mahathir Rojan.");
    }
}
