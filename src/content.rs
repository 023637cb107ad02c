//! Static portfolio content. Read-only; the state machine never looks at it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Green,
    Blue,
    Purple,
    Yellow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Email,
    Phone,
    Location,
    Github,
    Linkedin,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactLink {
    pub kind: LinkKind,
    pub text: &'static str,
    pub url: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub availability: &'static str,
    pub build: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub period: &'static str,
    pub team: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
    pub tech: &'static [&'static str],
    pub github: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct RatedSkill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub title: &'static str,
    pub accent: Accent,
    pub skills: &'static [RatedSkill],
}

#[derive(Debug, Clone, Copy)]
pub struct SkillTags {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub location: Option<&'static str>,
}

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
}

// ── Data ──────────────────────────────────────────────────────────────────────

pub const PROFILE: Profile = Profile {
    name: "Thayaparan Senthooran",
    role: "FRONTEND DEVELOPER",
    bio: "Full Stack Developer pursuing a Master's in IT Development, with expertise in both \
          frontend and backend technologies. Currently seeking an internship opportunity \
          starting September 2025.",
    email: "senthooran.thayaparan.pro@gmail.com",
    location: "Noisy-le-Grand",
    availability: "Available for internship",
    build: "A-013 / V1.0.0",
};

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink { kind: LinkKind::Email, text: "senthooran.thayaparan.pro@gmail.com", url: None },
    ContactLink { kind: LinkKind::Phone, text: "07 82 18 26 57", url: None },
    ContactLink { kind: LinkKind::Location, text: "Noisy-le-Grand", url: None },
    ContactLink {
        kind: LinkKind::Github,
        text: "github.com/xsentoo",
        url: Some("https://github.com/xsentoo"),
    },
    ContactLink {
        kind: LinkKind::Linkedin,
        text: "senthooran-thayaparan",
        url: Some("https://linkedin.com/in/senthooran-thayaparan"),
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "FitnessAnim",
        period: "October 2024 - 2025",
        team: "Team of 4",
        summary: "A gamified mobile application for fitness training, making workouts more \
                  interactive and motivating.",
        highlights: &[
            "Gamified mobile app for fitness training",
            "Performance tracking system with personalized challenges",
        ],
        tech: &["React Native", "Node.js", "Express.js", "Android Studio"],
        github: Some("https://github.com/xsentoo/fitnessanim"),
    },
    Project {
        title: "VOTE MY MUSIC",
        period: "2024 - 2025",
        team: "Personal Project",
        summary: "Enables users to vote for their favorite music and add their own songs for \
                  community feedback.",
        highlights: &[
            "Platform for users to vote on favorite music",
            "Feature to add and receive feedback on songs",
        ],
        tech: &["C#", "Figma"],
        github: Some("https://github.com/xsentoo/vote-my-music"),
    },
    Project {
        title: "WEELSONG6",
        period: "August 2024 - 2026",
        team: "Team of 3",
        summary: "A web platform for Route 66 enthusiasts with a budget calculator, a social \
                  network for photos and videos, and an interactive map.",
        highlights: &[
            "Web platform for Route 66 enthusiasts",
            "Budget calculator and social network features",
            "Interactive map showing points of interest",
        ],
        tech: &["React", "Node.js", "PostgreSQL", "Google Maps API", "OpenWeatherMap"],
        github: Some("https://github.com/xsentoo/weelsong6"),
    },
];

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend",
        accent: Accent::Green,
        skills: &[
            RatedSkill { name: "HTML/CSS/React/Angular", level: 90 },
            RatedSkill { name: "JavaScript/TypeScript", level: 85 },
            RatedSkill { name: "Responsive Design", level: 85 },
            RatedSkill { name: "UI/UX Design", level: 80 },
        ],
    },
    SkillGroup {
        title: "Backend",
        accent: Accent::Blue,
        skills: &[
            RatedSkill { name: "Node.js/Express", level: 85 },
            RatedSkill { name: "Java/PHP/C#/Python", level: 80 },
            RatedSkill { name: "API REST", level: 85 },
            RatedSkill { name: "Firebase", level: 75 },
        ],
    },
    SkillGroup {
        title: "Database & Tools",
        accent: Accent::Purple,
        skills: &[
            RatedSkill { name: "MySQL/PostgreSQL", level: 85 },
            RatedSkill { name: "NoSQL", level: 75 },
            RatedSkill { name: "Git/Docker", level: 80 },
            RatedSkill { name: "Microsoft Azure", level: 70 },
        ],
    },
    SkillGroup {
        title: "Soft Skills",
        accent: Accent::Yellow,
        skills: &[
            RatedSkill { name: "Agile Methodology", level: 85 },
            RatedSkill { name: "Code Review", level: 80 },
            RatedSkill { name: "Documentation", level: 85 },
            RatedSkill { name: "Team Collaboration", level: 90 },
        ],
    },
];

pub const SKILL_TAGS: &[SkillTags] = &[
    SkillTags {
        title: "Languages",
        tags: &["Java", "PHP", "C#", "Python", "JavaScript", "HTML", "CSS"],
    },
    SkillTags { title: "Frontend", tags: &["HTML", "CSS", "React", "Angular"] },
    SkillTags {
        title: "Backend",
        tags: &["Node.js", "Java", "PHP", "C#", "Python", "Express", "API REST"],
    },
    SkillTags { title: "Databases", tags: &["MySQL", "PostgreSQL", "NoSQL"] },
    SkillTags { title: "Tools", tags: &["Linux", "Git", "Docker", "Microsoft Azure"] },
    SkillTags { title: "Methods", tags: &["Agile", "Code Review", "Documentation"] },
    SkillTags { title: "Soft Skills", tags: &["Autonomy", "Problem Solving", "Team Work"] },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Master Dev Manager Full Stack",
        school: "EFREI",
        period: "2025 - 2027",
        location: None,
    },
    Education {
        degree: "Bachelor 3 Développement Informatique",
        school: "YNOV PARIS",
        period: "2024 - 2025",
        location: None,
    },
    Education {
        degree: "BTS SIO SLAM",
        school: "LYCÉE RENÉ DESCARTES",
        period: "2022 - 2024",
        location: Some("Champs Sur Marne"),
    },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        company: "Film by Janar",
        role: "Freelance",
        period: "January 2025 - Present",
        summary: "Developed a platform for users to discover company creations, book \
                  appointments, and receive automated notifications.",
        details: &[
            "Development of a platform for users to discover company creations",
            "Implementation of automated notification system for reservations",
            "Technologies: HTML, CSS, JavaScript (React), Node.js (Express), Firebase",
        ],
    },
    Experience {
        company: "ÖPM",
        role: "Athis-Mons",
        period: "January 2024 - March 2024",
        summary: "Designed and developed an e-commerce website using HTML, CSS, JavaScript and \
                  PHP.",
        details: &[
            "Design and development of an e-commerce website",
            "Technologies: HTML, CSS, JavaScript and PHP",
            "Created user-friendly interface to enhance customer experience",
            "Development of key features like shopping cart and course list download",
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for group in SKILL_GROUPS {
            for skill in group.skills {
                assert!(skill.level <= 100, "{} out of range", skill.name);
            }
        }
    }

    #[test]
    fn linked_contacts_carry_urls() {
        for link in CONTACT_LINKS {
            let linked = matches!(link.kind, LinkKind::Github | LinkKind::Linkedin);
            assert_eq!(link.url.is_some(), linked);
        }
    }
}
