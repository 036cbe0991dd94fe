//! Portfolio content. Everything here is display text; nothing is computed.

use crate::types::SectionId;

/// A run of text, either plain or emphasised with the accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Plain(&'static str),
    Accent(&'static str),
}

impl Span {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Plain(s) | Self::Accent(s) => s,
        }
    }
}

/// Color family for cards and tags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Emerald,
    Amber,
    Blue,
}

/// Where a link goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Opened by the OS handler (browser, mail client)
    External(&'static str),
    /// Scrolls the page to a section
    Section(SectionId),
}

#[derive(Debug, Clone, Copy)]
pub struct Link {
    pub label: &'static str,
    pub target: LinkTarget,
}

pub struct Profile {
    pub initials: &'static str,
    pub name: &'static str,
    pub badge: &'static str,
    pub tagline: &'static str,
    pub summary: &'static [Span],
    pub email: &'static str,
    /// `mailto:` form of `email`
    pub mailto: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
    pub resume: &'static str,
    pub location: &'static str,
    pub phone: &'static str,
    pub footer: &'static str,
}

/// Headline number animated by a counter
pub struct Metric {
    pub prefix: &'static str,
    pub end: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

impl Metric {
    pub fn display(&self, value: u32) -> String {
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// About-section card
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
}

/// One bullet of a job: a bold lead-in followed by rich text
pub struct Achievement {
    pub lead: &'static str,
    pub body: &'static [Span],
}

pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub blurb: &'static str,
    pub period: &'static str,
    pub bullets: &'static [Achievement],
    pub award: Option<&'static str>,
}

pub struct Tag {
    pub label: &'static str,
    pub tone: Tone,
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub tone: Tone,
    pub tags: &'static [Tag],
}

pub struct SkillGroup {
    pub title: &'static str,
    pub skills: &'static [&'static str],
}

pub struct Award {
    pub title: &'static str,
    pub detail: &'static str,
    pub note: &'static str,
    pub tone: Tone,
}

pub struct ContactCard {
    pub title: &'static str,
    pub caption: &'static str,
    pub url: &'static str,
}

/// Titles are split so the second half can take the accent color
pub struct Heading {
    pub lead: &'static str,
    pub accent: &'static str,
}

pub const PROFILE: Profile = Profile {
    initials: "AR",
    name: "Aditya Rane",
    badge: "Available for Opportunities",
    tagline: "Data Analyst | AI Engineer | Business Strategist",
    summary: &[
        Span::Plain("Transforming data into "),
        Span::Accent("GBP 1M+ revenue impact"),
        Span::Plain(
            " through AI-driven solutions. Gold Medalist engineer with national hackathon wins, \
             patents, and a track record of delivering measurable business outcomes.",
        ),
    ],
    email: "rane5973@gmail.com",
    mailto: "mailto:rane5973@gmail.com",
    github: "https://github.com/xdityxrxne",
    linkedin: "https://www.linkedin.com/in/aditya-rane-802098140/",
    resume: "https://drive.google.com/file/d/your-resume-link",
    location: "Based in Bangalore, India",
    phone: "+91 98493 09833",
    footer: "Designed & Built by Aditya Rane | 2025",
};

pub const METRICS: &[Metric] = &[
    Metric { prefix: "GBP ", end: 1, suffix: "M+", label: "Revenue Generated" },
    Metric { prefix: "", end: 85, suffix: "%", label: "CTR Improvement" },
    Metric { prefix: "", end: 2, suffix: "", label: "Patents Secured" },
    Metric { prefix: "AIR ", end: 4, suffix: "", label: "National Hackathon" },
];

pub const ABOUT_HEADING: Heading = Heading { lead: "About ", accent: "Me" };

pub const ABOUT: &[&[Span]] = &[
    &[
        Span::Plain("I'm a "),
        Span::Accent("data professional"),
        Span::Plain(
            " who bridges the gap between analytics, engineering, and business strategy. My work \
             has directly contributed to GBP 1M+ in revenue through AI-powered solutions at MiQ \
             Digital, where I architect data pipelines and build intelligent systems that drive \
             measurable outcomes.",
        ),
    ],
    &[
        Span::Plain("With a "),
        Span::Accent("Gold Medal in B.Tech Electronics"),
        Span::Plain(
            " and recognition as a national-level hackathon winner (AIR 4, Rank 1), I combine deep \
             technical expertise with a relentless focus on impact. I've secured two patents, \
             published research in IEEE, and led a 50+ member robotics club.",
        ),
    ],
    &[
        Span::Plain("Currently pursuing advanced studies in "),
        Span::Accent("AI & MLOps at IIIT Bangalore"),
        Span::Plain(
            ", I'm passionate about building production-grade AI systems that solve real \
             problems. Whether it's optimizing programmatic advertising with weather-sync \
             algorithms or deploying real-time object detection pipelines, I thrive at the \
             intersection of data, AI, and business value.",
        ),
    ],
];

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Business Impact",
        body: "Every project I build is measured by its ROI. From GBP 1M revenue solutions to 85% \
               CTR improvements, I focus on metrics that matter.",
    },
    Highlight {
        title: "AI & Research",
        body: "Published in IEEE, trained models to 95% accuracy, and deployed real-time ML \
               systems. I bring research rigor to production environments.",
    },
    Highlight {
        title: "Full-Stack Data",
        body: "From ETL pipelines on AWS/Databricks to interactive dashboards in Tableau, I \
               engineer complete data solutions end-to-end.",
    },
];

pub const EXPERIENCE_HEADING: Heading = Heading { lead: "Professional ", accent: "Experience" };

pub const JOBS: &[Job] = &[
    Job {
        title: "Data Analyst",
        company: "MiQ Digital",
        blurb: "Global Programmatic Media Partner",
        period: "Jan 2024 - Present",
        bullets: &[
            Achievement {
                lead: "Revenue Impact:",
                body: &[
                    Span::Plain(
                        " Designed a Trust Measurement Solution combining GenAI and internal APIs \
                         to define new KPIs, directly generating ",
                    ),
                    Span::Accent("GBP 1M in incremental revenue"),
                ],
            },
            Achievement {
                lead: "Campaign Optimization:",
                body: &[
                    Span::Plain(
                        " Architected a weather-sync targeting algorithm using PySpark and \
                         weather APIs, increasing CTR by ",
                    ),
                    Span::Accent("85%"),
                ],
            },
            Achievement {
                lead: "Strategic Insights:",
                body: &[
                    Span::Plain(
                        " Partnered with cross-functional teams to deliver actionable insights \
                         across 10+ verticals, driving data-backed strategies for ",
                    ),
                    Span::Accent("GBP 5M+ in client investments"),
                ],
            },
            Achievement {
                lead: "Pipeline Automation:",
                body: &[
                    Span::Plain(
                        " Engineered automated ETL pipelines on Databricks and AWS, reducing \
                         manual reporting time by ",
                    ),
                    Span::Accent("15+ hours per week"),
                ],
            },
        ],
        award: Some("MiQ Impact Award (Q4 2024, Q2 2025)"),
    },
    Job {
        title: "AI Research Intern",
        company: "Symbiosis Centre for Applied AI",
        blurb: "Research & Development",
        period: "Jul 2023 - Dec 2023",
        bullets: &[
            Achievement {
                lead: "Model Optimization:",
                body: &[
                    Span::Plain(
                        " Processed large-scale multimodal datasets (RGB + IR) to train object \
                         detection models, achieving ",
                    ),
                    Span::Accent("95% accuracy"),
                ],
            },
            Achievement {
                lead: "Deployment:",
                body: &[
                    Span::Plain(
                        " Deployed real-time detection analytics using Streamlit, enabling live \
                         monitoring and reducing data processing time by ",
                    ),
                    Span::Accent("50%"),
                ],
            },
        ],
        award: None,
    },
];

pub const PROJECTS_HEADING: Heading = Heading { lead: "Featured ", accent: "Projects" };

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Market Intelligence Dashboard",
        description: "Built a predictive analytics tool using Python, Google APIs, and Prophet, \
                      delivering demand forecasting visualizations to support inventory planning \
                      decisions.",
        url: PROFILE.github,
        tone: Tone::Emerald,
        tags: &[
            Tag { label: "Python", tone: Tone::Emerald },
            Tag { label: "Prophet", tone: Tone::Emerald },
            Tag { label: "APIs", tone: Tone::Emerald },
        ],
    },
    Project {
        title: "Intruder Detection System",
        description: "Developed a real-time computer vision pipeline using YOLOv8 and Flask, \
                      implementing automated alerts for security anomalies with high accuracy.",
        url: PROFILE.github,
        tone: Tone::Emerald,
        tags: &[
            Tag { label: "YOLOv8", tone: Tone::Emerald },
            Tag { label: "Flask", tone: Tone::Emerald },
            Tag { label: "Computer Vision", tone: Tone::Emerald },
        ],
    },
    Project {
        title: "Autonomous Medical Robot",
        description: "Led a team of four to build a robot with SLAM-based navigation and face \
                      detection. Secured a patent for a novel pill-dispensing mechanism.",
        url: PROFILE.github,
        tone: Tone::Amber,
        tags: &[
            Tag { label: "Patented", tone: Tone::Amber },
            Tag { label: "SLAM", tone: Tone::Emerald },
            Tag { label: "Robotics", tone: Tone::Emerald },
        ],
    },
];

pub const ALL_PROJECTS: Link = Link {
    label: "View All Projects",
    target: LinkTarget::External(PROFILE.github),
};

pub const SKILLS_HEADING: Heading = Heading { lead: "Technical ", accent: "Arsenal" };

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Data Analysis",
        skills: &["Python", "Pandas", "NumPy", "SQL", "A/B Testing"],
    },
    SkillGroup {
        title: "BI & Visualization",
        skills: &["Tableau", "Power BI", "Excel", "Folium"],
    },
    SkillGroup {
        title: "Data Engineering",
        skills: &["AWS", "Databricks", "PySpark", "ETL", "MongoDB"],
    },
    SkillGroup {
        title: "Machine Learning",
        skills: &["Scikit-learn", "TensorFlow", "NLP", "YOLOv8"],
    },
    SkillGroup {
        title: "GenAI & LLMs",
        skills: &["Prompt Engineering", "LLM Integration", "Streamlit"],
    },
    SkillGroup {
        title: "Leadership",
        skills: &["Stakeholder Management", "Strategic Planning"],
    },
];

pub const ACHIEVEMENTS_HEADING: Heading = Heading { lead: "Recognition & ", accent: "Achievements" };

pub const AWARDS: &[Award] = &[
    Award {
        title: "Gold Medalist",
        detail: "B.Tech in Electronics & Telecommunication",
        note: "GPA: 8.9/10.0 | Symbiosis Institute of Technology (2024)",
        tone: Tone::Amber,
    },
    Award {
        title: "National Hackathon Winner",
        detail: "AIR 4 - National Computer Vision Hackathon (2023)",
        note: "Rank 1 - FlytBase Global Hackathon (2023)",
        tone: Tone::Emerald,
    },
    Award {
        title: "MiQ Impact Award",
        detail: "Awarded Twice (Q4 2024, Q2 2025)",
        note: "For exceptional contributions to business innovation",
        tone: Tone::Emerald,
    },
    Award {
        title: "Leadership",
        detail: "President - Robotics Club",
        note: "Led 50+ members at Symbiosis Institute of Technology",
        tone: Tone::Blue,
    },
];

pub const PATENTS: &[&str] = &[
    "Smart Waste Management System (2023)",
    "Autonomous Healthcare Robot (2023)",
];

pub const PUBLICATIONS: &[&str] = &[
    "IEEE Xplore: Automated Crop Health",
    "IET Smart Cities: Urban Infrastructure",
];

pub const CONTACT_HEADING: Heading = Heading { lead: "Let's ", accent: "Connect" };

pub const CONTACT_BLURB: &str = "I'm currently open to new opportunities in data analytics, AI \
                                 engineering, and business intelligence roles.";

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        caption: PROFILE.email,
        url: PROFILE.mailto,
    },
    ContactCard {
        title: "LinkedIn",
        caption: "Connect with me",
        url: PROFILE.linkedin,
    },
    ContactCard {
        title: "GitHub",
        caption: "View my code",
        url: PROFILE.github,
    },
];

/// Hero call-to-action buttons, primary first
pub const HERO_ACTIONS: &[Link] = &[
    Link {
        label: "Get in Touch",
        target: LinkTarget::External(PROFILE.mailto),
    },
    Link {
        label: "View Work",
        target: LinkTarget::Section(SectionId::Projects),
    },
];

pub const SOCIAL_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        target: LinkTarget::External(PROFILE.github),
    },
    Link {
        label: "LinkedIn",
        target: LinkTarget::External(PROFILE.linkedin),
    },
    Link {
        label: "Email",
        target: LinkTarget::External(PROFILE.mailto),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_display_wraps_value() {
        assert_eq!(METRICS[0].display(1), "GBP 1M+");
        assert_eq!(METRICS[1].display(42), "42%");
        assert_eq!(METRICS[3].display(4), "AIR 4");
    }

    #[test]
    fn test_links_follow_profile() {
        assert_eq!(PROFILE.mailto, format!("mailto:{}", PROFILE.email));
        assert_eq!(CONTACT_CARDS[0].url, PROFILE.mailto);
        assert_eq!(HERO_ACTIONS[0].target, LinkTarget::External(PROFILE.mailto));

        let externals: Vec<_> = SOCIAL_LINKS
            .iter()
            .filter_map(|l| match l.target {
                LinkTarget::External(url) => Some(url),
                LinkTarget::Section(_) => None,
            })
            .collect();
        assert_eq!(externals, [PROFILE.github, PROFILE.linkedin, PROFILE.mailto]);
        assert!(PROJECTS.iter().all(|p| p.url == PROFILE.github));
    }

    #[test]
    fn test_display_text_is_ascii() {
        // The bundled UI font only covers ASCII
        let profile = [PROFILE.name, PROFILE.badge, PROFILE.tagline, PROFILE.footer];
        assert!(profile.iter().all(|s| s.is_ascii()));
        assert!(PROFILE.summary.iter().all(|s| s.text().is_ascii()));
        assert!(METRICS.iter().all(|m| m.prefix.is_ascii() && m.suffix.is_ascii()));
        assert!(ABOUT.iter().flat_map(|p| p.iter()).all(|s| s.text().is_ascii()));
        for job in JOBS {
            assert!(job.period.is_ascii());
            assert!(job.bullets.iter().flat_map(|b| b.body).all(|s| s.text().is_ascii()));
        }
        for award in AWARDS {
            assert!(award.detail.is_ascii() && award.note.is_ascii());
        }
    }
}
