use std::collections::HashSet;

use thiserror::Error;

use crate::icons::Icon;

pub const OWNER: &str = "Ihtesham";
pub const BRAND_SUFFIX: &str = ".Dev";
pub const EMAIL: &str = "hello@ihtesham.dev";

/// Anchor ids of the page sections, in page order.
pub const SECTION_ANCHORS: [&str; 6] = [
    "home",
    "about",
    "skills",
    "portfolio",
    "testimonials",
    "contact",
];

/// Every testimonial shows the same rating.
pub const TESTIMONIAL_STARS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// The anchor id this link jumps to, if it is an in-page link.
    pub fn anchor(&self) -> Option<&'static str> {
        self.href.strip_prefix('#')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
    pub icon: &'static str,
}

impl Skill {
    pub fn fill_width(&self) -> String {
        format!("{}%", self.percentage)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub icon: Icon,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "About", href: "#about" },
    NavLink { name: "Skills", href: "#skills" },
    NavLink { name: "Portfolio", href: "#portfolio" },
    NavLink { name: "Testimonials", href: "#testimonials" },
    NavLink { name: "Contact", href: "#contact" },
];

pub const SKILLS: &[Skill] = &[
    Skill { name: "React & Next.js", percentage: 95, icon: "Layout" },
    Skill { name: "TypeScript", percentage: 90, icon: "Code2" },
    Skill { name: "Tailwind CSS", percentage: 98, icon: "Layers" },
    Skill { name: "Node.js & Express", percentage: 85, icon: "Server" },
    Skill { name: "PostgreSQL & MongoDB", percentage: 82, icon: "Database" },
    Skill { name: "System Architecture", percentage: 80, icon: "Cpu" },
    Skill { name: "Mobile First Design", percentage: 95, icon: "Smartphone" },
    Skill { name: "Git & CI/CD", percentage: 88, icon: "Github" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Nova SaaS Dashboard",
        description: "A high-performance analytics platform for subscription-based businesses, featuring real-time data visualization and multi-tenant architecture.",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800",
        tags: &["Next.js", "Chart.js", "Prisma"],
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 2,
        title: "Zenith Crypto Wallet",
        description: "A secure, non-custodial Web3 wallet interface with multi-chain support, real-time price tracking, and biometric authentication simulation.",
        image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0?auto=format&fit=crop&q=80&w=800",
        tags: &["TypeScript", "Ethers.js", "Tailwind"],
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 3,
        title: "Quantum Ecommerce",
        description: "Next-gen shopping experience with AI-powered recommendations, lightning-fast search, and seamless Stripe integration.",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800",
        tags: &["React", "Redux", "Stripe"],
        demo_url: "#",
        github_url: "#",
    },
    Project {
        id: 4,
        title: "Focus Productivity Tool",
        description: "A specialized workflow management system for remote teams, integrating Kanban boards with built-in video conferencing.",
        image: "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?auto=format&fit=crop&q=80&w=800",
        tags: &["React", "Socket.io", "Node.js"],
        demo_url: "#",
        github_url: "#",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        id: 1,
        name: "Alex Rivera",
        role: "CTO at CloudScale",
        content: "Ihtesham is a rare talent who understands both the technical architecture and the user experience. He built our MVP in record time.",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=crop&q=80&w=150",
    },
    Testimonial {
        id: 2,
        name: "Jessica Thorne",
        role: "Lead Designer",
        content: "The precision in his frontend implementation is incredible. Every pixel was exactly where it needed to be. A true professional.",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=150",
    },
    Testimonial {
        id: 3,
        name: "David Okafor",
        role: "Founder of Nexus AI",
        content: "Ihtesham's ability to solve complex problems with simple, elegant code saved our team weeks of development time.",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?auto=format&fit=crop&q=80&w=150",
    },
];

pub const SOCIALS: &[Social] = &[
    Social { name: "GitHub", icon: Icon::Github, href: "https://github.com" },
    Social { name: "LinkedIn", icon: Icon::Linkedin, href: "https://linkedin.com" },
    Social { name: "Twitter", icon: Icon::Twitter, href: "https://twitter.com" },
    Social { name: "Instagram", icon: Icon::Instagram, href: "https://instagram.com" },
];

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "5+ Years", label: "Professional Experience" },
    Stat { value: "40+ Clients", label: "Global Collaborations" },
];

pub const COMMITS_BADGE: Stat = Stat {
    value: "150+",
    label: "Commits This Week",
};

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel { icon: Icon::Mail, label: "Email Me Directly", value: EMAIL },
    ContactChannel { icon: Icon::Globe, label: "Work Zone", value: "GMT +0 (Remote Ready)" },
];

pub const HERO_PORTRAIT: &str =
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80&w=800";
pub const ABOUT_IMAGE: &str =
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&q=80&w=800";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("skill '{name}' has percentage {percentage}, expected 0..=100")]
    PercentageOutOfRange { name: &'static str, percentage: u8 },
    #[error("duplicate id {id} in {collection}")]
    DuplicateId { collection: &'static str, id: u32 },
    #[error("nav link '{name}' points at unknown anchor '{href}'")]
    UnknownAnchor { name: &'static str, href: &'static str },
    #[error("skill '{name}' uses unrecognised icon key '{key}'")]
    UnknownIcon { name: &'static str, key: &'static str },
}

/// Check the invariants the page relies on against the compiled-in content.
pub fn validate() -> Result<(), ContentError> {
    validate_content(NAV_LINKS, SKILLS, PROJECTS, TESTIMONIALS)
}

fn validate_content(
    nav_links: &[NavLink],
    skills: &[Skill],
    projects: &[Project],
    testimonials: &[Testimonial],
) -> Result<(), ContentError> {
    for skill in skills {
        if skill.percentage > 100 {
            return Err(ContentError::PercentageOutOfRange {
                name: skill.name,
                percentage: skill.percentage,
            });
        }
        if !Icon::is_known(skill.icon) {
            return Err(ContentError::UnknownIcon {
                name: skill.name,
                key: skill.icon,
            });
        }
    }
    unique_ids("projects", projects.iter().map(|p| p.id))?;
    unique_ids("testimonials", testimonials.iter().map(|t| t.id))?;
    for link in nav_links {
        match link.anchor() {
            Some(anchor) if SECTION_ANCHORS.contains(&anchor) => {}
            _ => {
                return Err(ContentError::UnknownAnchor {
                    name: link.name,
                    href: link.href,
                })
            }
        }
    }
    Ok(())
}

fn unique_ids(
    collection: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId { collection, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_is_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_skill_percentages_in_range() {
        for skill in SKILLS {
            assert!(skill.percentage <= 100, "{} out of range", skill.name);
            assert_eq!(skill.fill_width(), format!("{}%", skill.percentage));
        }
    }

    #[test]
    fn test_nav_links_cover_every_section_in_order() {
        let anchors = NAV_LINKS
            .iter()
            .map(|l| l.anchor().expect("nav links are in-page"))
            .collect::<Vec<_>>();
        assert_eq!(anchors, SECTION_ANCHORS);
    }

    #[test]
    fn test_percentage_over_100_is_rejected() {
        let skills = [Skill {
            name: "Overconfidence",
            percentage: 101,
            icon: "Cpu",
        }];
        assert_eq!(
            validate_content(NAV_LINKS, &skills, PROJECTS, TESTIMONIALS),
            Err(ContentError::PercentageOutOfRange {
                name: "Overconfidence",
                percentage: 101
            })
        );
    }

    #[test]
    fn test_duplicate_project_id_is_rejected() {
        let projects = [PROJECTS[0], PROJECTS[1], Project { id: 1, ..PROJECTS[2] }];
        assert_eq!(
            validate_content(NAV_LINKS, SKILLS, &projects, TESTIMONIALS),
            Err(ContentError::DuplicateId {
                collection: "projects",
                id: 1
            })
        );
    }

    #[test]
    fn test_duplicate_testimonial_id_is_rejected() {
        let testimonials = [TESTIMONIALS[2], TESTIMONIALS[2]];
        let err = validate_content(NAV_LINKS, SKILLS, PROJECTS, &testimonials).unwrap_err();
        assert_eq!(err.to_string(), "duplicate id 3 in testimonials");
    }

    #[test]
    fn test_dangling_anchor_is_rejected() {
        let links = [
            NAV_LINKS[0],
            NavLink {
                name: "Blog",
                href: "#blog",
            },
        ];
        assert_eq!(
            validate_content(&links, SKILLS, PROJECTS, TESTIMONIALS),
            Err(ContentError::UnknownAnchor {
                name: "Blog",
                href: "#blog"
            })
        );
        let external = [NavLink {
            name: "Elsewhere",
            href: "https://example.com",
        }];
        assert!(validate_content(&external, SKILLS, PROJECTS, TESTIMONIALS).is_err());
    }

    #[test]
    fn test_unknown_icon_key_is_reported() {
        let skills = [Skill {
            name: "Juggling",
            percentage: 10,
            icon: "Balls",
        }];
        assert_eq!(
            validate_content(NAV_LINKS, &skills, PROJECTS, TESTIMONIALS),
            Err(ContentError::UnknownIcon {
                name: "Juggling",
                key: "Balls"
            })
        );
    }
}
