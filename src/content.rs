use crate::reveal::RevealEffect;

pub const OWNER_NAME: &str = "Vainala. Vinay Kumar";
pub const OWNER_SHORT_NAME: &str = "V. Vinay Kumar";
pub const TAGLINE: &str = "Java | Spring Boot | React | AWS | Full Stack Developer";
pub const EMAIL: &str = "vainalavinayvvk098@gmail.com";

pub const ABOUT: &str = "Full-stack developer with a strong Java backend foundation and hands-on \
experience in React, Spring Boot, and AWS deployments. Passionate about building scalable \
systems and clean user interfaces.";

pub const CONTACT_INVITE: &str =
    "If you'd like to get in touch with me, feel free to email me directly!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: LinkKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// `mailto:` links stay in the current tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }

    pub fn glyph(&self) -> &'static str {
        match self.kind {
            LinkKind::GitHub => "GH",
            LinkKind::LinkedIn => "in",
            LinkKind::Email => "✉",
        }
    }
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: LinkKind::GitHub,
        label: "GitHub",
        href: "https://github.com/vainalavinay",
    },
    SocialLink {
        kind: LinkKind::LinkedIn,
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/vinay-kumar-vainala/",
    },
    SocialLink {
        kind: LinkKind::Email,
        label: "Email",
        href: "mailto:vainalavinayvvk098@gmail.com",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCard {
    pub title: &'static str,
    pub items: &'static str,
}

pub const SKILLS: &[SkillCard] = &[
    SkillCard {
        title: "Backend Development",
        items: "Java, Spring Boot, Hibernate, Microservices",
    },
    SkillCard {
        title: "Frontend Development",
        items: "React.js, Angular, HTML, CSS, JavaScript",
    },
    SkillCard {
        title: "Cloud & DevOps",
        items: "AWS (EC2, Amplify, EBS, CodePipeline), CI/CD",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCard {
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub repo_url: &'static str,
}

pub const PROJECTS: &[ProjectCard] = &[ProjectCard {
    title: "Banking Application",
    summary: "Full-stack banking app built with Spring Boot and React.",
    image: "/portfolio/assets/image_asset.jpg",
    image_alt: "Banking Application screenshot",
    repo_url: "https://github.com/vainalavinay/banking",
}];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResumeLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl ResumeLink {
    /// File name offered to the browser's download prompt.
    pub fn file_name(&self) -> &'static str {
        self.href.rsplit('/').next().unwrap_or(self.href)
    }
}

pub const RESUME: ResumeLink = ResumeLink {
    label: "Download My Resume",
    href: "/portfolio/assets/Vinay.pdf",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    About,
    Skills,
    Projects,
    Resume,
    Contact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionSpec {
    pub id: SectionId,
    pub anchor: &'static str,
    pub title: &'static str,
    pub effect: RevealEffect,
}

/// Body sections in render order.
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: SectionId::About,
        anchor: "about",
        title: "About Me",
        effect: RevealEffect::FadeLeft,
    },
    SectionSpec {
        id: SectionId::Skills,
        anchor: "skills",
        title: "Skills",
        effect: RevealEffect::FadeRight,
    },
    SectionSpec {
        id: SectionId::Projects,
        anchor: "projects",
        title: "Projects",
        effect: RevealEffect::ZoomIn,
    },
    SectionSpec {
        id: SectionId::Resume,
        anchor: "resume",
        title: "Resume",
        effect: RevealEffect::FadeUp,
    },
    SectionSpec {
        id: SectionId::Contact,
        anchor: "contact",
        title: "Contact",
        effect: RevealEffect::FadeUp,
    },
];

pub fn footer_notice(year: u32) -> String {
    format!("© {year} {OWNER_SHORT_NAME}. All rights reserved.")
}
