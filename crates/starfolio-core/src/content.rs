//! Site content: profile, skills, social links and projects.
//!
//! [`SiteContent::default`] carries the built-in portfolio. A JSON file with
//! the same shape can replace any top-level section; sections missing from the
//! file keep their built-in values.

use std::collections::HashSet;
use std::path::Path;

use pulldown_cmark::{html, Options, Parser};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{SiteError, SiteResult};

/// Technology icon shown on skill and project badges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechIcon {
    React,
    NextJs,
    Fastify,
    MongoDb,
    TailwindCss,
    TypeScript,
    NodeJs,
    GraphQl,
}

impl TechIcon {
    /// Short monogram drawn inside the badge
    pub fn glyph(&self) -> &'static str {
        match self {
            TechIcon::React => "⚛",
            TechIcon::NextJs => "N",
            TechIcon::Fastify => "F",
            TechIcon::MongoDb => "M",
            TechIcon::TailwindCss => "~",
            TechIcon::TypeScript => "TS",
            TechIcon::NodeJs => "⬢",
            TechIcon::GraphQl => "◈",
        }
    }

    /// Brand accent CSS class
    pub fn class(&self) -> &'static str {
        match self {
            TechIcon::React => "tech-react",
            TechIcon::NextJs => "tech-nextjs",
            TechIcon::Fastify => "tech-fastify",
            TechIcon::MongoDb => "tech-mongodb",
            TechIcon::TailwindCss => "tech-tailwind",
            TechIcon::TypeScript => "tech-typescript",
            TechIcon::NodeJs => "tech-nodejs",
            TechIcon::GraphQl => "tech-graphql",
        }
    }
}

/// A skill badge on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub icon: TechIcon,
    pub url: String,
}

impl Skill {
    pub fn new(name: &str, icon: TechIcon, url: &str) -> Self {
        Self {
            name: name.to_string(),
            icon,
            url: url.to_string(),
        }
    }

    pub fn tooltip(&self) -> String {
        format!("Click to learn more about {}", self.name)
    }
}

/// Social network of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    GitHub,
    Twitter,
    Email,
    Discord,
}

impl SocialKind {
    pub fn glyph(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "GH",
            SocialKind::Twitter => "𝕏",
            SocialKind::Email => "✉",
            SocialKind::Discord => "DC",
        }
    }

    /// Brand background CSS class
    pub fn class(&self) -> &'static str {
        match self {
            SocialKind::GitHub => "social-github",
            SocialKind::Twitter => "social-twitter",
            SocialKind::Email => "social-email",
            SocialKind::Discord => "social-discord",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    pub tooltip: String,
    /// Button text; icon-only when absent
    #[serde(default)]
    pub label: Option<String>,
}

impl SocialLink {
    pub fn new(kind: SocialKind, href: &str, tooltip: &str) -> Self {
        Self {
            kind,
            href: href.to_string(),
            tooltip: tooltip.to_string(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }
}

/// The profile card on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar_url: String,
    /// Initials shown while the avatar is loading or missing
    pub avatar_fallback: String,
    /// Phrases cycled by the typewriter under the name
    pub taglines: Vec<String>,
    pub about: String,
    pub experience: Vec<String>,
    pub education: String,
    pub source_url: String,
    pub source_tooltip: String,
    /// Prominent call-to-action next to the social buttons
    pub contact: SocialLink,
}

/// A card on the projects page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<Technology>,
    pub live_url: String,
    /// Markdown shown in the details dialog
    pub details: String,
}

impl Project {
    pub fn details_html(&self) -> String {
        render_markdown(&self.details)
    }
}

/// Technology badge on a project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    pub icon: TechIcon,
}

impl Technology {
    pub fn new(name: &str, icon: TechIcon) -> Self {
        Self {
            name: name.to_string(),
            icon,
        }
    }
}

/// Everything the two pages render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub socials: Vec<SocialLink>,
    pub projects: Vec<Project>,
}

impl SiteContent {
    /// Read content from a JSON file and validate it.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let content: SiteContent = serde_json::from_str(&raw)?;
        content.validate()?;
        debug!(
            path = %path.display(),
            projects = content.projects.len(),
            "Loaded site content"
        );
        Ok(content)
    }

    pub fn validate(&self) -> SiteResult<()> {
        if self.profile.name.trim().is_empty() {
            return Err(SiteError::InvalidContent("profile name is empty".to_string()));
        }
        if self.profile.taglines.is_empty() {
            return Err(SiteError::InvalidContent(
                "profile needs at least one tagline".to_string(),
            ));
        }

        let mut titles = HashSet::new();
        for project in &self.projects {
            if !titles.insert(project.title.as_str()) {
                return Err(SiteError::InvalidContent(format!(
                    "duplicate project title: {}",
                    project.title
                )));
            }
        }
        Ok(())
    }

    pub fn project(&self, title: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.title == title)
    }
}

/// Render Markdown to HTML with tables and strikethrough enabled.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Spoody".to_string(),
            avatar_url: "https://cdn.discordapp.com/avatars/1260750149446013090/70d2ff6237503b4f171731a2db99f2fa.webp?size=128".to_string(),
            avatar_fallback: "SP".to_string(),
            taglines: vec![
                "Web Developer".to_string(),
                "Full Stack Engineer".to_string(),
                "UI/UX Enthusiast".to_string(),
            ],
            about: "I'm a passionate web developer focused on creating fast, efficient, and \
                    visually engaging applications. With expertise in both frontend and backend \
                    technologies, I deliver seamless user experiences. My approach emphasizes \
                    modularity and scalability, using Next.js, Fastify, and MongoDB to craft \
                    responsive, high-performance platforms."
                .to_string(),
            experience: vec![
                "CEO at Atlas Reselling (2024-Present)".to_string(),
                "CEO at Vynx Solutions (2024-Present)".to_string(),
                "CEO at Astoris Chat (2024-Present)".to_string(),
            ],
            education: "Specialized Vocational Training in Information Technology and Software \
                        Development (2024-Present)"
                .to_string(),
            source_url: "https://github.com/spooderman11/crispy-happiness".to_string(),
            source_tooltip: "View the source code on GitHub".to_string(),
            contact: SocialLink::new(
                SocialKind::Discord,
                "https://discord.com/users/1260750149446013090",
                "Connect with me on Discord",
            )
            .with_label("Contact on Discord"),
        }
    }
}

fn default_skills() -> Vec<Skill> {
    vec![
        Skill::new("React", TechIcon::React, "https://reactjs.org/"),
        Skill::new("Next.js", TechIcon::NextJs, "https://nextjs.org/"),
        Skill::new("Fastify", TechIcon::Fastify, "https://www.fastify.io/"),
        Skill::new("MongoDB", TechIcon::MongoDb, "https://www.mongodb.com/"),
        Skill::new("Tailwind CSS", TechIcon::TailwindCss, "https://tailwindcss.com/"),
        Skill::new("TypeScript", TechIcon::TypeScript, "https://www.typescriptlang.org/"),
        Skill::new("Node.js", TechIcon::NodeJs, "https://nodejs.org/"),
        Skill::new("GraphQL", TechIcon::GraphQl, "https://graphql.org/"),
    ]
}

fn default_socials() -> Vec<SocialLink> {
    vec![
        SocialLink::new(SocialKind::GitHub, "https://github.com/spooderman11", "GitHub Profile"),
        SocialLink::new(SocialKind::Twitter, "https://x.com/therealspoody", "Twitter Profile"),
        SocialLink::new(SocialKind::Email, "mailto:michael@vynx.tech", "Send Email"),
    ]
}

fn web_stack() -> Vec<Technology> {
    vec![
        Technology::new("React", TechIcon::React),
        Technology::new("Node.js", TechIcon::NodeJs),
        Technology::new("Fastify", TechIcon::Fastify),
    ]
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Renderize.app".to_string(),
            description: "Convert images to text with AI - a powerful tool for extracting text \
                          from images using advanced AI technology."
                .to_string(),
            technologies: web_stack(),
            live_url: "https://renderize.app".to_string(),
            details: r#"## Renderize.app: AI-Powered Image to Text Conversion

Renderize.app is an innovative web application that leverages artificial intelligence to convert images into text with high accuracy. This tool is perfect for extracting text from screenshots, documents, or any image containing text.

### Key Features:

- Advanced AI text recognition
- Support for multiple image formats
- Fast and accurate text extraction
- User-friendly interface

### Technical Implementation:

Built with a modern tech stack including React for the frontend, Node.js and Fastify for the backend, the application provides a seamless and efficient user experience. The AI integration ensures accurate text extraction while maintaining fast processing times.

### Future Plans:

We're continuously working on improving the AI model's accuracy and adding support for more languages and special use cases.
"#
            .to_string(),
        },
        Project {
            title: "Atlas Reselling".to_string(),
            description: "Learn the fundamentals of reselling with a comprehensive suite of \
                          utilities and learning materials."
                .to_string(),
            technologies: web_stack(),
            live_url: "https://atlasreselling.lol".to_string(),
            details: r#"## Atlas Reselling: Complete Reselling Education Platform

Atlas Reselling is a comprehensive platform designed to teach the fundamentals of reselling through practical utilities and in-depth learning materials. The platform helps users understand and succeed in the reselling market.

### Key Features:

- Comprehensive learning materials
- Practical reselling utilities
- Market analysis tools
- Community features

### Technical Implementation:

The platform is built using React for a responsive frontend, with Node.js and Fastify powering the backend. This architecture ensures smooth performance and scalability as the user base grows.

### Future Plans:

We're working on expanding our educational content and adding more advanced tools for experienced resellers.
"#
            .to_string(),
        },
        Project {
            title: "Vynx Solutions".to_string(),
            description: "An organization focused on web development and AI applications, \
                          delivering cutting-edge solutions."
                .to_string(),
            technologies: web_stack(),
            live_url: "https://vynx.tech".to_string(),
            details: r#"## Vynx Solutions: Web Development & AI Applications

Vynx Solutions is an innovative organization specializing in web development and AI applications. We focus on creating cutting-edge solutions that help businesses leverage modern technology effectively.

### Key Features:

- Custom web development solutions
- AI integration services
- Modern technology stack
- Scalable architecture

### Technical Implementation:

Our projects are built using React for frontend development, Node.js for backend services, and Fastify for high-performance server implementations. This stack allows us to deliver fast, reliable, and scalable solutions.

### Future Vision:

We're constantly exploring new technologies and methodologies to provide even better solutions for our clients.
"#
            .to_string(),
        },
    ]
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            skills: default_skills(),
            socials: default_socials(),
            projects: default_projects(),
        }
    }
}
