//! Static portfolio pages and the provider that hands them to windows.

use mintdesk_common::{AppId, ProjectFilter};
use mintdesk_wm::{ContentProvider, Surface, TextSurface};

use crate::panels;

const ABOUT: &str = "\
Anjisha Pun
UI/UX Designer & Frontend Developer
Location: 📍 Butwal, Nepal

About
UI/UX designer and frontend developer specializing in crafting intuitive,
visually compelling digital experiences. Proficient in HTML, CSS, and
JavaScript, with growing expertise in React and Next.js. Combines design
thinking with technical implementation, backed by knowledge in Django and
Python for full-stack perspective.

Links
🔗 GitHub: https://github.com/anjisha616
🔗 LinkedIn: https://www.linkedin.com/in/anjisha-pun-aaa1a6349/
📧 punangisha@gmail.com";

const EXPERIENCE: &str = "\
Experience

🚧 Currently Seeking Opportunities
Building portfolio and honing skills in UI/UX design and frontend development.
Ready to bring creative solutions and technical expertise to your team!

Education
Focus Areas:
  • UI/UX Design Principles
  • Frontend Web Development
  • Design Systems & Component Libraries
  • Responsive Web Design";

const CONTACT: &str = "\
Get In Touch

📧 Contact Information
  📧 punangisha@gmail.com
  💼 https://www.linkedin.com/in/anjisha-pun-aaa1a6349/
  💻 https://github.com/anjisha616";

const RESUME: &str = "\
Resume
Download my resume to learn more about my skills and experience.
📥 Download Resume (PDF)";

const SKILL_BAR_WIDTH: usize = 20;

/// `(category, [(skill, percent, note)])`
const SKILLS: &[(&str, &[(&str, u8, &str)])] = &[
    ("🎨 Design Tools", &[("Figma", 85, ""), ("Canva", 75, "")]),
    (
        "💻 Frontend",
        &[
            ("HTML/CSS", 90, ""),
            ("JavaScript", 80, ""),
            ("React", 55, " (learning)"),
            ("Next.js", 45, " (learning)"),
        ],
    ),
    ("🔧 Backend", &[("Django", 60, ""), ("Python", 60, "")]),
    (
        "🌟 Non-Technical",
        &[
            ("Communication", 85, ""),
            ("Presentation", 85, ""),
            ("Music", 70, ""),
        ],
    ),
];

fn skill_bar(percent: u8) -> String {
    let filled = usize::from(percent.min(100)) * SKILL_BAR_WIDTH / 100;
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(SKILL_BAR_WIDTH - filled)
    )
}

pub fn render_skills() -> String {
    let mut out = String::from("Skills & Expertise\n");
    for (category, skills) in SKILLS {
        out.push('\n');
        out.push_str(category);
        out.push('\n');
        for (name, percent, note) in skills.iter() {
            out.push_str(&format!(
                "  {name:<14} {} {percent}%{note}\n",
                skill_bar(*percent)
            ));
        }
    }
    out.trim_end().to_string()
}

/// Content of every portfolio app. Remote-backed panels start out with their
/// loading text and are replaced once the GitHub data arrives.
#[derive(Debug, Clone)]
pub struct PortfolioContent {
    username: String,
}

impl PortfolioContent {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

impl ContentProvider for PortfolioContent {
    fn content(&self, app_id: &AppId) -> Option<Box<dyn Surface>> {
        let text = match app_id.as_str() {
            "about" => ABOUT.to_string(),
            "experience" => EXPERIENCE.to_string(),
            "skills" => render_skills(),
            "contact" => CONTACT.to_string(),
            "resume" => RESUME.to_string(),
            panels::PROJECTS_APP => panels::render_projects_loading(ProjectFilter::All),
            panels::GITHUB_APP => panels::render_stats_loading(&self.username),
            _ => return None,
        };
        Some(TextSurface::boxed(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mintdesk_wm::catalog::known_apps;

    #[test]
    fn every_catalog_app_has_content() {
        let provider = PortfolioContent::new("octocat");
        for app in known_apps() {
            assert!(provider.content(&app).is_some(), "no content for {app}");
        }
    }

    #[test]
    fn unknown_app_has_none() {
        let provider = PortfolioContent::new("octocat");
        assert!(provider.content(&AppId::from("minesweeper")).is_none());
    }

    #[test]
    fn github_panel_mentions_user() {
        let provider = PortfolioContent::new("octocat");
        let body = provider.content(&AppId::from("github")).unwrap().render();
        assert!(body.contains("github-stats --user octocat"));
    }

    #[test]
    fn skill_bars() {
        assert_eq!(skill_bar(0), format!("[{}]", "░".repeat(20)));
        assert_eq!(skill_bar(100), format!("[{}]", "█".repeat(20)));
        assert_eq!(skill_bar(85).chars().filter(|c| *c == '█').count(), 17);
        let skills = render_skills();
        assert!(skills.contains("React"));
        assert!(skills.contains("55% (learning)"));
    }
}
