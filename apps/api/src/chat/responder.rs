//! Local topic responder — answers visitor questions from the fact base alone.
//!
//! Pure and total: no I/O, no hidden state, always a non-empty answer. Used
//! whenever the remote completion path is unavailable.
//!
//! Templates use `**bold**` emphasis and literal newlines; `chat::format`
//! turns those into display markup.

use crate::chat::topics::{first_match, Topic};
use crate::models::profile::FactBase;

const FRONTEND_LANGUAGES: &[&str] = &["HTML5", "CSS3", "JavaScript (ES6+)"];
const FRONTEND_FRAMEWORKS: &[&str] = &["React.js", "Bootstrap", "Redux"];
const BACKEND_LANGUAGES: &[&str] = &["Node.js", "Python"];
const BACKEND_FRAMEWORKS: &[&str] = &["Express.js"];

/// Stateless keyword-dispatching responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopicResponder;

impl TopicResponder {
    /// Renders the answer of the first matching topic rule, or the onboarding
    /// message when no rule matches.
    ///
    /// Callers reject empty or whitespace-only queries before getting here.
    pub fn respond(&self, query: &str, facts: &FactBase) -> String {
        self.respond_with_topic(query, facts).1
    }

    /// Same as `respond`, also reporting which topic answered (`None` for the
    /// onboarding message).
    pub fn respond_with_topic(&self, query: &str, facts: &FactBase) -> (Option<Topic>, String) {
        match first_match(query) {
            Some(rule) => (Some(rule.topic), (rule.render)(facts)),
            None => (None, render_default(facts)),
        }
    }
}

/// Items of `items` that appear in `allowed`, in the fact base's order.
fn pick<'a>(items: &'a [String], allowed: &[&str]) -> Vec<&'a str> {
    items
        .iter()
        .map(String::as_str)
        .filter(|item| allowed.contains(item))
        .collect()
}

pub fn render_skills(facts: &FactBase) -> String {
    let skills = &facts.skills;
    format!(
        "{name} has strong technical skills across the full stack! The expertise includes:

**Frontend:** {fe_lang}, along with {fe_fw}

**Backend:** {be_lang} with {be_fw}

**Databases:** {db}

**Tools:** {tools}

{name} is particularly strong in the MERN stack and has hands-on experience building complete web applications. Would you like to know more about any specific technology or the projects?",
        name = facts.first_name(),
        fe_lang = pick(&skills.languages, FRONTEND_LANGUAGES).join(", "),
        fe_fw = pick(&skills.frameworks, FRONTEND_FRAMEWORKS).join(", "),
        be_lang = pick(&skills.languages, BACKEND_LANGUAGES).join(", "),
        be_fw = pick(&skills.frameworks, BACKEND_FRAMEWORKS).join(", "),
        db = skills.databases.join(", "),
        tools = skills.tools.join(", "),
    )
}

pub fn render_projects(facts: &FactBase) -> String {
    let projects = facts
        .projects
        .iter()
        .map(|p| {
            format!(
                "**{}** ({}): {}. Built with {}. Check it out at {}",
                p.name,
                p.duration,
                p.description,
                p.technologies.join(", "),
                p.repository
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        "{name} has worked on some impressive full-stack projects:

{projects}

These projects demonstrate expertise in the MERN stack, REST APIs, user authentication, and creating complete user experiences, from e-commerce platforms to content management systems!",
        name = facts.first_name(),
    )
}

pub fn render_education(facts: &FactBase) -> String {
    let name = facts.first_name();
    let current = facts
        .education
        .first()
        .map(|e| {
            format!(
                "{name} is currently pursuing a **{}** at {} ({}) with an impressive {} of {}.",
                e.degree,
                e.institution,
                e.duration,
                e.score_kind.label(),
                e.score
            )
        })
        .unwrap_or_default();

    let earlier = facts
        .education
        .iter()
        .skip(1)
        .map(|e| format!("- {} from {} ({})", e.degree, e.institution, e.score))
        .collect::<Vec<_>>()
        .join("\n");

    let certifications = facts
        .certifications
        .iter()
        .map(|c| format!("**{}** ({})", c.name, c.issuer))
        .collect::<Vec<_>>()
        .join(" and ");

    format!(
        "{current}

The educational background also includes:
{earlier}

{name} has also earned certifications in {certifications}, showing a commitment to continuous learning!"
    )
}

pub fn render_contact(facts: &FactBase) -> String {
    let info = &facts.personal_info;
    format!(
        "You can reach {name} through several channels:

📧 **Email:** {email}
📱 **Phone:** {phone}
🌐 **Portfolio:** {portfolio}
💼 **LinkedIn:** linkedin.com/in/{linkedin}
🐙 **GitHub:** {github}

{name} is actively seeking internship opportunities in full-stack development and would love to hear from you! Feel free to reach out to discuss potential opportunities or collaborations.",
        name = facts.first_name(),
        email = info.email,
        phone = info.phone,
        portfolio = info.portfolio,
        linkedin = info.linkedin,
        github = info.github,
    )
}

pub fn render_mern(facts: &FactBase) -> String {
    let projects = facts
        .projects
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" and ");

    format!(
        "{name} is highly skilled in the MERN stack! Hands-on experience includes:

**MongoDB:** Database design and management
**Express.js:** Building robust REST APIs with secure authentication
**React.js:** Creating interactive, responsive user interfaces
**Node.js:** Server-side development and API integration

MERN projects include {projects}. {name} understands the full development lifecycle from database design to deployment!",
        name = facts.first_name(),
    )
}

pub fn render_full_stack(facts: &FactBase) -> String {
    format!(
        "{name} is passionate about full-stack development, with experience across the entire web development spectrum:

**Frontend Development:** Creating responsive, interactive user interfaces with React.js, modern CSS, and JavaScript ES6+

**Backend Development:** Building scalable APIs with Node.js/Express.js and Python, implementing secure authentication with JWT

**Database Management:** Working with {databases}

**DevOps & Tools:** Using {tools}

The real strength lies in understanding how all pieces work together to create seamless user experiences, from database design to user interface!",
        name = facts.first_name(),
        databases = facts.skills.databases.join(" and "),
        tools = facts.skills.tools.join(", "),
    )
}

pub fn render_python(facts: &FactBase) -> String {
    let coursework = facts
        .certifications
        .iter()
        .find(|c| c.name.to_lowercase().contains("machine learning"))
        .map(|c| format!(" and has completed {} on {}", c.name, c.issuer))
        .unwrap_or_default();

    format!(
        "{name} has solid Python skills{coursework}. While the primary focus is web development with the MERN stack, Python brings versatility in backend development and data analysis.

That Python experience complements the full-stack skill set, making {name} adaptable to different technology stacks depending on project requirements!",
        name = facts.first_name(),
    )
}

const PROBLEM_SOLVING_FALLBACK: &str =
    "Strong analytical thinking and attention to delivering quality user experiences";

pub fn render_experience(facts: &FactBase) -> String {
    let academics = facts
        .education
        .first()
        .map(|e| format!("{} {} in {}", e.score, e.score_kind.label(), e.degree))
        .unwrap_or_default();
    let problem_solving = facts
        .strengths
        .iter()
        .find(|s| s.to_lowercase().contains("problem"))
        .map(String::as_str)
        .unwrap_or(PROBLEM_SOLVING_FALLBACK);

    format!(
        "{name} is an ambitious Computer Science undergraduate with strong practical experience in full-stack development. Here's what stands out:

🎯 **Focus:** MERN stack development with hands-on project experience
🏗️ **Project Experience:** Built {count} complete web applications from scratch
📚 **Academic Excellence:** {academics}
🔧 **Technical Skills:** Proficient in modern web technologies, databases, and development tools
🧠 **Problem-Solving:** {problem_solving}

{goals}",
        name = facts.first_name(),
        count = facts.projects.len(),
        goals = facts.career_goals,
    )
}

/// Onboarding message listing the kinds of questions the responder understands.
pub fn render_default(facts: &FactBase) -> String {
    let projects = facts
        .projects
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Hello! I'm {name}'s AI assistant. I can help you learn about technical skills, projects, education, and experience in full-stack development.

Some things you might want to ask about:
- Technical skills and expertise in the MERN stack
- Details about the projects ({projects})
- Educational background and certifications
- How to get in touch for opportunities
- Experience with full-stack development

What would you like to know about {name}? Feel free to ask me anything!",
        name = facts.first_name(),
    )
}
