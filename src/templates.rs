//! Built-in project templates. A template's phases feed
//! [`crate::store::Action::CreateProject`]'s `template_phases`, which
//! synthesizes them with sequential order for the new project.

use crate::store::action::PhaseTemplate;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub phases: Vec<PhaseTemplate>,
}

fn phase(name: &str, description: &str) -> PhaseTemplate {
    PhaseTemplate {
        name: name.into(),
        description: description.into(),
    }
}

pub fn builtin_templates() -> Vec<ProjectTemplate> {
    vec![
        ProjectTemplate {
            id: "hackathon",
            label: "Hackathon",
            emoji: "⚡",
            description: "24–48 hr sprint with ideation through submission",
            phases: vec![
                phase("Ideation", "Brainstorm, validate, and lock the idea"),
                phase("Design", "Wireframes, flows, and visual design"),
                phase("Build", "Frontend, backend, and integration"),
                phase("Polish", "Bug fixes, QA, and final touches"),
                phase("Launch", "Demo prep, presentation, and submission"),
            ],
        },
        ProjectTemplate {
            id: "web-app",
            label: "Web App",
            emoji: "🌐",
            description: "Full-stack product from design to deployment",
            phases: vec![
                phase("Discovery", "Requirements, research, planning"),
                phase("Design", "UI/UX, design system, prototyping"),
                phase("Frontend", "Components, pages, interactions"),
                phase("Backend", "API, database, auth, services"),
                phase("Testing", "Unit, integration, e2e tests"),
                phase("Deployment", "CI/CD, infra, monitoring, launch"),
            ],
        },
        ProjectTemplate {
            id: "sprint",
            label: "Sprint",
            emoji: "🏃",
            description: "Agile 2-week sprint cycle",
            phases: vec![
                phase("Backlog", "Items to be picked up"),
                phase("This Sprint", "Committed sprint work"),
                phase("In Review", "Awaiting review or QA"),
                phase("Done", "Completed this sprint"),
            ],
        },
        ProjectTemplate {
            id: "research",
            label: "Research",
            emoji: "🔬",
            description: "Academic or product research project",
            phases: vec![
                phase("Literature", "Reading and synthesis"),
                phase("Planning", "Methodology and design"),
                phase("Experiments", "Data collection and testing"),
                phase("Analysis", "Data processing and insights"),
                phase("Writing", "Drafting and publication"),
            ],
        },
        ProjectTemplate {
            id: "blank",
            label: "Blank",
            emoji: "✦",
            description: "Start from scratch",
            phases: Vec::new(),
        },
    ]
}
