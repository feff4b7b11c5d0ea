//! Fixed role and skill taxonomy used to synthesize team profiles.

/// Primary skill bundle per role key.
pub const ROLE_SKILLS: &[(&str, &[&str])] = &[
    ("backend", &["python", "nodejs", "sql", "docker"]),
    ("frontend", &["javascript", "react", "typescript"]),
    ("design", &["ui_design", "ux_research", "figma"]),
    ("devops", &["docker", "kubernetes", "aws", "ci_cd"]),
    ("manager", &["project_management", "agile", "scrum"]),
    ("lead", &["python", "javascript", "project_management"]),
];

/// Secondary skills any member may pick up at a lower level.
pub const SECONDARY_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "sql",
    "docker",
    "react",
    "typescript",
    "aws",
    "ci_cd",
    "ui_design",
    "agile",
];

pub const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Sam", "Casey", "Morgan", "Taylor", "Riley", "Quinn", "Avery", "Dana",
    "Jamie", "Rowan", "Skyler", "Reese", "Emerson", "Hayden",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Lee", "Patel", "Garcia", "Kim", "Chen", "Nguyen", "Okafor", "Silva",
    "Novak", "Haddad", "Fischer", "Ivanov", "Moreau", "Tanaka",
];

/// Display title for a role key.
pub fn role_title(role: &str) -> &'static str {
    match role {
        "backend" => "Backend Developer",
        "frontend" => "Frontend Developer",
        "design" => "UI/UX Designer",
        "devops" => "DevOps Engineer",
        "manager" => "Project Manager",
        "lead" => "Technical Lead",
        _ => "Developer",
    }
}

/// Primary skills for a role key; unknown roles get the backend bundle.
pub fn primary_skills(role: &str) -> &'static [&'static str] {
    ROLE_SKILLS
        .iter()
        .find(|(key, _)| *key == role)
        .map(|(_, skills)| *skills)
        .unwrap_or(ROLE_SKILLS[0].1)
}
