use serde_json::{Map, Value};

use crate::config::{
    default_education, Config, EducationEntry, GuiConfig, PersonalConfig, ProjectEntry,
    SocialEntry, SystemConfig, TerminalConfig,
};

/// Accepted external key names per scalar field, primary name first.
///
/// Remote profile documents come from hand-edited gists and have grown
/// several spellings for the same attribute over time; when more than
/// one is present the primary name wins.
mod aliases {
    pub const NAME: &[&str] = &["name"];
    pub const JOB_TITLE: &[&str] = &["jobTitle", "title"];
    pub const LOCATION: &[&str] = &["location"];
    pub const DESCRIPTION: &[&str] = &["description", "summary"];
    pub const GITHUB_REPO: &[&str] = &["githubRepo"];
    pub const VERSION: &[&str] = &["version"];
    pub const WELCOME_MESSAGE: &[&str] = &["welcomeMessage"];
    pub const EMAIL: &[&str] = &["email"];
    pub const HOMEDIR: &[&str] = &["homedir"];
    pub const GUI_URL: &[&str] = &["guiUrl"];
    pub const TERMINAL_USER: &[&str] = &["terminalUser"];
    pub const TERMINAL_HOST: &[&str] = &["terminalHost"];

    pub const EDU_INSTITUTION: &[&str] = &["institution", "school"];
    pub const EDU_DEGREE: &[&str] = &["degree", "field"];
    pub const EDU_YEAR: &[&str] = &["year", "graduationYear"];

    pub const PROJECT_TITLE: &[&str] = &["title", "name"];
    pub const PROJECT_DESCRIPTION: &[&str] = &["description"];
    pub const PROJECT_URL: &[&str] = &["url", "link"];

    pub const EXPERIENCE_TITLE: &[&str] = &["role", "title"];
    pub const EXPERIENCE_DESCRIPTION: &[&str] = &["description", "summary"];
    pub const EXPERIENCE_URL: &[&str] = &["url", "link"];

    pub const SOCIAL_PLATFORM: &[&str] = &["platform", "name"];
    pub const SOCIAL_URL: &[&str] = &["url", "link"];
}

/// Build a [`Config`] from an arbitrary JSON object.
///
/// Total over any object input: each field is taken from the document
/// under its accepted key names, or substituted with its default when
/// absent, empty, or of the wrong type. The document's ordering of
/// `education`, `projects` and `socials` is preserved (it is display
/// order in the terminal).
pub fn normalize_profile(doc: &Map<String, Value>) -> Config {
    let defaults = Config::default();

    Config {
        personal: PersonalConfig {
            name: scalar(doc, aliases::NAME, &defaults.personal.name),
            job_title: scalar(doc, aliases::JOB_TITLE, &defaults.personal.job_title),
            location: scalar(doc, aliases::LOCATION, &defaults.personal.location),
            description: scalar(doc, aliases::DESCRIPTION, &defaults.personal.description),
            github_repo: scalar(doc, aliases::GITHUB_REPO, &defaults.personal.github_repo),
            version: scalar(doc, aliases::VERSION, &defaults.personal.version),
            welcome_message: scalar(
                doc,
                aliases::WELCOME_MESSAGE,
                &defaults.personal.welcome_message,
            ),
            email: scalar(doc, aliases::EMAIL, &defaults.personal.email),
            education: normalize_education(doc),
            projects: normalize_projects(doc),
            socials: normalize_socials(doc),
        },
        system: SystemConfig {
            homedir: scalar(doc, aliases::HOMEDIR, &defaults.system.homedir),
            gui: GuiConfig {
                url: scalar(doc, aliases::GUI_URL, &defaults.system.gui.url),
            },
            terminal: TerminalConfig {
                user: scalar(doc, aliases::TERMINAL_USER, &defaults.system.terminal.user),
                host: scalar(doc, aliases::TERMINAL_HOST, &defaults.system.terminal.host),
            },
        },
    }
}

/// First non-empty string found under the alias list, else the default.
/// Empty strings and non-string values count as absent.
fn scalar(doc: &Map<String, Value>, keys: &[&str], default: &str) -> String {
    keys.iter()
        .find_map(|key| present_str(doc.get(*key)))
        .unwrap_or(default)
        .to_string()
}

/// Element attributes default to the empty string, not to the built-in
/// sample entry: a half-filled element stays half-filled.
fn element_str(element: &Value, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| present_str(element.get(key)))
        .unwrap_or("")
        .to_string()
}

fn present_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn normalize_education(doc: &Map<String, Value>) -> Vec<EducationEntry> {
    match doc.get("education").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|item| EducationEntry {
                institution: element_str(item, aliases::EDU_INSTITUTION),
                degree: element_str(item, aliases::EDU_DEGREE),
                year: element_str(item, aliases::EDU_YEAR),
            })
            .collect(),
        None => default_education(),
    }
}

fn normalize_projects(doc: &Map<String, Value>) -> Vec<ProjectEntry> {
    if let Some(items) = doc.get("projects").and_then(Value::as_array) {
        return items
            .iter()
            .map(|item| ProjectEntry {
                title: element_str(item, aliases::PROJECT_TITLE),
                description: element_str(item, aliases::PROJECT_DESCRIPTION),
                url: element_str(item, aliases::PROJECT_URL),
            })
            .collect();
    }

    // Legacy resume-style documents carry `experience` instead of
    // `projects`; those entries become the project list.
    if let Some(items) = doc.get("experience").and_then(Value::as_array) {
        return items
            .iter()
            .map(|item| ProjectEntry {
                title: element_str(item, aliases::EXPERIENCE_TITLE),
                description: element_str(item, aliases::EXPERIENCE_DESCRIPTION),
                url: element_str(item, aliases::EXPERIENCE_URL),
            })
            .collect();
    }

    Vec::new()
}

fn normalize_socials(doc: &Map<String, Value>) -> Vec<SocialEntry> {
    match doc.get("socials").and_then(Value::as_array) {
        Some(items) => items
            .iter()
            .map(|item| SocialEntry {
                platform: element_str(item, aliases::SOCIAL_PLATFORM),
                url: element_str(item, aliases::SOCIAL_URL),
            })
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn empty_document_yields_defaults_with_empty_socials() {
        let config = normalize_profile(&Map::new());
        let defaults = Config::default();
        assert_eq!(config.personal.name, defaults.personal.name);
        assert_eq!(config.personal.education, defaults.personal.education);
        assert!(config.personal.projects.is_empty());
        assert!(config.personal.socials.is_empty());
        assert_eq!(config.system, defaults.system);
    }

    #[test]
    fn scalar_fields_taken_from_document_when_present() {
        let config = normalize_profile(&doc(json!({
            "name": "John Doe",
            "title": "Software Engineer",
        })));
        assert_eq!(config.personal.name, "John Doe");
        assert_eq!(config.personal.job_title, "Software Engineer");
        // Untouched fields keep their defaults.
        assert_eq!(config.personal.location, "Your Location");
        assert_eq!(config.personal.education, default_education());
    }

    #[test]
    fn primary_key_wins_over_alias() {
        let config = normalize_profile(&doc(json!({
            "jobTitle": "Primary",
            "title": "Alias",
            "description": "Primary summary",
            "summary": "Alias summary",
        })));
        assert_eq!(config.personal.job_title, "Primary");
        assert_eq!(config.personal.description, "Primary summary");
    }

    #[test]
    fn alias_accepted_when_primary_absent() {
        let config = normalize_profile(&doc(json!({
            "summary": "From summary",
        })));
        assert_eq!(config.personal.description, "From summary");
    }

    #[test]
    fn empty_string_counts_as_absent() {
        let config = normalize_profile(&doc(json!({
            "name": "",
            "location": "Berlin",
        })));
        assert_eq!(config.personal.name, "Your Name");
        assert_eq!(config.personal.location, "Berlin");
    }

    #[test]
    fn non_string_scalar_counts_as_absent() {
        let config = normalize_profile(&doc(json!({
            "name": 42,
            "version": ["2.0"],
        })));
        assert_eq!(config.personal.name, "Your Name");
        assert_eq!(config.personal.version, "1.0.0");
    }

    #[test]
    fn system_fields_map_from_flat_keys() {
        let config = normalize_profile(&doc(json!({
            "homedir": "/home/john",
            "guiUrl": "https://john.example.com",
            "terminalUser": "john",
            "terminalHost": "johnbox",
        })));
        assert_eq!(config.system.homedir, "/home/john");
        assert_eq!(config.system.gui.url, "https://john.example.com");
        assert_eq!(config.system.terminal.user, "john");
        assert_eq!(config.system.terminal.host, "johnbox");
    }

    #[test]
    fn education_elements_resolve_aliases_and_blank_out_missing_attributes() {
        let config = normalize_profile(&doc(json!({
            "education": [
                { "school": "Tech University", "field": "CS", "graduationYear": "2020" },
                { "institution": "Other College" },
            ],
        })));
        assert_eq!(
            config.personal.education,
            vec![
                EducationEntry {
                    institution: "Tech University".to_string(),
                    degree: "CS".to_string(),
                    year: "2020".to_string(),
                },
                EducationEntry {
                    institution: "Other College".to_string(),
                    degree: String::new(),
                    year: String::new(),
                },
            ]
        );
    }

    #[test]
    fn non_sequence_education_falls_back_to_default_sequence() {
        let config = normalize_profile(&doc(json!({ "education": "none" })));
        assert_eq!(config.personal.education, default_education());
    }

    #[test]
    fn projects_map_title_and_link_aliases() {
        let config = normalize_profile(&doc(json!({
            "projects": [
                { "name": "termfolio", "description": "a terminal", "link": "https://t.example" },
            ],
        })));
        assert_eq!(
            config.personal.projects,
            vec![ProjectEntry {
                title: "termfolio".to_string(),
                description: "a terminal".to_string(),
                url: "https://t.example".to_string(),
            }]
        );
    }

    #[test]
    fn experience_synthesizes_projects_when_projects_absent() {
        let config = normalize_profile(&doc(json!({
            "experience": [
                { "role": "Senior Dev", "summary": "Led team projects", "url": "https://a" },
                { "title": "Junior Dev", "description": "Built features" },
            ],
        })));
        assert_eq!(
            config.personal.projects,
            vec![
                ProjectEntry {
                    title: "Senior Dev".to_string(),
                    description: "Led team projects".to_string(),
                    url: "https://a".to_string(),
                },
                ProjectEntry {
                    title: "Junior Dev".to_string(),
                    description: "Built features".to_string(),
                    url: String::new(),
                },
            ]
        );
    }

    #[test]
    fn projects_take_precedence_over_experience() {
        let config = normalize_profile(&doc(json!({
            "projects": [{ "title": "kept" }],
            "experience": [{ "role": "ignored" }],
        })));
        assert_eq!(config.personal.projects.len(), 1);
        assert_eq!(config.personal.projects[0].title, "kept");
    }

    #[test]
    fn socials_map_name_and_link_aliases() {
        let config = normalize_profile(&doc(json!({
            "socials": [
                { "name": "GitHub", "link": "https://github.com/x" },
            ],
        })));
        assert_eq!(
            config.personal.socials,
            vec![SocialEntry {
                platform: "GitHub".to_string(),
                url: "https://github.com/x".to_string(),
            }]
        );
    }

    #[test]
    fn absent_socials_become_empty_sequence() {
        let config = normalize_profile(&doc(json!({ "name": "John" })));
        assert!(config.personal.socials.is_empty());
    }

    #[test]
    fn sequence_order_is_preserved() {
        let config = normalize_profile(&doc(json!({
            "projects": [
                { "title": "first" },
                { "title": "second" },
                { "title": "third" },
            ],
        })));
        let titles: Vec<&str> = config
            .personal
            .projects
            .iter()
            .map(|p| p.title.as_str())
            .collect();
        assert_eq!(titles, ["first", "second", "third"]);
    }

    #[test]
    fn normalization_is_deterministic() {
        let document = doc(json!({
            "name": "John Doe",
            "experience": [{ "role": "Dev" }],
            "socials": [{ "name": "GitHub", "link": "https://github.com/x" }],
        }));
        assert_eq!(normalize_profile(&document), normalize_profile(&document));
    }
}
