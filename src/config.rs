use serde::{Deserialize, Serialize};

/// The canonical profile record consumed by the terminal frontend.
///
/// Resolved exactly once at startup and held immutably for the rest of
/// the session. Every field is always present: whatever the remote
/// profile document cannot supply is filled from the built-in defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub personal: PersonalConfig,
    pub system: SystemConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalConfig {
    pub name: String,
    pub job_title: String,
    pub location: String,
    pub description: String,
    pub github_repo: String,
    pub version: String,
    pub welcome_message: String,
    pub email: String,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub socials: Vec<SocialEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialEntry {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    pub homedir: String,
    pub gui: GuiConfig,
    pub terminal: TerminalConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuiConfig {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalConfig {
    pub user: String,
    pub host: String,
}

pub fn default_education() -> Vec<EducationEntry> {
    vec![EducationEntry {
        institution: "Your University".to_string(),
        degree: "Your Degree".to_string(),
        year: "Graduation Year".to_string(),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            personal: PersonalConfig::default(),
            system: SystemConfig::default(),
        }
    }
}

impl Default for PersonalConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            job_title: "Your Job Title".to_string(),
            location: "Your Location".to_string(),
            description: "A brief description about yourself".to_string(),
            github_repo: "https://github.com/yourusername/your-repo".to_string(),
            version: "1.0.0".to_string(),
            welcome_message: "Welcome to my terminal portfolio".to_string(),
            email: "your.email@example.com".to_string(),
            education: default_education(),
            projects: Vec::new(),
            socials: Vec::new(),
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            homedir: "/home/user".to_string(),
            gui: GuiConfig {
                url: "https://your-portfolio-website.com".to_string(),
            },
            terminal: TerminalConfig {
                user: "guest".to_string(),
                host: "portfolio".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_has_sample_education_and_empty_collections() {
        let config = Config::default();
        assert_eq!(config.personal.education.len(), 1);
        assert!(config.personal.projects.is_empty());
        assert!(config.personal.socials.is_empty());
    }

    #[test]
    fn serializes_with_frontend_field_names() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert_eq!(json["personal"]["jobTitle"], "Your Job Title");
        assert_eq!(
            json["personal"]["welcomeMessage"],
            "Welcome to my terminal portfolio"
        );
        assert_eq!(json["system"]["terminal"]["user"], "guest");
    }
}
