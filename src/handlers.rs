use axum::extract::ws::Message;
use futures_util::SinkExt;
use serde_json::{json, Value};
use tracing::warn;

use crate::state::AppState;

/// Commands the terminal frontend can run, with their help text.
const COMMANDS: &[(&str, &str)] = &[
    ("about", "about me"),
    ("education", "my education background"),
    ("email", "send me an email"),
    ("gui", "go to my portfolio website"),
    ("help", "check available commands"),
    ("projects", "view my projects"),
    ("socials", "check out my social accounts"),
    ("welcome", "display hero section"),
    ("whoami", "about current user"),
];

pub async fn handle_message(
    state: &AppState,
    client_uid: &str,
    text: &str,
    sender: &mut futures_util::stream::SplitSink<axum::extract::ws::WebSocket, Message>,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());

    match msg_type {
        Some("command") => {
            let input = msg.get("input").and_then(|v| v.as_str()).unwrap_or("");
            if input.trim().is_empty() {
                return Ok(());
            }
            let reply = dispatch_command(state, input);
            sender.send(Message::Text(reply.to_string())).await?;
        }
        _ => {
            warn!("unknown message type from {}: {:?}", client_uid, msg_type);
        }
    }

    Ok(())
}

/// Turn one terminal input line into a reply payload.
///
/// Panels are pure projections of the resolved profile; no command
/// mutates state.
pub fn dispatch_command(state: &AppState, input: &str) -> Value {
    let mut parts = input.split_whitespace();
    let command = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();

    let personal = &state.config.personal;
    let system = &state.config.system;

    match command {
        "about" => panel(
            "about",
            json!({
                "name": personal.name,
                "jobTitle": personal.job_title,
                "location": personal.location,
                "description": personal.description,
            }),
        ),
        "education" => panel("education", json!({ "education": personal.education })),
        "email" => panel(
            "email",
            json!({
                "email": personal.email,
                "mailto": format!("mailto:{}", personal.email),
            }),
        ),
        "gui" => json!({ "type": "redirect", "url": system.gui.url }),
        "help" => {
            let commands: Vec<Value> = COMMANDS
                .iter()
                .map(|(name, description)| json!({ "name": name, "description": description }))
                .collect();
            panel("help", json!({ "commands": commands }))
        }
        "projects" => {
            if args.is_empty() {
                panel("projects", json!({ "projects": personal.projects }))
            } else if let Some(n) = resolve_go_arg(&args, personal.projects.len()) {
                json!({ "type": "redirect", "url": personal.projects[n - 1].url })
            } else {
                usage("projects", "projects go <project-no>")
            }
        }
        "socials" => {
            if args.is_empty() {
                panel("socials", json!({ "socials": personal.socials }))
            } else if let Some(n) = resolve_go_arg(&args, personal.socials.len()) {
                json!({ "type": "redirect", "url": personal.socials[n - 1].url })
            } else {
                usage("socials", "socials go <social-no>")
            }
        }
        "welcome" => panel(
            "welcome",
            json!({
                "message": personal.welcome_message,
                "githubRepo": personal.github_repo,
                "version": personal.version,
                "lastLogin": state.started_at.format("%a %b %e %H:%M:%S %Y").to_string(),
            }),
        ),
        "whoami" => panel("whoami", json!({ "user": system.terminal.user })),
        other => json!({
            "type": "error",
            "text": format!("command not found: {}", other),
        }),
    }
}

fn panel(command: &str, data: Value) -> Value {
    json!({ "type": "panel", "command": command, "data": data })
}

fn usage(command: &str, usage: &str) -> Value {
    json!({ "type": "usage", "command": command, "usage": format!("Usage: {}", usage) })
}

/// A `go <n>` argument pair is valid when `n` is a 1-based index into
/// the listed entries.
fn resolve_go_arg(args: &[&str], len: usize) -> Option<usize> {
    if args.len() == 2 && args[0] == "go" {
        args[1].parse::<usize>().ok().filter(|n| (1..=len).contains(n))
    } else {
        None
    }
}
