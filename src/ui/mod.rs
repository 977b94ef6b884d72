//! Terminal front-end for the session flow.
//!
//! Parses one command per line into a [`UserIntent`], dispatches it, and
//! prints the outcome or the user-facing error text. All flow rules live in
//! the controller; this layer only translates between lines and intents.

pub mod render;

use crate::core::validate;
use crate::core::{FlowError, FlowOutcome, MessageKind, SessionFlow, UserIntent};
use crate::models::{FeedbackRating, ProfileInput};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

/// What the parser made of one input line
#[derive(Debug)]
enum Command {
    Intent(UserIntent),
    Show,
    Help,
    Quit,
    Empty,
    Usage(&'static str),
    Invalid(&'static str),
    Unknown(String),
}

/// Run the interactive session until quit or end of input
pub async fn run(mut flow: SessionFlow, endpoint: &str) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("ScholarMatch - find scholarships that fit your profile");
    println!("Type 'help' for commands.");

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        match parse_command(&line) {
            Command::Empty => {}
            Command::Help => print_lines(&help_lines()),
            Command::Quit => break,
            Command::Show => {
                print_lines(&render::results_lines(flow.session(), flow.matches(), today()));
            }
            Command::Usage(usage) => println!("usage: {}", usage),
            Command::Invalid(message) => println!("{}", message),
            Command::Unknown(word) => {
                println!("Unknown command '{}'. Type 'help' for commands.", word);
            }
            Command::Intent(intent) => {
                if let Some(email) = intent_email(&intent) {
                    if !validate::looks_like_email(email) {
                        println!("Note: '{}' does not look like an email address", email);
                    }
                }

                if let Some(status) = progress_line(&intent) {
                    println!("{}", status);
                }

                match flow.dispatch(intent).await {
                    Ok(outcome) => print_lines(&outcome_lines(&flow, &outcome)),
                    Err(err) => {
                        // The printed text is the user message; specifics go
                        // to the log only
                        match &err {
                            FlowError::Validation { field, .. } => {
                                tracing::debug!("Validation failed on {}", field);
                            }
                            FlowError::Transport { detail } => {
                                tracing::debug!("Transport failure: {}", detail);
                            }
                            _ => {}
                        }

                        println!("{}", err);
                        if err.kind() == MessageKind::Transport {
                            println!("The backend at {} did not answer.", endpoint);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// Parse one input line into a command
fn parse_command(line: &str) -> Command {
    let mut parts = line.split_whitespace();
    let keyword = match parts.next() {
        Some(word) => word,
        None => return Command::Empty,
    };
    let rest: Vec<&str> = parts.collect();

    match keyword {
        "login" => match rest.as_slice() {
            [email, password] => Command::Intent(UserIntent::Login {
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => Command::Usage("login <email> <password>"),
        },
        "register" => match rest.as_slice() {
            [name, email, password] => Command::Intent(UserIntent::Register {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            }),
            _ => Command::Usage("register <name> <email> <password>"),
        },
        "profile" => match rest.as_slice() {
            [age, country, education, gpa, field, need] => {
                // Mirrors the form behavior: a non-numeric entry fails the
                // same range message the out-of-range value would
                let age = match age.parse::<u32>() {
                    Ok(age) => age,
                    Err(_) => return Command::Invalid("Please enter a valid age between 16 and 65"),
                };
                let gpa = match gpa.parse::<f64>() {
                    Ok(gpa) => gpa,
                    Err(_) => {
                        return Command::Invalid("Please enter a valid GPA between 0.0 and 4.0")
                    }
                };

                Command::Intent(UserIntent::SubmitProfile(ProfileInput {
                    age,
                    country: country.to_string(),
                    education_level: education.to_string(),
                    gpa,
                    field_of_study: field.to_string(),
                    financial_need: need.to_string(),
                }))
            }
            _ => Command::Usage(
                "profile <age> <country> <education> <gpa> <field-of-study> <financial-need>",
            ),
        },
        "feedback" => match rest.as_slice() {
            [id, rating] => {
                let rating = match *rating {
                    "up" | "like" => Some(FeedbackRating::Positive),
                    "down" | "dislike" => Some(FeedbackRating::Negative),
                    _ => None,
                };
                match (id.parse::<i64>(), rating) {
                    (Ok(scholarship_id), Some(rating)) => {
                        Command::Intent(UserIntent::SubmitFeedback { scholarship_id, rating })
                    }
                    _ => Command::Usage("feedback <scholarship-id> up|down"),
                }
            }
            _ => Command::Usage("feedback <scholarship-id> up|down"),
        },
        "logout" => Command::Intent(UserIntent::Logout),
        "matches" | "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

fn intent_email(intent: &UserIntent) -> Option<&str> {
    match intent {
        UserIntent::Login { email, .. } | UserIntent::Register { email, .. } => Some(email),
        _ => None,
    }
}

/// Progress line shown while the profile pipeline runs; suppressed when
/// local validation will reject the submission
fn progress_line(intent: &UserIntent) -> Option<&'static str> {
    match intent {
        UserIntent::SubmitProfile(profile) if validate::profile_input(profile).is_ok() => {
            Some("Analyzing your profile and matching scholarships...")
        }
        _ => None,
    }
}

/// User-facing lines for a successful outcome
fn outcome_lines(flow: &SessionFlow, outcome: &FlowOutcome) -> Vec<String> {
    match outcome {
        FlowOutcome::LoggedIn { display_name } => {
            let mut lines = Vec::new();
            if !display_name.is_empty() {
                lines.push(format!("Welcome, {}!", display_name));
            }
            lines.push("Login successful! Please complete your profile.".to_string());
            lines
        }
        FlowOutcome::Registered { display_name } => {
            let mut lines = Vec::new();
            if !display_name.is_empty() {
                lines.push(format!("Welcome, {}!", display_name));
            }
            lines.push("Account created successfully! Please complete your profile.".to_string());
            lines
        }
        FlowOutcome::MatchesReady(matches) => {
            render::results_lines(flow.session(), matches, today())
        }
        FlowOutcome::FeedbackRecorded { .. } => {
            vec!["Thank you for your feedback! This helps improve our AI matching.".to_string()]
        }
        FlowOutcome::LoggedOut => vec!["You have been logged out successfully".to_string()],
    }
}

fn help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  login <email> <password>".to_string(),
        "  register <name> <email> <password>".to_string(),
        "  profile <age> <country> <education> <gpa> <field-of-study> <financial-need>".to_string(),
        "      e.g. profile 20 USA Undergraduate 3.5 Computer-Science High".to_string(),
        "  feedback <scholarship-id> up|down".to_string(),
        "  matches    show the current match list again".to_string(),
        "  logout".to_string(),
        "  quit".to_string(),
    ]
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
