use std::path::PathBuf;

use clap::{Parser, Subcommand};
use lingovibe_config::language::LanguageConfig;
use lingovibe_types::{AppEvent, Language, LookupRequest};

#[derive(Parser, Debug)]
#[command(
    name = "lingovibe",
    about = "AI dictionary with a personal vocabulary notebook",
    version
)]
pub struct Cli {
    /// Named profile under the user config directory
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Read configuration from a JSON file instead of a profile
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up a word or phrase
    Lookup {
        #[arg(required = true)]
        term: Vec<String>,
        /// Language you speak
        #[arg(long)]
        from: Option<Language>,
        /// Language you are learning
        #[arg(long)]
        to: Option<Language>,
        /// Save the result to the notebook
        #[arg(long)]
        save: bool,
        /// Read the term aloud
        #[arg(long)]
        speak: bool,
        /// Skip the illustration
        #[arg(long)]
        no_image: bool,
    },

    /// Inspect or edit the notebook
    #[command(subcommand)]
    Notebook(NotebookCommand),

    /// Flashcards over the saved words
    Study,

    /// A short story using the saved words
    Story {
        #[arg(long)]
        from: Option<Language>,
        #[arg(long)]
        to: Option<Language>,
    },

    /// Ask follow-up questions about a term
    Chat {
        #[arg(required = true)]
        term: Vec<String>,
    },

    /// Read text aloud
    Speak {
        #[arg(required = true)]
        text: Vec<String>,
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Interactive shell (the default)
    Shell,
}

#[derive(Subcommand, Debug)]
pub enum NotebookCommand {
    /// Show every saved word, newest first
    List,
    /// Remove a saved word by id
    Delete { id: String },
    /// Print whether a term is saved
    ClearCheck { term: String },
}

/// What a command turns into: the events to send first, and whether to keep
/// reading stdin afterwards
#[derive(Debug)]
pub struct Plan {
    pub events: Vec<AppEvent>,
    pub interactive: bool,
}

impl Plan {
    fn once(event: AppEvent) -> Self {
        Self {
            events: vec![event],
            interactive: false,
        }
    }

    fn shell(events: Vec<AppEvent>) -> Self {
        Self {
            events,
            interactive: true,
        }
    }
}

fn pair(
    from: Option<Language>,
    to: Option<Language>,
    defaults: &LanguageConfig,
) -> anyhow::Result<(Language, Language)> {
    let languages = LanguageConfig {
        source: from.unwrap_or(defaults.source),
        target: to.unwrap_or(defaults.target),
    };
    languages.validate().map_err(anyhow::Error::msg)?;
    Ok((languages.source, languages.target))
}

impl Command {
    pub fn plan(self, defaults: &LanguageConfig) -> anyhow::Result<Plan> {
        let plan = match self {
            Command::Lookup {
                term,
                from,
                to,
                save,
                speak,
                no_image,
            } => {
                let (source, target) = pair(from, to, defaults)?;
                Plan::once(AppEvent::Lookup(LookupRequest {
                    term: term.join(" "),
                    source,
                    target,
                    save,
                    speak,
                    with_image: !no_image,
                }))
            }
            Command::Notebook(NotebookCommand::List) => Plan::once(AppEvent::ShowNotebook),
            Command::Notebook(NotebookCommand::Delete { id }) => {
                Plan::once(AppEvent::DeleteWord(id))
            }
            Command::Notebook(NotebookCommand::ClearCheck { term }) => {
                Plan::once(AppEvent::CheckSaved(term))
            }
            Command::Study => Plan::shell(vec![AppEvent::StartStudy]),
            Command::Story { from, to } => {
                let (source, target) = pair(from, to, defaults)?;
                Plan::once(AppEvent::WeaveStory { source, target })
            }
            Command::Chat { term } => Plan::shell(vec![AppEvent::OpenChat {
                term: Some(term.join(" ")),
            }]),
            Command::Speak { text, lang } => Plan::once(AppEvent::Speak {
                text: text.join(" "),
                lang: Some(lang.unwrap_or(defaults.target)),
            }),
            Command::Shell => Plan::shell(vec![AppEvent::Help]),
        };
        Ok(plan)
    }
}
