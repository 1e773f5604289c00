use clap::Parser;
use lingovibe_config::language::LanguageConfig;
use lingovibe_types::{AppEvent, Language};

use crate::cli::{Cli, Command};

fn plan(args: &[&str]) -> anyhow::Result<crate::cli::Plan> {
    let cli = Cli::try_parse_from(args)?;
    cli.command
        .unwrap_or(Command::Shell)
        .plan(&LanguageConfig::default())
}

#[test]
fn lookup_joins_words_and_reads_flags() {
    let plan = plan(&[
        "lingovibe", "lookup", "buenos", "días", "--to", "ja", "--save", "--no-image",
    ])
    .unwrap();

    assert!(!plan.interactive);
    match &plan.events[..] {
        [AppEvent::Lookup(req)] => {
            assert_eq!(req.term, "buenos días");
            assert_eq!(req.source, Language::English);
            assert_eq!(req.target, Language::Japanese);
            assert!(req.save);
            assert!(!req.speak);
            assert!(!req.with_image);
        }
        other => panic!("Unexpected plan {:?}", other),
    }
}

#[test]
fn identical_languages_are_rejected() {
    assert!(plan(&["lingovibe", "lookup", "hola", "--from", "es"]).is_err());
}

#[test]
fn notebook_subcommands() {
    let p = plan(&["lingovibe", "notebook", "delete", "abc"]).unwrap();
    assert!(matches!(&p.events[..], [AppEvent::DeleteWord(id)] if id == "abc"));

    let p = plan(&["lingovibe", "notebook", "clear-check", "mesa"]).unwrap();
    assert!(matches!(&p.events[..], [AppEvent::CheckSaved(t)] if t == "mesa"));

    let p = plan(&["lingovibe", "notebook", "list"]).unwrap();
    assert!(matches!(&p.events[..], [AppEvent::ShowNotebook]));
}

#[test]
fn interactive_commands_keep_reading() {
    assert!(plan(&["lingovibe"]).unwrap().interactive);
    assert!(plan(&["lingovibe", "study"]).unwrap().interactive);

    let p = plan(&["lingovibe", "chat", "buenos", "días"]).unwrap();
    assert!(p.interactive);
    assert!(matches!(&p.events[..], [AppEvent::OpenChat { term: Some(t) }] if t == "buenos días"));
}

#[test]
fn speak_defaults_to_target_language() {
    let p = plan(&["lingovibe", "speak", "hola"]).unwrap();
    assert!(matches!(
        &p.events[..],
        [AppEvent::Speak { text, lang: Some(Language::Spanish) }] if text == "hola"
    ));
}

#[test]
fn global_flags_parse_after_subcommand() {
    let cli =
        Cli::try_parse_from(["lingovibe", "study", "--profile", "work", "--log-json"]).unwrap();
    assert_eq!(cli.profile.as_deref(), Some("work"));
    assert!(cli.log_json);
}
