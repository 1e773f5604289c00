use lingovibe_types::{AppEvent, Language, LookupRequest, StudyAction};

use crate::events::Session;

/// Turn a typed line into an event, depending on which mode the session is in.
///
/// `Ok(None)` means there is nothing to do. `Err` carries a usage message.
pub fn interpret(line: &str, session: &Session) -> Result<Option<AppEvent>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if session.chat.is_some() {
        let event = match line {
            "/exit" => AppEvent::CloseChat,
            "/quit" => AppEvent::Shutdown,
            text => AppEvent::ChatInput(text.to_string()),
        };
        return Ok(Some(event));
    }

    if session.study.is_some() {
        return study_key(line).map(|action| Some(AppEvent::Study(action)));
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match verb.to_lowercase().as_str() {
        "save" => AppEvent::SaveCurrent,
        "list" | "notebook" => AppEvent::ShowNotebook,
        "delete" | "rm" => {
            if rest.is_empty() {
                return Err("Usage: delete <id>".to_string());
            }
            AppEvent::DeleteWord(rest.to_string())
        }
        "saved" => {
            if rest.is_empty() {
                return Err("Usage: saved <term>".to_string());
            }
            AppEvent::CheckSaved(rest.to_string())
        }
        "study" => AppEvent::StartStudy,
        "story" => AppEvent::WeaveStory {
            source: session.source,
            target: session.target,
        },
        "chat" => AppEvent::OpenChat {
            term: (!rest.is_empty()).then(|| rest.to_string()),
        },
        "speak" => speak(rest, session)?,
        "lang" => languages(rest)?,
        "lookup" => {
            if rest.is_empty() {
                return Err("Usage: lookup <term>".to_string());
            }
            lookup(rest, session)
        }
        "help" | "?" => AppEvent::Help,
        "quit" | "exit" => AppEvent::Shutdown,
        _ => lookup(line, session),
    };

    Ok(Some(event))
}

fn study_key(line: &str) -> Result<StudyAction, String> {
    match line.to_lowercase().as_str() {
        "f" | "flip" => Ok(StudyAction::Flip),
        "n" | "next" => Ok(StudyAction::Next),
        "s" => Ok(StudyAction::SpeakTerm),
        "e" => Ok(StudyAction::SpeakExample),
        "q" | "quit" | "exit" => Ok(StudyAction::Exit),
        other => Err(format!(
            "Unknown key '{}'. f flip, n next, s speak term, e speak example, q quit",
            other
        )),
    }
}

fn lookup(term: &str, session: &Session) -> AppEvent {
    AppEvent::Lookup(LookupRequest {
        term: term.to_string(),
        source: session.source,
        target: session.target,
        save: false,
        speak: false,
        with_image: true,
    })
}

fn speak(rest: &str, session: &Session) -> Result<AppEvent, String> {
    if let (Ok(n), Some(current)) = (rest.parse::<usize>(), session.current.as_ref()) {
        let examples = &current.result.examples;
        return match n.checked_sub(1).and_then(|i| examples.get(i)) {
            Some(example) => Ok(AppEvent::Speak {
                text: example.target.clone(),
                lang: Some(current.target),
            }),
            None => Err(format!(
                "No example {n}. '{}' has {} example(s)",
                current.result.term,
                examples.len()
            )),
        };
    }

    if !rest.is_empty() {
        return Ok(AppEvent::Speak {
            text: rest.to_string(),
            lang: None,
        });
    }

    match session.current.as_ref() {
        Some(current) => Ok(AppEvent::Speak {
            text: current.result.term.clone(),
            lang: Some(current.target),
        }),
        None => Err("Nothing to speak yet. Look up a word first.".to_string()),
    }
}

fn languages(rest: &str) -> Result<AppEvent, String> {
    let mut parts = rest.split_whitespace();
    let (Some(source), Some(target), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Usage: lang <source> <target>, e.g. lang en ja".to_string());
    };

    let source: Language = source.parse().map_err(|e| format!("{}", e))?;
    let target: Language = target.parse().map_err(|e| format!("{}", e))?;
    Ok(AppEvent::SetLanguages { source, target })
}
