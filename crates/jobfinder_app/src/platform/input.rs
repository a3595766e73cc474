//! Parsing of interactive commands typed at the prompt.

use jobfinder_core::{AppViewModel, Country, ExperienceBracket, Msg, SourceFilter};

pub const HELP: &str = "\
Commands:
  search [text]        fetch page 1 (optionally setting the search text first)
  filter <text>        narrow the current page by title, company or skill
  source <key|all>     linkedin, naukri, indeed, unstop, adzuna
  country <code|any>   IN, US, GB, CA, AU, DE
  region <name|none>   sub-region (India only)
  exp <bracket|any>    0-1, 1-3, 3-5, 5+
  next | prev | page <n>
  select <n>           show details for row n
  save [n]             toggle saved for row n (or the selected posting)
  saved                list saved posting ids
  show                 redraw
  dismiss              hide the error banner
  health               check the API
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    ShowSaved,
    Redraw,
    Help,
    Quit,
    Invalid(String),
    Empty,
}

pub fn parse_command(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "search" | "s" => {
            let mut msgs = Vec::with_capacity(2);
            if !rest.is_empty() {
                msgs.push(Msg::SearchTextChanged(rest.to_string()));
            }
            msgs.push(Msg::SearchSubmitted);
            Command::Dispatch(msgs)
        }
        "filter" | "f" => Command::Dispatch(vec![Msg::SearchTextChanged(rest.to_string())]),
        "source" => match rest.parse::<SourceFilter>() {
            Ok(source) => Command::Dispatch(vec![Msg::SourceChanged(source)]),
            Err(err) => Command::Invalid(err.to_string()),
        },
        "country" => {
            if is_none_word(rest) {
                return Command::Dispatch(vec![Msg::CountryChanged(None)]);
            }
            match rest.parse::<Country>() {
                Ok(country) => Command::Dispatch(vec![Msg::CountryChanged(Some(country))]),
                Err(err) => Command::Invalid(err.to_string()),
            }
        }
        "region" => {
            if is_none_word(rest) {
                return Command::Dispatch(vec![Msg::RegionChanged(None)]);
            }
            match view.country {
                Some(country) if country.canonical_region(rest).is_some() => {
                    Command::Dispatch(vec![Msg::RegionChanged(Some(rest.to_string()))])
                }
                Some(country) if !country.supports_regions() => {
                    Command::Invalid(format!("{} has no selectable regions", country.name()))
                }
                Some(country) => {
                    Command::Invalid(format!("unknown region for {}: {rest:?}", country.name()))
                }
                None => Command::Invalid("choose a country first".to_string()),
            }
        }
        "exp" | "experience" => match rest.parse::<ExperienceBracket>() {
            Ok(bracket) => Command::Dispatch(vec![Msg::ExperienceChanged(bracket)]),
            Err(err) => Command::Invalid(err.to_string()),
        },
        "next" | "n" => {
            if view.can_go_next {
                Command::Dispatch(vec![Msg::NextPage])
            } else {
                Command::Invalid("still loading".to_string())
            }
        }
        "prev" | "p" => {
            if view.can_go_previous {
                Command::Dispatch(vec![Msg::PreviousPage])
            } else if view.loading {
                Command::Invalid("still loading".to_string())
            } else {
                Command::Invalid("already on the first page".to_string())
            }
        }
        "page" => match rest.parse::<u32>() {
            Ok(page) if page >= 1 && !view.loading => {
                Command::Dispatch(vec![Msg::PageRequested { page }])
            }
            Ok(_) if view.loading => Command::Invalid("still loading".to_string()),
            _ => Command::Invalid(format!("not a page number: {rest:?}")),
        },
        "select" | "sel" => match row_id(rest, view) {
            Ok(job_id) => Command::Dispatch(vec![Msg::JobSelected { job_id }]),
            Err(reason) => Command::Invalid(reason),
        },
        "save" => {
            let target = if rest.is_empty() {
                view.selected
                    .as_ref()
                    .map(|job| job.id.clone())
                    .ok_or_else(|| "nothing selected".to_string())
            } else {
                row_id(rest, view)
            };
            match target {
                Ok(job_id) => Command::Dispatch(vec![Msg::SaveToggled { job_id }]),
                Err(reason) => Command::Invalid(reason),
            }
        }
        "saved" => Command::ShowSaved,
        "show" | "ls" => Command::Redraw,
        "dismiss" => Command::Dispatch(vec![Msg::ErrorDismissed]),
        "health" => Command::Dispatch(vec![Msg::HealthCheckRequested]),
        "help" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command {other:?}; type `help`")),
    }
}

fn is_none_word(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "" | "any" | "none")
}

/// Maps a 1-based row number of the visible list to a posting id.
fn row_id(arg: &str, view: &AppViewModel) -> Result<String, String> {
    let index: usize = arg
        .parse()
        .map_err(|_| format!("not a row number: {arg:?}"))?;
    index
        .checked_sub(1)
        .and_then(|i| view.jobs.get(i))
        .map(|row| row.id.clone())
        .ok_or_else(|| format!("no row {index} ({} shown)", view.jobs.len()))
}
