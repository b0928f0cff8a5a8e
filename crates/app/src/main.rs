use std::fmt;
use std::path::PathBuf;

use civic_core::model::{
    DecisionDraft, DecisionStatus, FeedbackDraft, Language, LessonId, MeetingDraft, UnitId,
};
use civic_core::toolkit::Templates;
use services::{AppServices, Clock, TextGenerator};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

mod study;
mod views;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArgument { what: &'static str },
    UnknownArg(String),
    UnknownSubcommand(String),
    InvalidDbUrl { raw: String },
    InvalidLanguage { raw: String },
    InvalidId { raw: String },
    InvalidAssistKind { raw: String },
    InvalidNumber { raw: String },
    InvalidTool { raw: String },
    UnexpectedFlag { flag: &'static str, command: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { what } => write!(f, "missing {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownSubcommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidLanguage { raw } => {
                write!(f, "invalid language: {raw} (expected ar or en)")
            }
            ArgsError::InvalidId { raw } => write!(f, "invalid id: {raw:?}"),
            ArgsError::InvalidAssistKind { raw } => {
                write!(f, "invalid assist kind: {raw} (expected insight, summary or explain)")
            }
            ArgsError::InvalidNumber { raw } => write!(f, "expected a number from 1: {raw:?}"),
            ArgsError::InvalidTool { raw } => {
                write!(f, "unknown tool: {raw} (expected agenda, budget, matrix or survey)")
            }
            ArgsError::UnexpectedFlag { flag, command } => {
                write!(f, "{flag} cannot be used with {command}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  civic units                                  list units with progress");
    eprintln!("  civic lessons <unit>                         list lessons of a unit");
    eprintln!("  civic study <lesson>                         walk through a lesson");
    eprintln!("  civic assist <lesson> insight|summary|explain");
    eprintln!("  civic library [<item> [summary|explain <section>]]");
    eprintln!("  civic ask <question>                         ask the library");
    eprintln!("  civic toolkit [agenda <objective>|budget|matrix|survey]");
    eprintln!("  civic chat <message>                         talk to the assistant");
    eprintln!("  civic meetings                               list recorded meetings");
    eprintln!("  civic meetings add <title> [--attendee <name>] [--agenda <item>]");
    eprintln!("                             [--decision <text>[|owner[|deadline]]]");
    eprintln!("  civic meetings done|reopen <meeting> <decision>");
    eprintln!("  civic meetings delete <meeting>");
    eprintln!("  civic feedback                               list submitted feedback");
    eprintln!("  civic feedback send <message> [--category <name>] [--named]");
    eprintln!("  civic lang ar|en                             store the interface language");
    eprintln!("  civic reset                                  erase all local data");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --db <sqlite_url>      default sqlite://civic.sqlite3");
    eprintln!("  --lang ar|en           language for this run");
    eprintln!("  --catalog <file.json>  custom lesson catalog");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CIVIC_DB_URL, CIVIC_LANG, CIVIC_CATALOG, RUST_LOG");
    eprintln!("  CIVIC_AI_API_KEY, CIVIC_AI_BASE_URL, CIVIC_AI_MODEL, CIVIC_AI_SYSTEM_PROMPT");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssistKind {
    Insight,
    Summary,
    Explain,
}

impl AssistKind {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "insight" => Some(Self::Insight),
            "summary" => Some(Self::Summary),
            "explain" => Some(Self::Explain),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LibraryAssist {
    Summary,
    /// 0-based section index.
    Explain(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ToolRequest {
    Agenda(String),
    Budget,
    Matrix,
    Survey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Units,
    Lessons(UnitId),
    Study(LessonId),
    Assist(LessonId, AssistKind),
    Library,
    LibraryItem(String),
    LibraryAssist(String, LibraryAssist),
    Ask(String),
    Toolkit,
    Tool(ToolRequest),
    Chat(String),
    Meetings,
    RecordMeeting(MeetingDraft),
    DecisionStatus {
        meeting: Uuid,
        decision: usize,
        status: DecisionStatus,
    },
    DeleteMeeting(Uuid),
    Feedback,
    SendFeedback(FeedbackDraft),
    Lang(Language),
    Reset,
}

/// Options that only apply to `meetings add` and `feedback send`.
#[derive(Debug, Default)]
struct DraftFlags {
    attendees: Vec<String>,
    agenda: Vec<String>,
    decisions: Vec<DecisionDraft>,
    category: Option<String>,
    named: bool,
    seen: Vec<&'static str>,
}

impl DraftFlags {
    /// Fails on any flag outside `allowed`; the accepted ones are consumed.
    fn accept(&mut self, allowed: &[&str], command: &str) -> Result<(), ArgsError> {
        if let Some(&flag) = self.seen.iter().find(|&&flag| !allowed.contains(&flag)) {
            return Err(ArgsError::UnexpectedFlag {
                flag,
                command: command.to_string(),
            });
        }
        self.seen.clear();
        Ok(())
    }
}

/// `text|owner|deadline`, with owner and deadline optional.
fn parse_decision(raw: &str) -> DecisionDraft {
    let mut parts = raw.splitn(3, '|');
    DecisionDraft {
        text: parts.next().unwrap_or_default().to_string(),
        owner: parts.next().unwrap_or_default().to_string(),
        deadline: parts.next().map(str::to_string),
        status: None,
    }
}

#[derive(Debug)]
struct Args {
    command: Command,
    db_url: String,
    language: Option<Language>,
    catalog: Option<PathBuf>,
}

fn parse_language(raw: String) -> Result<Language, ArgsError> {
    raw.parse().map_err(|_| ArgsError::InvalidLanguage { raw })
}

fn next_positional<T: std::str::FromStr>(
    positionals: &mut impl Iterator<Item = String>,
    what: &'static str,
) -> Result<T, ArgsError> {
    let raw = positionals
        .next()
        .ok_or(ArgsError::MissingArgument { what })?;
    raw.parse().map_err(|_| ArgsError::InvalidId { raw })
}

/// 1-based number on the command line, returned 0-based.
fn next_index(
    positionals: &mut impl Iterator<Item = String>,
    what: &'static str,
) -> Result<usize, ArgsError> {
    let raw = positionals
        .next()
        .ok_or(ArgsError::MissingArgument { what })?;
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ArgsError::InvalidNumber { raw }),
    }
}

/// Every remaining positional joined by spaces; blank counts as missing.
fn rest_text(
    positionals: &mut impl Iterator<Item = String>,
    what: &'static str,
) -> Result<String, ArgsError> {
    let text = positionals.collect::<Vec<_>>().join(" ");
    if text.trim().is_empty() {
        return Err(ArgsError::MissingArgument { what });
    }
    Ok(text)
}

impl Args {
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("CIVIC_DB_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| "sqlite://civic.sqlite3".into(), normalize_sqlite_url);
        let mut language = std::env::var("CIVIC_LANG")
            .ok()
            .map(parse_language)
            .transpose()?;
        let mut catalog = std::env::var_os("CIVIC_CATALOG").map(PathBuf::from);

        let mut drafts = DraftFlags::default();
        let mut positionals = Vec::new();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--lang" => language = Some(parse_language(require_value(&mut args, "--lang")?)?),
                "--catalog" => catalog = Some(PathBuf::from(require_value(&mut args, "--catalog")?)),
                "--attendee" => {
                    drafts.attendees.push(require_value(&mut args, "--attendee")?);
                    drafts.seen.push("--attendee");
                }
                "--agenda" => {
                    drafts.agenda.push(require_value(&mut args, "--agenda")?);
                    drafts.seen.push("--agenda");
                }
                "--decision" => {
                    let raw = require_value(&mut args, "--decision")?;
                    drafts.decisions.push(parse_decision(&raw));
                    drafts.seen.push("--decision");
                }
                "--category" => {
                    drafts.category = Some(require_value(&mut args, "--category")?);
                    drafts.seen.push("--category");
                }
                "--named" => {
                    drafts.named = true;
                    drafts.seen.push("--named");
                }
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positionals.push(arg),
            }
        }

        let mut positionals = positionals.into_iter();
        let subcommand = positionals
            .next()
            .ok_or(ArgsError::MissingArgument { what: "subcommand" })?;
        let command = match subcommand.as_str() {
            "units" => Command::Units,
            "lessons" => Command::Lessons(next_positional(&mut positionals, "unit id")?),
            "study" => Command::Study(next_positional(&mut positionals, "lesson id")?),
            "assist" => {
                let lesson = next_positional(&mut positionals, "lesson id")?;
                let raw = positionals
                    .next()
                    .ok_or(ArgsError::MissingArgument { what: "assist kind" })?;
                let kind =
                    AssistKind::from_arg(&raw).ok_or(ArgsError::InvalidAssistKind { raw })?;
                Command::Assist(lesson, kind)
            }
            "library" => match positionals.next() {
                None => Command::Library,
                Some(item) => match positionals.next().as_deref() {
                    None => Command::LibraryItem(item),
                    Some("summary") => Command::LibraryAssist(item, LibraryAssist::Summary),
                    Some("explain") => {
                        let section = next_index(&mut positionals, "section number")?;
                        Command::LibraryAssist(item, LibraryAssist::Explain(section))
                    }
                    Some(other) => return Err(ArgsError::InvalidAssistKind { raw: other.into() }),
                },
            },
            "ask" => Command::Ask(rest_text(&mut positionals, "question")?),
            "toolkit" => match positionals.next().as_deref() {
                None => Command::Toolkit,
                Some("agenda") => Command::Tool(ToolRequest::Agenda(rest_text(
                    &mut positionals,
                    "meeting objective",
                )?)),
                Some("budget") => Command::Tool(ToolRequest::Budget),
                Some("matrix") => Command::Tool(ToolRequest::Matrix),
                Some("survey") => Command::Tool(ToolRequest::Survey),
                Some(other) => return Err(ArgsError::InvalidTool { raw: other.into() }),
            },
            "chat" => Command::Chat(rest_text(&mut positionals, "message")?),
            "meetings" => match positionals.next().as_deref() {
                None => Command::Meetings,
                Some("add") => {
                    drafts.accept(&["--attendee", "--agenda", "--decision"], "meetings add")?;
                    Command::RecordMeeting(MeetingDraft {
                        title: positionals.by_ref().collect::<Vec<_>>().join(" "),
                        attendees: std::mem::take(&mut drafts.attendees),
                        agenda: std::mem::take(&mut drafts.agenda),
                        decisions: std::mem::take(&mut drafts.decisions),
                    })
                }
                Some(action @ ("done" | "reopen")) => {
                    let status = if action == "done" {
                        DecisionStatus::Completed
                    } else {
                        DecisionStatus::Pending
                    };
                    Command::DecisionStatus {
                        meeting: next_positional(&mut positionals, "meeting id")?,
                        decision: next_index(&mut positionals, "decision number")?,
                        status,
                    }
                }
                Some("delete") => {
                    Command::DeleteMeeting(next_positional(&mut positionals, "meeting id")?)
                }
                Some(other) => return Err(ArgsError::UnknownSubcommand(format!("meetings {other}"))),
            },
            "feedback" => match positionals.next().as_deref() {
                None => Command::Feedback,
                Some("send") => {
                    drafts.accept(&["--category", "--named"], "feedback send")?;
                    let defaults = FeedbackDraft::default();
                    Command::SendFeedback(FeedbackDraft {
                        category: drafts.category.take().unwrap_or(defaults.category),
                        message: rest_text(&mut positionals, "feedback message")?,
                        is_anonymous: !drafts.named,
                    })
                }
                Some(other) => return Err(ArgsError::UnknownSubcommand(format!("feedback {other}"))),
            },
            "lang" => {
                let raw = positionals
                    .next()
                    .ok_or(ArgsError::MissingArgument { what: "language" })?;
                Command::Lang(parse_language(raw)?)
            }
            "reset" => Command::Reset,
            _ => return Err(ArgsError::UnknownSubcommand(subcommand)),
        };
        drafts.accept(&[], &subcommand)?;
        if let Some(extra) = positionals.next() {
            return Err(ArgsError::UnknownArg(extra));
        }

        Ok(Self {
            command,
            db_url,
            language,
            catalog,
        })
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    if argv.is_empty() || argv.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_usage();
        return Ok(());
    }

    let parsed = Args::parse(argv).map_err(|e| {
        print_usage();
        e
    })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let app =
        AppServices::bootstrap(&parsed.db_url, Clock::system(), parsed.catalog.as_deref()).await?;

    let language = match parsed.language {
        Some(language) => language,
        None => app.preferences().language().await?,
    };

    match parsed.command {
        Command::Units => {
            for item in app.lessons().unit_overview().await? {
                println!(
                    "{:<4} {:>3.0}%  {}/{}  {}",
                    item.unit.id,
                    item.summary.percent,
                    item.summary.completed_count,
                    item.summary.total_count,
                    item.unit.title.get(language)
                );
            }
            let overall = app.lessons().overall_progress().await?;
            println!(
                "overall: {}/{} lessons ({:.0}%)",
                overall.completed_count, overall.total_count, overall.percent
            );
        }
        Command::Lessons(unit_id) => {
            let summary = app.lessons().unit_progress(&unit_id).await?;
            let progress = app.progress().load().await?;
            for lesson in app.catalog().get_lessons_for_unit(&unit_id) {
                let record = progress.get(&lesson.id);
                let mark = if record.is_some_and(|p| p.completed) { "x" } else { " " };
                let score = record
                    .and_then(|p| p.quiz_score)
                    .map(|s| format!(" score {s}/{}", lesson.question_count()))
                    .unwrap_or_default();
                println!(
                    "[{mark}] {:<6} {:<9} {:>2} min  {}{score}",
                    lesson.id,
                    lesson.level.label(),
                    lesson.duration_min,
                    lesson.title.get(language)
                );
            }
            println!(
                "{}/{} completed ({:.0}%)",
                summary.completed_count, summary.total_count, summary.percent
            );
        }
        Command::Study(lesson_id) => {
            study::run(&app, &lesson_id, language).await?;
        }
        Command::Assist(lesson_id, kind) => {
            let catalog = app.catalog();
            let lesson = catalog.get_lesson(&lesson_id)?;
            let assist = app.assist();
            let result = match kind {
                AssistKind::Insight => assist.lesson_insight(lesson, language).await,
                AssistKind::Summary => assist.lesson_summary(lesson, language).await,
                AssistKind::Explain => assist.lesson_explanation(lesson, language).await,
            };
            views::print_generated(result, language);
        }
        Command::Library => views::library(&app.library(), language),
        Command::LibraryItem(id) => views::library_item(app.library().get(&id)?, language),
        Command::LibraryAssist(id, kind) => {
            let library = app.library();
            let item = library.get(&id)?;
            let assist = app.assist();
            let result = match kind {
                LibraryAssist::Summary => assist.library_summary(item, language).await,
                LibraryAssist::Explain(index) => {
                    let section = item.section(index, language)?;
                    println!("{section}");
                    println!();
                    assist.explain_section(section, language).await
                }
            };
            views::print_generated(result, language);
        }
        Command::Ask(question) => {
            let result = app.assist().ask_library(&app.library(), &question, language).await;
            views::print_generated(result, language);
        }
        Command::Toolkit => views::toolkit(&Templates::default(), language),
        Command::Tool(request) => {
            let templates = Templates::default();
            let assist = app.assist();
            let result = match request {
                ToolRequest::Agenda(objective) => assist.agenda(&objective, language).await,
                ToolRequest::Budget => {
                    views::budget(&templates);
                    println!();
                    assist.budget_review(&templates.budget, language).await
                }
                ToolRequest::Matrix => assist.priority_matrix(&templates.matrix, language).await,
                ToolRequest::Survey => assist.survey_questions(language).await,
            };
            views::print_generated(result, language);
        }
        Command::Chat(message) => {
            views::print_generated(app.assist().chat(&message, language).await, language);
        }
        Command::Meetings => {
            let meetings = app.meetings().list().await?;
            if meetings.is_empty() {
                println!("no meetings recorded");
            }
            for meeting in &meetings {
                views::meeting(meeting);
            }
        }
        Command::RecordMeeting(draft) => {
            let meeting = app.meetings().record(draft, language).await?;
            views::meeting(&meeting);
        }
        Command::DecisionStatus {
            meeting,
            decision,
            status,
        } => {
            let meeting = app
                .meetings()
                .set_decision_status(meeting, decision, status)
                .await?;
            views::meeting(&meeting);
        }
        Command::DeleteMeeting(meeting) => {
            app.meetings().delete(meeting).await?;
            println!("meeting {meeting} deleted");
        }
        Command::Feedback => {
            for item in app.feedback().list().await? {
                views::feedback(&item);
            }
        }
        Command::SendFeedback(draft) => {
            let item = app.feedback().submit(draft).await?;
            views::feedback(&item);
        }
        Command::Lang(language) => {
            app.preferences().set_language(language).await?;
            println!("language set to {}", language.english_name());
        }
        Command::Reset => {
            app.preferences().reset_all().await?;
            println!("all local data erased");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn parses_subcommands_and_flags_in_any_order() {
        let parsed = Args::parse(args(&["--lang", "en", "study", "U1L1", "--db", "sqlite::memory:"]))
            .unwrap();
        assert_eq!(parsed.command, Command::Study(LessonId::new("U1L1")));
        assert_eq!(parsed.language, Some(Language::En));
        assert_eq!(parsed.db_url, "sqlite::memory:");

        let parsed = Args::parse(args(&["assist", "U2L3", "summary"])).unwrap();
        assert_eq!(
            parsed.command,
            Command::Assist(LessonId::new("U2L3"), AssistKind::Summary)
        );
    }

    #[test]
    fn parses_library_and_toolkit_commands() {
        assert_eq!(Args::parse(args(&["library"])).unwrap().command, Command::Library);
        assert_eq!(
            Args::parse(args(&["library", "lib3", "explain", "2"])).unwrap().command,
            Command::LibraryAssist("lib3".into(), LibraryAssist::Explain(1))
        );
        assert_eq!(
            Args::parse(args(&["ask", "who", "audits", "budgets?"])).unwrap().command,
            Command::Ask("who audits budgets?".into())
        );
        assert_eq!(
            Args::parse(args(&["toolkit", "agenda", "water", "repairs"])).unwrap().command,
            Command::Tool(ToolRequest::Agenda("water repairs".into()))
        );
        assert_eq!(
            Args::parse(args(&["toolkit", "matrix"])).unwrap().command,
            Command::Tool(ToolRequest::Matrix)
        );
        assert_eq!(
            Args::parse(args(&["chat", "--lang", "ar", "hello", "there"])).unwrap().command,
            Command::Chat("hello there".into())
        );
    }

    #[test]
    fn parses_meeting_and_feedback_commands() {
        let parsed = Args::parse(args(&[
            "meetings", "add", "Water", "committee",
            "--attendee", "Rana",
            "--agenda", "pump repair",
            "--decision", "Call the council|Rana|Friday",
        ]))
        .unwrap();
        assert_eq!(
            parsed.command,
            Command::RecordMeeting(MeetingDraft {
                title: "Water committee".into(),
                attendees: vec!["Rana".into()],
                agenda: vec!["pump repair".into()],
                decisions: vec![DecisionDraft {
                    text: "Call the council".into(),
                    owner: "Rana".into(),
                    deadline: Some("Friday".into()),
                    status: None,
                }],
            })
        );

        let id = Uuid::new_v4();
        assert_eq!(
            Args::parse(args(&["meetings", "done", &id.to_string(), "1"])).unwrap().command,
            Command::DecisionStatus {
                meeting: id,
                decision: 0,
                status: DecisionStatus::Completed,
            }
        );
        assert_eq!(
            Args::parse(args(&["meetings", "delete", &id.to_string()])).unwrap().command,
            Command::DeleteMeeting(id)
        );

        assert_eq!(
            Args::parse(args(&["feedback", "send", "more", "lights", "--category", "services"]))
                .unwrap()
                .command,
            Command::SendFeedback(FeedbackDraft {
                category: "services".into(),
                message: "more lights".into(),
                is_anonymous: true,
            })
        );
        assert_eq!(Args::parse(args(&["feedback"])).unwrap().command, Command::Feedback);
    }

    #[test]
    fn rejects_bad_community_input() {
        assert!(matches!(
            Args::parse(args(&["chat"])),
            Err(ArgsError::MissingArgument { what: "message" })
        ));
        assert!(matches!(
            Args::parse(args(&["meetings", "done", "not-a-uuid", "1"])),
            Err(ArgsError::InvalidId { .. })
        ));
        assert!(matches!(
            Args::parse(args(&["meetings", "done", &Uuid::new_v4().to_string(), "0"])),
            Err(ArgsError::InvalidNumber { .. })
        ));
        assert!(matches!(
            Args::parse(args(&["units", "--named"])),
            Err(ArgsError::UnexpectedFlag { flag: "--named", .. })
        ));
        assert!(matches!(
            Args::parse(args(&["feedback", "send", "hi", "--attendee", "x"])),
            Err(ArgsError::UnexpectedFlag { flag: "--attendee", .. })
        ));
        assert!(matches!(
            Args::parse(args(&["toolkit", "poster"])),
            Err(ArgsError::InvalidTool { .. })
        ));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            Args::parse(args(&["lessons"])),
            Err(ArgsError::MissingArgument { .. })
        ));
        assert!(matches!(
            Args::parse(args(&["lang", "fr"])),
            Err(ArgsError::InvalidLanguage { .. })
        ));
        assert!(matches!(
            Args::parse(args(&["units", "--verbose"])),
            Err(ArgsError::UnknownArg(_))
        ));
        assert!(matches!(
            Args::parse(args(&["units", "--db"])),
            Err(ArgsError::MissingValue { flag: "--db" })
        ));
        assert!(matches!(
            Args::parse(args(&["assist", "U1L1", "poem"])),
            Err(ArgsError::InvalidAssistKind { .. })
        ));
    }

    #[test]
    fn relative_sqlite_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/civic.db".into());
        assert!(url.starts_with("sqlite:///"));
        assert!(url.ends_with("data/civic.db"));
        assert_eq!(
            normalize_sqlite_url("sqlite::memory:".into()),
            "sqlite::memory:"
        );
    }
}
