//! Interactive lesson walkthrough on stdin/stdout.

use civic_core::model::{Answer, Language, LessonId, Question};
use services::{AppServices, LessonFlowService, LessonSession, LessonStep};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

const HELP: &str = "commands: n(ext)  b(ack)  a <question> <answer>  s(ubmit)  r <reflection>  done  q(uit)";

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Next,
    Back,
    Answer { question: usize, raw: String },
    Submit,
    Reflect(String),
    Done,
    Quit,
    Help,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (head, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match head {
        "n" | "next" | "" => Input::Next,
        "b" | "back" => Input::Back,
        "s" | "submit" => Input::Submit,
        "done" => Input::Done,
        "q" | "quit" => Input::Quit,
        "?" | "h" | "help" => Input::Help,
        "r" | "reflect" => Input::Reflect(rest.to_owned()),
        "a" | "answer" => {
            let (index, raw) = rest.split_once(' ').unwrap_or((rest, ""));
            match index.parse::<usize>() {
                Ok(question) if question > 0 => Input::Answer {
                    question: question - 1,
                    raw: raw.trim().to_owned(),
                },
                _ => Input::Unknown(line.to_owned()),
            }
        }
        _ => Input::Unknown(line.to_owned()),
    }
}

/// Options are entered 1-based; true/false accepts English and Arabic words.
fn parse_answer(question: &Question, raw: &str) -> Option<Answer> {
    match question {
        Question::MultipleChoice { .. } => raw
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .map(|n| Answer::Choice(n - 1)),
        Question::TrueFalse { .. } => match raw.to_lowercase().as_str() {
            "t" | "true" | "صح" => Some(Answer::Truth(true)),
            "f" | "false" | "خطأ" => Some(Answer::Truth(false)),
            _ => None,
        },
    }
}

fn render(session: &LessonSession, language: Language) {
    let lesson = session.lesson();
    let (current, total) = session.position();
    println!();
    println!("── {} [{current}/{total}] {} ──", lesson.id, session.step());
    match session.step() {
        LessonStep::Overview => {
            println!("{}", lesson.title.get(language));
            println!("{} · {} min · {}", lesson.level.label(), lesson.duration_min, lesson.category);
            for outcome in &lesson.learning_outcomes {
                println!("  • {outcome}");
            }
        }
        LessonStep::Content(index) => {
            if let Some(text) = lesson.sections.get(index) {
                println!("{text}");
            }
        }
        LessonStep::Scenario => println!("{}", lesson.scenario),
        LessonStep::Quiz => {
            for (index, question) in lesson.questions.iter().enumerate() {
                let answered = match session.answers().get(index) {
                    Some(Answer::Choice(option)) => format!(" [answered: {}]", option + 1),
                    Some(Answer::Truth(value)) => format!(" [answered: {value}]"),
                    None => String::new(),
                };
                println!("{}. {}{answered}", index + 1, question.text());
                match question {
                    Question::MultipleChoice { options, .. } => {
                        for (n, option) in options.iter().enumerate() {
                            println!("     {}) {option}", n + 1);
                        }
                    }
                    Question::TrueFalse { .. } => println!("     true / false"),
                }
            }
        }
        LessonStep::Scored => {
            if let Some(outcome) = session.outcome() {
                println!("score: {}/{}", outcome.score, outcome.total);
                for item in &outcome.feedback {
                    let mark = if item.correct { "✓" } else { "✗" };
                    println!("  {mark} {}. {}", item.index + 1, item.explanation);
                }
            }
        }
        LessonStep::Reflection => {
            for prompt in lesson.reflection_prompts.get(language) {
                println!("  ? {prompt}");
            }
            println!("task: {}", lesson.mini_task.title);
            for step in &lesson.mini_task.steps {
                println!("  - {step}");
            }
            if !session.reflection().is_empty() {
                println!("your reflection: {}", session.reflection());
            }
        }
        LessonStep::Complete => println!("lesson complete"),
    }
}

async fn handle(
    lessons: &LessonFlowService,
    session: &mut LessonSession,
    input: Input,
) -> Result<bool, Box<dyn std::error::Error>> {
    match input {
        Input::Next => {
            session.advance()?;
        }
        Input::Back => {
            session.back()?;
        }
        Input::Answer { question, raw } => {
            let answer = session
                .lesson()
                .questions
                .get(question)
                .and_then(|q| parse_answer(q, &raw))
                .ok_or_else(|| format!("cannot read answer {raw:?} for question {}", question + 1))?;
            session.answer(question, answer)?;
        }
        Input::Submit => {
            session.submit_quiz()?;
        }
        Input::Reflect(text) => {
            lessons.save_reflection(session, text).await?;
            println!("reflection saved");
        }
        Input::Done => {
            let completion = lessons.complete(session).await?;
            println!(
                "completed {} with {}/{}; unit {}: {}/{} ({:.0}%)",
                completion.lesson_id,
                completion.outcome.score,
                completion.outcome.total,
                completion.unit_progress.unit_id,
                completion.unit_progress.completed_count,
                completion.unit_progress.total_count,
                completion.unit_progress.percent
            );
            return Ok(false);
        }
        Input::Quit => return Ok(false),
        Input::Help => println!("{HELP}"),
        Input::Unknown(line) => println!("unknown command: {line}\n{HELP}"),
    }
    Ok(true)
}

/// Drive one session until it completes, the learner quits, or stdin closes.
pub async fn run(
    app: &AppServices,
    lesson_id: &LessonId,
    language: Language,
) -> Result<(), Box<dyn std::error::Error>> {
    let lessons = app.lessons();
    let mut session = lessons.start(lesson_id).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{HELP}");
    render(&session, language);
    while let Some(line) = lines.next_line().await? {
        let before = session.step();
        match handle(&lessons, &mut session, parse_input(&line)).await {
            Ok(true) => {}
            Ok(false) => return Ok(()),
            Err(err) => {
                warn!(error = %err, step = %before, "lesson command failed");
                println!("! {err}");
                continue;
            }
        }
        if session.step() != before {
            render(&session, language);
        }
    }
    Ok(())
}
