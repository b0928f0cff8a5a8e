//! Plain-text rendering for the non-lesson screens.

use civic_core::model::{DecisionStatus, Feedback, Language, Meeting};
use civic_core::toolkit::{self, Templates, Tool};
use civic_core::{Library, LibraryItem};
use services::AssistError;

/// Generated text, or the localized failure message in its place.
pub fn print_generated(result: Result<String, AssistError>, language: Language) {
    match result {
        Ok(text) => println!("{text}"),
        Err(err) => println!("{}", err.user_message(language)),
    }
}

pub fn library(library: &Library, language: Language) {
    for item in library.items() {
        println!(
            "{:<5} {:<8} {}",
            item.id,
            item.kind.label(),
            item.title.get(language)
        );
        println!("      {}", item.description.get(language));
    }
}

pub fn library_item(item: &LibraryItem, language: Language) {
    println!("{} ({})", item.title.get(language), item.kind.label());
    println!("{}", item.description.get(language));
    for (index, section) in item.content.get(language).iter().enumerate() {
        println!();
        println!("[{}] {section}", index + 1);
    }
}

pub fn toolkit(templates: &Templates, language: Language) {
    for tool in Tool::ALL {
        println!("{:<7} {}", tool.id(), tool.title().get(language));
    }

    println!();
    println!("agenda ({} min):", toolkit::agenda_minutes(&templates.agenda));
    for item in &templates.agenda {
        println!("  {:>3} min  {}", item.minutes, item.topic);
    }
    budget(templates);
    println!("priorities:");
    for item in &templates.matrix {
        println!(
            "  impact {:<6} effort {:<6} {}",
            item.impact.label(),
            item.effort.label(),
            item.activity
        );
    }
    println!("survey:");
    for (index, question) in templates.survey.iter().enumerate() {
        println!("  {}. {}", index + 1, question.text());
    }
}

pub fn budget(templates: &Templates) {
    println!("budget ({} total):", toolkit::budget_total(&templates.budget));
    for item in &templates.budget {
        println!(
            "  {:>3} x {:>4} = {:>5}  {}",
            item.qty,
            item.cost,
            item.total(),
            item.name
        );
    }
}

pub fn meeting(meeting: &Meeting) {
    println!(
        "{}  {}  {}",
        meeting.id,
        meeting.date.format("%Y-%m-%d"),
        meeting.title
    );
    if !meeting.attendees.is_empty() {
        println!("  attendees: {}", meeting.attendees.join(", "));
    }
    for item in &meeting.agenda {
        println!("  - {item}");
    }
    for (index, decision) in meeting.decisions.iter().enumerate() {
        let mark = match decision.status {
            DecisionStatus::Completed => "x",
            DecisionStatus::Pending => " ",
        };
        let mut detail = Vec::new();
        if !decision.owner.is_empty() {
            detail.push(decision.owner.as_str());
        }
        if let Some(deadline) = decision.deadline.as_deref() {
            detail.push(deadline);
        }
        let detail = if detail.is_empty() {
            String::new()
        } else {
            format!(" ({})", detail.join(", "))
        };
        println!("  {}. [{mark}] {}{detail}", index + 1, decision.text);
    }
}

pub fn feedback(item: &Feedback) {
    let author = if item.is_anonymous { "anonymous" } else { "named" };
    println!(
        "{}  [{}] {author}: {}",
        item.date.format("%Y-%m-%d"),
        item.category,
        item.message
    );
}
