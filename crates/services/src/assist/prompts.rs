//! Prompt text for the lesson assistant.

use civic_core::model::{Language, Lesson};
use civic_core::toolkit::{BudgetItem, MatrixActivity};
use civic_core::{Library, LibraryItem};

/// Default system instruction sent with every request.
pub const ACADEMY_SYSTEM_PROMPT: &str = "You are the Civic Academy assistant. \
Your goal is to help Syrian citizens understand good governance, civic rights and local administration. \
Always keep a professional, neutral and educational tone. \
Encourage ethical participation and transparency.";

fn respond_in(language: Language) -> String {
    format!("Respond in {}.", language.english_name())
}

/// Two or three sentences on how the lesson helps the community in five years.
#[must_use]
pub fn lesson_insight(lesson: &Lesson, language: Language) -> String {
    format!(
        "Provide a future-oriented insight for the lesson: \"{title}\".\n\
         The context is civic education and governance in Syria.\n\
         Focus on how this lesson helps build a better community in 5 years. \
         Respond in 2-3 short sentences in {lang}.",
        title = lesson.title.ar,
        lang = language.english_name(),
    )
}

/// The three most important takeaways, as bullet points.
#[must_use]
pub fn lesson_summary(lesson: &Lesson, language: Language) -> String {
    format!(
        "Based on the lesson content: \"{content}\", generate a concise summary of the 3 most \
         important key takeaways for a citizen learning about \"{title}\".\n\
         Use bullet points. {respond}",
        content = lesson.sections.join(" "),
        title = lesson.title.ar,
        respond = respond_in(language),
    )
}

/// A long-form explanation for a general audience.
#[must_use]
pub fn lesson_explanation(lesson: &Lesson, language: Language) -> String {
    format!(
        "Provide a full, detailed educational explanation about \"{title}\".\n\
         The material should be written for a general Syrian public audience.\n\
         Explain the concept, why it's important for local governance, and how citizens should apply it.\n\
         Be comprehensive but clear. {respond}",
        title = lesson.title.ar,
        respond = respond_in(language),
    )
}

/// Free-form question to the assistant.
#[must_use]
pub fn chat(message: &str, language: Language) -> String {
    format!("{}\n\n{}", message.trim(), respond_in(language))
}

/// Three short paragraphs on why a library document matters.
#[must_use]
pub fn library_summary(item: &LibraryItem, language: Language) -> String {
    format!(
        "Generate a high-level educational summary for this civic resource: \"{title}\".\n\
         The description is: \"{description}\".\n\
         Highlight why this resource is vital for a Syrian citizen. Use 3 short paragraphs. {respond}",
        title = item.title.ar,
        description = item.description.ar,
        respond = respond_in(language),
    )
}

/// A "Citizen's Guide" reading of one library section.
#[must_use]
pub fn section_explanation(section: &str, language: Language) -> String {
    format!(
        "Provide a simplified \"Citizen's Guide\" explanation for this specific section: \"{section}\".\n\
         How does this affect daily life or local governance? Keep it to 2-3 sentences. {respond}",
        respond = respond_in(language),
    )
}

/// Answer a question using the library titles and descriptions as context.
#[must_use]
pub fn ask_library(library: &Library, question: &str, language: Language) -> String {
    let context = library
        .items()
        .iter()
        .map(|item| format!("{}: {}", item.title.ar, item.description.ar))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Based on the following library of civic resources:\n{context}\n\n\
         Answer this citizen's question: \"{question}\".\n\
         Direct them to specific resources if they exist. {respond}",
        question = question.trim(),
        respond = respond_in(language),
    )
}

/// Timed agenda for a community meeting with the given objective.
#[must_use]
pub fn agenda(objective: &str, language: Language) -> String {
    format!(
        "Generate a professional meeting agenda for a civic community meeting with the objective: \"{objective}\".\n\
         Include timing for each item and suggest 5 key topics. {respond}",
        objective = objective.trim(),
        respond = respond_in(language),
    )
}

/// Cost savings and missing accountability lines for an initiative budget.
#[must_use]
pub fn budget_review(items: &[BudgetItem], language: Language) -> String {
    let lines = items
        .iter()
        .map(|item| format!("{}: {} x {}", item.name, item.qty, item.cost))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Analyze this community initiative budget:\n{lines}\n\n\
         Provide 3 cost-saving suggestions and 2 essential items that might be missing for \
         transparency and accountability in a Syrian local context. {respond}",
        respond = respond_in(language),
    )
}

/// Sort activities into impact/effort quadrants.
#[must_use]
pub fn priority_matrix(activities: &[MatrixActivity], language: Language) -> String {
    let names = activities
        .iter()
        .map(|a| a.activity.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Help prioritize these community activities: {names}.\n\
         Categorize each into one of: 'Quick Wins' (High Impact, Low Effort), 'Major Projects' \
         (High Impact, High Effort), 'Fill-ins' (Low Impact, Low Effort), or 'Thankless Tasks' \
         (Low Impact, High Effort).\n\
         Explain why for each based on building community trust. {respond}",
        respond = respond_in(language),
    )
}

/// Five questions measuring satisfaction with council transparency.
#[must_use]
pub fn survey_questions(language: Language) -> String {
    format!(
        "Based on current civic needs in Syria, generate 5 highly effective survey questions to measure \
         'Citizen Satisfaction with Local Council Transparency'.\n\
         Include a mix of multiple choice and rating scales. {respond}",
        respond = respond_in(language),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_core::Catalog;
    use civic_core::model::LessonId;

    #[test]
    fn prompts_name_the_lesson_and_language() {
        let catalog = Catalog::builtin();
        let lesson = catalog.get_lesson(&LessonId::new("U2L1")).unwrap();

        let insight = lesson_insight(lesson, Language::En);
        assert!(insight.contains(&lesson.title.ar));
        assert!(insight.ends_with("in English."));

        let summary = lesson_summary(lesson, Language::Ar);
        assert!(summary.contains(&lesson.sections[0]));
        assert!(summary.ends_with("Respond in Arabic."));

        assert!(lesson_explanation(lesson, Language::En).contains("general Syrian public"));
        assert_eq!(chat("  hi ", Language::En), "hi\n\nRespond in English.");
    }

    #[test]
    fn library_prompts_carry_the_document_and_catalog() {
        let library = Library::builtin();
        let item = library.get("lib5").unwrap();

        let summary = library_summary(item, Language::En);
        assert!(summary.contains(&item.title.ar));
        assert!(summary.contains(&item.description.ar));
        assert!(summary.ends_with("Respond in English."));

        let section = item.section(2, Language::Ar).unwrap();
        let explained = section_explanation(section, Language::Ar);
        assert!(explained.contains(section));
        assert!(explained.contains("Citizen's Guide"));

        let asked = ask_library(&library, " where is law 107? ", Language::Ar);
        assert!(asked.contains("\"where is law 107?\""));
        for item in library.items() {
            assert!(asked.contains(&item.title.ar));
        }
        assert!(asked.ends_with("Respond in Arabic."));
    }

    #[test]
    fn toolkit_prompts_list_their_templates() {
        let templates = civic_core::toolkit::Templates::default();

        assert!(agenda(" water committee ", Language::En).contains("\"water committee\""));

        let budget = budget_review(&templates.budget, Language::En);
        assert!(budget.contains(&format!("{}: 6 x 500", templates.budget[0].name)));
        assert_eq!(budget.matches(" x ").count(), templates.budget.len());

        let matrix = priority_matrix(&templates.matrix, Language::Ar);
        assert!(matrix.contains(&templates.matrix[4].activity));
        assert!(matrix.contains("Quick Wins"));

        assert!(survey_questions(Language::En).ends_with("Respond in English."));
    }
}
