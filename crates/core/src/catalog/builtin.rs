use crate::model::{
    Lesson, LessonId, LessonLevel, Localized, MiniTask, Question, Unit, UnitId,
};

use super::Catalog;

const LESSONS_PER_UNIT: usize = 5;

/// (id, arabic title, english title, category)
const UNITS: [(&str, &str, &str, &str); 20] = [
    ("U1", "مبادئ الحوكمة الرشيدة", "Good Governance Principles", "governance"),
    ("U2", "الشفافية والوصول إلى المعلومات", "Transparency & Access to Info", "transparency"),
    ("U3", "آليات المساءلة المجتمعية", "Social Accountability", "accountability"),
    ("U4", "توثيق الوقائع المدنية في سوريا", "Civil Documentation in Syria", "documentation"),
    ("U5", "حقوق المرأة واتفاقية سيداو (CEDAW)", "Women's Rights & CEDAW", "rights"),
    ("U6", "الإعلان العالمي لحقوق الإنسان", "Universal Declaration of HR", "rights"),
    ("U7", "تحليل النزاعات المحلية وبناء السلام", "Conflict Analysis & Peace", "peacebuilding"),
    ("U8", "أخلاقيات العمل العام والتطوعي", "Public & Volunteer Ethics", "ethics"),
    ("U9", "حقوق الملكية والسكن والأرض (HLP)", "Housing Land Property (HLP)", "hlp"),
    ("U10", "مهارات الحوار والوساطة", "Dialogue & Mediation Skills", "mediation"),
    ("U11", "المواطنة الرقمية والحوكمة الإلكترونية", "Digital Citizenship & E-Gov", "digital"),
    ("U12", "الإدارة البيئية والسياسة المحلية", "Environmental Admin & Policy", "environment"),
    ("U13", "العدالة الاجتماعية والمساواة", "Social Justice & Equality", "justice"),
    ("U14", "قيادة الشباب والإرشاد المجتمعي", "Youth Leadership & Mentorship", "youth"),
    ("U15", "منظمات المجتمع المدني وأدوارها", "Civil Society Organizations", "csos"),
    ("U16", "إدارة الكوارث والمرونة المجتمعية", "Disaster Mgt & Resilience", "resilience"),
    ("U17", "مراقبة الموازنة والتدقيق الاجتماعي", "Budget Monitoring & Social Audit", "budget"),
    ("U18", "حرية التعبير والوعي الإعلامي", "Freedom of Expression & Media", "media"),
    ("U19", "نماذج اللامركزية الإدارية", "Administrative Decentralization", "decentralization"),
    ("U20", "حقوق الإنسان في بيئة العمل", "Human Rights in the Workplace", "workplace"),
];

fn unit_sections(unit_id: &str) -> Option<[&'static str; 5]> {
    let sections = match unit_id {
        "U1" => [
            "Good governance is not just an administrative term; it is a social contract that guarantees a fair distribution of resources and opportunities.",
            "International governance standards rest on eight principles: participation, rule of law, transparency, responsiveness, consensus, equity, efficiency and accountability.",
            "Locally, governance means the ability of councils to deliver basic services without discrimination or favoritism.",
            "Transparency is the backbone of governance: accountability is impossible without a free flow of accurate information to citizens.",
            "The biggest obstacle to governance is administrative corruption, which often starts with unclear hiring and contracting criteria.",
        ],
        "U2" => [
            "Access to information is a basic human right that lets citizens exercise their other rights with awareness.",
            "Transparency requires publishing budgets, public contracts and project results regularly and in plain language.",
            "Open information reduces rumors and builds trust between institutions and the local community.",
            "Information request procedures must be easy, fast and free to guarantee access for everyone.",
            "The main challenge is a culture of secrecy that some bodies adopt to avoid public oversight.",
        ],
        "U3" => [
            "Social accountability is an interactive process in which citizens monitor the performance of service providers.",
            "Accountability tools include community scorecards, public hearings and social audits of projects.",
            "The aim of accountability is not punishment but better services that reach the most vulnerable groups.",
            "Accountability works when there is political will to respond and citizens who know their rights and can monitor.",
            "Whistleblowers must be protected so public oversight can continue without fear of consequences.",
        ],
        "U4" => [
            "Civil documentation is the legal guarantee of a person's identity and their rights to inheritance, education and health care.",
            "Years of conflict caused many people to lose their documents or register events outside official institutions.",
            "Registering marriages and births is the first step to restoring children's legal rights and protecting them from statelessness.",
            "Available legal remedies include lineage confirmation suits and late administrative registration of events.",
            "Legal awareness of the civil registry protects future generations from legal and social loss.",
        ],
        "U11" => [
            "Digital citizenship means using technology responsibly and ethically to take part in public life.",
            "E-government eases access to services and reduces opportunities for corruption by automating procedures.",
            "Protecting citizens' personal data is a core part of digital security in local administration.",
            "The digital divide can marginalize people without technology, so offline alternatives must remain available.",
            "Interactive platforms help collect citizens' views on local projects quickly and effectively.",
        ],
        "U18" => [
            "Freedom of expression is a pillar of democracy, tied to an ethical responsibility towards truth and civil peace.",
            "Media literacy helps citizens recognize misleading news and hate speech that threaten the community.",
            "Independent local journalism watches over the performance of service institutions.",
            "Journalists and citizens need a safe environment to express opinions without fear of prosecution.",
            "Conscious use of social media turns it from a tool of conflict into a platform for development.",
        ],
        _ => return None,
    };
    Some(sections)
}

fn default_sections(unit_name: &str) -> Vec<String> {
    vec![
        format!("{unit_name} is an integral part of sustainable development and peacebuilding in local communities."),
        "Success in this field requires civil society and local administrations to work together.".to_string(),
        "Embracing integrity and teamwork lowers project costs and increases their positive impact.".to_string(),
        "Creative use of available resources is the key to overcoming economic and logistical challenges.".to_string(),
        "Continuous documentation and regular evaluation keep success going and prevent repeated mistakes.".to_string(),
    ]
}

fn lesson_title(unit_name: &str, index: usize) -> String {
    match index {
        0 => format!("Core concepts and international standards in {unit_name}"),
        1 => format!("Practical reality and field challenges in {unit_name}"),
        2 => format!("Innovative tools to strengthen {unit_name}"),
        3 => format!("In-depth case study: successful practices in {unit_name}"),
        _ => format!("A roadmap for activating {unit_name} in your community"),
    }
}

fn lesson_title_ar(unit_name_ar: &str, index: usize) -> String {
    match index {
        0 => format!("مفاهيم أساسية ومعايير دولية في {unit_name_ar}"),
        1 => format!("الواقع العملي والتحديات الميدانية في {unit_name_ar}"),
        2 => format!("الأدوات الابتكارية لتعزيز {unit_name_ar}"),
        3 => format!("دراسة حالة معمقة: ممارسات ناجحة في {unit_name_ar}"),
        _ => format!("خارطة طريق لتفعيل {unit_name_ar} في مجتمعك"),
    }
}

fn level_for(index: usize) -> LessonLevel {
    match index {
        0 | 1 => LessonLevel::Basic,
        2 | 3 => LessonLevel::Advanced,
        _ => LessonLevel::Trainer,
    }
}

fn questions() -> Vec<Question> {
    vec![
        Question::MultipleChoice {
            text: "What is the key condition for sustaining these practices?".into(),
            options: vec![
                "Large external funding".into(),
                "Community participation and full transparency".into(),
                "Absolute centralization of decisions".into(),
                "Ignoring minor complaints".into(),
            ],
            correct_index: 1,
            explanation: "Participation and transparency create a sense of community ownership, which protects projects and keeps them going.".into(),
        },
        Question::MultipleChoice {
            text: "How does transparency help reduce conflicts?".into(),
            options: vec![
                "By hiding sensitive information".into(),
                "Through clear criteria and equal opportunities for all".into(),
                "By issuing decisions without explanation".into(),
                "By reducing the citizen's oversight role".into(),
            ],
            correct_index: 1,
            explanation: "When everyone knows the criteria behind a decision, feelings of injustice and bias decrease.".into(),
        },
        Question::TrueFalse {
            text: "Governance principles cannot be applied during conflict or when resources are scarce.".into(),
            correct_value: false,
            explanation: "On the contrary, governance matters more in conflict to ensure limited resources are shared fairly and not exploited.".into(),
        },
    ]
}

fn reflection_prompts() -> Localized<Vec<String>> {
    Localized::new(
        vec![
            "كيف يمكن لهذا المفهوم أن يغير واقع تقديم الخدمات في شارعك؟".into(),
            "ما هي الخطوة الأولى التي يمكنك اتخاذها غداً لتكون ممارساً حقيقياً لهذه القيم؟".into(),
            "هل ترى تعارضاً بين التقاليد المحلية وهذه المبادئ الدولية؟ وكيف تعالج ذلك؟".into(),
        ],
        vec![
            "How can this concept change service delivery in your street?".into(),
            "What is the first step you can take tomorrow to be a true practitioner?".into(),
            "Do you see conflict between local traditions and these principles?".into(),
        ],
    )
}

fn mini_task() -> MiniTask {
    MiniTask {
        title: "Smart initiative challenge".into(),
        steps: vec![
            "Identify a simple problem in your neighborhood related to the lesson topic.".into(),
            "Sit with two neighbors and discuss solutions based on what you learned.".into(),
            "Write your proposal in a short draft and send it to the neighborhood council or local committee.".into(),
        ],
        evidence: "A draft proposal or a photo from the community meeting.".into(),
    }
}

fn build_lesson(unit: &UnitId, name_ar: &str, name_en: &str, category: &str, index: usize) -> Lesson {
    let sections = unit_sections(unit.as_str())
        .map(|s| s.iter().map(|&line| line.to_string()).collect())
        .unwrap_or_else(|| default_sections(name_en));

    Lesson {
        id: LessonId::for_unit(unit, index),
        unit_id: unit.clone(),
        level: level_for(index),
        title: Localized::new(lesson_title_ar(name_ar, index), lesson_title(name_en, index)),
        category: category.to_string(),
        duration_min: if index < 2 { 15 } else { 25 },
        learning_outcomes: vec![
            format!("Analyze the core concepts of {name_en}"),
            format!("Identify practical tools for applying {name_en} in the field"),
            "Assess the legal and social challenges of the working environment".to_string(),
            format!("Design a small initiative that activates {name_en} in the neighborhood"),
            format!("Develop facilitation skills to teach {name_en} to others"),
        ],
        sections,
        scenario: format!(
            "In your area, the local committee faced a challenge related to {name_en}, and people were split between supporters and opponents. As someone who has learned the principles of this lesson, how would you facilitate a constructive dialogue that reaches a consensual solution serving the public interest?"
        ),
        questions: questions(),
        reflection_prompts: reflection_prompts(),
        mini_task: mini_task(),
    }
}

/// # Panics
///
/// Panics if the static curriculum above violates a catalog invariant; the
/// catalog tests cover this.
pub(super) fn catalog() -> Catalog {
    let mut units = Vec::with_capacity(UNITS.len());
    let mut lessons = Vec::with_capacity(UNITS.len() * LESSONS_PER_UNIT);

    for (id, name_ar, name_en, category) in UNITS {
        let unit_id = UnitId::new(id);
        for index in 0..LESSONS_PER_UNIT {
            lessons.push(build_lesson(&unit_id, name_ar, name_en, category, index));
        }
        units.push(Unit::new(
            unit_id,
            Localized::new(name_ar.to_string(), name_en.to_string()),
        ));
    }

    Catalog::new(units, lessons).expect("built-in catalog should be valid")
}
