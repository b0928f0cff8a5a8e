//! Community-organizing tools and their starting templates.

use serde::{Deserialize, Serialize};

use crate::model::Localized;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Agenda,
    Budget,
    Matrix,
    Survey,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Agenda, Tool::Budget, Tool::Matrix, Tool::Survey];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Tool::Agenda => "agenda",
            Tool::Budget => "budget",
            Tool::Matrix => "matrix",
            Tool::Survey => "survey",
        }
    }

    #[must_use]
    pub fn title(self) -> Localized<&'static str> {
        match self {
            Tool::Agenda => Localized::new("مولد جداول الأعمال", "Agenda Generator"),
            Tool::Budget => Localized::new("مخطط الموازنات المجتمعية", "Community Budgeter"),
            Tool::Matrix => Localized::new("مصفوفة الأولويات", "Priority Matrix"),
            Tool::Survey => Localized::new("مسح الاحتياجات السريع", "Rapid Needs Survey"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaItem {
    pub topic: String,
    pub minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetItem {
    pub name: String,
    pub qty: u32,
    pub cost: u32,
}

impl BudgetItem {
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.qty) * u64::from(self.cost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Low,
    Medium,
    High,
}

impl Rating {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Rating::Low => "low",
            Rating::Medium => "medium",
            Rating::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixActivity {
    pub activity: String,
    pub impact: Rating,
    pub effort: Rating,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SurveyQuestion {
    Choice { question: String, options: Vec<String> },
    Rating { question: String },
}

impl SurveyQuestion {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            SurveyQuestion::Choice { question, .. } | SurveyQuestion::Rating { question } => {
                question
            }
        }
    }
}

/// Starting templates shown by each tool before the learner edits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub agenda: Vec<AgendaItem>,
    pub budget: Vec<BudgetItem>,
    pub matrix: Vec<MatrixActivity>,
    pub survey: Vec<SurveyQuestion>,
}

fn agenda(topic: &str, minutes: u32) -> AgendaItem {
    AgendaItem {
        topic: topic.to_string(),
        minutes,
    }
}

fn budget(name: &str, qty: u32, cost: u32) -> BudgetItem {
    BudgetItem {
        name: name.to_string(),
        qty,
        cost,
    }
}

fn activity(name: &str, impact: Rating, effort: Rating) -> MatrixActivity {
    MatrixActivity {
        activity: name.to_string(),
        impact,
        effort,
    }
}

impl Default for Templates {
    fn default() -> Self {
        use Rating::{High, Low, Medium};

        Self {
            agenda: vec![
                agenda("الافتتاح والترحيب بالأعضاء والتعريف بأجندة اللقاء", 5),
                agenda("مراجعة المبادرات السابقة وتقييم مستوى الإنجاز", 15),
                agenda("تحليل الاحتياجات العاجلة بناءً على مسح ميداني أولي", 20),
                agenda("اتخاذ قرارات بشأن توزيع الموارد المحلية المتاحة", 15),
                agenda("تحديد موعد الاجتماع القادم والاتفاق على قنوات التواصل", 5),
            ],
            budget: vec![
                budget("رواتب منسقين ميدانيين (عدد 2 لمدة 3 أشهر)", 6, 500),
                budget("تجهيزات مكتبية وأجهزة حاسوب محمولة (إدارة المبادرة)", 2, 800),
                budget("استئجار وتجهيز مساحة للتدريب والنشاط المجتمعي", 3, 300),
                budget("حقائب مواد تدريبية وقرطاسية شاملة لـ 30 مستفيد", 30, 15),
                budget("خدمات لوجستية وضيافة لجلسات الحوار المجتمعي", 10, 40),
                budget("تكاليف اتصالات وإنترنت للفريق الميداني", 3, 25),
                budget("صندوق للطوارئ والاحتياجات غير المتوقعة", 1, 200),
            ],
            matrix: vec![
                activity("صيانة شبكة الصرف الصحي في الشارع الرئيسي", High, High),
                activity("تنظيم حملة تنظيف دورية للحدائق العامة", Medium, Low),
                activity("إنشاء مركز تدريب مهني للشباب المتعطلين", High, High),
                activity("توفير وجبات غذائية يومية للعائلات الأشد فقراً", High, Medium),
                activity("ترميم المدرسة الابتدائية المتضررة في الحي", High, High),
            ],
            survey: vec![
                SurveyQuestion::Choice {
                    question: "ما هو العائق الرئيسي أمام وصولكم إلى الخدمات الصحية؟".to_string(),
                    options: vec![
                        "التكلفة".to_string(),
                        "المسافة".to_string(),
                        "نقص الأدوية".to_string(),
                    ],
                },
                SurveyQuestion::Rating {
                    question: "كيف تقيم جودة المياه المتوفرة حالياً؟".to_string(),
                },
                SurveyQuestion::Rating {
                    question: "هل تشعر بالأمان والخصوصية داخل مكان إقامتك؟".to_string(),
                },
            ],
        }
    }
}

/// Sum of `qty * cost` over every line.
#[must_use]
pub fn budget_total(items: &[BudgetItem]) -> u64 {
    items.iter().map(BudgetItem::total).sum()
}

/// Total meeting length in minutes.
#[must_use]
pub fn agenda_minutes(items: &[AgendaItem]) -> u32 {
    items.iter().map(|item| item.minutes).sum()
}
