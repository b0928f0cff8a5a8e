use crate::model::Localized;

use super::{LibraryItem, LibraryKind};

struct Entry {
    id: &'static str,
    kind: LibraryKind,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
    content_ar: [&'static str; 5],
    content_en: [&'static str; 5],
}

const ENTRIES: [Entry; 8] = [
    Entry {
        id: "lib1",
        kind: LibraryKind::Manual,
        title: (
            "الدليل المرجعي الوطني للحوكمة المحلية",
            "National Ref Guide for Local Gov",
        ),
        description: (
            "دليل شامل يجمع كافة القوانين والمعايير الدولية والمحلية لإدارة شؤون المجتمع بفعالية.",
            "Comprehensive guide gathering all laws and international standards for community mgt.",
        ),
        content_ar: [
            "أولاً: القيم الأخلاقية للإدارة العامة - ترتكز الإدارة المحلية الناجحة على قيم النزاهة، الحياد، والالتزام بخدمة المواطن كأولوية قصوى. يجب على كل موظف عام الحفاظ على موارد المجتمع كأمانة وطنية.",
            "ثانياً: الإطار القانوني السوري - يستند هذا الدليل إلى قانون الإدارة المحلية رقم 107، والذي يهدف إلى تحقيق اللامركزية في السلطات والمسؤوليات، وتركيزها في أيدي وحدات إدارية قادرة على تلبية احتياجات المواطنين بكفاءة.",
            "ثالثاً: الموازنة التشاركية - هي عملية يقرر فيها أفراد المجتمع كيفية إنفاق جزء من الموازنة العامة. تبدأ بعقد جلسات استماع لتحديد الاحتياجات، تليها عملية التصويت الشعبي على المشاريع ذات الأولوية لضمان الشفافية.",
            "رابعاً: أدوات الوصول للمعلومات - يحق للمواطن الاطلاع على قرارات المجالس المحلية، كشوف الحسابات الختامية، ومحاضر الجلسات. يتم ذلك عبر لوحات الإعلانات الرسمية أو البوابات الإلكترونية المخصصة.",
            "خامساً: مبادئ العدالة في تقديم الخدمة - يجب تقديم الخدمات الأساسية (مياه، كهرباء، نظافة) بناءً على معايير فنية واحتياجات فعلية، مع استبعاد أي شكل من أشكال التمييز القائم على الانتماء أو المكانة الاجتماعية.",
        ],
        content_en: [
            "I. Ethical Foundations: Successful local admin rests on integrity, neutrality, and citizen service. Public resources must be guarded as a national trust.",
            "II. Legal Framework: Based on Law 107, aiming for decentralization and empowering local units to meet citizen needs efficiently.",
            "III. Participatory Budgeting: Community members decide how to spend part of the budget through consultation and public voting on priorities.",
            "IV. Access to Information: Citizens have the right to view council decisions and accounts via official boards or digital portals.",
            "V. Equality in Service: Essential services must be provided based on technical criteria and actual needs, avoiding any discrimination.",
        ],
    },
    Entry {
        id: "lib2",
        kind: LibraryKind::Guide,
        title: (
            "دليل الوساطة المجتمعية وحل النزاعات",
            "Community Mediation & Conflict Res",
        ),
        description: (
            "منهجية عملية لتدريب الوسطاء المحليين على حل النزاعات العقارية والخدمية والاجتماعية.",
            "Practical methodology for training local mediators on resolving land and social conflicts.",
        ),
        content_ar: [
            "المرحلة الأولى: فهم جذور النزاع - يجب على الوسيط تحديد الأطراف الفاعلة، والتمييز بين المواقف المعلنة والاحتياجات الحقيقية الدفينة. استخدام 'شجرة النزاع' يساعد في تحديد الأسباب والآثار.",
            "المرحلة الثانية: التواصل غير العنيف - التركيز على لغة الاحتياجات بدلاً من لغة الاتهامات. يجب على الوسيط تشجيع الأطراف على التعبير عن مشاعرهم وتوقعاتهم بوضوح ودون تجريح.",
            "المرحلة الثالثة: العصف الذهني للحلول - في هذه المرحلة، يتم تشجيع الأطراف على طرح أكبر قدر ممكن من الحلول المبتكرة دون إصدار أحكام مسبقة عليها، حتى نصل إلى منطقة 'الربح المشترك'.",
            "المرحلة الرابعة: صياغة اتفاق الصلح - يجب أن يكون الاتفاق مكتوباً، واضحاً، محدداً بزمن، وقابلاً للتنفيذ. يفضل توثيق الاتفاق لدى الوجهاء أو الجهات القانونية لضمان الالتزام به.",
            "المرحلة الخامسة: المتابعة والتقييم - لا تنتهي مهمة الوسيط بانتهاء الجلسة، بل يجب عليه متابعة تنفيذ بنود الصلح لضمان عدم تجدد النزاع وبناء الثقة المستدامة.",
        ],
        content_en: [
            "Stage 1: Identifying Roots - Mediators must distinguish between stated positions and underlying needs using tools like the 'Conflict Tree'.",
            "Stage 2: Non-Violent Communication - Focus on needs rather than blame, encouraging clear and respectful expression of expectations.",
            "Stage 3: Brainstorming Solutions - Encourage parties to suggest innovative solutions without judgment to reach 'Win-Win' outcomes.",
            "Stage 4: Drafting the Agreement - Agreements must be written, clear, time-bound, and enforceable, ideally documented by legal or social entities.",
            "Stage 5: Follow-up - Mediators follow up on implementation to ensure compliance and prevent conflict recurrence.",
        ],
    },
    Entry {
        id: "lib3",
        kind: LibraryKind::Template,
        title: (
            "مجموعة قوالب الرقابة والتقييم",
            "M&E Template Collection",
        ),
        description: (
            "مجموعة من القوالب الجاهزة لرصد أداء المشاريع المحلية وجمع شكاوى المواطنين وتصنيفها.",
            "Collection of templates for monitoring project performance and categorizing complaints.",
        ),
        content_ar: [
            "1. قالب بطاقة تقييم الخدمة: أداة تسمح للمواطن بتقييم جودة المياه أو النظافة بناءً على معايير (الانتظام، الجودة، السلوك). يتم تحليل هذه البيانات شهرياً لتحسين الأداء.",
            "2. نموذج سجل الشكاوى: يشمل بيانات المشتكي، موضوع الشكوى، التاريخ، والإجراء المتخذ. يضمن هذا السجل حق المواطن في المساءلة وحق المؤسسة في تصحيح المسار.",
            "3. مصفوفة تتبع مؤشرات الأداء (KPIs): جدول يربط بين الأهداف المخطط لها والنتائج المحققة فعلياً على الأرض، مع توضيح أسباب الانحرافات إن وجدت.",
            "4. نموذج تقرير الرصد الميداني: يستخدمه الميسرون المجتمعيون لتوثيق مشاهداتهم حول تنفيذ المشاريع الخدمية ومدى التزام المتعهدين بالمعايير الفنية والجداول الزمنية.",
            "5. استمارة تقييم الأثر النهائي: تهدف لقياس التغيير طويل الأمد الذي أحدثه المشروع في حياة الناس، وما إذا كان قد ساهم فعلياً في تعزيز الاستقرار المجتمعي.",
        ],
        content_en: [
            "1. Service Scorecard: Allows citizens to rate services (Water, Trash) based on quality and regularity for performance improvement.",
            "2. Complaint Log: Tracks complainant data, subject, and actions taken, ensuring accountability and process correction.",
            "3. KPI Tracking Matrix: Links planned goals with actual field results, explaining any deviations found.",
            "4. Field Monitoring Report: Used by community facilitators to document project progress and contractor compliance with technical standards.",
            "5. Impact Assessment Form: Measures long-term changes caused by projects and their contribution to community stability.",
        ],
    },
    Entry {
        id: "lib4",
        kind: LibraryKind::Manual,
        title: (
            "كتيب الأمان الرقمي للنشطاء المدنيين",
            "Digital Security Handbook for Activists",
        ),
        description: (
            "أدلة تطبيقية لحماية البيانات، الخصوصية عبر الإنترنت، وتأمين قنوات التواصل المجتمعي.",
            "Practical guides for data protection, online privacy, and securing community communication.",
        ),
        content_ar: [
            "1. تأمين الحسابات: استخدام التحقق بخطوتين (2FA) وتطبيقات إدارة كلمات المرور يعتبر الخط الدفاعي الأول ضد الاختراقات.",
            "2. التشفير الطرفي: يوصى باستخدام تطبيقات مثل Signal للتواصل الحساس لضمان عدم اطلاع أي طرف ثالث على محتوى الرسائل.",
            "3. الخصوصية في الميدان: كيفية مسح البيانات الحساسة من الأجهزة قبل عبور نقاط التفتيش أو في حالات الطوارئ.",
            "4. مواجهة التضليل الرقمي: أدوات التحقق من الصور والفيديوهات لضمان عدم الانجرار وراء الإشاعات التي تثير الفتن.",
            "5. حماية البيانات الميدانية: بروتوكولات تخزين قوائم المستفيدين والبيانات القانونية على سحب مشفرة بعيداً عن الوصول المادي.",
        ],
        content_en: [
            "1. Account Security: Using 2FA and password managers is the first line of defense against hacking.",
            "2. End-to-End Encryption: Recommended use of apps like Signal for sensitive communication.",
            "3. Field Privacy: How to wipe sensitive data before checkpoints or in emergencies.",
            "4. Countering Misinformation: Tools for verifying photos and videos to avoid spreading rumors.",
            "5. Data Protection: Protocols for storing beneficiary lists and legal data on encrypted clouds.",
        ],
    },
    Entry {
        id: "lib5",
        kind: LibraryKind::Manual,
        title: (
            "شرح قانون الإدارة المحلية السوري 107",
            "Syrian Local Admin Law 107 Manual",
        ),
        description: (
            "تبسيط قانوني لمواد القانون رقم 107 وتوضيح صلاحيات المجالس المحلية والوحدات الإدارية.",
            "Legal simplification of Law 107 clarifying local council powers and admin units.",
        ),
        content_ar: [
            "الفصل الأول: الشخصية الاعتبارية - يمنح القانون الوحدات الإدارية استقلالاً مالياً وإدارياً مما يتيح لها التعاقد والتقاضي باسمها الخاص.",
            "الفصل الثاني: الموارد المالية - يوضح القانون مصادر تمويل المجالس من الضرائب المحلية، حصص الموازنة العامة، والهبات المشروطة.",
            "الفصل الثالث: الرقابة الشعبية - يشرح الآليات القانونية التي تتيح للمواطنين حضور الجلسات وتقديم الطعون في قرارات المجلس.",
            "الفصل الرابع: صلاحيات المكتب التنفيذي - تفصيل المهام اليومية في إدارة قطاعات الصحة، التعليم، والخدمات الفنية.",
            "الفصل الخامس: العلاقة مع السلطة المركزية - حدود التدخل الوزاري وحالات حل المجالس المحلية وإجراءات الانتخابات التعويضية.",
        ],
        content_en: [
            "Chapter 1: Legal Personality - Grants units financial and admin independence for contracting and litigation.",
            "Chapter 2: Financial Resources - Details funding from local taxes, state budget shares, and conditioned grants.",
            "Chapter 3: Public Oversight - Explains mechanisms for citizens to attend meetings and challenge council decisions.",
            "Chapter 4: Executive Office Powers - Daily tasks in health, education, and technical service sectors.",
            "Chapter 5: Central Relationship - Limits of ministerial intervention and procedures for council dissolution.",
        ],
    },
    Entry {
        id: "lib6",
        kind: LibraryKind::Guide,
        title: (
            "دليل التخطيط الاستراتيجي للمبادرات",
            "Strategic Planning for Initiatives",
        ),
        description: (
            "منهجية تحويل الأفكار المجتمعية إلى مشاريع مستدامة ذات أثر ملموس وقابل للقياس.",
            "Methodology for turning community ideas into sustainable projects with measurable impact.",
        ),
        content_ar: [
            "المرحلة 1: تحليل سوات (SWOT) - تحديد نقاط القوة والضعف الداخلية، والفرص والتهديدات الخارجية للمبادرة.",
            "المرحلة 2: صياغة الرؤية والمهمة - تحديد 'لماذا نوجد؟' و 'ماذا نريد أن نحقق؟' بعبارات ملهمة وواضحة.",
            "المرحلة 3: الأهداف الذكية (SMART) - صياغة أهداف محددة، قابلة للقياس، يمكن تحقيقها، ذات صلة، ومحددة زمنياً.",
            "المرحلة 4: تصميم خطة العمل - توزيع الأدوار والمسؤوليات، وتحديد الموارد اللازمة لكل نشاط.",
            "المرحلة 5: استراتيجية الاستدامة - كيف سيستمر المشروع بعد انتهاء التمويل الأولي؟ (الاعتماد على الموارد المحلية).",
        ],
        content_en: [
            "Stage 1: SWOT Analysis - Identifying internal strengths/weaknesses and external opportunities/threats.",
            "Stage 2: Vision & Mission - Defining core purpose and desired future in clear, inspiring terms.",
            "Stage 3: SMART Goals - Creating goals that are Specific, Measurable, Achievable, Relevant, and Time-bound.",
            "Stage 4: Action Plan - Distributing roles and identifying resources needed for each activity.",
            "Stage 5: Sustainability Strategy - How the project continues after initial funding ends.",
        ],
    },
    Entry {
        id: "lib7",
        kind: LibraryKind::Template,
        title: (
            "حقيبة أدوات توثيق حقوق الإنسان",
            "Human Rights Documentation Toolkit",
        ),
        description: (
            "نماذج احترافية لتوثيق الانتهاكات، جمع الشهادات، وحفظ الأدلة وفق المعايير الدولية.",
            "Professional templates for documenting violations, gathering testimonies, and preserving evidence.",
        ),
        content_ar: [
            "1. استمارة مقابلة الضحايا: تضمن جمع البيانات الأساسية مع مراعاة الحالة النفسية والخصوصية والأمان.",
            "2. نموذج الموافقة المستنيرة: وثيقة قانونية تضمن موافقة الضحية على استخدام شهادتها في التقارير الدولية.",
            "3. بروتوكول حفظ الأدلة الرقمية: خطوات تقنية لضمان عدم العبث بالصور والفيديوهات لتكون صالحة في المحاكم.",
            "4. مصفوفة تتبع الانتهاكات: جدول لتصنيف الحوادث حسب نوع الحق المنتهك (سكن، تعليم، حياة).",
            "5. دليل الإحالة القانونية: قائمة بالجهات التي يمكن إحالة الضحايا إليها للحصول على دعم قانوني أو طبي عاجل.",
        ],
        content_en: [
            "1. Victim Interview Form: Ensures basic data collection while respecting mental health and safety.",
            "2. Informed Consent Template: Legal document ensuring victim approval for using testimonies in reports.",
            "3. Digital Evidence Protocol: Technical steps to ensure photos/videos remain valid for court usage.",
            "4. Violation Tracking Matrix: Categorizing incidents by rights violated (housing, education, life).",
            "5. Legal Referral Guide: List of entities for victim legal or medical support.",
        ],
    },
    Entry {
        id: "lib8",
        kind: LibraryKind::Guide,
        title: (
            "دليل الحوكمة الشاملة: حقوق ذوي الإعاقة",
            "Inclusive Governance: Disability Rights",
        ),
        description: (
            "كيفية جعل الخدمات والمؤسسات المحلية متاحة وشاملة لجميع فئات المجتمع دون استثناء.",
            "How to make local services and institutions accessible and inclusive for all community groups.",
        ),
        content_ar: [
            "أولاً: مفهوم الدمج المجتمعي - الانتقال من منطق 'الإحسان' إلى منطق 'الحقوق' والواجبات المتساوية.",
            "ثانياً: التيسير المادي - معايير الوصول للمباني العامة (ممرات الكراسي، الإشارات البصرية، ترجمة الإشارة).",
            "ثالثاً: المشاركة في القرار - ضمان تمثيل ذوي الإعاقة في لجان الحي والمجالس المحلية ليعبروا عن احتياجاتهم.",
            "رابعاً: الحماية من التمييز - آليات الإبلاغ عن حالات الحرمان من الخدمة بسبب الإعاقة.",
            "خامساً: التوعية المجتمعية - حملات لتغيير الصور النمطية السلبية وتعزيز ثقافة التنوع في العمل العام.",
        ],
        content_en: [
            "I. Social Inclusion Concept - Moving from a 'charity' mindset to a 'rights' and 'duties' mindset.",
            "II. Physical Accessibility - Standards for public buildings (ramps, visual signs, sign language).",
            "III. Decisional Participation - Ensuring representation in neighborhood committees and councils.",
            "IV. Non-Discrimination - Reporting mechanisms for service denial based on disability.",
            "V. Community Awareness - Campaigns to change negative stereotypes and promote diversity.",
        ],
    },
];

pub(super) fn items() -> Vec<LibraryItem> {
    ENTRIES
        .iter()
        .map(|entry| LibraryItem {
            id: entry.id.to_string(),
            kind: entry.kind,
            title: Localized::new(entry.title.0.to_string(), entry.title.1.to_string()),
            description: Localized::new(
                entry.description.0.to_string(),
                entry.description.1.to_string(),
            ),
            content: Localized::new(
                entry.content_ar.iter().map(|&s| s.to_string()).collect(),
                entry.content_en.iter().map(|&s| s.to_string()).collect(),
            ),
        })
        .collect()
}
