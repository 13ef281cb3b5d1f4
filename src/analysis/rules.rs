//! Declarative keyword → text rule tables.
//!
//! Every annotation produced by the heuristic analysis comes from one of these tables. A rule
//! matches when any of its keywords is a substring of the lowercased input; matching rules
//! contribute their lines in table order. Keywords are stored lowercase.

/// Keyword-triggered block of bullet lines
#[derive(Debug)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub lines: &'static [&'static str],
}

impl KeywordRule {
    /// `lowered` must already be lowercase
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Ordered rules plus the line used when none of them fire
#[derive(Debug)]
pub struct RuleTable {
    pub rules: &'static [KeywordRule],
    pub fallback: &'static str,
}

impl RuleTable {
    /// Lines of every rule matching `text` (case-insensitive)
    pub fn lines_for(&self, text: &str) -> Vec<&'static str> {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .filter(|rule| rule.matches(&lowered))
            .flat_map(|rule| rule.lines.iter().copied())
            .collect()
    }

    /// Lines of every rule matched by at least one of `texts`
    pub fn lines_for_any<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> Vec<&'static str> {
        let lowered: Vec<String> = texts.into_iter().map(str::to_lowercase).collect();
        self.rules
            .iter()
            .filter(|rule| lowered.iter().any(|text| rule.matches(text)))
            .flat_map(|rule| rule.lines.iter().copied())
            .collect()
    }

    /// Join `lines` with newlines, or fall back when empty
    pub fn render(&self, lines: &[&str]) -> String {
        if lines.is_empty() { self.fallback.to_string() } else { lines.join("\n") }
    }
}

/// Milestone rule: one keyword feeding all three milestone lists
#[derive(Debug)]
pub struct MilestoneRule {
    pub keyword: &'static str,
    pub significance: &'static [&'static str],
    pub implications: &'static [&'static str],
    pub next_steps: &'static [&'static str],
}

/// Care-phase label inferred from event titles
#[derive(Debug)]
pub struct PhaseRule {
    pub keyword: &'static str,
    pub label: &'static str,
}

/// Decision title → clinical reasoning
pub const DECISION_REASONING: RuleTable = RuleTable {
    rules: &[
        KeywordRule {
            keywords: &["blood pressure"],
            lines: &[
                "• Elevated blood pressure readings requiring immediate intervention",
                "• Family history of cardiovascular disease increasing risk factors",
                "• Need for medication to achieve target BP levels",
            ],
        },
        KeywordRule {
            keywords: &["nutrition"],
            lines: &[
                "• Dietary changes needed to support blood pressure management",
                "• Patient feedback indicating need for travel-friendly meal plans",
                "• Integration with overall health optimization strategy",
            ],
        },
        KeywordRule {
            keywords: &["exercise"],
            lines: &[
                "• Physical activity required for cardiovascular health",
                "• Need for strength training to improve metabolic markers",
                "• Patient concerns about form and safety addressed",
            ],
        },
    ],
    fallback: "• Clinical decision based on comprehensive health assessment",
};

/// Recent related message → extra reasoning, applied once per message
pub const RECENT_MESSAGE_REASONING: RuleTable = RuleTable {
    rules: &[
        KeywordRule {
            keywords: &["test", "result"],
            lines: &["• Test results indicating need for intervention"],
        },
        KeywordRule {
            keywords: &["concern", "worried"],
            lines: &["• Patient expressed concerns about health outcomes"],
        },
    ],
    fallback: DECISION_REASONING.fallback,
};

/// Decision title → expected impact
pub const DECISION_IMPACT: RuleTable = RuleTable {
    rules: &[
        KeywordRule {
            keywords: &["medication"],
            lines: &[
                "• Immediate blood pressure reduction expected",
                "• Regular monitoring required for dosage adjustments",
                "• Potential side effects to be monitored",
            ],
        },
        KeywordRule {
            keywords: &["nutrition"],
            lines: &[
                "• Improved dietary compliance through personalized approach",
                "• Better travel accommodation for meal planning",
                "• Enhanced patient satisfaction and adherence",
            ],
        },
        KeywordRule {
            keywords: &["exercise"],
            lines: &[
                "• Improved cardiovascular fitness and strength",
                "• Better metabolic markers and body composition",
                "• Enhanced patient confidence in physical activity",
            ],
        },
    ],
    fallback: "• Positive impact on overall health outcomes expected",
};

/// Any message in the whole log → decision context
pub const DECISION_CONTEXT: RuleTable = RuleTable {
    rules: &[
        KeywordRule {
            keywords: &["travel", "london", "jakarta", "us"],
            lines: &[
                "• Patient has frequent international travel schedule",
                "• Care plan adapted for travel-friendly protocols",
                "• Remote monitoring and support provided",
            ],
        },
        KeywordRule {
            keywords: &["adhere", "follow", "compliance"],
            lines: &[
                "• Patient shows variable adherence to recommendations",
                "• Personalized approach needed for better compliance",
                "• Regular check-ins and adjustments implemented",
            ],
        },
    ],
    fallback: "• Decision made within comprehensive care coordination framework",
};

/// Message content → milestone annotation
pub const MILESTONE_RULES: &[MilestoneRule] = &[
    MilestoneRule {
        keyword: "test result",
        significance: &[
            "• Diagnostic data providing baseline health metrics",
            "• Objective measurements for treatment planning",
        ],
        implications: &[
            "• Treatment adjustments based on results",
            "• Progress tracking and goal setting",
        ],
        next_steps: &["• Review results with care team", "• Adjust protocols as needed"],
    },
    MilestoneRule {
        keyword: "prescribe",
        significance: &[
            "• Medication intervention for health management",
            "• Evidence-based treatment approach",
        ],
        implications: &["• Regular monitoring required", "• Potential side effect management"],
        next_steps: &["• Pharmacy coordination", "• Follow-up monitoring schedule"],
    },
    MilestoneRule {
        keyword: "plan",
        significance: &[
            "• Structured approach to health optimization",
            "• Multi-disciplinary care coordination",
        ],
        implications: &[
            "• Comprehensive health management",
            "• Long-term health outcomes focus",
        ],
        next_steps: &["• Implementation of care plan", "• Regular progress reviews"],
    },
];

/// A message becomes a milestone candidate when it mentions any of these
pub const MILESTONE_KEYWORDS: &[&str] = &[
    "test",
    "result",
    "prescribe",
    "diagnosis",
    "blood pressure",
    "medication",
    "treatment",
    "plan",
    "protocol",
];

/// Health metrics reported in the overview, in report order
pub const HEALTH_METRIC_KEYWORDS: &[&str] =
    &["blood pressure", "bp", "hrv", "sleep", "weight", "cholesterol", "glucose", "apob"];

pub const CARE_PHASES: &[PhaseRule] = &[
    PhaseRule { keyword: "diagnostic", label: "Diagnostic Phase" },
    PhaseRule { keyword: "treatment", label: "Treatment Phase" },
    PhaseRule { keyword: "monitoring", label: "Monitoring Phase" },
    PhaseRule { keyword: "optimization", label: "Optimization Phase" },
];

pub const FALLBACK_CARE_PHASE: &str = "Comprehensive Care";

/// Case-insensitive: does `text` mention any of `keywords`?
pub fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    let lowered = text.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}
