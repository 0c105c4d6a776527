//! The travel-statistics catalog the dashboard ships with.

use crate::knowledge::{KnowledgeBase, KnowledgeEntry};

const DASHBOARD_QA: &[(&str, &str)] = &[
    (
        "Which country had the highest tourist arrivals overall?",
        "The United States, with 546M arrivals.",
    ),
    (
        "Which country had the second highest arrivals?",
        "Spain, with 552M arrivals.",
    ),
    ("What is the growth percentage for Vanuatu?", "0.12%."),
    (
        "How many total tourist arrivals were recorded from 2003 to 2012?",
        "8263M total tourist arrivals.",
    ),
    (
        "What was the growth percentage across all countries?",
        "48.54%.",
    ),
    (
        "How many countries are covered in the dashboard?",
        "153 countries.",
    ),
    (
        "How many years are covered in the data?",
        "10 years, from 2003 to 2012.",
    ),
    (
        "Which year had the highest arrivals?",
        "2012, with 82M arrivals.",
    ),
    (
        "Which year had the lowest arrivals?",
        "2003, with 49M arrivals.",
    ),
    (
        "What is the forecasted number of arrivals for the next year?",
        "Around 1 billion arrivals (based on the forecast chart).",
    ),
    (
        "Which countries are in the top 10 for total arrivals?",
        "United States, Vietnam, Zimbabwe, Uruguay, Yemen Rep., Zambia, \
         Venezuela RB, Virgin Islands (U.S.), West Bank & Gaza, Vanuatu.",
    ),
    (
        "What is the average number of arrivals per country?",
        "5.40M average arrivals.",
    ),
    (
        "What is the maximum number of arrivals for a country?",
        "83M.",
    ),
    (
        "What is the minimum number of arrivals for a country?",
        "3400.",
    ),
    (
        "Which country had the largest % change in tourism arrivals?",
        "Vanuatu with 669% change.",
    ),
];

/// A one-click preset question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickQuestion {
    pub label: &'static str,
    pub question: &'static str,
}

pub const QUICK_QUESTIONS: &[QuickQuestion] = &[
    QuickQuestion {
        label: "Highest Arrivals",
        question: "Which country had the highest tourist arrivals overall?",
    },
    QuickQuestion {
        label: "Total Countries",
        question: "How many countries are covered in the dashboard?",
    },
    QuickQuestion {
        label: "Growth Rate",
        question: "What was the growth percentage across all countries?",
    },
];

/// The built-in knowledge base.
pub fn builtin() -> KnowledgeBase {
    let entries = DASHBOARD_QA
        .iter()
        .map(|(question, answer)| KnowledgeEntry::new(*question, *answer))
        .collect();
    KnowledgeBase::from_nonempty(entries)
}
