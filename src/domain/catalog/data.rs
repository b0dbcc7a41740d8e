//! Built-in export readiness catalog and outcome category table.
//!
//! Six dimensions, thirty questions. Weights are part of the assessment
//! model: changing them changes every stored score's meaning, so treat this
//! file as versioned data.

use once_cell::sync::Lazy;

use super::catalog::Catalog;
use super::dimension::Dimension;
use super::question::{AnswerOption, Question};
use crate::domain::scoring::{CategoryTable, OutcomeCategory, ScoreRange, StarRating};

/// Process-wide built-in catalog, validated once on first access.
pub static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::try_new(builtin_dimensions()).expect("built-in catalog must be structurally valid")
});

/// Process-wide built-in category table, validated once against the catalog.
pub static CATEGORIES: Lazy<CategoryTable> = Lazy::new(|| {
    let table =
        CategoryTable::try_new(builtin_categories()).expect("built-in category table must be well formed");
    table
        .validate_partition(CATALOG.max_possible_score())
        .expect("built-in category table must cover the catalog's score domain");
    table
});

fn opt(label: &str, points: f64) -> AnswerOption {
    AnswerOption::new(label, points)
}

fn builtin_dimensions() -> Vec<Dimension> {
    vec![
        Dimension::new(
            "product",
            "Dimension 1: Product Competitiveness",
            "Determines whether it can sell",
            vec![
                Question::single(
                    1,
                    "How does your product price compare on international markets?",
                    vec![
                        opt("A. No idea what comparable products cost overseas", 0.0),
                        opt("B. Pricier than peers, but better quality", 2.0),
                        opt("C. At least 20% cheaper than overseas competitors", 3.0),
                        opt("D. Comparable price, no clear advantage", 1.0),
                    ],
                ),
                Question::single(
                    2,
                    "Does your product hold the baseline export certifications?",
                    vec![
                        opt("A. No idea which certifications are needed", 0.0),
                        opt("B. Researched the target market's requirements", 2.0),
                        opt("C. Passed core certifications such as CE/FCC", 3.0),
                        opt("D. Product needs no special certification", 2.0),
                    ],
                ),
                Question::single(
                    3,
                    "Can your supply chain respond quickly to orders?",
                    vec![
                        opt("A. Cash on delivery only, never hold inventory", 0.0),
                        opt("B. Sampling takes 30 days or more", 1.0),
                        opt("C. Small batches (<500 units) ship within 15 days", 2.0),
                        opt("D. Flexible line supporting small, fast reorders", 3.0),
                    ],
                ),
                Question::single(
                    4,
                    "Do you have real data on how your product is used overseas?",
                    vec![
                        opt("A. No idea how it is used abroad", 0.0),
                        opt("B. Learned through customer feedback", 1.0),
                        opt("C. Have overseas customer trial reports", 2.0),
                        opt("D. Parts or OEM output already exported", 3.0),
                    ],
                ),
                Question::single(
                    5,
                    "Which category does your product fall into?",
                    vec![
                        opt("A. Pure custom work, no standard item", 1.0),
                        opt("B. Industry-specific equipment", 2.0),
                        opt("C. Consumer staple or standard industrial good", 3.0),
                        opt("D. Seasonal or trend-driven product", 1.0),
                    ],
                ),
            ],
        ),
        Dimension::new(
            "finance",
            "Dimension 2: Funding Readiness",
            "Determines how long you can last",
            vec![
                Question::single(
                    6,
                    "How much loss-absorbing capital have you set aside for the export push?",
                    vec![
                        opt("A. Under 100k", 0.0),
                        opt("B. 100k-300k", 1.0),
                        opt("C. 300k-500k", 2.0),
                        opt("D. Over 500k", 3.0),
                    ],
                ),
                Question::single(
                    7,
                    "What is your company's current cash flow position?",
                    vec![
                        opt("A. Running on credit sales, collections are hard", 0.0),
                        opt("B. Breaking even with a small surplus", 2.0),
                        opt("C. Healthy; could absorb six months of losses", 3.0),
                        opt("D. Operating on loans or external financing", 0.0),
                    ],
                ),
                Question::single(
                    8,
                    "Do you understand how long export deals tie up working capital?",
                    vec![
                        opt("A. Assumed it works like domestic cash-and-carry", 0.0),
                        opt("B. Know payment terms exist, not how long", 1.0),
                        opt("C. Clear on 30-90 day terms plus ocean transit", 2.0),
                        opt("D. Modeled the full cash conversion cycle", 3.0),
                    ],
                ),
                Question::single(
                    9,
                    "How long could you sustain zero export orders?",
                    vec![
                        opt("A. One month", 0.0),
                        opt("B. Three months", 1.0),
                        opt("C. Six months", 2.0),
                        opt("D. Twelve months", 3.0),
                    ],
                ),
                Question::single(
                    10,
                    "What share of your investable funds does the export budget take?",
                    vec![
                        opt("A. Everything we have", 0.0),
                        opt("B. More than 50%", 1.0),
                        opt("C. 30-50%", 2.0),
                        opt("D. Under 30%, with a defined stop-loss line", 3.0),
                    ],
                ),
            ],
        ),
        Dimension::new(
            "determination",
            "Dimension 3: Owner Commitment",
            "The single biggest factor in whether the transition succeeds",
            vec![
                Question::single(
                    11,
                    "How much time can you personally invest in exports each day?",
                    vec![
                        opt("A. None; want to delegate it entirely", 0.0),
                        opt("B. One or two hours a week hearing reports", 1.0),
                        opt("C. An hour a day, hands on", 2.0),
                        opt("D. Over half my energy, leading it myself", 3.0),
                    ],
                ),
                Question::single(
                    12,
                    "If exports produce no orders for six months, you would:",
                    vec![
                        opt("A. Cut it immediately and stop the losses", 0.0),
                        opt("B. Give it three more months, then pull out", 1.0),
                        opt("C. Review what went wrong, adjust, continue", 2.0),
                        opt("D. Stay the course for at least 18 months", 3.0),
                    ],
                ),
                Question::single(
                    13,
                    "How do your family and partners view the transition?",
                    vec![
                        opt("A. Strongly opposed", 0.0),
                        opt("B. Watching; neither for nor against", 1.0),
                        opt("C. Supportive with reservations", 2.0),
                        opt("D. Fully aligned behind it", 3.0),
                    ],
                ),
                Question::single(
                    14,
                    "Can you accept that exports start slow before they compound?",
                    vec![
                        opt("A. Expect results within three months", 0.0),
                        opt("B. Can accept a six-month incubation", 2.0),
                        opt("C. Want to flood channels and scale fast now", 0.0),
                        opt("D. Understand it takes 12-18 months to mature", 3.0),
                    ],
                ),
                Question::single(
                    15,
                    "How proactively do you study the export trade?",
                    vec![
                        opt("A. Waiting to be taught; won't self-study", 0.0),
                        opt("B. Attend fairs and trainings passively", 1.0),
                        opt("C. Join practitioner groups, ask peers", 2.0),
                        opt("D. Work through courses and platform rules", 3.0),
                    ],
                ),
            ],
        ),
        Dimension::new(
            "team",
            "Dimension 4: Team Capability",
            "Determines execution quality",
            vec![
                Question::single(
                    16,
                    "What does your export team look like today?",
                    vec![
                        opt("A. Nobody with export experience", 0.0),
                        opt("B. One part-timer or assistant", 1.0),
                        opt("C. One or two full-time beginners", 2.0),
                        opt("D. A trade manager with 3+ years' experience", 3.0),
                    ],
                ),
                Question::single(
                    17,
                    "Does the team have working English or other languages?",
                    vec![
                        opt("A. Nobody can communicate in English", 0.0),
                        opt("B. One person with basic English", 1.0),
                        opt("C. Tools plus simple English get us through", 2.0),
                        opt("D. Professional trade staff or returnees", 3.0),
                    ],
                ),
                Question::single(
                    18,
                    "Do you have digital or e-commerce operating experience?",
                    vec![
                        opt("A. Purely traditional offline sales", 0.0),
                        opt("B. Run domestic marketplace storefronts", 2.0),
                        opt("C. Run Amazon or other cross-border channels", 3.0),
                        opt("D. No online operations knowledge at all", 0.0),
                    ],
                ),
                Question::single(
                    19,
                    "How strong are the team's learning ability and follow-through?",
                    vec![
                        opt("A. Resist new things, stuck in old routines", 0.0),
                        opt("B. Willing, but need hand-holding", 1.0),
                        opt("C. Self-directed learners who solve problems", 2.0),
                        opt("D. Hungry, resilient, and driven", 3.0),
                    ],
                ),
                Question::single(
                    20,
                    "What can you offer a key export hire?",
                    vec![
                        opt("A. Fixed salary, no commission", 0.0),
                        opt("B. Base plus revenue commission", 2.0),
                        opt("C. Base plus profit share", 3.0),
                        opt("D. Below-market compensation", 0.0),
                    ],
                ),
            ],
        ),
        Dimension::new(
            "learning",
            "Dimension 5: Learning and Adaptability",
            "Determines growth speed",
            vec![
                Question::multiple(
                    21,
                    "Where do you get export knowledge? (select all that apply)",
                    vec![
                        opt("A. Only from friends' recommendations", 0.5),
                        opt("B. Follow 10+ trade publications", 1.0),
                        opt("C. Attended 3+ export trainings", 1.5),
                        opt("D. Studied customs data and industry reports", 1.0),
                        opt("E. Retain a dedicated trade mentor or advisor", 2.0),
                    ],
                    Some(3.0),
                ),
                Question::single(
                    22,
                    "How do you vet whether an export opportunity is real?",
                    vec![
                        opt("A. Trust it outright and invest immediately", 0.0),
                        opt("B. Ask three or more peers for their view", 2.0),
                        opt("C. Run a small-batch test first", 3.0),
                        opt("D. Go by what the vendor tells us", 1.0),
                    ],
                ),
                Question::single(
                    23,
                    "When a platform's policy shifts (say, account suspensions), you:",
                    vec![
                        opt("A. Panic and abandon the platform", 0.0),
                        opt("B. Pay an agency to make it go away", 1.0),
                        opt("C. Study the rules and adjust strategy", 2.0),
                        opt("D. Already spread across channels to dilute risk", 3.0),
                    ],
                ),
                Question::single(
                    24,
                    "Do you review data and run retrospectives?",
                    vec![
                        opt("A. Never look at data; go on gut feel", 0.0),
                        opt("B. Check a sales report monthly", 1.0),
                        opt("C. Weekly review of lead sources and conversion", 2.0),
                        opt("D. Full dashboard, refreshed daily", 3.0),
                    ],
                ),
                Question::single(
                    25,
                    "Do you understand the target market's cultural and legal differences?",
                    vec![
                        opt("A. Assumed the world works the same everywhere", 0.0),
                        opt("B. Aware of some basic differences", 1.0),
                        opt("C. Studied regulations like GDPR or Prop 65", 2.0),
                        opt("D. Local partners advise us on the ground", 3.0),
                    ],
                ),
            ],
        ),
        Dimension::new(
            "compliance",
            "Dimension 6: Compliance and Risk Awareness",
            "Determines how far you can go",
            vec![
                Question::single(
                    26,
                    "Can you rank international payment methods by risk?",
                    vec![
                        opt("A. No idea; full prepayment only", 0.0),
                        opt("B. Know of letters of credit, not the mechanics", 1.0),
                        opt("C. Can rank TT/LC/OA risk levels", 2.0),
                        opt("D. Credit insurance and risk process in place", 3.0),
                    ],
                ),
                Question::single(
                    27,
                    "How do you handle intellectual property?",
                    vec![
                        opt("A. Didn't know trademarks need registering", 0.0),
                        opt("B. Domestic trademark only, nothing overseas", 1.0),
                        opt("C. Registered in our main target markets", 2.0),
                        opt("D. Full patent and trademark strategy", 3.0),
                    ],
                ),
                Question::single(
                    28,
                    "Are you familiar with export product liability insurance?",
                    vec![
                        opt("A. Never heard of it", 0.0),
                        opt("B. Heard of it, doubt it's necessary", 1.0),
                        opt("C. Know it matters, planning to buy", 2.0),
                        opt("D. Purchased, covering key markets", 3.0),
                    ],
                ),
                Question::single(
                    29,
                    "How familiar are you with customs, foreign exchange, and rebates?",
                    vec![
                        opt("A. Not at all; forwarders handle everything", 0.0),
                        opt("B. Know the basic process", 1.0),
                        opt("C. Handled it once or twice", 2.0),
                        opt("D. Dedicated finance and customs staff", 3.0),
                    ],
                ),
                Question::single(
                    30,
                    "Do you hold reserves or a playbook for sudden risk events?",
                    vec![
                        opt("A. No plan; cross bridges as they come", 0.0),
                        opt("B. Aware of the risks, no concrete measures", 1.0),
                        opt("C. Contingency funds set aside", 2.0),
                        opt("D. Export credit insurance and legal playbook", 3.0),
                    ],
                ),
            ],
        ),
    ]
}

fn builtin_categories() -> Vec<OutcomeCategory> {
    vec![
        OutcomeCategory {
            // High bound deliberately exceeds the achievable maximum as an
            // overlap-safety cap.
            range: ScoreRange::new(90.0, 105.0),
            title: "Ready to Launch".to_string(),
            stars: StarRating::new(5),
            priority_label: "Strong product, solid funding, committed owner, capable team".to_string(),
            description: "You have an unusually high chance of succeeding abroad. Move now."
                .to_string(),
            advice: vec![
                "Launch multi-platform distribution immediately (marketplace, own site, social)"
                    .to_string(),
                "Budget 100-150k for flagship overseas trade shows".to_string(),
                "Build a complete export team within 3 months (manager, sales, merchandiser)"
                    .to_string(),
                "Register trademarks and patents in priority markets".to_string(),
            ],
            outcome_statement: "First order within 6 months; break even within 12".to_string(),
        },
        OutcomeCategory {
            range: ScoreRange::new(70.0, 89.0),
            title: "Fast Iterator".to_string(),
            priority_label: "Likely thin on team strength or compliance".to_string(),
            stars: StarRating::new(4),
            description: "Strong base. Close the gaps and you can start quickly.".to_string(),
            advice: vec![
                "Fix your single biggest gap now (hiring, training, or certification)".to_string(),
                "Run small: pilot one low-cost channel such as LinkedIn".to_string(),
                "Lower the opening target: first order under 10k USD".to_string(),
                "Hire a seasoned export advisor to coach the first 3 months".to_string(),
            ],
            outcome_statement: "First order in 9-12 months; keep iterating".to_string(),
        },
        OutcomeCategory {
            range: ScoreRange::new(50.0, 69.0),
            title: "Nearly Ready".to_string(),
            stars: StarRating::new(3),
            priority_label: "Seriously short in two or more dimensions".to_string(),
            description: "Don't follow the crowd blindly. Spend 3-6 months building fundamentals first."
                .to_string(),
            advice: vec![
                "Owner studies first: take an executive trade program, learn the mechanics"
                    .to_string(),
                "Rework the product: adapt design and packaging to export standards".to_string(),
                "Groom talent internally: pick one high-potential employee to specialize"
                    .to_string(),
                "Build the reserve: have 500k of standby capital in place".to_string(),
            ],
            outcome_statement: "Warning: forcing a launch now carries a 90% chance of losing money and leaving"
                .to_string(),
        },
        OutcomeCategory {
            range: ScoreRange::new(30.0, 49.0),
            title: "Cautious Observer".to_string(),
            stars: StarRating::new(2),
            priority_label: "Owner commitment or funding has serious problems".to_string(),
            description: "Treat exports as a side bet for now. Do not go all in.".to_string(),
            advice: vec![
                "Never all in: explore exports strictly as a side project".to_string(),
                "Test light: consign through a trading company, no capital outlay".to_string(),
                "Learn first: attend industry summits, meet owners who made the jump".to_string(),
                "Wait for the window: launch after domestic business and cash are stable"
                    .to_string(),
            ],
            outcome_statement: "Hold and watch for at least 12-18 months".to_string(),
        },
        OutcomeCategory {
            range: ScoreRange::new(0.0, 29.0),
            title: "Not Yet Suitable".to_string(),
            stars: StarRating::new(1),
            priority_label: "Mindset, knowledge, and resources all unready".to_string(),
            description: "The core task is survival. Reach top-three regionally at home before looking abroad."
                .to_string(),
            advice: vec![
                "Survive first: get domestic business to regional top three with healthy cash"
                    .to_string(),
                "Reset expectations: shadow three companies mid-transition to see the real difficulty"
                    .to_string(),
                "Spend nothing: skip every paid platform and trade show for now".to_string(),
                "Lowest-cost probe: test dropshipping with zero inventory".to_string(),
            ],
            outcome_statement: "Reassess in two years at the earliest".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Points;

    #[test]
    fn builtin_catalog_is_valid_and_complete() {
        assert_eq!(CATALOG.dimension_count(), 6);
        assert_eq!(CATALOG.total_question_count(), 30);
        for dim in CATALOG.dimensions() {
            assert_eq!(dim.question_count(), 5);
        }
    }

    #[test]
    fn builtin_catalog_maximum_is_ninety() {
        // 29 single-select questions topping out at 3, one capped multi at 3.
        assert_eq!(CATALOG.max_possible_score(), Points::new(90.0));
    }

    #[test]
    fn builtin_question_ids_run_one_to_thirty() {
        let mut ids: Vec<u32> = CATALOG
            .dimensions()
            .iter()
            .flat_map(|d| d.questions.iter().map(|q| q.id.value()))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=30).collect::<Vec<u32>>());
    }

    #[test]
    fn builtin_categories_cover_the_score_domain() {
        assert_eq!(CATEGORIES.categories().len(), 5);
        assert!(CATEGORIES
            .validate_partition(CATALOG.max_possible_score())
            .is_ok());
    }

    #[test]
    fn builtin_top_bracket_extends_past_the_maximum() {
        let top = CATEGORIES
            .categories()
            .iter()
            .max_by(|a, b| a.range.low().partial_cmp(&b.range.low()).unwrap())
            .unwrap();
        assert!(top.range.high() >= CATALOG.max_possible_score().value());
    }
}
