use tracing::info;

use crate::models::{ForecastPoint, Insight, PortfolioSnapshot};

/// One advisory rule: a named predicate-plus-template. Returns `Some`
/// when the rule applies to the given state, `None` to stay silent.
pub struct InsightRule {
    pub name: &'static str,
    pub eval: fn(&PortfolioSnapshot, Option<&[ForecastPoint]>) -> Option<Insight>,
}

/// Derives advisory records from portfolio and forecast state. Rules run
/// in the order they are registered and their results are concatenated,
/// so adding a rule never changes the output of existing ones. Holds no
/// state between invocations.
pub struct InsightScorer {
    rules: Vec<InsightRule>,
}

impl Default for InsightScorer {
    fn default() -> Self {
        Self {
            rules: baseline_rules(),
        }
    }
}

impl InsightScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with a caller-supplied rule list, for extension and for
    /// exercising a single rule in isolation.
    pub fn with_rules(rules: Vec<InsightRule>) -> Self {
        Self { rules }
    }

    pub fn generate(
        &self,
        snapshot: &PortfolioSnapshot,
        forecast: Option<&[ForecastPoint]>,
    ) -> Vec<Insight> {
        let insights: Vec<Insight> = self
            .rules
            .iter()
            .filter_map(|rule| (rule.eval)(snapshot, forecast))
            .collect();
        info!(count = insights.len(), "Generated insights");
        insights
    }
}

/// The stock advisory set, in its fixed evaluation order. The current
/// rules are unconditional; the predicate shape is what future,
/// state-sensitive rules plug into.
pub fn baseline_rules() -> Vec<InsightRule> {
    vec![
        InsightRule {
            name: "diversification",
            eval: diversification_rule,
        },
        InsightRule {
            name: "savings_potential",
            eval: savings_potential_rule,
        },
        InsightRule {
            name: "risk_balance",
            eval: risk_balance_rule,
        },
    ]
}

fn diversification_rule(
    _snapshot: &PortfolioSnapshot,
    _forecast: Option<&[ForecastPoint]>,
) -> Option<Insight> {
    Some(Insight {
        title: "Portfolio Diversification".to_string(),
        description: "Consider diversifying your investments across different asset classes to reduce risk.".to_string(),
        score: 85,
        category: "Risk Management".to_string(),
    })
}

fn savings_potential_rule(
    _snapshot: &PortfolioSnapshot,
    _forecast: Option<&[ForecastPoint]>,
) -> Option<Insight> {
    Some(Insight {
        title: "Savings Potential".to_string(),
        description: "Based on your income and expenses, you have potential to increase your investment allocation.".to_string(),
        score: 92,
        category: "Savings".to_string(),
    })
}

fn risk_balance_rule(
    _snapshot: &PortfolioSnapshot,
    _forecast: Option<&[ForecastPoint]>,
) -> Option<Insight> {
    Some(Insight {
        title: "Risk Assessment".to_string(),
        description: "Your current portfolio shows a balanced risk profile. Consider adjusting based on your goals.".to_string(),
        score: 78,
        category: "Risk Management".to_string(),
    })
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_emits_three_insights_in_order() {
        let scorer = InsightScorer::new();
        let insights = scorer.generate(&PortfolioSnapshot::empty(), None);

        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0].title, "Portfolio Diversification");
        assert_eq!(insights[0].score, 85);
        assert_eq!(insights[0].category, "Risk Management");
        assert_eq!(insights[1].title, "Savings Potential");
        assert_eq!(insights[1].score, 92);
        assert_eq!(insights[1].category, "Savings");
        assert_eq!(insights[2].title, "Risk Assessment");
        assert_eq!(insights[2].score, 78);
    }

    #[test]
    fn generation_is_deterministic() {
        let scorer = InsightScorer::new();
        let snapshot = PortfolioSnapshot::empty();
        let forecast =
            crate::services::forecast_service::project(5000.0, 3000.0, 3).unwrap();

        let a = scorer.generate(&snapshot, Some(&forecast));
        let b = scorer.generate(&snapshot, Some(&forecast));
        assert_eq!(a, b);
    }

    #[test]
    fn single_rule_evaluates_in_isolation() {
        let insight = savings_potential_rule(&PortfolioSnapshot::empty(), None).unwrap();
        assert_eq!(insight.score, 92);
        assert_eq!(insight.category, "Savings");
    }

    #[test]
    fn custom_rule_list_replaces_baseline() {
        fn silent(_: &PortfolioSnapshot, _: Option<&[ForecastPoint]>) -> Option<Insight> {
            None
        }

        let scorer = InsightScorer::with_rules(vec![
            InsightRule {
                name: "silent",
                eval: silent,
            },
            InsightRule {
                name: "diversification",
                eval: diversification_rule,
            },
        ]);

        let insights = scorer.generate(&PortfolioSnapshot::empty(), None);
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].title, "Portfolio Diversification");
    }

    #[test]
    fn baseline_rule_order_is_stable() {
        let names: Vec<&str> = baseline_rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["diversification", "savings_potential", "risk_balance"]
        );
    }
}
