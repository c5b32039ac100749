//! Pure mapping from a classification verdict to the affordances the demo
//! page displays. The only display branching in the system lives here; the
//! page script renders the resulting structure without further decisions.

use classifier_client::ClassificationVerdict;
use serde::Serialize;

/// Visual polarity of the verdict banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Qualified,
    Rejected,
}

/// One labeled figure shown under the banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: &'static str,
    pub value: String,
}

/// Everything the page needs to display one verdict.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedVerdict {
    pub indicator: Indicator,
    pub headline: &'static str,
    pub metrics: Vec<Metric>,
    /// Analysis block, present only when the service sent non-empty
    /// reasoning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    /// Rejection reason, present only for rejected verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub captions: Vec<String>,
}

/// Renders a verdict. Total function of its input: same verdict, same
/// rendered structure, no side effects.
pub fn render_verdict(verdict: &ClassificationVerdict) -> RenderedVerdict {
    if verdict.qualified {
        let caption = if verdict.bedrock_called {
            format!(
                "AWS Bedrock model-assisted classification (stage: {})",
                verdict.stage()
            )
        } else {
            format!(
                "Pre-filter/rule-based classification (stage: {})",
                verdict.stage()
            )
        };

        RenderedVerdict {
            indicator: Indicator::Qualified,
            headline: "M&A Transaction Detected",
            metrics: vec![
                Metric {
                    label: "Confidence",
                    value: format_confidence(verdict.confidence()),
                },
                Metric {
                    label: "Transaction Type",
                    value: verdict.theme().to_string(),
                },
            ],
            analysis: verdict.reasoning().map(str::to_string),
            reason: None,
            captions: vec![caption],
        }
    } else {
        let mut captions = Vec::new();
        if let Some(filter) = verdict.filter.as_deref().filter(|f| !f.trim().is_empty()) {
            captions.push(format!("Filtered by: {filter}"));
        }
        captions.push(format!("Processing stage: {}", verdict.stage()));

        RenderedVerdict {
            indicator: Indicator::Rejected,
            headline: "Not an M&A Transaction",
            metrics: Vec::new(),
            analysis: None,
            reason: Some(verdict.reason().to_string()),
            captions,
        }
    }
}

fn format_confidence(confidence: f64) -> String {
    format!("{:.0}%", confidence * 100.0)
}
