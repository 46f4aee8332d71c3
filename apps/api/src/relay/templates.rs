//! Template registry. Every relay variant is one `PromptTemplate` value.
//!
//! A template pairs a pure rendering function (payload → prompt text) with
//! the completion settings it is sent with. The relay itself is generic over
//! this registry.

use std::time::Duration;

use crate::llm_client::prompts::{
    BANNED_PHRASES_INSTRUCTION, JSON_ONLY_SYSTEM, JSON_SPECIFIC_SYSTEM, NO_AI_MENTION_INSTRUCTION,
};
use crate::llm_client::{ChatMessage, CompletionRequest, ResponseFormat, Role};
use crate::relay::payload::RequestPayload;
use crate::relay::prompts::{
    BUSINESS_PLAN_PROMPT_TEMPLATE, FULL_PLAN_PROMPT_TEMPLATE, IDEAS_PROMPT_TEMPLATE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptTemplate {
    /// Five quick ideas under the budget.
    Ideas,
    /// One concrete plan to earn the first $100.
    BusinessPlan,
    /// 30-day launch system for a named business.
    FullPlan,
}

/// Completion settings attached to a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemplateSettings {
    pub model: &'static str,
    /// 0.25 – 0.8
    pub temperature: f32,
    /// Sends `response_format: {"type": "json_object"}` when set.
    pub json_mode: bool,
    pub max_tokens: Option<u32>,
    /// Client-side deadline, always under the platform's 10s limit.
    pub timeout: Duration,
    pub system: &'static str,
}

impl PromptTemplate {
    pub const ALL: [PromptTemplate; 3] = [
        PromptTemplate::Ideas,
        PromptTemplate::BusinessPlan,
        PromptTemplate::FullPlan,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PromptTemplate::Ideas => "ideas",
            PromptTemplate::BusinessPlan => "business-plan",
            PromptTemplate::FullPlan => "full-plan",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    pub fn settings(self) -> TemplateSettings {
        match self {
            PromptTemplate::Ideas => TemplateSettings {
                model: "gpt-4o-mini",
                temperature: 0.7,
                json_mode: false,
                max_tokens: Some(1800),
                timeout: Duration::from_millis(8500),
                system: JSON_ONLY_SYSTEM,
            },
            PromptTemplate::BusinessPlan => TemplateSettings {
                model: "gpt-4o",
                temperature: 0.3,
                json_mode: true,
                max_tokens: None,
                timeout: Duration::from_millis(8000),
                system: JSON_SPECIFIC_SYSTEM,
            },
            PromptTemplate::FullPlan => TemplateSettings {
                model: "gpt-4o",
                temperature: 0.25,
                json_mode: true,
                max_tokens: Some(3500),
                timeout: Duration::from_millis(7500),
                system: JSON_SPECIFIC_SYSTEM,
            },
        }
    }

    /// Renders the prompt. Field values are interpolated verbatim.
    pub fn render(self, payload: &RequestPayload) -> String {
        let shared = [
            ("banned_phrases", BANNED_PHRASES_INSTRUCTION),
            ("no_ai_mention", NO_AI_MENTION_INSTRUCTION),
        ];
        let fields = [
            ("skills", payload.skills.as_str()),
            ("time", payload.time.as_str()),
            ("budget", payload.budget.as_str()),
            ("market", payload.market.as_str()),
        ];

        match self {
            PromptTemplate::Ideas => {
                render_placeholders(IDEAS_PROMPT_TEMPLATE, &[&shared[..], &fields[..]].concat())
            }
            PromptTemplate::BusinessPlan => {
                let location = [("location", or_placeholder(&payload.location, "unspecified"))];
                render_placeholders(
                    BUSINESS_PLAN_PROMPT_TEMPLATE,
                    &[&shared[..], &fields[..], &location[..]].concat(),
                )
            }
            PromptTemplate::FullPlan => {
                let business = [
                    ("business_name", payload.business_name.as_str()),
                    ("description", payload.description.as_str()),
                ];
                render_placeholders(
                    FULL_PLAN_PROMPT_TEMPLATE,
                    &[&shared[..], &fields[..], &business[..]].concat(),
                )
            }
        }
    }

    /// Builds the outbound request: fixed system instruction, then the rendered prompt.
    pub fn completion_request(self, payload: &RequestPayload) -> CompletionRequest {
        let settings = self.settings();
        CompletionRequest {
            model: settings.model,
            response_format: settings.json_mode.then_some(ResponseFormat::JSON_OBJECT),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: settings.system.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: self.render(payload),
                },
            ],
        }
    }
}

fn or_placeholder<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Single-pass `{name}` substitution.
///
/// Only names present in `vars` are replaced, so literal JSON braces in a
/// template survive. Substituted text is never rescanned: a caller value of
/// `{budget}` stays `{budget}`.
pub fn render_placeholders(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> RequestPayload {
        RequestPayload {
            skills: "baking".to_string(),
            time: "6 hours".to_string(),
            budget: "40".to_string(),
            market: "office workers".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_render_placeholders_keeps_unknown_braces() {
        let out = render_placeholders(r#"{"ideas": [{name,cost}]} {x}"#, &[("x", "1")]);
        assert_eq!(out, r#"{"ideas": [{name,cost}]} 1"#);
    }

    #[test]
    fn test_render_placeholders_does_not_rescan_values() {
        let out = render_placeholders("{a}-{b}", &[("a", "{b}"), ("b", "B")]);
        assert_eq!(out, "{b}-B");
    }

    #[test]
    fn test_render_placeholders_unclosed_brace() {
        assert_eq!(render_placeholders("tail {a", &[("a", "A")]), "tail {a");
    }

    #[test]
    fn test_slug_round_trip_for_registry() {
        for template in PromptTemplate::ALL {
            assert_eq!(PromptTemplate::from_slug(template.slug()), Some(template));
        }
        assert_eq!(PromptTemplate::from_slug("checkout"), None);
    }

    #[test]
    fn test_settings_stay_inside_platform_limits() {
        for template in PromptTemplate::ALL {
            let settings = template.settings();
            assert!((0.25..=0.8).contains(&settings.temperature));
            assert!(settings.timeout >= Duration::from_millis(7500));
            assert!(settings.timeout <= Duration::from_millis(8500));
        }
    }

    #[test]
    fn test_ideas_prompt_interpolates_fields() {
        let prompt = PromptTemplate::Ideas.render(&payload());
        assert!(prompt.contains("Generate 5 startup ideas under $40."));
        assert!(prompt.contains("User skills: baking. Available hours this week: 6 hours."));
        assert!(prompt.contains("Market: office workers."));
        assert!(prompt.contains("tools_needed (array of {name,cost})"));
        assert!(prompt.contains(r#"Return: {"ideas":[ ... ]}."#));
        assert!(prompt.contains("leverage social media"));
    }

    #[test]
    fn test_business_plan_location_defaults_to_unspecified() {
        let prompt = PromptTemplate::BusinessPlan.render(&payload());
        assert!(prompt.contains("- location: unspecified"));
        assert!(prompt.contains(r#""startup_cost": "40""#));
        assert!(prompt.contains(r#""business_plan": {"#));
        assert!(prompt.contains("Do not mention \"AI\""));
        assert!(!prompt.contains("{no_ai_mention}"));
    }

    #[test]
    fn test_business_plan_uses_given_location() {
        let mut p = payload();
        p.location = "Caledon".to_string();
        let prompt = PromptTemplate::BusinessPlan.render(&p);
        assert!(prompt.contains("- location: Caledon"));
    }

    #[test]
    fn test_full_plan_includes_business_fields() {
        let mut p = payload();
        p.business_name = "Desk Bakes".to_string();
        let prompt = PromptTemplate::FullPlan.render(&p);
        assert!(prompt.contains("User business: Desk Bakes"));
        assert!(prompt.contains("Business description: \n"));
        assert!(prompt.contains("10. SUCCESS METRICS"));
    }

    #[test]
    fn test_full_plan_keeps_schema_after_hashtag_entry() {
        let prompt = PromptTemplate::FullPlan.render(&payload());
        assert!(prompt.contains(r##""hashtags": ["#string"]"##));
        assert!(prompt.contains(r#""customer_service_scripts": ["#));
        assert!(prompt.contains(r#""success_metrics": ["#));
        assert!(prompt.trim_end().ends_with("Do not mention \"AI\" or \"large language models\"."));
    }

    #[test]
    fn test_full_plan_empty_business_fields_render_verbatim() {
        let prompt = PromptTemplate::FullPlan.render(&payload());
        assert!(prompt.contains("User business: \n"));
        assert!(!prompt.contains("unnamed"));
    }

    #[test]
    fn test_empty_payload_renders_every_template() {
        for template in PromptTemplate::ALL {
            let prompt = template.render(&RequestPayload::default());
            assert!(!prompt.contains("{skills}"));
            assert!(!prompt.contains("{banned_phrases}"));
        }
    }

    #[test]
    fn test_completion_request_message_order() {
        let request = PromptTemplate::BusinessPlan.completion_request(&payload());
        assert_eq!(request.model, "gpt-4o");
        assert!(request.response_format.is_some());
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, Role::System);
        assert_eq!(request.messages[0].content, JSON_SPECIFIC_SYSTEM);
        assert_eq!(request.messages[1].role, Role::User);
        assert!(request.messages[1].content.contains("budget_usd: 40"));
    }

    #[test]
    fn test_ideas_request_has_no_json_hint() {
        let request = PromptTemplate::Ideas.completion_request(&payload());
        assert!(request.response_format.is_none());
        assert_eq!(request.max_tokens, Some(1800));
    }
}
