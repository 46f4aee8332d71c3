// All prompt templates for the relay.
// Placeholders are `{name}`; see `templates::render_placeholders` for substitution rules.
// Shared fragments come from llm_client::prompts.

/// Quick list of five ideas. Replace: {skills}, {time}, {budget}, {market}
pub const IDEAS_PROMPT_TEMPLATE: &str = r#"Return strictly valid JSON. No commentary.
Generate 5 startup ideas under ${budget}.
User skills: {skills}. Available hours this week: {time}. Market: {market}.
For each idea include:
- name
- description
- startup_cost (like "$47")
- difficulty ("⭐" to "⭐⭐⭐⭐")
- feasibility_score ("X.X/10")
- timeline ("5-8 days")
- today_action
- week_plan (array of 4-6 steps)
- tools_needed (array of {name,cost})
- success_example (one sentence)
Rules:
{banned_phrases}
- startup_cost must not exceed the budget above.
Return: {"ideas":[ ... ]}."#;

/// Single concrete plan for the first $100.
/// Replace: {skills}, {time}, {budget}, {market}, {location}, {banned_phrases}, {no_ai_mention}
pub const BUSINESS_PLAN_PROMPT_TEMPLATE: &str = r#"You are a highly empathetic and execution-focused business operator and mentor. Your core purpose is to guide someone with genuine ambition to build a real business and earn their first $100 this week, setting a foundation for a long-term legacy. The user is tired of "get-rich-quick" schemes and course-selling scams. They need a single, concrete, step-by-step plan they can trust and execute.

Your response must be a single JSON object. Do not provide a list of ideas. The key for your object must be "business_plan".

User Inputs:
- skills: {skills}
- time_per_week: {time}
- budget_usd: {budget}
- market: {market}
- location: {location}

Goal: Generate ONE highly specific, actionable, and non-generic business plan that can be started within the user's budget and time constraints. Focus on a tangible product or service, not a digital course or marketing scheme.

Hard Rules:
{banned_phrases}
- The plan must name a **specific niche**, **specific target customer**, and **exact platform(s)/place(s)** to sell or find clients.
- Include **specific numbers**: pricing, a concrete startup cost, a first-week revenue target, and a timeline to reach $100.
- The tone must be encouraging but direct.
- The plan must be broken down into a multi-phase checklist.
- The plan must feel like a personalized roadmap, not a generic template.
- Use a **Strict JSON Schema** as described below.

Return strictly this JSON object (no extra fields, no markdown formatting like ```json):
{
  "business_plan": {
    "name": "One-sentence, descriptive business name (e.g., 'Caledon Custom Garden Design')",
    "description": "2-3 sentences explaining the tangible service/product, target customer, and how it directly solves a problem for them.",
    "startup_cost": "{budget}",
    "time_commitment": "{time}",
    "market_focus": "{market}",
    "feasibility_score": "8.5/10",
    "timeline_to_first_100": "5-7 days",
    "phase_1_immediate_action": {
      "title": "Phase 1: Your First 24 Hours - Setup & Validation",
      "tasks": [
        "1. Concrete Action (e.g., 'Draft a service description and pricing sheet.')",
        "2. Concrete Action (e.g., 'Create a free Google Business Profile or Facebook Page.')"
      ]
    },
    "phase_2_first_clients": {
      "title": "Phase 2: Your First 7 Days - Go Get Your First $100",
      "tasks": [
        "1. Concrete Action (e.g., 'Execute the 'Today's Action Plan' below.')",
        "2. Concrete Action (e.g., 'Set a goal to book 3-5 jobs at a specific price.')"
      ]
    },
    "phase_3_next_steps": {
      "title": "Phase 3: Building Momentum",
      "tasks": [
        "1. Concrete Action (e.g., 'Ask your first customers for testimonials.')",
        "2. Concrete Action (e.g., 'Reinvest 20% of your earnings back into the business.')"
      ]
    },
    "today_action": {
      "title": "Today's Action Plan (2-Hour Checklist)",
      "tasks": [
        "00:00-00:20: Task with a specific time stamp (e.g., 'Brainstorm 5 potential business names.')",
        "00:20-01:10: Task with a specific time stamp and goal (e.g., 'Write a compelling 'About Us' section.')"
      ],
      "email_script": "A short, customizable email script to send to clients.",
      "social_post_caption": "A short, customizable caption for a social media post."
    },
    "success_story_example": {
      "name": "Sarah M.",
      "amount": "$247",
      "timeframe": "5 days",
      "testimonial": "A specific, compelling quote from a user who succeeded with this exact type of plan."
    }
  }
}
Validation before answering:
- All fields in the JSON schema are populated.
- The "today_action" tasks use timestamps and include at least one script (email or social post).
- The "name" and "description" are not generic and clearly define the niche and customer.
- The plan is focused on a physical or tangible service/product.
{no_ai_mention}"#;

/// 30-day launch system for a business the user already picked.
/// Replace: {business_name}, {description}, {skills}, {time}, {budget}, {market},
///          {banned_phrases}, {no_ai_mention}
pub const FULL_PLAN_PROMPT_TEMPLATE: &str = r##"You are a business implementation expert creating a comprehensive 30-day business launch system.

User business: {business_name}
Business description: {description}
User skills: {skills}
Time available: {time}
Budget: {budget}
Market: {market}

Create a complete implementation guide with these ten sections:

1. BUSINESS OVERVIEW (detailed analysis)
2. 30-DAY ACTION CALENDAR (week-by-week breakdown)
3. EMAIL TEMPLATES LIBRARY (10+ scripts for different scenarios)
4. SOCIAL MEDIA CONTENT PACK (posts, captions, hashtag lists)
5. CUSTOMER SERVICE SCRIPTS (objection handling, upselling)
6. PRICING OPTIMIZATION GUIDE (testing strategies, psychological pricing)
7. SCALING ROADMAP ($100 → $1000+ blueprint)
8. TROUBLESHOOTING GUIDE (common problems and solutions)
9. RESOURCE LIBRARY (tools, suppliers, platforms)
10. SUCCESS METRICS (KPIs to track, milestones to hit)

Make this a complete business-in-a-box system that removes all guesswork.

Rules:
{banned_phrases}
- Every price, cost and target is a number, not a range of adjectives.
- Every resource names a real tool or platform and its monthly cost in USD (0 if free).
- No commentary outside the JSON object.

Return strictly this JSON object:
{
  "full_plan": {
    "business_overview": {
      "summary": "3-4 sentences",
      "target_customer": "string",
      "unique_angle": "string",
      "startup_cost_usd": 0
    },
    "action_calendar": [
      {"week": 1, "focus": "string", "daily_tasks": ["Day 1: ...", "Day 2: ..."]}
    ],
    "email_templates": [
      {"scenario": "string", "subject": "string", "body": "string"}
    ],
    "social_media_pack": {
      "posts": ["string"],
      "captions": ["string"],
      "hashtags": ["#string"]
    },
    "customer_service_scripts": [
      {"situation": "string", "script": "string"}
    ],
    "pricing_guide": {
      "launch_price_usd": 0,
      "tests": ["string"],
      "psychological_tactics": ["string"]
    },
    "scaling_roadmap": [
      {"milestone_usd": 100, "actions": ["string"]}
    ],
    "troubleshooting": [
      {"problem": "string", "solution": "string"}
    ],
    "resources": [
      {"name": "string", "purpose": "string", "monthly_cost_usd": 0}
    ],
    "success_metrics": [
      {"kpi": "string", "target": "string", "check_on_day": 7}
    ]
  }
}
{no_ai_mention}"##;
