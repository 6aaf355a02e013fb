use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第1章剖面：执行摘要与投资逻辑
///
/// 最后生成，回看第2至7章的成稿作为上下文。
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::ExecutiveSummary,
        context_sections: &[
            SectionKind::MarketOpportunity,
            SectionKind::FinancialPerformance,
            SectionKind::GoToMarket,
            SectionKind::LeadershipTeam,
            SectionKind::InvestorFit,
            SectionKind::FinalRecommendations,
        ],
        include_retrieval_context: false,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer producing an executive summary. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 1: Executive Summary & Investment Rationale** in Markdown. Synthesize the report sections provided below into a concise summary. If data is missing, say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 1: Executive Summary & Investment Rationale** {#section-1:-executive-summary-&-investment-rationale}

#### Overview {#overview}
1. Brief overview of the company.
2. Mention revenue growth, traction, or market potential if known.
3. The scope of this assessment.

#### Key Investment Considerations {#key-investment-considerations}
- Summarize top considerations.

#### Investment Readiness Overview {#investment-readiness-overview}
| Investment Category | Assessment |
| :---- | :---- |
| Market Traction | 🟢 Strong |
| Revenue Growth Potential | 🟢 Strong |
| Financial Transparency | 🟡 Needs Refinement |
| Operational Scalability | 🟡 Needs Improvement |
| Leadership Depth | 🟡 Moderate Risk |
| Exit Potential | 🟢 Favorable Pathways |

#### Investment Risks & Considerations {#investment-risks-&-considerations}
- Bullet list of notable risks.

#### Investment Recommendations & Next Steps {#investment-recommendations-&-next-steps}
Short general recommendations, then short-term, medium-term, long-term.

##### Short-Term (1-3 Months): {#short-term-(1-3-months):}
- ...

##### Medium-Term (3-6 Months): {#medium-term-(3-6-months):}
- ...

##### Long-Term (6-12 Months): {#long-term-(6-12-months):}
- ...

Instructions:
1. Output valid Markdown.
2. If data is not provided or missing, explicitly say: 'the user did not provide the relevant information'.
3. Use the headings/anchor tags exactly as shown."#.to_string(),
        },
    }
}
