use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第2章剖面：市场机会与竞争格局
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::MarketOpportunity,
        context_sections: &[],
        include_retrieval_context: true,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer specializing in market analysis. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 2: Market Opportunity & Competitive Landscape** in Markdown. Incorporate real data from the retrieved context where available. If data is missing, explicitly say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 2: Market Opportunity & Competitive Landscape** {#section-2:-market-opportunity-&-competitive-landscape}

#### Market Overview {#market-overview}
Summarize the market.

#### Market Size & Growth Projections: {#market-size-&-growth-projections:}
- **Total Addressable Market (TAM):**
- **Annual Growth Rate:**
- **Adoption Trends:**

#### Competitive Positioning {#competitive-positioning}
Highlight the company's advantages.

##### Competitive Landscape {#competitive-landscape}
| Competitor | Market Focus | Key Strengths | Challenges |
| ----- | ----- | ----- | ----- |
|  |  |  |  |

#### Key Market Takeaways: {#key-market-takeaways:}
- Major insights or bullet points.

##### Challenges & Expansion Opportunities {#challenges-&-expansion-opportunities}
###### Challenges: {#challenges:}
- List any market or operational barriers.

###### Opportunities for Market Expansion: {#opportunities-for-market-expansion:}
✅ Possible growth avenues.

#### Market Fit Assessment {#market-fit-assessment}
| Market Factor | Assessment |
| ----- | ----- |
|  | 🟢 Strong |
|  | 🟡 Needs Expansion |

Instructions:
• Provide valid Markdown.
• If any data is missing, say: 'the user did not provide the relevant information'.
• Keep the headings, subheadings, and anchor links exactly."#.to_string(),
        },
    }
}
