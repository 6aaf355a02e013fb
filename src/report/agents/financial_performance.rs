use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第3章剖面：财务表现与投资就绪度
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::FinancialPerformance,
        context_sections: &[],
        include_retrieval_context: true,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer specializing in financial analysis. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 3: Financial Performance & Investment Readiness** in Markdown. Use real data from the retrieved context where present. If data is missing, say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 3: Financial Performance & Investment Readiness** {#section-3:-financial-performance-&-investment-readiness}

#### **Revenue Growth & Profitability Overview** {#revenue-growth-&-profitability-overview}
| Metric | Founder Company Performance | Industry Benchmark |
| ----- | ----- | ----- |
|  |  |  |
|  |  |  |

#### **Investment Raised & Fund Utilization** {#investment-raised-&-fund-utilization}
| Funding Stage | Founder Company Status | Industry Benchmark |
| ----- | ----- | ----- |
| **Pre-Seed → Seed** |  |  |
| **Total Funding Raised** |  |  |
| **Planned Raise** |  |  |
| **Valuation Transparency** |  |  |

**Investor Concerns:**
⚠ (List 2–3)

#### **Revenue Streams & Financial Risk Analysis** {#revenue-streams-&-financial-risk-analysis}
| Revenue Source | Contribution | Risk Factor |
| ----- | ----- | ----- |
| **SaaS Subscriptions** |  |  |
| **Other Streams** |  |  |

#### **Key Financial Risks & Considerations** {#key-financial-risks-&-considerations}
- Provide bullet points.

#### **Financial Risk Assessment** {#financial-risk-assessment}
| Risk Factor | Assessment |
| ----- | ----- |
| **Revenue Concentration Risk** | 🟡 Moderate |
| **Funding Transparency** | 🟡 Needs Improvement |
| **Burn Rate & Cash Flow Stability** | 🟡 Requires Validation |
| **Profitability & Sustainability** | 🟡 Long-Term Risk |

Instructions:
• Use real data if present. If missing, say: 'the user did not provide the relevant information'.
• Keep headings, subheadings, anchor tags exactly as shown."#.to_string(),
        },
    }
}
