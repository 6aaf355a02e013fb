use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第6章剖面：投资人匹配、退出策略与融资叙事
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::InvestorFit,
        context_sections: &[],
        include_retrieval_context: true,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer specializing in investor relations and exit strategy. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 6: Investor Fit, Exit Strategy & Funding Narrative** in Markdown. Use real data from the retrieved context where present. If any data is missing, say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 6: Investor Fit, Exit Strategy & Funding Narrative** {#section-6:-investor-fit,-exit-strategy-&-funding-narrative}

#### **Investor Profile & Strategic Alignment** {#investor-profile-&-strategic-alignment}
**Ideal Investor Profile:**
✅ **Venture Capital (VC) Firms**
✅ **Private Equity (PE) Funds**
✅ **Strategic Acquirers**

⚠ **Investor Concerns:**
- Outline top concerns.

#### **Exit Strategy Analysis** {#exit-strategy-analysis}
| Exit Type | Viability | Potential Acquirers / Investors | Challenges |
| ----- | ----- | ----- | ----- |
| **M&A** |  |  |  |
| **Private Equity (PE) Buyout** |  |  |  |
| **IPO** |  |  |  |

✅ **Most Likely Exit:**
⚠ **IPO Variability**

#### **Current Funding Narrative & Investor Messaging** {#current-funding-narrative-&-investor-messaging}
* **Total Funding Raised:**
* **Current Round:**
* **Valuation Transparency:**

| Funding Stage | Founder Company Status | Industry Benchmark |
| ----- | ----- | ----- |
| **Pre-Seed → Seed** |  |  |
| **Total Funding Raised** |  |  |
| **Planned Raise** |  |  |
| **Valuation Transparency** |  |  |

✅ **Strengths:**
⚠ **Challenges:**

#### **Investor Messaging & Priorities** {#investor-messaging-&-priorities}
* **High-Growth SaaS Opportunity:**
* **Defensible Market Positioning:**
* **Exit Potential:**

#### **Investor Fit Assessment** {#investor-fit-assessment}
| Investment Factor | Assessment |
| ----- | ----- |
| **Scalability & ROI Potential** | 🟢 Strong |
| **Investor Sentiment & Market Trends** | 🟡 Needs More Public Validation |
| **Funding & Exit Strategy Clarity** | 🟡 Needs Refinement |
| **Risk Profile for Investors** | 🟡 Moderate Risk |

Instructions:
• Return valid Markdown.
• If data is missing, say: 'the user did not provide the relevant information'.
• Keep headings, subheadings, anchor links, and tables."#.to_string(),
        },
    }
}
