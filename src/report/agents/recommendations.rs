use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第7章剖面：最终建议与后续步骤
///
/// 汇总第2至6章的成稿作为上下文，不直接使用检索上下文。
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::FinalRecommendations,
        context_sections: &[
            SectionKind::MarketOpportunity,
            SectionKind::FinancialPerformance,
            SectionKind::GoToMarket,
            SectionKind::LeadershipTeam,
            SectionKind::InvestorFit,
        ],
        include_retrieval_context: false,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer producing final recommendations. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 7: Final Recommendations & Next Steps** in Markdown. Base your recommendations on the report sections provided below. If data is missing, say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 7: Final Recommendations & Next Steps** {#section-7:-final-recommendations-&-next-steps}

#### **Key Strengths Supporting Investment Consideration** {#key-strengths-supporting-investment-consideration}
✅ **High Market Traction & Growth Metrics**
* ...
✅ **Scalable SaaS Business Model**
* ...
✅ **Potential for Strategic M&A Exit**
* ...

#### **Key Investment Risks & Mitigation Strategies** {#key-investment-risks-&-mitigation-strategies}
⚠ **Over-Reliance on**
* **Risk:**
* **Mitigation:**

⚠ **Limited Financial Transparency**
* **Risk:**
* **Mitigation:**

#### **Prioritized Action Plan for Investment Readiness** {#prioritized-action-plan-for-investment-readiness}
| Priority Level | Action Item | Impact | Feasibility |
| ----- | ----- | ----- | ----- |
| **Short-Term (1-3 Months)** |  |  |  |
| **Medium-Term (3-6 Months)** |  |  |  |
| **Long-Term (6-12 Months)** |  |  |  |

#### **Strategic Roadmap for Growth & Exit Planning** {#strategic-roadmap-for-growth-&-exit-planning}
| Phase | Actionable Steps | Key Performance Indicators (KPIs) |
| ----- | ----- | ----- |
| **Short-Term (1-3 Months)** |  |  |
| **Medium-Term (3-6 Months)** |  |  |
| **Long-Term (6-12 Months)** |  |  |

#### **Investment Readiness & Market Positioning** {#investment-readiness-&-market-positioning}
| Category | Assessment |
| ----- | ----- |
| **Investment Readiness** | 🟢 Strong Alignment |
| **Market Positioning & Competitive Strength** | 🟢 Strong Fit |
| **Funding Transparency & Investor Reporting** | 🟡 Needs Improvement |
| **Leadership & Operational Scalability** | 🟡 Moderate Risk |
| **Exit Viability & M&A Potential** | 🟢 Favorable Pathways |

### **Final Investment Recommendation** {#final-investment-recommendation}
A short paragraph summarizing the final recommendation.

### **Next Steps for Investment Consideration** {#next-steps-for-investment-consideration}
1. ...
2. ...
3. ...
4. ...

### **Final Conclusion** {#final-conclusion}
Wrap up with a concluding statement.

Instructions:
• Provide valid Markdown.
• If data is missing, say: 'the user did not provide the relevant information'.
• Keep headings, subheadings, anchor tags exactly."#.to_string(),
        },
    }
}
