use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第4章剖面：市场进入策略与客户增长
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::GoToMarket,
        context_sections: &[],
        include_retrieval_context: true,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer specializing in go-to-market strategy. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 4: Go-To-Market (GTM) Strategy & Customer Traction** in Markdown. Use real data from the retrieved context where present. If data is missing, say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 4: Go-To-Market (GTM) Strategy & Customer Traction** {#section-4:-go-to-market-(gtm)-strategy-&-customer-traction}

#### **Customer Acquisition Strategy** {#customer-acquisition-strategy}
| Acquisition Channel | Performance | Challenges |
| ----- | ----- | ----- |
|  |  |  |
|  |  |  |

✅ **Strengths:**
⚠ **Challenges:**

#### **Customer Retention & Lifetime Value** {#customer-retention-&-lifetime-value}
| Retention Metric | Founder Company Performance | Industry Benchmark |
| ----- | ----- | ----- |
| **Customer Retention Rate** |  |  |
| **Churn Rate** |  |  |
| **Referral-Based Growth** |  |  |

✅ **Strengths:**
⚠ **Challenges:**

#### **Challenges & Market Expansion Plan** {#challenges-&-market-expansion-plan}
⚠ **Customer Acquisition Cost (CAC) Optimization Needed**
* **Challenge:**
* **Solution:**

⚠ **Revenue Concentration Risk**
* **Challenge:**
* **Solution:**

#### **Market Expansion Strategy** {#market-expansion-strategy}
✅ **Franchise Pilot Growth** –
✅ **Supplier Network Growth** –
✅ **AI-Driven Enhancements** –

#### **GTM Performance Assessment** {#gtm-performance-assessment}
| Category | Performance | Assessment |
| ----- | ----- | ----- |
| **Lead Generation Efficiency** |  |  |
| **Customer Retention** |  |  |
| **Revenue Growth** |  |  |
| **Outbound Sales Effectiveness** |  |  |
| **Market Diversification** |  |  |

Instructions:
• Output valid Markdown.
• If data is missing, say: 'the user did not provide the relevant information'.
• Maintain headings, subheadings, anchor tags exactly."#.to_string(),
        },
    }
}
