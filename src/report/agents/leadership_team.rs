use crate::report::agent::{PromptTemplate, SectionProfile};
use crate::report::sections::SectionKind;

/// 第5章剖面：领导力与团队
pub(super) fn profile() -> SectionProfile {
    SectionProfile {
        kind: SectionKind::LeadershipTeam,
        context_sections: &[],
        include_retrieval_context: true,
        template: PromptTemplate {
            system_prompt: r#"You are an expert investment report writer specializing in organizational and leadership assessment. Return only the requested headings in valid Markdown. If data is missing, say 'the user did not provide the relevant information' rather than inventing placeholders."#.to_string(),

            opening_instruction: r#"You are drafting **Section 5: Leadership & Team** in Markdown. Use real data from the retrieved context where present. If any data is missing, say: 'the user did not provide the relevant information'."#.to_string(),

            closing_instruction: r#"Your Template:

### **Section 5: Leadership & Team** {#section-5:-leadership-&-team}

#### **Leadership Expertise & Strategic Decision-Making** {#leadership-expertise-&-strategic-decision-making}
| Leadership Role | Experience & Contributions | Identified Gaps |
| ----- | ----- | ----- |
| **Co-Founder & CEO** |  |  |
| **Co-Founder & Business Development Lead** |  |  |
| **Sales & Business Development Team** |  |  |
| **Engineering & Product Development** |  |  |

✅ **Strengths:**
⚠ **Challenges:**

#### **Organizational Structure & Growth Plan** {#organizational-structure-&-growth-plan}
| Functional Area | Current Status | Planned Expansion | Impact on Scalability |
| ----- | ----- | ----- | ----- |
| **Product & Engineering** |  |  |  |
| **Sales & Business Development** |  |  |  |
| **Customer Success & Support** |  |  |  |

✅
⚠

#### **Strategic Hiring Roadmap** {#strategic-hiring-roadmap}
| Role | Current Status | Planned Hiring Timeline | Impact |
| ----- | ----- | ----- | ----- |
| **CTO / Senior Product Leader** |  |  |  |
| **Outbound Sales & BD Team Expansion** |  |  |  |
| **Customer Success & Ops Growth** |  |  |  |

✅
⚠

#### **Leadership Stability & Investor Confidence** {#leadership-stability-&-investor-confidence}
* **Investor View:**
* **Identified Risks:**
* **Mitigation Strategy:**

#### **Leadership & Organizational Stability Assessment** {#leadership-&-organizational-stability-assessment}
| Leadership Category | Assessment |
| ----- | ----- |
| **Strategic Vision & Execution** | 🟢 Strong |
| **Technical Leadership Depth** | 🟡 Needs Improvement |
| **Sales & Business Development Scalability** | 🟡 Needs Expansion |
| **Team Stability & Succession Planning** | 🟡 Moderate Risk |

Instructions:
• Return valid Markdown.
• If data is missing, say: 'the user did not provide the relevant information'.
• Keep headings, subheadings, anchor tags exactly as shown."#.to_string(),
        },
    }
}
