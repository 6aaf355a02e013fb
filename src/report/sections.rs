//! 报告章节目录 - 固定的7个章节及其生成顺序

use serde::{Deserialize, Serialize};

/// 报告章节
///
/// 展示顺序为第1至第7章；生成顺序不同：第2至6章依赖检索上下文先行，
/// 第7章汇总第2至6章，执行摘要（第1章）最后生成并回看全部后续章节。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    ExecutiveSummary,
    MarketOpportunity,
    FinancialPerformance,
    GoToMarket,
    LeadershipTeam,
    InvestorFit,
    FinalRecommendations,
}

impl SectionKind {
    /// 展示顺序（报告成稿的章节排列）
    pub const ALL: [SectionKind; 7] = [
        SectionKind::ExecutiveSummary,
        SectionKind::MarketOpportunity,
        SectionKind::FinancialPerformance,
        SectionKind::GoToMarket,
        SectionKind::LeadershipTeam,
        SectionKind::InvestorFit,
        SectionKind::FinalRecommendations,
    ];

    /// 生成顺序（执行摘要最后生成）
    pub const GENERATION_ORDER: [SectionKind; 7] = [
        SectionKind::MarketOpportunity,
        SectionKind::FinancialPerformance,
        SectionKind::GoToMarket,
        SectionKind::LeadershipTeam,
        SectionKind::InvestorFit,
        SectionKind::FinalRecommendations,
        SectionKind::ExecutiveSummary,
    ];

    /// 持久化与缓存使用的章节键名
    pub fn key(&self) -> &'static str {
        match self {
            SectionKind::ExecutiveSummary => "executive_summary_investment_rationale",
            SectionKind::MarketOpportunity => "market_opportunity_competitive_landscape",
            SectionKind::FinancialPerformance => "financial_performance_investment_readiness",
            SectionKind::GoToMarket => "go_to_market_strategy_customer_traction",
            SectionKind::LeadershipTeam => "leadership_team",
            SectionKind::InvestorFit => "investor_fit_exit_strategy_funding",
            SectionKind::FinalRecommendations => "final_recommendations_next_steps",
        }
    }

    /// 章节展示标题
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ExecutiveSummary => "Executive Summary & Investment Rationale",
            SectionKind::MarketOpportunity => "Market Opportunity & Competitive Landscape",
            SectionKind::FinancialPerformance => "Financial Performance & Investment Readiness",
            SectionKind::GoToMarket => "Go-To-Market (GTM) Strategy & Customer Traction",
            SectionKind::LeadershipTeam => "Leadership & Team",
            SectionKind::InvestorFit => "Investor Fit, Exit Strategy & Funding Narrative",
            SectionKind::FinalRecommendations => "Final Recommendations & Next Steps",
        }
    }

    /// 章节编号（展示顺序，从1开始）
    pub fn number(&self) -> usize {
        match self {
            SectionKind::ExecutiveSummary => 1,
            SectionKind::MarketOpportunity => 2,
            SectionKind::FinancialPerformance => 3,
            SectionKind::GoToMarket => 4,
            SectionKind::LeadershipTeam => 5,
            SectionKind::InvestorFit => 6,
            SectionKind::FinalRecommendations => 7,
        }
    }

    /// 由键名反查章节
    pub fn from_key(key: &str) -> Option<SectionKind> {
        SectionKind::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_are_unique() {
        let mut keys: Vec<_> = SectionKind::ALL.iter().map(|s| s.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 7);
    }

    #[test]
    fn test_generation_order_ends_with_executive_summary() {
        assert_eq!(
            SectionKind::GENERATION_ORDER[6],
            SectionKind::ExecutiveSummary
        );
        assert_eq!(SectionKind::GENERATION_ORDER.len(), SectionKind::ALL.len());
    }

    #[test]
    fn test_from_key_roundtrip() {
        for section in SectionKind::ALL {
            assert_eq!(SectionKind::from_key(section.key()), Some(section));
        }
        assert!(SectionKind::from_key("unknown_section").is_none());
    }

    #[test]
    fn test_numbers_match_display_order() {
        for (i, section) in SectionKind::ALL.iter().enumerate() {
            assert_eq!(section.number(), i + 1);
        }
    }
}
