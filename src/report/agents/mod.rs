//! 章节剖面表 - 每个报告章节一份SectionProfile

mod executive_summary;
mod financial_performance;
mod go_to_market;
mod investor_fit;
mod leadership_team;
mod market_analysis;
mod recommendations;

use crate::report::agent::SectionProfile;
use crate::report::sections::SectionKind;

/// 获取指定章节的生成剖面
pub fn profile_for(section: SectionKind) -> SectionProfile {
    match section {
        SectionKind::ExecutiveSummary => executive_summary::profile(),
        SectionKind::MarketOpportunity => market_analysis::profile(),
        SectionKind::FinancialPerformance => financial_performance::profile(),
        SectionKind::GoToMarket => go_to_market::profile(),
        SectionKind::LeadershipTeam => leadership_team::profile(),
        SectionKind::InvestorFit => investor_fit::profile(),
        SectionKind::FinalRecommendations => recommendations::profile(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_for_covers_every_section() {
        for section in SectionKind::ALL {
            let profile = profile_for(section);
            assert_eq!(profile.kind, section);
            assert!(!profile.template.system_prompt.is_empty());
            assert!(!profile.template.closing_instruction.is_empty());
        }
    }

    #[test]
    fn test_context_dependencies_are_earlier_in_generation_order() {
        let order = SectionKind::GENERATION_ORDER;
        for (position, section) in order.iter().enumerate() {
            let profile = profile_for(*section);
            for dep in profile.context_sections {
                let dep_position = order.iter().position(|s| s == dep).unwrap();
                assert!(
                    dep_position < position,
                    "{} depends on {} which is generated later",
                    section.key(),
                    dep.key()
                );
            }
        }
    }

    #[test]
    fn test_summary_profiles_skip_retrieval_context() {
        assert!(!profile_for(SectionKind::ExecutiveSummary).include_retrieval_context);
        assert!(!profile_for(SectionKind::FinalRecommendations).include_retrieval_context);
        assert!(profile_for(SectionKind::MarketOpportunity).include_retrieval_context);
    }
}
