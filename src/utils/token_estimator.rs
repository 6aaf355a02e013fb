/// Token估算器，用于估算注入prompt的文本token量
///
/// 检索材料可能混合中英文，两类字符按不同比例折算。
pub struct TokenEstimator {
    rules: TokenCalculationRules,
}

/// Token计算规则
#[derive(Debug, Clone)]
pub struct TokenCalculationRules {
    /// 英文字符的平均token比例（字符数/token数）
    pub english_char_per_token: f64,
    /// 中文字符的平均token比例
    pub chinese_char_per_token: f64,
    /// 基础token开销（系统prompt等）
    pub base_token_overhead: usize,
}

impl Default for TokenCalculationRules {
    fn default() -> Self {
        Self {
            // 基于GPT系列模型的经验值
            english_char_per_token: 4.0,
            chinese_char_per_token: 1.5,
            base_token_overhead: 50,
        }
    }
}

impl Default for TokenEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenEstimator {
    pub fn new() -> Self {
        Self {
            rules: TokenCalculationRules::default(),
        }
    }

    /// 估算文本的token数量
    pub fn estimate_tokens(&self, text: &str) -> usize {
        let character_count = text.chars().count();
        let chinese_char_count = text.chars().filter(|c| is_chinese_char(*c)).count();
        let english_char_count = text
            .chars()
            .filter(|c| {
                c.is_ascii_alphabetic()
                    || c.is_ascii_whitespace()
                    || c.is_ascii_digit()
                    || c.is_ascii_punctuation()
            })
            .count();
        let other_char_count = character_count - chinese_char_count - english_char_count;

        let chinese_tokens =
            (chinese_char_count as f64 / self.rules.chinese_char_per_token).ceil() as usize;
        // 其他字符按英文规则计算
        let english_tokens = ((english_char_count + other_char_count) as f64
            / self.rules.english_char_per_token)
            .ceil() as usize;

        chinese_tokens + english_tokens + self.rules.base_token_overhead
    }
}

/// 判断是否为中文字符
fn is_chinese_char(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF |  // CJK统一汉字
        0x3400..=0x4DBF |  // CJK扩展A
        0x20000..=0x2A6DF | // CJK扩展B
        0x2A700..=0x2B73F | // CJK扩展C
        0x2B740..=0x2B81F | // CJK扩展D
        0x2B820..=0x2CEAF | // CJK扩展E
        0x2CEB0..=0x2EBEF | // CJK扩展F
        0x30000..=0x3134F   // CJK扩展G
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_only_costs_overhead() {
        let estimator = TokenEstimator::new();
        assert_eq!(
            estimator.estimate_tokens(""),
            TokenCalculationRules::default().base_token_overhead
        );
    }

    #[test]
    fn test_english_text_scales_by_char_ratio() {
        let estimator = TokenEstimator::new();
        let text = "a".repeat(400);
        assert_eq!(estimator.estimate_tokens(&text), 100 + 50);
    }

    #[test]
    fn test_chinese_text_costs_more_per_char() {
        let estimator = TokenEstimator::new();
        let english = "a".repeat(300);
        let chinese = "中".repeat(300);
        assert!(estimator.estimate_tokens(&chinese) > estimator.estimate_tokens(&english));
    }
}
