use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// 生成流程中章节内容的作用域
pub const SCOPE_SECTIONS: &str = "sections";
/// 检索上下文的作用域
pub const SCOPE_CONTEXT: &str = "context";
/// 结构化摘要的作用域
pub const SCOPE_SUMMARY: &str = "summary";

/// Memory元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryMetadata {
    pub created_at: DateTime<Utc>,
    pub last_updated: DateTime<Utc>,
    pub access_counts: HashMap<String, u64>,
    pub data_sizes: HashMap<String, usize>,
    pub total_size: usize,
}

impl Default for MemoryMetadata {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryMetadata {
    pub fn new() -> Self {
        Self {
            created_at: Utc::now(),
            last_updated: Utc::now(),
            access_counts: HashMap::new(),
            data_sizes: HashMap::new(),
            total_size: 0,
        }
    }
}

/// 单次报告生成过程中的工作内存
///
/// 按作用域与键存放生成过程的中间产物（检索上下文、已完成章节等），
/// 供后续章节的上下文拼装复用。生命周期与一次生成流程一致。
#[derive(Debug)]
pub struct Memory {
    data: HashMap<String, Value>,
    metadata: MemoryMetadata,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            metadata: MemoryMetadata::new(),
        }
    }

    /// 存储数据到指定作用域和键
    pub fn store<T>(&mut self, scope: &str, key: &str, data: T) -> Result<()>
    where
        T: Serialize,
    {
        let full_key = format!("{}:{}", scope, key);
        let serialized = serde_json::to_value(data)?;

        // 计算数据大小
        let data_size = serialized.to_string().len();

        // 更新元数据
        if let Some(old_size) = self.metadata.data_sizes.get(&full_key) {
            self.metadata.total_size -= old_size;
        }
        self.metadata.data_sizes.insert(full_key.clone(), data_size);
        self.metadata.total_size += data_size;
        self.metadata.last_updated = Utc::now();

        self.data.insert(full_key, serialized);
        Ok(())
    }

    /// 从指定作用域和键获取数据
    pub fn get<T>(&mut self, scope: &str, key: &str) -> Option<T>
    where
        T: for<'a> Deserialize<'a>,
    {
        let full_key = format!("{}:{}", scope, key);

        // 更新访问计数
        *self
            .metadata
            .access_counts
            .entry(full_key.clone())
            .or_insert(0) += 1;

        self.data
            .get(&full_key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }

    /// 列出指定作用域的所有键
    pub fn list_keys(&self, scope: &str) -> Vec<String> {
        let prefix = format!("{}:", scope);
        self.data
            .keys()
            .filter(|key| key.starts_with(&prefix))
            .map(|key| key[prefix.len()..].to_string())
            .collect()
    }

    /// 检查是否存在指定数据
    pub fn has_data(&self, scope: &str, key: &str) -> bool {
        let full_key = format!("{}:{}", scope, key);
        self.data.contains_key(&full_key)
    }

    /// 获取内存使用统计
    pub fn get_usage_stats(&self) -> HashMap<String, usize> {
        let mut stats = HashMap::new();

        for (key, size) in &self.metadata.data_sizes {
            let scope = key.split(':').next().unwrap_or("unknown").to_string();
            *stats.entry(scope).or_insert(0) += size;
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_and_get() {
        let mut memory = Memory::new();
        memory
            .store(SCOPE_SECTIONS, "leadership_team", "section body".to_string())
            .unwrap();

        let content: Option<String> = memory.get(SCOPE_SECTIONS, "leadership_team");
        assert_eq!(content, Some("section body".to_string()));
    }

    #[test]
    fn test_scopes_are_isolated() {
        let mut memory = Memory::new();
        memory.store(SCOPE_SECTIONS, "key", "a".to_string()).unwrap();
        memory.store(SCOPE_CONTEXT, "key", "b".to_string()).unwrap();

        let section: Option<String> = memory.get(SCOPE_SECTIONS, "key");
        let context: Option<String> = memory.get(SCOPE_CONTEXT, "key");
        assert_eq!(section, Some("a".to_string()));
        assert_eq!(context, Some("b".to_string()));
    }

    #[test]
    fn test_list_keys_filters_by_scope() {
        let mut memory = Memory::new();
        memory.store(SCOPE_SECTIONS, "one", 1u32).unwrap();
        memory.store(SCOPE_SECTIONS, "two", 2u32).unwrap();
        memory.store(SCOPE_SUMMARY, "other", 3u32).unwrap();

        let mut keys = memory.list_keys(SCOPE_SECTIONS);
        keys.sort();
        assert_eq!(keys, vec!["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_overwrite_updates_total_size() {
        let mut memory = Memory::new();
        memory
            .store(SCOPE_CONTEXT, "retrieval", "x".repeat(100))
            .unwrap();
        memory.store(SCOPE_CONTEXT, "retrieval", "y".to_string()).unwrap();

        let stats = memory.get_usage_stats();
        assert!(stats[SCOPE_CONTEXT] < 100);
        assert!(memory.has_data(SCOPE_CONTEXT, "retrieval"));
    }
}
