//! Keyword tagging of saved decisions

/// Tag applied when no keyword matched
pub const DEFAULT_TAG: &str = "life";

/// (tag, keywords matched against the lowercased title and category)
///
/// Chinese keywords are whole words, not single characters: matching 工 or
/// 公 alone tags 公园 (park) or 工资 (salary) as work.
const TAG_RULES: &[(&str, &[&str])] = &[
    ("work", &["job", "work", "career", "工作", "职场", "公司", "老板", "加班"]),
    ("money", &["money", "salary", "invest", "钱", "薪水", "工资", "投资", "房贷", "消费"]),
    ("relationship", &["love", "relationship", "感情", "恋爱", "结婚", "婚姻", "分手", "关系"]),
];

/// Add topic tags derived from a decision's title and category.
///
/// Existing tags are kept in order and never duplicated. If nothing matches
/// and there were no tags to begin with, [`DEFAULT_TAG`] is added.
pub fn enrich_tags(title: &str, category: &str, existing: &[String]) -> Vec<String> {
    let text = format!("{} {}", title, category).to_lowercase();
    let mut tags: Vec<String> = Vec::with_capacity(existing.len() + 1);
    for tag in existing {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }

    for (tag, keywords) in TAG_RULES {
        let matched = keywords.iter().any(|k| text.contains(k));
        if matched && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    if tags.is_empty() {
        tags.push(DEFAULT_TAG.to_string());
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_keywords() {
        let tags = enrich_tags("Which job offer?", "Career", &[]);
        assert_eq!(tags, vec!["work"]);

        let tags = enrich_tags("Invest or save my salary", "", &[]);
        assert_eq!(tags, vec!["money"]);
    }

    #[test]
    fn test_chinese_needs_whole_word() {
        assert_eq!(enrich_tags("去公园还是去海边", "", &[]), vec!["life"]);
        assert_eq!(enrich_tags("工资太低", "", &[]), vec!["money"]);
    }

    #[test]
    fn test_chinese_keywords() {
        let tags = enrich_tags("要不要换工作", "", &[]);
        assert_eq!(tags, vec!["work"]);

        let tags = enrich_tags("结婚还是再等等", "", &[]);
        assert_eq!(tags, vec!["relationship"]);
    }

    #[test]
    fn test_multiple_matches() {
        let tags = enrich_tags("Love or money", "", &[]);
        assert_eq!(tags, vec!["money", "relationship"]);
    }

    #[test]
    fn test_default_tag() {
        assert_eq!(enrich_tags("Lunch", "Food", &[]), vec!["life"]);
    }

    #[test]
    fn test_existing_tags_kept_without_duplicates() {
        let existing = vec!["work".to_string(), "urgent".to_string()];
        let tags = enrich_tags("New career", "", &existing);
        assert_eq!(tags, vec!["work", "urgent"]);
    }
}
