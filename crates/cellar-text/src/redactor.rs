use serde::{Deserialize, Serialize};

/// Critics and publications removed from notes, in application order.
///
/// Longer names precede the names they contain so that "robert parker" is
/// removed whole before "parker" gets a chance.
pub const CRITIC_ENTITIES: &[&str] = &[
    "antonio galloni",
    "gary walsh",
    "james halliday",
    "neal martin",
    "nick stock",
    "jancis robinson",
    "jancis",
    "jon rimmerman",
    "rimmerman",
    "robert parker",
    "bob parker",
    "parker",
    "the wine front",
    "wine advocate",
    "wine spectator",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub entity: String,
    pub count: usize,
}

/// Exact-substring redaction of critic names
#[derive(Debug, Clone)]
pub struct EntityRedactor {
    entities: Vec<String>,
}

impl EntityRedactor {
    pub fn new(entities: Vec<String>) -> Self {
        Self { entities }
    }

    /// Remove every entity, one after another; each pass sees the output of
    /// the previous one.
    pub fn redact(&self, content: &str) -> (String, Vec<RedactionInfo>) {
        let mut result = content.to_string();
        let mut redactions = Vec::new();

        for entity in self.entities.iter().filter(|e| !e.is_empty()) {
            let count = result.matches(entity.as_str()).count();

            if count > 0 {
                result = result.replace(entity.as_str(), "");

                redactions.push(RedactionInfo {
                    entity: entity.clone(),
                    count,
                });
            }
        }

        (result, redactions)
    }
}

impl Default for EntityRedactor {
    fn default() -> Self {
        Self::new(CRITIC_ENTITIES.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_redaction() {
        let redactor = EntityRedactor::default();
        let content = "robert parker gave it 95 points";

        let (redacted, info) = redactor.redact(content);

        assert_eq!(redacted, " gave it 95 points");
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].entity, "robert parker");
        assert_eq!(info[0].count, 1);
    }

    #[test]
    fn test_list_order_matters() {
        let content = "jancis robinson loved it";

        let (redacted, _) = EntityRedactor::default().redact(content);
        assert_eq!(redacted, " loved it");

        let short_first = EntityRedactor::new(vec!["jancis".to_string(), "jancis robinson".to_string()]);
        let (redacted, info) = short_first.redact(content);
        assert_eq!(redacted, " robinson loved it");
        assert_eq!(info.len(), 1);
    }

    #[test]
    fn test_removal_can_join_fragments() {
        let redactor = EntityRedactor::new(vec!["xx".to_string(), "parker".to_string()]);
        let (redacted, info) = redactor.redact("parxxker");

        assert_eq!(redacted, "");
        assert_eq!(info.len(), 2);
    }

    #[test]
    fn test_counts_repeats() {
        let (_, info) = EntityRedactor::default().redact("parker, parker and more parker");
        assert_eq!(info, vec![RedactionInfo { entity: "parker".to_string(), count: 3 }]);
    }

    #[test]
    fn test_no_entities() {
        let content = "just some honest tasting notes";
        let (redacted, info) = EntityRedactor::default().redact(content);

        assert_eq!(redacted, content);
        assert_eq!(info.len(), 0);
    }
}
