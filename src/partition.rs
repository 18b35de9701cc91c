//! Splitting the flat item list into per-source groups.

use crate::config::Section;
use crate::models::NewsItem;

/// Items whose `source` is exactly `source`, in their original order.
pub fn partition<'a>(items: &'a [NewsItem], source: &str) -> Vec<&'a NewsItem> {
    items.iter().filter(|item| item.source == source).collect()
}

/// One group per configured section, in section order.
///
/// Items whose source matches no section are left out of every group.
pub fn group<'a, 's>(items: &'a [NewsItem], sections: &'s [Section]) -> Vec<(&'s Section, Vec<&'a NewsItem>)> {
    sections
        .iter()
        .map(|section| (section, partition(items, &section.source)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageConfig;
    use crate::models::tests::item;

    fn ids(items: &[&NewsItem]) -> Vec<String> {
        items.iter().map(|i| i.id.clone()).collect()
    }

    #[test]
    fn test_partition_is_stable() {
        let items = vec![
            item("3", "aitimes.kr"),
            item("1", "aitimes.com"),
            item("2", "aitimes.kr"),
            item("5", "aitimes.kr"),
        ];
        assert_eq!(ids(&partition(&items, "aitimes.kr")), vec!["3", "2", "5"]);
        assert_eq!(ids(&partition(&items, "aitimes.com")), vec!["1"]);
    }

    #[test]
    fn test_partition_requires_exact_match() {
        let items = vec![item("1", "aitimes.kr"), item("2", "AITIMES.KR"), item("3", "www.aitimes.kr")];
        assert_eq!(ids(&partition(&items, "aitimes.kr")), vec!["1"]);
    }

    #[test]
    fn test_partition_empty_input() {
        assert!(partition(&[], "aitimes.kr").is_empty());
    }

    #[test]
    fn test_group_one_item_per_section() {
        let sections = PageConfig::default().sections;
        let items = vec![item("1", "aitimes.kr"), item("2", "aitimes.com")];

        let groups = group(&items, &sections);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0.source, "aitimes.kr");
        assert_eq!(ids(&groups[0].1), vec!["1"]);
        assert_eq!(groups[1].0.source, "aitimes.com");
        assert_eq!(ids(&groups[1].1), vec!["2"]);
    }

    #[test]
    fn test_group_drops_unknown_sources() {
        let sections = PageConfig::default().sections;
        let items = vec![item("1", "unknown.example")];

        let groups = group(&items, &sections);
        assert!(groups.iter().all(|(_, items)| items.is_empty()));
    }

    #[test]
    fn test_every_item_lands_in_at_most_one_group() {
        let sections = PageConfig::default().sections;
        let items: Vec<NewsItem> = (0..30)
            .map(|n| {
                let source = match n % 3 {
                    0 => "aitimes.kr",
                    1 => "aitimes.com",
                    _ => "unknown.example",
                };
                item(&n.to_string(), source)
            })
            .collect();

        let groups = group(&items, &sections);
        for it in &items {
            let hits = groups
                .iter()
                .filter(|(_, members)| members.iter().any(|m| m.id == it.id))
                .count();
            let expected = if it.source == "unknown.example" { 0 } else { 1 };
            assert_eq!(hits, expected, "item {} in {hits} groups", it.id);
        }
    }
}
