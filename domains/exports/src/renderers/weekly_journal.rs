//! Weekly journal: founder reflections, one section per week

use serde_json::Value;

use crate::blocks::{Block, BlockBuilder};
use crate::payload::{ValueProposition, WeeklyJournalPayload};

pub fn render(data: &Value, _vp: Option<&ValueProposition>) -> Vec<Block> {
    let journal = WeeklyJournalPayload::from_data(data);

    if journal.entries.is_empty() {
        return BlockBuilder::new().subheading("Entries").placeholder().build();
    }

    journal
        .entries
        .iter()
        .enumerate()
        .fold(BlockBuilder::new(), |builder, (i, entry)| {
            let heading = match entry.week.as_deref() {
                Some(week) => format!("Week {week}"),
                None => format!("Entry {}", i + 1),
            };
            builder
                .subheading(heading)
                .field("Wins", entry.wins.as_deref())
                .field("Challenges", entry.challenges.as_deref())
                .field("Lessons learned", entry.lessons.as_deref())
                .field("Next steps", entry.next_steps.as_deref())
                .inline("Mood", entry.mood.as_deref())
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_by_week() {
        let blocks = render(
            &json!({"entries": [
                {"week": 1, "wins": "Registered company"},
                {"challenges": "No pilot site yet"},
            ]}),
            None,
        );
        let headings: Vec<_> = blocks
            .iter()
            .filter(|b| matches!(b, Block::Heading2(_)))
            .filter_map(Block::text)
            .collect();
        assert_eq!(headings, vec!["Week 1", "Entry 2"]);
    }

    #[test]
    fn test_empty_payload() {
        let blocks = render(&json!({"entries": []}), None);
        assert_eq!(
            blocks,
            vec![
                Block::Heading2("Entries".to_string()),
                Block::Body("—".to_string())
            ]
        );
    }
}
