//! Parse → split → tag → serialize properties over realistic journals.

use rollover::{TodoItem, TodoJournal, split, tag_completed, tag_completed_sub_items};
use rstest::rstest;

const WEEK: &str = "\
- [[2025-06-12]]
  - [x] book flights
    - confirmation in mail
  - [ ] tax return
    - [x] collect receipts #2025-06-11
    - [ ] fill forms
      - ask about deductions
        they changed the rules
    - [ ] submit
- [[2025-06-13]]
  - [x] gym
  - [x] groceries
    - [x] milk
    - [x] bread
  - [ ] call back
- [[2025-06-14]]";

fn shape(journal: &TodoJournal) -> Vec<(String, String, bool, usize, Vec<String>)> {
	journal
		.iter_items()
		.map(|(date, item)| (date.to_owned(), item.text.clone(), item.completed, item.sub_items.len(), item.bullet_lines.clone()))
		.collect()
}

#[rstest]
#[case::week(WEEK)]
#[case::tabs("- [[2025-06-12]]\n\t- [ ] a\n\t\t- [x] b\n\t\t\tnote\n\t- [x] c")]
#[case::wide_indent("- [[2025-06-12]]\n    - [ ] a\n        - [ ] b\n            - [x] c\n    - [ ] d")]
#[case::empty_day("- [[2025-06-12]]")]
fn test_serialize_parse_roundtrip(#[case] text: &str) {
	let journal = TodoJournal::parse(text).unwrap();
	let reparsed = TodoJournal::parse(&journal.to_text()).unwrap();
	assert_eq!(shape(&journal), shape(&reparsed));
	assert_eq!(journal.days.len(), reparsed.days.len());
}

#[test]
fn test_canonical_text_is_a_fixed_point() {
	let canonical = TodoJournal::parse(WEEK).unwrap().to_text();
	assert_eq!(canonical, WEEK);
}

#[test]
fn test_split_partitions_items() {
	let journal = TodoJournal::parse(WEEK).unwrap();
	let (completed, open) = split(&journal);

	let top = |j: &TodoJournal| j.days.iter().flat_map(|d| d.items.iter().map(|i| i.text.clone())).collect::<Vec<_>>();
	assert_eq!(top(&completed), ["book flights", "gym", "groceries"]);
	assert_eq!(top(&open), ["tax return", "call back"]);
	assert_eq!(completed.item_count() + open.item_count(), journal.item_count());
	assert!(completed.iter_items().all(|(_, item)| item.is_fully_completed()));
	assert!(open.days.iter().flat_map(|d| &d.items).all(|item| !item.is_fully_completed()));
}

#[test]
fn test_tagging_split_halves() {
	let journal = TodoJournal::parse(WEEK).unwrap();
	let (mut completed, mut open) = split(&journal);
	tag_completed(&mut completed, "2025-06-14");
	tag_completed_sub_items(&mut open, "2025-06-14");

	insta::assert_snapshot!(completed.to_text(), @r"
	- [[2025-06-12]]
	  - [x] book flights #2025-06-14
	    - confirmation in mail
	- [[2025-06-13]]
	  - [x] gym #2025-06-14
	  - [x] groceries #2025-06-14
	    - [x] milk #2025-06-14
	    - [x] bread #2025-06-14
	");
	insta::assert_snapshot!(open.to_text(), @r"
	- [[2025-06-12]]
	  - [ ] tax return
	    - [x] collect receipts #2025-06-11
	    - [ ] fill forms
	      - ask about deductions
	        they changed the rules
	    - [ ] submit
	- [[2025-06-13]]
	  - [ ] call back
	");

	// source untouched by tagging either half
	assert_eq!(journal.to_text(), WEEK);

	let again = completed.clone();
	tag_completed(&mut completed, "2030-01-01");
	assert_eq!(completed, again);
}

#[test]
fn test_parent_done_with_open_child_stays_open() {
	let journal = TodoJournal::parse("- [[2025-06-12]]\n  - [x] parent\n    - [ ] child").unwrap();
	let (completed, mut open) = split(&journal);
	assert!(completed.days.is_empty());

	tag_completed_sub_items(&mut open, "2025-06-12");
	let parent: &TodoItem = &open.days[0].items[0];
	assert_eq!(parent.text, "parent");
	assert_eq!(parent.sub_items[0].text, "child");
}
