use super::*;
use crate::state::learning::{ContentStatus, ContentType};

#[test]
fn item_meta_line_includes_author_when_present() {
    let mut item = LearningItem::new("Programming Rust", ContentType::Book);
    item.author = Some("Jim Blandy".to_owned());
    item.status = ContentStatus::InProgress;
    item.progress = 0.25;
    assert_eq!(item_meta_line(&item), "Book · In progress · Jim Blandy · 25%");
}

#[test]
fn item_meta_line_skips_missing_or_blank_author() {
    let mut item = LearningItem::new("Async in depth", ContentType::Podcast);
    assert_eq!(item_meta_line(&item), "Podcast · Planned · 0%");
    item.author = Some(String::new());
    assert_eq!(item_meta_line(&item), "Podcast · Planned · 0%");
}

#[test]
fn items_summary_pluralizes() {
    assert_eq!(items_summary(0), "Nothing tracked yet.");
    assert_eq!(items_summary(1), "1 item");
    assert_eq!(items_summary(4), "4 items");
}

#[test]
fn filtered_summary_reports_hidden_items() {
    assert_eq!(filtered_summary(3, 3), "3 items");
    assert_eq!(filtered_summary(0, 0), "Nothing tracked yet.");
    assert_eq!(filtered_summary(1, 3), "1 of 3 shown");
    assert_eq!(filtered_summary(0, 2), "0 of 2 shown");
}
