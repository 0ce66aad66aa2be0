use cloudrun_ingest::domain::ExtractionResult;

fn result_of(pages: &[&str]) -> ExtractionResult {
    ExtractionResult::new(pages.iter().map(|p| p.to_string()).collect())
}

#[test]
fn given_empty_middle_page_when_aggregating_then_skipped_but_counted() {
    let result = result_of(&["A", "", "B"]);

    assert_eq!(result.aggregated_text(), "A\n\nB");
    assert_eq!(result.page_count, 3);
}

#[test]
fn given_only_empty_pages_when_aggregating_then_text_is_empty() {
    let result = result_of(&["", ""]);

    assert_eq!(result.aggregated_text(), "");
    assert_eq!(result.page_count, 2);
}

#[test]
fn given_no_pages_when_aggregating_then_zero_count() {
    let result = result_of(&[]);

    assert_eq!(result.aggregated_text(), "");
    assert_eq!(result.page_count, 0);
}

#[test]
fn given_pages_when_aggregating_then_order_is_preserved() {
    let result = result_of(&["third?", "no, first", "", "last"]);

    assert_eq!(result.aggregated_text(), "third?\n\nno, first\n\nlast");
}
