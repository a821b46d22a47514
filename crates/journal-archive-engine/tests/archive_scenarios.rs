use chrono::NaiveDate;
use journal_archive_engine::{
    ArchiveFilter, ArchiveView, ExpansionState, PaperLinks, ParseOptions, group_volumes,
    parse_articles, parse_articles_with, render_archive,
};
use pretty_assertions::assert_eq;

const HEADER: &str = "title,authors,issue,doi,paper,published";

#[test]
fn two_january_articles_form_one_volume_newest_first() {
    let text = format!(
        "{HEADER}\n01-Jan-25,Alice,1,10.1/x,paperA,01-Jan-25\n15-Jan-25,Bob,1,10.1/y,paperB,15-Jan-25\n"
    );

    let groups = group_volumes(&parse_articles(&text));

    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!((group.year, group.month, group.volume_number), (2025, 0, 1));
    let order: Vec<(&str, &str)> = group
        .articles
        .iter()
        .map(|a| (a.published_raw.as_str(), a.authors.as_str()))
        .collect();
    assert_eq!(order, vec![("15-Jan-25", "Bob"), ("01-Jan-25", "Alice")]);
}

#[test]
fn filtering_to_february_still_reports_volume_two() {
    let text = format!(
        "{HEADER}\nA,x,1,d,a,1-Jan-25\nB,x,1,d,b,15-Jan-25\nC,x,1,d,c,1-Feb-25"
    );
    let groups = group_volumes(&parse_articles(&text));

    let unfiltered: Vec<(i32, u32, u32)> = groups
        .iter()
        .map(|g| (g.year, g.month, g.volume_number))
        .collect();
    assert_eq!(unfiltered, vec![(2025, 0, 1), (2025, 1, 2)]);

    let filter = ArchiveFilter::all().with_volume(Some(2));
    let view = render_archive(&groups, &filter, &ExpansionState::new(), &PaperLinks::default());

    assert_eq!(view.sections().len(), 1);
    assert_eq!(view.sections()[0].volume_number, 2);
    assert_eq!(view.sections()[0].title, "Volume 2 Issue 2 • Feb 2025");
}

#[test]
fn header_only_input_shows_no_archives_not_no_matches() {
    let groups = group_volumes(&parse_articles(HEADER));

    let view = render_archive(
        &groups,
        &ArchiveFilter::all(),
        &ExpansionState::new(),
        &PaperLinks::default(),
    );

    assert_eq!(view, ArchiveView::NoArchives);
}

#[test]
fn four_field_row_is_skipped_and_next_row_still_parsed() {
    let text = format!("{HEADER}\nShort,row,only,four\nKept,Alice,1,10.1/k,kept.pdf,03-Mar-25");

    let parsed = parse_articles_with(&text, &ParseOptions::default());

    assert_eq!(parsed.skipped.len(), 1);
    assert_eq!(parsed.records.len(), 1);
    let kept = &parsed.records[0];
    assert_eq!(kept.title, "Kept");
    assert_eq!(kept.authors, "Alice");
    assert_eq!(kept.issue_label, "1");
    assert_eq!(kept.doi, "10.1/k");
    assert_eq!(kept.paper_file.as_deref(), Some("kept.pdf"));
    assert_eq!(kept.published, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
}

#[test]
fn grouping_twice_is_identical() {
    let text = format!(
        "{HEADER}\nA,x,1,d,a,02-Oct-24\nB,x,1,d,b,15-Jan-25\nC,x,1,d,c,1-Feb-25\nD,x,1,d,d,30-Jan-25"
    );
    let records = parse_articles(&text);

    assert_eq!(group_volumes(&records), group_volumes(&records));
}

#[test]
fn year_filter_that_matches_nothing_shows_no_matches() {
    let text = format!("{HEADER}\nA,x,1,d,a,02-Oct-24");
    let groups = group_volumes(&parse_articles(&text));

    let view = render_archive(
        &groups,
        &ArchiveFilter::all().with_year(Some(2030)),
        &ExpansionState::new(),
        &PaperLinks::default(),
    );

    assert_eq!(view, ArchiveView::NoMatches);
}
