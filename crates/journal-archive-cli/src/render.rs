use journal_archive_engine::{ArchiveStats, ArchiveView, ArticleCard, IssueView, PageWindow};

pub fn article_count_label(count: usize) -> String {
    if count == 1 {
        "1 Article".to_string()
    } else {
        format!("{count} Articles")
    }
}

/// Title line followed by indented metadata and the paper link
pub fn card_lines(card: &ArticleCard, indent: &str) -> Vec<String> {
    let mut meta: Vec<String> = Vec::new();
    if !card.authors.is_empty() {
        meta.push(card.authors.clone());
    }
    meta.push(card.published.clone());
    if !card.doi.is_empty() {
        meta.push(format!("DOI {}", card.doi));
    }

    let paper = match &card.paper_link {
        Some(link) => format!("Paper: {link}"),
        None => "Paper N/A".to_string(),
    };

    vec![
        format!("{indent}{}", card.title),
        format!("{indent}  {}", meta.join(" · ")),
        format!("{indent}  {paper}"),
    ]
}

pub fn archive_lines(view: &ArchiveView, stats: &ArchiveStats) -> Vec<String> {
    let mut lines = vec![stats.to_string(), String::new()];
    if let Some(message) = view.message() {
        lines.push(message.to_string());
        return lines;
    }

    for section in view.sections() {
        let marker = if section.expanded { "▾" } else { "▸" };
        lines.push(format!(
            "{marker} {} ({})",
            section.title,
            article_count_label(section.article_count)
        ));
        if section.expanded {
            for card in &section.articles {
                lines.extend(card_lines(card, "    "));
            }
        }
    }
    lines
}

pub fn latest_lines(cards: &[ArticleCard]) -> Vec<String> {
    if cards.is_empty() {
        return vec!["No articles yet.".to_string()];
    }
    cards.iter().flat_map(|card| card_lines(card, "")).collect()
}

/// `« 1 [2] 3 »`, with the arrows only where there is somewhere to go
pub fn pagination_line(window: &PageWindow) -> String {
    let mut parts = Vec::new();
    if window.has_previous() {
        parts.push("«".to_string());
    }
    for page in window.pages() {
        if page == window.current {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if window.has_next() {
        parts.push("»".to_string());
    }
    parts.join(" ")
}

pub fn issue_lines(view: &IssueView) -> Vec<String> {
    match view {
        IssueView::NoArticles => vec!["No articles available in current issue".to_string()],
        IssueView::EmptyPage { page, total_pages } => vec![format!(
            "No articles on page {page} (the current issue has {total_pages} page{})",
            if *total_pages == 1 { "" } else { "s" }
        )],
        IssueView::Articles {
            title,
            page,
            window,
        } => {
            let mut lines = vec![
                title.clone(),
                format!(
                    "Page {} of {} · {}",
                    page.number,
                    page.total_pages,
                    article_count_label(page.total_items)
                ),
                String::new(),
            ];
            lines.extend(page.items.iter().flat_map(|card| card_lines(card, "")));
            if let Some(window) = window {
                lines.push(String::new());
                lines.push(pagination_line(window));
            }
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journal_archive_engine::{ArchiveSession, PaperLinks, parse_articles};
    use pretty_assertions::assert_eq;

    const DATA: &str = "\
title,authors,issue,doi,paper,published
Alice's paper,Alice,1,10.1/x,paperA,01-Jan-25
Bob's paper,Bob,1,10.1/y,paperB,15-Jan-25
February paper,Carol,2,,,01-Feb-25
";

    fn session() -> ArchiveSession {
        ArchiveSession::new(parse_articles(DATA), PaperLinks::new("/paper"))
    }

    #[test]
    fn test_archive_lines_with_one_expanded_volume() {
        let mut session = session();
        session.toggle(1);

        let output = archive_lines(&session.view(), &session.stats()).join("\n");

        insta::assert_snapshot!(output, @r"
        3 Articles | 2 Issues

        ▸ Volume 2 Issue 2 • Feb 2025 (1 Article)
        ▾ Volume 1 Issue 1 • Jan 2025 (2 Articles)
            Bob's paper
              Bob · 15-Jan-25 · DOI 10.1/y
              Paper: /paper/paperB
            Alice's paper
              Alice · 01-Jan-25 · DOI 10.1/x
              Paper: /paper/paperA
        ");
    }

    #[test]
    fn test_archive_empty_states_differ() {
        let stats = ArchiveStats::default();
        let no_archives = archive_lines(&ArchiveView::NoArchives, &stats);
        let no_matches = archive_lines(&ArchiveView::NoMatches, &stats);

        assert_eq!(no_archives.last().map(String::as_str), Some("No Archives Found"));
        assert_ne!(no_archives, no_matches);
    }

    #[test]
    fn test_card_without_paper_or_doi() {
        let cards = session().latest(1);

        assert_eq!(
            card_lines(&cards[0], ""),
            vec!["February paper", "  Carol · 01-Feb-25", "  Paper N/A"]
        );
    }

    #[test]
    fn test_latest_lines_empty() {
        assert_eq!(latest_lines(&[]), vec!["No articles yet."]);
    }

    #[test]
    fn test_pagination_line() {
        let window = PageWindow::around(2, 3, 5).unwrap();
        assert_eq!(pagination_line(&window), "« 1 [2] 3 »");

        let first = PageWindow::around(1, 7, 5).unwrap();
        assert_eq!(pagination_line(&first), "[1] 2 3 4 5 »");
    }

    #[test]
    fn test_issue_lines() {
        let lines = issue_lines(&session().issue_page(1, 9));
        assert_eq!(lines[0], "Volume 2 Issue 2 • Feb 2025");
        assert_eq!(lines[1], "Page 1 of 1 · 1 Article");

        let past_end = issue_lines(&session().issue_page(3, 9));
        assert_eq!(
            past_end,
            vec!["No articles on page 3 (the current issue has 1 page)"]
        );
    }

    #[test]
    fn test_json_shape_of_empty_states() {
        let value = serde_json::to_value(ArchiveView::NoMatches).unwrap();
        assert_eq!(value, serde_json::json!({ "state": "no_matches" }));
    }
}
