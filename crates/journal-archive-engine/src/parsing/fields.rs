/// Split one delimited line into cleaned fields.
///
/// A delimiter between a matched pair of double quotes does not split.
/// Each field is trimmed and loses one leading and one trailing quote;
/// inside a quoted field `""` stands for a literal quote.
pub fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
            current.push(ch);
        } else if ch == delimiter && !in_quotes {
            fields.push(clean_field(&current));
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(clean_field(&current));

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    let quoted = trimmed.len() >= 2 && trimmed.starts_with('"') && trimmed.ends_with('"');

    let inner = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let inner = inner.strip_suffix('"').unwrap_or(inner).trim();

    if quoted {
        inner.replace("\"\"", "\"")
    } else {
        inner.to_string()
    }
}

/// Guess the delimiter from the header line.
///
/// Only characters outside double quotes count. Comma wins whenever present;
/// otherwise semicolon, then tab.
pub fn detect_delimiter(header: &str) -> char {
    let mut in_quotes = false;
    let (mut comma, mut semicolon, mut tab) = (false, false, false);

    for ch in header.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            _ if in_quotes => {}
            ',' => comma = true,
            ';' => semicolon = true,
            '\t' => tab = true,
            _ => {}
        }
    }

    if comma {
        ','
    } else if semicolon {
        ';'
    } else if tab {
        '\t'
    } else {
        ','
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("a,b,c", vec!["a", "b", "c"])]
    #[case(" a , b ,c ", vec!["a", "b", "c"])]
    #[case("a,\"b,c\",d", vec!["a", "b,c", "d"])]
    #[case("a, \"b, c\" ,d", vec!["a", "b, c", "d"])]
    #[case("\"Title\",\"Karan, Vishnu\"", vec!["Title", "Karan, Vishnu"])]
    #[case("\"He said \"\"hi\"\"\",x", vec!["He said \"hi\"", "x"])]
    #[case("a,,c", vec!["a", "", "c"])]
    #[case("a,b,", vec!["a", "b", ""])]
    #[case("", vec![""])]
    #[case("\"unterminated, still one", vec!["unterminated, still one"])]
    fn test_split_comma_fields(#[case] line: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_fields(line, ','), expected);
    }

    #[test]
    fn test_split_semicolon_fields_keeps_commas() {
        let fields = split_fields("Trails;Karan, Vishnu;1;10.1/x;trails.pdf;24-Dec-26", ';');
        assert_eq!(
            fields,
            vec!["Trails", "Karan, Vishnu", "1", "10.1/x", "trails.pdf", "24-Dec-26"]
        );
    }

    #[test]
    fn test_quoted_semicolon_does_not_split() {
        let fields = split_fields("\"a;b\";c", ';');
        assert_eq!(fields, vec!["a;b", "c"]);
    }

    #[rstest]
    #[case("Title,Author,Issue", ',')]
    #[case("Title;Author;Issue", ';')]
    #[case("Title\tAuthor\tIssue", '\t')]
    #[case("Title;Author, Editor", ',')]
    #[case("Title", ',')]
    #[case("Title;\"Authors, in order\";Issue", ';')]
    #[case("Title\t\"Authors, in order\"\tIssue", '\t')]
    #[case("\"Title;Subtitle\",Authors", ',')]
    fn test_detect_delimiter(#[case] header: &str, #[case] expected: char) {
        assert_eq!(detect_delimiter(header), expected);
    }
}
