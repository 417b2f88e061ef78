//! Whole-document rewrite tests

use proptest::prelude::*;
use rstest::rstest;
use wikicite_identifiers::ranges::{group_rules, groups, lookup};
use wikicite_identifiers::{
    hyphenate, normalize_isbn, HyphenationError, NormalizeOptions, RewriteOptions, Rewriter,
};

fn known_group() -> impl Strategy<Value = &'static str> {
    let mut keys: Vec<&'static str> = groups().collect();
    keys.sort_unstable();
    prop::sample::select(keys)
}

fn seven_digit_window(digits: &str) -> u32 {
    format!("{:0<7}", &digits[..digits.len().min(7)]).parse().unwrap()
}

const ARTICLE: &str = "'''Example''' is a book.
*Smith, J. (1990). ''Book''. Publisher. ISBN 0851312779.
* [[OCLC (identifier)|OCLC]]&nbsp;1183423539
{{cite journal |title=Networks |doi=10.1000/182 |issn=0015-587X}}
[[Doi (identifier)|doi]]:10.2307/j.ctt4cgmxc.17
{{cite book |title=ISBN Basics |isbn=0-306-40615-2}}
| {{ISBNT|0851312779}} || 1990
**
ISBN-13: 978-0-306-40615-7
[[ISBN (identifier)|ISBN]]&nbsp;[[Special:BookSources/978-1-4314-0578-7|<bdi>978-1-4314-0578-7</bdi>]]
DOI: https://doi.org/10.1075/cogls.00027.hov
<small>[[ISBN]] 3-87034-047-9</small>";

const EXPECTED: &[&str] = &[
    "'''Example''' is a book.",
    "* Smith, J. (1990). ''Book''. Publisher. {{ISBN|0-85131-277-9}}.",
    "* {{OCLC|1183423539}}",
    "{{cite journal |title=Networks |doi=10.1000/182 |issn=0015-587X}}",
    "{{doi|10.2307/j.ctt4cgmxc.17}}",
    "{{cite book |title=<span>ISBN</span> Basics |isbn=0-306-40615-2}}",
    "| {{ISBNT|0-85131-277-9}} || 1990",
    "{{ISBN|978-0-306-40615-7}}",
    "{{ISBN|978-1-4314-0578-7}}",
    "{{doi|10.1075/cogls.00027.hov}}",
    "{{ISBN|3-87034-047-9}}",
];

#[test]
fn test_article_rewrite() {
    let report = Rewriter::new(RewriteOptions::default())
        .rewrite_document(ARTICLE)
        .unwrap();
    assert_eq!(report.lines, EXPECTED);
    assert_eq!(report.changed, 10);
}

#[test]
fn test_rewrite_is_idempotent() {
    let rewriter = Rewriter::new(RewriteOptions::default());
    let once = rewriter.rewrite_document(ARTICLE).unwrap();
    let twice = rewriter.rewrite_document(&once.lines.join("\n")).unwrap();
    assert_eq!(twice.lines, once.lines);
    assert_eq!(twice.changed, 0);
}

#[test]
fn test_changes_only_hides_unchanged_lines() {
    let rewriter = Rewriter::new(RewriteOptions {
        changes_only: true,
        ..Default::default()
    });
    let report = rewriter.rewrite_document(ARTICLE).unwrap();
    assert_eq!(report.changed, 10);
    // the dropped marker line is counted but has nothing to print
    assert_eq!(report.lines.len(), 9);
    assert!(!report.lines.iter().any(|l| l == "'''Example''' is a book."));
    assert!(report.to_string().ends_with("\n\nLINES CHANGED: 10"));
}

#[test]
fn test_changes_only_still_reports_zero() {
    let rewriter = Rewriter::new(RewriteOptions {
        changes_only: true,
        ..Default::default()
    });
    let report = rewriter.rewrite_document("nothing to see\n* here").unwrap();
    assert!(report.lines.is_empty());
    assert_eq!(report.to_string(), "\nLINES CHANGED: 0");
}

#[test]
fn test_table_context_uses_isbnt() {
    let rewriter = Rewriter::new(RewriteOptions {
        table_context: true,
        ..Default::default()
    });
    let report = rewriter.rewrite_document("| ISBN 0851312779 || 1990").unwrap();
    assert_eq!(report.lines, vec!["| {{ISBNT|0-85131-277-9}} || 1990"]);

    let again = rewriter.rewrite_document(&report.lines[0]).unwrap();
    assert_eq!(again.changed, 0);
}

#[rstest]
#[case("ISBN 0-306-40615-2, 978-0-306-40615-7", "{{ISBN|978-0-306-40615-7}}")]
#[case("[[Spezial:ISBN-Suche/388022174X|ISBN 3-88022-174-X]]", "{{ISBN|3-88022-174-X}}")]
#[case(
    "[[Standard Book Number|SBN]] [[Special:BookSources/0851312779|85131 277 9]]",
    "{{SBN|85131-277-9}}"
)]
#[case("<nowiki>ISBN 0 85131 277 9</nowiki>", "{{ISBN|0-85131-277-9}}")]
#[case("ISBN&nbsp;<bdi>978-0-85131-277-5</bdi>", "{{ISBN|978-0-85131-277-5}}")]
#[case("ISBN/EAN: 9780851312775", "{{ISBN|978-0-85131-277-5}}")]
#[case("ISBN 0 85131 277 9", "{{ISBN|0-85131-277-9}}")]
#[case("isbn: 851312779", "{{ISBN|0-85131-277-9}}")]
#[case("Published 1990, isbn = 0851312779", "Published 1990, {{ISBN|0-85131-277-9}}")]
#[case("| isbn = \u{200E}0851312779", "|isbn=0-85131-277-9")]
#[case(
    "[https://www.amazon.com/dp/0851312779 ISBN 0851312779]",
    "{{ISBN|0-85131-277-9}}"
)]
#[case("[[ASIN (identifier)|ASIN]]&nbsp;B0026B3KAI", "{{ASIN|B0026B3KAI}}")]
#[case("[[ISSN (identifier)|ISSN]]&nbsp;0015-587X", "{{ISSN|0015-587X}}")]
#[case("(doi:10.1000/182)", "({{doi|10.1000/182}})")]
#[case("Lisboa, 2010. ISBN 9789896160000", "Lisboa, 2010. {{ISBN|978-989-616-000-0}}")]
#[case("ISBN 978-605-123456-7", "{{ISBN|978-605-123-456-7}}")]
#[case("ISBN 9786550000001", "{{ISBN|978-65-5000-000-1}}")]
#[case("ISBN 9789992012345", "{{ISBN|9789992012345}}")]
fn test_surface_forms(#[case] line: &str, #[case] expected: &str) {
    let rewriter = Rewriter::new(RewriteOptions::default());
    let once = rewriter.rewrite_document(line).unwrap();
    assert_eq!(once.lines, vec![expected]);
    assert_eq!(once.changed, 1);

    let twice = rewriter.rewrite_document(expected).unwrap();
    assert_eq!(twice.changed, 0, "not idempotent: {}", expected);
}

#[rstest]
#[case("| {{ISBNT|0-85131-277-9}} || 1990")]
#[case("{{ISBN|0-85131-277-9}} <small>(paperback)</small>")]
#[case("{{cite book |title=X |isbn13=9780306406157}}")]
#[case("{{cite book |title=X | ISBN-13 = 978-0-306-40615-7}}")]
fn test_already_clean_lines_are_untouched(#[case] line: &str, #[values(false, true)] table: bool) {
    let rewriter = Rewriter::new(RewriteOptions {
        table_context: table,
        ..Default::default()
    });
    let report = rewriter.rewrite_document(line).unwrap();
    assert_eq!(report.lines, vec![line]);
    assert_eq!(report.changed, 0);
}

#[test]
fn test_existing_template_name_is_kept() {
    let plain = Rewriter::new(RewriteOptions::default());
    let report = plain.rewrite_document("| {{ISBNT|0851312779}} || 1990").unwrap();
    assert_eq!(report.lines, vec!["| {{ISBNT|0-85131-277-9}} || 1990"]);

    let table = Rewriter::new(RewriteOptions {
        table_context: true,
        ..Default::default()
    });
    let report = table.rewrite_document("{{ISBN|0851312779}}").unwrap();
    assert_eq!(report.lines, vec!["{{ISBN|0-85131-277-9}}"]);
}

#[test]
fn test_malformed_isbn_degrades_without_aborting() {
    let report = Rewriter::new(RewriteOptions::default())
        .rewrite_document("ISBN 12345\nISBN 0851312779")
        .unwrap();
    assert_eq!(
        report.lines,
        vec!["{{ISBN|12345}}", "{{ISBN|0-85131-277-9}}"]
    );
}

proptest! {
    #[test]
    fn prop_every_group_hyphenates_or_is_unassigned(
        key in known_group(),
        digits in "[0-9]{9}",
        check in "[0-9]",
    ) {
        let (prefix, group) = key.split_once('-').unwrap();
        let body = &digits[..9 - group.len()];
        let isbn = format!("{prefix}{group}{body}{check}");
        let registrant = lookup(group_rules(key).unwrap(), seven_digit_window(body));

        match hyphenate(&isbn) {
            Ok(hyphenated) => {
                let parts: Vec<&str> = hyphenated.split('-').collect();
                prop_assert_eq!(parts.len(), 5);
                prop_assert!(parts.iter().all(|p| !p.is_empty()));
                prop_assert_eq!(parts[0], prefix);
                prop_assert_eq!(parts[1], group);
                prop_assert_eq!(Some(parts[2].len()), registrant);
                prop_assert_eq!(hyphenated.replace('-', ""), isbn.clone());

                if prefix == "978" {
                    let isbn10 = &isbn[3..];
                    prop_assert_eq!(hyphenate(isbn10).unwrap(), &hyphenated[4..]);
                }
            }
            Err(HyphenationError::Fatal { .. }) => prop_assert_eq!(registrant, Some(0)),
            Err(degraded) => prop_assert!(false, "{} degraded: {:?}", isbn, degraded),
        }
    }

    #[test]
    fn prop_nine_digits_are_zero_padded(digits in "[0-9]{9}") {
        let plain = NormalizeOptions::default();
        prop_assert_eq!(
            normalize_isbn(&digits, plain).unwrap(),
            normalize_isbn(&format!("0{}", digits), plain).unwrap()
        );
    }

    #[test]
    fn prop_bare_isbn_rewrite_is_idempotent(isbn in "[01][0-9]{8}[0-9X]", table in any::<bool>()) {
        let rewriter = Rewriter::new(RewriteOptions {
            table_context: table,
            ..Default::default()
        });
        let once = rewriter.rewrite_document(&format!("* Book. ISBN {}.", isbn)).unwrap();
        let twice = rewriter.rewrite_document(&once.lines.join("\n")).unwrap();
        prop_assert_eq!(once.changed, 1);
        prop_assert_eq!(twice.changed, 0);
    }
}
