//! The ordered detector registry
//!
//! Each detector recognises one surface syntax of one identifier and has
//! exactly two capture groups: group 1 is the span that gets replaced,
//! group 2 the raw payload handed to the normalizer.
//!
//! Order matters. Structured forms (catalog links, labelled forms) come
//! before the bare catch-alls, because once a catch-all has rewritten part
//! of a line the structured form can no longer be recognised. The `group`
//! number on every detector records this priority and never decreases along
//! the registry.
//!
//! None of the patterns can match inside a template they emit: the bare
//! forms require a delimiter that is not `|`, and the only detector that
//! looks at `{{ISBN|...}}` re-emits the same text.

use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::error::HyphenationError;
use crate::identifier::Identifier;
use crate::normalizers::{
    defuse_citation_title, normalize_asin, normalize_citation_isbn, normalize_doi,
    normalize_isbn, normalize_issn, normalize_oclc, NormalizeOptions,
};

/// What to do with a detector's capture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Normalizer {
    Oclc,
    Issn,
    Doi,
    Asin,
    Isbn,
    Sbn,
    /// `{{ISBN|...}}` or `{{ISBNT|...}}` already in the text, name kept
    IsbnTemplate,
    /// `|isbn=` parameter inside a citation template
    CitationIsbn,
    /// Citation title containing the word ISBN
    DefuseTitle,
}

impl Normalizer {
    /// The identifier this normalizer produces, if any.
    pub fn identifier(self) -> Option<Identifier> {
        match self {
            Normalizer::Oclc => Some(Identifier::Oclc),
            Normalizer::Issn => Some(Identifier::Issn),
            Normalizer::Doi => Some(Identifier::Doi),
            Normalizer::Asin => Some(Identifier::Asin),
            Normalizer::Isbn | Normalizer::IsbnTemplate | Normalizer::CitationIsbn => {
                Some(Identifier::Isbn)
            }
            Normalizer::Sbn => Some(Identifier::Sbn),
            Normalizer::DefuseTitle => None,
        }
    }

    /// Compute the replacement for one occurrence.
    pub fn apply(
        self,
        target: &str,
        raw: &str,
        table_context: bool,
    ) -> Result<String, HyphenationError> {
        let options = NormalizeOptions {
            table_context,
            sbn: self == Normalizer::Sbn,
        };
        Ok(match self {
            Normalizer::Oclc => normalize_oclc(raw),
            Normalizer::Issn => normalize_issn(raw),
            Normalizer::Doi => normalize_doi(raw),
            Normalizer::Asin => normalize_asin(raw),
            Normalizer::Isbn | Normalizer::Sbn => normalize_isbn(raw, options)?,
            Normalizer::IsbnTemplate => normalize_isbn(
                raw,
                NormalizeOptions {
                    table_context: target.starts_with("{{ISBNT|"),
                    sbn: false,
                },
            )?,
            Normalizer::CitationIsbn => normalize_citation_isbn(raw)?,
            Normalizer::DefuseTitle => defuse_citation_title(target),
        })
    }
}

/// One occurrence found by a detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<'a> {
    /// Byte range of the span to replace
    pub target: Range<usize>,
    /// Text of the span to replace
    pub matched: &'a str,
    /// Raw identifier payload
    pub raw: &'a str,
}

/// A registered surface syntax
#[derive(Debug)]
pub struct Detector {
    pub name: &'static str,
    pub group: u8,
    pub pattern: Regex,
    pub normalizer: Normalizer,
    /// Skip matches followed by `=`, i.e. the name of a `name=value` pair
    pub skip_parameter_names: bool,
}

impl Detector {
    fn new(name: &'static str, group: u8, pattern: &str, normalizer: Normalizer) -> Self {
        Self {
            name,
            group,
            pattern: Regex::new(pattern).unwrap(),
            normalizer,
            skip_parameter_names: false,
        }
    }

    fn skipping_parameter_names(mut self) -> Self {
        self.skip_parameter_names = true;
        self
    }

    /// Every non-overlapping occurrence in `line`, left to right.
    pub fn find<'a>(&self, line: &'a str) -> Vec<Occurrence<'a>> {
        self.pattern
            .captures_iter(line)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let rest = line[whole.end()..].trim_start();
                if self.skip_parameter_names && rest.starts_with('=') {
                    return None;
                }
                let target = caps.get(1)?;
                let raw = caps.get(2)?;
                Some(Occurrence {
                    target: target.range(),
                    matched: target.as_str(),
                    raw: raw.as_str(),
                })
            })
            .collect()
    }
}

// Link label after a catalog link target: skip to the first digit, capture
// the identifier, skip trailing markup up to the closing brackets.
const LABEL: &str = r"\|[^0-9\]]*([0-9xX-]+)[^0-9\]]*\]\]";

lazy_static! {
    static ref REGISTRY: Vec<Detector> = vec![
        // [[OCLC (identifier)|OCLC]]&nbsp;1183423539
        Detector::new(
            "oclc-block",
            1,
            r"(\[\[OCLC \(identifier\)\|OCLC\]\][^0-9]*([0-9]+))",
            Normalizer::Oclc,
        ),
        Detector::new("oclc-bare", 1, r"(OCLC[^=|]([0-9]+))", Normalizer::Oclc),
        // [[ISSN (identifier)|ISSN]]&nbsp;0015-587X
        Detector::new(
            "issn-block",
            2,
            r"(\[\[ISSN \(identifier\)\|ISSN\]\][^0-9]*([0-9]{4}-[0-9Xx]{4}))",
            Normalizer::Issn,
        ),
        Detector::new("issn-bare", 2, r"(ISSN[^=|]([0-9]{4}-[0-9Xx]{4}))", Normalizer::Issn),
        // [[Doi (identifier)|doi]]:10.2307/j.ctt4cgmxc.17
        Detector::new(
            "doi-block",
            3,
            r"(\[\[Doi \(identifier\)\|doi\]\]:([^\s<]+[^\s,.<')]))",
            Normalizer::Doi,
        ),
        // DOI: https://doi.org/10.1075/cogls.00027.hov
        // Not after `=` (url parameters) or `[` (external link targets).
        Detector::new(
            "doi-url",
            3,
            r"(?:^|[^=\[/])((?:<nowiki>)?(?:DOI:\s?)?https?://(?:dx\.)?doi\.org/([^\s<|\]]*[^\s,.<'|\])])(?:</nowiki>)?)",
            Normalizer::Doi,
        ),
        // doi:10.1000/182
        Detector::new(
            "doi-bare",
            3,
            r"(?:^|[^\w=/|-])((?i:doi):\s?(10\.[0-9]{4,9}/[^\s<|\]}]*[^\s,.;<'|\]})]))",
            Normalizer::Doi,
        ),
        // [[ASIN (identifier)|ASIN]]&nbsp;B0026B3KAI
        Detector::new(
            "asin-block",
            4,
            r"(\[\[ASIN \(identifier\)\|ASIN\]\][^0-9A-Z]*([0-9A-Z]+))",
            Normalizer::Asin,
        ),
        // [https://www.amazon.com/dp/0851312779 ISBN 0851312779]
        Detector::new(
            "isbn-bookseller-link",
            5,
            r"(\[https?://(?:www\.)?(?:amazon|barnesandnoble|bookdepository|abebooks|bookshop)\.[^\s\]]*[^\]]*?ISBN:? ?([0-9xX-]+)[^0-9\]]*\])",
            Normalizer::Isbn,
        ),
        // {{cite book |title=The ISBN Story ...}}
        Detector::new(
            "cite-title-isbn",
            6,
            r"\{\{\s*[Cc]ite[^}]*?\|\s*(title\s*=\s*((?:[^|}]*?[^>|}])?ISBN[^|}]*))",
            Normalizer::DefuseTitle,
        ),
        // ISBN 0-306-40615-2, 978-0-306-40615-7
        Detector::new(
            "isbn-dual",
            7,
            r"(ISBN:?(?:&nbsp;|\s)*(?:[0-9]-?){9}[0-9Xx]\s*(?:[,/;]|or)\s*(?:ISBN(?:-?13)?:?\s*)?(97[89](?:-?[0-9]){10}))",
            Normalizer::Isbn,
        ),
        // ISBN-13: 978-0-306-40615-7, not inside a link label
        Detector::new(
            "isbn-labelled",
            8,
            r"(?:^|[^|/\w])(ISBN[- ]?1[03](?::\s?|\s)(?:ISBN\s?)?([0-9][0-9xX-]*[0-9xX]))",
            Normalizer::Isbn,
        ),
        // [[ISBN (identifier)|ISBN]] [[Special:BookSources/978-1-4314-0578-7|<bdi>978-1-4314-0578-7</bdi>]]
        Detector::new(
            "isbn-booksources-linked",
            9,
            &format!(
                r"(\[\[(?:ISBN|International Standard Book Number)[^\]]*\]\][^\[]*\[\[Special:BookSources/[0-9xX-]+{})",
                LABEL
            ),
            Normalizer::Isbn,
        ),
        // ISBN [[Special:BookSources/0851312779|0-85131-277-9]]
        Detector::new(
            "isbn-booksources",
            9,
            &format!(r"(ISBN(?:&nbsp;|:|\s)*\[\[Special:BookSources/[0-9xX-]+{})", LABEL),
            Normalizer::Isbn,
        ),
        // [[Spezial:ISBN-Suche/388022174X|ISBN 3-88022-174-X]]
        Detector::new(
            "isbn-booksources-de",
            9,
            &format!(r"(\[\[(?::de:)?Spezial:ISBN[ -]Suche/[0-9xX-]+{})", LABEL),
            Normalizer::Isbn,
        ),
        Detector::new(
            "isbn-booksources-fr",
            9,
            &format!(r"(\[\[:fr:Spécial:Ouvrages de référence/[0-9xX-]+{})", LABEL),
            Normalizer::Isbn,
        ),
        Detector::new(
            "isbn-booksources-it",
            9,
            &format!(r"(\[\[:it:Speciale:RicercaISBN/[0-9xX-]+{})", LABEL),
            Normalizer::Isbn,
        ),
        // [[Special:BookSources|ISBN-13: 978-...]]
        Detector::new(
            "isbn-booksources-labelled",
            9,
            r"(\[\[Special:BookSources\|ISBN-1[03]: ?([0-9xX-]+)[^0-9\]]*\]\])",
            Normalizer::Isbn,
        ),
        // [[Standard Book Number|SBN]] [[Special:BookSources/0851312779|85131 277 9]]
        Detector::new(
            "sbn-booksources-linked",
            10,
            r"(\[\[(?:SBN|Standard Book Number)[^\]]*\]\][^\[]*\[\[Special:BookSources/([0-9xX-]+)\|[^\]]*\]\])",
            Normalizer::Sbn,
        ),
        // <nowiki>ISBN 0 85131 277 9</nowiki>
        Detector::new(
            "isbn-nowiki",
            11,
            r"(<nowiki>\s*ISBN(?:&nbsp;|:|\s)*([0-9xX][0-9xX -]*[0-9xX])\s*</nowiki>)",
            Normalizer::Isbn,
        ),
        // [[ISBN]] 3-87034-047-9
        Detector::new(
            "isbn-wikilink",
            12,
            r"(\[\[(?:ISBN|International Standard Book Number\|ISBN)\]\]:?(?:&nbsp;|\s)*([0-9][0-9xX-]*[0-9xX]))",
            Normalizer::Isbn,
        ),
        // ISBN <bdi>978-0-85131-277-5</bdi>
        Detector::new(
            "isbn-bdi",
            13,
            r"(ISBN(?:&nbsp;|:|\s)*<bdi>\s*([0-9xX][0-9xX -]*[0-9xX])\s*</bdi>)",
            Normalizer::Isbn,
        ),
        // ISBN/EAN: 9780851312775
        Detector::new(
            "isbn-ean",
            14,
            r"((?:ISBN/)?EAN:? (97[89][0-9-]*[0-9]))",
            Normalizer::Isbn,
        ),
        // {{ISBN|185315229X}}
        Detector::new(
            "isbn-template",
            15,
            r"(\{\{ISBNT?\|\s*([0-9xX-]+)\s*\}\})",
            Normalizer::IsbnTemplate,
        ),
        // |isbn=‎0851312779
        Detector::new(
            "isbn-citation-field",
            16,
            r"(\|\s*(?i:isbn)\s*=\s*\x{200E}?\s*([0-9xX][0-9xX-]*))",
            Normalizer::CitationIsbn,
        ),
        // ISBN 0 85131 277 9
        Detector::new(
            "isbn-spaced",
            17,
            r"(ISBN(?:&nbsp;|:|\s)*((?:97[89] )?[0-9]{1,5} [0-9]{1,7} [0-9]{1,7} [0-9Xx])\b)",
            Normalizer::Isbn,
        ),
        // isbn: 0851312779, but not |isbn13=...
        Detector::new(
            "isbn-plain",
            18,
            r"(?i)(ISBN(?:&nbsp;)?[\s:]*([ 0-9-]+[0-9xX]))",
            Normalizer::Isbn,
        )
        .skipping_parameter_names(),
        // isbn = 0851312779, outside a template parameter list
        Detector::new(
            "isbn-bare-field",
            19,
            r"(?:^|[^|\s])\s*((?i:isbn)\s*=\s*([0-9xX][0-9xX-]*))",
            Normalizer::Isbn,
        ),
    ];
}

/// The process-wide registry, in application order.
pub fn registry() -> &'static [Detector] {
    &REGISTRY
}

/// Look a detector up by name.
pub fn detector(name: &str) -> Option<&'static Detector> {
    REGISTRY.iter().find(|d| d.name == name)
}
