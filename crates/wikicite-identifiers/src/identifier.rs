//! Identifier kinds and their citation templates

use serde::{Deserialize, Serialize};

/// Bibliographic identifier schemes recognised in wiki markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    /// International Standard Book Number
    Isbn,
    /// Standard Book Number, the nine digit predecessor of the ISBN
    Sbn,
    /// OCLC control number (WorldCat)
    Oclc,
    /// International Standard Serial Number
    Issn,
    /// Digital Object Identifier
    Doi,
    /// Amazon Standard Identification Number
    Asin,
}

impl Identifier {
    /// Get all identifier kinds
    pub fn all() -> &'static [Identifier] {
        &[
            Identifier::Isbn,
            Identifier::Sbn,
            Identifier::Oclc,
            Identifier::Issn,
            Identifier::Doi,
            Identifier::Asin,
        ]
    }

    /// Name of the citation template for this identifier.
    ///
    /// `table_context` only matters for ISBNs: inside table cells the
    /// `ISBNT` variant is used since `ISBN` renders with list styling.
    pub fn template_name(self, table_context: bool) -> &'static str {
        match self {
            Identifier::Isbn if table_context => "ISBNT",
            Identifier::Isbn => "ISBN",
            Identifier::Sbn => "SBN",
            Identifier::Oclc => "OCLC",
            Identifier::Issn => "ISSN",
            Identifier::Doi => "doi",
            Identifier::Asin => "ASIN",
        }
    }

    /// Wrap an already normalized value in this identifier's template.
    pub fn template(self, value: &str, table_context: bool) -> String {
        format!("{{{{{}|{}}}}}", self.template_name(table_context), value)
    }

    /// Display name used in logs
    pub fn display_name(self) -> &'static str {
        match self {
            Identifier::Isbn => "ISBN",
            Identifier::Sbn => "SBN",
            Identifier::Oclc => "OCLC",
            Identifier::Issn => "ISSN",
            Identifier::Doi => "DOI",
            Identifier::Asin => "ASIN",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates() {
        assert_eq!(Identifier::Oclc.template("1183423539", false), "{{OCLC|1183423539}}");
        assert_eq!(Identifier::Doi.template("10.1000/182", true), "{{doi|10.1000/182}}");
        assert_eq!(Identifier::Isbn.template("0-85131-277-9", true), "{{ISBNT|0-85131-277-9}}");
        assert_eq!(Identifier::Sbn.template("85131-277-9", true), "{{SBN|85131-277-9}}");
    }

    #[test]
    fn test_only_isbn_has_a_table_variant() {
        for id in Identifier::all() {
            let differs = id.template_name(true) != id.template_name(false);
            assert_eq!(differs, *id == Identifier::Isbn, "{:?}", id);
        }
    }
}
