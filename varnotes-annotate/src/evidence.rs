//! Evidence link heuristics.
//!
//! Best-effort extraction of a GET-Evidence identifier from free-text
//! clinical nomenclature. A miss is a normal outcome, never an error.

use std::sync::LazyLock;

use regex::Regex;

/// Base URL of the GET-Evidence entry for a variant.
pub const EVIDENCE_URL: &str = "http://evidence.pgp-hms.org/";

// Gene/transcript token in parentheses, then a protein change whose
// numeric position is followed by a three-letter amino-acid code and
// the `fs` frameshift marker.
static RE_FRAMESHIFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\):.*?\(p\.[A-Za-z]+([0-9]+)[A-Z][a-z][a-z]fs").unwrap());

// Gene/transcript token in parentheses, then a plain substitution
// protein change (`Lys34Asn`, `Lys34Ter`, ...).
static RE_SUBSTITUTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((.*?)\):.*?\(p\.([A-Za-z]+[0-9]+[A-Za-z]+)\)").unwrap());

///
/// Guess the GET-Evidence identifier for a clinical variant name.
///
/// The frameshift pattern is tried first, then the substitution
/// pattern; the first match wins. Returns an empty string when
/// neither matches, which callers treat as "no link derivable".
///
/// # Arguments
/// - clinical_name: free-text clinical nomenclature, e.g.
///   `"NM_000059.3(BRCA2):c.7007G>A (p.Arg2336His)"`
///
pub fn guess_evidence_id(clinical_name: &str) -> String {
    if let Some(captures) = RE_FRAMESHIFT.captures(clinical_name) {
        return format!("{}-{}Shift", &captures[1], &captures[2]);
    }
    if let Some(captures) = RE_SUBSTITUTION.captures(clinical_name) {
        // Stop-codon nomenclature normalization.
        return format!("{}-{}", &captures[1], captures[2].replacen("Ter", "Stop", 1));
    }
    String::new()
}

///
/// Get the GET-Evidence URL for a clinical variant name, or an empty
/// string when no identifier could be derived from it.
///
pub fn evidence_url(clinical_name: &str) -> String {
    let evidence_id = guess_evidence_id(clinical_name);
    if evidence_id.is_empty() {
        return String::new();
    }
    format!("{}{}", EVIDENCE_URL, evidence_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(
        "NM_000123.1(GENE1):c.100_101del (p.Lys34AsnfsTer12)",
        "GENE1-34Shift"
    )]
    #[case(
        "NM_000059.3(BRCA2):c.4478_4481del (p.Thr1493SerfsTer6)",
        "BRCA2-1493Shift"
    )]
    fn test_frameshift(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(guess_evidence_id(name), expected);
    }

    #[rstest]
    #[case("NM_000123.1(GENE1):c.100A>T (p.Lys34Ter)", "GENE1-Lys34Stop")]
    #[case("NM_000059.3(BRCA2):c.7007G>A (p.Arg2336His)", "BRCA2-Arg2336His")]
    #[case(
        "NM_006087.3(TUBB4A):c.745G>A (p.Asp249Asn)",
        "TUBB4A-Asp249Asn"
    )]
    fn test_substitution(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(guess_evidence_id(name), expected);
    }

    #[test]
    fn test_frameshift_wins_over_substitution() {
        // A frameshift name also resembling a substitution must take
        // the frameshift branch.
        let name = "NM_000123.1(GENE1):c.100_101del (p.Lys34Asnfs)";
        assert_eq!(guess_evidence_id(name), "GENE1-34Shift");
    }

    #[rstest]
    #[case("")]
    #[case("BRCA2, 3 bp deletion")]
    #[case("NM_000059.3:c.7007G>A")]
    #[case("NM_000059.3(BRCA2):c.681+1G>A")]
    fn test_no_match(#[case] name: &str) {
        assert_eq!(guess_evidence_id(name), "");
    }

    #[test]
    fn test_evidence_url() {
        assert_eq!(
            evidence_url("NM_000123.1(GENE1):c.100A>T (p.Lys34Ter)"),
            "http://evidence.pgp-hms.org/GENE1-Lys34Stop"
        );
        assert_eq!(evidence_url("no protein change here"), "");
    }
}
