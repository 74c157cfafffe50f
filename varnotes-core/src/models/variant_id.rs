use std::fmt::{self, Display};

/// Base URL of the ExAC browser entry for a single variant.
pub const EXAC_VARIANT_URL: &str = "http://exac.broadinstitute.org/variant/";

///
/// VariantId struct, the parsed form of a b37 variant identifier
/// string (`chrom-pos-ref-var`, e.g. `1-40758116-C-T`).
///
/// The chromosome is stored after remapping: numeric codes 23, 24
/// and 25 become `X`, `Y` and `M`; every other code is kept as-is.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct VariantId {
    pub chrom: String,
    pub pos: u64,
    pub ref_allele: String,
    pub var_allele: String,
}

fn remap_chromosome(raw: &str) -> String {
    match raw {
        "23" => "X".to_string(),
        "24" => "Y".to_string(),
        "25" => "M".to_string(),
        other => other.to_string(),
    }
}

fn is_allele(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| matches!(b, b'A' | b'C' | b'G' | b'T'))
}

impl VariantId {
    ///
    /// Parse a raw b37 identifier into a [VariantId].
    ///
    /// Returns `None` when the string does not match the
    /// `chrom-pos-ref-var` pattern (one or two digits, a positive
    /// integer position, and `{A,C,G,T}+` alleles). A `None` means
    /// "unparseable, skip derived fields", never a failure.
    ///
    /// # Arguments
    /// - raw: identifier string, e.g. `"1-40758116-C-T"`
    ///
    pub fn parse(raw: &str) -> Option<VariantId> {
        let mut fields = raw.split('-');

        let chrom = fields.next()?;
        let pos = fields.next()?;
        let ref_allele = fields.next()?;
        let var_allele = fields.next()?;
        if fields.next().is_some() {
            return None;
        }

        if chrom.is_empty() || chrom.len() > 2 || !chrom.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let pos: u64 = match pos.parse() {
            Ok(p) => p,
            Err(_) => return None,
        };
        if !is_allele(ref_allele) || !is_allele(var_allele) {
            return None;
        }

        Some(VariantId {
            chrom: remap_chromosome(chrom),
            pos,
            ref_allele: ref_allele.to_string(),
            var_allele: var_allele.to_string(),
        })
    }

    ///
    /// Get the display string of the variant, e.g. `"Chr1: 40758116 C > T"`.
    ///
    pub fn as_string(&self) -> String {
        format!(
            "Chr{}: {} {} > {}",
            self.chrom, self.pos, self.ref_allele, self.var_allele
        )
    }

    ///
    /// Get the cross-reference key used to build external lookup URLs,
    /// e.g. `"1-40758116-C-T"`.
    ///
    /// Uses the remapped chromosome label (`X`, not `23`), so for the
    /// sex/mitochondrial chromosomes the key differs from the raw b37
    /// identifier the variant arrived under.
    ///
    pub fn cross_ref_key(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.chrom, self.pos, self.ref_allele, self.var_allele
        )
    }

    ///
    /// Get the ExAC browser URL for this variant.
    ///
    pub fn exac_url(&self) -> String {
        format!("{}{}", EXAC_VARIANT_URL, self.cross_ref_key())
    }
}

impl Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
