use crate::cases::CaseRecord;
use std::fmt::{Display, Formatter};

const HEADLINE_CHARS: usize = 50;

/// One-line summary used in case listings: `Case 3: <first 50 chars>...`.
pub fn headline(case: &CaseRecord) -> String {
    let short: String = case.description.chars().take(HEADLINE_CHARS).collect();
    format!("Case {}: {short}...", case.id)
}

/// Every field of a case, one per line.
pub struct CaseDetails<'a>(pub &'a CaseRecord);

impl Display for CaseDetails<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let c = self.0;
        writeln!(f, "ID: {}", c.id)?;
        writeln!(f, "Description: {}", c.description)?;
        writeln!(f, "Category: {}", c.category)?;
        writeln!(f, "Consent Status: {}", c.consent_status)?;
        writeln!(f, "AI Assessment: {}", c.ai_assessment)?;
        writeln!(f, "Resolution: {}", c.resolution)?;
        write!(f, "Date: {}", c.date.format("%Y-%m-%d"))
    }
}
