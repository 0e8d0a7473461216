//! `scan` - extract fields from an OCR transcript and report gaps.

use crate::cli::ScanArgs;
use crate::error::Result;
use crate::output::Formatter;
use placard_extractor::FieldExtractor;
use placard_gatekeeper::Gatekeeper;
use std::io::Read;
use tracing::debug;

/// Run extraction + validation over a transcript file (or stdin).
///
/// Unreadable bytes are replaced rather than treated as fatal: a garbled
/// transcript degrades to missing fields and manual entry, mirroring how
/// an OCR failure upstream is handled.
pub fn execute_scan(args: ScanArgs, formatter: &Formatter) -> Result<()> {
    let raw = match &args.file {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    let text = String::from_utf8_lossy(&raw);
    debug!(len = text.len(), "scanning transcript");

    let record = FieldExtractor::default().extract(&text);
    let report = Gatekeeper::new().validate(&record);

    formatter.scan_result(&record, &report)
}
