use costar_core::record::CastRecord;

/// Parse one tab-separated credits row: `actor<TAB>title<TAB>year`.
/// Rows with any other field count, or a non-numeric year, yield `None`.
pub fn parse_record(line: &str) -> Option<CastRecord> {
    let mut fields = line.split('\t');
    let actor = fields.next()?;
    let title = fields.next()?;
    let year = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let year: u16 = year.trim().parse().ok()?;
    Some(CastRecord::new(actor, title, year))
}

/// Parse one tab-separated query row: `start<TAB>end`.
pub fn parse_pair(line: &str) -> Option<(String, String)> {
    let mut fields = line.split('\t');
    let start = fields.next()?;
    let end = fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Some((start.to_string(), end.trim_end_matches('\r').to_string()))
}
