use crate::types::NormalizedRecord;
use std::fmt;
use std::io::Write;

impl fmt::Display for NormalizedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Location: ({}, {})",
            self.position.latitude, self.position.longitude
        )?;
        writeln!(f, "Air Quality: {}", self.concentration)?;
        writeln!(f, "Time: {}", self.timestamp.format("%Y-%m-%d %H:%M:%S"))?;
        write!(f, "Color: {}", self.severity_color)
    }
}

/// Write each record in order, with two blank lines after each one.
pub fn render_records<W: Write>(records: &[NormalizedRecord], mut out: W) -> std::io::Result<()> {
    for record in records {
        writeln!(out, "{record}")?;
        writeln!(out, "\n")?;
    }
    out.flush()
}
