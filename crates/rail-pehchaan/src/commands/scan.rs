use pehchaan_core::{PartCatalog, PartRecord, ScanOutcome, ScanSession};
use std::fmt::Write;

pub fn run(code: &str, json: bool) -> anyhow::Result<()> {
    let catalog = PartCatalog::demo();
    let mut session = ScanSession::new(&catalog);

    session.start()?;
    match session.decode(code)? {
        ScanOutcome::Found(part) if json => {
            println!("{}", serde_json::to_string_pretty(part)?);
        }
        ScanOutcome::Found(part) => print!("{}", render_part(part)),
        ScanOutcome::NotFound(code) => {
            println!("Part not found: {code}");
            println!("Try one of: {}", catalog.codes().join(", "));
        }
        ScanOutcome::NotScanned => println!("Nothing scanned"),
    }

    Ok(())
}

pub fn render_part(part: &PartRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", part.name, part.id);
    let _ = writeln!(out, "  Type:              {}", part.part_type);
    let _ = writeln!(out, "  Status:            {}", part.status);
    let _ = writeln!(out, "  Location:          {}", part.location);
    let _ = writeln!(out, "  Manufactured:      {}", part.manufacturing_date);
    let _ = writeln!(out, "  Installed:         {}", part.installation_date);
    let _ = writeln!(out, "  Next maintenance:  {}", part.next_maintenance);
    if !part.specifications.is_empty() {
        let _ = writeln!(out, "  Specifications:");
        for (key, value) in part.specifications.iter() {
            let _ = writeln!(out, "    {key}: {value}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_part() {
        let catalog = PartCatalog::demo();
        let part = catalog.lookup("RP001").unwrap();
        let text = render_part(part);
        assert!(text.starts_with("Railway Wheel Set (RP001)"));
        assert!(text.contains("Specifications:"));
        let diameter = text.find("Diameter").unwrap();
        let speed = text.find("Speed Rating").unwrap();
        assert!(diameter < speed);
    }

    #[test]
    fn test_scan_unknown_code_is_not_an_error() {
        assert!(run("RP999", false).is_ok());
        assert!(run("RP003", true).is_ok());
    }
}
