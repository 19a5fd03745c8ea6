use pehchaan_core::{PartCatalog, DEMO_CODES};

pub fn run() -> anyhow::Result<()> {
    let catalog = PartCatalog::demo();
    println!("Demo QR codes:");
    for code in DEMO_CODES {
        match catalog.lookup(code) {
            Some(part) => println!("  {code}  {}", part.name),
            None => println!("  {code}"),
        }
    }
    Ok(())
}
