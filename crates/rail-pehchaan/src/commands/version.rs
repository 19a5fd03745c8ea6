pub fn run() -> anyhow::Result<()> {
    println!("rail-pehchaan {}", env!("CARGO_PKG_VERSION"));
    println!("Railway component tracking with QR lookup and an assistant");
    Ok(())
}
