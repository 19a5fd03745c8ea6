//! QR scan session: one scanner at a time, one outcome at a time

use crate::catalog::PartCatalog;
use crate::types::PartRecord;

/// What the last scan produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome<'a> {
    /// Nothing scanned since start or reset
    NotScanned,
    Found(&'a PartRecord),
    /// A code was read but is not in the catalog
    NotFound(&'a str),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("A scan is already running")]
    AlreadyScanning,

    #[error("No scan is running")]
    NotScanning,
}

pub struct ScanSession<'a> {
    catalog: &'a PartCatalog,
    scanning: bool,
    last_code: Option<String>,
}

impl<'a> ScanSession<'a> {
    pub fn new(catalog: &'a PartCatalog) -> Self {
        Self {
            catalog,
            scanning: false,
            last_code: None,
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    /// Acquire the scanner
    pub fn start(&mut self) -> Result<(), ScanError> {
        if self.scanning {
            return Err(ScanError::AlreadyScanning);
        }
        self.scanning = true;
        tracing::debug!("scanner started");
        Ok(())
    }

    /// Release the scanner; a no-op when idle
    pub fn stop(&mut self) {
        if self.scanning {
            self.scanning = false;
            tracing::debug!("scanner stopped");
        }
    }

    /// Handle a code read by the running scanner, then stop
    pub fn decode(&mut self, code: &str) -> Result<ScanOutcome<'_>, ScanError> {
        if !self.scanning {
            return Err(ScanError::NotScanning);
        }
        self.stop();
        Ok(self.record(code))
    }

    /// Pick one of the demo codes without running the scanner
    pub fn select(&mut self, code: &str) -> ScanOutcome<'_> {
        self.record(code)
    }

    /// Clear the outcome so the next view is "not scanned"
    pub fn reset(&mut self) {
        self.last_code = None;
    }

    pub fn outcome(&self) -> ScanOutcome<'_> {
        match &self.last_code {
            None => ScanOutcome::NotScanned,
            Some(code) => match self.catalog.lookup(code) {
                Some(part) => ScanOutcome::Found(part),
                None => ScanOutcome::NotFound(code),
            },
        }
    }

    fn record(&mut self, code: &str) -> ScanOutcome<'_> {
        self.last_code = Some(code.to_string());
        let outcome = self.outcome();
        match outcome {
            ScanOutcome::Found(part) => tracing::info!(code, part = %part.name, "part found"),
            ScanOutcome::NotFound(_) => tracing::info!(code, "part not found"),
            ScanOutcome::NotScanned => {}
        }
        outcome
    }
}

impl Drop for ScanSession<'_> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_outcome_is_not_scanned() {
        let catalog = PartCatalog::demo();
        let session = ScanSession::new(&catalog);
        assert_eq!(session.outcome(), ScanOutcome::NotScanned);
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_decode_found_stops_scanner() {
        let catalog = PartCatalog::demo();
        let mut session = ScanSession::new(&catalog);
        session.start().unwrap();

        let outcome = session.decode("RP002").unwrap();
        match outcome {
            ScanOutcome::Found(part) => assert_eq!(part.name, "Rail Track Section"),
            other => panic!("expected Found, got {other:?}"),
        }
        assert!(!session.is_scanning());
    }

    #[test]
    fn test_decode_unknown_is_not_found() {
        let catalog = PartCatalog::demo();
        let mut session = ScanSession::new(&catalog);
        session.start().unwrap();

        assert_eq!(session.decode("XYZ").unwrap(), ScanOutcome::NotFound("XYZ"));
        assert_ne!(session.outcome(), ScanOutcome::NotScanned);
    }

    #[test]
    fn test_no_concurrent_scans() {
        let catalog = PartCatalog::demo();
        let mut session = ScanSession::new(&catalog);
        session.start().unwrap();
        assert_eq!(session.start(), Err(ScanError::AlreadyScanning));
        session.stop();
        assert!(session.start().is_ok());
    }

    #[test]
    fn test_decode_requires_running_scanner() {
        let catalog = PartCatalog::demo();
        let mut session = ScanSession::new(&catalog);
        assert_eq!(session.decode("RP001"), Err(ScanError::NotScanning));
    }

    #[test]
    fn test_select_and_reset() {
        let catalog = PartCatalog::demo();
        let mut session = ScanSession::new(&catalog);

        assert!(matches!(session.select("RP003"), ScanOutcome::Found(_)));
        session.reset();
        assert_eq!(session.outcome(), ScanOutcome::NotScanned);
    }
}
