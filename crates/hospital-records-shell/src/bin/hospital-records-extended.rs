//! Hospital patient record system with ward and doctor assignment
//! (`patients_extended.csv`).

use anyhow::Result;
use hospital_records_core::StoreConfig;

fn main() -> Result<()> {
    hospital_records_shell::logging::init();
    hospital_records_shell::run(StoreConfig::extended())?;
    Ok(())
}
