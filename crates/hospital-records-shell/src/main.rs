//! Hospital patient record system, basic layout (`patients.csv`).

use anyhow::Result;
use hospital_records_core::StoreConfig;

fn main() -> Result<()> {
    hospital_records_shell::logging::init();
    hospital_records_shell::run(StoreConfig::default())?;
    Ok(())
}
