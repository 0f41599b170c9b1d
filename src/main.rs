//! Demonstration entry point for the Payroll Engine.
//!
//! Computes the net salary for a fixed sample payslip and classifies a few
//! sample speed readings. Tables are read from the directory named by
//! `PAYROLL_ENGINE_CONFIG` when it is set, otherwise the built-in tables
//! are used. Log verbosity follows `RUST_LOG` (default `info`).

use std::env::{self, VarError};
use std::process::ExitCode;

use payroll_engine::calculation::{calculate_net_salary, classify_speed_with_policy};
use payroll_engine::config::{ConfigLoader, PayrollSchedule, SpeedPolicy};
use payroll_engine::error::{EngineError, EngineResult};
use rust_decimal::Decimal;
use tracing::error;
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "PAYROLL_ENGINE_CONFIG";

const SAMPLE_SPEEDS: [f64; 6] = [50.0, 70.0, 74.0, 75.0, 130.0, 136.0];

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Demonstration failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> EngineResult<()> {
    let (schedule, speed_policy) = load_tables()?;

    let result = calculate_net_salary(Decimal::from(50_000), Decimal::from(10_000), &schedule)?;
    let breakdown = &result.breakdown;

    println!("Schedule:          {}", result.schedule_name);
    println!("Gross salary:      {}", breakdown.gross_salary);
    println!("PAYE:              {}", breakdown.paye_tax);
    println!("Health levy:       {}", breakdown.health_levy);
    println!("Pension:           {}", breakdown.pension_contribution);
    println!("Total deductions:  {}", breakdown.total_deductions);
    println!("Net Salary:        {}", breakdown.net_salary);
    println!();

    for speed in SAMPLE_SPEEDS {
        println!("{:>5} km/h: {}", speed, classify_speed_with_policy(speed, &speed_policy));
    }

    Ok(())
}

fn load_tables() -> EngineResult<(PayrollSchedule, SpeedPolicy)> {
    match env::var(CONFIG_ENV) {
        Ok(dir) => Ok(ConfigLoader::load(dir)?.into_parts()),
        Err(VarError::NotPresent) => Ok((PayrollSchedule::kenya_2023(), SpeedPolicy::default())),
        Err(VarError::NotUnicode(dir)) => Err(EngineError::ConfigParseError {
            path: dir.to_string_lossy().into_owned(),
            message: format!("{} is not valid Unicode", CONFIG_ENV),
        }),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    #[test]
    fn test_config_dir_selection() {
        // SAFETY: no other test in this binary reads the environment
        unsafe { env::remove_var(CONFIG_ENV) };
        let (schedule, _) = load_tables().unwrap();
        assert_eq!(schedule.name, "kra_2023");

        unsafe { env::set_var(CONFIG_ENV, OsString::from_vec(vec![b'c', b'f', 0x80])) };
        let result = load_tables();
        unsafe { env::remove_var(CONFIG_ENV) };

        match result {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert_eq!(message, "PAYROLL_ENGINE_CONFIG is not valid Unicode");
            }
            other => panic!("expected ConfigParseError, got {:?}", other.map(|_| ())),
        }
    }
}
