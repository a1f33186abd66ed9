#![allow(dead_code)]

use rand::Rng;
use rand::seq::SliceRandom;
use staffroll::domain::employee::Role;
use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub fn write_roster_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(file.as_file_mut());
        wtr.write_record(["name", "role"])?;
        for (name, role) in rows {
            wtr.write_record([*name, *role])?;
        }
        wtr.flush()?;
    }
    Ok(file)
}

pub fn write_salary_table(json: &str) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// `count` employees with generated names and randomly chosen roles.
pub fn random_staff(count: usize) -> Vec<(String, Role)> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|i| {
            let role = *Role::ALL.choose(&mut rng).expect("roles are non-empty");
            (format!("employee-{}-{}", i, rng.gen_range(100..1000)), role)
        })
        .collect()
}
