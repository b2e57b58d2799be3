use crate::base::VerifyError;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds a reference coordinate recorded from a previous simulation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    /// Expected coordinate
    pub expected: f64,

    /// Absolute tolerance
    pub tolerance: f64,
}

impl ReferenceRecord {
    /// Allocates a new instance
    pub fn new(expected: f64, tolerance: f64) -> Result<Self, StrError> {
        if !expected.is_finite() {
            return Err("expected value must be finite");
        }
        if tolerance <= 0.0 {
            return Err("tolerance must be > 0.0");
        }
        Ok(ReferenceRecord { expected, tolerance })
    }

    /// Checks that `|actual - expected| < tolerance`
    pub fn check(&self, actual: f64) -> Result<(), VerifyError> {
        let diff = f64::abs(actual - self.expected);
        // written so that NaN fails
        if diff < self.tolerance {
            Ok(())
        } else {
            Err(VerifyError::RegressionMismatch {
                actual,
                expected: self.expected,
                tolerance: self.tolerance,
            })
        }
    }

    /// Reads a JSON file containing the reference
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let data: ReferenceRecord = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        ReferenceRecord::new(data.expected, data.tolerance)
    }

    /// Writes a JSON file with the reference
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ReferenceRecord;
    use crate::base::{VerifyError, DEFAULT_TEST_DIR};

    #[test]
    fn new_handles_errors() {
        assert_eq!(
            ReferenceRecord::new(f64::NAN, 0.01).err(),
            Some("expected value must be finite")
        );
        assert_eq!(ReferenceRecord::new(0.28, 0.0).err(), Some("tolerance must be > 0.0"));
    }

    #[test]
    fn check_works() {
        let reference = ReferenceRecord::new(0.28, 1e-2).unwrap();
        assert_eq!(reference.check(0.28), Ok(()));
        assert_eq!(reference.check(0.2799), Ok(()));
        assert_eq!(reference.check(0.2705), Ok(()));
        assert_eq!(
            reference.check(0.30),
            Err(VerifyError::RegressionMismatch {
                actual: 0.30,
                expected: 0.28,
                tolerance: 1e-2
            })
        );
        assert!(reference.check(f64::NAN).is_err());
    }

    #[test]
    fn json_file_works() {
        let reference = ReferenceRecord::new(0.19, 1e-2).unwrap();
        let path = format!("{}/reference_record_json_file_works.json", DEFAULT_TEST_DIR);
        reference.write_json(&path).unwrap();
        let read = ReferenceRecord::read_json(&path).unwrap();
        assert_eq!(read, reference);
        assert_eq!(
            ReferenceRecord::read_json("/tmp/meltcheck/__missing__.json").err(),
            Some("file not found")
        );
    }
}
