use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the raw samples of the three curves, e.g., as given in an input file
///
/// The samples are stored verbatim; ordering and lengths are only checked when a
/// [crate::material::SampledCurveSet] is built from these parameters.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ParamSampledCurves {
    /// Wetting-phase saturation samples of the capillary pressure curve
    pub sw_pcwn: Vec<f64>,

    /// Capillary pressure samples
    pub pcwn: Vec<f64>,

    /// Wetting-phase saturation samples of the wetting relative permeability curve
    pub sw_krw: Vec<f64>,

    /// Wetting-phase relative permeability samples
    pub krw: Vec<f64>,

    /// Wetting-phase saturation samples of the non-wetting relative permeability curve
    pub sw_krn: Vec<f64>,

    /// Non-wetting-phase relative permeability samples
    pub krn: Vec<f64>,
}

impl ParamSampledCurves {
    /// Returns sample parameters with ascending saturations (pc in kPa)
    pub fn sample() -> Self {
        ParamSampledCurves {
            sw_pcwn: vec![0.1, 0.4, 0.7, 1.0],
            pcwn: vec![0.3, 0.2, 0.1, 0.0],
            sw_krw: vec![0.1, 0.5, 1.0],
            krw: vec![0.0, 0.2, 1.0],
            sw_krn: vec![0.0, 0.5, 0.9],
            krn: vec![1.0, 0.3, 0.0],
        }
    }

    /// Returns the samples of [ParamSampledCurves::sample] given back-to-front
    ///
    /// **Note:** The capillary pressure curve is given in large values (pc in Pa) such
    /// that it is *not* reversed by finalize; the relative permeability curves are.
    pub fn sample_reversed() -> Self {
        ParamSampledCurves {
            sw_pcwn: vec![1.0, 0.7, 0.4, 0.1],
            pcwn: vec![0.0, 100.0, 200.0, 300.0],
            sw_krw: vec![1.0, 0.5, 0.1],
            krw: vec![1.0, 0.2, 0.0],
            sw_krn: vec![0.9, 0.5, 0.0],
            krn: vec![0.0, 0.3, 0.8],
        }
    }

    /// Reads a JSON file containing the parameters
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let param = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(param)
    }

    /// Writes a JSON file with the parameters
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
