// Scale assembly and Scala (.scl) output.
//
// Turns the raw block intervals into the final step list (exact dedup,
// exact ascending sort, optional 2/1 on top) and serializes it together with
// the comma intervals:
//
//   ! Created by <attribution>
//   Fokker periodicity blocks generated by commas: 81/80 128/125
//   <count>
//   !
//   <one interval per line>
//
// The description line keeps a trailing space after the last comma.
// Rendering is a pure string function; `ScaleFile::write` only adds the
// `<base>.scl` file around it.

use crate::interval::octave;
use num_rational::BigRational;
use rustc_hash::FxHashSet;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// File extension of Scala scale files.
pub const SCALE_EXTENSION: &str = "scl";

/// Attribution used on the first line when none is configured.
pub const DEFAULT_ATTRIBUTION: &str = "fokker_blocks";

/// Drop repeated intervals, keeping the first occurrence of each value.
pub fn dedup_intervals(raw: Vec<BigRational>) -> Vec<BigRational> {
    let mut seen = FxHashSet::default();
    raw.into_iter().filter(|v| seen.insert(v.clone())).collect()
}

/// A scale ready to be written: header data plus the final step list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleFile {
    pub attribution: String,
    /// Comma intervals, in basis order, for the description line.
    pub commas: Vec<BigRational>,
    /// Steps in ascending order.
    pub intervals: Vec<BigRational>,
}

impl ScaleFile {
    /// Assemble the final step list from raw block intervals.
    pub fn assemble(
        commas: Vec<BigRational>,
        raw_intervals: Vec<BigRational>,
        append_octave: bool,
    ) -> Self {
        let mut intervals = dedup_intervals(raw_intervals);
        intervals.sort();
        if append_octave {
            intervals.push(octave());
        }
        ScaleFile {
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            commas,
            intervals,
        }
    }

    pub fn with_attribution(mut self, attribution: impl Into<String>) -> Self {
        self.attribution = attribution.into();
        self
    }

    /// The scale file contents.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "! Created by {}", self.attribution);
        out.push_str("Fokker periodicity blocks generated by commas: ");
        for comma in &self.commas {
            let _ = write!(out, "{comma} ");
        }
        out.push('\n');
        let _ = write!(out, "{}\n!\n", self.intervals.len());
        for interval in &self.intervals {
            let _ = writeln!(out, "{interval}");
        }
        out
    }

    /// Write `<base_name>.scl` and return its path.
    ///
    /// The file handle is dropped (and closed) before returning on every path,
    /// including a failed write or flush.
    pub fn write(&self, base_name: &Path) -> std::io::Result<PathBuf> {
        let path = scale_path(base_name);
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        Ok(path)
    }
}

/// `<base_name>.scl`. The extension is appended, never substituted, so a
/// base name with dots keeps all of them.
pub fn scale_path(base_name: &Path) -> PathBuf {
    let mut name = base_name.as_os_str().to_owned();
    name.push(".");
    name.push(SCALE_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;
    use num_traits::One;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn test_dedup_exact_value() {
        // 162/160 and 81/80 are the same value.
        let raw = vec![ratio(81, 80), ratio(6, 5), ratio(162, 160)];
        assert_eq!(dedup_intervals(raw), vec![ratio(81, 80), ratio(6, 5)]);
    }

    #[test]
    fn test_assemble_sorts_exactly() {
        // Pythagorean comma (531441/524288) sits just above 81/80.
        let raw = vec![ratio(531441, 524288), ratio(3, 2), ratio(81, 80), BigRational::one()];
        let scale = ScaleFile::assemble(vec![], raw, false);
        assert_eq!(
            scale.intervals,
            vec![BigRational::one(), ratio(81, 80), ratio(531441, 524288), ratio(3, 2)]
        );
        for pair in scale.intervals.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_assemble_octave() {
        let raw = vec![ratio(9, 8), ratio(5, 4), ratio(9, 8)];
        let scale = ScaleFile::assemble(vec![], raw.clone(), true);
        assert_eq!(scale.intervals, vec![ratio(9, 8), ratio(5, 4), octave()]);
        let last = scale.intervals.last().unwrap();
        assert!(scale.intervals.iter().all(|v| v <= last));

        let scale = ScaleFile::assemble(vec![], raw, false);
        assert_eq!(scale.intervals.len(), 2);
    }

    #[test]
    fn test_render_layout() {
        let scale = ScaleFile::assemble(
            vec![ratio(81, 80), ratio(128, 125)],
            vec![ratio(6, 5), BigRational::one()],
            true,
        )
        .with_attribution("Tester");
        assert_eq!(
            scale.render(),
            "! Created by Tester\n\
             Fokker periodicity blocks generated by commas: 81/80 128/125 \n\
             3\n\
             !\n\
             1\n\
             6/5\n\
             2\n"
        );
    }

    #[test]
    fn test_scale_path_appends_extension() {
        assert_eq!(scale_path(Path::new("output")), PathBuf::from("output.scl"));
        assert_eq!(scale_path(Path::new("dir/block.v2")), PathBuf::from("dir/block.v2.scl"));
    }

    #[test]
    fn test_render_empty() {
        let scale = ScaleFile::assemble(vec![], vec![], false);
        assert_eq!(
            scale.render(),
            "! Created by fokker_blocks\nFokker periodicity blocks generated by commas: \n0\n!\n"
        );
    }
}
