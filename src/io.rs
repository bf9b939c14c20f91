// src/io.rs

//! Text files around the core: sample streams and precomputed twiddle tables.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::string::{String, ToString};
use std::vec::Vec;

use num_complex::Complex;

use crate::common::FftError;
use crate::fft::bitrev::check_size;
use crate::fft::twiddle::{validate_table, TwiddleProvider};
use crate::format::{ComplexCustomFloat, CustomFloat};

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse { line: usize, text: String },
    Truncated { expected: usize, found: usize },
    Fft(FftError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "I/O error: {e}"),
            LoadError::Parse { line, text } => write!(f, "line {line}: cannot parse {text:?}"),
            LoadError::Truncated { expected, found } => {
                write!(f, "expected {expected} samples, file has {found}")
            }
            LoadError::Fft(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Fft(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> Self {
        LoadError::Io(e)
    }
}

impl From<FftError> for LoadError {
    fn from(e: FftError) -> Self {
        LoadError::Fft(e)
    }
}

/// Reads every whitespace-separated integer of `reader`.
fn read_integers<R: BufRead, T: core::str::FromStr>(reader: R) -> Result<Vec<T>, LoadError> {
    let mut values = Vec::new();
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value = token
                .parse()
                .map_err(|_| LoadError::Parse { line: n + 1, text: token.to_string() })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Reads `size` samples from separate real and imaginary streams, one integer per line.
pub fn read_samples<R: BufRead, I: BufRead>(
    re: R,
    im: I,
    size: usize,
) -> Result<Vec<(i32, i32)>, LoadError> {
    let re: Vec<i32> = read_integers(re)?;
    let im: Vec<i32> = read_integers(im)?;

    let found = re.len().min(im.len());
    if found < size {
        return Err(LoadError::Truncated { expected: size, found });
    }
    Ok(re.into_iter().zip(im).take(size).collect())
}

/// Opens `re_path` and `im_path` and reads `size` samples from them.
pub fn load_samples(re_path: &Path, im_path: &Path, size: usize) -> Result<Vec<(i32, i32)>, LoadError> {
    let re = BufReader::new(File::open(re_path)?);
    let im = BufReader::new(File::open(im_path)?);
    read_samples(re, im, size)
}

/// Writes one `re    im` pair per line.
pub fn write_samples<W: Write>(mut writer: W, samples: &[(i32, i32)]) -> io::Result<()> {
    for (re, im) in samples {
        writeln!(writer, "{}    {}", re, im)?;
    }
    writer.flush()
}

/// Reads a twiddle table for `size` points.
///
/// Each line holds `re.ex re.sig re.man im.ex im.sig im.man`. Fields are masked
/// to their bit widths and otherwise trusted.
pub fn read_twiddles<R: BufRead>(reader: R, size: usize) -> Result<Vec<ComplexCustomFloat>, LoadError> {
    let fields: Vec<u32> = read_integers(reader)?;
    let mut table: Vec<ComplexCustomFloat> = fields
        .chunks_exact(6)
        .map(|f| Complex::new(field_float(f[0], f[1], f[2]), field_float(f[3], f[4], f[5])))
        .collect();

    validate_table(&table, size)?;
    if table.len() > size / 2 {
        log::warn!("Twiddle table has {} entries, using the first {}", table.len(), size / 2);
        table.truncate(size / 2);
    }
    Ok(table)
}

fn field_float(exponent: u32, sign: u32, mantissa: u32) -> CustomFloat {
    CustomFloat::new(sign & 1 == 1, (exponent & 0x3F) as u8, (mantissa & 0xFFFF) as u16)
}

/// File name of the precomputed table for `size`: `fp23ww_<log2(size/2)>.dat`,
/// with a `_tay` suffix for Taylor-refined tables above 8192 points.
pub fn twiddle_file_name(size: usize, use_taylor: bool) -> Result<String, FftError> {
    let half_bits = check_size(size)? - 1;
    let suffix = if half_bits > 12 && use_taylor { "_tay" } else { "" };
    Ok(std::format!("fp23ww_{}{}.dat", half_bits, suffix))
}

/// Twiddle tables stored as text files in one directory.
#[derive(Debug, Clone)]
pub struct TwiddleDir {
    dir: PathBuf,
}

impl TwiddleDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, size: usize, use_taylor: bool) -> Result<PathBuf, FftError> {
        Ok(self.dir.join(twiddle_file_name(size, use_taylor)?))
    }
}

impl TwiddleProvider for TwiddleDir {
    type Error = LoadError;

    fn twiddles(&self, size: usize, use_taylor: bool) -> Result<Vec<ComplexCustomFloat>, LoadError> {
        let path = self.path_for(size, use_taylor)?;
        log::debug!("Loading twiddles from {}", path.display());
        read_twiddles(BufReader::new(File::open(&path)?), size)
    }
}
