use super::PointCloudSink;

use crate::cloud::PointCloud;
use crate::error::{Error, Result};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Significant digits written per number, matching the default precision
/// of C++ streams that other pcache tooling uses.
const SIGNIFICANT_DIGITS: usize = 6;

/// Writes colored point clouds in the ASCII pcache format.
///
/// Colors are written as floats in `[0, 1]` with an alpha of one. Points
/// without a color, because their texel was out of bounds, are written black.
pub struct PcacheSink {
    pcache_path: PathBuf
}

impl PcacheSink {
    pub fn new<P: AsRef<Path>>(pcache_path: P) -> PcacheSink {
        PcacheSink { pcache_path: pcache_path.as_ref().to_path_buf() }
    }
}

impl PointCloudSink for PcacheSink {
    fn serialize(&self, cloud: &PointCloud) -> Result<()> {
        if !cloud.has_colors() {
            return Err(Error::MissingColors);
        }

        info!("Writing {} points to pcache file {:?}...", cloud.len(), self.pcache_path);

        let mut pcache = BufWriter::new(File::create(&self.pcache_path)?);
        write_pcache(cloud, &mut pcache)?;
        pcache.flush()?;

        info!("Ok");
        Ok(())
    }
}

/// Writes the header and one line per point to the given writer.
pub fn write_pcache<W: Write>(cloud: &PointCloud, pcache: &mut W) -> Result<()> {
    if !cloud.has_colors() {
        return Err(Error::MissingColors);
    }

    writeln!(pcache, "pcache")?;
    writeln!(pcache, "format ascii 1.0")?;
    writeln!(pcache, "comment Export with mesh-sampler")?;
    writeln!(pcache, "elements {}", cloud.len())?;
    for property in &["position.x", "position.y", "position.z", "color.r", "color.g", "color.b", "color.a"] {
        writeln!(pcache, "property float {}", property)?;
    }
    writeln!(pcache, "end_header")?;

    for point in cloud.iter() {
        let [r, g, b] = point.color.unwrap_or([0, 0, 0]);

        writeln!(
            pcache,
            "{} {} {} {} {} {} 1",
            format_float(point.position.x),
            format_float(point.position.y),
            format_float(point.position.z),
            format_float(r as f32 / 255.0),
            format_float(g as f32 / 255.0),
            format_float(b as f32 / 255.0)
        )?;
    }

    Ok(())
}

/// Formats like `%g`: shortest of fixed or scientific notation with six
/// significant digits and trailing zeros removed.
fn format_float(value: f32) -> String {
    let value = value as f64;

    if value == 0.0 {
        return String::from(if value.is_sign_negative() { "-0" } else { "0" });
    }

    if value.is_nan() {
        return String::from("nan");
    }

    if value.is_infinite() {
        return String::from(if value > 0.0 { "inf" } else { "-inf" });
    }

    // Rounding can carry into the next power of ten, so the exponent is
    // taken from the rounded scientific representation
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exponent) = match scientific.find('e') {
        Some(e_idx) => (&scientific[..e_idx], scientific[e_idx+1..].parse::<i32>().unwrap_or(0)),
        None => return scientific
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS as i32 {
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            if exponent < 0 { '-' } else { '+' },
            exponent.abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
