//! Video Card Gamma Tag Type (vcgt)
//!
//! Private Apple tag encoding display-calibration curves, either as a
//! per-channel integer lookup table (subtype 0) or as per-channel
//! gamma/min/max formula triples (subtype 1). Conversions exist in both
//! directions, along with two LUT-smoothing passes.

use crate::error::{Error, Result};
use crate::icc::primitives::{TypeSignature, u16fixed16_bytes, u16fixed16_number, uint16_number, uint32_number};

/// Largest value representable at a given entry size
fn max_value(entry_size: u16) -> f64 {
    256f64.powi(entry_size as i32) - 1.0
}

/// One formula channel: output = min + input^gamma * (max - min)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VcgtChannel {
    pub gamma: f64,
    pub min: f64,
    pub max: f64,
}

/// Formula form of the vcgt tag (subtype 1)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VcgtFormula {
    pub red: VcgtChannel,
    pub green: VcgtChannel,
    pub blue: VcgtChannel,
}

/// Table form of the vcgt tag (subtype 0)
#[derive(Debug, Clone, PartialEq)]
pub struct VcgtTable {
    pub channels: u16,
    pub entry_count: u16,
    /// Bytes per entry: 1, 2, 4, or 8
    pub entry_size: u16,
    /// Per-channel entry values
    pub data: Vec<Vec<u64>>,
}

/// A decoded vcgt tag
#[derive(Debug, Clone, PartialEq)]
pub enum VideoCardGamma {
    Table(VcgtTable),
    Formula(VcgtFormula),
}

impl VideoCardGamma {
    /// Parse a full vcgt tag, including its 8-byte type header
    pub fn parse(data: &[u8]) -> Result<Self> {
        let subtype = uint32_number(data.get(8..).ok_or(Error::Truncated {
            expected: 12,
            actual: data.len(),
        })?)?;
        match subtype {
            0 => Ok(Self::Table(VcgtTable::parse(data)?)),
            1 => Ok(Self::Formula(VcgtFormula::parse(data)?)),
            other => Err(Error::CorruptedData(format!(
                "unknown vcgt subtype {other}"
            ))),
        }
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Table(t) => t.encode(),
            Self::Formula(f) => f.encode(),
        }
    }
}

impl VcgtFormula {
    fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < 48 {
            return Err(Error::Truncated {
                expected: 48,
                actual: data.len(),
            });
        }
        let field = |i: usize| u16fixed16_number(&data[12 + i * 4..16 + i * 4]);
        let channel = |i: usize| -> Result<VcgtChannel> {
            Ok(VcgtChannel {
                gamma: field(i * 3)?,
                min: field(i * 3 + 1)?,
                max: field(i * 3 + 2)?,
            })
        };
        Ok(Self {
            red: channel(0)?,
            green: channel(1)?,
            blue: channel(2)?,
        })
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::VCGT.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&1u32.to_be_bytes());
        for ch in [self.red, self.green, self.blue] {
            out.extend_from_slice(&u16fixed16_bytes(ch.gamma));
            out.extend_from_slice(&u16fixed16_bytes(ch.min));
            out.extend_from_slice(&u16fixed16_bytes(ch.max));
        }
        out
    }

    /// Evaluate each channel at `amount` evenly spaced inputs, range 0..1
    pub fn normalized_values(&self, amount: usize) -> Vec<[f64; 3]> {
        let step = 1.0 / (amount - 1) as f64;
        (0..amount)
            .map(|i| {
                let eval = |ch: VcgtChannel| ch.min + (step * i as f64).powf(ch.gamma) * (ch.max - ch.min);
                [eval(self.red), eval(self.green), eval(self.blue)]
            })
            .collect()
    }

    /// Evaluate the formula into a table of `entry_count` entries at
    /// `entry_size` bytes each
    pub fn to_table(&self, entry_count: u16, entry_size: u16) -> VcgtTable {
        let maxv = max_value(entry_size);
        let data = [self.red, self.green, self.blue]
            .iter()
            .map(|ch| {
                (0..entry_count)
                    .map(|i| {
                        let t = i as f64 / (entry_count - 1) as f64;
                        let v = ch.min + t.powf(ch.gamma) * (ch.max - ch.min);
                        (v * maxv).round().clamp(0.0, maxv) as u64
                    })
                    .collect()
            })
            .collect();
        VcgtTable {
            channels: 3,
            entry_count,
            entry_size,
            data,
        }
    }
}

impl VcgtTable {
    fn parse(data: &[u8]) -> Result<Self> {
        let channels = uint16_number(data.get(12..).ok_or(Error::Truncated {
            expected: 18,
            actual: data.len(),
        })?)?;
        let entry_count = uint16_number(&data[14..])?;
        let entry_size = uint16_number(&data[16..])?;
        if !matches!(entry_size, 1 | 2 | 4 | 8) {
            return Err(Error::CorruptedData(format!(
                "unsupported vcgt entry size {entry_size}"
            )));
        }

        let entry_size_us = entry_size as usize;
        let needed = 18 + channels as usize * entry_count as usize * entry_size_us;
        if data.len() < needed {
            return Err(Error::Truncated {
                expected: needed,
                actual: data.len(),
            });
        }

        let mut table = Vec::with_capacity(channels as usize);
        for i in 0..channels as usize {
            let mut channel = Vec::with_capacity(entry_count as usize);
            for j in 0..entry_count as usize {
                let at = 18 + (i * entry_count as usize + j) * entry_size_us;
                let entry = &data[at..at + entry_size_us];
                let value = match entry_size {
                    1 => entry[0] as u64,
                    2 => uint16_number(entry)? as u64,
                    4 => uint32_number(entry)? as u64,
                    _ => crate::icc::primitives::uint64_number(entry)?,
                };
                channel.push(value);
            }
            table.push(channel);
        }

        Ok(Self {
            channels,
            entry_count,
            entry_size,
            data: table,
        })
    }

    /// Re-encode to full tag bytes
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&TypeSignature::VCGT.to_bytes());
        out.extend_from_slice(&[0u8; 4]);
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&(self.data.len() as u16).to_be_bytes());
        out.extend_from_slice(&self.entry_count.to_be_bytes());
        out.extend_from_slice(&self.entry_size.to_be_bytes());
        for channel in &self.data {
            for &v in channel {
                match self.entry_size {
                    1 => out.push(v as u8),
                    2 => out.extend_from_slice(&(v as u16).to_be_bytes()),
                    4 => out.extend_from_slice(&(v as u32).to_be_bytes()),
                    _ => out.extend_from_slice(&v.to_be_bytes()),
                }
            }
        }
        out
    }

    /// Table entries normalized to 0..1, optionally decimated to `amount`
    /// rows
    pub fn normalized_values(&self, amount: Option<usize>) -> Vec<Vec<f64>> {
        let maxv = max_value(self.entry_size);
        let n = self.entry_count as usize;
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| self.data.iter().map(|ch| ch[i] as f64 / maxv).collect())
            .collect();
        match amount {
            Some(amount) if amount < n && amount > 1 => {
                let step = n as f64 / (amount - 1) as f64;
                rows.into_iter()
                    .enumerate()
                    .filter(|(i, _)| {
                        *i == 0 || ((i + 1) as f64) % step < 1.0 || i + 1 == n
                    })
                    .map(|(_, row)| row)
                    .collect()
            }
            _ => rows,
        }
    }

    /// Fit per-channel gamma/min/max by sampling the curve at 50% input,
    /// using the two middle table entries
    pub fn to_formula(&self) -> Result<VcgtFormula> {
        if self.data.len() != 3 {
            return Err(Error::CorruptedData(format!(
                "vcgt formula fit needs 3 channels, found {}",
                self.data.len()
            )));
        }
        let maxv = max_value(self.entry_size);
        let fit = |channel: &[u64]| -> Result<VcgtChannel> {
            if channel.len() < 2 {
                return Err(Error::CorruptedData(
                    "vcgt channel too short for formula fit".to_string(),
                ));
            }
            let l = (channel.len() - 1) as f64 / 2.0;
            let lo = channel[l.floor() as usize] as f64;
            let hi = channel[l.ceil() as usize] as f64;
            let min = channel[0] as f64 / maxv;
            let max = channel[channel.len() - 1] as f64 / maxv;
            let mid = (lo + hi) / 2.0 / maxv;
            let frac = (mid - min) / (max - min);
            if !frac.is_finite() || frac <= 0.0 {
                return Err(Error::CorruptedData(
                    "vcgt channel is not monotonically increasing".to_string(),
                ));
            }
            Ok(VcgtChannel {
                gamma: frac.ln() / 0.5f64.ln(),
                min,
                max,
            })
        };
        Ok(VcgtFormula {
            red: fit(&self.data[0])?,
            green: fit(&self.data[1])?,
            blue: fit(&self.data[2])?,
        })
    }

    /// Linearly resample every channel to `length` entries
    pub fn resampled(&self, length: usize) -> Self {
        let data: Vec<Vec<u64>> = self
            .data
            .iter()
            .map(|channel| {
                let n = channel.len();
                (0..length)
                    .map(|j| {
                        let pos = j as f64 * (n - 1) as f64 / (length - 1) as f64;
                        let lo = channel[pos.floor() as usize] as f64;
                        let hi = channel[(pos.ceil() as usize).min(n - 1)] as f64;
                        (lo + pos.fract() * (hi - lo)).round() as u64
                    })
                    .collect()
            })
            .collect();
        Self {
            channels: self.channels,
            entry_count: length as u16,
            entry_size: self.entry_size,
            data,
        }
    }

    /// Smooth each channel by resampling to `resample_len` points and
    /// re-sampling back through a Catmull-Rom fit
    pub fn smooth_cr(&mut self, resample_len: usize) {
        let resized = self.resampled(resample_len);
        for (channel, control) in self.data.iter_mut().zip(&resized.data) {
            let n = channel.len();
            if n < 2 {
                continue;
            }
            let step = (resample_len - 1) as f64 / (n - 1) as f64;
            let points: Vec<f64> = control.iter().map(|&v| v as f64).collect();
            for (j, v) in channel.iter_mut().enumerate() {
                *v = catmull_rom(&points, j as f64 * step).round().max(0.0) as u64;
            }
        }
    }

    /// Smooth each channel with `passes` applications of a weighted moving
    /// average. The window must be odd-length and at least 3 wide (defaults
    /// to {1, 1, 1} otherwise) and shrinks near the array boundaries rather
    /// than wrapping.
    pub fn smooth_avg(&mut self, passes: usize, window: Option<&[f64]>) {
        let window: Vec<f64> = match window {
            Some(w) if w.len() >= 3 && w.len() % 2 == 1 => w.to_vec(),
            _ => vec![1.0, 1.0, 1.0],
        };
        for _ in 0..passes {
            let data: Vec<Vec<u64>> = self
                .data
                .iter()
                .map(|channel| {
                    let n = channel.len();
                    channel
                        .iter()
                        .enumerate()
                        .map(|(j, &orig)| {
                            if j == 0 || j + 1 >= n {
                                return orig;
                            }
                            let mut tmp: &[f64] = &window;
                            while tmp.len() >= 3 {
                                let tl = (tmp.len() - 1) / 2;
                                if tl > 0 && j >= tl && j + tl <= n - 1 {
                                    let slice = &channel[j - tl..=j + tl];
                                    let weighted: f64 = tmp
                                        .iter()
                                        .zip(slice)
                                        .map(|(w, &s)| w * s as f64)
                                        .sum();
                                    let wsum: f64 = tmp.iter().sum();
                                    return (weighted / wsum).round() as u64;
                                }
                                tmp = &tmp[1..tmp.len() - 1];
                            }
                            orig
                        })
                        .collect()
                })
                .collect();
            self.entry_count = data.first().map_or(0, |c| c.len()) as u16;
            self.data = data;
        }
    }
}

/// Catmull-Rom interpolation through `points`, linearly extended at the
/// boundaries. The curve passes through the points exactly.
fn catmull_rom(points: &[f64], pos: f64) -> f64 {
    let n = points.len();
    if n < 3 {
        return points.get(pos.round() as usize).copied().unwrap_or(0.0);
    }
    let lbound = pos.floor() as isize - 1;
    let ubound = pos.ceil() as isize + 1;
    let t = pos.fract();

    let on_point = (lbound + 1) as usize;
    if ((lbound + 1) as f64 - pos).abs() < 1e-4 && on_point < n {
        // sitting on a datapoint, so just return it
        return points[on_point];
    }

    let upper = ((ubound + 1).max(0) as usize).min(n);
    let mut p: Vec<f64> = if lbound < 0 {
        let mut p = points[..upper].to_vec();
        while p.len() < 4 {
            p.insert(0, p[0] - (p[1] - p[0]));
        }
        p
    } else {
        let mut p = points[(lbound as usize).min(n)..upper].to_vec();
        while p.len() < 4 {
            let last = p[p.len() - 1];
            let prev = p[p.len() - 2];
            p.push(last - (prev - last));
        }
        p
    };
    p.truncate(4);

    let t2 = t * t;
    0.5 * ((2.0 * p[1])
        + (-p[0] + p[2]) * t
        + ((2.0 * p[0]) - (5.0 * p[1]) + (4.0 * p[2]) - p[3]) * t2
        + (-p[0] + (3.0 * p[1]) - (3.0 * p[2]) + p[3]) * (t2 * t))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(gamma: f64) -> VcgtFormula {
        let ch = VcgtChannel {
            gamma,
            min: 0.0,
            max: 1.0,
        };
        VcgtFormula {
            red: ch,
            green: ch,
            blue: ch,
        }
    }

    #[test]
    fn test_formula_roundtrip_bytes() {
        let f = VideoCardGamma::Formula(formula(2.2));
        let bytes = f.encode();
        let parsed = VideoCardGamma::parse(&bytes).unwrap();
        match parsed {
            VideoCardGamma::Formula(p) => {
                assert!((p.red.gamma - 2.2).abs() < 1e-4);
                assert!((p.blue.max - 1.0).abs() < 1e-4);
            }
            other => panic!("expected formula, got {other:?}"),
        }
    }

    #[test]
    fn test_table_roundtrip_bytes() {
        let table = formula(1.8).to_table(16, 2);
        let bytes = VideoCardGamma::Table(table.clone()).encode();
        let parsed = VideoCardGamma::parse(&bytes).unwrap();
        assert_eq!(parsed, VideoCardGamma::Table(table));
    }

    #[test]
    fn test_formula_to_table_endpoints() {
        let table = formula(2.2).to_table(256, 2);
        assert_eq!(table.data[0][0], 0);
        assert_eq!(table.data[0][255], 65535);
        // midpoint should be 0.5^2.2 of full scale
        let mid = table.data[0][128] as f64 / 65535.0;
        assert!((mid - (128.0 / 255.0f64).powf(2.2)).abs() < 0.001);
    }

    #[test]
    fn test_table_to_formula_recovers_gamma() {
        for gamma in [1.0, 1.8, 2.2, 2.4] {
            let fitted = formula(gamma).to_table(256, 2).to_formula().unwrap();
            assert!(
                (fitted.red.gamma - gamma).abs() < 0.05,
                "gamma {gamma}: fitted {}",
                fitted.red.gamma
            );
            assert!(fitted.red.min.abs() < 0.01);
            assert!((fitted.red.max - 1.0).abs() < 0.01);
        }
    }

    #[test]
    fn test_unknown_subtype() {
        let mut data = b"vcgt\0\0\0\0".to_vec();
        data.extend_from_slice(&2u32.to_be_bytes());
        assert!(VideoCardGamma::parse(&data).is_err());
    }

    #[test]
    fn test_resample() {
        let table = formula(1.0).to_table(256, 2);
        let small = table.resampled(17);
        assert_eq!(small.entry_count, 17);
        assert_eq!(small.data[0][0], 0);
        assert_eq!(small.data[0][16], 65535);
        // linear curve stays linear after resampling
        let mid = small.data[0][8] as f64;
        assert!((mid - 65535.0 / 2.0).abs() < 300.0);
    }

    #[test]
    fn test_smooth_avg_preserves_linear() {
        let mut table = formula(1.0).to_table(64, 2);
        let before = table.data[0].clone();
        table.smooth_avg(2, None);
        for (a, b) in before.iter().zip(&table.data[0]) {
            assert!((*a as i64 - *b as i64).abs() <= 1, "{a} vs {b}");
        }
    }

    #[test]
    fn test_smooth_avg_flattens_spike() {
        let mut table = formula(1.0).to_table(64, 2);
        let clean = table.data[0][32];
        table.data[0][32] = clean + 8000;
        table.smooth_avg(1, None);
        let smoothed = table.data[0][32];
        assert!(smoothed < clean + 4000, "spike survived: {smoothed}");
    }

    #[test]
    fn test_smooth_cr_preserves_endpoints() {
        let mut table = formula(2.2).to_table(256, 2);
        table.smooth_cr(64);
        assert_eq!(table.data[0][0], 0);
        assert_eq!(table.data[0][255], 65535);
    }

    #[test]
    fn test_catmull_rom_passes_through_points() {
        let points = [0.0, 10.0, 40.0, 90.0, 160.0];
        for (i, &p) in points.iter().enumerate() {
            assert!((catmull_rom(&points, i as f64) - p).abs() < 1e-9);
        }
        // between points the curve stays monotone for this convex input
        let v = catmull_rom(&points, 1.5);
        assert!(v > 10.0 && v < 40.0);
    }

    #[test]
    fn test_normalized_values() {
        let f = formula(1.0);
        let rows = f.normalized_values(3);
        assert_eq!(rows.len(), 3);
        assert!((rows[1][0] - 0.5).abs() < 1e-9);

        let table = f.to_table(8, 2);
        let rows = table.normalized_values(None);
        assert_eq!(rows.len(), 8);
        assert!((rows[7][2] - 1.0).abs() < 1e-9);
    }
}
