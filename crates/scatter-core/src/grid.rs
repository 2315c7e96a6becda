// File: crates/scatter-core/src/grid.rs
// Summary: Tick placement on "nice" 1/2/2.5/5 x 10^k steps, category ticks, and tick label formatting.

/// Tick positions inside a range and the text printed at each one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ticks {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
}

impl Ticks {
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> + '_ {
        self.values.iter().copied().zip(self.labels.iter().map(String::as_str))
    }
}

/// Roughly `count` ticks covering `[min, max]`, all lying inside the range.
pub fn nice_ticks(min: f64, max: f64, count: u32) -> Ticks {
    if !min.is_finite() || !max.is_finite() || max <= min || count == 0 {
        return Ticks::default();
    }

    let raw = (max - min) / f64::from(count);
    let k = raw.log10().floor();
    let base = raw / 10f64.powf(k);
    // tolerance absorbs float noise in `raw / 10^k`
    let nice_base = match base {
        b if b <= 1.0 + 1e-9 => 1.0,
        b if b <= 2.0 + 1e-9 => 2.0,
        b if b <= 2.5 + 1e-9 => 2.5,
        b if b <= 5.0 + 1e-9 => 5.0,
        _ => 10.0,
    };
    let step = nice_base * 10f64.powf(k);

    let mut decimals = (-step.log10().floor()).max(0.0) as usize;
    if nice_base == 2.5 { decimals += 1; }

    let eps = step * 1e-9;
    let first = (min / step).ceil() as i64;
    let last = ((max + eps) / step).floor() as i64;
    let values: Vec<f64> = (first..=last)
        .map(|i| i as f64 * step)
        .map(|v| if v.abs() < eps { 0.0 } else { v })
        .collect();
    let labels = values.iter().map(|&v| format_tick(v, decimals)).collect();

    Ticks { values, labels }
}

/// One tick per category at positions `0..n`, keeping those inside `[min, max]`.
pub fn category_ticks(categories: &[String], min: f64, max: f64) -> Ticks {
    let (values, labels) = categories
        .iter()
        .enumerate()
        .map(|(i, c)| (i as f64, c.clone()))
        .filter(|(v, _)| *v >= min && *v <= max)
        .unzip();
    Ticks { values, labels }
}

pub fn format_tick(v: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, v)
}
