// Per-Point JSONL Time Series Recorder
// Outputs one JSON line per time step for independent analysis

use gauntlet_engine::TimeSeriesPoint;
use std::io::Write;

/// Write a generated series to a JSONL file, one point per line.
pub fn write_jsonl(
    series: &[TimeSeriesPoint],
    path: &std::path::Path,
) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    for point in series {
        let line = serde_json::to_string(point)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
        writeln!(file, "{}", line)?;
    }
    Ok(())
}
