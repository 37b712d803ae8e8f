//! CSV rendering.

use crate::error::{OutputError, OutputResult};
use crate::scanner::PortResult;

/// Render results as `Port,Status` CSV without a trailing newline.
pub fn render_csv(results: &[PortResult]) -> OutputResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    wtr.write_record(["Port", "Status"])
        .map_err(|e| OutputError::Render(e.to_string()))?;

    for result in results {
        wtr.write_record([result.port.to_string(), result.open.to_string()])
            .map_err(|e| OutputError::Render(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| OutputError::Render(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| OutputError::Render(e.to_string()))?;

    Ok(content.trim_end_matches('\n').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Port;

    #[test]
    fn test_render_csv() {
        let results = vec![
            PortResult::new(Port::new(80).unwrap(), true),
            PortResult::new(Port::new(443).unwrap(), false),
        ];
        assert_eq!(
            render_csv(&results).unwrap(),
            "Port,Status\n80,true\n443,false"
        );
    }

    #[test]
    fn test_render_csv_empty() {
        assert_eq!(render_csv(&[]).unwrap(), "Port,Status");
    }
}
