use crate::conversion::engine::{ConversionEngine, JsonData};
use crate::conversion::{ConversionConfig, ConversionResult};
use crate::parser::CsvSource;
use tracing::warn;

/// Batch convert multiple CsvSource inputs. Optionally continue on errors.
pub fn convert_batch_sources(
    sources: Vec<CsvSource>,
    config: &ConversionConfig,
    continue_on_error: bool,
) -> ConversionResult<Vec<(CsvSource, JsonData)>> {
    let engine = ConversionEngine::new(config.clone());
    let mut results = Vec::new();

    for src in sources {
        match engine.convert_from_source(&src) {
            Ok(json) => results.push((src, json)),
            Err(e) if continue_on_error => {
                warn!(
                    source = %src.source_type().description(),
                    error = %e.user_message(),
                    "skipping source"
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(results)
}
