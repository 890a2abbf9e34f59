use anyhow::Context;
use contracts::usecases::u510_analyze_sales::SalesDataset;
use std::io::Write;
use std::path::Path;

use crate::usecases::u510_analyze_sales::parse_dataset;

/// Загрузить набор данных из JSON-файла.
///
/// Ошибки структуры возвращаются как `SalesError` внутри `anyhow::Error`,
/// чтобы вызывающий код мог их распознать через `downcast_ref`.
pub fn load_dataset(path: &Path) -> anyhow::Result<SalesDataset> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("dataset {} is not valid JSON", path.display()))?;
    let dataset = parse_dataset(&value)?;

    tracing::info!(
        "Loaded dataset {}: {} products, {} sellers, {} purchase records",
        path.display(),
        dataset.products.len(),
        dataset.sellers.len(),
        dataset.purchase_records.len()
    );
    Ok(dataset)
}

/// Записать отчёт в файл или в stdout
pub fn write_output(path: Option<&Path>, contents: &str) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            if !contents.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}
